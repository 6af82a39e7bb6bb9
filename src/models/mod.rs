mod memory;
mod window;

pub use memory::ClosedWindowMemory;
pub use window::{OpenWindow, WindowHandle, WindowView};

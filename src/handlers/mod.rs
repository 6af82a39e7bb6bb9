mod window_handler;

pub mod serial_window_search;
pub mod threaded_window_search;

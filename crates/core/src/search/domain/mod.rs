pub mod window_search;

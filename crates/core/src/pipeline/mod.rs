pub mod align_text_use_case;
pub mod alignment_logger;

pub mod sentence;
pub mod tokenizer;

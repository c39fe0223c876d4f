pub mod word_tokenizer;

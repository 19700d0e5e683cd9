pub mod arg_map;
pub mod token;
pub mod tokenizer;

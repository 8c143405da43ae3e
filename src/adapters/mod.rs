// Adapters layer: concrete implementations for the outside world (text input, storage).

pub mod parser;
pub mod storage;

// src/core/mod.rs

pub mod classifier;
pub mod engine;
pub mod ranker;
pub mod tokenizer;
pub mod types;
pub mod variants;

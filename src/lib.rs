// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;
pub mod phrase;
pub mod vocabulary;
pub mod workbook;

pub use crate::core::classifier::classify;
pub use crate::core::engine::WordEngine;
pub use crate::core::ranker::suggest;
pub use crate::core::tokenizer::tokenize;
pub use crate::core::types::{ClassificationResult, Difficulty, MatchMode, WordSuggestion};
pub use crate::error::Error;
pub use crate::workbook::{Translator, Workbook};

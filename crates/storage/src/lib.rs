#![forbid(unsafe_code)]

pub mod repository;

pub use repository::{InMemoryVocabulary, StorageError, VocabularyRepository};

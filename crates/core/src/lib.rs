#![forbid(unsafe_code)]

pub mod cloze;
pub mod error;
pub mod evaluator;
pub mod model;

pub use error::Error;
pub use evaluator::is_correct;

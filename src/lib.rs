pub mod api;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod playlist;
pub mod scorer;
pub mod tokenizer;

pub use error::{ClumpyError, ClumpyResult};

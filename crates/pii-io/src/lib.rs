//! Line-oriented file collaborators for text corpora

pub mod error;
pub mod lines;

pub use error::{IoError, Result};
pub use lines::{read_data, read_pii, write_data};

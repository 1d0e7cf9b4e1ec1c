//! Core PII detection and anonymization
//!
//! This crate contains:
//! - The PII text wrapper (`Pii`) with one detector per category
//! - The category enum and its placeholders
//! - The rule table (one compiled pattern per category)
//! - The ordered whole-text redactor

pub mod category;
pub mod redactor;
pub mod rules;
pub mod text;

pub use category::{Category, ParseCategoryError};
pub use redactor::{Redaction, Redactor};
pub use text::{Inspection, Pii};

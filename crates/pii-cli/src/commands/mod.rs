pub mod categories;
pub mod check;
pub mod scrub;

use pii_config::Config;
use pii_core::{Category, Redactor};

/// Redactor over the explicit categories, or the configured ones when none were given
pub fn redactor_for(config: &Config, categories: Vec<Category>) -> Redactor {
    if categories.is_empty() {
        Redactor::with_categories(config.enabled_categories())
    } else {
        Redactor::with_categories(categories)
    }
}

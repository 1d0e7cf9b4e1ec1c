use serde::{Deserialize, Serialize};

use crate::rules::rule;
use crate::{Category, Pii};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redaction {
    pub category: Category,
    pub count: usize,
}

/// Ordered redaction over a set of categories
#[derive(Debug, Clone)]
pub struct Redactor {
    categories: Vec<Category>,
}

impl Redactor {
    /// Redactor over every category
    pub fn new() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
        }
    }

    /// Redactor over a subset. Rules still run in `Category::ALL` order.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let wanted: Vec<Category> = categories.into_iter().collect();
        Self {
            categories: Category::ALL
                .into_iter()
                .filter(|category| wanted.contains(category))
                .collect(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Anonymize every enabled category, each rule running over the previous output
    pub fn redact(&self, text: &Pii) -> (Pii, Vec<Redaction>) {
        let mut result = text.as_str().to_string();
        let mut redactions = Vec::new();

        for category in &self.categories {
            let (replaced, count) = rule(*category).replace_all(&result);

            if count > 0 {
                result = replaced.into_owned();
                redactions.push(Redaction {
                    category: *category,
                    count,
                });
            }
        }

        (Pii::new(result), redactions)
    }

    /// Count matches per category without rewriting anything
    pub fn scan(&self, text: &Pii) -> Vec<Redaction> {
        self.categories
            .iter()
            .filter_map(|category| {
                let count = rule(*category).find_iter(text.as_str()).count();
                (count > 0).then_some(Redaction {
                    category: *category,
                    count,
                })
            })
            .collect()
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

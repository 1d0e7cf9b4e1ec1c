//! PII categories and their placeholders

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of personally identifiable information a rule detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    UsPhone,
    Email,
    Ipv4,
    Ipv6,
    Name,
    StreetAddress,
    AccountNumber,
    CreditCard,
    AtHandle,
    Ssn,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown PII category: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All categories, in the order the redactor applies them.
    ///
    /// Street addresses come before names and emails before handles, so the
    /// broader rule never eats part of a more specific match.
    pub const ALL: [Category; 10] = [
        Category::Email,
        Category::Ipv6,
        Category::Ipv4,
        Category::CreditCard,
        Category::Ssn,
        Category::UsPhone,
        Category::AccountNumber,
        Category::StreetAddress,
        Category::Name,
        Category::AtHandle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::UsPhone => "us_phone",
            Category::Email => "email",
            Category::Ipv4 => "ipv4",
            Category::Ipv6 => "ipv6",
            Category::Name => "name",
            Category::StreetAddress => "street_address",
            Category::AccountNumber => "account_number",
            Category::CreditCard => "credit_card",
            Category::AtHandle => "at_handle",
            Category::Ssn => "ssn",
        }
    }

    /// Bracketed marker substituted for a match of this category
    pub fn placeholder(&self) -> &'static str {
        match self {
            Category::UsPhone => "[us phone]",
            Category::Email => "[email]",
            Category::Ipv4 => "[iPv4 address]",
            Category::Ipv6 => "[iPv6 address]",
            Category::Name => "[name]",
            Category::StreetAddress => "[street address]",
            Category::AccountNumber => "[account number]",
            Category::CreditCard => "[credit card]",
            Category::AtHandle => "[at handle]",
            Category::Ssn => "[ssn number]",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::Category;
use crate::rules::rule;

/// Immutable piece of text under PII inspection.
///
/// Anonymizing never touches `self`; it returns a new `Pii`. Two wrappers (or
/// a wrapper and a plain string) are equal when their text is equal, so an
/// anonymization that found nothing compares equal to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pii {
    text: String,
}

/// Result of the flag-style [`Pii::inspect`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    Detected(bool),
    Anonymized(Pii),
}

impl Pii {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }

    /// Whether the category's rule matches anywhere in the text
    pub fn detect(&self, category: Category) -> bool {
        rule(category).is_match(&self.text)
    }

    /// New value with every match of the category replaced by its placeholder
    pub fn anonymize(&self, category: Category) -> Pii {
        let (text, _) = rule(category).replace_all(&self.text);
        Pii::new(text)
    }

    /// Matched fragments, in order of appearance
    pub fn find(&self, category: Category) -> Vec<&str> {
        rule(category)
            .find_iter(&self.text)
            .map(|m| m.as_str())
            .collect()
    }

    /// Detect when `anonymize` is false, anonymize when it is true
    pub fn inspect(&self, category: Category, anonymize: bool) -> Inspection {
        if anonymize {
            Inspection::Anonymized(self.anonymize(category))
        } else {
            Inspection::Detected(self.detect(category))
        }
    }

    /// True if any category matches
    pub fn has_pii(&self) -> bool {
        Category::ALL.into_iter().any(|category| self.detect(category))
    }

    pub fn detected_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.detect(*category))
            .collect()
    }

    pub fn has_us_phone(&self) -> bool {
        self.detect(Category::UsPhone)
    }

    pub fn anonymize_us_phone(&self) -> Pii {
        self.anonymize(Category::UsPhone)
    }

    pub fn has_email(&self) -> bool {
        self.detect(Category::Email)
    }

    pub fn anonymize_email(&self) -> Pii {
        self.anonymize(Category::Email)
    }

    pub fn has_ipv4(&self) -> bool {
        self.detect(Category::Ipv4)
    }

    pub fn anonymize_ipv4(&self) -> Pii {
        self.anonymize(Category::Ipv4)
    }

    pub fn has_ipv6(&self) -> bool {
        self.detect(Category::Ipv6)
    }

    pub fn anonymize_ipv6(&self) -> Pii {
        self.anonymize(Category::Ipv6)
    }

    pub fn has_name(&self) -> bool {
        self.detect(Category::Name)
    }

    pub fn anonymize_name(&self) -> Pii {
        self.anonymize(Category::Name)
    }

    pub fn has_street_address(&self) -> bool {
        self.detect(Category::StreetAddress)
    }

    pub fn anonymize_street_address(&self) -> Pii {
        self.anonymize(Category::StreetAddress)
    }

    pub fn has_account_number(&self) -> bool {
        self.detect(Category::AccountNumber)
    }

    pub fn anonymize_account_number(&self) -> Pii {
        self.anonymize(Category::AccountNumber)
    }

    pub fn has_credit_card(&self) -> bool {
        self.detect(Category::CreditCard)
    }

    pub fn anonymize_credit_card(&self) -> Pii {
        self.anonymize(Category::CreditCard)
    }

    pub fn has_at_handle(&self) -> bool {
        self.detect(Category::AtHandle)
    }

    pub fn has_ssn(&self) -> bool {
        self.detect(Category::Ssn)
    }

    pub fn anonymize_ssn(&self) -> Pii {
        self.anonymize(Category::Ssn)
    }
}

impl From<&str> for Pii {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Pii {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Pii> for String {
    fn from(pii: Pii) -> Self {
        pii.text
    }
}

impl AsRef<str> for Pii {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Deref for Pii {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Pii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

macro_rules! impl_str_eq {
    ($($other:ty),*) => {
        $(
            impl PartialEq<$other> for Pii {
                fn eq(&self, other: &$other) -> bool {
                    self.text.as_str() == AsRef::<str>::as_ref(other)
                }
            }

            impl PartialEq<Pii> for $other {
                fn eq(&self, other: &Pii) -> bool {
                    AsRef::<str>::as_ref(self) == other.text.as_str()
                }
            }
        )*
    };
}

impl_str_eq!(str, &str, String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_clean() {
        let pii = Pii::default();
        assert_eq!(pii, "");
        assert!(!pii.has_pii());
        assert!(pii.detected_categories().is_empty());
    }

    #[test]
    fn test_equality_with_strings() {
        let pii = Pii::new("hello");
        assert_eq!(pii, "hello");
        assert_eq!(pii, "hello".to_string());
        assert_eq!("hello", pii);
        assert_eq!("hello".to_string(), pii);
        assert_eq!(pii, Pii::from("hello"));
        assert_ne!(pii, "world");
    }

    #[test]
    fn test_anonymize_leaves_original_intact() {
        let pii = Pii::new("SSN 123-45-6789, email a@b.io");
        let without_ssn = pii.anonymize_ssn();

        assert_eq!(without_ssn, "SSN [ssn number], email a@b.io");
        assert_eq!(pii, "SSN 123-45-6789, email a@b.io");
        assert!(pii.has_ssn());
        assert!(!without_ssn.has_ssn());
        assert!(without_ssn.has_email());
    }

    #[test]
    fn test_anonymize_replaces_every_occurrence() {
        let pii = Pii::new("cc 1111-2222-3333-4444 or 5555-6666-7777-8888.");
        assert_eq!(pii.anonymize_credit_card(), "cc [credit card] or [credit card].");
    }

    #[test]
    fn test_phone_anonymize_and_find() {
        let pii = Pii::new("My phone number is 970-555-1212");
        assert_eq!(pii.find(Category::UsPhone), vec!["970-555-1212"]);
        assert_eq!(pii.anonymize_us_phone(), "My phone number is [us phone]");
    }

    #[test]
    fn test_inspect_follows_flag() {
        let pii = Pii::new("My ssn is 123-45-6789");
        assert_eq!(pii.inspect(Category::Ssn, false), Inspection::Detected(true));
        assert_eq!(
            pii.inspect(Category::Ssn, true),
            Inspection::Anonymized(Pii::new("My ssn is [ssn number]"))
        );
        assert_eq!(pii.inspect(Category::Email, false), Inspection::Detected(false));
    }

    #[test]
    fn test_detected_categories_in_redaction_order() {
        let pii = Pii::new("reach @jdoe or jdoe@mail.com from 10.1.1.1");
        assert_eq!(
            pii.detected_categories(),
            vec![Category::Email, Category::Ipv4, Category::AtHandle]
        );
    }

    #[test]
    fn test_serde_is_transparent() {
        let pii = Pii::new("John Doe");
        assert_eq!(serde_json::to_string(&pii).unwrap(), "\"John Doe\"");
        let parsed: Pii = serde_json::from_str("\"John Doe\"").unwrap();
        assert_eq!(parsed, pii);
    }

    #[test]
    fn test_detectors_agree_across_threads() {
        let pii = Pii::new("John Doe, 1234 Nowhere Street, 970.555.1212, ::1");
        let expected = pii.detected_categories();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| pii.detected_categories()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

//! Input validation for the input widget.
//!
//! Validation is an ordered chain of rules. The chain reports the first rule
//! the value breaks as a [`RuleFailure`]; the widget turns that into a
//! translated message. Nothing here ever rejects input, it only describes
//! what is wrong with it.
//!
//! # Rule order
//!
//! Rules are always checked in this order, whatever order the caller listed
//! them in:
//!
//! 1. [`ValidationRule::MinLength`]
//! 2. [`ValidationRule::UpperCase`]
//! 3. [`ValidationRule::LowerCase`]
//! 4. [`ValidationRule::Number`]
//! 5. [`ValidationRule::SpecialChar`]
//! 6. [`ValidationRule::EmailFormat`] (also applied to every email input)
//! 7. [`ValidationRule::PhoneNumber`] (text inputs only)
//!
//! When no rules are configured, the input kind picks a default chain: email
//! inputs get the email check, text and password inputs get rules 1-5.
//!
//! # Example
//!
//! ```
//! use horizon_forms::widget::validator::{InputKind, RuleChain, RuleFailure, RuleSet, ValidationRule};
//!
//! let chain = RuleChain::default();
//! let rules = RuleSet::from_iter([ValidationRule::UpperCase, ValidationRule::MinLength]);
//!
//! // Both rules fail; length always wins.
//! assert_eq!(
//!     chain.evaluate("short", InputKind::Text, &rules),
//!     Some(RuleFailure::TooShort { min_length: 9 })
//! );
//! assert_eq!(chain.evaluate("Long enough", InputKind::Text, &rules), None);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use horizon_forms_core::logging::targets;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::i18n::{keys, Translator};

/// Characters accepted by the special character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationRule {
    /// At least the configured number of characters.
    MinLength,
    /// At least one ASCII uppercase letter.
    UpperCase,
    /// At least one ASCII lowercase letter.
    LowerCase,
    /// At least one of [`SPECIAL_CHARACTERS`].
    SpecialChar,
    /// At least one ASCII digit.
    Number,
    /// `local@domain.tld` shape.
    EmailFormat,
    /// Exactly nine digits.
    PhoneNumber,
    /// Every rule above.
    All,
}

impl ValidationRule {
    /// The rules `All` stands for, in evaluation order.
    pub const ORDERED: [ValidationRule; 7] = [
        ValidationRule::MinLength,
        ValidationRule::UpperCase,
        ValidationRule::LowerCase,
        ValidationRule::Number,
        ValidationRule::SpecialChar,
        ValidationRule::EmailFormat,
        ValidationRule::PhoneNumber,
    ];

    /// The rules making up the password chain, in evaluation order.
    pub const PASSWORD: [ValidationRule; 5] = [
        ValidationRule::MinLength,
        ValidationRule::UpperCase,
        ValidationRule::LowerCase,
        ValidationRule::Number,
        ValidationRule::SpecialChar,
    ];

    /// The name used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            ValidationRule::MinLength => "minLength",
            ValidationRule::UpperCase => "upperCase",
            ValidationRule::LowerCase => "lowerCase",
            ValidationRule::SpecialChar => "specialChar",
            ValidationRule::Number => "number",
            ValidationRule::EmailFormat => "emailFormat",
            ValidationRule::PhoneNumber => "phoneNumber",
            ValidationRule::All => "all",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidationRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ValidationRule::All]
            .into_iter()
            .chain(ValidationRule::ORDERED)
            .find(|rule| rule.name() == s)
            .ok_or_else(|| Error::UnknownRule(s.to_string()))
    }
}

/// The kind of value an input holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Free text.
    #[default]
    Text,
    /// Masked text.
    Password,
    /// Email address.
    Email,
    /// Numeric value.
    Number,
    /// Color value (e.g. `#4fc3f7`).
    Color,
}

/// An unordered set of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: BTreeSet<ValidationRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding only [`ValidationRule::All`].
    pub fn all() -> Self {
        Self::from_iter([ValidationRule::All])
    }

    /// Add a rule.
    pub fn insert(&mut self, rule: ValidationRule) {
        self.rules.insert(rule);
    }

    /// Add a rule using builder pattern.
    pub fn with(mut self, rule: ValidationRule) -> Self {
        self.insert(rule);
        self
    }

    /// Whether the set names `rule`, either directly or through `All`.
    pub fn contains(&self, rule: ValidationRule) -> bool {
        self.rules.contains(&rule) || self.rules.contains(&ValidationRule::All)
    }

    /// Whether no rule is configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The set with `All` replaced by the rules it stands for.
    pub fn expanded(&self) -> RuleSet {
        if self.rules.contains(&ValidationRule::All) {
            RuleSet::from_iter(ValidationRule::ORDERED)
        } else {
            self.clone()
        }
    }

    /// Iterate over the configured rules.
    pub fn iter(&self) -> impl Iterator<Item = ValidationRule> + '_ {
        self.rules.iter().copied()
    }
}

impl FromIterator<ValidationRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = ValidationRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl FromStr for RuleSet {
    type Err = Error;

    /// Parse a comma separated list such as `"minLength, upperCase"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ValidationRule::from_str)
            .collect()
    }
}

/// The first rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFailure {
    /// Fewer than `min_length` characters.
    TooShort {
        /// The configured minimum.
        min_length: usize,
    },
    /// No uppercase letter.
    MissingUppercase,
    /// No lowercase letter.
    MissingLowercase,
    /// No digit.
    MissingNumber,
    /// No special character.
    MissingSpecialChar,
    /// Not an email address.
    InvalidEmail,
    /// Not a nine digit phone number.
    InvalidPhone,
}

impl RuleFailure {
    /// The translation key for this failure.
    pub fn message_key(&self) -> &'static str {
        match self {
            RuleFailure::TooShort { .. } => keys::MIN_LENGTH,
            RuleFailure::MissingUppercase => keys::UPPERCASE,
            RuleFailure::MissingLowercase => keys::LOWERCASE,
            RuleFailure::MissingNumber => keys::NUMBER,
            RuleFailure::MissingSpecialChar => keys::SPECIAL_CHARACTER,
            RuleFailure::InvalidEmail => keys::INVALID_EMAIL,
            RuleFailure::InvalidPhone => keys::INVALID_PHONE,
        }
    }

    /// The user-facing message.
    ///
    /// The length message names the count the value has to exceed, so a
    /// minimum of 9 reads "... 8".
    pub fn message(&self, translator: &dyn Translator) -> String {
        let text = translator.lookup(self.message_key());
        match self {
            RuleFailure::TooShort { min_length } => {
                format!("{text} {}", min_length.saturating_sub(1))
            }
            _ => text,
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is valid")
    })
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^[0-9]{9}$").expect("phone pattern is valid"))
}

/// Evaluates rule sets against values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleChain {
    min_length: usize,
}

impl RuleChain {
    /// Create a chain whose length rule requires `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Check a single rule. `All` checks the whole ordered chain.
    pub fn check(&self, rule: ValidationRule, value: &str) -> Option<RuleFailure> {
        match rule {
            ValidationRule::MinLength => (value.chars().count() < self.min_length)
                .then_some(RuleFailure::TooShort {
                    min_length: self.min_length,
                }),
            ValidationRule::UpperCase => {
                (!value.chars().any(|c| c.is_ascii_uppercase())).then_some(RuleFailure::MissingUppercase)
            }
            ValidationRule::LowerCase => {
                (!value.chars().any(|c| c.is_ascii_lowercase())).then_some(RuleFailure::MissingLowercase)
            }
            ValidationRule::Number => {
                (!value.chars().any(|c| c.is_ascii_digit())).then_some(RuleFailure::MissingNumber)
            }
            ValidationRule::SpecialChar => (!value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)))
                .then_some(RuleFailure::MissingSpecialChar),
            ValidationRule::EmailFormat => {
                (!email_regex().is_match(value)).then_some(RuleFailure::InvalidEmail)
            }
            ValidationRule::PhoneNumber => {
                (!phone_regex().is_match(value)).then_some(RuleFailure::InvalidPhone)
            }
            ValidationRule::All => ValidationRule::ORDERED
                .into_iter()
                .find_map(|rule| self.check(rule, value)),
        }
    }

    /// Evaluate `value` for an input of `kind` with the configured `rules`.
    ///
    /// Returns `None` when the value is empty or passes every applicable rule.
    pub fn evaluate(&self, value: &str, kind: InputKind, rules: &RuleSet) -> Option<RuleFailure> {
        if value.is_empty() {
            return None;
        }

        let failure = if rules.is_empty() {
            self.evaluate_default(value, kind)
        } else {
            self.evaluate_custom(value, kind, rules)
        };

        tracing::trace!(target: targets::VALIDATION, ?kind, ?failure, "evaluated rule chain");
        failure
    }

    fn evaluate_custom(&self, value: &str, kind: InputKind, rules: &RuleSet) -> Option<RuleFailure> {
        let active = rules.expanded();

        if let Some(failure) = ValidationRule::PASSWORD
            .into_iter()
            .filter(|rule| active.contains(*rule))
            .find_map(|rule| self.check(rule, value))
        {
            return Some(failure);
        }

        if kind == InputKind::Email || active.contains(ValidationRule::EmailFormat) {
            if let Some(failure) = self.check(ValidationRule::EmailFormat, value) {
                return Some(failure);
            }
        }

        if kind == InputKind::Text && active.contains(ValidationRule::PhoneNumber) {
            return self.check(ValidationRule::PhoneNumber, value);
        }

        None
    }

    fn evaluate_default(&self, value: &str, kind: InputKind) -> Option<RuleFailure> {
        match kind {
            InputKind::Email => self.check(ValidationRule::EmailFormat, value),
            InputKind::Text | InputKind::Password => ValidationRule::PASSWORD
                .into_iter()
                .find_map(|rule| self.check(rule, value)),
            InputKind::Number | InputKind::Color => None,
        }
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::new(9)
    }
}

//! CLDR plural rules: which quantity strings a language needs.
//!
//! For every language the table records the *relevant* quantities, i.e.
//! the plural categories other than `other` that translations must
//! provide, and for `zero`, `one` and `two` the integer examples of
//! categories that cover more than one number (Russian `one` matches 21
//! and 31 as well, so a translation must not hardcode the number).

mod data;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use tracing::trace;

use data::RuleSet;

/// A CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::Zero,
        Quantity::One,
        Quantity::Two,
        Quantity::Few,
        Quantity::Many,
        Quantity::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Zero => "zero",
            Quantity::One => "one",
            Quantity::Two => "two",
            Quantity::Few => "few",
            Quantity::Many => "many",
            Quantity::Other => "other",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::ALL
            .into_iter()
            .find(|q| q.name() == s)
            .ok_or_else(|| format!("Unknown quantity: {s}"))
    }
}

/// A set of [`Quantity`] values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuantitySet(u8);

impl QuantitySet {
    pub const fn empty() -> Self {
        QuantitySet(0)
    }

    pub const fn with(self, quantity: Quantity) -> Self {
        QuantitySet(self.0 | quantity.bit())
    }

    pub fn insert(&mut self, quantity: Quantity) {
        self.0 |= quantity.bit();
    }

    pub fn contains(&self, quantity: Quantity) -> bool {
        self.0 & quantity.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Quantity> + '_ {
        Quantity::ALL.into_iter().filter(|q| self.contains(*q))
    }
}

impl FromIterator<Quantity> for QuantitySet {
    fn from_iter<I: IntoIterator<Item = Quantity>>(iter: I) -> Self {
        let mut set = QuantitySet::empty();
        for quantity in iter {
            set.insert(quantity);
        }
        set
    }
}

impl fmt::Debug for QuantitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for QuantitySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Read-only plural rules for all known languages.
pub struct PluralsDatabase {
    rules: HashMap<&'static str, &'static RuleSet>,
    codes: Vec<&'static str>,
}

static LATEST: Lazy<PluralsDatabase> = Lazy::new(|| PluralsDatabase::new(data::LANGUAGES));

impl PluralsDatabase {
    fn new(languages: &'static [(&'static str, &'static RuleSet)]) -> Self {
        trace!("Building plurals database for {} languages", languages.len());
        let rules: HashMap<_, _> = languages.iter().copied().collect();
        let mut codes: Vec<_> = rules.keys().copied().collect();
        codes.sort_unstable();
        Self { rules, codes }
    }

    /// The database for the current CLDR release.
    pub fn latest() -> &'static PluralsDatabase {
        &LATEST
    }

    fn rules(&self, language: &str) -> Option<&'static RuleSet> {
        self.rules.get(language).copied()
    }

    /// The quantities besides `other` that `language` distinguishes, or
    /// `None` for a language without plural data.
    pub fn relevant(&self, language: &str) -> Option<QuantitySet> {
        self.rules(language).map(|rules| rules.relevant)
    }

    /// Whether `quantity` covers more than one integer in `language`.
    pub fn has_multiple_values_for_quantity(&self, language: &str, quantity: Quantity) -> bool {
        self.find_integer_examples(language, quantity)
            .is_some_and(|examples| examples.contains(','))
    }

    /// Integer examples of `quantity` in `language`, such as
    /// `1, 21, 31, …`, for `zero`, `one` and `two` categories that match
    /// several numbers.
    pub fn find_integer_examples(&self, language: &str, quantity: Quantity) -> Option<&'static str> {
        let rules = self.rules(language)?;
        match quantity {
            Quantity::Zero => rules.zero,
            Quantity::One => rules.one,
            Quantity::Two => rules.two,
            _ => None,
        }
    }

    /// Every language code in the database, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codes.iter().copied()
    }
}

/// Extracts the language from a locale such as `pt-BR`, `pt_BR` or the
/// resource folder form `b+sr+Latn`.
pub fn language_of(locale: &str) -> String {
    let locale = locale.strip_prefix("b+").unwrap_or(locale);
    locale
        .split(['-', '_', '+'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

//! Catalog container and identifier resolution.

use crate::entry::{CatalogEntry, Company, Country, Facility};
use crate::error::{LookupError, Result};
use crate::family::ApiFamily;

/// Identifier accepted by every query operation.
///
/// Either an entry that is already resolved, or a string that still has to be
/// matched against a catalog.
#[derive(Debug)]
pub enum Identifier<'a, T> {
    /// An already resolved entry, returned unchanged.
    Entry(&'a T),
    /// A symbolic key or a code value.
    Name(&'a str),
}

impl<T> Clone for Identifier<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identifier<'_, T> {}

impl<'a, T> From<&'a str> for Identifier<'a, T> {
    fn from(value: &'a str) -> Self {
        Self::Name(value)
    }
}

impl<'a> From<&'a Country> for Identifier<'a, Country> {
    fn from(value: &'a Country) -> Self {
        Self::Entry(value)
    }
}

impl<'a> From<&'a Company> for Identifier<'a, Company> {
    fn from(value: &'a Company) -> Self {
        Self::Entry(value)
    }
}

impl<'a> From<&'a Facility> for Identifier<'a, Facility> {
    fn from(value: &'a Facility) -> Self {
        Self::Entry(value)
    }
}

/// A fixed, ordered table of entries for one API family.
#[derive(Debug)]
pub struct Catalog<T: 'static> {
    name: &'static str,
    family: ApiFamily,
    entries: &'static [T],
}

impl<T: CatalogEntry> Catalog<T> {
    /// Creates a catalog over a literal table.
    pub const fn new(name: &'static str, family: ApiFamily, entries: &'static [T]) -> Self {
        Self {
            name,
            family,
            entries,
        }
    }

    /// Catalog name used in error messages (e.g. "ALSI facility").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Family this catalog belongs to.
    pub fn family(&self) -> ApiFamily {
        self.family
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &'static [T] {
        self.entries
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'static, T> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry declared under `key` (case-sensitive).
    pub fn get(&self, key: &str) -> Option<&'static T> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    /// Finds the first declared entry whose code equals `code`.
    ///
    /// Codes are compared exactly, like keys, so an input never reaches a
    /// different entry by changing its case.
    pub fn find_by_code(&self, code: &str) -> Option<&'static T> {
        self.entries.iter().find(|entry| entry.code() == code)
    }

    /// Resolves an identifier to an entry.
    ///
    /// Entries pass through unchanged. Strings are matched against symbolic
    /// keys first, then against code values in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownIdentifier`] when a string matches
    /// neither a key nor a code.
    pub fn resolve<'a>(&self, identifier: impl Into<Identifier<'a, T>>) -> Result<&'a T> {
        match identifier.into() {
            Identifier::Entry(entry) => Ok(entry),
            Identifier::Name(input) => self
                .get(input)
                .or_else(|| self.find_by_code(input))
                .ok_or_else(|| LookupError::UnknownIdentifier {
                    catalog: self.name,
                    input: input.to_string(),
                }),
        }
    }
}

impl<T: CatalogEntry> IntoIterator for &Catalog<T> {
    type Item = &'static T;
    type IntoIter = std::slice::Iter<'static, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: Catalog<Country> = Catalog::new(
        "sample country",
        ApiFamily::Agsi,
        &[
            Country {
                key: "GB_pre",
                code: "GB",
                name: "United Kingdom (Pre-Brexit)",
            },
            Country {
                key: "GB",
                code: "GB*",
                name: "United Kingdom (Post-Brexit)",
            },
            Country {
                key: "uk_duplicate",
                code: "GB*",
                name: "Duplicate code",
            },
        ],
    );

    #[test]
    fn test_key_wins_over_code() {
        // "GB" is both a key (post-Brexit) and a code (pre-Brexit).
        let entry = SAMPLE.resolve("GB").unwrap();
        assert_eq!(entry.code, "GB*");
    }

    #[test]
    fn test_code_fallback_returns_first_declared() {
        let entry = SAMPLE.resolve("GB*").unwrap();
        assert_eq!(entry.key, "GB");
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(SAMPLE.find_by_code("gb*").is_none());
        let err = SAMPLE.resolve("gb").unwrap_err();
        assert_eq!(err.input(), "gb");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        // "gb_pre" is not a key and not a code.
        let err = SAMPLE.resolve("gb_pre").unwrap_err();
        assert_eq!(err.catalog(), "sample country");
        assert_eq!(err.input(), "gb_pre");
    }

    #[test]
    fn test_entry_is_identity() {
        let custom = Country {
            key: "XX",
            code: "XX",
            name: "Not in any catalog",
        };
        let resolved = SAMPLE.resolve(&custom).unwrap();
        assert!(std::ptr::eq(resolved, &custom));
    }

    #[test]
    fn test_iteration_order() {
        let keys: Vec<_> = SAMPLE.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["GB_pre", "GB", "uk_duplicate"]);
        assert_eq!(SAMPLE.len(), 3);
        assert!(!SAMPLE.is_empty());
    }
}

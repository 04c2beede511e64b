//! Localized user-facing strings.

use std::collections::HashMap;
use std::fmt;

/// Key of a localized string resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    ErrorRetrievingData,
}

impl StringKey {
    /// Resource key, as written in string tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            StringKey::ErrorRetrievingData => "error_retrieving_data",
        }
    }

    fn default_text(&self) -> &'static str {
        match self {
            StringKey::ErrorRetrievingData => {
                "Something went wrong while retrieving your data."
            },
        }
    }
}

impl fmt::Display for StringKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String table for one locale.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Strings {
    locale: String,
    table: HashMap<String, String>,
}

impl Strings {
    /// Create a new [`Strings`] table.
    pub fn new(
        locale: impl Into<String>,
        table: HashMap<String, String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            table,
        }
    }

    /// Locale of this table.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolve a key.
    ///
    /// Falls back to the built-in english text when the table has no entry.
    pub fn resolve(&self, key: StringKey) -> &str {
        self.table
            .get(key.as_str())
            .map(String::as_str)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| key.default_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let strings = Strings::default();
        assert_eq!(
            strings.resolve(StringKey::ErrorRetrievingData),
            "Something went wrong while retrieving your data."
        );

        let table = HashMap::from([(
            "error_retrieving_data".to_owned(),
            "Impossible de récupérer vos données.".to_owned(),
        )]);
        let strings = Strings::new("fr", table);
        assert_eq!(strings.locale(), "fr");
        assert_eq!(
            strings.resolve(StringKey::ErrorRetrievingData),
            "Impossible de récupérer vos données."
        );
    }

    #[test]
    fn test_empty_entry_uses_default() {
        let table = HashMap::from([(
            "error_retrieving_data".to_owned(),
            String::new(),
        )]);
        let strings = Strings::new("en", table);
        assert_eq!(
            strings.resolve(StringKey::ErrorRetrievingData),
            "Something went wrong while retrieving your data."
        );
        assert_eq!(
            StringKey::ErrorRetrievingData.to_string(),
            "error_retrieving_data"
        );
    }
}

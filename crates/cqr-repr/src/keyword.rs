//! Keyword leaf nodes.

use serde::{Deserialize, Serialize};

use crate::{
    options::{OptionValue, Options},
    repr::Representation,
};

/// A single search term or phrase, optionally restricted to fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// The literal search text. No escaping or quoting rules are imposed.
    query: String,
    /// Field qualifiers in caller order. Empty means an unqualified search.
    #[serde(default)]
    fields: Vec<String>,
    /// Extension options.
    #[serde(default)]
    options: Options,
}

impl Keyword {
    /// Creates a keyword restricted to `fields`, with an empty option store.
    pub fn new<I, S>(query: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            query: query.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            options: Options::new(),
        }
    }

    /// Creates an unqualified keyword.
    pub fn term(query: impl Into<String>) -> Self {
        Self::new(query, Vec::<String>::new())
    }

    /// The search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The field qualifiers, in the order they were given.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Representation for Keyword {
    fn options(&self) -> &Options {
        &self.options
    }

    fn with_option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_preserves_field_order() {
        let kw = Keyword::new("cancer", ["title", "abstract"]);
        assert_eq!(kw.query(), "cancer");
        assert_eq!(kw.fields(), ["title", "abstract"]);
        assert!(kw.options().is_empty());
    }

    #[test]
    fn duplicate_fields_are_kept() {
        let kw = Keyword::new("x", ["title", "title"]);
        assert_eq!(kw.fields().len(), 2);
    }

    #[test]
    fn term_has_no_fields() {
        let kw = Keyword::term("lung");
        assert!(kw.fields().is_empty());
        assert!(kw.options().is_empty());
    }

    #[test]
    fn empty_query_is_accepted() {
        let kw = Keyword::term("");
        assert_eq!(kw.query(), "");
    }

    #[test]
    fn set_option_last_write_wins() {
        let kw = Keyword::term("lung");
        let updated = kw.set_option("boost", 1).set_option("boost", 2);
        assert_eq!(updated.get_option("boost"), Some(&json!(2)));
        assert!(kw.get_option("boost").is_none());
    }

    #[test]
    fn set_option_keeps_other_data() {
        let kw = Keyword::new("cancer", ["title"]).with_option("a", 1);
        let updated = kw.set_option("b", 2);
        assert_eq!(updated.query(), "cancer");
        assert_eq!(updated.fields(), ["title"]);
        assert_eq!(updated.get_option("a"), Some(&json!(1)));
        assert!(kw.get_option("b").is_none());
    }
}

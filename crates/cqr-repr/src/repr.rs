//! The representation contract shared by every query node.

use std::fmt;

use crate::options::{OptionValue, Options};

/// Capabilities common to keywords, Boolean queries and [`Cqr`](crate::Cqr) values.
///
/// Traversal code written against this trait never needs to know which variant it holds.
/// Nodes are values: [`set_option`](Self::set_option) returns a new node that owns its own copy
/// of the option store, and the receiver is never modified.
pub trait Representation: fmt::Display + Clone {
    /// Returns the node's option store.
    fn options(&self) -> &Options;

    /// Consumes the node and returns it with `key` mapped to `value`.
    fn with_option(self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self;

    /// Returns the option stored under `key`, or `None` if it was never set.
    fn get_option(&self, key: &str) -> Option<&OptionValue> {
        self.options().get(key)
    }

    /// Returns a copy of this node with `key` mapped to `value`. All other data is unchanged.
    fn set_option(&self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.clone().with_option(key, value)
    }

    /// Renders the node in canonical form.
    fn render(&self) -> String {
        self.to_string()
    }
}

//! Boolean query nodes.

use serde::{Deserialize, Serialize};

use crate::{
    node::Cqr,
    options::{OptionValue, Options},
    repr::Representation,
};

/// An operator applied to an ordered list of child representations.
///
/// The operator is a free-form label (`AND`, `OR`, `NOT`, or anything else). Its meaning is
/// decided by whoever interprets the tree. Child order is preserved, which matters for
/// asymmetric operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanQuery {
    /// Operator label.
    operator: String,
    /// Child nodes, in order.
    #[serde(default)]
    children: Vec<Cqr>,
    /// Extension options.
    #[serde(default)]
    options: Options,
}

impl BooleanQuery {
    /// Creates a Boolean query with an empty option store.
    pub fn new(operator: impl Into<String>, children: impl IntoIterator<Item = Cqr>) -> Self {
        Self {
            operator: operator.into(),
            children: children.into_iter().collect(),
            options: Options::new(),
        }
    }

    /// The operator label.
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// The child nodes, in order.
    pub fn children(&self) -> &[Cqr] {
        &self.children
    }

    /// Returns a copy with the child at `index` replaced, or `None` if out of range.
    pub(crate) fn replace_child(&self, index: usize, child: Cqr) -> Option<Self> {
        let mut copy = self.clone();
        *copy.children.get_mut(index)? = child;
        Some(copy)
    }
}

impl Representation for BooleanQuery {
    fn options(&self) -> &Options {
        &self.options
    }

    fn with_option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key, value);
        self
    }
}

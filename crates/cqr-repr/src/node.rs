//! The two-variant query node.

use serde::{Deserialize, Serialize};

use crate::{
    boolean::BooleanQuery,
    keyword::Keyword,
    options::{OptionValue, Options},
    render::TreeView,
    repr::Representation,
    visit::{TreeStats, Visitor},
};

/// A common query representation: either a keyword leaf or a Boolean query.
///
/// Encoded forms carry an explicit `"type"` tag (`"keyword"` or `"boolean"`), so a Boolean
/// query with no children can never be mistaken for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cqr {
    /// A search term with optional field qualifiers.
    Keyword(Keyword),

    /// An operator over an ordered list of children.
    Boolean(BooleanQuery),
}

impl Cqr {
    /// Creates a keyword node restricted to `fields`.
    pub fn keyword<I, S>(query: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keyword(Keyword::new(query, fields))
    }

    /// Creates an unqualified keyword node.
    pub fn term(query: impl Into<String>) -> Self {
        Self::Keyword(Keyword::term(query))
    }

    /// Creates a Boolean query node.
    pub fn boolean(operator: impl Into<String>, children: impl IntoIterator<Item = Self>) -> Self {
        Self::Boolean(BooleanQuery::new(operator, children))
    }

    /// Returns true for a keyword leaf.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Self::Keyword(_))
    }

    /// Returns true for a Boolean query.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Returns the keyword if this is a leaf.
    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Self::Keyword(keyword) => Some(keyword),
            Self::Boolean(_) => None,
        }
    }

    /// Returns the Boolean query if this is an internal node.
    pub fn as_boolean(&self) -> Option<&BooleanQuery> {
        match self {
            Self::Boolean(query) => Some(query),
            Self::Keyword(_) => None,
        }
    }

    /// Returns the children of a Boolean query; keywords have none.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Keyword(_) => &[],
            Self::Boolean(query) => query.children(),
        }
    }

    /// Returns the node reached by following child indices from this node.
    ///
    /// An empty path addresses this node itself.
    pub fn node_at(&self, path: &[usize]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    /// Returns a copy of this tree with an option set on the node at `path`.
    ///
    /// Only the nodes along the path are rebuilt; the receiver is unchanged. Returns `None` if
    /// the path does not address a node.
    pub fn set_option_at(
        &self,
        path: &[usize],
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<Self> {
        self.set_option_at_inner(path, key.into(), value.into())
    }

    /// Recursive worker for [`set_option_at`](Self::set_option_at).
    fn set_option_at_inner(&self, path: &[usize], key: String, value: OptionValue) -> Option<Self> {
        let Some((&index, rest)) = path.split_first() else {
            return Some(self.set_option(key, value));
        };
        let Self::Boolean(query) = self else {
            return None;
        };
        let child = query
            .children()
            .get(index)?
            .set_option_at_inner(rest, key, value)?;
        query.replace_child(index, child).map(Self::Boolean)
    }

    /// Walks the tree depth-first in pre-order, children in their original order.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.walk_at(visitor, 0);
    }

    /// Walks this subtree, reporting `depth` for this node.
    fn walk_at<V: Visitor + ?Sized>(&self, visitor: &mut V, depth: usize) {
        match self {
            Self::Keyword(keyword) => visitor.visit_keyword(keyword, depth),
            Self::Boolean(query) => {
                visitor.enter_boolean(query, depth);
                for child in query.children() {
                    child.walk_at(visitor, depth + 1);
                }
                visitor.leave_boolean(query, depth);
            }
        }
    }

    /// Collects summary statistics for the tree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.walk(&mut stats);
        stats
    }

    /// Returns an indented, multi-line view of the tree for human inspection.
    pub fn tree(&self) -> TreeView<'_> {
        TreeView::new(self)
    }
}

impl Representation for Cqr {
    fn options(&self) -> &Options {
        match self {
            Self::Keyword(keyword) => keyword.options(),
            Self::Boolean(query) => query.options(),
        }
    }

    fn with_option(self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        match self {
            Self::Keyword(keyword) => Self::Keyword(keyword.with_option(key, value)),
            Self::Boolean(query) => Self::Boolean(query.with_option(key, value)),
        }
    }
}

impl From<Keyword> for Cqr {
    fn from(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<BooleanQuery> for Cqr {
    fn from(query: BooleanQuery) -> Self {
        Self::Boolean(query)
    }
}

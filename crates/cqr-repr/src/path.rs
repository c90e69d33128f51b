//! Child-index paths into a query tree.

use std::{fmt, str::FromStr};

use crate::error::PathError;

/// A sequence of child indices leading from the root to a node.
///
/// The text form joins indices with dots: `""` is the root, `"0.2"` is the third child of the
/// root's first child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The path addressing the root.
    pub fn root() -> Self {
        Self::default()
    }

    /// The child indices, root first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Returns true if this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl FromStr for NodePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        trimmed
            .split('.')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| PathError::InvalidSegment {
                        path: trimmed.to_string(),
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

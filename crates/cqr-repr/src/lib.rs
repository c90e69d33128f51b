//! Common query representation for keyword and Boolean queries.
//!
//! This crate provides the intermediate representation that query parsers build and that
//! query generators traverse to emit search-engine-specific syntax:
//!
//! - **Keywords**: `` `cancer`[title][] `` - a search term with optional field qualifiers
//! - **Boolean queries**: `` (AND[] `cancer`[title][] `lung`[][]) `` - an operator label over
//!   an ordered list of child representations
//! - **Options**: untyped per-node metadata, attached without changing the schema
//!
//! Operators are uninterpreted labels. Nodes are values: setting an option returns a new node
//! and leaves the original untouched.
//!
//! # Example
//!
//! ```
//! use cqr_repr::{Cqr, OptionValue, Representation};
//!
//! let query = Cqr::boolean(
//!     "AND",
//!     [Cqr::keyword("cancer", ["title"]), Cqr::term("lung")],
//! );
//!
//! assert_eq!(query.to_string(), "(AND[] `cancer`[title][] `lung`[][])");
//!
//! let weighted = query.set_option("weight", 2);
//! assert!(query.get_option("weight").is_none());
//! assert_eq!(weighted.get_option("weight"), Some(&OptionValue::from(2)));
//! ```

#![warn(missing_docs)]

mod boolean;
mod codec;
mod error;
mod keyword;
mod node;
mod options;
mod path;
mod render;
mod repr;
mod visit;

pub use boolean::BooleanQuery;
pub use codec::{MAX_NESTING, from_json, from_reader, to_json, to_json_pretty};
pub use error::{CodecError, DecodeError, PathError};
pub use keyword::Keyword;
pub use node::Cqr;
pub use options::{OptionValue, Options};
pub use path::NodePath;
pub use render::TreeView;
pub use repr::Representation;
pub use visit::{TreeStats, Visitor};

//! Structured JSON encoding.
//!
//! Every node carries a `"type"` discriminator:
//!
//! ```json
//! {"type": "keyword", "query": "cancer", "fields": ["title"], "options": {}}
//! {"type": "boolean", "operator": "AND", "children": [...], "options": {}}
//! ```
//!
//! On decode, `fields`, `children` and `options` default to empty when absent. The `type` tag
//! is always required.
//!
//! Decoding accepts at most [`MAX_NESTING`] levels of JSON arrays and objects. Every tree level
//! takes two of them (the node object and its `children` array, or a keyword's `fields`), so a
//! tree with scalar option values round-trips up to 63 levels deep. Nested option values count
//! against the same limit. The encoders refuse any tree whose encoding would exceed it.

use std::io::Read;

use serde_json::Value;

use crate::{
    error::{CodecError, DecodeError},
    node::Cqr,
    options::Options,
    repr::Representation,
};

/// Deepest JSON array/object nesting that [`from_json`] accepts.
pub const MAX_NESTING: usize = 127;

/// Encodes a tree as compact JSON.
pub fn to_json(node: &Cqr) -> Result<String, CodecError> {
    check_nesting(node)?;
    serde_json::to_string(node).map_err(CodecError::Encode)
}

/// Encodes a tree as indented JSON.
pub fn to_json_pretty(node: &Cqr) -> Result<String, CodecError> {
    check_nesting(node)?;
    serde_json::to_string_pretty(node).map_err(CodecError::Encode)
}

/// Fails when the encoding of `node` could not be decoded again.
fn check_nesting(node: &Cqr) -> Result<(), CodecError> {
    let nesting = node_nesting(node);
    if nesting > MAX_NESTING {
        return Err(CodecError::TooDeep {
            nesting,
            limit: MAX_NESTING,
        });
    }
    Ok(())
}

/// JSON nesting of a node's encoding, counting the node object itself.
fn node_nesting(node: &Cqr) -> usize {
    let inner = match node {
        // `fields` is always written, so a keyword nests at least one array
        Cqr::Keyword(_) => 1,
        Cqr::Boolean(query) => 1 + query.children().iter().map(node_nesting).max().unwrap_or(0),
    };
    1 + inner.max(options_nesting(node.options()))
}

/// JSON nesting of an option store, counting its enclosing object.
fn options_nesting(options: &Options) -> usize {
    1 + options
        .iter()
        .map(|(_, value)| value_nesting(value))
        .max()
        .unwrap_or(0)
}

/// JSON nesting of a single value; scalars add none.
fn value_nesting(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(value_nesting).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(value_nesting).max().unwrap_or(0),
        _ => 0,
    }
}

/// Decodes a tree from JSON text.
pub fn from_json(input: &str) -> Result<Cqr, CodecError> {
    serde_json::from_str(input).map_err(|err| DecodeError::from_json(&err, input).into())
}

/// Reads all of `reader` and decodes a tree from it.
pub fn from_reader(mut reader: impl Read) -> Result<Cqr, CodecError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    from_json(&input)
}

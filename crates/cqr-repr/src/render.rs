//! Canonical and tree rendering.
//!
//! The canonical form is a single line:
//!
//! ```text
//! keyword → `query`[field field][key:value key:value]
//! boolean → (OPERATOR[key:value] child child ...)
//! ```
//!
//! Options are always listed in key order, so equal trees render identically. String option
//! values are written without quotes; every other value is written as compact JSON.
//! The canonical form does not record option value types: the string `"1"` and the number `1`
//! both render as `k:1`. Use the JSON encoding when types matter.
//!
//! The tree view writes one node per line, indented by depth:
//!
//! ```text
//! Boolean("AND") options=[k:v]
//!   Keyword("cancer") fields=[title]
//! ```

use std::fmt;

use crate::{
    boolean::BooleanQuery,
    keyword::Keyword,
    node::Cqr,
    options::{OptionValue, Options},
    repr::Representation,
};

/// Default indentation width for [`TreeView`].
const DEFAULT_INDENT: usize = 2;

/// Writes items separated by single spaces.
fn write_spaced<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Display adapter for a single option value.
struct ValueDisplay<'a>(&'a OptionValue);

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            OptionValue::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Display adapter for an option store, without the enclosing brackets.
struct OptionsDisplay<'a>(&'a Options);

impl fmt::Display for OptionsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(
            f,
            self.0
                .iter()
                .map(|(key, value)| format!("{key}:{}", ValueDisplay(value))),
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`[", self.query())?;
        write_spaced(f, self.fields())?;
        write!(f, "][{}]", OptionsDisplay(self.options()))
    }
}

impl fmt::Display for BooleanQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}]", self.operator(), OptionsDisplay(self.options()))?;
        for child in self.children() {
            write!(f, " {child}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Cqr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => fmt::Display::fmt(keyword, f),
            Self::Boolean(query) => fmt::Display::fmt(query, f),
        }
    }
}

/// An indented, one-node-per-line view of a tree.
///
/// ```text
/// Boolean("AND")
///   Keyword("cancer") fields=[title]
///   Keyword("lung") options=[boost:2]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeView<'a> {
    /// Root of the rendered tree.
    root: &'a Cqr,
    /// Spaces per depth level.
    indent: usize,
}

impl<'a> TreeView<'a> {
    /// Creates a view with the default indentation.
    pub(crate) fn new(root: &'a Cqr) -> Self {
        Self {
            root,
            indent: DEFAULT_INDENT,
        }
    }

    /// Sets the number of spaces per depth level.
    #[must_use]
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Writes `node` and its subtree at `depth`.
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node: &Cqr, depth: usize) -> fmt::Result {
        let prefix = " ".repeat(self.indent * depth);
        match node {
            Cqr::Keyword(keyword) => {
                write!(f, "{prefix}Keyword({:?})", keyword.query())?;
                if !keyword.fields().is_empty() {
                    f.write_str(" fields=[")?;
                    write_spaced(f, keyword.fields())?;
                    f.write_str("]")?;
                }
                fmt_options_suffix(f, keyword.options())?;
                writeln!(f)
            }
            Cqr::Boolean(query) => {
                write!(f, "{prefix}Boolean({:?})", query.operator())?;
                fmt_options_suffix(f, query.options())?;
                writeln!(f)?;
                for child in query.children() {
                    self.fmt_node(f, child, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Writes ` options=[...]` when the store is not empty.
fn fmt_options_suffix(f: &mut fmt::Formatter<'_>, options: &Options) -> fmt::Result {
    if options.is_empty() {
        return Ok(());
    }
    write!(f, " options=[{}]", OptionsDisplay(options))
}

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keyword_with_field() {
        assert_eq!(
            Cqr::keyword("cancer", ["title"]).to_string(),
            "`cancer`[title][]"
        );
    }

    #[test]
    fn keyword_without_fields() {
        assert_eq!(Cqr::term("lung").to_string(), "`lung`[][]");
    }

    #[test]
    fn keyword_multiple_fields_in_order() {
        assert_eq!(
            Cqr::keyword("x", ["title", "abstract"]).to_string(),
            "`x`[title abstract][]"
        );
    }

    #[test]
    fn and_of_two_keywords() {
        let tree = Cqr::boolean(
            "AND",
            [Cqr::keyword("cancer", ["title"]), Cqr::term("lung")],
        );
        assert_eq!(tree.to_string(), "(AND[] `cancer`[title][] `lung`[][])");
        assert_eq!(tree.render(), tree.to_string());
    }

    #[test]
    fn empty_boolean() {
        assert_eq!(Cqr::boolean("OR", Vec::new()).to_string(), "(OR[])");
    }

    #[test]
    fn children_in_order_once_each() {
        let children = [Cqr::term("c1"), Cqr::keyword("c2", ["f"]), Cqr::term("c3")];
        let expected: Vec<String> = children.iter().map(ToString::to_string).collect();
        let rendered = Cqr::boolean("OR", children).to_string();

        assert_eq!(rendered, format!("(OR[] {})", expected.join(" ")));
        for child in &expected {
            assert_eq!(rendered.matches(child.as_str()).count(), 1);
        }
        let positions: Vec<usize> = expected
            .iter()
            .map(|c| rendered.find(c.as_str()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn options_sorted_regardless_of_insertion_order() {
        let a = Cqr::term("x").set_option("b", 2).set_option("a", 1);
        let b = Cqr::term("x").set_option("a", 1).set_option("b", 2);
        assert_eq!(a.to_string(), "`x`[][a:1 b:2]");
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn option_value_formats() {
        let kw = Cqr::term("x")
            .set_option("s", "text")
            .set_option("n", json!(null))
            .set_option("f", 2.5)
            .set_option("l", json!([1, 2]))
            .set_option("o", json!({"k": "v"}));
        assert_eq!(
            kw.to_string(),
            r#"`x`[][f:2.5 l:[1,2] n:null o:{"k":"v"} s:text]"#
        );
    }

    #[test]
    fn boolean_options_before_children() {
        let tree = Cqr::boolean("NOT", [Cqr::term("a"), Cqr::term("b")]).set_option("w", 3);
        assert_eq!(tree.to_string(), "(NOT[w:3] `a`[][] `b`[][])");
    }

    #[test]
    fn nested_rendering() {
        let tree = Cqr::boolean(
            "OR",
            [
                Cqr::boolean("AND", [Cqr::term("a"), Cqr::term("b")]),
                Cqr::term("c"),
            ],
        );
        assert_eq!(tree.to_string(), "(OR[] (AND[] `a`[][] `b`[][]) `c`[][])");
    }

    #[test]
    fn independently_built_trees_render_identically() {
        let build = || {
            Cqr::boolean(
                "AND",
                [
                    Cqr::keyword("heart", ["title", "abstract"]).set_option("z", 1),
                    Cqr::term("attack").set_option("y", "q").set_option("a", false),
                ],
            )
        };
        assert_eq!(build().to_string(), build().to_string());
    }

    #[test]
    fn tree_view_default_indent() {
        let tree = Cqr::boolean(
            "AND",
            [
                Cqr::keyword("cancer", ["title"]),
                Cqr::term("lung").set_option("boost", 2),
            ],
        );
        assert_eq!(
            tree.tree().to_string(),
            "Boolean(\"AND\")\n  Keyword(\"cancer\") fields=[title]\n  Keyword(\"lung\") options=[boost:2]\n"
        );
    }

    #[test]
    fn tree_view_custom_indent() {
        let tree = Cqr::boolean("OR", [Cqr::boolean("AND", [Cqr::term("a")])]);
        assert_eq!(
            tree.tree().indent(4).to_string(),
            "Boolean(\"OR\")\n    Boolean(\"AND\")\n        Keyword(\"a\")\n"
        );
    }

    #[test]
    fn tree_view_boolean_options_and_quoted_labels() {
        let tree = Cqr::boolean(
            "NOT",
            [Cqr::keyword("say \"hi\"", ["title", "abstract"]).set_option("src", "x")],
        )
        .set_option("weight", 0.5);
        assert_eq!(
            tree.tree().to_string(),
            "Boolean(\"NOT\") options=[weight:0.5]\n  Keyword(\"say \\\"hi\\\"\") fields=[title abstract] options=[src:x]\n"
        );
    }

    #[test]
    fn option_value_type_is_not_rendered() {
        let text = Cqr::term("x").set_option("k", "1");
        let number = Cqr::term("x").set_option("k", 1);
        assert_ne!(text, number);
        assert_eq!(text.to_string(), "`x`[][k:1]");
        assert_eq!(text.to_string(), number.to_string());
    }
}

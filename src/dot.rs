//! Condition tree to DOT (Graphviz) conversion.
//!
//! The generated graph has one node per tree node, numbered in pre-order:
//! - **Groups** are labeled with their kind and drawn with the group shape,
//! - **Leaves** are labeled with their `Display` rendering and drawn with the leaf shape,
//! - **Edges** connect each group to its children, in child order.
//!
//! # Examples
//!
//! ```
//! use cond_rs::expr::Expr;
//! use cond_rs::{and, or};
//!
//! let e: Expr<&str> = and!["sword", or!["bow", "hookshot"]];
//! let dot = e.to_dot().unwrap();
//! assert!(dot.starts_with("graph {"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::fmt::{Display, Write as _};

use crate::expr::Expr;
use crate::kind::Kind;

/// Configuration options for DOT output generation.
///
/// # Examples
///
/// ```
/// use cond_rs::dot::DotConfig;
/// use cond_rs::expr::Expr;
/// use cond_rs::or;
///
/// let e: Expr<&str> = or!["a", "b"];
/// let config = DotConfig {
///     group_shape: "diamond",
///     ..DotConfig::default()
/// };
/// let dot = e.to_dot_with_config(&config).unwrap();
/// assert!(dot.contains("shape=diamond"));
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for group nodes (default: "circle")
    pub group_shape: &'static str,
    /// Shape for leaf nodes (default: "box")
    pub leaf_shape: &'static str,
    /// Label for AND groups (default: "∧")
    pub and_label: &'static str,
    /// Label for OR groups (default: "∨")
    pub or_label: &'static str,
    /// Style for edges to nested groups (default: "solid")
    pub group_edge_style: &'static str,
    /// Style for edges to leaves (default: "dashed")
    pub leaf_edge_style: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            group_shape: "circle",
            leaf_shape: "box",
            and_label: Kind::And.symbol(),
            or_label: Kind::Or.symbol(),
            group_edge_style: "solid",
            leaf_edge_style: "dashed",
        }
    }
}

impl DotConfig {
    fn label(&self, kind: Kind) -> &'static str {
        match kind {
            Kind::And => self.and_label,
            Kind::Or => self.or_label,
        }
    }
}

impl<T: Display> Expr<T> {
    /// Converts the tree to DOT (Graphviz) format with the default [`DotConfig`].
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the tree to DOT format with a custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [fontname=\"monospace\"];")?;

        let mut next_id = 0;
        write_node(&mut dot, self, &mut next_id, config)?;

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

/// Writes `expr` and its subtree, returning the id assigned to `expr`.
fn write_node<T: Display>(
    dot: &mut String,
    expr: &Expr<T>,
    next_id: &mut usize,
    config: &DotConfig,
) -> Result<usize, std::fmt::Error> {
    let id = *next_id;
    *next_id += 1;

    match expr {
        Expr::Leaf(item) => {
            let label = escape(&item.to_string());
            writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.leaf_shape, label)?;
        }
        Expr::Group(kind, items) => {
            writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.group_shape, config.label(*kind))?;
            for item in items {
                let child = write_node(dot, item, next_id, config)?;
                let style = if item.is_leaf() {
                    config.leaf_edge_style
                } else {
                    config.group_edge_style
                };
                writeln!(dot, "{} -- {} [style={}];", id, child, style)?;
            }
        }
    }

    Ok(id)
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{and, or};

    /// Basic test: verify DOT output is generated without errors
    #[test]
    fn test_to_dot_basic() {
        let e: Expr<&str> = and!["a", or!["b", "c"]];
        let dot = e.to_dot().unwrap();

        assert!(dot.starts_with("graph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("0 [shape=circle, label=\"∧\"];"));
        assert!(dot.contains("1 [shape=box, label=\"a\"];"));
        assert!(dot.contains("2 [shape=circle, label=\"∨\"];"));
        assert!(dot.contains("0 -- 1 [style=dashed];"));
        assert!(dot.contains("0 -- 2 [style=solid];"));
        assert!(dot.contains("2 -- 4 [style=dashed];"));
    }

    #[test]
    fn test_to_dot_single_leaf() {
        let dot = Expr::leaf(42).to_dot().unwrap();
        assert!(dot.contains("0 [shape=box, label=\"42\"];"));
        assert!(!dot.contains("--"));
    }

    #[test]
    fn test_to_dot_escapes_quotes() {
        let dot = Expr::leaf("say \"hi\"").to_dot().unwrap();
        assert!(dot.contains(r#"label="say \"hi\"""#));
    }

    #[test]
    fn test_to_dot_with_config() {
        let e: Expr<&str> = or!["a", "b"];
        let config = DotConfig {
            or_label: "OR",
            leaf_shape: "ellipse",
            ..DotConfig::default()
        };
        let dot = e.to_dot_with_config(&config).unwrap();
        assert!(dot.contains("label=\"OR\""));
        assert!(dot.contains("shape=ellipse"));
    }

    /// Helper test to write DOT file for manual inspection (disabled by default)
    #[test]
    #[ignore]
    fn test_write_dot_file() {
        let e: Expr<&str> = and!["sword", or!["bow", and!["hookshot", "bombs"]]];
        let dot = e.to_dot().unwrap();

        std::fs::write("test_output.dot", &dot).unwrap();
        println!("DOT output:\n{}", dot);
    }
}

//! Normalization of nested groups.
//!
//! Flattening is a single bottom-up rewrite:
//!
//! - an empty child group is dropped,
//! - a child group of the same kind as its parent, or with a single item, is spliced into the parent,
//! - a group left with exactly one child group becomes that child,
//! - a group left with zero or one leaf becomes an `AND` group.
//!
//! The last rule forces the `AND` kind even when the group was an `OR`.
//! Over a single leaf both kinds evaluate the same.

use crate::expr::Expr;
use crate::kind::Kind;

impl<T: Clone> Expr<T> {
    /// Returns the normalized form of this tree.
    ///
    /// A leaf is returned unchanged.
    ///
    /// ```
    /// use cond_rs::expr::Expr;
    /// use cond_rs::{and, or};
    ///
    /// let e: Expr<&str> = and!["a", and!["b", or!["c"]]];
    /// let expected: Expr<&str> = and!["a", "b", "c"];
    /// assert_eq!(e.flatten(), expected);
    /// ```
    pub fn flatten(&self) -> Expr<T> {
        self.clone().into_flat()
    }
}

impl<T> Expr<T> {
    /// Consuming variant of [`Expr::flatten`].
    pub fn into_flat(self) -> Expr<T> {
        match self {
            Expr::Leaf(_) => self,
            Expr::Group(kind, items) => flat_group(kind, items),
        }
    }
}

/// Builds a flattened group of the given kind from `items`.
///
/// The result is always a [`Expr::Group`].
pub(crate) fn flat_group<T>(kind: Kind, items: Vec<Expr<T>>) -> Expr<T> {
    let mut flat = Vec::with_capacity(items.len());

    for item in items {
        let (child_kind, child_items) = match item.into_flat() {
            Expr::Group(child_kind, child_items) => (child_kind, child_items),
            leaf => {
                flat.push(leaf);
                continue;
            }
        };

        if child_items.is_empty() {
            continue;
        }
        if child_kind == kind || child_items.len() == 1 {
            flat.extend(child_items);
        } else {
            flat.push(Expr::Group(child_kind, child_items));
        }
    }

    match flat.len() {
        1 if flat[0].is_group() => flat.swap_remove(0),
        0 | 1 => Expr::Group(Kind::And, flat),
        _ => Expr::Group(kind, flat),
    }
}

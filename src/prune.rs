//! Removal of children made redundant by their ancestors.
//!
//! The pass walks the tree top-down, collecting the leaves of every `AND` and
//! every `OR` ancestor on the current path. Inside an `AND` ancestor its leaves
//! may be assumed true; inside an `OR` ancestor they may be assumed false.
//!
//! For a group of kind `K`:
//!
//! - a leaf implied by a same-kind ancestor leaf is dropped,
//! - a leaf settling the group through an opposite-kind ancestor leaf removes the whole group,
//! - a group whose items were all dropped makes its parent redundant in turn.

use log::trace;

use crate::expr::Expr;
use crate::flatten::flat_group;
use crate::kind::Kind;
use crate::subsume::{leaf_is_subsumed, Implication};

/// Leaves collected from the `AND` and `OR` ancestors of a node.
#[derive(Debug)]
struct AncestorLeaves<'a, T> {
    and: Vec<&'a T>,
    or: Vec<&'a T>,
}

impl<'a, T> AncestorLeaves<'a, T> {
    fn new() -> Self {
        Self {
            and: Vec::new(),
            or: Vec::new(),
        }
    }

    fn get(&self, kind: Kind) -> &[&'a T] {
        match kind {
            Kind::And => &self.and,
            Kind::Or => &self.or,
        }
    }

    /// Returns a copy with the leaf children of a `kind` group appended to its bucket.
    fn with_children(&self, kind: Kind, children: &'a [Expr<T>]) -> Self {
        let mut and = self.and.clone();
        let mut or = self.or.clone();
        let bucket = match kind {
            Kind::And => &mut and,
            Kind::Or => &mut or,
        };
        bucket.extend(children.iter().filter_map(Expr::as_leaf));
        Self { and, or }
    }
}

/// Outcome of pruning one node.
enum Pruned<T> {
    Kept(Expr<T>),
    /// The node is neutral for its parent and can be left out.
    Removed,
    /// Every item of the node was dropped; the parent is redundant.
    Vacuous,
}

impl<T: Clone> Expr<T> {
    /// Drops leaves implied by ancestor context and branches settled by it.
    ///
    /// Expects a flattened tree, as produced by [`Expr::flatten`]. The result is flattened.
    /// A leaf is returned unchanged.
    ///
    /// ```
    /// use cond_rs::expr::Expr;
    /// use cond_rs::{and, or};
    ///
    /// let same = |a: &&str, b: &&str| a == b;
    ///
    /// // Given "sword", the inner OR always holds.
    /// let e: Expr<&str> = and![or!["sword", "bow"], "sword"];
    /// let expected: Expr<&str> = and!["sword"];
    /// assert_eq!(e.remove_duplicate_children(&same), expected);
    /// ```
    pub fn remove_duplicate_children<I>(&self, implies: &I) -> Expr<T>
    where
        I: Implication<T>,
    {
        if self.is_leaf() {
            return self.clone();
        }
        match prune(self, &AncestorLeaves::new(), implies) {
            Pruned::Kept(expr) => expr,
            Pruned::Removed | Pruned::Vacuous => Expr::and([]),
        }
    }
}

fn prune<'a, T, I>(expr: &'a Expr<T>, ancestors: &AncestorLeaves<'a, T>, implies: &I) -> Pruned<T>
where
    T: Clone,
    I: Implication<T>,
{
    let (kind, items) = match expr {
        Expr::Leaf(_) => return Pruned::Kept(expr.clone()),
        Expr::Group(kind, items) => (*kind, items),
    };

    let scope = ancestors.with_children(kind, items);
    let same_kind = ancestors.get(kind);
    let opposite_kind = ancestors.get(kind.opposite());

    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Expr::Group(..) => match prune(item, &scope, implies) {
                Pruned::Kept(child) => kept.push(child),
                Pruned::Removed => {}
                Pruned::Vacuous => {
                    trace!("prune: {} group settled by a vacuous child", kind);
                    return Pruned::Removed;
                }
            },
            Expr::Leaf(leaf) => {
                if leaf_is_subsumed(opposite_kind.iter().copied(), leaf, kind.opposite(), implies) {
                    trace!("prune: {} group settled by an {} ancestor", kind, kind.opposite());
                    return Pruned::Removed;
                }
                if leaf_is_subsumed(same_kind.iter().copied(), leaf, kind, implies) {
                    trace!("prune: leaf implied by an {} ancestor", kind);
                } else {
                    kept.push(item.clone());
                }
            }
        }
    }

    match flat_group(kind, kept) {
        Expr::Group(_, items) if items.is_empty() => Pruned::Vacuous,
        expr => Pruned::Kept(expr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::{and, or};

    fn same(a: &&str, b: &&str) -> bool {
        a == b
    }

    #[test]
    fn test_no_context_no_change() {
        let e: Expr<&str> = and!["a", or!["b", "c"]];
        assert_eq!(e.remove_duplicate_children(&same), e);
    }

    #[test]
    fn test_leaf_implied_by_same_kind_ancestor() {
        // a ∧ (b ∨ (a ∧ c)): inside the outer AND, "a" holds.
        let e: Expr<&str> = and!["a", or!["b", and!["a", "c"]]];
        let expected: Expr<&str> = and!["a", or!["b", "c"]];
        assert_eq!(e.remove_duplicate_children(&same), expected);
    }

    #[test]
    fn test_branch_settled_by_opposite_kind_ancestor() {
        // a ∨ (b ∧ (a ∨ c)) keeps the "c" alternative only.
        let e: Expr<&str> = or!["a", and!["b", or!["a", "c"]]];
        let expected: Expr<&str> = or!["a", and!["b", "c"]];
        assert_eq!(e.remove_duplicate_children(&same), expected);

        // a ∧ (a ∨ b): the OR holds whenever the AND matters.
        let e: Expr<&str> = and!["a", or!["a", "b"]];
        let expected: Expr<&str> = and!["a"];
        assert_eq!(e.remove_duplicate_children(&same), expected);
    }

    #[test]
    fn test_vacuous_child_removes_parent() {
        // x ∧ (y ∨ (x ∧ x)): the innermost AND empties, so the OR is settled.
        let e: Expr<&str> = and!["x", or!["y", and!["x", "x"]]];
        let expected: Expr<&str> = and!["x"];
        assert_eq!(e.remove_duplicate_children(&same), expected);
    }

    #[test]
    fn test_uses_implication() {
        // Having three arrows implies having at least one.
        let implies = |a: &(&str, u32), b: &(&str, u32)| a.0 == b.0 && a.1 >= b.1;
        let e: Expr<(&str, u32)> = and![("arrow", 3), or![("bomb", 1), and![("arrow", 1), ("rope", 1)]]];
        let expected: Expr<(&str, u32)> = and![("arrow", 3), or![("bomb", 1), ("rope", 1)]];
        assert_eq!(e.remove_duplicate_children(&implies), expected);
    }

    #[test]
    fn test_siblings_are_not_context() {
        let e: Expr<&str> = and!["a", "a"];
        assert_eq!(e.remove_duplicate_children(&same), e);
    }

    #[test]
    fn test_leaf_unchanged() {
        assert_eq!(Expr::leaf("a").remove_duplicate_children(&same), Expr::leaf("a"));
    }
}

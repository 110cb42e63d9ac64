//! Equality and subsumption predicates.
//!
//! Both simplification passes decide redundancy through a host-supplied
//! [`Implication`] between leaf items: `implies(a, b)` means that `a` holding
//! guarantees `b` holds. The relation is trusted as given; it is never checked
//! for reflexivity or transitivity.

use crate::expr::Expr;
use crate::kind::Kind;

/// Host-supplied implication between two leaf items.
///
/// Any `Fn(&T, &T) -> bool` is an implication.
pub trait Implication<T: ?Sized> {
    /// Whether `a` holding guarantees `b` holds.
    fn implies(&self, a: &T, b: &T) -> bool;

    /// Whether `a` and `b` imply each other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self.implies(a, b) && self.implies(b, a)
    }
}

impl<T: ?Sized, F> Implication<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn implies(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

impl<T> Expr<T> {
    /// Structural equality with multiset semantics for children.
    ///
    /// Two groups are equal when they have the same kind, the same number of
    /// children, and the children can be paired one-to-one, recursing into nested
    /// groups and comparing leaves with `items_equal`. A group never equals a leaf.
    ///
    /// ```
    /// use cond_rs::expr::Expr;
    /// use cond_rs::{and, or};
    ///
    /// let eq = |a: &&str, b: &&str| a == b;
    /// let x: Expr<&str> = and!["a", or!["b", "c"]];
    /// let y: Expr<&str> = and![or!["c", "b"], "a"];
    /// assert!(x.is_equal_to(&y, &eq));
    /// ```
    pub fn is_equal_to<F>(&self, other: &Expr<T>, items_equal: &F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        match (self, other) {
            (Expr::Leaf(a), Expr::Leaf(b)) => items_equal(a, b),
            (Expr::Group(kind, items), Expr::Group(other_kind, other_items)) => {
                groups_equal(*kind, items, *other_kind, other_items, items_equal)
            }
            _ => false,
        }
    }
}

/// Multiset equality of two groups given as kind and children.
pub(crate) fn groups_equal<T, F>(kind: Kind, items: &[Expr<T>], other_kind: Kind, other_items: &[Expr<T>], items_equal: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    if kind != other_kind || items.len() != other_items.len() {
        return false;
    }

    let mut paired = vec![false; other_items.len()];
    items.iter().all(|item| {
        let partner = (0..other_items.len()).find(|&j| !paired[j] && item.is_equal_to(&other_items[j], items_equal));
        match partner {
            Some(j) => {
                paired[j] = true;
                true
            }
            None => false,
        }
    })
}

/// Whether `item` is redundant next to the leaf children of `context`.
///
/// In an `AND` context the item is subsumed when some leaf sibling implies it.
/// In an `OR` context it is subsumed when it implies some leaf sibling.
/// Nested groups in `context` are skipped.
pub fn item_is_subsumed<T, I>(context: &[Expr<T>], item: &T, kind: Kind, implies: &I) -> bool
where
    I: Implication<T>,
{
    leaf_is_subsumed(context.iter().filter_map(Expr::as_leaf), item, kind, implies)
}

pub(crate) fn leaf_is_subsumed<'a, T, It, I>(context: It, item: &T, kind: Kind, implies: &I) -> bool
where
    T: 'a,
    It: IntoIterator<Item = &'a T>,
    I: Implication<T>,
{
    context.into_iter().any(|other| match kind {
        Kind::And => implies.implies(other, item),
        Kind::Or => implies.implies(item, other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::{and, or};

    fn same(a: &&str, b: &&str) -> bool {
        a == b
    }

    /// `x` implies itself and every item with `x` as a prefix, e.g. "a" implies "ab".
    fn prefix(a: &&str, b: &&str) -> bool {
        b.starts_with(*a)
    }

    #[test]
    fn test_equal_ignores_order() {
        let x: Expr<&str> = and!["x", "y"];
        let y: Expr<&str> = and!["y", "x"];
        assert!(x.is_equal_to(&y, &same));
    }

    #[test]
    fn test_equal_counts_matter() {
        let x: Expr<&str> = and!["x", "x"];
        let y: Expr<&str> = and!["x"];
        assert!(!x.is_equal_to(&y, &same));
    }

    #[test]
    fn test_equal_pairs_duplicates_one_to_one() {
        let x: Expr<&str> = and!["x", "x", "y"];
        let y: Expr<&str> = and!["x", "y", "y"];
        assert!(!x.is_equal_to(&y, &same));
    }

    #[test]
    fn test_equal_kind_matters() {
        let x: Expr<&str> = and!["x", "y"];
        let y: Expr<&str> = or!["x", "y"];
        assert!(!x.is_equal_to(&y, &same));
    }

    #[test]
    fn test_group_never_equals_leaf() {
        let x: Expr<&str> = and!["x"];
        assert!(!x.is_equal_to(&Expr::leaf("x"), &same));
        assert!(!Expr::leaf("x").is_equal_to(&x, &same));
        assert!(Expr::leaf("x").is_equal_to(&Expr::leaf("x"), &same));
    }

    #[test]
    fn test_equal_recurses_into_groups() {
        let x: Expr<&str> = or!["a", and!["b", "c"]];
        let y: Expr<&str> = or![and!["c", "b"], "a"];
        let z: Expr<&str> = or![and!["c", "d"], "a"];
        assert!(x.is_equal_to(&y, &same));
        assert!(!x.is_equal_to(&z, &same));
    }

    #[test]
    fn test_subsumed_in_and_context() {
        let context: Vec<Expr<&str>> = vec!["a".into(), "q".into()];
        // "a" holding already guarantees "ab".
        assert!(item_is_subsumed(&context, &"ab", Kind::And, &prefix));
        assert!(!item_is_subsumed(&context, &"b", Kind::And, &prefix));
    }

    #[test]
    fn test_subsumed_in_or_context() {
        let context: Vec<Expr<&str>> = vec!["ab".into(), "q".into()];
        // "a" holding already makes the sibling "ab" hold.
        assert!(item_is_subsumed(&context, &"a", Kind::Or, &prefix));
        assert!(!item_is_subsumed(&context, &"b", Kind::Or, &prefix));
    }

    #[test]
    fn test_subsumption_skips_nested_groups() {
        let context: Vec<Expr<&str>> = vec![and!["a", "b"], or!["a"]];
        assert!(!item_is_subsumed(&context, &"a", Kind::And, &prefix));
        assert!(!item_is_subsumed(&context, &"a", Kind::Or, &prefix));
    }

    #[test]
    fn test_equivalent() {
        assert!(Implication::<&str>::equivalent(&same, &"a", &"a"));
        assert!(!Implication::<&str>::equivalent(&prefix, &"a", &"ab"));
    }
}

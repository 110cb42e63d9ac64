//! Removal of sibling groups absorbed by another sibling.
//!
//! Implements the absorption laws `A ∧ (A ∨ B) = A` and `A ∨ (A ∧ B) = A`,
//! generalized through the host implication: a child is dropped when some
//! other sibling already says everything it says, in the context of the parent.
//! Equivalent siblings keep the earliest one.

use log::trace;

use crate::expr::Expr;
use crate::flatten::flat_group;
use crate::kind::Kind;
use crate::subsume::{groups_equal, leaf_is_subsumed, Implication};

/// A child seen as a group. A bare leaf is viewed as `AND(leaf)`.
struct GroupView<'a, T> {
    kind: Kind,
    items: &'a [Expr<T>],
}

impl<T> Clone for GroupView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GroupView<'_, T> {}

impl<'a, T> GroupView<'a, T> {
    fn of(expr: &'a Expr<T>) -> Self {
        match expr {
            Expr::Group(kind, items) => Self { kind: *kind, items },
            Expr::Leaf(_) => Self {
                kind: Kind::And,
                items: std::slice::from_ref(expr),
            },
        }
    }

    fn leaves(self) -> impl Iterator<Item = &'a T> {
        self.items.iter().filter_map(Expr::as_leaf)
    }

    /// Whether `self` is redundant given `other`.
    ///
    /// `context` is the kind the two are joined by, opposite to the kind of their parent.
    fn is_subsumed_by<I>(self, other: GroupView<'a, T>, remove_if_identical: bool, context: Kind, implies: &I) -> bool
    where
        I: Implication<T>,
    {
        let equivalent = |a: &T, b: &T| implies.equivalent(a, b);
        if groups_equal(self.kind, self.items, other.kind, other.items, &equivalent) {
            return remove_if_identical;
        }

        other.items.iter().all(|other_item| match other_item {
            Expr::Group(..) => self.is_subsumed_by(GroupView::of(other_item), true, context, implies),
            Expr::Leaf(leaf) => leaf_is_subsumed(self.leaves(), leaf, context, implies),
        })
    }
}

impl<T: Clone> Expr<T> {
    /// Drops children absorbed by a sibling, innermost groups first.
    ///
    /// The result is flattened. A leaf is returned unchanged.
    ///
    /// ```
    /// use cond_rs::expr::Expr;
    /// use cond_rs::{and, or};
    ///
    /// let same = |a: &&str, b: &&str| a == b;
    ///
    /// let e: Expr<&str> = or!["a", and!["a", "b"]];
    /// let expected: Expr<&str> = and!["a"];
    /// assert_eq!(e.remove_duplicate_expressions(&same), expected);
    /// ```
    pub fn remove_duplicate_expressions<I>(&self, implies: &I) -> Expr<T>
    where
        I: Implication<T>,
    {
        let (kind, items) = match self {
            Expr::Leaf(_) => return self.clone(),
            Expr::Group(kind, items) => (*kind, items),
        };

        let children = items
            .iter()
            .map(|item| match item {
                Expr::Leaf(_) => item.clone(),
                Expr::Group(..) => item.remove_duplicate_expressions(implies),
            })
            .collect();

        let (kind, items) = match flat_group(kind, children) {
            Expr::Group(kind, items) => (kind, items),
            leaf => return leaf,
        };

        let survivors = items
            .iter()
            .enumerate()
            .filter(|&(index, _)| !is_absorbed(kind, &items, index, implies))
            .map(|(_, item)| item.clone())
            .collect();

        flat_group(kind, survivors)
    }
}

/// Whether the child at `index` of a `kind` group is absorbed by one of its siblings.
fn is_absorbed<T, I>(kind: Kind, items: &[Expr<T>], index: usize, implies: &I) -> bool
where
    I: Implication<T>,
{
    let candidate = GroupView::of(&items[index]);
    let absorbed = items
        .iter()
        .enumerate()
        .filter(|&(other_index, _)| other_index != index)
        .any(|(other_index, other)| {
            candidate.is_subsumed_by(GroupView::of(other), other_index < index, kind.opposite(), implies)
        });
    if absorbed {
        trace!("absorb: child {} of {} group absorbed by a sibling", index, kind);
    }
    absorbed
}

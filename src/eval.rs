//! Evaluation and generic folding of condition trees.
//!
//! [`Expr::evaluate`] computes a truth value from a host-supplied leaf valuation.
//! [`Expr::reduce`] folds the tree into an arbitrary value, which lets a host
//! render conditions without the engine knowing about presentation.

use crate::expr::Expr;
use crate::kind::Kind;

/// An item handed to a [`Reducer`] fold step.
#[derive(Debug, Clone, PartialEq)]
pub enum Folded<'a, T, R> {
    /// A leaf of the group being folded.
    Item(&'a T),
    /// A nested group, already reduced.
    Reduced(R),
}

impl<T, R> Folded<'_, T, R> {
    /// Whether this item was a nested group reduced before folding.
    pub fn was_subexpression(&self) -> bool {
        matches!(self, Folded::Reduced(_))
    }
}

/// A fold over a condition tree.
///
/// Each group starts from the initial value of its kind and folds its children
/// left to right with the step of its kind. A nested group is reduced first and
/// handed over as [`Folded::Reduced`].
pub trait Reducer<T> {
    type Output;

    fn and_init(&self) -> Self::Output;
    fn and_fold(&self, acc: Self::Output, item: Folded<'_, T, Self::Output>) -> Self::Output;
    fn or_init(&self) -> Self::Output;
    fn or_fold(&self, acc: Self::Output, item: Folded<'_, T, Self::Output>) -> Self::Output;

    fn init(&self, kind: Kind) -> Self::Output {
        match kind {
            Kind::And => self.and_init(),
            Kind::Or => self.or_init(),
        }
    }

    fn fold(&self, kind: Kind, acc: Self::Output, item: Folded<'_, T, Self::Output>) -> Self::Output {
        match kind {
            Kind::And => self.and_fold(acc, item),
            Kind::Or => self.or_fold(acc, item),
        }
    }
}

struct FnReducer<R, A, O> {
    and_init: R,
    and_reducer: A,
    or_init: R,
    or_reducer: O,
}

impl<T, R, A, O> Reducer<T> for FnReducer<R, A, O>
where
    R: Clone,
    A: Fn(R, Folded<'_, T, R>) -> R,
    O: Fn(R, Folded<'_, T, R>) -> R,
{
    type Output = R;

    fn and_init(&self) -> R {
        self.and_init.clone()
    }

    fn and_fold(&self, acc: R, item: Folded<'_, T, R>) -> R {
        (self.and_reducer)(acc, item)
    }

    fn or_init(&self) -> R {
        self.or_init.clone()
    }

    fn or_fold(&self, acc: R, item: Folded<'_, T, R>) -> R {
        (self.or_reducer)(acc, item)
    }
}

impl<T> Expr<T> {
    /// Evaluates the tree: `AND` holds when every child holds, `OR` when any child holds.
    ///
    /// An empty `AND` is true and an empty `OR` is false.
    ///
    /// ```
    /// use cond_rs::expr::Expr;
    /// use cond_rs::{and, or};
    ///
    /// let e: Expr<&str> = and!["sword", or!["bow", "hookshot"]];
    /// assert!(e.evaluate(|item| *item != "bow"));
    /// assert!(!e.evaluate(|item| *item == "sword"));
    /// ```
    pub fn evaluate<F>(&self, is_item_true: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.evaluate_by(&is_item_true)
    }

    fn evaluate_by<F>(&self, is_item_true: &F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        match self {
            Expr::Leaf(item) => is_item_true(item),
            Expr::Group(Kind::And, items) => items.iter().all(|e| e.evaluate_by(is_item_true)),
            Expr::Group(Kind::Or, items) => items.iter().any(|e| e.evaluate_by(is_item_true)),
        }
    }

    /// Folds the tree with the given [`Reducer`].
    ///
    /// A bare leaf is folded like an `AND` group holding just that leaf.
    pub fn reduce<R>(&self, reducer: &R) -> R::Output
    where
        R: Reducer<T>,
    {
        let (kind, items) = match self {
            Expr::Leaf(item) => return reducer.and_fold(reducer.and_init(), Folded::Item(item)),
            Expr::Group(kind, items) => (*kind, items),
        };

        items.iter().fold(reducer.init(kind), |acc, child| {
            let item = match child {
                Expr::Leaf(item) => Folded::Item(item),
                Expr::Group(..) => Folded::Reduced(child.reduce(reducer)),
            };
            reducer.fold(kind, acc, item)
        })
    }

    /// Folds the tree with closures instead of a [`Reducer`] implementation.
    ///
    /// ```
    /// use cond_rs::eval::Folded;
    /// use cond_rs::expr::Expr;
    /// use cond_rs::{and, or};
    ///
    /// fn join(sep: &str, acc: String, item: Folded<'_, &str, String>) -> String {
    ///     let item = match item {
    ///         Folded::Item(item) => item.to_string(),
    ///         Folded::Reduced(inner) => format!("[{}]", inner),
    ///     };
    ///     if acc.is_empty() { item } else { format!("{}{}{}", acc, sep, item) }
    /// }
    ///
    /// let e: Expr<&str> = or!["a", and!["b", "c"]];
    /// let text = e.reduce_with(
    ///     String::new(),
    ///     |acc, item| join(" and ", acc, item),
    ///     String::new(),
    ///     |acc, item| join(" or ", acc, item),
    /// );
    /// assert_eq!(text, "a or [b and c]");
    /// ```
    pub fn reduce_with<R, A, O>(&self, and_init: R, and_reducer: A, or_init: R, or_reducer: O) -> R
    where
        R: Clone,
        A: Fn(R, Folded<'_, T, R>) -> R,
        O: Fn(R, Folded<'_, T, R>) -> R,
    {
        self.reduce(&FnReducer {
            and_init,
            and_reducer,
            or_init,
            or_reducer,
        })
    }
}

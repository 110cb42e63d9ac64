//! The condition tree.
//!
//! An [`Expr`] is either an opaque [`Leaf`][Expr::Leaf] supplied by the host, or a
//! [`Group`][Expr::Group] of children joined by a [`Kind`]. Construction never
//! normalizes; see [`Expr::flatten`] and [`Expr::simplify`] for that.
//!
//! ```
//! use cond_rs::expr::Expr;
//! use cond_rs::{and, or};
//!
//! let e: Expr<&str> = and!["sword", or!["bow", "hookshot"]];
//! assert_eq!(e.to_string(), "(sword ∧ (bow ∨ hookshot))");
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::kind::Kind;

/// A tree of AND/OR groups over opaque items of type `T`.
///
/// Trees are immutable values: every transformation returns a new tree.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr<T> {
    /// An opaque condition, never interpreted by the engine.
    Leaf(T),
    /// A grouping of children. Child order is insertion order.
    Group(Kind, Vec<Expr<T>>),
}

impl<T> Expr<T> {
    pub fn leaf(item: T) -> Self {
        Expr::Leaf(item)
    }

    pub fn group<I>(kind: Kind, items: I) -> Self
    where
        I: IntoIterator<Item = Expr<T>>,
    {
        Expr::Group(kind, items.into_iter().collect())
    }

    /// Builds an AND group. No normalization is performed.
    pub fn and<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Expr<T>>,
    {
        Self::group(Kind::And, items)
    }

    /// Builds an OR group. No normalization is performed.
    pub fn or<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Expr<T>>,
    {
        Self::group(Kind::Or, items)
    }

    /// Kind of a group, or `None` for a leaf.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Expr::Leaf(_) => None,
            Expr::Group(kind, _) => Some(*kind),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Leaf(_))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Expr::Group(..))
    }

    pub fn is_and(&self) -> bool {
        self.kind() == Some(Kind::And)
    }

    pub fn is_or(&self) -> bool {
        self.kind() == Some(Kind::Or)
    }

    /// Opposite kind of this group.
    ///
    /// # Panics
    ///
    /// Panics if called on a leaf.
    pub fn opposite_kind(&self) -> Kind {
        match self {
            Expr::Group(kind, _) => kind.opposite(),
            Expr::Leaf(_) => panic!("opposite_kind called on a leaf"),
        }
    }

    /// Children of a group. A leaf has none.
    pub fn children(&self) -> &[Expr<T>] {
        match self {
            Expr::Leaf(_) => &[],
            Expr::Group(_, items) => items,
        }
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Expr::Leaf(item) => Some(item),
            Expr::Group(..) => None,
        }
    }

    /// Number of nodes in the tree (groups and leaves).
    pub fn size(&self) -> usize {
        match self {
            Expr::Leaf(_) => 1,
            Expr::Group(_, items) => 1 + items.iter().map(Expr::size).sum::<usize>(),
        }
    }

    /// Depth of the tree (0 for a leaf, 1 for a group of leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Leaf(_) => 0,
            Expr::Group(_, items) => 1 + items.iter().map(Expr::depth).max().unwrap_or(0),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Expr::Leaf(_) => 1,
            Expr::Group(_, items) => items.iter().map(Expr::leaf_count).sum(),
        }
    }

    /// Iterates over the leaf items in pre-order.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves { stack: vec![self] }
    }
}

/// Pre-order iterator over the leaf items of an [`Expr`].
pub struct Leaves<'a, T> {
    stack: Vec<&'a Expr<T>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(expr) = self.stack.pop() {
            match expr {
                Expr::Leaf(item) => return Some(item),
                Expr::Group(_, items) => self.stack.extend(items.iter().rev()),
            }
        }
        None
    }
}

impl<T> From<T> for Expr<T> {
    fn from(item: T) -> Self {
        Expr::Leaf(item)
    }
}

impl<T> BitAnd for Expr<T> {
    type Output = Expr<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and([self, rhs])
    }
}

impl<T> BitOr for Expr<T> {
    type Output = Expr<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or([self, rhs])
    }
}

impl<T: fmt::Display> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Leaf(item) => write!(f, "{}", item),
            Expr::Group(kind, items) if items.is_empty() => write!(f, "{}", kind.empty_symbol()),
            Expr::Group(kind, items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", kind.symbol())?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Builds an AND group from a mix of bare items and nested expressions.
///
/// When every argument is itself an expression, annotate the result type.
#[macro_export]
macro_rules! and {
    ($($item:expr),* $(,)?) => {
        $crate::expr::Expr::and([$($crate::expr::Expr::from($item)),*])
    };
}

/// Builds an OR group from a mix of bare items and nested expressions.
///
/// When every argument is itself an expression, annotate the result type.
#[macro_export]
macro_rules! or {
    ($($item:expr),* $(,)?) => {
        $crate::expr::Expr::or([$($crate::expr::Expr::from($item)),*])
    };
}

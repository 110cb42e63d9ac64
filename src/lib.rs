//! # cond-rs: condition trees with implication-driven simplification
//!
//! **`cond-rs`** represents arbitrarily nested "all of these hold" / "any of these hold"
//! groupings over opaque leaf conditions, and simplifies them using an implication
//! relation between leaves that the host supplies.
//!
//! ## Key Features
//!
//! - **Opaque leaves**: the engine never interprets a leaf. Hosts supply equality, truth values and implication.
//! - **Immutable trees**: every transformation returns a new [`Expr`][crate::expr::Expr]; inputs are never mutated.
//! - **Evaluation and folding**: [`evaluate`][crate::expr::Expr::evaluate] computes a truth value,
//!   [`reduce`][crate::expr::Expr::reduce] renders a tree to any representation.
//! - **Simplification**: [`simplify`][crate::expr::Expr::simplify] removes duplicate leaves,
//!   branches settled by ancestor context, and siblings absorbed by other siblings.
//!
//! ## Basic Usage
//!
//! ```rust
//! use cond_rs::expr::Expr;
//! use cond_rs::{and, or};
//!
//! // 1. Leaves: "has at least N of item X"
//! let implies = |a: &(&str, u32), b: &(&str, u32)| a.0 == b.0 && a.1 >= b.1;
//!
//! // 2. Build a condition: 2 keys, and either a lantern or (1 key and a lantern)
//! let e: Expr<(&str, u32)> = and![
//!     ("key", 2),
//!     or![("lantern", 1), and![("key", 1), ("lantern", 1)]],
//! ];
//!
//! // 3. Simplify: the inner AND adds nothing
//! let simple = e.simplify(&implies);
//! let expected: Expr<(&str, u32)> = and![("key", 2), ("lantern", 1)];
//! assert_eq!(simple, expected);
//!
//! // 4. Evaluate against an inventory
//! let inventory = |(item, count): &(&str, u32)| match *item {
//!     "key" => *count <= 2,
//!     _ => *count <= 1,
//! };
//! assert!(simple.evaluate(inventory));
//! assert_eq!(e.evaluate(inventory), simple.evaluate(inventory));
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: The [`Expr`][crate::expr::Expr] tree, its constructors and the [`and!`] / [`or!`] macros.
//! - **[`flatten`]**: Normalization of nested and single-item groups.
//! - **[`eval`]**: Evaluation and generic folding.
//! - **[`subsume`]**: Multiset equality and the [`Implication`][crate::subsume::Implication] trait.
//! - **[`prune`]** and **[`absorb`]**: The two simplification passes.
//! - **[`simplify`]**: The simplification driver and its configuration.
//! - **[`dot`]**: Utilities for visualizing trees using Graphviz.

pub mod absorb;
pub mod dot;
pub mod eval;
pub mod expr;
pub mod flatten;
pub mod kind;
pub mod prune;
pub mod simplify;
pub mod subsume;

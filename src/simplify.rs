//! Simplification driver.
//!
//! [`Expr::simplify`] flattens the tree once, then runs a fixed number of rounds,
//! each made of the ancestor-context pass ([`Expr::remove_duplicate_children`])
//! followed by the sibling absorption pass ([`Expr::remove_duplicate_expressions`]).
//! One pass can unlock further work for the other, since each changes the context
//! the other sees.
//!
//! This is bounded local rewriting, not minimization: the result is equivalent
//! when the implication is sound, but it is not guaranteed to be the simplest
//! equivalent tree.
//!
//! # Examples
//!
//! ```
//! use cond_rs::expr::Expr;
//! use cond_rs::{and, or};
//!
//! // An item count requirement: ("arrow", 3) implies ("arrow", 1).
//! let implies = |a: &(&str, u32), b: &(&str, u32)| a.0 == b.0 && a.1 >= b.1;
//!
//! let e: Expr<(&str, u32)> = and![
//!     ("arrow", 1),
//!     or![("bow", 1), and![("bow", 1), ("arrow", 3)]],
//!     ("arrow", 3),
//! ];
//! let expected: Expr<(&str, u32)> = and![("bow", 1), ("arrow", 3)];
//! assert_eq!(e.simplify(&implies), expected);
//! ```

use log::debug;

use crate::expr::Expr;
use crate::subsume::Implication;

/// Number of rounds run by [`Expr::simplify`].
pub const DEFAULT_ROUNDS: usize = 3;

/// Configuration of the simplification loop.
///
/// The default reproduces [`Expr::simplify`]: exactly [`DEFAULT_ROUNDS`] rounds.
///
/// # Examples
///
/// ```
/// use cond_rs::simplify::SimplifyConfig;
///
/// let config = SimplifyConfig::default().with_max_rounds(5);
/// assert_eq!(config.max_rounds, 5);
/// assert!(!config.stop_when_stable);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SimplifyConfig {
    /// Upper bound on the number of rounds.
    pub max_rounds: usize,
    /// Stop as soon as a round leaves the tree unchanged.
    pub stop_when_stable: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_ROUNDS,
            stop_when_stable: false,
        }
    }
}

impl SimplifyConfig {
    /// Rounds until the tree stops changing.
    ///
    /// Trees that need more than [`DEFAULT_ROUNDS`] rounds simplify further than
    /// with [`Expr::simplify`].
    pub fn exhaustive() -> Self {
        Self {
            max_rounds: usize::MAX,
            stop_when_stable: true,
        }
    }

    pub fn with_max_rounds(self, max_rounds: usize) -> Self {
        Self { max_rounds, ..self }
    }
}

impl<T: Clone> Expr<T> {
    /// Simplifies the tree using the host implication between leaves.
    ///
    /// Runs [`DEFAULT_ROUNDS`] rounds. See the [module documentation](crate::simplify) for details.
    pub fn simplify<I>(&self, implies: &I) -> Expr<T>
    where
        I: Implication<T>,
    {
        let mut expr = self.flatten();
        for round in 1..=DEFAULT_ROUNDS {
            expr = simplify_round(&expr, implies, round);
        }
        expr
    }

    /// Simplifies the tree with an explicit [`SimplifyConfig`].
    pub fn simplify_with_config<I>(&self, implies: &I, config: &SimplifyConfig) -> Expr<T>
    where
        T: PartialEq,
        I: Implication<T>,
    {
        let mut expr = self.flatten();
        for round in 1..=config.max_rounds {
            let next = simplify_round(&expr, implies, round);
            if config.stop_when_stable && next == expr {
                debug!("simplify: stable after {} round(s)", round);
                return next;
            }
            expr = next;
        }
        expr
    }
}

fn simplify_round<T, I>(expr: &Expr<T>, implies: &I, round: usize) -> Expr<T>
where
    T: Clone,
    I: Implication<T>,
{
    let pruned = expr.remove_duplicate_children(implies);
    let absorbed = pruned.remove_duplicate_expressions(implies);
    debug!(
        "simplify: round {}: size {} -> {} -> {}",
        round,
        expr.size(),
        pruned.size(),
        absorbed.size()
    );
    absorbed
}

//! The two grouping kinds of a condition tree.

use std::fmt;

/// Kind of a group node: every child must hold (`And`) or some child must hold (`Or`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    And,
    Or,
}

impl Kind {
    /// Returns the other kind: `And` <-> `Or`.
    pub const fn opposite(self) -> Self {
        match self {
            Kind::And => Kind::Or,
            Kind::Or => Kind::And,
        }
    }

    pub const fn is_and(self) -> bool {
        matches!(self, Kind::And)
    }

    pub const fn is_or(self) -> bool {
        matches!(self, Kind::Or)
    }

    /// Infix operator symbol used when rendering.
    pub const fn symbol(self) -> &'static str {
        match self {
            Kind::And => "∧",
            Kind::Or => "∨",
        }
    }

    /// Rendering of an empty group of this kind (its neutral element).
    pub const fn empty_symbol(self) -> &'static str {
        match self {
            Kind::And => "⊤",
            Kind::Or => "⊥",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::And => write!(f, "AND"),
            Kind::Or => write!(f, "OR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Kind::And.opposite(), Kind::Or);
        assert_eq!(Kind::Or.opposite(), Kind::And);
        assert_eq!(Kind::And.opposite().opposite(), Kind::And);
    }

    #[test]
    fn test_predicates() {
        assert!(Kind::And.is_and());
        assert!(!Kind::And.is_or());
        assert!(Kind::Or.is_or());
        assert!(!Kind::Or.is_and());
    }

    #[test]
    fn test_display() {
        assert_eq!(Kind::And.to_string(), "AND");
        assert_eq!(Kind::Or.to_string(), "OR");
    }
}

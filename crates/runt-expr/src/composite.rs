//! Set-algebra composites over temporal expressions.
//!
//! Every composite is an immutable binary node. [`Empty`] is the neutral
//! element: the identity of [`Or`] and the absorbing element of [`And`].
//!
//! Composite operands are parenthesized when displayed, so the printed
//! description always names a single tree.

use std::fmt;

use runt_time::PrecisionInstant;

use crate::expression::{Expr, TemporalExpression};

/// Displays an operand, wrapped in parentheses when it is itself composite.
struct Operand<'a>(&'a Expr);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_composite() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Intersection: matches instants matched by both operands.
#[derive(Debug, Clone)]
pub struct And {
    left: Expr,
    right: Expr,
}

impl And {
    /// Combine two expressions.
    pub fn new(left: Expr, right: Expr) -> Self {
        Self { left, right }
    }
}

impl TemporalExpression for And {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        self.left.contains(instant) && self.right.contains(instant)
    }

    fn is_composite(&self) -> bool {
        true
    }
}

impl fmt::Display for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", Operand(&self.left), Operand(&self.right))
    }
}

/// Union: matches instants matched by either operand.
#[derive(Debug, Clone)]
pub struct Or {
    left: Expr,
    right: Expr,
}

impl Or {
    /// Combine two expressions.
    pub fn new(left: Expr, right: Expr) -> Self {
        Self { left, right }
    }
}

impl TemporalExpression for Or {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        self.left.contains(instant) || self.right.contains(instant)
    }

    fn is_composite(&self) -> bool {
        true
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} or {}", Operand(&self.left), Operand(&self.right))
    }
}

/// Difference: matches instants matched by `left` but not by `right`.
///
/// Despite the name this is set difference, not logical negation of
/// `right`: "every weekday except the third Thursday" is
/// `Not::new(weekdays, third_thursday)`.
#[derive(Debug, Clone)]
pub struct Not {
    left: Expr,
    right: Expr,
}

impl Not {
    /// Subtract `right` from `left`.
    pub fn new(left: Expr, right: Expr) -> Self {
        Self { left, right }
    }
}

impl TemporalExpression for Not {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        self.left.contains(instant) && !self.right.contains(instant)
    }

    fn is_composite(&self) -> bool {
        true
    }
}

impl fmt::Display for Not {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} except {}", Operand(&self.left), Operand(&self.right))
    }
}

/// Matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl TemporalExpression for Empty {
    fn contains(&self, _instant: &PrecisionInstant) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        true
    }
}

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("never")
    }
}

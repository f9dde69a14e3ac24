//! The `TemporalExpression` trait and the shared [`Expr`] handle.

use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};
use std::sync::Arc;

use runt_time::{DateRange, PrecisionInstant};

use crate::composite::{And, Empty, Not, Or};

/// A predicate over calendar instants.
///
/// Implementations are pure functions of their own fields and the queried
/// instant: `contains` never fails and never mutates, so one expression can
/// be evaluated from many threads at once.
pub trait TemporalExpression: fmt::Debug + fmt::Display + Send + Sync {
    /// Return `true` if `instant` is an occurrence of this expression.
    fn contains(&self, instant: &PrecisionInstant) -> bool;

    /// `true` only for the [`Empty`] expression.
    fn is_empty(&self) -> bool {
        false
    }

    /// `true` for the binary set-algebra nodes.
    fn is_composite(&self) -> bool {
        false
    }

    /// Wrap `self` in a shared [`Expr`] handle.
    fn into_expr(self) -> Expr
    where
        Self: Sized + 'static,
    {
        Expr::new(self)
    }
}

/// A shared, immutable handle to any temporal expression.
///
/// Cloning is cheap (an `Arc` bump). The combinator methods build a new
/// composite and leave their operands untouched; chaining is evaluated
/// strictly left to right: `a.or(b).and(c)` is `(a ∪ b) ∩ c`.
///
/// The `&`, `|`, and `-` operators are shorthands for [`and`](Expr::and),
/// [`or`](Expr::or), and [`not`](Expr::not), subject to Rust's usual
/// operator precedence.
#[derive(Clone)]
pub struct Expr(Arc<dyn TemporalExpression>);

impl Expr {
    /// Wrap an expression.
    pub fn new(expr: impl TemporalExpression + 'static) -> Self {
        Expr(Arc::new(expr))
    }

    /// The expression that matches nothing.
    pub fn empty() -> Self {
        Expr::new(Empty)
    }

    /// Return `true` if `instant` is an occurrence of this expression.
    pub fn contains(&self, instant: &PrecisionInstant) -> bool {
        self.0.contains(instant)
    }

    /// `true` if this is the [`Empty`] expression.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` if this is an [`And`], [`Or`] or [`Not`] node.
    pub fn is_composite(&self) -> bool {
        self.0.is_composite()
    }

    /// Intersection: instants matched by both `self` and `other`.
    pub fn and(&self, other: impl Into<Expr>) -> Expr {
        Expr::new(And::new(self.clone(), other.into()))
    }

    /// Union: instants matched by `self`, `other`, or both.
    pub fn or(&self, other: impl Into<Expr>) -> Expr {
        Expr::new(Or::new(self.clone(), other.into()))
    }

    /// Difference: instants matched by `self` but not by `other`.
    ///
    /// This is *not* the negation of `other`.
    pub fn not(&self, other: impl Into<Expr>) -> Expr {
        Expr::new(Not::new(self.clone(), other.into()))
    }

    /// Every day in `range` on which this expression holds, ascending.
    pub fn dates(&self, range: &DateRange) -> Vec<PrecisionInstant> {
        range.days().filter(|day| self.contains(day)).collect()
    }

    /// Like [`dates`](Expr::dates), stopping after `limit` occurrences.
    pub fn dates_limited(&self, range: &DateRange, limit: usize) -> Vec<PrecisionInstant> {
        range
            .days()
            .filter(|day| self.contains(day))
            .take(limit)
            .collect()
    }

    /// `true` if both handles point at the same expression node.
    pub fn ptr_eq(a: &Expr, b: &Expr) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: TemporalExpression + 'static> From<T> for Expr {
    fn from(expr: T) -> Self {
        Expr::new(expr)
    }
}

impl Default for Expr {
    fn default() -> Self {
        Expr::empty()
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl<T: Into<Expr>> BitAnd<T> for Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Expr {
        self.and(rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for Expr {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Expr {
        self.or(rhs)
    }
}

impl<T: Into<Expr>> Sub<T> for Expr {
    type Output = Expr;
    fn sub(self, rhs: T) -> Expr {
        self.not(rhs)
    }
}

/// English ordinal for a positive number: `1st`, `2nd`, `23rd`, `11th`.
pub(crate) fn ordinal_suffixed(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

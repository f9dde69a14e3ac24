//! `ExpressionBuilder` — accumulates a rule one clause at a time.
//!
//! The builder holds a single accumulator expression, seeded with
//! [`Empty`](runt_expr::Empty). Each step consumes the builder and returns a
//! new one whose accumulator is the previous one combined with the step's
//! argument, so no state is shared between chained calls. The first clause
//! replaces the empty seed whichever step adds it.

use runt_core::errors::Result;
use runt_expr::Expr;
use tracing::trace;

use crate::shorthand::parse_shorthand;

#[derive(Debug, Clone, Copy)]
enum Step {
    And,
    Or,
    Except,
}

/// Builds a temporal expression clause by clause.
///
/// ```
/// use runt_expr::{DayOfWeek, TimeOfDayRange};
/// use runt_sugar::ExpressionBuilder;
/// use runt_time::{PrecisionInstant, Weekday};
///
/// let rule = ExpressionBuilder::new()
///     .on(DayOfWeek::new(Weekday::Tuesday))
///     .possibly(DayOfWeek::new(Weekday::Thursday))
///     .every(TimeOfDayRange::new(8, 30, 9, 45)?)
///     .build();
///
/// assert!(rule.contains(&PrecisionInstant::minute(2020, 3, 5, 9, 0)?));
/// assert!(!rule.contains(&PrecisionInstant::minute(2020, 3, 5, 10, 0)?));
/// # Ok::<(), runt_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpressionBuilder {
    ctx: Expr,
}

impl ExpressionBuilder {
    /// A builder holding the empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the rule to instants also matched by `expr`.
    pub fn on(self, expr: impl Into<Expr>) -> Self {
        self.add(expr.into(), Step::And)
    }

    /// Alias of [`on`](Self::on).
    pub fn every(self, expr: impl Into<Expr>) -> Self {
        self.on(expr)
    }

    /// Alias of [`on`](Self::on).
    pub fn occurs(self, expr: impl Into<Expr>) -> Self {
        self.on(expr)
    }

    /// Widen the rule to instants matched by `expr` as well.
    pub fn possibly(self, expr: impl Into<Expr>) -> Self {
        self.add(expr.into(), Step::Or)
    }

    /// Alias of [`possibly`](Self::possibly).
    pub fn maybe(self, expr: impl Into<Expr>) -> Self {
        self.possibly(expr)
    }

    /// Remove the instants matched by `expr` from the rule.
    pub fn except(self, expr: impl Into<Expr>) -> Self {
        self.add(expr.into(), Step::Except)
    }

    /// [`on`](Self::on) with a shorthand name such as `"last_friday"`.
    pub fn on_named(self, name: &str) -> Result<Self> {
        Ok(self.on(parse_shorthand(name)?))
    }

    /// [`possibly`](Self::possibly) with a shorthand name.
    pub fn possibly_named(self, name: &str) -> Result<Self> {
        Ok(self.possibly(parse_shorthand(name)?))
    }

    /// [`except`](Self::except) with a shorthand name.
    pub fn except_named(self, name: &str) -> Result<Self> {
        Ok(self.except(parse_shorthand(name)?))
    }

    /// The expression accumulated so far.
    pub fn ctx(&self) -> &Expr {
        &self.ctx
    }

    /// Discard the accumulator.
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Finish, returning the accumulated expression.
    pub fn build(self) -> Expr {
        self.ctx
    }

    fn add(self, expr: Expr, step: Step) -> Self {
        if self.ctx.is_empty() {
            trace!(expr = %expr, "builder seeded");
            return Self { ctx: expr };
        }
        if Expr::ptr_eq(&self.ctx, &expr) {
            return self;
        }
        let ctx = match step {
            Step::And => self.ctx.and(expr),
            Step::Or => self.ctx.or(expr),
            Step::Except => self.ctx.not(expr),
        };
        trace!(?step, expr = %ctx, "builder extended");
        Self { ctx }
    }
}

//! Acceptance checks applied to candidate equations.

use crate::equation::Equation;
use crate::error::EquationError;

/// Decides whether a fully built equation is acceptable.
pub trait EquationChecker {
    fn check(&self, equation: &Equation) -> Result<bool, EquationError>;
}

/// Accepts an equation when both operands and its result lie in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeChecker {
    min: i32,
    max: i32,
}

impl RangeChecker {
    pub const DEFAULT_MIN: i32 = 0;
    pub const DEFAULT_MAX: i32 = 100;

    /// Inclusive bounds. Fails with `InvalidRange` when `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, EquationError> {
        if min > max {
            return Err(EquationError::InvalidRange { min, max });
        }
        Ok(RangeChecker { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for RangeChecker {
    fn default() -> Self {
        RangeChecker {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl EquationChecker for RangeChecker {
    fn check(&self, equation: &Equation) -> Result<bool, EquationError> {
        let operands = [equation.operand1(), equation.operand2()];
        if !operands.iter().all(|&v| self.contains(i32::from(v))) {
            return Ok(false);
        }
        // Result always comes from the equation itself so variant semantics apply.
        Ok(self.contains(equation.calculate()?))
    }
}

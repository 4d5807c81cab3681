//! Core of the equation drill generator.
//!
//! Builds sets of unique addition/subtraction equations whose operands and
//! results stay inside a closed range.

pub mod checker;
pub mod collection;
pub mod equation;
pub mod error;
pub mod factory;

pub use checker::{EquationChecker, RangeChecker};
pub use collection::{
    feasible_count, EquationCollection, GenerationStats, OperatorMode, OPERAND_MAX,
    OPERAND_MIN,
};
pub use equation::{Equation, EquationKind, Operand};
pub use error::EquationError;
pub use factory::EquationFactory;

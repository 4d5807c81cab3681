//! Construction of candidate equations.

use rand::Rng;

use crate::equation::{Equation, EquationKind};
use crate::error::EquationError;

/// Builds fresh equations with zero operands. Stateless; randomness is
/// supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquationFactory;

impl EquationFactory {
    pub fn new() -> Self {
        EquationFactory
    }

    /// Equation of the variant named by `kind` (`"Addition"` / `"Subtraction"`,
    /// or the short forms `"Add"` / `"Sub"`).
    pub fn create(&self, kind: &str) -> Result<Equation, EquationError> {
        let kind: EquationKind = kind.parse()?;
        Ok(Equation::new(kind))
    }

    /// Equation whose variant is picked by a fair coin flip.
    pub fn create_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Equation {
        if rng.gen_bool(0.5) {
            Equation::new(EquationKind::Addition)
        } else {
            Equation::new(EquationKind::Subtraction)
        }
    }
}

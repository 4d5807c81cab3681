//! JSON output types for `--format json`.

use eqgen_core::{Equation, EquationError, OperatorMode, RangeChecker};
use serde::Serialize;

pub const SCHEMA_VERSION: u32 = 1;

/// Whole generation run
#[derive(Serialize, Debug)]
pub struct GenerateJsonOutput {
    pub schema_version: u32,
    pub count: usize,
    pub range: RangeJson,
    pub operator_mode: OperatorMode,
    pub equations: Vec<EquationJson>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeJson {
    pub min: i32,
    pub max: i32,
}

impl From<&RangeChecker> for RangeJson {
    fn from(checker: &RangeChecker) -> Self {
        RangeJson {
            min: checker.min(),
            max: checker.max(),
        }
    }
}

/// One equation with its computed result
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EquationJson {
    pub operand1: i16,
    pub operator: String,
    pub operand2: i16,
    pub result: i32,
}

impl TryFrom<&Equation> for EquationJson {
    type Error = EquationError;

    fn try_from(eq: &Equation) -> Result<Self, Self::Error> {
        Ok(EquationJson {
            operand1: eq.operand1(),
            operator: eq.operator().to_string(),
            operand2: eq.operand2(),
            result: eq.calculate()?,
        })
    }
}

//! Equation value type.
//!
//! An [`Equation`] holds two operands, the operator symbol shown to the reader
//! and an [`EquationKind`] deciding which arithmetic [`Equation::calculate`]
//! performs. Addition and subtraction compute without looking at the symbol,
//! so they cannot fail; the [`EquationKind::Generic`] kind computes from the
//! symbol and rejects anything other than `+` and `-`.
//!
//! Equality and hashing cover `(operand1, operand2, operator)` only. The
//! result is a pure function of those fields for every consistent equation,
//! so it takes no part in identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::EquationError;

/// Operand storage type (16-bit signed).
pub type Operand = i16;

/// Which arithmetic an equation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquationKind {
    Addition,
    Subtraction,
    /// Computes from the operator symbol at calculate time.
    Generic,
}

impl EquationKind {
    /// Symbol matching this variant's arithmetic. `None` for `Generic`.
    pub fn symbol(self) -> Option<char> {
        match self {
            EquationKind::Addition => Some('+'),
            EquationKind::Subtraction => Some('-'),
            EquationKind::Generic => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EquationKind::Addition => "Addition",
            EquationKind::Subtraction => "Subtraction",
            EquationKind::Generic => "Generic",
        }
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a factory discriminator. Only concrete variants are nameable.
impl FromStr for EquationKind {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Addition" | "Add" => Ok(EquationKind::Addition),
            "Subtraction" | "Sub" => Ok(EquationKind::Subtraction),
            other => Err(EquationError::InvalidEquationType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Equation {
    kind: EquationKind,
    operand1: Operand,
    operand2: Operand,
    operator: char,
}

impl Equation {
    /// Fresh equation of `kind` with zero operands.
    ///
    /// The operator starts as the variant's own symbol; a generic equation
    /// starts with `'+'`.
    pub fn new(kind: EquationKind) -> Self {
        Equation {
            kind,
            operand1: 0,
            operand2: 0,
            operator: kind.symbol().unwrap_or('+'),
        }
    }

    pub fn addition(operand1: Operand, operand2: Operand) -> Self {
        Self::with_operands(EquationKind::Addition, operand1, operand2)
    }

    pub fn subtraction(operand1: Operand, operand2: Operand) -> Self {
        Self::with_operands(EquationKind::Subtraction, operand1, operand2)
    }

    /// Equation whose result is computed from `operator` alone.
    pub fn generic(operand1: Operand, operator: char, operand2: Operand) -> Self {
        let mut eq = Self::with_operands(EquationKind::Generic, operand1, operand2);
        eq.operator = operator;
        eq
    }

    fn with_operands(kind: EquationKind, operand1: Operand, operand2: Operand) -> Self {
        let mut eq = Self::new(kind);
        eq.operand1 = operand1;
        eq.operand2 = operand2;
        eq
    }

    pub fn kind(&self) -> EquationKind {
        self.kind
    }

    pub fn operand1(&self) -> Operand {
        self.operand1
    }

    pub fn operand2(&self) -> Operand {
        self.operand2
    }

    pub fn operator(&self) -> char {
        self.operator
    }

    pub fn set_operand1(&mut self, operand1: Operand) {
        self.operand1 = operand1;
    }

    pub fn set_operand2(&mut self, operand2: Operand) {
        self.operand2 = operand2;
    }

    /// Sets the displayed symbol. Not validated; for `Addition` and
    /// `Subtraction` it does not change what [`Equation::calculate`] returns.
    pub fn set_operator(&mut self, operator: char) {
        self.operator = operator;
    }

    /// Computes the result.
    ///
    /// Never fails for `Addition` or `Subtraction`. A `Generic` equation
    /// defers to [`Equation::calculate_by_operator`].
    pub fn calculate(&self) -> Result<i32, EquationError> {
        let (a, b) = (i32::from(self.operand1), i32::from(self.operand2));
        match self.kind {
            EquationKind::Addition => Ok(a + b),
            EquationKind::Subtraction => Ok(a - b),
            EquationKind::Generic => self.calculate_by_operator(),
        }
    }

    /// Computes the result from the operator symbol, ignoring the kind.
    pub fn calculate_by_operator(&self) -> Result<i32, EquationError> {
        let (a, b) = (i32::from(self.operand1), i32::from(self.operand2));
        match self.operator {
            '+' => Ok(a + b),
            '-' => Ok(a - b),
            other => Err(EquationError::UnsupportedOperator(other)),
        }
    }
}

impl PartialEq for Equation {
    fn eq(&self, other: &Self) -> bool {
        self.operand1 == other.operand1
            && self.operand2 == other.operand2
            && self.operator == other.operator
    }
}

impl Eq for Equation {}

// Must hash exactly the fields compared in `eq`.
impl Hash for Equation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.operand1.hash(state);
        self.operand2.hash(state);
        self.operator.hash(state);
    }
}

//! Generation of a set of unique, checked equations.
//!
//! [`EquationCollection::generate`] keeps drawing random candidates until the
//! set holds exactly `target` distinct equations:
//!
//! 1. ask the [`EquationFactory`] for a random-variant equation
//! 2. draw both operands uniformly from `[OPERAND_MIN, OPERAND_MAX]`
//! 3. pick the displayed operator according to the [`OperatorMode`]
//! 4. run the checker; rejected candidates are dropped
//! 5. insert; duplicates are no-ops
//!
//! There is no attempt limit. A target larger than the number of distinct
//! equations the checker accepts never finishes.

use std::collections::{hash_set, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::checker::EquationChecker;
use crate::equation::{Equation, Operand};
use crate::error::EquationError;
use crate::factory::EquationFactory;

/// Smallest operand ever drawn.
pub const OPERAND_MIN: Operand = 0;
/// Largest operand ever drawn.
pub const OPERAND_MAX: Operand = 100;

/// How the displayed operator of a generated equation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorMode {
    /// Operator is the variant's own symbol, so the printed line always
    /// matches the arithmetic.
    #[default]
    FromKind,
    /// Operator comes from a separate coin flip, independent of the variant.
    /// A subtraction may then be displayed as `a + b = a - b`.
    Independent,
}

/// Counters from one `generate` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub attempts: u64,
    pub rejected: u64,
    pub duplicates: u64,
}

impl GenerationStats {
    pub fn accepted(&self) -> u64 {
        self.attempts - self.rejected - self.duplicates
    }
}

#[derive(Debug, Clone, Default)]
pub struct EquationCollection {
    equations: HashSet<Equation>,
    target: usize,
    factory: EquationFactory,
    operator_mode: OperatorMode,
}

impl EquationCollection {
    /// Empty collection that will grow to `target` equations.
    pub fn new(target: usize) -> Self {
        EquationCollection {
            equations: HashSet::new(),
            target,
            factory: EquationFactory::new(),
            operator_mode: OperatorMode::default(),
        }
    }

    pub fn with_operator_mode(mut self, mode: OperatorMode) -> Self {
        self.operator_mode = mode;
        self
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn operator_mode(&self) -> OperatorMode {
        self.operator_mode
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// True once the target has been reached. A complete collection ignores
    /// further `generate` calls.
    pub fn is_complete(&self) -> bool {
        self.equations.len() >= self.target
    }

    pub fn contains(&self, equation: &Equation) -> bool {
        self.equations.contains(equation)
    }

    /// Fills the collection up to its target.
    ///
    /// Errors only if the checker fails, which a range checker never does for
    /// the addition and subtraction candidates produced here.
    pub fn generate<C, R>(
        &mut self,
        checker: &C,
        rng: &mut R,
    ) -> Result<GenerationStats, EquationError>
    where
        C: EquationChecker + ?Sized,
        R: Rng + ?Sized,
    {
        let mut stats = GenerationStats::default();
        if self.is_complete() {
            return Ok(stats);
        }

        debug!(
            target = self.target,
            have = self.equations.len(),
            mode = ?self.operator_mode,
            "generating equations"
        );

        while self.equations.len() < self.target {
            stats.attempts += 1;
            let candidate = self.next_candidate(rng);

            if !checker.check(&candidate)? {
                stats.rejected += 1;
                trace!(
                    operand1 = candidate.operand1(),
                    operator = %candidate.operator(),
                    operand2 = candidate.operand2(),
                    kind = %candidate.kind(),
                    "candidate rejected"
                );
                continue;
            }

            if !self.equations.insert(candidate) {
                stats.duplicates += 1;
            }
        }

        debug!(
            count = self.equations.len(),
            attempts = stats.attempts,
            rejected = stats.rejected,
            duplicates = stats.duplicates,
            "generation finished"
        );
        Ok(stats)
    }

    fn next_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Equation {
        let mut candidate = self.factory.create_random(rng);
        candidate.set_operand1(rng.gen_range(OPERAND_MIN..=OPERAND_MAX));
        candidate.set_operand2(rng.gen_range(OPERAND_MIN..=OPERAND_MAX));

        let operator = match self.operator_mode {
            OperatorMode::Independent => {
                if rng.gen_bool(0.5) {
                    '+'
                } else {
                    '-'
                }
            }
            OperatorMode::FromKind => candidate.operator(),
        };
        candidate.set_operator(operator);
        candidate
    }

    /// Stored equations in unspecified order. Can be called repeatedly.
    pub fn iter(&self) -> hash_set::Iter<'_, Equation> {
        self.equations.iter()
    }
}

/// Number of distinct equations `generate` can ever produce under `checker`.
///
/// Enumerates every operand pair in `[OPERAND_MIN, OPERAND_MAX]` with both
/// variants, and in `Independent` mode both displayed symbols. A target above
/// this count never completes.
pub fn feasible_count<C>(checker: &C, mode: OperatorMode) -> Result<usize, EquationError>
where
    C: EquationChecker + ?Sized,
{
    let factory = EquationFactory::new();
    let symbols: &[Option<char>] = match mode {
        OperatorMode::FromKind => &[None],
        OperatorMode::Independent => &[Some('+'), Some('-')],
    };

    let mut accepted = HashSet::new();
    for kind in ["Addition", "Subtraction"] {
        for a in OPERAND_MIN..=OPERAND_MAX {
            for b in OPERAND_MIN..=OPERAND_MAX {
                for symbol in symbols {
                    let mut candidate = factory.create(kind)?;
                    candidate.set_operand1(a);
                    candidate.set_operand2(b);
                    if let Some(op) = symbol {
                        candidate.set_operator(*op);
                    }
                    if checker.check(&candidate)? {
                        accepted.insert(candidate);
                    }
                }
            }
        }
    }
    Ok(accepted.len())
}

impl<'a> IntoIterator for &'a EquationCollection {
    type Item = &'a Equation;
    type IntoIter = hash_set::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

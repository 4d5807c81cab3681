//! Rendering of generated equations for stdout.

use eqgen_core::{Equation, EquationCollection, EquationError, RangeChecker};

use crate::json_types::{EquationJson, GenerateJsonOutput, RangeJson, SCHEMA_VERSION};

/// Header printed above the text listing.
pub const TEXT_HEADER: &str = "Equations:";

/// `<operand1> <operator> <operand2> = <result>`
pub fn format_equation(eq: &Equation) -> Result<String, EquationError> {
    Ok(format!(
        "{} {} {} = {}",
        eq.operand1(),
        eq.operator(),
        eq.operand2(),
        eq.calculate()?
    ))
}

/// Header line followed by one line per equation, newline terminated.
pub fn render_text(collection: &EquationCollection) -> Result<String, EquationError> {
    let mut out = String::new();
    out.push_str(TEXT_HEADER);
    out.push('\n');
    for eq in collection {
        out.push_str(&format_equation(eq)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn json_output(
    collection: &EquationCollection,
    checker: &RangeChecker,
) -> Result<GenerateJsonOutput, EquationError> {
    let equations = collection
        .iter()
        .map(EquationJson::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenerateJsonOutput {
        schema_version: SCHEMA_VERSION,
        count: equations.len(),
        range: RangeJson::from(checker),
        operator_mode: collection.operator_mode(),
        equations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqgen_core::EquationKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_format_addition_line() {
        let eq = Equation::addition(37, 12);
        assert_eq!(format_equation(&eq).unwrap(), "37 + 12 = 49");
    }

    #[test]
    fn test_format_shows_stored_symbol() {
        let mut eq = Equation::new(EquationKind::Subtraction);
        eq.set_operand1(9);
        eq.set_operand2(4);
        eq.set_operator('+');
        assert_eq!(format_equation(&eq).unwrap(), "9 + 4 = 5");
    }

    #[test]
    fn test_format_generic_error() {
        let eq = Equation::generic(2, '*', 3);
        assert_eq!(
            format_equation(&eq),
            Err(EquationError::UnsupportedOperator('*'))
        );
    }

    #[test]
    fn test_render_text_empty_collection() {
        let collection = EquationCollection::new(0);
        assert_eq!(render_text(&collection).unwrap(), "Equations:\n");
    }

    #[test]
    fn test_json_output_counts() {
        let checker = RangeChecker::default();
        let mut collection = EquationCollection::new(7);
        collection
            .generate(&checker, &mut StdRng::seed_from_u64(3))
            .unwrap();

        let out = json_output(&collection, &checker).unwrap();
        assert_eq!(out.count, 7);
        assert_eq!(out.equations.len(), 7);
        assert_eq!(out.range, RangeJson { min: 0, max: 100 });
        for eq in &out.equations {
            let expected = match eq.operator.as_str() {
                "+" => i32::from(eq.operand1) + i32::from(eq.operand2),
                _ => i32::from(eq.operand1) - i32::from(eq.operand2),
            };
            assert_eq!(eq.result, expected);
        }
    }
}

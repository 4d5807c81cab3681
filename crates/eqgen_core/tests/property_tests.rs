//! Property tests for equation arithmetic, range checking and generation.
//!
//! Generation properties run on a seeded ChaCha8 stream so a failing case
//! shrinks to a reproducible (seed, count) pair.

use std::collections::HashSet;

use eqgen_core::{
    Equation, EquationChecker, EquationCollection, EquationKind, OperatorMode, RangeChecker,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_operator() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/'), any::<char>()]
}

fn any_mode() -> impl Strategy<Value = OperatorMode> {
    prop_oneof![Just(OperatorMode::FromKind), Just(OperatorMode::Independent)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn addition_is_sum_for_any_symbol(a in any::<i16>(), b in any::<i16>(), op in any_operator()) {
        let mut eq = Equation::addition(a, b);
        eq.set_operator(op);
        prop_assert_eq!(eq.calculate(), Ok(i32::from(a) + i32::from(b)));
    }

    #[test]
    fn subtraction_is_difference_for_any_symbol(a in any::<i16>(), b in any::<i16>(), op in any_operator()) {
        let mut eq = Equation::subtraction(a, b);
        eq.set_operator(op);
        prop_assert_eq!(eq.calculate(), Ok(i32::from(a) - i32::from(b)));
    }

    #[test]
    fn setters_read_back(a in any::<i16>(), b in any::<i16>(), op in any_operator(), add in any::<bool>()) {
        let kind = if add { EquationKind::Addition } else { EquationKind::Subtraction };
        let mut eq = Equation::new(kind);
        eq.set_operand1(a);
        eq.set_operand2(b);
        eq.set_operator(op);
        prop_assert_eq!(eq.operand1(), a);
        prop_assert_eq!(eq.operand2(), b);
        prop_assert_eq!(eq.operator(), op);
        prop_assert_eq!(eq.kind(), kind);
    }

    #[test]
    fn range_check_matches_definition(
        a in -20i16..140,
        b in -20i16..140,
        add in any::<bool>(),
        min in -50i32..50,
        width in 0i32..150,
    ) {
        let max = min + width;
        let checker = RangeChecker::new(min, max).unwrap();
        let eq = if add { Equation::addition(a, b) } else { Equation::subtraction(a, b) };
        let result = eq.calculate().unwrap();
        let inside = |v: i32| min <= v && v <= max;
        let expected = inside(a.into()) && inside(b.into()) && inside(result);
        prop_assert_eq!(checker.check(&eq), Ok(expected));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generated_collection_is_valid_and_unique(seed in any::<u64>(), n in 0usize..120, mode in any_mode()) {
        let checker = RangeChecker::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut collection = EquationCollection::new(n).with_operator_mode(mode);
        collection.generate(&checker, &mut rng).unwrap();

        prop_assert_eq!(collection.len(), n);

        let mut seen = HashSet::new();
        for eq in &collection {
            prop_assert!((0..=100).contains(&eq.operand1()));
            prop_assert!((0..=100).contains(&eq.operand2()));
            let result = eq.calculate().unwrap();
            prop_assert!((0..=100).contains(&result));
            prop_assert!(seen.insert((eq.operand1(), eq.operand2(), eq.operator())));
        }
        prop_assert_eq!(seen.len(), n);
    }

    #[test]
    fn iteration_is_restartable(seed in any::<u64>(), n in 1usize..40) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut collection = EquationCollection::new(n);
        collection.generate(&RangeChecker::default(), &mut rng).unwrap();

        let first: Vec<Equation> = collection.iter().copied().collect();
        let second: Vec<Equation> = collection.iter().copied().collect();
        prop_assert_eq!(first, second);
    }
}

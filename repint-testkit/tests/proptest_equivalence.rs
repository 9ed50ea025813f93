//! Property tests: lazy answers equal the answers over the realized buffer


use proptest::prelude::*;
use repint_testkit::repint_core::{Descriptor, Int, RepInt, State};
use repint_testkit::{check_equivalence, report, NaiveVec};

proptest! {
    /// Every index reads the repeated value without materializing
    #[test]
    fn elt_is_value_everywhere(
        value in generators::arb_value(),
        length in generators::arb_length()
    ) {
        let v = RepInt::new(value, length);
        for i in 0..length {
            prop_assert_eq!(v.elt(i).unwrap(), value);
        }
        prop_assert!(v.elt(length).unwrap_err().is_index_out_of_range());
        prop_assert_eq!(v.state(), State::Lazy);
    }

    /// Length is the descriptor length, at any size
    #[test]
    fn len_is_descriptor_length(
        value in generators::arb_value(),
        length in generators::arb_huge_length()
    ) {
        let v = RepInt::new(value, length);
        prop_assert_eq!(v.len(), length);
        prop_assert_eq!(v.descriptor(), Descriptor::new(value, length));
    }

    /// The full standard scenario agrees with the reference vector
    #[test]
    fn standard_scenario_agrees(
        value in generators::arb_value(),
        length in generators::arb_length()
    ) {
        let run = check_equivalence(value, length);
        prop_assert!(run.passed(), "{}", report(&run.mismatches));
    }

    /// Regions match an element-by-element copy
    #[test]
    fn region_matches_naive(
        value in generators::arb_value(),
        length in generators::arb_length(),
        start in 0u64..400,
        count in 0u64..400,
        buf_len in 0usize..64
    ) {
        let v = RepInt::new(value, length);
        let naive = NaiveVec::from_descriptor(v.descriptor());
        let mut a = vec![1; buf_len];
        let mut b = vec![1; buf_len];
        prop_assert_eq!(v.get_region(start, count, &mut a), naive.get_region(start, count, &mut b));
        prop_assert_eq!(a, b);
        prop_assert!(!v.is_materialized());
    }

    /// Duplicates carry the same descriptor and start lazy
    #[test]
    fn duplicate_is_identical_and_lazy(
        value in generators::arb_value(),
        length in generators::arb_length(),
        realize_first in any::<bool>()
    ) {
        let v = RepInt::new(value, length);
        if realize_first {
            v.realize().unwrap();
        }
        let d = v.duplicate();
        prop_assert_eq!(d.descriptor(), v.descriptor());
        prop_assert_eq!(d.state(), State::Lazy);
        prop_assert_eq!(d.realize().unwrap(), v.realize().unwrap());
    }

    /// Realizing twice hands back the same buffer
    #[test]
    fn realize_is_idempotent(
        value in generators::arb_value(),
        length in generators::arb_length()
    ) {
        let v = RepInt::new(value, length);
        let first = v.realize().unwrap().as_ptr();
        let second = v.realize().unwrap().as_ptr();
        prop_assert_eq!(first, second);
        prop_assert!(v.realize().unwrap().iter().all(|&x| Int::from_raw(x) == value));
    }

    /// Sortedness and missingness come from the descriptor alone
    #[test]
    fn sorted_and_no_na_from_descriptor(
        value in generators::arb_value(),
        length in generators::arb_huge_length()
    ) {
        let v = RepInt::new(value, length);
        prop_assert!(v.is_sorted());
        prop_assert_eq!(v.no_na(), !value.is_na());
    }

    /// Sum is exact when it fits in 64 bits and an error otherwise
    #[test]
    fn sum_is_exact_or_overflow(
        value in generators::arb_value(),
        length in generators::arb_huge_length(),
        na_rm in any::<bool>()
    ) {
        let v = RepInt::new(value, length);
        let result = v.sum(na_rm);
        match value {
            _ if length == 0 => prop_assert_eq!(result.unwrap(), Some(0)),
            Int::Na => prop_assert_eq!(result.unwrap(), if na_rm { Some(0) } else { None }),
            Int::Value(x) => {
                let exact = i128::from(x) * i128::from(length);
                match i64::try_from(exact) {
                    Ok(expected) => prop_assert_eq!(result.unwrap(), Some(expected)),
                    Err(_) => prop_assert!(result.unwrap_err().is_integer_overflow()),
                }
            }
        }
    }

    /// Min and max signal an empty reduction instead of inventing a value
    #[test]
    fn min_max_empty_reduction(
        value in generators::arb_value(),
        length in generators::arb_huge_length(),
        na_rm in any::<bool>()
    ) {
        let v = RepInt::new(value, length);
        let empty = length == 0 || (value.is_na() && na_rm);
        for result in [v.min(na_rm), v.max(na_rm)] {
            if empty {
                prop_assert!(result.unwrap_err().is_empty_reduction());
            } else {
                prop_assert_eq!(result.unwrap(), value);
            }
        }
    }
}

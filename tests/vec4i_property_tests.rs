//! Property-based testing for Vec4i
//!
//! Checks the lane arithmetic against 64-bit reference arithmetic truncated
//! to 32 bits, and the compiled kernels against the scalar kernels.

use proptest::prelude::*;
use vec4i::simd::scalar;
use vec4i::{BatchOps, Vec4i};

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Lanes biased toward the boundary values where wrapping matters
fn lane_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![
        4 => any::<i32>(),
        1 => prop::sample::select(vec![0, 1, -1, i32::MAX, i32::MIN, i32::MAX - 1, i32::MIN + 1]),
    ]
}

fn vec4i_strategy() -> impl Strategy<Value = Vec4i> {
    prop::array::uniform4(lane_strategy()).prop_map(Vec4i::from)
}

fn truncate(v: i64) -> i32 {
    v as i32
}

// =============================================================================
// ARITHMETIC PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_add_wraps_lane_wise(a in vec4i_strategy(), b in vec4i_strategy()) {
        let sum = a + b;
        for i in 0..4 {
            prop_assert_eq!(sum.vals[i], truncate(a.vals[i] as i64 + b.vals[i] as i64));
        }
    }

    #[test]
    fn prop_sub_wraps_lane_wise(a in vec4i_strategy(), b in vec4i_strategy()) {
        let diff = a - b;
        for i in 0..4 {
            prop_assert_eq!(diff.vals[i], truncate(a.vals[i] as i64 - b.vals[i] as i64));
        }
    }

    #[test]
    fn prop_sub_inverts_add(a in vec4i_strategy(), b in vec4i_strategy()) {
        prop_assert_eq!((a - b) + b, a);
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn prop_mul_keeps_low_bits(a in vec4i_strategy(), b in vec4i_strategy()) {
        let product = a * b;
        for i in 0..4 {
            let wide = a.vals[i] as i64 * b.vals[i] as i64;
            prop_assert_eq!(product.vals[i], truncate(wide));
        }
    }

    #[test]
    fn prop_abs_lane_wise(v in vec4i_strategy()) {
        let out = v.abs();
        for i in 0..4 {
            if v.vals[i] == i32::MIN {
                prop_assert_eq!(out.vals[i], i32::MIN);
            } else {
                prop_assert_eq!(out.vals[i], v.vals[i].abs());
            }
        }
    }

    #[test]
    fn prop_compound_assign_matches_binary(a in vec4i_strategy(), b in vec4i_strategy()) {
        let mut v = a;
        v += b;
        prop_assert_eq!(v, a + b);

        let mut v = a;
        v -= b;
        prop_assert_eq!(v, a - b);

        let mut v = a;
        v *= b;
        prop_assert_eq!(v, a * b);
    }

    #[test]
    fn prop_add_commutes_and_associates(
        a in vec4i_strategy(),
        b in vec4i_strategy(),
        c in vec4i_strategy()
    ) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!(a * b, b * a);
    }
}

// =============================================================================
// KERNEL EQUIVALENCE
// =============================================================================

proptest! {
    #[test]
    fn prop_compiled_kernels_match_scalar(a in vec4i_strategy(), b in vec4i_strategy()) {
        prop_assert_eq!(a + b, scalar::add(a, b));
        prop_assert_eq!(a - b, scalar::sub(a, b));
        prop_assert_eq!(a * b, scalar::mul(a, b));
        prop_assert_eq!(a.abs(), scalar::abs(a));
    }

    #[test]
    fn prop_batch_matches_operators(
        pairs in prop::collection::vec((vec4i_strategy(), vec4i_strategy()), 0..64)
    ) {
        let (a, b): (Vec<Vec4i>, Vec<Vec4i>) = pairs.into_iter().unzip();
        let ops = BatchOps::default();
        let mut out = vec![Vec4i::ZERO; a.len()];

        ops.mul(&mut out, &a, &b).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(out[i], a[i] * b[i]);
        }

        let expected = a.iter().fold(Vec4i::ZERO, |acc, v| acc + v);
        prop_assert_eq!(ops.sum(&a), expected);
        prop_assert_eq!(BatchOps::scalar().sum(&a), expected);
    }

    #[test]
    fn prop_views_agree(lanes in prop::array::uniform4(any::<i32>())) {
        let v = Vec4i::from(lanes);
        prop_assert_eq!([v.xyzw().x, v.xyzw().y, v.xyzw().z, v.xyzw().w], lanes);
        prop_assert_eq!([v.rgba().r, v.rgba().g, v.rgba().b, v.rgba().a], lanes);
        prop_assert_eq!([v[0], v[1], v[2], v[3]], lanes);
    }
}

//! x86_64 lane kernels.
//!
//! SSE2 is part of the x86_64 baseline and covers add/sub directly. Multiply
//! uses `PMULLD` when built with `sse4.1`, otherwise two `PMULUDQ` on the
//! even/odd lanes (the low 32 bits of a product do not depend on
//! signedness). Absolute value uses `PABSD` when built with `ssse3`,
//! otherwise `(v ^ m) - m` with `m = v >> 31`. Both forms map `i32::MIN` to
//! itself.

use std::arch::x86_64::*;

use crate::vector::Vec4i;

/// Lane-wise wrapping addition (`PADDD`)
#[inline(always)]
pub fn add(a: Vec4i, b: Vec4i) -> Vec4i {
    // SAFETY: SSE2 is always available on x86_64.
    unsafe { Vec4i::from(_mm_add_epi32(a.into(), b.into())) }
}

/// Lane-wise wrapping subtraction (`PSUBD`)
#[inline(always)]
pub fn sub(a: Vec4i, b: Vec4i) -> Vec4i {
    // SAFETY: SSE2 is always available on x86_64.
    unsafe { Vec4i::from(_mm_sub_epi32(a.into(), b.into())) }
}

/// Lane-wise multiplication keeping the low 32 bits
#[inline(always)]
pub fn mul(a: Vec4i, b: Vec4i) -> Vec4i {
    #[cfg(target_feature = "sse4.1")]
    {
        // SAFETY: guarded by the sse4.1 target feature.
        unsafe { Vec4i::from(_mm_mullo_epi32(a.into(), b.into())) }
    }
    #[cfg(not(target_feature = "sse4.1"))]
    {
        // SAFETY: SSE2 is always available on x86_64.
        unsafe { Vec4i::from(mullo_sse2(a.into(), b.into())) }
    }
}

#[cfg(not(target_feature = "sse4.1"))]
#[inline(always)]
unsafe fn mullo_sse2(a: __m128i, b: __m128i) -> __m128i {
    // SAFETY: caller guarantees SSE2, which every intrinsic below requires.
    unsafe {
        // 64-bit products of lanes 0 and 2, then of lanes 1 and 3
        let even = _mm_mul_epu32(a, b);
        let odd = _mm_mul_epu32(_mm_srli_si128::<4>(a), _mm_srli_si128::<4>(b));
        // Keep the low dword of each product and interleave back into order
        let even = _mm_shuffle_epi32::<0b00_00_10_00>(even);
        let odd = _mm_shuffle_epi32::<0b00_00_10_00>(odd);
        _mm_unpacklo_epi32(even, odd)
    }
}

/// Lane-wise absolute value, `i32::MIN` maps to itself
#[inline(always)]
pub fn abs(v: Vec4i) -> Vec4i {
    #[cfg(target_feature = "ssse3")]
    {
        // SAFETY: guarded by the ssse3 target feature.
        unsafe { Vec4i::from(_mm_abs_epi32(v.into())) }
    }
    #[cfg(not(target_feature = "ssse3"))]
    {
        // SAFETY: SSE2 is always available on x86_64.
        unsafe {
            let v: __m128i = v.into();
            let sign = _mm_srai_epi32::<31>(v);
            Vec4i::from(_mm_sub_epi32(_mm_xor_si128(v, sign), sign))
        }
    }
}

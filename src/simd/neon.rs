//! aarch64 NEON lane kernels.
//!
//! NEON is mandatory on aarch64. `VABS` wraps rather than saturates, so
//! `i32::MIN` maps to itself as in the scalar kernel.

use std::arch::aarch64::*;

use crate::vector::Vec4i;

/// Lane-wise wrapping addition (`ADD.4S`)
#[inline(always)]
pub fn add(a: Vec4i, b: Vec4i) -> Vec4i {
    // SAFETY: NEON is always available on aarch64.
    unsafe { Vec4i::from(vaddq_s32(a.into(), b.into())) }
}

/// Lane-wise wrapping subtraction (`SUB.4S`)
#[inline(always)]
pub fn sub(a: Vec4i, b: Vec4i) -> Vec4i {
    // SAFETY: NEON is always available on aarch64.
    unsafe { Vec4i::from(vsubq_s32(a.into(), b.into())) }
}

/// Lane-wise multiplication keeping the low 32 bits (`MUL.4S`)
#[inline(always)]
pub fn mul(a: Vec4i, b: Vec4i) -> Vec4i {
    // SAFETY: NEON is always available on aarch64.
    unsafe { Vec4i::from(vmulq_s32(a.into(), b.into())) }
}

/// Lane-wise absolute value, `i32::MIN` maps to itself (`ABS.4S`)
#[inline(always)]
pub fn abs(v: Vec4i) -> Vec4i {
    // SAFETY: NEON is always available on aarch64.
    unsafe { Vec4i::from(vabsq_s32(v.into())) }
}

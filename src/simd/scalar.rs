//! Portable lane kernels.
//!
//! Always compiled. These define the reference results every native kernel
//! must reproduce bit for bit.

use crate::vector::Vec4i;

#[inline(always)]
fn map2(a: Vec4i, b: Vec4i, f: impl Fn(i32, i32) -> i32) -> Vec4i {
    let (a, b) = (a.vals, b.vals);
    Vec4i::new(f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3]))
}

/// Lane-wise wrapping addition
#[inline]
pub fn add(a: Vec4i, b: Vec4i) -> Vec4i {
    map2(a, b, i32::wrapping_add)
}

/// Lane-wise wrapping subtraction
#[inline]
pub fn sub(a: Vec4i, b: Vec4i) -> Vec4i {
    map2(a, b, i32::wrapping_sub)
}

/// Lane-wise multiplication keeping the low 32 bits of each product
#[inline]
pub fn mul(a: Vec4i, b: Vec4i) -> Vec4i {
    map2(a, b, i32::wrapping_mul)
}

/// Lane-wise absolute value, `i32::MIN` maps to itself
#[inline]
pub fn abs(v: Vec4i) -> Vec4i {
    let [x, y, z, w] = v.vals;
    Vec4i::new(x.wrapping_abs(), y.wrapping_abs(), z.wrapping_abs(), w.wrapping_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_add_sub() {
        let a = Vec4i::new(i32::MAX, -7, 0, 100);
        let b = Vec4i::new(1, 7, -1, -100);
        assert_eq!(add(a, b).vals, [i32::MIN, 0, -1, 0]);
        assert_eq!(sub(add(a, b), b), a);
    }

    #[test]
    fn test_scalar_mul_low_bits() {
        let a = Vec4i::new(0x7fff_ffff, 0x1_0000, -1, 3);
        let b = Vec4i::new(2, 0x1_0000, -1, -3);
        assert_eq!(mul(a, b).vals, [-2, 0, 1, -9]);
    }

    #[test]
    fn test_scalar_abs() {
        let v = Vec4i::new(-5, 7, 0, i32::MIN);
        assert_eq!(abs(v).vals, [5, 7, 0, i32::MIN]);
    }
}

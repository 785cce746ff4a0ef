//! # Vec4i
//!
//! Four signed 32-bit lanes in 16 bytes of 16-byte aligned storage, laid out
//! so a single aligned 128-bit load/store moves the whole vector.
//!
//! ## Lane views
//!
//! The lanes can be read and written as an array (`vals`), as spatial
//! components (`x, y, z, w`) and as color components (`r, g, b, a`). All
//! three views borrow the same storage:
//!
//! ```
//! use vec4i::Vec4i;
//!
//! let mut v = Vec4i::new(1, 2, 3, 4);
//! v.rgba_mut().g = 20;
//! assert_eq!(v.y(), 20);
//! assert_eq!(v.vals, [1, 20, 3, 4]);
//! ```
//!
//! ## Overflow
//!
//! Lane arithmetic wraps in two's complement in every build profile. It
//! never panics and never reports the overflow. `abs` maps `i32::MIN` to
//! itself, see [`Vec4i::abs`].

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use super::views::{self, Rgba, Xyzw};
use crate::error::{Result, Vec4iError};
use crate::simd::native;

/// Aligned vector of four `i32` lanes
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec4i {
    /// Lanes in order 0..3 (`x, y, z, w` / `r, g, b, a`)
    pub vals: [i32; 4],
}

const _: () = {
    assert!(std::mem::size_of::<Vec4i>() == 16);
    assert!(std::mem::align_of::<Vec4i>() == 16);
};

macro_rules! lane_accessors {
    ($($get:ident, $set:ident => $lane:expr;)*) => {
        $(
            #[doc = concat!("Lane ", stringify!($lane), " (`", stringify!($get), "`)")]
            #[inline(always)]
            pub const fn $get(&self) -> i32 {
                self.vals[$lane]
            }

            #[doc = concat!("Overwrite lane ", stringify!($lane), " (`", stringify!($get), "`)")]
            #[inline(always)]
            pub fn $set(&mut self, value: i32) {
                self.vals[$lane] = value;
            }
        )*
    };
}

impl Vec4i {
    /// Number of lanes
    pub const LANES: usize = 4;

    /// All lanes zero
    pub const ZERO: Self = Self { vals: [0; 4] };

    /// Build from four lanes in `x, y, z, w` order
    #[inline(always)]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { vals: [x, y, z, w] }
    }

    /// Broadcast one value to every lane
    #[inline(always)]
    pub const fn splat(value: i32) -> Self {
        Self { vals: [value; 4] }
    }

    /// Build from an array, lane `i` taken from `vals[i]`
    #[inline(always)]
    pub const fn from_array(vals: [i32; 4]) -> Self {
        Self { vals }
    }

    /// Build from the first four elements of a slice.
    ///
    /// Elements past the fourth are ignored. A slice shorter than four
    /// elements is rejected with [`Vec4iError::OutOfBounds`] naming the
    /// first missing lane index.
    pub fn from_slice(vals: &[i32]) -> Result<Self> {
        match vals.get(..Self::LANES) {
            Some(head) => {
                let mut v = Self::ZERO;
                v.vals.copy_from_slice(head);
                Ok(v)
            }
            None => Err(Vec4iError::out_of_bounds(vals.len(), vals.len())),
        }
    }

    /// Copy the lanes out as an array
    #[inline(always)]
    pub const fn to_array(self) -> [i32; 4] {
        self.vals
    }

    /// Borrow the lanes as an array
    #[inline(always)]
    pub const fn as_array(&self) -> &[i32; 4] {
        &self.vals
    }

    /// Mutably borrow the lanes as an array
    #[inline(always)]
    pub fn as_array_mut(&mut self) -> &mut [i32; 4] {
        &mut self.vals
    }

    lane_accessors! {
        x, set_x => 0;
        y, set_y => 1;
        z, set_z => 2;
        w, set_w => 3;
        r, set_r => 0;
        g, set_g => 1;
        b, set_b => 2;
        a, set_a => 3;
    }

    /// Borrow the lanes as `x, y, z, w` fields
    #[inline(always)]
    pub fn xyzw(&self) -> &Xyzw {
        views::xyzw_ref(&self.vals)
    }

    /// Mutably borrow the lanes as `x, y, z, w` fields
    #[inline(always)]
    pub fn xyzw_mut(&mut self) -> &mut Xyzw {
        views::xyzw_mut(&mut self.vals)
    }

    /// Borrow the lanes as `r, g, b, a` fields
    #[inline(always)]
    pub fn rgba(&self) -> &Rgba {
        views::rgba_ref(&self.vals)
    }

    /// Mutably borrow the lanes as `r, g, b, a` fields
    #[inline(always)]
    pub fn rgba_mut(&mut self) -> &mut Rgba {
        views::rgba_mut(&mut self.vals)
    }

    /// Lane-wise absolute value.
    ///
    /// `i32::MIN` has no positive counterpart; a lane holding it comes back
    /// as `i32::MIN` unchanged (the wrapping result PABSD and NEON `VABS`
    /// produce). Callers that need a non-negative result must guard that
    /// value themselves.
    #[inline]
    pub fn abs(self) -> Self {
        native::abs(self)
    }

    /// `*self += rhs`, returning `self` for chaining
    #[inline]
    pub fn add_in_place(&mut self, rhs: Self) -> &mut Self {
        *self += rhs;
        self
    }

    /// `*self -= rhs`, returning `self` for chaining
    #[inline]
    pub fn sub_in_place(&mut self, rhs: Self) -> &mut Self {
        *self -= rhs;
        self
    }

    /// `*self *= rhs`, returning `self` for chaining
    #[inline]
    pub fn mul_in_place(&mut self, rhs: Self) -> &mut Self {
        *self *= rhs;
        self
    }

    /// Reinterpret the lanes as an SSE register
    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    pub fn to_native(self) -> std::arch::x86_64::__m128i {
        self.into()
    }

    /// Reinterpret the lanes as a NEON register
    #[cfg(target_arch = "aarch64")]
    #[inline(always)]
    pub fn to_native(self) -> std::arch::aarch64::int32x4_t {
        self.into()
    }
}

/// Operator impls (owned and borrowed, plus compound assignment) over a
/// lane kernel.
macro_rules! impl_lane_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $kernel:path) => {
        impl $Op for Vec4i {
            type Output = Vec4i;

            #[inline]
            fn $op(self, rhs: Vec4i) -> Vec4i {
                $kernel(self, rhs)
            }
        }

        impl $Op<&Vec4i> for Vec4i {
            type Output = Vec4i;

            #[inline]
            fn $op(self, rhs: &Vec4i) -> Vec4i {
                $kernel(self, *rhs)
            }
        }

        impl $Op<Vec4i> for &Vec4i {
            type Output = Vec4i;

            #[inline]
            fn $op(self, rhs: Vec4i) -> Vec4i {
                $kernel(*self, rhs)
            }
        }

        impl $Op<&Vec4i> for &Vec4i {
            type Output = Vec4i;

            #[inline]
            fn $op(self, rhs: &Vec4i) -> Vec4i {
                $kernel(*self, *rhs)
            }
        }

        impl $OpAssign for Vec4i {
            #[inline]
            fn $op_assign(&mut self, rhs: Vec4i) {
                *self = $kernel(*self, rhs);
            }
        }

        impl $OpAssign<&Vec4i> for Vec4i {
            #[inline]
            fn $op_assign(&mut self, rhs: &Vec4i) {
                *self = $kernel(*self, *rhs);
            }
        }
    };
}

impl_lane_op!(Add, add, AddAssign, add_assign, native::add);
impl_lane_op!(Sub, sub, SubAssign, sub_assign, native::sub);
impl_lane_op!(Mul, mul, MulAssign, mul_assign, native::mul);

impl Index<usize> for Vec4i {
    type Output = i32;

    #[inline(always)]
    fn index(&self, lane: usize) -> &i32 {
        &self.vals[lane]
    }
}

impl IndexMut<usize> for Vec4i {
    #[inline(always)]
    fn index_mut(&mut self, lane: usize) -> &mut i32 {
        &mut self.vals[lane]
    }
}

impl From<[i32; 4]> for Vec4i {
    #[inline(always)]
    fn from(vals: [i32; 4]) -> Self {
        Self { vals }
    }
}

impl From<Vec4i> for [i32; 4] {
    #[inline(always)]
    fn from(v: Vec4i) -> Self {
        v.vals
    }
}

impl TryFrom<&[i32]> for Vec4i {
    type Error = Vec4iError;

    fn try_from(vals: &[i32]) -> Result<Self> {
        Self::from_slice(vals)
    }
}

#[cfg(target_arch = "x86_64")]
impl From<std::arch::x86_64::__m128i> for Vec4i {
    /// Reinterpret the register as four packed `i32` lanes
    #[inline(always)]
    fn from(reg: std::arch::x86_64::__m128i) -> Self {
        // SAFETY: both types are 16 bytes of plain integer data.
        let vals = unsafe { std::mem::transmute::<std::arch::x86_64::__m128i, [i32; 4]>(reg) };
        Self { vals }
    }
}

#[cfg(target_arch = "x86_64")]
impl From<Vec4i> for std::arch::x86_64::__m128i {
    #[inline(always)]
    fn from(v: Vec4i) -> Self {
        // SAFETY: both types are 16 bytes of plain integer data.
        unsafe { std::mem::transmute::<[i32; 4], std::arch::x86_64::__m128i>(v.vals) }
    }
}

#[cfg(target_arch = "aarch64")]
impl From<std::arch::aarch64::int32x4_t> for Vec4i {
    /// Reinterpret the register as four packed `i32` lanes
    #[inline(always)]
    fn from(reg: std::arch::aarch64::int32x4_t) -> Self {
        // SAFETY: both types are 16 bytes of plain integer data.
        let vals =
            unsafe { std::mem::transmute::<std::arch::aarch64::int32x4_t, [i32; 4]>(reg) };
        Self { vals }
    }
}

#[cfg(target_arch = "aarch64")]
impl From<Vec4i> for std::arch::aarch64::int32x4_t {
    #[inline(always)]
    fn from(v: Vec4i) -> Self {
        // SAFETY: both types are 16 bytes of plain integer data.
        unsafe { std::mem::transmute::<[i32; 4], std::arch::aarch64::int32x4_t>(v.vals) }
    }
}

impl fmt::Display for Vec4i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vals;
        write!(f, "({}, {}, {}, {})", x, y, z, w)
    }
}

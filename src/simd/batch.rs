//! # Batch Kernels
//!
//! Lane-wise arithmetic over slices of [`Vec4i`]. The kernel set is fixed
//! when a [`BatchOps`] is built from a [`SimdConfig`]: the compiled native
//! kernels, or the scalar kernels when `enable_simd` is off. Results are
//! identical either way; the scalar path exists to cross-check native code.
//!
//! ```
//! use vec4i::{BatchOps, SimdConfig, Vec4i};
//!
//! let ops = BatchOps::new(&SimdConfig::default())?;
//! let a = [Vec4i::splat(1), Vec4i::splat(2)];
//! let b = [Vec4i::splat(10), Vec4i::splat(20)];
//! let mut out = [Vec4i::ZERO; 2];
//! ops.add(&mut out, &a, &b)?;
//! assert_eq!(out[1], Vec4i::splat(22));
//! # Ok::<(), vec4i::Vec4iError>(())
//! ```

use super::{native, scalar, SimdImpl};
use crate::config::{Config, SimdConfig};
use crate::error::{check_same_len, Result};
use crate::vector::Vec4i;

type BinaryKernel = fn(Vec4i, Vec4i) -> Vec4i;
type UnaryKernel = fn(Vec4i) -> Vec4i;

#[derive(Clone, Copy)]
struct KernelSet {
    implementation: SimdImpl,
    add: BinaryKernel,
    sub: BinaryKernel,
    mul: BinaryKernel,
    abs: UnaryKernel,
}

const SCALAR_KERNELS: KernelSet = KernelSet {
    implementation: SimdImpl::Scalar,
    add: scalar::add,
    sub: scalar::sub,
    mul: scalar::mul,
    abs: scalar::abs,
};

const NATIVE_KERNELS: KernelSet = KernelSet {
    implementation: SimdImpl::ACTIVE,
    add: native::add,
    sub: native::sub,
    mul: native::mul,
    abs: native::abs,
};

/// Slice-level lane kernels with a fixed kernel set
#[derive(Clone, Copy)]
pub struct BatchOps {
    kernels: KernelSet,
}

impl BatchOps {
    /// Build from a validated configuration
    pub fn new(config: &SimdConfig) -> Result<Self> {
        config.validate()?;
        let kernels = if config.enable_simd { NATIVE_KERNELS } else { SCALAR_KERNELS };
        log::debug!("Batch kernels selected: {}", kernels.implementation);
        Ok(Self { kernels })
    }

    /// Always use the scalar kernels
    pub fn scalar() -> Self {
        Self { kernels: SCALAR_KERNELS }
    }

    /// Kernel set in use
    pub fn implementation(&self) -> SimdImpl {
        self.kernels.implementation
    }

    /// `out[i] = a[i] + b[i]`
    pub fn add(&self, out: &mut [Vec4i], a: &[Vec4i], b: &[Vec4i]) -> Result<()> {
        Self::binary(self.kernels.add, out, a, b)
    }

    /// `out[i] = a[i] - b[i]`
    pub fn sub(&self, out: &mut [Vec4i], a: &[Vec4i], b: &[Vec4i]) -> Result<()> {
        Self::binary(self.kernels.sub, out, a, b)
    }

    /// `out[i] = a[i] * b[i]`, low 32 bits per lane
    pub fn mul(&self, out: &mut [Vec4i], a: &[Vec4i], b: &[Vec4i]) -> Result<()> {
        Self::binary(self.kernels.mul, out, a, b)
    }

    /// `acc[i] += rhs[i]`
    pub fn add_assign(&self, acc: &mut [Vec4i], rhs: &[Vec4i]) -> Result<()> {
        check_same_len(acc.len(), rhs.len())?;
        let add = self.kernels.add;
        for (dst, &r) in acc.iter_mut().zip(rhs) {
            *dst = add(*dst, r);
        }
        Ok(())
    }

    /// Replace every vector with its lane-wise absolute value
    pub fn abs_in_place(&self, values: &mut [Vec4i]) {
        let abs = self.kernels.abs;
        for v in values.iter_mut() {
            *v = abs(*v);
        }
    }

    /// Wrapping lane-wise sum of all vectors, zero for an empty slice
    pub fn sum(&self, values: &[Vec4i]) -> Vec4i {
        let add = self.kernels.add;
        values.iter().fold(Vec4i::ZERO, |acc, &v| add(acc, v))
    }

    #[inline]
    fn binary(kernel: BinaryKernel, out: &mut [Vec4i], a: &[Vec4i], b: &[Vec4i]) -> Result<()> {
        check_same_len(a.len(), b.len())?;
        check_same_len(a.len(), out.len())?;
        for ((dst, &x), &y) in out.iter_mut().zip(a).zip(b) {
            *dst = kernel(x, y);
        }
        Ok(())
    }
}

impl Default for BatchOps {
    fn default() -> Self {
        Self { kernels: NATIVE_KERNELS }
    }
}

impl std::fmt::Debug for BatchOps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchOps")
            .field("implementation", &self.kernels.implementation)
            .finish()
    }
}

//! # Lane Kernels
//!
//! The arithmetic behind [`Vec4i`](crate::Vec4i) lives here as free
//! functions over whole vectors:
//!
//! - [`scalar`]: portable `wrapping_*` kernels, always compiled
//! - `x86`: SSE2 kernels on x86_64, refined by `ssse3`/`sse4.1` target features
//! - `neon`: NEON kernels on aarch64
//!
//! One kernel set is chosen at build time (see `build.rs` and the `simd`
//! cargo feature) and used by every operator. There is no runtime dispatch;
//! [`SimdImpl::ACTIVE`] names the set that was compiled in.
//!
//! ## Example
//!
//! ```
//! use vec4i::simd::{scalar, SimdImpl};
//! use vec4i::Vec4i;
//!
//! let a = Vec4i::new(1, 2, 3, 4);
//! let b = Vec4i::splat(10);
//! assert_eq!(a + b, scalar::add(a, b));
//! println!("compiled kernels: {}", SimdImpl::ACTIVE);
//! ```

use std::fmt;

pub mod batch;
pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod x86;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub use batch::BatchOps;

#[cfg(all(vec4i_simd, target_arch = "x86_64"))]
pub(crate) use x86 as native;

#[cfg(all(vec4i_simd, target_arch = "aarch64"))]
pub(crate) use neon as native;

#[cfg(not(all(vec4i_simd, any(target_arch = "x86_64", target_arch = "aarch64"))))]
pub(crate) use scalar as native;

/// Kernel set a build or a host can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdImpl {
    /// Portable `wrapping_*` arithmetic
    Scalar,
    /// x86_64 baseline
    Sse2,
    /// SSE2 plus `PABSD`
    Ssse3,
    /// SSSE3 plus `PMULLD`
    Sse41,
    /// aarch64 NEON
    Neon,
}

impl SimdImpl {
    /// Kernel set compiled into this build
    pub const ACTIVE: SimdImpl =
        if cfg!(all(vec4i_simd, target_arch = "x86_64", target_feature = "sse4.1")) {
            SimdImpl::Sse41
        } else if cfg!(all(vec4i_simd, target_arch = "x86_64", target_feature = "ssse3")) {
            SimdImpl::Ssse3
        } else if cfg!(all(vec4i_simd, target_arch = "x86_64")) {
            SimdImpl::Sse2
        } else if cfg!(all(vec4i_simd, target_arch = "aarch64")) {
            SimdImpl::Neon
        } else {
            SimdImpl::Scalar
        };

    /// Capability tier: 0 scalar, 1 baseline 128-bit, 2 native abs, 3 native abs and mul
    pub const fn tier(self) -> u8 {
        match self {
            SimdImpl::Scalar => 0,
            SimdImpl::Sse2 => 1,
            SimdImpl::Ssse3 => 2,
            SimdImpl::Sse41 | SimdImpl::Neon => 3,
        }
    }

    /// Whether this is a hardware kernel set
    pub const fn is_native(self) -> bool {
        !matches!(self, SimdImpl::Scalar)
    }

    /// Short lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            SimdImpl::Scalar => "scalar",
            SimdImpl::Sse2 => "sse2",
            SimdImpl::Ssse3 => "ssse3",
            SimdImpl::Sse41 => "sse4.1",
            SimdImpl::Neon => "neon",
        }
    }
}

impl fmt::Display for SimdImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_matches_build() {
        #[cfg(all(vec4i_simd, target_arch = "x86_64"))]
        assert!(matches!(
            SimdImpl::ACTIVE,
            SimdImpl::Sse2 | SimdImpl::Ssse3 | SimdImpl::Sse41
        ));

        #[cfg(all(vec4i_simd, target_arch = "aarch64"))]
        assert_eq!(SimdImpl::ACTIVE, SimdImpl::Neon);

        #[cfg(vec4i_scalar_only)]
        assert_eq!(SimdImpl::ACTIVE, SimdImpl::Scalar);
    }

    #[test]
    fn test_tiers_ordered() {
        assert!(SimdImpl::Scalar.tier() < SimdImpl::Sse2.tier());
        assert!(SimdImpl::Sse2.tier() < SimdImpl::Ssse3.tier());
        assert!(SimdImpl::Ssse3.tier() < SimdImpl::Sse41.tier());
        assert!(!SimdImpl::Scalar.is_native());
        assert!(SimdImpl::Neon.is_native());
    }

    #[test]
    fn test_names() {
        assert_eq!(SimdImpl::Sse41.to_string(), "sse4.1");
        assert_eq!(SimdImpl::Scalar.to_string(), "scalar");
    }
}

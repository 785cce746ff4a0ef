//! # vec4i: Aligned 4-lane i32 SIMD Vector
//!
//! [`Vec4i`] holds four signed 32-bit lanes in one 16-byte aligned 128-bit
//! slot and exposes component-wise arithmetic through operators.
//!
//! ## Key Features
//!
//! - **Three lane views**: `vals[0..3]`, `x, y, z, w` and `r, g, b, a` over the same storage
//! - **Native kernels**: SSE2 on x86_64 (SSSE3/SSE4.1 when enabled), NEON on aarch64
//! - **Scalar fallback**: bit-identical portable kernels when the `simd` feature is off
//! - **Silent wraparound**: add, sub and mul wrap; `abs(i32::MIN)` is `i32::MIN`
//! - **Batch kernels**: slice-level operations with configurable kernel selection
//!
//! ## Quick Start
//!
//! ```rust
//! use vec4i::Vec4i;
//!
//! let a = Vec4i::new(1, 2, 3, 4);
//! let b = Vec4i::splat(10);
//!
//! let mut c = a + b;
//! c *= Vec4i::splat(2);
//! assert_eq!(c.vals, [22, 24, 26, 28]);
//! assert_eq!((c.x(), c.a()), (22, 28));
//!
//! // Wrapping, never panicking
//! let w = Vec4i::splat(i32::MAX) + Vec4i::splat(1);
//! assert_eq!(w, Vec4i::splat(i32::MIN));
//!
//! // abs leaves i32::MIN unchanged
//! assert_eq!(Vec4i::new(-5, 7, 0, i32::MIN).abs().vals, [5, 7, 0, i32::MIN]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod error;
pub mod simd;
pub mod system;
pub mod vector;

// Re-export core types
pub use config::{Config, SimdConfig};
pub use error::{Result, Vec4iError};
pub use simd::{BatchOps, SimdImpl};
pub use vector::{Rgba, Vec4i, Xyzw};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if native SIMD kernels were compiled in
pub fn has_simd_support() -> bool {
    SimdImpl::ACTIVE.is_native()
}

/// Log the compiled kernel set against what the host could run.
///
/// Optional; nothing in the crate requires it to be called.
pub fn init() {
    let features = system::get_cpu_features();
    let available = features.best_available();
    log::debug!(
        "Initializing vec4i v{} with {} kernels (host: {}, best available: {})",
        VERSION,
        SimdImpl::ACTIVE,
        features.vendor,
        available
    );
    if features.has_unused_features() {
        log::info!(
            "Host supports {} kernels but vec4i was built for {}; {}",
            available,
            SimdImpl::ACTIVE,
            upgrade_hint(cfg!(vec4i_simd))
        );
    }
}

fn upgrade_hint(native_kernels_built: bool) -> &'static str {
    if native_kernels_built {
        "enable the matching target feature to use them"
    } else {
        "enable the `simd` cargo feature to use them"
    }
}

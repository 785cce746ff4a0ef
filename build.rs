//! Build-time selection of the Vec4i lane kernels.
//!
//! Emits `vec4i_simd` when the `simd` feature is enabled on a target with a
//! native 128-bit integer register file (x86_64 SSE2, aarch64 NEON), and
//! `vec4i_scalar_only` otherwise. Refinements beyond the baseline (SSSE3,
//! SSE4.1) are picked up from `target_feature` in the source itself.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(vec4i_simd)");
    println!("cargo:rustc-check-cfg=cfg(vec4i_scalar_only)");

    configure_kernels();
}

fn configure_kernels() {
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let simd_enabled = env::var_os("CARGO_FEATURE_SIMD").is_some();

    match (target_arch.as_str(), simd_enabled) {
        ("x86_64", true) | ("aarch64", true) => {
            println!("cargo:rustc-cfg=vec4i_simd");
        }
        (_, true) => {
            println!(
                "cargo:warning=No native Vec4i kernels for target architecture: {}, \
                 using scalar fallback",
                target_arch
            );
            println!("cargo:rustc-cfg=vec4i_scalar_only");
        }
        (_, false) => {
            println!("cargo:rustc-cfg=vec4i_scalar_only");
        }
    }
}

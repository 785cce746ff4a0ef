//! # System Integration Utilities
//!
//! Host inspection used for diagnostics at [`init`](crate::init).

pub mod cpu_features;

pub use cpu_features::{get_cpu_features, CpuFeatureSet, RuntimeCpuFeatures};

//! # CPU Feature Detection
//!
//! Runtime report of the 128-bit integer features the host offers. Kernels
//! are fixed at build time, so this is used for diagnostics only: comparing
//! [`CpuFeatureSet::best_available`] against [`SimdImpl::ACTIVE`] tells
//! whether a rebuild with more target features would pick faster kernels.

use std::sync::OnceLock;

use crate::simd::SimdImpl;

/// Host CPU features relevant to the lane kernels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuFeatureSet {
    /// x86 SSE2
    pub has_sse2: bool,
    /// x86 SSSE3 (`PABSD`)
    pub has_ssse3: bool,
    /// x86 SSE4.1 (`PMULLD`)
    pub has_sse41: bool,
    /// x86 AVX2 (reported, not used by four-lane kernels)
    pub has_avx2: bool,
    /// ARM NEON
    pub has_neon: bool,
    /// CPU vendor string (Intel, AMD, ARM, etc.)
    pub vendor: String,
}

impl CpuFeatureSet {
    /// Best kernel set this host could run
    pub fn best_available(&self) -> SimdImpl {
        if self.has_sse41 && self.has_ssse3 && self.has_sse2 {
            SimdImpl::Sse41
        } else if self.has_ssse3 && self.has_sse2 {
            SimdImpl::Ssse3
        } else if self.has_sse2 {
            SimdImpl::Sse2
        } else if self.has_neon {
            SimdImpl::Neon
        } else {
            SimdImpl::Scalar
        }
    }

    /// Whether the compiled kernels leave host features unused
    pub fn has_unused_features(&self) -> bool {
        self.best_available().tier() > SimdImpl::ACTIVE.tier()
    }
}

/// Runtime CPU feature detection interface
#[derive(Debug, Default)]
pub struct RuntimeCpuFeatures;

impl RuntimeCpuFeatures {
    /// Create a new runtime feature detector
    pub fn new() -> Self {
        Self
    }

    /// Detect all available CPU features
    pub fn detect_features(&self) -> CpuFeatureSet {
        let mut features = CpuFeatureSet {
            vendor: "Unknown".to_string(),
            ..CpuFeatureSet::default()
        };

        #[cfg(target_arch = "x86_64")]
        self.detect_x86_features(&mut features);

        #[cfg(target_arch = "aarch64")]
        self.detect_arm_features(&mut features);

        features
    }

    #[cfg(target_arch = "x86_64")]
    fn detect_x86_features(&self, features: &mut CpuFeatureSet) {
        let cpuid = raw_cpuid::CpuId::new();

        if let Some(feature_info) = cpuid.get_feature_info() {
            features.has_sse2 = feature_info.has_sse2();
            features.has_ssse3 = feature_info.has_ssse3();
            features.has_sse41 = feature_info.has_sse41();
        }
        if let Some(extended_features) = cpuid.get_extended_feature_info() {
            features.has_avx2 = extended_features.has_avx2();
        }
        if let Some(vendor) = cpuid.get_vendor_info() {
            features.vendor = vendor.as_str().to_string();
        }
    }

    #[cfg(target_arch = "aarch64")]
    fn detect_arm_features(&self, features: &mut CpuFeatureSet) {
        features.has_neon = std::arch::is_aarch64_feature_detected!("neon");
        features.vendor = "ARM".to_string();
    }
}

static CPU_FEATURES: OnceLock<CpuFeatureSet> = OnceLock::new();

/// Get the global CPU feature set (detected once on first call)
pub fn get_cpu_features() -> &'static CpuFeatureSet {
    CPU_FEATURES.get_or_init(|| RuntimeCpuFeatures::new().detect_features())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_feature_detection() {
        let features = get_cpu_features();
        assert!(!features.vendor.is_empty());

        #[cfg(target_arch = "x86_64")]
        assert!(features.has_sse2);

        println!("CPU vendor: {}", features.vendor);
        println!("Best kernels: {}, compiled: {}", features.best_available(), SimdImpl::ACTIVE);
    }

    #[test]
    fn test_detection_is_cached() {
        let a = get_cpu_features() as *const CpuFeatureSet;
        let b = get_cpu_features() as *const CpuFeatureSet;
        assert_eq!(a, b);
    }

    #[test]
    fn test_compiled_kernels_run_on_host() {
        // Whatever was compiled in executes here, so the host is at least that tier
        let features = get_cpu_features();
        assert!(features.best_available().tier() >= SimdImpl::ACTIVE.tier());
    }

    #[test]
    fn test_best_available_ordering() {
        let mut features = CpuFeatureSet::default();
        assert_eq!(features.best_available(), SimdImpl::Scalar);

        features.has_neon = true;
        assert_eq!(features.best_available(), SimdImpl::Neon);

        let mut features = CpuFeatureSet { has_sse2: true, ..CpuFeatureSet::default() };
        assert_eq!(features.best_available(), SimdImpl::Sse2);
        features.has_ssse3 = true;
        assert_eq!(features.best_available(), SimdImpl::Ssse3);
        features.has_sse41 = true;
        assert_eq!(features.best_available(), SimdImpl::Sse41);
    }
}

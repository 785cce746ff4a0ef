//! Configuration APIs for vec4i
//!
//! The vector arithmetic itself takes no configuration: operators always use
//! the kernel set compiled into the build. Configuration only decides which
//! kernels slice-level [`BatchOps`](crate::BatchOps) run, and whether a
//! build without native kernels is acceptable.
//!
//! # Configuration Traits
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON file persistence.
//!
//! # Environment Initialization
//!
//! ```rust
//! use vec4i::config::{Config, SimdConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads VEC4I_SIMD_ENABLE and VEC4I_SIMD_REQUIRE_NATIVE
//! let config = SimdConfig::from_env()?;
//!
//! // Same fields under a custom prefix, e.g. MYAPP_SIMD_ENABLE
//! let config = SimdConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod simd;


pub use simd::SimdConfig;

/// Common configuration trait providing validation, environment
/// initialization and preset management.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `VEC4I_{COMPONENT}_{FIELD}`,
    /// for example `VEC4I_SIMD_ENABLE=0`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("VEC4I_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The environment variable prefix to use
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Fastest configuration the build supports.
    fn performance_preset() -> Self;

    /// Configuration that computes with the portable reference code only.
    fn reference_preset() -> Self;

    /// Balanced preset, the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Utility function to parse boolean environment variable.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
///
/// # Arguments
///
/// * `var_name` - The environment variable name
/// * `default` - The default value if the environment variable is not set
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}

//! # Vector Types
//!
//! [`Vec4i`] and the named component views it exposes over its lanes.

pub mod vec4i;
pub mod views;

pub use vec4i::Vec4i;
pub use views::{Rgba, Xyzw};

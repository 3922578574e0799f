//! Benchmark profiles for the Karst cave-map generator.
//!
//! Provides pre-built [`CaveConfig`] profiles shared by the benchmarks
//! and the examples:
//!
//! - [`reference_profile`]: the canonical 80×43 map
//! - [`stress_profile`]: a 240×180 map (~12x the cell count)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use karst::CaveConfig;

/// The canonical benchmark profile: 80×43 cells, default thresholds.
pub fn reference_profile(seed: u64) -> CaveConfig {
    CaveConfig {
        seed,
        ..CaveConfig::default()
    }
}

/// A stress profile: 240×180 cells, default thresholds.
pub fn stress_profile(seed: u64) -> CaveConfig {
    CaveConfig {
        width: 240,
        height: 180,
        seed,
        ..CaveConfig::default()
    }
}

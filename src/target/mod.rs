//! Target descriptors and backend-configuration lookup.
//!
//! Pure, side-effect-free lookup tables: given a target descriptor, a
//! backend reports its CPU family string, enabled feature attributes,
//! calling-convention choice, and native vector width. No traversal state
//! is involved.

pub mod riscv;

/// Architecture family of a compilation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// RISC-V (RV64).
    Riscv,
}

/// Optional instruction-set extensions a target may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFeature {
    /// RISC-V vector extension.
    Rvv,
}

/// Compilation target descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Architecture family.
    pub arch: Arch,
    features: Vec<TargetFeature>,
}

impl Target {
    /// Creates a target with no optional features enabled.
    pub fn new(arch: Arch) -> Self {
        Self {
            arch,
            features: Vec::new(),
        }
    }

    /// Enables a feature, returning the modified target.
    pub fn with_feature(mut self, feature: TargetFeature) -> Self {
        if !self.features.contains(&feature) {
            self.features.push(feature);
        }
        self
    }

    /// Returns `true` when the feature is enabled.
    pub fn has_feature(&self, feature: TargetFeature) -> bool {
        self.features.contains(&feature)
    }
}

/// Backend configuration derived from a target descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// CPU family identifier; empty means the backend default.
    pub mcpu: String,
    /// Enabled architecture feature attribute tokens.
    pub mattrs: Vec<String>,
    /// Whether a software floating-point calling convention is required.
    pub use_soft_float_abi: bool,
    /// Native vector width in bits.
    pub native_vector_bits: u32,
}

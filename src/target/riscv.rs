//! RISC-V backend configuration.

use crate::target::{BackendConfig, Target, TargetFeature};

/// Vector width in bits when the RVV extension is enabled.
// TODO: derive from the concrete CPU implementation once targets carry one.
const RVV_VECTOR_BITS: u32 = 512;

/// Vector width in bits without RVV.
const SCALAR_VECTOR_BITS: u32 = 128;

/// Returns the backend configuration for a RISC-V target.
pub fn backend_config(target: &Target) -> BackendConfig {
    let mut mattrs = Vec::new();
    if target.has_feature(TargetFeature::Rvv) {
        mattrs.push("+experimental-v".to_string());
    }
    let native_vector_bits = if target.has_feature(TargetFeature::Rvv) {
        RVV_VECTOR_BITS
    } else {
        SCALAR_VECTOR_BITS
    };
    BackendConfig {
        mcpu: String::new(),
        mattrs,
        use_soft_float_abi: false,
        native_vector_bits,
    }
}

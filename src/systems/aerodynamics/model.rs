use tracing::debug;

use crate::components::{AeroCoefficients, AircraftConfig, AircraftModel, PhysicalConstants};
use crate::systems::aerodynamics::compute;

/// Builds the read-only dynamics context for an aircraft, with its damper selection applied.
pub fn build_model(config: &AircraftConfig) -> AircraftModel {
    let aero = config.effective_aero();
    model_from_constants(&config.constants, &aero)
        .with_name(&config.name)
}

/// Builds a model straight from constants and aerodynamic data.
pub fn model_from_constants(
    constants: &PhysicalConstants,
    aero: &AeroCoefficients,
) -> AircraftModel {
    let (coefficients, trim) = compute(constants, aero);
    debug!(
        "Derived coefficients: c1={:.6}, c2={:.6}, c4={:.6}, trim alpha={:.4} rad",
        coefficients.c1, coefficients.c2, coefficients.c4, trim.alpha
    );
    AircraftModel::from_parts(*constants, coefficients, trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PitchDampers;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_model_keeps_config_name() {
        let model = build_model(&AircraftConfig::reference_transport());
        assert_eq!(model.name(), "ReferenceTransport");
        assert_eq!(model.airspeed(), 190.0);
    }

    #[test]
    fn test_dampers_applied_before_compute() {
        let config = AircraftConfig::reference_transport()
            .with_dampers(PitchDampers::disabled());
        let model = build_model(&config);
        assert_eq!(model.coefficients().c1, 0.0);
        assert_eq!(model.coefficients().c5, 0.0);
    }
}

use std::io::Write;

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use longsim::{
    components::{AircraftConfig, AircraftSource, CoefficientTag, ConfigError, PitchDampers},
    resources::{IntegrationMethod, RunParameters, Scenario, ScenarioMode},
    systems::{build_model, run_simulation},
};

mod common;
use common::{reference_model, REFERENCE_AIRCRAFT_YAML};

#[test]
fn test_aircraft_file_matches_preset() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(REFERENCE_AIRCRAFT_YAML.as_bytes())?;

    let config = AircraftConfig::new(AircraftSource::File(file.path().to_path_buf()))?;
    assert_eq!(config.name, "FileTransport");

    let from_file = build_model(&config);
    let preset = reference_model();
    for (tag, value) in preset.coefficients().iter() {
        let loaded = from_file.coefficients().get(tag).unwrap();
        assert_relative_eq!(loaded, value, max_relative = 1e-12);
    }
    assert_relative_eq!(
        from_file.trim().elevator,
        preset.trim().elevator,
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn test_missing_aircraft_file() {
    let result = AircraftConfig::new(AircraftSource::File("does/not/exist.yaml".into()));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_cg_shift_changes_only_offset_terms() {
    let nominal = reference_model();
    let aft = AircraftConfig::reference_transport().with_cg_fraction(0.30);
    let shifted = build_model(&aft);

    assert_eq!(nominal.coefficients().c17, 0.0);
    assert_eq!(nominal.coefficients().c18, 0.0);
    assert!(shifted.coefficients().c17 != 0.0);
    assert!(shifted.coefficients().c18 != 0.0);
    assert_eq!(shifted.coefficients().c1, nominal.coefficients().c1);
    assert_eq!(shifted.coefficients().c19, nominal.coefficients().c19);
    assert!(shifted.coefficients().get(CoefficientTag::C(12)).is_none());
}

#[test]
fn test_dampers_off_weakens_damping() {
    let config = AircraftConfig::reference_transport()
        .with_dampers(PitchDampers::disabled());
    let undamped = build_model(&config);
    assert_eq!(undamped.coefficients().c1, 0.0);
    assert_eq!(undamped.coefficients().c5, 0.0);

    let params = RunParameters::default().with_t_end(5.0);
    let damped_peak = run_simulation(&reference_model(), &params)
        .history
        .iter()
        .filter(|s| s.time > 2.0)
        .fold(0.0_f64, |m, s| m.max(s.alpha_deg.abs()));
    let undamped_peak = run_simulation(&undamped, &params)
        .history
        .iter()
        .filter(|s| s.time > 2.0)
        .fold(0.0_f64, |m, s| m.max(s.alpha_deg.abs()));
    assert!(undamped_peak > damped_peak);
}

#[test]
fn test_run_parameters_from_json_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{"method": "euler", "mode": "controlled", "dt": 0.001, "T_end": 2.0, "failure": true}}"#
    )?;

    let params = RunParameters::load(file.path())?;
    assert_eq!(params.method, IntegrationMethod::Euler);
    assert_eq!(params.mode, ScenarioMode::Controlled);
    assert_eq!(params.step_count(), 2000);
    assert!(params.sensor_failed(20.0));
    Ok(())
}

#[test]
fn test_invalid_run_file_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    write!(file, "dt: 0.01\nt_end: 0\n")?;
    let err = RunParameters::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    Ok(())
}

#[test]
fn test_every_scenario_expands() {
    let labels: Vec<String> = Scenario::all()
        .iter()
        .flat_map(Scenario::runs)
        .map(|(label, _)| label)
        .collect();
    assert_eq!(labels.len(), 10);

    let gain_runs = Scenario::GainComparison.runs();
    let factors: Vec<f64> = gain_runs.iter().map(|(_, p)| p.gain_factor).collect();
    assert_eq!(factors, vec![0.5, 1.0, 2.0]);
}

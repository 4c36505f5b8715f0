use std::{env, path::Path};

use tracing::info;
use tracing_subscriber::EnvFilter;

use longsim::{
    components::{AircraftConfig, AircraftSource, AircraftType},
    report::{coefficient_table, history_table, summary_line},
    resources::{RunParameters, Scenario},
    systems::{build_model, run_sweep},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let aircraft = match args.get(1) {
        Some(path) => AircraftConfig::new(AircraftSource::File(path.into()))?,
        None => AircraftConfig::new(AircraftSource::Programmed(AircraftType::ReferenceTransport))?,
    };
    let model = build_model(&aircraft);
    println!("{}", coefficient_table(&model));

    let runs = match args.first() {
        Some(arg) if Path::new(arg).is_file() => {
            vec![(arg.clone(), RunParameters::load(arg)?)]
        }
        Some(arg) => arg.parse::<Scenario>()?.runs(),
        None => Scenario::all().iter().flat_map(Scenario::runs).collect(),
    };
    info!("Loaded {} runs for {}", runs.len(), model.name());

    let (labels, params): (Vec<String>, Vec<RunParameters>) = runs.into_iter().unzip();
    let outcomes = run_sweep(&model, &params);

    for ((label, params), outcome) in labels.iter().zip(&params).zip(&outcomes) {
        println!("== {} ==", label);
        println!("{}", history_table(&outcome.history, params.dt));
        println!("{}\n", summary_line(outcome));
    }

    Ok(())
}

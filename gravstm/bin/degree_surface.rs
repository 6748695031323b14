use clap::Parser;
use gravstm::file_export::export_degree_surface;
use gravstm::prelude::*;
use std::path::PathBuf;

/// Sweeps radius and tolerance through the degree surface and writes the
/// selected degrees as CSV
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Destination CSV file
    #[arg(long, short, default_value = "degree_surface.csv")]
    pub out: PathBuf,

    /// Optional kernel config (YAML) for distance unit and max degree
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Innermost radius, in distance units
    #[arg(long, default_value = "1.0")]
    pub rmin: f64,

    /// Outermost radius, in distance units
    #[arg(long, default_value = "10.5")]
    pub rmax: f64,

    /// Radius samples
    #[arg(long, short('n'), default_value = "500")]
    pub samples: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => KernelConfig::default(),
    };

    let radii = linspace(args.rmin, args.rmax, args.samples);
    // 5e-3 through 5e-16 sits mid-column for every tolerance bin
    let tolerances: Vec<f64> = logspace(-2.0, -15.0, 14).iter().map(|t| t * 0.5).collect();

    export_degree_surface(&config.selector(), &radii, &tolerances, &args.out)?;

    log::info!(
        "wrote {} radii x {} tolerances to {}",
        radii.len(),
        tolerances.len(),
        args.out.display()
    );

    Ok(())
}

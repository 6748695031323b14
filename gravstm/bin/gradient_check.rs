use clap::Parser;
use gravstm::file_export::{write_report, GradientReport};
use gravstm::prelude::*;
use std::path::PathBuf;

/// Compares the central-difference gravity gradient against the point-mass
/// closed form over a range of differencing steps
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Radius, in distance units
    #[arg(long, short, default_value = "1.1")]
    pub radius: f64,

    /// Tolerance handed to the degree selector
    #[arg(long, short, default_value = "1e-9")]
    pub tolerance: f64,

    /// Optional YAML report of every comparison
    #[arg(long)]
    pub report: Option<PathBuf>,
}

fn check_step(field: &PointMass, position: DVec3, degree: u32, tolerance: f64, h: f64) -> GravityResult<GradientReport> {
    let numeric = central_difference_gradient(field, position, degree, h)?;
    let analytic = GravityGradient::from(field.analytic_gradient(position));

    let scale = analytic
        .to_cols_array_2d()
        .iter()
        .flatten()
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    let relative_error = gravstm::math::max_abs_diff(
        &numeric.to_cols_array_2d(),
        &analytic.to_cols_array_2d(),
    ) / scale;

    Ok(GradientReport {
        position,
        tolerance,
        degree,
        step: h,
        numeric,
        analytic,
        relative_error,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let field = PointMass::earth();
    let position = DVec3::new(1.0, 1.0, 1.0).normalize() * args.radius * DU;
    let degree = select_degree(position, args.tolerance, field.max_degree).max(1);

    log::info!(
        "radius {:.4} DU, tolerance {:e}: degree {}",
        args.radius,
        args.tolerance,
        degree
    );

    let steps = logspace(-7.0, 2.0, 10);

    let mut reports = Vec::with_capacity(steps.len());
    for h in steps {
        let report = check_step(&field, position, degree, args.tolerance, h)?;
        println!(
            "h = {:8.1e} km  relative error {:10.3e}  asymmetry {:10.3e}",
            h,
            report.relative_error,
            report.numeric.asymmetry()
        );
        reports.push(report);
    }

    if let Some(path) = &args.report {
        write_report(&reports, path)?;
        log::info!("report written to {}", path.display());
    }

    Ok(())
}

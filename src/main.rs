use anyhow::Context;
use clap::Parser;
use serde_json::json;

use polygon_regions::{
    bearing, region_of_bearing, Params, Point, RegionTable, DEFAULT_PARAMS, MAX_EPSILON,
};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Classify a direction into the sectors of a regular polygon.")]
pub struct Args {
    /// Number of polygon sides (= number of regions)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub sides: i64,

    /// Origin point
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, default_values_t = [0.0, 0.0])]
    pub origin: Vec<f64>,

    /// Target point; without it only the region table is printed
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub target: Option<Vec<f64>>,

    /// Boundary tolerance in radians
    #[arg(long, default_value_t = DEFAULT_PARAMS.epsilon, value_parser = parse_epsilon)]
    pub epsilon: f64,

    /// Fail instead of clamping bearings that fall outside the table
    #[arg(long)]
    pub strict: bool,
}

fn parse_epsilon(s: &str) -> Result<f64, String> {
    let epsilon: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !(0.0..=MAX_EPSILON).contains(&epsilon) {
        return Err(format!("must be within [0, {:e}]", MAX_EPSILON));
    }
    Ok(epsilon)
}

fn to_point(coords: &[f64]) -> Point {
    Point::new(coords[0], coords[1])
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    log::set_max_level(log::LevelFilter::Trace);
    env_logger::builder()
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let params = Params {
        epsilon: args.epsilon,
        clamp_out_of_range: !args.strict,
    };
    log::debug!("{}", params);

    let table = RegionTable::new(args.sides)
        .with_context(|| format!("building regions for {} sides", args.sides))?;
    log::info!("Built {} regions", table.sides());
    for (i, sector) in table.iter().enumerate() {
        let (lo, hi) = sector.to_degrees();
        log::debug!("Region {}: {} ({:.2} deg to {:.2} deg)", i, sector, lo, hi);
    }

    let target = match args.target.as_deref() {
        Some(target) => to_point(target),
        None => {
            println!("{}", json!({ "sides": table.sides(), "regions": table }));
            return Ok(());
        }
    };
    let origin = to_point(&args.origin);

    let theta = bearing(origin, target)
        .with_context(|| format!("computing bearing from {} to {}", origin, target))?;
    let region = region_of_bearing(theta, &table, &params)
        .with_context(|| format!("classifying bearing {:.6} rad", theta))?;
    log::info!("Bearing {} -> {}: {:.4} rad, region {}", origin, target, theta, region);

    println!(
        "{}",
        json!({
            "sides": table.sides(),
            "origin": origin,
            "target": target,
            "bearing": theta,
            "region": region,
            "sector": table[region],
        })
    );
    Ok(())
}

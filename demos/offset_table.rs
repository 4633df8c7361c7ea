//! Prints travel, run and cut length for every supported fitting angle.
//!
//! Usage:
//! ```text
//! cargo run --example offset_table                    # 100 unit offset
//! cargo run --example offset_table -- 250             # 250 unit offset
//! cargo run --example offset_table -- 250 4.5         # with pipe diameter
//! RUST_LOG=pipefit=debug cargo run --example offset_table -- 250
//! ```

use std::error::Error;

use pipefit::{FittingAngle, OffsetCalculator, OffsetParameters};

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for pipefit.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pipefit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let offset: f64 = args.next().map_or(Ok(100.0), |s| s.parse::<f64>())?;
    let diameter: Option<f64> = args.next().map(|s| s.parse::<f64>()).transpose()?;

    let calculator = OffsetCalculator::new();
    println!(
        "{:>7}  {:<10}  {:>9}  {:>9}  {:>10}  {:>10}",
        "angle", "fitting", "mult", "run", "travel", "cut"
    );
    for degrees in calculator.supported_angles() {
        let mut params = OffsetParameters::new(offset, degrees);
        if let Some(d) = diameter {
            params = params.with_pipe_diameter(d);
        }
        let result = calculator.calculate_offset(&params)?;
        let Some(fitting) = FittingAngle::from_degrees(degrees) else {
            continue;
        };
        println!(
            "{:>7}  {:<10}  {:>9.4}  {:>9.3}  {:>10.3}  {:>10.3}",
            fitting.to_string(),
            fitting.bend_name(),
            fitting.travel_multiplier(),
            result.run,
            result.travel,
            result.cut_length,
        );
    }
    Ok(())
}

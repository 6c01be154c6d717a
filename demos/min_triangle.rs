//! Prints the minimum-perimeter triangle enclosing a convex polygon.
//!
//! Usage:
//! ```text
//! cargo run --example min_triangle                              # built-in hull
//! cargo run --example min_triangle -- 0,0 4,0 5,2 2,4 -1,2      # x,y pairs, in order
//! RUST_LOG=mintri=debug cargo run --example min_triangle        # per-iteration trace
//! ```

use std::error::Error;

use mintri::{EncloseConfig, MinTriangle};

const DEFAULT_HULL: [(f64, f64); 7] = [
    (2.0, 1.0),
    (2.0, 0.0),
    (-2.0, 0.0),
    (-2.0, 1.0),
    (-1.0, 2.0),
    (0.0, 2.5),
    (1.0, 2.0),
];

fn parse_point(arg: &str) -> Result<(f64, f64), Box<dyn Error>> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {arg:?}"))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for mintri.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mintri=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let hull = if args.is_empty() {
        DEFAULT_HULL.to_vec()
    } else {
        args.iter()
            .map(|a| parse_point(a))
            .collect::<Result<Vec<_>, _>>()?
    };

    match MinTriangle::from_xy(&hull, EncloseConfig::default()).execute()? {
        Some(triangle) => {
            for (name, (x, y)) in ["A", "B", "C"].iter().zip(triangle.to_xy()) {
                println!("{name} = ({x:.6}, {y:.6})");
            }
            println!("perimeter = {:.6}", triangle.perimeter());
        }
        None => println!("no enclosing triangle found for {} points", hull.len()),
    }
    Ok(())
}

use std::io::{stdout, Result, Write};

use deltae::metric::find_closest;
use deltae::DistanceConfig;
use tracing_subscriber::EnvFilter;

const NAMED_COLORS: [(&str, [f64; 3]); 8] = [
    ("black", [0.0, 0.0, 0.0]),
    ("red", [205.0, 49.0, 49.0]),
    ("green", [13.0, 188.0, 121.0]),
    ("yellow", [229.0, 229.0, 16.0]),
    ("blue", [36.0, 114.0, 200.0]),
    ("magenta", [188.0, 63.0, 188.0]),
    ("cyan", [17.0, 168.0, 205.0]),
    ("white", [229.0, 229.0, 229.0]),
];

fn parse_color(arg: &str) -> Option<[f64; 3]> {
    let hex = arg.strip_prefix('#').unwrap_or(arg);
    if hex.len() != 6 {
        return None;
    }

    let channel = |index: usize| {
        hex.get(index..index + 2)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .map(f64::from)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // DELTAE_METRIC and DELTAE_WHITE_POINT pick the metric.
    let config = DistanceConfig::from_environment().map_err(std::io::Error::other)?;
    let palette: Vec<[f64; 3]> = NAMED_COLORS.iter().map(|(_, rgb)| *rgb).collect();

    let mut out = stdout().lock();
    for arg in std::env::args().skip(1) {
        let Some(color) = parse_color(&arg) else {
            writeln!(out, "{}: not a #rrggbb color", arg)?;
            continue;
        };

        let closest = find_closest(&color, &palette, &config).and_then(|i| NAMED_COLORS.get(i));
        if let Some(&(name, rgb)) = closest {
            writeln!(
                out,
                "{} is closest to {} (distance² {:.3} with {})",
                arg,
                name,
                config.distance(color, rgb),
                config.metric
            )?;
        }
    }

    Ok(())
}

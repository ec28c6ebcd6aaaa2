use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec2;
use log::LevelFilter;

use raycast_demos::Error;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Which demo to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Empty frame in the clear color
    Window,
    /// Single filled triangle
    Triangle,
    /// Rays from each click, bounced once off the boundary
    Raycast,
    /// Rotating wireframe cube
    Cube,
}

/// Parse a click given as `X,Y` screen pixels (top-left origin, y down).
pub fn parse_click(value: &str) -> Result<Vec2, Error> {
    let invalid = || Error::InvalidClick(value.to_string());
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x: f32 = x.trim().parse().map_err(|_| invalid())?;
    let y: f32 = y.trim().parse().map_err(|_| invalid())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid());
    }
    Ok(Vec2::new(x, y))
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "raycast")]
#[command(about = "Headless graphics demos: triangle, window, ray casting, cube")]
pub struct Args {
    /// TOML config file; missing file means defaults
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Demo to render
    #[arg(short, long, value_enum, default_value = "raycast")]
    pub demo: DemoKind,

    /// Frame width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of rays per click (overrides config)
    #[arg(short = 'n', long)]
    pub rays: Option<usize>,

    /// Click position X,Y in screen pixels; repeat for one frame per click
    #[arg(long = "click", value_parser = parse_click, allow_hyphen_values = true)]
    pub clicks: Vec<Vec2>,

    /// Number of cube frames (overrides config)
    #[arg(long)]
    pub frames: Option<u32>,

    /// Send frames to TEV for visualization
    #[arg(long, help = "Send frames to TEV for visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,

    /// Output file path (.png for 8-bit with gamma correction, .exr for HDR linear)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(parse_click("10,20").unwrap(), Vec2::new(10.0, 20.0));
        assert_eq!(parse_click(" 1.5 , -3 ").unwrap(), Vec2::new(1.5, -3.0));
        assert!(parse_click("10").is_err());
        assert!(parse_click("a,b").is_err());
        assert!(parse_click("inf,2").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "raycast", "--demo", "raycast", "--click", "400,300", "--click", "10,590", "-n", "12",
        ])
        .unwrap();
        assert_eq!(args.demo, DemoKind::Raycast);
        assert_eq!(args.clicks, vec![Vec2::new(400.0, 300.0), Vec2::new(10.0, 590.0)]);
        assert_eq!(args.rays, Some(12));
        assert_eq!(args.output, PathBuf::from("output.png"));
    }
}

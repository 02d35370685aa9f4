//! Command-line surface: numeric parameters for the pattern, validated at
//! the boundary so the render loop never sees an out-of-range value.

use std::process;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cardioid",
    about = "Generator of beautiful times-table patterns like the cardioid",
    long_about = "Generator of beautiful times-table patterns like the cardioid.\n\n\
                  Press [SPACE] or [ENTER] to pause the frame, [ESC] or [Q] to quit,\n\
                  [F] or [F11] to toggle fullscreen."
)]
pub struct Options {
    /// Spaced dots at the circle
    #[arg(short, long, default_value_t = 200, value_parser = parse_dots)]
    pub dots: u32,

    /// Initial multiplier
    #[arg(short, long, default_value_t = 0.0, value_parser = parse_factor)]
    pub multiplier: f64,

    /// Multiplier increase per frame
    #[arg(short = 'i', long = "mult_increase", default_value_t = 0.005, value_parser = parse_factor)]
    pub mult_increase: f64,

    /// Frames per second
    #[arg(short, long, default_value_t = 60, value_parser = parse_fps)]
    pub fps: u32,

    /// Line lightness (values above 1.0 are not clamped)
    #[arg(short, long, default_value_t = 0.5, value_parser = parse_factor)]
    pub lightness: f64,

    /// Line saturation (values above 1.0 are not clamped)
    #[arg(short, long, default_value_t = 1.0, value_parser = parse_factor)]
    pub saturation: f64,

    /// Spread the hue wheel across the dots instead of plain green
    #[arg(short, long)]
    pub rainbow: bool,

    /// Output version information and exit
    #[arg(short = 'v', long = "version")]
    version: bool,
}

/// Parse the command line, exiting with status 1 on any invalid value and
/// status 0 for help/version output.
pub fn parse() -> Options {
    let options = Options::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    if options.version {
        println!("cardioid v{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    options
}

fn parse_dots(raw: &str) -> Result<u32, String> {
    let dots: i64 = raw
        .parse()
        .map_err(|_| format!("error in conversion of arg: |{raw}|"))?;
    if dots < 0 {
        return Err("dots quantity can't be negative".into());
    }
    if dots == 0 {
        return Err("dots quantity can't be zero".into());
    }
    u32::try_from(dots).map_err(|_| format!("dots quantity too large: |{raw}|"))
}

fn parse_fps(raw: &str) -> Result<u32, String> {
    let fps: i64 = raw
        .parse()
        .map_err(|_| format!("error in conversion of arg: |{raw}|"))?;
    if fps <= 0 {
        return Err("fps can't be <= 0".into());
    }
    u32::try_from(fps).map_err(|_| format!("fps too large: |{raw}|"))
}

fn parse_factor(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("error in conversion of arg: |{raw}|"))?;
    if !value.is_finite() {
        return Err(format!("error in conversion of arg: |{raw}|"));
    }
    if value < 0.0 {
        return Err("value can't be negative".into());
    }
    Ok(value)
}

//! `gridsplit`: splits an STL model too large for a 3D printer into a grid of parts.

use anyhow::Context;
use clap::Parser;
use gridsplit3d::io::StlFormat;
use gridsplit3d::math::Real;
use gridsplit3d::split::{SplitConfig, Splitter};
use std::path::PathBuf;

/// Split an STL model into a grid of printable parts.
#[derive(Parser, Debug)]
#[command(name = "gridsplit", version, about, long_about = None)]
struct Cli {
    /// The STL model (binary or ASCII).
    #[arg(value_name = "INPUT_STL")]
    input: PathBuf,

    /// Number of parts along X.
    #[arg(long, value_name = "N")]
    xsplit: Option<u32>,

    /// Number of parts along Y.
    #[arg(long, value_name = "N")]
    ysplit: Option<u32>,

    /// Maximum part size along X, used when --xsplit is not given.
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    max_x: Option<Real>,

    /// Maximum part size along Y, used when --ysplit is not given.
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    max_y: Option<Real>,

    /// Turn the model upside-down (180° about X) first.
    #[arg(long)]
    flip: bool,

    /// Add dovetail joints between adjacent parts.
    #[arg(long)]
    dovetail: bool,

    /// Width of the base of the dovetails.
    #[arg(long, value_name = "MM", default_value_t = 10.0, allow_negative_numbers = true)]
    dovetail_width: Real,

    /// Height of the dovetails.
    #[arg(long, value_name = "MM", default_value_t = 5.0, allow_negative_numbers = true)]
    dovetail_height: Real,

    /// Taper of the sides of the dovetails.
    #[arg(long, value_name = "DEG", default_value_t = 15.0, allow_negative_numbers = true)]
    dovetail_angle: Real,

    /// Where to write the parts [default: the directory of INPUT_STL].
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Write ASCII STL files instead of binary ones.
    #[arg(long)]
    ascii: bool,

    /// Only print the cutting grid.
    #[arg(long)]
    dry_run: bool,

    /// Print more details (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> SplitConfig {
        SplitConfig {
            xsplit: self.xsplit,
            ysplit: self.ysplit,
            max_x: self.max_x,
            max_y: self.max_y,
            flip: self.flip,
            dovetail: self.dovetail,
            dovetail_width: self.dovetail_width,
            dovetail_height: self.dovetail_height,
            dovetail_angle: self.dovetail_angle.to_radians(),
            output_dir: self.output_dir.clone(),
            stl_format: if self.ascii {
                StlFormat::Ascii
            } else {
                StlFormat::Binary
            },
        }
    }

    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let splitter = Splitter::new(cli.config()).context("invalid arguments")?;

    if cli.dry_run {
        let plan = splitter
            .dry_run(&cli.input)
            .with_context(|| format!("failed to plan the split of {}", cli.input.display()))?;
        log::info!("Dry run: up to {} parts, nothing written.", plan.num_cells());
        return Ok(());
    }

    let report = splitter
        .run(&cli.input)
        .with_context(|| format!("failed to split {}", cli.input.display()))?;
    log::info!("{} parts written.", report.parts.len());

    Ok(())
}

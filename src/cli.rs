//! Command-line surface and its validation into a run [`Mode`].
//!
//! Exactly two modes exist:
//!
//! - single image: `--output` plus `--width`/`--height` (or `--dims WxH`),
//!   optionally `--upscale-dims WxH`;
//! - batch: `--input-dir` plus `--output-dir`, optionally `--keep-going` and
//!   `--report`.
//!
//! Flags from the other mode are rejected as conflicting; every other
//! combination is a usage error.
use crate::batch::BatchOptions;
use crate::error::{CheckerError, Result};
use crate::single::SingleOptions;
use crate::types::Dimensions;
use clap::{arg, value_parser, ArgMatches, Command};
use log::LevelFilter;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: checker_gen (--width INT --height INT | --dims WxH) --output PATH [--upscale-dims WxH]
       checker_gen --input-dir DIR --output-dir DIR [--keep-going] [--report PATH]";

pub fn command() -> Command {
    clap::command!()
        .about("Generate checkerboard PNG images.")
        .arg(
            arg!(--width <INT> "Width of the checkerboard image")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            arg!(--height <INT> "Height of the checkerboard image")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(arg!(--dims <WxH> "Dimensions as a single <width>x<height> token"))
        .arg(
            arg!(-o --output <PATH> "Output file path; .png is appended when missing")
                .visible_alias("output-file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(--"upscale-dims" <WxH> "Nearest-neighbor upscale of the generated image"))
        .arg(
            arg!(--"input-dir" <DIR> "Directory of PNGs whose sizes are matched")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"output-dir" <DIR> "Directory receiving the checkerboards (created if missing)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(--"keep-going" "Report failing files and continue the batch"))
        .arg(
            arg!(--report <PATH> "Write a JSON summary of the batch run")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(-v --verbose ... "More logging (-v info, -vv debug)"))
        .arg(arg!(-q --quiet "Only log errors"))
}

/// Raw, unvalidated arguments.
#[derive(Clone, Debug, Default)]
pub struct CliArgs {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub dims: Option<String>,
    pub output: Option<PathBuf>,
    pub upscale_dims: Option<String>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub keep_going: bool,
    pub report: Option<PathBuf>,
    pub verbose: u8,
    pub quiet: bool,
}

impl CliArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            width: m.get_one::<i64>("width").copied(),
            height: m.get_one::<i64>("height").copied(),
            dims: m.get_one::<String>("dims").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            upscale_dims: m.get_one::<String>("upscale-dims").cloned(),
            input_dir: m.get_one::<PathBuf>("input-dir").cloned(),
            output_dir: m.get_one::<PathBuf>("output-dir").cloned(),
            keep_going: m.get_flag("keep-going"),
            report: m.get_one::<PathBuf>("report").cloned(),
            verbose: m.get_count("verbose"),
            quiet: m.get_flag("quiet"),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    fn single_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.width.is_some() {
            flags.push("--width");
        }
        if self.height.is_some() {
            flags.push("--height");
        }
        if self.dims.is_some() {
            flags.push("--dims");
        }
        if self.output.is_some() {
            flags.push("--output");
        }
        if self.upscale_dims.is_some() {
            flags.push("--upscale-dims");
        }
        flags
    }

    fn batch_only_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.keep_going {
            flags.push("--keep-going");
        }
        if self.report.is_some() {
            flags.push("--report");
        }
        flags
    }
}

/// A validated run.
#[derive(Clone, Debug)]
pub enum Mode {
    Single(SingleOptions),
    Batch {
        opts: BatchOptions,
        report: Option<PathBuf>,
    },
}

/// Decide which mode the arguments select, rejecting incoherent mixes.
pub fn resolve(args: &CliArgs) -> Result<Mode> {
    match (&args.input_dir, &args.output_dir) {
        (Some(input_dir), Some(output_dir)) => {
            let single = args.single_flags();
            if !single.is_empty() {
                return Err(CheckerError::ConflictingArguments(format!(
                    "{} cannot be combined with --input-dir/--output-dir",
                    single.join(", ")
                )));
            }
            Ok(Mode::Batch {
                opts: BatchOptions::new(input_dir, output_dir).with_keep_going(args.keep_going),
                report: args.report.clone(),
            })
        }
        (Some(_), None) | (None, Some(_)) => {
            let single = args.single_flags();
            if !single.is_empty() {
                return Err(CheckerError::ConflictingArguments(format!(
                    "{} cannot be combined with --input-dir/--output-dir",
                    single.join(", ")
                )));
            }
            Err(CheckerError::Usage(format!(
                "--input-dir and --output-dir must be given together\n{USAGE}"
            )))
        }
        (None, None) => resolve_single(args),
    }
}

fn resolve_single(args: &CliArgs) -> Result<Mode> {
    let batch = args.batch_only_flags();
    if !batch.is_empty() {
        return Err(CheckerError::ConflictingArguments(format!(
            "{} only apply to --input-dir/--output-dir batch runs",
            batch.join(", ")
        )));
    }

    let dims = match (&args.dims, args.width, args.height) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            return Err(CheckerError::ConflictingArguments(
                "--dims cannot be combined with --width/--height".to_string(),
            ))
        }
        (Some(token), None, None) => token.parse::<Dimensions>()?,
        (None, Some(w), Some(h)) => Dimensions::new(w, h)?,
        (None, Some(_), None) | (None, None, Some(_)) => {
            return Err(CheckerError::Usage(format!(
                "--width and --height must be given together\n{USAGE}"
            )))
        }
        (None, None, None) => {
            return Err(CheckerError::Usage(format!(
                "no dimensions given; use --width and --height or --dims\n{USAGE}"
            )))
        }
    };

    let output = args.output.clone().ok_or_else(|| {
        CheckerError::Usage(format!(
            "no output file specified; provide one with --output\n{USAGE}"
        ))
    })?;

    let upscale = args
        .upscale_dims
        .as_deref()
        .map(str::parse::<Dimensions>)
        .transpose()?;

    Ok(Mode::Single(
        SingleOptions::new(dims, output).with_upscale(upscale),
    ))
}

//! Directory batch mode.
//!
//! Every `*.png` file (case-insensitive) in the input directory gets a
//! same-sized checkerboard written under the same name in the output
//! directory. Entries are processed sequentially in lexicographic file name
//! order.
use crate::checker::generate_dims;
use crate::error::{CheckerError, Result};
use crate::image::io::{read_dimensions, save_rgb_png};
use crate::types::Dimensions;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for a directory-to-directory run.
#[derive(Clone, Debug)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Record per-file failures and continue instead of aborting the run.
    pub keep_going: bool,
}

impl BatchOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            keep_going: false,
        }
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub file_name: String,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub file_name: String,
    pub message: String,
}

/// Outcome of a batch run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub processed: Vec<BatchEntry>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// True for file names ending in `.png`, ignoring case.
pub fn is_png_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".png")
}

/// Sorted list of PNG files directly inside `dir`.
pub fn list_png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| CheckerError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CheckerError::io(dir, e))?;
        let path = entry.path();
        if !is_png_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        if !path.is_file() {
            log::warn!("skipping {}: not a regular file", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Run a batch, calling `on_written` after each output file is saved.
///
/// Both directories are checked before any file is touched; a missing
/// output directory is created.
pub fn run_batch<F>(opts: &BatchOptions, mut on_written: F) -> Result<BatchReport>
where
    F: FnMut(&BatchEntry),
{
    validate_input_dir(&opts.input_dir)?;
    prepare_output_dir(&opts.output_dir)?;

    let files = list_png_files(&opts.input_dir)?;
    log::info!(
        "processing {} PNG file(s) from {}",
        files.len(),
        opts.input_dir.display()
    );

    let mut report = BatchReport {
        input_dir: opts.input_dir.clone(),
        output_dir: opts.output_dir.clone(),
        ..Default::default()
    };

    for input in files {
        let Some(name) = input.file_name() else {
            continue;
        };
        // Join on the raw name so non-UTF-8 names survive unchanged.
        let output = opts.output_dir.join(name);
        let file_name = name.to_string_lossy().into_owned();
        match process_file(&input, &output) {
            Ok(dims) => {
                let entry = BatchEntry {
                    file_name,
                    output,
                    width: dims.width,
                    height: dims.height,
                };
                on_written(&entry);
                report.processed.push(entry);
            }
            Err(err) if opts.keep_going => {
                log::warn!("skipping {file_name}: {err}");
                report.failed.push(BatchFailure {
                    file_name,
                    message: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}

fn process_file(input: &Path, output: &Path) -> Result<Dimensions> {
    let dims = read_dimensions(input)?;
    log::debug!("{} is {dims}", input.display());
    let canvas = generate_dims(dims);
    save_rgb_png(&canvas, output)?;
    Ok(dims)
}

fn validate_input_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CheckerError::directory(dir, "input path is not a directory")),
        Err(e) => Err(CheckerError::directory(
            dir,
            format!("input directory is not accessible: {e}"),
        )),
    }
}

fn prepare_output_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CheckerError::directory(dir, "output path is not a directory")),
        Err(_) => {
            fs::create_dir_all(dir).map_err(|e| {
                CheckerError::directory(dir, format!("cannot create output directory: {e}"))
            })?;
            log::info!("created output directory {}", dir.display());
            Ok(())
        }
    }
}

use checker_gen::batch::run_batch;
use checker_gen::cli::{self, CliArgs, Mode};
use checker_gen::image::io::write_json_file;
use checker_gen::single::write_single;
use checker_gen::CheckerError;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CheckerError> {
    let matches = cli::command().get_matches();
    let args = CliArgs::from_matches(&matches);
    init_logging(&args);

    match cli::resolve(&args)? {
        Mode::Single(opts) => {
            let path = write_single(&opts)?;
            println!("Checkerboard image saved to: {}", path.display());
        }
        Mode::Batch { opts, report } => {
            let summary = run_batch(&opts, |entry| {
                println!(
                    "Checkerboard image saved to: {} ({}x{})",
                    entry.output.display(),
                    entry.width,
                    entry.height
                );
            })?;
            if let Some(path) = report {
                write_json_file(&path, &summary)?;
                println!("Saved batch report to {}", path.display());
            }
            if !summary.is_success() {
                return Err(CheckerError::BatchFailed {
                    failed: summary.failed.len(),
                    total: summary.total(),
                });
            }
        }
    }

    Ok(())
}

fn init_logging(args: &CliArgs) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

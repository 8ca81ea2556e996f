use std::process::ExitCode;

use clap::Parser;
use vcf2tsv_app::cli::Args;
use vcf2tsv_app::convert::Converter;
use vcf2tsv_app::error::AppResult;
use vcf2tsv_app::extract::TracingSink;
use vcf2tsv_app::logging::{self, FilterHandle};
use vcf2tsv_core::config::load_config;

fn main() -> ExitCode {
    let filter_handle = logging::init();
    let args = Args::parse();

    match run(&args, &filter_handle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if tracing::enabled!(tracing::Level::ERROR) {
                tracing::error!(exit_code = err.exit_code(), "{err}");
            } else {
                eprintln!("error: {err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &Args, filter_handle: &FilterHandle) -> AppResult<()> {
    let settings = load_config()?;

    let level = args
        .log_level()
        .unwrap_or(settings.logging.level.as_str());
    logging::apply_level(filter_handle, level);

    tracing::debug!(settings = ?settings, "Configuration loaded");

    args.validate()?;

    Converter::new(TracingSink).run(&args.read_dir, &args.tsv_file)?;

    Ok(())
}

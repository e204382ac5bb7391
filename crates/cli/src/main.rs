use clap::Parser;
use station_stats_cli::args::Args;
use station_stats_cli::config::Config;
use station_stats_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let format = args.format;
    let output = args.output.clone();
    // Convert args to engine::Config
    let config = Config::from(args);

    match station_stats_engine::run(&config) {
        Ok(summary) => {
            let report = match presentation::render(&summary, format) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Render Error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = presentation::emit(&report, output.as_deref()) {
                eprintln!("Output Error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::io;
use std::process::ExitCode;

use clap::Parser;
use dovetailkit::{init_logging, run, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    if let Err(err) = init_logging(&args.log_level, args.log_json) {
        eprintln!("{:#}", err);
        return ExitCode::from(2);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &mut out) {
        Ok(report) if report.error().is_some() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

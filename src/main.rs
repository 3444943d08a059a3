//! `numfield-replay`: run a key script through an edit session and print
//! the transcript.

use clap::Parser;
use log::LevelFilter;
use mimalloc::MiMalloc;
use session_script::{Script, diff_lines, run};
use std::path::PathBuf;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Parser)]
#[command(name = "numfield-replay", version, about = "Replay a numeric field key script")]
struct Args {
    /// Script to replay (TOML).
    script: PathBuf,
    /// Print the reports as JSON instead of transcript lines.
    #[arg(long)]
    json: bool,
    /// Compare against the script's `expect` lines and fail on mismatch.
    #[arg(long)]
    check: bool,
    /// Log to stderr; repeat for more detail. `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Default level for `-v` repeats, before `RUST_LOG` is applied.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match replay(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("numfield-replay: {}: {err}", args.script.display());
            ExitCode::FAILURE
        }
    }
}

fn replay(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let script = Script::load(&args.script)?;
    let reports = run(&script)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.line());
        }
    }

    if args.check {
        let actual: Vec<String> = reports.iter().map(|r| r.line()).collect();
        if actual != script.expect {
            eprint!("{}", diff_lines(&script.expect, &actual));
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

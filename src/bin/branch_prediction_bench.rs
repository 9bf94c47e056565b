use std::io;
use std::path::{Path, PathBuf};
use std::process;

use branch_prediction_bench::aggregate::aggregate;
use branch_prediction_bench::harness::{clock_resolution_ns, run_trials, BenchConfig};
use branch_prediction_bench::report;
use branch_prediction_bench::schema::{BenchReport, RunMeta};
use clap::error::ErrorKind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "branch-prediction-bench")]
#[command(about = "Times a predictable vs an unpredictable branchy loop (CSV + summary)")]
#[command(version)]
struct Args {
    /// Loop bound for both kernels.
    #[arg(long, value_name = "N")]
    size: i64,

    /// Number of repeated measurement trials.
    #[arg(long, value_name = "COUNT")]
    trials: i64,

    /// Deterministic RNG seed. Defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write a machine-readable JSON report.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    let config = BenchConfig {
        size: args.size,
        trials: args.trials,
        seed: args.seed,
    };
    if let Err(msg) = config.validate() {
        eprintln!("{msg}");
        process::exit(1);
    }

    let mut bits = config.bit_source();
    let clock_resolution = clock_resolution_ns();
    eprintln!(
        "Timing {} trials at size {} (clock resolution ~{clock_resolution} ns)...",
        config.trials, config.size
    );

    let series = run_trials(&config, &mut bits);
    let result = aggregate(&series);

    let csv_path = Path::new(report::CSV_FILE_NAME);
    report::write_csv(csv_path, &series, &result)?;
    eprintln!("Wrote {}", csv_path.display());

    if let Some(path) = &args.json {
        let bench_report = BenchReport {
            run: RunMeta {
                schema_version: 1,
                bench_version: env!("CARGO_PKG_VERSION").to_string(),
                size: config.size,
                trials: config.trials,
                seed: config.seed,
                clock_resolution_ns: clock_resolution,
            },
            samples: series,
            aggregate: result,
        };
        report::write_json(path, &bench_report)?;
        eprintln!("Wrote {}", path.display());
    }

    print!("{}", report::render_summary(&result));
    Ok(())
}

//! Result emission: fixed-name CSV, console summary, optional JSON report.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::aggregate::AggregateResult;
use crate::harness::TimingSample;
use crate::schema::BenchReport;

/// Output file created (and overwritten) in the working directory each run.
pub const CSV_FILE_NAME: &str = "branch_prediction_results.csv";

/// Write the per-trial table plus the Average row. Creates or truncates
/// `path`; any I/O failure is returned to the caller and aborts the run.
pub fn write_csv(
    path: &Path,
    series: &[TimingSample],
    aggregate: &AggregateResult,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(
        out,
        "Trial, Predictable (ns), Unpredictable (ns), Difference (ns)"
    )?;
    for sample in series {
        writeln!(
            out,
            "{}, {}, {}, {}",
            sample.trial,
            sample.predictable_ns,
            sample.unpredictable_ns,
            sample.difference_ns()
        )?;
    }
    writeln!(
        out,
        "Average, {}, {}, {}",
        aggregate.avg_predictable_ns, aggregate.avg_unpredictable_ns, aggregate.avg_difference_ns
    )?;
    out.flush()
}

/// Two-column summary table. Labels sit in a 30-character column; values are
/// right-aligned and always carry two decimals, so integer averages render
/// with a trailing `.00`.
pub fn render_summary(aggregate: &AggregateResult) -> String {
    let mut table = String::new();
    let rows = [
        (
            "Predictable Loop (avg ns)",
            aggregate.avg_predictable_ns as f64,
        ),
        (
            "Unpredictable Loop (avg ns)",
            aggregate.avg_unpredictable_ns as f64,
        ),
        ("Difference", aggregate.avg_difference_ns as f64),
    ];
    for (label, value) in rows {
        let _ = writeln!(table, "| {label:<30} | {value:>12.2} |");
    }
    table
}

/// Pretty-printed machine-readable report, only written when requested.
pub fn write_json(path: &Path, report: &BenchReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::schema::RunMeta;
    use tempfile::tempdir;

    fn sample(trial: u64, predictable_ns: u64, unpredictable_ns: u64) -> TimingSample {
        TimingSample {
            trial,
            predictable_ns,
            unpredictable_ns,
        }
    }

    fn small_series() -> Vec<TimingSample> {
        vec![sample(1, 100, 250), sample(2, 110, 260), sample(3, 90, 240)]
    }

    #[test]
    fn csv_has_header_one_row_per_trial_and_average() {
        let series = small_series();
        let agg = aggregate(&series);
        let dir = tempdir().unwrap();
        let path = dir.path().join(CSV_FILE_NAME);

        write_csv(&path, &series, &agg).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), series.len() + 2);
        assert_eq!(
            lines[0],
            "Trial, Predictable (ns), Unpredictable (ns), Difference (ns)"
        );
        assert_eq!(lines[1], "1, 100, 250, 150");
        assert_eq!(lines[4], "Average, 100, 250, 150");
    }

    #[test]
    fn csv_overwrites_instead_of_appending() {
        let series = small_series();
        let agg = aggregate(&series);
        let dir = tempdir().unwrap();
        let path = dir.path().join(CSV_FILE_NAME);

        write_csv(&path, &series, &agg).unwrap();
        write_csv(&path, &series, &agg).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), series.len() + 2);
    }

    #[test]
    fn csv_single_trial_boundary() {
        let series = vec![sample(1, 42, 43)];
        let agg = aggregate(&series);
        let dir = tempdir().unwrap();
        let path = dir.path().join(CSV_FILE_NAME);

        write_csv(&path, &series, &agg).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn csv_difference_may_be_negative() {
        let series = vec![sample(1, 500, 100)];
        let agg = aggregate(&series);
        let dir = tempdir().unwrap();
        let path = dir.path().join(CSV_FILE_NAME);

        write_csv(&path, &series, &agg).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("1, 500, 100, -400"));
    }

    #[test]
    fn csv_write_fails_on_unwritable_path() {
        let series = small_series();
        let agg = aggregate(&series);
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join(CSV_FILE_NAME);
        assert!(write_csv(&path, &series, &agg).is_err());
    }

    #[test]
    fn summary_renders_three_rows_with_two_decimals() {
        let agg = aggregate(&small_series());
        let table = render_summary(&agg);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Predictable Loop (avg ns)"));
        assert!(lines[0].contains("100.00"));
        assert!(lines[1].contains("Unpredictable Loop (avg ns)"));
        assert!(lines[1].contains("250.00"));
        assert!(lines[2].contains("Difference"));
        assert!(lines[2].contains("150.00"));
    }

    #[test]
    fn json_report_round_trips_through_serde_json() {
        let series = small_series();
        let agg = aggregate(&series);
        let report = BenchReport {
            run: RunMeta {
                schema_version: 1,
                bench_version: env!("CARGO_PKG_VERSION").to_string(),
                size: 64,
                trials: series.len() as i64,
                seed: Some(42),
                clock_resolution_ns: 25,
            },
            samples: series,
            aggregate: agg,
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_json(&path, &report).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["run"]["trials"], 3);
        assert_eq!(value["samples"].as_array().unwrap().len(), 3);
        assert_eq!(value["aggregate"]["avg_difference_ns"], 150);
    }
}

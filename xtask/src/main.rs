use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "lowlink workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benches and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Run a single bench target instead of all of them
        #[arg(long)]
        bench: Option<String>,
    },
}

const BENCHES: &[&str] = &["lowlink_benchmark", "scc_benchmark"];

const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Criterion writes `{"throughput": {"Elements": n}}`, or a `Bytes` variant we skip.
#[derive(Deserialize)]
struct BenchmarkInfo {
    throughput: Option<serde_json::Value>,
}

struct Row {
    workload: String,
    mean_ns: f64,
    elements: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            bench,
        } => {
            if !report_only {
                let targets: Vec<&str> = match bench.as_deref() {
                    Some(name) => {
                        if !BENCHES.contains(&name) {
                            anyhow::bail!("unknown bench `{name}`, expected one of {BENCHES:?}");
                        }
                        vec![name]
                    }
                    None => BENCHES.to_vec(),
                };
                run_benchmarks(&targets, quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(targets: &[&str], quick: bool) -> Result<()> {
    for target in targets {
        println!("\n>>> Benchmarking {target}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(target);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run bench {target}"))?;
        if !status.success() {
            anyhow::bail!("bench {target} exited with {status}");
        }
        println!("Finished {target} in {:.2?}", start.elapsed());
    }
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let root = Path::new(CRITERION_DIR);
    if !root.exists() {
        eprintln!("No criterion output found at {}", root.display());
        return Ok(());
    }

    let mut rows = Vec::new();
    collect_rows(root, root, &mut rows)?;
    rows.sort_by(|a, b| a.workload.cmp(&b.workload));

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("failed to create {}", report_path.display()))?;

    writeln!(file, "# lowlink Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean | Throughput |")?;
    writeln!(file, "|---|---|---|")?;
    for row in &rows {
        let throughput = match row.elements {
            Some(elements) if row.mean_ns > 0.0 => format_rate(elements as f64 * 1e9 / row.mean_ns),
            _ => "-".to_string(),
        };
        writeln!(
            file,
            "| {} | {} | {} |",
            row.workload,
            format_duration(row.mean_ns),
            throughput
        )?;
    }

    println!("Report written to {} ({} workloads)", report_path.display(), rows.len());
    Ok(())
}

/// Walks the criterion tree; every `<workload>/new/estimates.json` becomes a row.
fn collect_rows(root: &Path, dir: &Path, rows: &mut Vec<Row>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("report") {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("new") {
            if let Some(row) = read_row(root, &path)? {
                rows.push(row);
            }
            continue;
        }
        collect_rows(root, &path, rows)?;
    }
    Ok(())
}

fn read_row(root: &Path, new_dir: &Path) -> Result<Option<Row>> {
    let estimates_path = new_dir.join("estimates.json");
    if !estimates_path.exists() {
        return Ok(None);
    }
    let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&estimates_path)?)
        .with_context(|| format!("malformed {}", estimates_path.display()))?;

    let elements = fs::read_to_string(new_dir.join("benchmark.json"))
        .ok()
        .and_then(|content| element_throughput(&content));

    let workload_dir: PathBuf = new_dir
        .parent()
        .context("criterion `new` directory without a parent")?
        .strip_prefix(root)?
        .to_path_buf();
    let workload = workload_dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    Ok(Some(Row {
        workload,
        mean_ns: estimates.mean.point_estimate,
        elements,
    }))
}

/// Element count of a criterion `benchmark.json`, if it measured elements.
fn element_throughput(benchmark_json: &str) -> Option<u64> {
    serde_json::from_str::<BenchmarkInfo>(benchmark_json)
        .ok()?
        .throughput?
        .get("Elements")
        .and_then(serde_json::Value::as_u64)
}

fn format_duration(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.2} s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(per_sec: f64) -> String {
    if per_sec > 1_000_000.0 {
        format!("{:.2}M elem/s", per_sec / 1_000_000.0)
    } else if per_sec > 1_000.0 {
        format!("{:.2}K elem/s", per_sec / 1_000.0)
    } else {
        format!("{per_sec:.0} elem/s")
    }
}

// scripts/benchmark.rs
use bs_greeks::analytics::bs_greeks as greeks;
use bs_greeks::analytics::bs_greeks::{DEFAULT_RHO_SCALE, DEFAULT_THETA_SCALE};
use bs_greeks::math_utils::Timer;
use bs_greeks::{GreeksEngine, OptionInputs, OptionSide};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        SystemInfo {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    evaluations: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    checksum: f64,
}

impl BenchmarkResult {
    fn new(name: &str, evaluations: usize, time_ms: f64, checksum: f64) -> Self {
        BenchmarkResult {
            name: name.to_string(),
            evaluations,
            time_ms,
            throughput_per_sec: evaluations as f64 / (time_ms / 1000.0),
            checksum,
        }
    }
}

/// Strike/expiry grid around spot 100, with a slice of expired and
/// zero-vol contracts so the degenerate branches are timed too.
fn contract_grid(size: usize) -> Vec<(OptionInputs, OptionSide)> {
    (0..size)
        .map(|i| {
            let strike = 60.0 + (i % 81) as f64;
            let t = match i % 50 {
                0 => 0.0,
                n => n as f64 / 25.0,
            };
            let v = if i % 97 == 0 { 0.0 } else { 0.1 + (i % 7) as f64 * 0.05 };
            let side = if i % 2 == 0 { OptionSide::Call } else { OptionSide::Put };
            (OptionInputs::new(100.0, strike, t, v, 0.02), side)
        })
        .collect()
}

fn time_greek<F>(name: &str, contracts: &[(OptionInputs, OptionSide)], greek: F) -> BenchmarkResult
where
    F: Fn(&OptionInputs, OptionSide) -> f64,
{
    let mut timer = Timer::new();
    timer.start();
    let checksum: f64 = contracts.iter().map(|(o, side)| greek(o, *side)).sum();
    BenchmarkResult::new(name, contracts.len(), timer.elapsed_ms(), checksum)
}

fn run_greek_benchmarks(size: usize) -> Vec<BenchmarkResult> {
    let contracts = contract_grid(size);
    let mut results = vec![
        time_greek("Delta", &contracts, |o, side| {
            greeks::delta(o.s, o.k, o.t, o.v, o.r, side)
        }),
        time_greek("Gamma", &contracts, |o, _| greeks::gamma(o.s, o.k, o.t, o.v, o.r)),
        time_greek("Vega", &contracts, |o, _| greeks::vega(o.s, o.k, o.t, o.v, o.r)),
        time_greek("Theta", &contracts, |o, side| {
            greeks::theta(o.s, o.k, o.t, o.v, o.r, side, DEFAULT_THETA_SCALE)
        }),
        time_greek("Rho", &contracts, |o, side| {
            greeks::rho(o.s, o.k, o.t, o.v, o.r, side, DEFAULT_RHO_SCALE)
        }),
    ];

    let engine = GreeksEngine::default();

    let mut timer = Timer::new();
    timer.start();
    let serial: f64 = contracts
        .iter()
        .map(|(o, side)| engine.evaluate(o, *side).delta)
        .sum();
    results.push(BenchmarkResult::new(
        "Engine (serial)",
        size,
        timer.elapsed_ms(),
        serial,
    ));

    timer.start();
    let batch = engine.evaluate_batch(&contracts);
    let parallel: f64 = batch.iter().map(|g| g.delta).sum();
    results.push(BenchmarkResult::new(
        "Engine (rayon batch)",
        size,
        timer.elapsed_ms(),
        parallel,
    ));

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Evaluations,Time_ms,Throughput_per_sec,Checksum")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.3},{:.0},{:.6}",
            result.name,
            result.evaluations,
            result.time_ms,
            result.throughput_per_sec,
            result.checksum
        )?;
    }

    Ok(())
}

fn main() {
    println!("bs-greeks Benchmark Suite");
    println!("=========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let size = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(1_000_000);
    println!("Evaluating greeks over {} contracts...", size);
    let results = run_greek_benchmarks(size);

    println!("\n{:=<80}", "");
    println!(
        "{:<25} {:>12} {:>12} {:>16} {:>12}",
        "Benchmark", "Evaluations", "Time (ms)", "Throughput/s", "Checksum"
    );
    println!("{:-<80}", "");
    for result in &results {
        println!(
            "{:<25} {:>12} {:>12.3} {:>16.0} {:>12.4}",
            result.name,
            result.evaluations,
            result.time_ms,
            result.throughput_per_sec,
            result.checksum
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("\nCould not write {}: {}", filename, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_grid_covers_every_greek() {
        let results = run_greek_benchmarks(200);
        assert_eq!(results.len(), 7);
        for result in &results {
            assert_eq!(result.evaluations, 200);
            assert!(result.checksum.is_finite(), "{} checksum", result.name);
        }
        // serial and batch engine runs sum the same deltas
        assert!((results[5].checksum - results[6].checksum).abs() < 1e-9);
        assert_eq!(results[0].checksum, results[5].checksum);
    }
}

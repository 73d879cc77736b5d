//! Benchmark runner for the loop-order kernels.

use std::process::ExitCode;

use log::info;
use matmul_loops::LoopOrder;
use matmul_loops::cli::{self, Command};
use matmul_loops::harness::{self, BenchConfig, OrderReport, VERIFY_LIMIT, Verification};

fn main() -> ExitCode {
    env_logger::init();

    let config = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, cli::USAGE);
            return ExitCode::from(2);
        }
    };

    info!("config: {:?}", config);

    println!("=== Matrix Multiplication Loop-Order Benchmark ===\n");
    println!(
        "n={}, runs={}, orders={}, seed={}\n",
        config.n,
        config.runs,
        order_list(&config.orders),
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    let mut current = None;
    let reports = harness::run(&config, |order, r, secs| {
        if current != Some(order) {
            println!("Order {}", order);
            println!("{}", "-".repeat(50));
            current = Some(order);
        }
        println!("Run {}/{}: {:.6} s", r + 1, config.runs, secs);
    });

    for report in &reports {
        print_order_summary(&config, report);
    }

    if reports.len() > 1 {
        print_summary_table(&reports);
    }

    if reports
        .iter()
        .filter_map(|r| r.verification)
        .all(|v| v.is_ok())
    {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn order_list(orders: &[LoopOrder]) -> String {
    orders
        .iter()
        .map(|o| o.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn print_order_summary(config: &BenchConfig, report: &OrderReport) {
    let s = &report.stats;
    let times = report
        .times
        .iter()
        .map(|t| format!("{:.6}", t))
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "\nSummary (n={}, order={}, runs={}):",
        report.n, report.order, config.runs
    );
    println!("  times: {}", times);
    println!("  mean   = {:.6} s", s.mean);
    println!("  median = {:.6} s", s.median);
    println!("  stdev  = {:.6} s", s.stdev);
    println!("  GFLOPS = {:.3}", report.gflops());

    match report.verification {
        Some(Verification::Passed { max_diff }) => {
            println!("  Verification: OK (max diff {:.3e})", max_diff)
        }
        Some(Verification::Mismatch { max_diff }) => println!(
            "  Verification: MISMATCH (max diff {:.3e} > {:e})",
            max_diff, config.tolerance
        ),
        Some(Verification::Skipped { n }) => println!(
            "  n={} too large for cheap verification (limit {}); skipping verify.",
            n, VERIFY_LIMIT
        ),
        None => {}
    }
}

fn print_summary_table(reports: &[OrderReport]) {
    println!("\n{}", "=".repeat(64));
    println!("SUMMARY");
    println!("{}", "=".repeat(64));

    println!(
        "\n{:<8} {:>12} {:>12} {:>12} {:>12}",
        "Order", "Mean (ms)", "Median (ms)", "GFLOPS", "Speedup"
    );
    println!("{}", "-".repeat(64));

    // Speedups are relative to ijk when it ran, otherwise the first order.
    let baseline = reports
        .iter()
        .find(|r| r.order == LoopOrder::REFERENCE)
        .unwrap_or(&reports[0]);
    let baseline_time = baseline.stats.mean;

    for report in reports {
        let speedup = if report.stats.mean > 0.0 {
            baseline_time / report.stats.mean
        } else {
            0.0
        };
        println!(
            "{:<8} {:>12.3} {:>12.3} {:>12.3} {:>11.2}×",
            report.order.as_str(),
            report.stats.mean * 1000.0,
            report.stats.median * 1000.0,
            report.gflops(),
            speedup
        );
    }

    println!("{}", "=".repeat(64));
    println!("\nSpeedup relative to {}. Higher is better.\n", baseline.order);
}

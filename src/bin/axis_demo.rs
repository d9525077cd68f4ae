use axis2d::config::axis::{load_config, AxisToolConfig};
use axis2d::diagnostics::{AxisReport, TimingBreakdown};
use axis2d::io::write_json_file;
use axis2d::Axis2D;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoOutput {
    requested: usize,
    report: AxisReport,
    timing: TimingBreakdown,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "axis_demo".to_string());
    let config_path = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    let config = load_config(&config_path)?;

    let mut timing = TimingBreakdown::default();
    let axis = build_axis(&config, &mut timing)?;
    let report = timing.measure("report", || axis.report(&config.probes));

    let output = DemoOutput {
        requested: config.layout.requested(),
        report,
        timing,
    };
    print_text_summary(&output);

    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &output)?;
            println!("\nJSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("\nJSON report:\n{json}");
        }
    }
    Ok(())
}

fn build_axis(config: &AxisToolConfig, timing: &mut TimingBreakdown) -> Result<Axis2D, String> {
    let mut axis = timing
        .measure("build", || config.layout.build())
        .map_err(|e| format!("Failed to build axis: {e}"))?;
    if let Some([sx, sy]) = config.scale {
        timing
            .measure("scale", || axis.scale(sx, sy))
            .map_err(|e| format!("Failed to scale axis: {e}"))?;
    }
    Ok(axis)
}

fn print_text_summary(output: &DemoOutput) {
    let report = &output.report;
    println!("Axis summary");
    println!("  bins: {} of {} requested", report.bins, output.requested);
    if let Some(ext) = &report.extent {
        println!(
            "  extent: [{:.4}, {:.4}] x [{:.4}, {:.4}]",
            ext.low_x, ext.high_x, ext.low_y, ext.high_y
        );
    }
    println!("  griddy: {}", report.griddy);
    println!("  inclusion suspected: {}", report.inclusion_suspected);
    println!(
        "  rows: {}  columns: {}",
        report.row_edge_counts.len(),
        report.column_edge_counts.len()
    );
    for dropped in &report.dropped {
        println!("  dropped #{}: {}", dropped.attempt, dropped.reason);
    }
    for probe in &report.probes {
        match probe.bin {
            Some(bin) => println!("  ({}, {}) -> bin {bin}", probe.x, probe.y),
            None => println!("  ({}, {}) -> no bin", probe.x, probe.y),
        }
    }
    println!("  total_ms: {:.3}", output.timing.total_ms());
}

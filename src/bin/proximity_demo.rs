use hand_boundary::config::{load_config, RuntimeConfig};
use hand_boundary::image::io::{load_bgr_image, save_mask, write_json_file};
use hand_boundary::{FrameReport, ProximityState, ProximityTracker};
use log::{info, warn};
use serde::Serialize;
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    if let Err(err) = config.tracker.validate() {
        warn!("rejecting config {config_path}: {err}");
        return Err(err.into());
    }
    let tracker = ProximityTracker::new(config.tracker.clone());

    let mut rows = Vec::with_capacity(config.inputs.len());
    let mut failed = 0usize;
    for input in &config.inputs {
        match process_input(&tracker, &config, input) {
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!("skipping {}: {err}", input.display());
                failed += 1;
            }
        }
    }

    print_summary(&rows);
    if failed > 0 {
        println!("{failed} input(s) failed, see log for details");
    }
    if rows.is_empty() && failed > 0 {
        return Err("no input could be processed".into());
    }
    Ok(())
}

fn process_input(
    tracker: &ProximityTracker,
    config: &RuntimeConfig,
    input: &Path,
) -> hand_boundary::Result<SummaryRow> {
    let frame = load_bgr_image(input)?;
    let report = tracker.process(&frame.as_view());
    let (json_path, mask_path) = config.output_paths(input);

    write_json_file(&json_path, &InputReport { input, report: &report })?;
    if config.output.write_masks {
        save_mask(&report.mask, &mask_path)?;
    }
    if report.hand_found() {
        info!("{} -> {}", input.display(), json_path.display());
    } else {
        info!("{} -> {} (no hand)", input.display(), json_path.display());
    }

    Ok(SummaryRow {
        input: input.to_path_buf(),
        state: report.state,
        distance: report.distance,
        total_ms: report.trace.timings.total_ms,
    })
}

fn print_summary(rows: &[SummaryRow]) {
    for row in rows {
        let distance = row
            .distance
            .map_or_else(|| "-".to_string(), |d| format!("{d:.1}px"));
        println!(
            "{:<40} {:<8} {:>9} {:>8.2}ms",
            row.input.display(),
            row.state.label(),
            distance,
            row.total_ms
        );
    }
    let count = |s: ProximityState| rows.iter().filter(|r| r.state == s).count();
    println!(
        "frames={} safe={} warning={} danger={} no_hand={}",
        rows.len(),
        count(ProximityState::Safe),
        count(ProximityState::Warning),
        count(ProximityState::Danger),
        count(ProximityState::NoHand)
    );
}

fn usage() -> String {
    "Usage: proximity_demo <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InputReport<'a> {
    input: &'a Path,
    #[serde(flatten)]
    report: &'a FrameReport,
}

struct SummaryRow {
    input: PathBuf,
    state: ProximityState,
    distance: Option<f64>,
    total_ms: f64,
}

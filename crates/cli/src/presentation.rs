// crates/cli/src/presentation.rs
use crate::args::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use station_stats_engine::stats::{Stats, Summary, format_scaled};
use std::fmt::Write;
use std::path::Path;

/// One station in machine-readable output, values scaled back to decimals.
#[derive(Debug, Serialize)]
struct StationRow<'a> {
    station: &'a str,
    min: f64,
    mean: f64,
    max: f64,
    count: u64,
}

impl<'a> StationRow<'a> {
    fn new(station: &'a str, stats: &Stats) -> Self {
        Self {
            station,
            min: stats.min as f64 / 10.0,
            mean: stats.mean_scaled() as f64 / 10.0,
            max: stats.max as f64 / 10.0,
            count: stats.count,
        }
    }
}

/// Sort the merged mapping by key and render it in the requested format.
/// The returned report always ends with a newline.
pub fn render(summary: &Summary, format: OutputFormat) -> Result<String> {
    let mut rows: Vec<(&str, &Stats)> = summary
        .stations
        .iter()
        .map(|(key, stats)| (key.as_str(), stats))
        .collect();
    rows.sort_unstable_by(|a, b| a.0.cmp(b.0));

    match format {
        OutputFormat::Brc => Ok(render_brc(&rows)),
        OutputFormat::Table => Ok(render_table(&rows, summary)),
        OutputFormat::Json => render_json(&rows),
        OutputFormat::Csv => Ok(render_csv(&rows)),
    }
}

/// Write the rendered report to stdout, or to `path` when `--output` is set.
pub fn emit(report: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, report)?,
        None => print!("{report}"),
    }
    Ok(())
}

/// `{Hamburg=8.7/10.5/12.3, Palermo=-5.0/-5.0/-5.0}` の 1 行形式
fn render_brc(rows: &[(&str, &Stats)]) -> String {
    let mut out = String::with_capacity(rows.len() * 32 + 3);
    out.push('{');
    let mut rows = rows.iter().peekable();
    while let Some((station, stats)) = rows.next() {
        write!(out, "{station}={stats}").unwrap();
        if rows.peek().is_some() {
            out.push_str(", ");
        }
    }
    out.push_str("}\n");
    out
}

fn render_table(rows: &[(&str, &Stats)], summary: &Summary) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "station_stats v{} · chunks={}",
        crate::VERSION,
        summary.chunks
    )
    .unwrap();
    writeln!(out).unwrap();

    writeln!(out, "      MIN        MEAN         MAX     RECORDS     STATION").unwrap();
    writeln!(out, "----------------------------------------------").unwrap();

    for (station, stats) in rows {
        writeln!(
            out,
            "{:>9}{:>12}{:>12}{:>12}     {}",
            format_scaled(stats.min),
            format_scaled(stats.mean_scaled()),
            format_scaled(stats.max),
            stats.count,
            station
        )
        .unwrap();
    }

    let total_records: u64 = rows.iter().map(|(_, stats)| stats.count).sum();
    writeln!(out, "---").unwrap();
    writeln!(
        out,
        "{:>45}     TOTAL ({} stations)",
        total_records,
        rows.len()
    )
    .unwrap();

    writeln!(out).unwrap();
    writeln!(
        out,
        "[station_stats] Completed: {} stations, {} records ({} bytes).",
        rows.len(),
        total_records,
        summary.bytes
    )
    .unwrap();
    out
}

fn render_json(rows: &[(&str, &Stats)]) -> Result<String> {
    let rows: Vec<StationRow<'_>> = rows
        .iter()
        .map(|(station, stats)| StationRow::new(station, stats))
        .collect();
    let mut out = serde_json::to_string_pretty(&rows)?;
    out.push('\n');
    Ok(out)
}

fn render_csv(rows: &[(&str, &Stats)]) -> String {
    let mut out = String::from("station,min,mean,max,count\n");
    for (station, stats) in rows {
        let station = if station.contains(',') || station.contains('"') || station.contains('\n') {
            format!("\"{}\"", station.replace('"', "\"\""))
        } else {
            (*station).to_string()
        };
        writeln!(
            out,
            "{station},{},{},{},{}",
            format_scaled(stats.min),
            format_scaled(stats.mean_scaled()),
            format_scaled(stats.max),
            stats.count
        )
        .unwrap();
    }
    out
}

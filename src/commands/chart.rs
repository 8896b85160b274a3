use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use client_versions::config::PipelineConfig;
use client_versions::model::{ChartRow, SeriesDescriptor};
use client_versions::palette::{FillFallback, Palette};
use client_versions::pipeline::ChartCache;
use client_versions::util::{now_utc_string, write_json_pretty, write_json_stdout};

use super::read_snapshot;
use crate::cli::ChartArgs;

const CHART_TITLE: &str = "Version variance across clients";

#[derive(Debug, Clone, Serialize)]
struct SnapshotChart {
    source: String,
    digest: String,
    rows: Vec<ChartRow>,
    series: Vec<SeriesDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
struct ChartReport {
    generated_at: String,
    top_versions: usize,
    excluded_clients: Vec<String>,
    snapshots: Vec<SnapshotChart>,
}

pub fn run(args: ChartArgs) -> Result<()> {
    let config = PipelineConfig::from_overrides(
        args.ranking.top_versions,
        args.ranking.exclude_clients.clone(),
    );
    let palette = resolve_palette(args.palette.as_deref(), args.fill_fallback)?;

    info!(
        inputs = args.inputs.len(),
        top_versions = config.top_versions,
        excluded = %config.excluded_clients.join(","),
        palette_colors = palette.len(),
        fill_fallback = palette.fallback.as_str(),
        "chart requested"
    );

    let mut cache = ChartCache::new(config, palette);
    let mut snapshots = Vec::with_capacity(args.inputs.len());

    for input in &args.inputs {
        let clients = read_snapshot(input)?;
        let chart = cache.get_or_build(&clients).clone();
        let digest = cache.last_digest().unwrap_or_default().to_string();

        info!(
            source = %input.display(),
            clients = clients.len(),
            rows = chart.rows.len(),
            series = chart.series.len(),
            "charted snapshot"
        );

        snapshots.push(SnapshotChart {
            source: input.display().to_string(),
            digest,
            rows: chart.rows,
            series: chart.series,
        });
    }

    info!(
        snapshots = snapshots.len(),
        cache_hits = cache.hits(),
        cache_misses = cache.misses(),
        "chart completed"
    );

    let report = ChartReport {
        generated_at: now_utc_string(),
        top_versions: cache.config().top_versions,
        excluded_clients: cache.config().excluded_clients.clone(),
        snapshots,
    };

    if !args.json {
        return write_text_report(&report);
    }

    match args.output {
        Some(path) => {
            write_json_pretty(&path, &report)?;
            info!(path = %path.display(), "wrote chart report");
        }
        None => write_json_stdout(&report)?,
    }

    Ok(())
}

fn resolve_palette(path: Option<&Path>, fallback: Option<FillFallback>) -> Result<Palette> {
    let palette = match path {
        Some(path) => Palette::load(path)?,
        None => Palette::default(),
    };

    Ok(match fallback {
        Some(fallback) => palette.with_fallback(fallback),
        None => palette,
    })
}

fn write_text_report(report: &ChartReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "{CHART_TITLE}")?;
    writeln!(
        output,
        "Shows top {} versions of known clients",
        report.top_versions
    )?;

    for snapshot in &report.snapshots {
        writeln!(output)?;
        writeln!(
            output,
            "Snapshot: {} ({} clients, {} series, digest {})",
            snapshot.source,
            snapshot.rows.len(),
            snapshot.series.len(),
            short_digest(&snapshot.digest)
        )?;

        for row in &snapshot.rows {
            writeln!(output, "{}\ttop versions total={}", row.name, row.total())?;

            for (key, count) in row.columns() {
                let series = snapshot.series.iter().find(|series| &series.key == key);
                let color_index = series
                    .map(|series| series.color_index.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let fill = series
                    .and_then(|series| series.fill.as_deref())
                    .unwrap_or("none");
                writeln!(output, "\t{key}\t{count}\tcolor={color_index} fill={fill}")?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

fn short_digest(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}

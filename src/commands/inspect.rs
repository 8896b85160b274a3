use std::io::{self, Write};

use anyhow::Result;
use tracing::{info, warn};

use client_versions::config::PipelineConfig;
use client_versions::pipeline::{InspectReport, inspect};
use client_versions::util::write_json_stdout;

use super::read_snapshot;
use crate::cli::InspectArgs;

pub fn run(args: InspectArgs) -> Result<()> {
    let config =
        PipelineConfig::from_overrides(args.ranking.top_versions, args.ranking.exclude_clients);
    let clients = read_snapshot(&args.input)?;

    info!(source = %args.input.display(), clients = clients.len(), "inspect requested");

    let report = inspect(&clients, &config);

    for excluded in &report.excluded {
        info!(client = %excluded.client, count = excluded.count, "excluded client");
    }
    for summary in report.charted.iter().filter(|summary| summary.truncated() > 0) {
        info!(
            client = %summary.client,
            observed = summary.versions_observed,
            retained = summary.versions_retained,
            "truncated versions"
        );
    }
    if report.charted.is_empty() {
        warn!(source = %args.input.display(), "no clients left to chart");
    }

    if args.json {
        write_json_stdout(&report)
    } else {
        write_text_report(&report)
    }
}

fn write_text_report(report: &InspectReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(
        output,
        "Clients: total={} charted={} excluded={} top_versions={}",
        report.total_clients,
        report.charted.len(),
        report.excluded.len(),
        report.top_versions
    )?;

    for excluded in &report.excluded {
        writeln!(output, "excluded\t{}\tcount={}", excluded.client, excluded.count)?;
    }

    for summary in &report.charted {
        writeln!(
            output,
            "charted\t{}\tcount={}\tversions={}/{}\tretained_count={}",
            summary.client,
            summary.count,
            summary.versions_retained,
            summary.versions_observed,
            summary.retained_count
        )?;
    }

    output.flush()?;
    Ok(())
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use client_versions::palette::FillFallback;

#[derive(Parser, Debug)]
#[command(
    name = "client-versions",
    version,
    about = "Version variance across blockchain clients, as stacked-bar chart data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Chart(ChartArgs),
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RankingArgs {
    /// Versions kept per client. Row building scans columns linearly, so keep this small.
    #[arg(long)]
    pub top_versions: Option<usize>,

    /// Client bucket to leave out of the chart. Replaces the default `others`/`unknown`.
    #[arg(long = "exclude-client")]
    pub exclude_clients: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Snapshot JSON file, or `-` for stdin. Repeat to process snapshots in order.
    #[arg(long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub ranking: RankingArgs,

    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Overrides the palette file's fallback policy.
    #[arg(long, value_enum)]
    pub fill_fallback: Option<FillFallback>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, requires = "json")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub ranking: RankingArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};
    use client_versions::palette::FillFallback;

    #[test]
    fn chart_accepts_repeated_inputs_and_overrides() {
        let cli = Cli::try_parse_from([
            "client-versions",
            "chart",
            "--input",
            "a.json",
            "--input",
            "-",
            "--top-versions",
            "3",
            "--exclude-client",
            "others",
            "--fill-fallback",
            "wrap",
            "--json",
            "--output",
            "out/chart.json",
        ])
        .expect("chart args should parse");

        let Commands::Chart(args) = cli.command else {
            panic!("expected chart command");
        };
        assert_eq!(args.inputs.len(), 2);
        assert_eq!(args.ranking.top_versions, Some(3));
        assert_eq!(args.ranking.exclude_clients, vec!["others"]);
        assert_eq!(args.fill_fallback, Some(FillFallback::Wrap));
        assert!(args.json);
    }

    #[test]
    fn chart_requires_an_input() {
        assert!(Cli::try_parse_from(["client-versions", "chart"]).is_err());
    }

    #[test]
    fn output_path_requires_json() {
        let parsed = Cli::try_parse_from([
            "client-versions",
            "chart",
            "--input",
            "a.json",
            "--output",
            "chart.json",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn inspect_defaults_leave_ranking_unset() {
        let cli = Cli::try_parse_from(["client-versions", "inspect", "--input", "a.json"])
            .expect("inspect args should parse");
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect command");
        };
        assert!(args.ranking.top_versions.is_none());
        assert!(args.ranking.exclude_clients.is_empty());
        assert!(!args.json);
    }
}

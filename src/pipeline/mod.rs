use tracing::debug;

use crate::config::PipelineConfig;
use crate::model::{ChartData, ClientVersionBucket};
use crate::palette::Palette;

mod inspect;
mod memo;
mod pivot;
mod rank;
mod series;

pub use inspect::{ClientSummary, ExcludedClient, InspectReport, inspect};
pub use memo::{ChartCache, snapshot_digest};
pub use pivot::pivot_rows;
pub use rank::{rank_clients, rank_versions};
pub use series::{SeriesRegistry, register_series};

pub fn build_chart(
    clients: &[ClientVersionBucket],
    config: &PipelineConfig,
    palette: &Palette,
) -> ChartData {
    let ranked = rank_clients(clients, config);
    let rows = pivot_rows(&ranked);
    let series = register_series(&ranked, palette);

    debug!(
        input_clients = clients.len(),
        charted_clients = ranked.len(),
        series = series.len(),
        "built chart data"
    );

    ChartData { rows, series }
}

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::model::ClientVersionBucket;

use super::rank_clients;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedClient {
    pub client: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    pub client: String,
    pub count: u64,
    pub versions_observed: usize,
    pub versions_retained: usize,
    pub retained_count: u64,
}

impl ClientSummary {
    pub fn truncated(&self) -> usize {
        self.versions_observed - self.versions_retained
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub total_clients: usize,
    pub top_versions: usize,
    pub excluded: Vec<ExcludedClient>,
    pub charted: Vec<ClientSummary>,
}

pub fn inspect(clients: &[ClientVersionBucket], config: &PipelineConfig) -> InspectReport {
    let excluded = clients
        .iter()
        .filter(|bucket| config.is_excluded(&bucket.client))
        .map(|bucket| ExcludedClient {
            client: bucket.client.clone(),
            count: bucket.count,
        })
        .collect();

    // Same filter and stable sort as `rank_clients`, so positions line up.
    let mut sources: Vec<&ClientVersionBucket> = clients
        .iter()
        .filter(|bucket| !config.is_excluded(&bucket.client))
        .collect();
    sources.sort_by_key(|bucket| bucket.count);

    let charted = rank_clients(clients, config)
        .into_iter()
        .zip(sources)
        .map(|(ranked, source)| ClientSummary {
            versions_observed: source.versions.len(),
            versions_retained: ranked.versions.len(),
            retained_count: ranked
                .versions
                .iter()
                .fold(0u64, |total, version| total.saturating_add(version.count)),
            client: ranked.client,
            count: ranked.count,
        })
        .collect();

    InspectReport {
        total_clients: clients.len(),
        top_versions: config.top_versions,
        excluded,
        charted,
    }
}

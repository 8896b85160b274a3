use crate::config::PipelineConfig;
use crate::model::{ClientVersionBucket, VersionBucket};

// Stable sorts: equal counts keep input order.
pub fn rank_clients(
    clients: &[ClientVersionBucket],
    config: &PipelineConfig,
) -> Vec<ClientVersionBucket> {
    let mut ranked: Vec<ClientVersionBucket> = clients
        .iter()
        .filter(|bucket| !config.is_excluded(&bucket.client))
        .map(|bucket| ClientVersionBucket {
            client: bucket.client.clone(),
            count: bucket.count,
            versions: rank_versions(&bucket.versions, config.top_versions),
        })
        .collect();

    ranked.sort_by_key(|bucket| bucket.count);
    ranked
}

pub fn rank_versions(versions: &[VersionBucket], limit: usize) -> Vec<VersionBucket> {
    let mut ranked = versions.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

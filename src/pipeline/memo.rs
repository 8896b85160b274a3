use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::PipelineConfig;
use crate::model::{ChartData, ClientVersionBucket};
use crate::palette::Palette;

use super::build_chart;

pub fn snapshot_digest(clients: &[ClientVersionBucket]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((clients.len() as u64).to_le_bytes());
    for bucket in clients {
        update_str(&mut hasher, &bucket.client);
        hasher.update(bucket.count.to_le_bytes());
        hasher.update((bucket.versions.len() as u64).to_le_bytes());
        for version in &bucket.versions {
            update_str(&mut hasher, &version.name);
            hasher.update(version.count.to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

// Length prefix keeps adjacent fields from running together.
fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

#[derive(Debug)]
pub struct ChartCache {
    config: PipelineConfig,
    palette: Palette,
    last: Option<(String, ChartData)>,
    hits: u64,
    misses: u64,
}

impl ChartCache {
    pub fn new(config: PipelineConfig, palette: Palette) -> Self {
        Self {
            config,
            palette,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn last_digest(&self) -> Option<&str> {
        self.last.as_ref().map(|(digest, _)| digest.as_str())
    }

    pub fn get_or_build(&mut self, clients: &[ClientVersionBucket]) -> &ChartData {
        let digest = snapshot_digest(clients);

        let (_, data) = match self.last.take() {
            Some(entry) if entry.0 == digest => {
                self.hits += 1;
                debug!(digest = %digest, "chart cache hit");
                self.last.insert(entry)
            }
            _ => {
                self.misses += 1;
                debug!(digest = %digest, "chart cache miss");
                let data = build_chart(clients, &self.config, &self.palette);
                self.last.insert((digest, data))
            }
        };
        data
    }
}

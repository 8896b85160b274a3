use std::collections::HashSet;

use crate::model::{ClientVersionBucket, SeriesDescriptor, series_key};
use crate::palette::Palette;

#[derive(Debug, Default)]
pub struct SeriesRegistry {
    seen: HashSet<String>,
    series: Vec<SeriesDescriptor>,
}

impl SeriesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `key` was already registered; the earlier series is kept as is.
    pub fn register(
        &mut self,
        client: &str,
        version: &str,
        rank: usize,
        count: u64,
        palette: &Palette,
    ) -> bool {
        let key = series_key(client, version);
        if !self.seen.insert(key.clone()) {
            return false;
        }

        self.series.push(SeriesDescriptor {
            data_key: key.clone(),
            key,
            stack_group: client.to_string(),
            color_index: rank,
            fill: palette.fill(rank).map(ToOwned::to_owned),
            count,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn into_series(self) -> Vec<SeriesDescriptor> {
        self.series
    }
}

pub fn register_series(ranked: &[ClientVersionBucket], palette: &Palette) -> Vec<SeriesDescriptor> {
    let mut registry = SeriesRegistry::new();
    for bucket in ranked {
        for (rank, version) in bucket.versions.iter().enumerate() {
            registry.register(&bucket.client, &version.name, rank, version.count, palette);
        }
    }
    registry.into_series()
}

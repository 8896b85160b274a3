use crate::model::{ChartRow, ClientVersionBucket, series_key};

pub fn pivot_rows(ranked: &[ClientVersionBucket]) -> Vec<ChartRow> {
    ranked
        .iter()
        .map(|bucket| {
            let mut row = ChartRow::new(bucket.client.clone());
            for version in &bucket.versions {
                row.set(series_key(&bucket.client, &version.name), version.count);
            }
            row
        })
        .collect()
}

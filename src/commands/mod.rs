pub mod chart;
pub mod inspect;

use std::path::Path;

use anyhow::Result;

use client_versions::model::ClientVersionBucket;
use client_versions::util::read_json;

pub(crate) fn read_snapshot(path: &Path) -> Result<Vec<ClientVersionBucket>> {
    read_json(path)
}

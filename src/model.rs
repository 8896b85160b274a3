use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionBucket {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientVersionBucket {
    pub client: String,
    pub count: u64,
    #[serde(default)]
    pub versions: Vec<VersionBucket>,
}

pub fn series_key(client: &str, version: &str) -> String {
    format!("{client} {version}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartRow {
    pub name: String,
    columns: Vec<(String, u64)>,
}

impl ChartRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Sets a column. Re-setting an existing key keeps its position and replaces the value.
    pub fn set(&mut self, key: String, count: u64) {
        match self.columns.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, value)) => *value = count,
            None => self.columns.push((key, count)),
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> u64 {
        self.columns
            .iter()
            .fold(0u64, |total, (_, count)| total.saturating_add(*count))
    }

    pub fn columns(&self) -> &[(String, u64)] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for ChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry("name", &self.name)?;
        for (key, count) in &self.columns {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    pub key: String,
    pub data_key: String,
    pub stack_group: String,
    pub color_index: usize,
    pub fill: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub rows: Vec<ChartRow>,
    pub series: Vec<SeriesDescriptor>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.series.is_empty()
    }
}

pub const DEFAULT_TOP_VERSIONS: usize = 5;
pub const DEFAULT_EXCLUDED_CLIENTS: [&str; 2] = ["others", "unknown"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub top_versions: usize,
    pub excluded_clients: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_versions: DEFAULT_TOP_VERSIONS,
            excluded_clients: DEFAULT_EXCLUDED_CLIENTS
                .iter()
                .map(|client| client.to_string())
                .collect(),
        }
    }
}

impl PipelineConfig {
    pub fn from_overrides(top_versions: Option<usize>, excluded_clients: Vec<String>) -> Self {
        let defaults = Self::default();
        Self {
            top_versions: top_versions.unwrap_or(defaults.top_versions),
            excluded_clients: if excluded_clients.is_empty() {
                defaults.excluded_clients
            } else {
                excluded_clients
            },
        }
    }

    pub fn is_excluded(&self, client: &str) -> bool {
        self.excluded_clients.iter().any(|excluded| excluded == client)
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineConfig;

    #[test]
    fn default_excludes_unclassified_sentinels() {
        let config = PipelineConfig::default();
        assert_eq!(config.top_versions, 5);
        assert!(config.is_excluded("others"));
        assert!(config.is_excluded("unknown"));
        assert!(!config.is_excluded("Unknown"));
        assert!(!config.is_excluded("lighthouse"));
    }

    #[test]
    fn overrides_replace_exclusions_only_when_given() {
        let kept = PipelineConfig::from_overrides(Some(3), Vec::new());
        assert_eq!(kept.top_versions, 3);
        assert_eq!(kept.excluded_clients, vec!["others", "unknown"]);

        let replaced = PipelineConfig::from_overrides(None, vec!["teku".to_string()]);
        assert_eq!(replaced.top_versions, 5);
        assert!(replaced.is_excluded("teku"));
        assert!(!replaced.is_excluded("others"));
    }
}

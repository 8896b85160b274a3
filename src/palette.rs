use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::util::read_json;

pub const DEFAULT_COLORS: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#FFD93D", "#6C5CE7", "#A8E6CF"];

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FillFallback {
    #[default]
    None,
    Wrap,
}

impl FillFallback {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Wrap => "wrap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Vec<String>,
    #[serde(default)]
    pub fallback: FillFallback,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.iter().map(|color| color.to_string()).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteFile {
    Colors(Vec<String>),
    Full(Palette),
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        Self {
            colors,
            fallback: FillFallback::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FillFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file: PaletteFile = read_json(path)
            .with_context(|| format!("failed to load palette: {}", path.display()))?;
        Ok(match file {
            PaletteFile::Colors(colors) => Self::new(colors),
            PaletteFile::Full(palette) => palette,
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn fill(&self, color_index: usize) -> Option<&str> {
        if let Some(color) = self.colors.get(color_index) {
            return Some(color.as_str());
        }
        match self.fallback {
            FillFallback::None => None,
            FillFallback::Wrap if self.colors.is_empty() => None,
            FillFallback::Wrap => Some(self.colors[color_index % self.colors.len()].as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FillFallback, Palette};

    fn two_colors() -> Palette {
        Palette::new(vec!["red".to_string(), "blue".to_string()])
    }

    #[test]
    fn default_palette_covers_every_default_rank() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 5);
        for rank in 0..5 {
            assert!(palette.fill(rank).is_some());
        }
        assert_eq!(palette.fill(5), None);
    }

    #[test]
    fn out_of_range_index_has_no_fill_by_default() {
        let palette = two_colors();
        assert_eq!(palette.fill(1), Some("blue"));
        assert_eq!(palette.fill(2), None);
    }

    #[test]
    fn wrap_fallback_cycles_through_colors() {
        let palette = two_colors().with_fallback(FillFallback::Wrap);
        assert_eq!(palette.fill(2), Some("red"));
        assert_eq!(palette.fill(3), Some("blue"));
    }

    #[test]
    fn empty_palette_never_fills() {
        let palette = Palette::new(Vec::new()).with_fallback(FillFallback::Wrap);
        assert!(palette.is_empty());
        assert_eq!(palette.fill(0), None);
        assert_eq!(palette.fill(7), None);
    }

    #[test]
    fn palette_file_accepts_bare_array_and_object() {
        let bare: super::PaletteFile = serde_json::from_str(r##"["#000", "#fff"]"##)
            .expect("bare color array should deserialize");
        assert!(matches!(bare, super::PaletteFile::Colors(ref colors) if colors.len() == 2));

        let full: super::PaletteFile =
            serde_json::from_str(r##"{"colors": ["#000"], "fallback": "wrap"}"##)
                .expect("palette object should deserialize");
        match full {
            super::PaletteFile::Full(palette) => {
                assert_eq!(palette.fallback, FillFallback::Wrap);
                assert_eq!(palette.fill(4), Some("#000"));
            }
            super::PaletteFile::Colors(_) => panic!("object should not parse as bare array"),
        }
    }
}

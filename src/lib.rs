pub mod config;
pub mod model;
pub mod palette;
pub mod pipeline;
pub mod util;

pub use config::PipelineConfig;
pub use model::{ChartData, ChartRow, ClientVersionBucket, SeriesDescriptor, VersionBucket};
pub use palette::{FillFallback, Palette};
pub use pipeline::{ChartCache, build_chart};

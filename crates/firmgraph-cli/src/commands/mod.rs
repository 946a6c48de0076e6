//! Command implementations.

pub mod extract;
pub mod inspect;
pub mod validate;

pub use self::extract::execute_extract;
pub use self::inspect::execute_inspect;
pub use self::validate::execute_validate;

use crate::config::Config;
use crate::error::Result;
use firmgraph_extractor::{ExtractorConfig, Pipeline};
use std::path::PathBuf;
use tracing::debug;

/// Build a pipeline from the configuration, with an optional translation override.
pub(crate) fn build_pipeline(
    mut extractor: ExtractorConfig,
    config: &Config,
    translations: Option<PathBuf>,
) -> Result<Pipeline> {
    let path = translations.unwrap_or_else(|| config.translations_path());
    debug!("Using translation table {}", path.display());
    extractor.translations_path = Some(path);
    Ok(Pipeline::from_config(extractor)?)
}

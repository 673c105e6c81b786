use anyhow::{Context, Result};
use cinelane_types::Catalog;
use std::path::{Path, PathBuf};

use crate::config::{Config, resolve_data_dir};
use crate::types::OutputFormat;

/// Everything a handler needs, resolved once from the command line.
pub struct ExecutionContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub catalog: Catalog,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn load(
        data_dir: Option<&str>,
        catalog_override: Option<&Path>,
        format: OutputFormat,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        let catalog = load_catalog(catalog_override, &config, &data_dir)?;

        Ok(Self {
            data_dir,
            config,
            catalog,
            format,
        })
    }
}

/// Command-line catalog, then the configured one, then the built-in picks.
pub fn load_catalog(
    catalog_override: Option<&Path>,
    config: &Config,
    data_dir: &Path,
) -> Result<Catalog> {
    let path = catalog_override
        .map(Path::to_path_buf)
        .or_else(|| config.catalog_path(data_dir));

    match path {
        Some(path) => {
            let catalog = Catalog::load_from(&path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            tracing::info!(path = %path.display(), records = catalog.len(), "using catalog file");
            Ok(catalog)
        }
        None => {
            tracing::info!("using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

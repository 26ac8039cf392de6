use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{AtlasError, Result};
use crate::models::{Catalog, CatalogData};

/// 从TOML文件加载图鉴，文件不存在时使用内置示例
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        info!(path = %path.display(), "catalog not found, using sample data");
        return Ok(Catalog::sample());
    }

    let content = fs::read_to_string(path).map_err(|e| AtlasError::io(path, e))?;
    let data: CatalogData = toml::from_str(&content).map_err(|source| AtlasError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = Catalog::from_data(data)?;
    info!(path = %path.display(), feathers = catalog.feathers.len(), "catalog loaded");
    Ok(catalog)
}

/// 把示例图鉴写入文件，已有文件时拒绝覆盖
pub fn write_sample(path: &Path) -> Result<()> {
    if path.exists() {
        warn!(path = %path.display(), "catalog already exists, not overwriting");
        return Err(AtlasError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AtlasError::io(parent, e))?;
    }

    let data = Catalog::sample().to_data();
    let content = toml::to_string_pretty(&data)?;

    fs::write(path, content).map_err(|e| AtlasError::io(path, e))?;
    Ok(())
}

//! 配置文件 (~/.config/plume-atlas/config.toml)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AtlasError, Result};

pub const APP_DIR: &str = "plume-atlas";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 图鉴文件，缺省为数据目录下的 catalog.toml
    pub catalog_path: Option<PathBuf>,
    /// 窗口尺寸变化的合并间隔
    pub resize_debounce_ms: u64,
    /// RUST_LOG 未设置时使用的日志级别
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            resize_debounce_ms: 100,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| AtlasError::io(path, e))?;
        toml::from_str(&content).map_err(|source| AtlasError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

/// 配置文件默认路径
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(AtlasError::NoDataDir)?;
    Ok(dir.join(APP_DIR).join("config.toml"))
}

/// 获取数据目录路径 (~/.local/share/plume-atlas/)
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(AtlasError::NoDataDir)?.join(APP_DIR);
    fs::create_dir_all(&dir).map_err(|e| AtlasError::io(&dir, e))?;
    Ok(dir)
}

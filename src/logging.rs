//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入数据目录下的文件

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{AtlasError, Result};

pub const LOG_FILE: &str = "plume-atlas.log";

/// RUST_LOG 优先，否则使用给定级别
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

pub fn init_logging(dir: &Path, default_level: &str) -> Result<()> {
    let path = dir.join(LOG_FILE);
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AtlasError::io(&path, e))?;

    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

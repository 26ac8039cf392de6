//! 应用错误类型

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("读写 {path:?} 失败: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("解析 {path:?} 失败: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("序列化失败: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("数据校验失败: {0}")]
    Validation(String),

    #[error("{0:?} 已存在，未覆盖")]
    AlreadyExists(PathBuf),

    #[error("无法获取用户目录")]
    NoDataDir,
}

impl AtlasError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AtlasError::Io {
            path: Some(path.into()),
            source,
        }
    }
}

impl From<io::Error> for AtlasError {
    fn from(source: io::Error) -> Self {
        AtlasError::Io { path: None, source }
    }
}

pub type Result<T> = std::result::Result<T, AtlasError>;

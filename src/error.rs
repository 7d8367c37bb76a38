//! 定义了整个 `lyc_rs` 库的错误类型 `LycError`。

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::converter::types::ConvertError;

/// `lyc_rs` 库的通用错误枚举。
///
/// 文件相关的错误都带有出错文件的路径。
#[derive(Error, Debug)]
pub enum LycError {
    /// 打开、读取或创建文件失败
    #[error("无法访问文件 '{}': {source}", .path.display())]
    FileAccess {
        /// 出错的文件路径
        path: PathBuf,
        /// 底层 I/O 错误
        #[source]
        source: io::Error,
    },

    /// 文件内容解析或转换失败
    #[error("解析文件 '{}' 失败: {source}", .path.display())]
    Parse {
        /// 出错的文件路径
        path: PathBuf,
        /// 底层转换错误
        #[source]
        source: ConvertError,
    },

    /// 内存中的转换失败，不涉及具体文件
    #[error("转换失败: {0}")]
    Convert(#[from] ConvertError),

    /// 当前操作不支持该文件格式
    #[error("不支持的格式: {0}")]
    UnsupportedFormat(String),

    /// 配置文件读写失败
    #[error("配置错误: {0}")]
    Config(String),
}

impl LycError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: ConvertError) -> Self {
        match source {
            ConvertError::UnsupportedFormat(s) => Self::UnsupportedFormat(s),
            source => Self::Parse {
                path: path.into(),
                source,
            },
        }
    }
}

/// `LycError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, LycError>;

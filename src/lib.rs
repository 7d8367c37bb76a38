#![warn(missing_docs)]

//! # lyc_rs
//!
//! 一个用于在 LRC、SRT 和纯文本之间转换歌词，并在两份歌词之间同步时间轴的 Rust 库。
//!
//! ## 主要功能
//!
//! - **格式转换**: LRC → TXT、LRC → SRT、SRT → LRC、SRT → TXT。
//! - **时间轴同步**: 把一份歌词的时间轴按行复制到另一份歌词上，保留后者的文本。
//! - **格式化**: 规范化 LRC 文件中的时间戳和元数据。
//!
//! ## 格式转换
//!
//! ```rust
//! use lyc_rs::converter::types::{ConversionRoute, LyricFormat};
//! use lyc_rs::LycHelper;
//!
//! let helper = LycHelper::new();
//! let route = ConversionRoute::new(LyricFormat::Lrc, LyricFormat::Srt).unwrap();
//!
//! match helper.convert_content("[00:01.00]Hello\n[00:02.00]World", route) {
//!     Ok(srt_output) => {
//!         assert!(srt_output.starts_with("1\n00:00:01,000 --> 00:00:02,000\nHello\n"));
//!     }
//!     Err(e) => {
//!         eprintln!("转换失败: {}", e);
//!     }
//! }
//! ```
//!
//! ## 时间轴同步
//!
//! ```rust
//! use lyc_rs::converter::{parsers::lrc_parser::parse_lrc, processors::timeline_sync::sync};
//!
//! let source = parse_lrc("[00:01.00]Hello\n[00:02.00]World").unwrap();
//! let target = parse_lrc("[00:00.00]你好\n[00:00.00]世界").unwrap();
//!
//! let synced = sync(&source, target);
//! assert_eq!(synced.timeline, source.timeline);
//! assert_eq!(synced.content, vec!["你好", "世界"]);
//! ```
pub mod config;
pub mod converter;
pub mod error;

use std::path::{Path, PathBuf};

pub use crate::{
    config::LycConfig,
    error::{LycError, Result},
};

use crate::converter::{
    processors::file_processor::{self, SyncOutcome},
    types::ConversionRoute,
};

// ==========================================================
//  顶层 API
// ==========================================================

/// 顶层歌词助手，持有配置，为调用方提供统一、简单的接口。
///
/// 这是与本库交互的主要入口点。
#[derive(Debug, Clone, Default)]
pub struct LycHelper {
    config: LycConfig,
}

impl LycHelper {
    /// 使用默认配置创建一个新的 `LycHelper` 实例。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用给定配置创建实例。
    #[must_use]
    pub fn with_config(config: LycConfig) -> Self {
        Self { config }
    }

    /// 从用户配置目录加载配置并创建实例，加载失败时使用默认配置。
    #[must_use]
    pub fn from_user_config() -> Self {
        Self::with_config(LycConfig::load_or_default())
    }

    /// 当前配置。
    #[must_use]
    pub fn config(&self) -> &LycConfig {
        &self.config
    }

    /// 在内存中按给定路线转换歌词文本。
    ///
    /// # 返回
    /// `Result<String>` - 成功时返回目标格式的完整文本。
    pub fn convert_content(&self, content: &str, route: ConversionRoute) -> Result<String> {
        Ok(converter::convert_content(
            content,
            route,
            &self.config.conversion,
        )?)
    }

    /// 转换文件，目标格式由 `target` 的扩展名决定。
    ///
    /// # 参数
    /// * `source` - `.lrc` 或 `.srt` 源文件。
    /// * `target` - 输出文件路径。
    ///
    /// # 返回
    /// 成功时返回写出的文件路径。格式不受支持时不会创建任何文件。
    pub fn convert_file(&self, source: &Path, target: &Path) -> Result<PathBuf> {
        file_processor::convert_file(source, target, &self.config.conversion)
    }

    /// 用 `source` 的时间轴同步 `target`，结果写入 `<target>_synced.lrc`。
    ///
    /// 行数不一致只会产生警告，同步仍会进行。
    pub fn sync_files(&self, source: &Path, target: &Path) -> Result<SyncOutcome> {
        file_processor::sync_files(source, target)
    }

    /// 规范化一个 LRC 文件，结果写入 `<source>_fmt.lrc`。
    pub fn format_file(&self, source: &Path) -> Result<PathBuf> {
        file_processor::format_file(source)
    }
}

//! 文件处理器。
//!
//! 负责读取源文件、调用核心转换逻辑并写出结果文件。每个操作都会先把
//! 所有输入完整解析，再创建输出文件；任一步失败都不会留下输出文件。

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    converter::{
        self,
        processors::timeline_sync::SyncReport,
        types::{ConversionOptions, ConversionRoute, LyricFormat},
        utils::{extension_of, format_from_path, formatted_output_path, synced_output_path},
    },
    error::{LycError, Result},
};

/// 一次文件同步操作的结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    /// 写出的同步结果文件路径。
    pub output_path: PathBuf,
    /// 同步统计。
    pub report: SyncReport,
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| LycError::file_access(path, e))
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| LycError::file_access(path, e))
}

/// 根据扩展名选择转换路线，不支持时返回 `UnsupportedFormat`。
///
/// # 参数
/// * `source` - 源文件路径，扩展名须为 `lrc` 或 `srt`。
/// * `target` - 目标文件路径，扩展名决定目标格式。
pub fn route_for_paths(source: &Path, target: &Path) -> Result<ConversionRoute> {
    let source_format = match format_from_path(source) {
        Some(format @ (LyricFormat::Lrc | LyricFormat::Srt)) => format,
        _ => {
            return Err(LycError::UnsupportedFormat(format!(
                "源文件格式 '{}'",
                extension_of(source)
            )));
        }
    };
    let target_format = format_from_path(target).ok_or_else(|| {
        LycError::UnsupportedFormat(format!("目标格式 '{}'", extension_of(target)))
    })?;

    ConversionRoute::new(source_format, target_format).map_err(|_| {
        LycError::UnsupportedFormat(format!("目标格式 '{}'", extension_of(target)))
    })
}

/// 将 `source` 转换为 `target` 扩展名所指定的格式并写入 `target`。
///
/// # 返回
/// 成功时返回写出的文件路径。
pub fn convert_file(
    source: &Path,
    target: &Path,
    options: &ConversionOptions,
) -> Result<PathBuf> {
    let route = route_for_paths(source, target)?;
    let content = read_source(source)?;
    let output = converter::convert_content(&content, route, options)
        .map_err(|e| LycError::parse(source, e))?;

    write_output(target, &output)?;
    info!(
        "已将 '{}' 转换为 {}: '{}'",
        source.display(),
        route.target(),
        target.display()
    );
    Ok(target.to_path_buf())
}

/// 用 `source` 的时间轴同步 `target`，结果写入 `<target>_synced.lrc`。
pub fn sync_files(source: &Path, target: &Path) -> Result<SyncOutcome> {
    let source_content = read_source(source)?;
    let target_content = read_source(target)?;

    let source_lyrics = converter::parsers::lrc_parser::parse_lrc(&source_content)
        .map_err(|e| LycError::parse(source, e))?;
    let target_lyrics = converter::parsers::lrc_parser::parse_lrc(&target_content)
        .map_err(|e| LycError::parse(target, e))?;

    let (output, report) = converter::sync_lyrics(&source_lyrics, target_lyrics)
        .map_err(|e| LycError::parse(target, e))?;

    let output_path = synced_output_path(target);
    write_output(&output_path, &output)?;
    info!("同步结果已保存到 '{}'", output_path.display());

    Ok(SyncOutcome {
        output_path,
        report,
    })
}

/// 规范化一个 LRC 文件，结果写入 `<source>_fmt.lrc`。
pub fn format_file(source: &Path) -> Result<PathBuf> {
    let content = read_source(source)?;
    let output = converter::format_lyrics(&content).map_err(|e| LycError::parse(source, e))?;

    let output_path = formatted_output_path(source);
    write_output(&output_path, &output)?;
    info!("格式化结果已保存到 '{}'", output_path.display());
    Ok(output_path)
}

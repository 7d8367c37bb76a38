//! 包含一些与文件路径相关的工具函数。

use std::path::{Path, PathBuf};

use crate::converter::types::LyricFormat;

/// 同步结果文件名的后缀。
pub const SYNCED_SUFFIX: &str = "_synced";
/// 格式化结果文件名的后缀。
pub const FORMATTED_SUFFIX: &str = "_fmt";

/// 返回路径的扩展名（不含点），没有扩展名时返回空字符串。
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// 根据扩展名判断文件的歌词格式，区分大小写。
#[must_use]
pub fn format_from_path(path: &Path) -> Option<LyricFormat> {
    LyricFormat::from_extension(&extension_of(path))
}

/// 去掉结尾的 `.lrc` 后追加 `suffix` 和 `.lrc`。
fn lrc_output_path(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.strip_suffix(".lrc").unwrap_or(&file_name);
    path.with_file_name(format!("{base}{suffix}.lrc"))
}

/// 同步操作的输出路径：`<target 去掉 .lrc>_synced.lrc`。
#[must_use]
pub fn synced_output_path(target: &Path) -> PathBuf {
    lrc_output_path(target, SYNCED_SUFFIX)
}

/// 格式化操作的输出路径：`<source 去掉 .lrc>_fmt.lrc`。
#[must_use]
pub fn formatted_output_path(source: &Path) -> PathBuf {
    lrc_output_path(source, FORMATTED_SUFFIX)
}

//! # LRC 格式解析器

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::converter::{
    timestamp::parse_lrc_timestamp,
    types::{ConvertError, LyricsDocument},
};

/// 用于匹配一个 `[mm:ss.xx]` 或 `[hh:mm:ss.xx]` 时间戳标签
static LRC_TIMESTAMP_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:[0-9]+:)?[0-9]+:[0-9]+(?:\.[0-9]+)?\]")
        .expect("未能编译 LRC_TIMESTAMP_TAG_REGEX")
});

/// 用于匹配 [key: value] 格式的元数据标签
static LRC_METADATA_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([A-Za-z0-9_]+):(.+)\]").expect("未能编译 LRC_METADATA_TAG_REGEX")
});

/// 解析 LRC 格式内容到 `LyricsDocument` 结构。
///
/// 以 `[` 开头并含有 `]` 的行才会被处理：含时间戳标签的是歌词行，
/// 否则尝试作为元数据标签解析。其余的行被忽略。
///
/// # 错误
/// 仅当某个歌词行的时间戳无法解析时返回错误，整个解析随之失败。
pub fn parse_lrc(content: &str) -> Result<LyricsDocument, ConvertError> {
    let mut lyrics = LyricsDocument::default();
    let mut ignored_lines = 0usize;

    for (line_num_zero_based, line) in content.lines().enumerate() {
        if !(line.starts_with('[') && line.contains(']')) {
            if !line.trim().is_empty() {
                ignored_lines += 1;
            }
            continue;
        }

        // 歌词行
        if let Some(tag) = LRC_TIMESTAMP_TAG_REGEX.find(line) {
            let timestamp = parse_lrc_timestamp(tag.as_str()).map_err(|e| {
                ConvertError::InvalidLyricFormat(format!(
                    "LRC 第 {} 行的时间戳无效: {e}",
                    line_num_zero_based + 1
                ))
            })?;
            let text = LRC_TIMESTAMP_TAG_REGEX.replace_all(line, "");
            lyrics.push_line(timestamp, text.trim());
            continue;
        }

        // 元数据
        if let Some(caps) = LRC_METADATA_TAG_REGEX.captures(line)
            && let (Some(key), Some(value)) = (caps.get(1), caps.get(2))
        {
            lyrics
                .metadata
                .insert(key.as_str().to_string(), value.as_str().trim().to_string());
        } else {
            ignored_lines += 1;
        }
    }

    debug!(
        "LRC 解析完成: {} 行歌词, {} 个元数据标签, 忽略 {} 行。",
        lyrics.len(),
        lyrics.metadata.len(),
        ignored_lines
    );

    Ok(lyrics)
}

//! # SRT 格式解析器
//!
//! 条目之间以空行分隔。每个条目依次为序号行、`开始 --> 结束` 时间行，
//! 以及一行或多行文本。

use tracing::{debug, warn};

use crate::converter::{
    timestamp::{parse_srt_timestamp, try_parse_srt_timestamp},
    types::{ConvertError, SubtitleEntry, Timestamp},
};

const TIME_SEPARATOR: &str = " --> ";

/// 一个正在累积行的条目块。
#[derive(Default)]
struct PendingBlock {
    /// 块起始的行号（从 1 开始），用于警告信息。
    first_line: usize,
    lines: Vec<String>,
}

/// 解析 SRT 格式内容，返回按文件顺序排列的字幕条目。
///
/// 格式错误的条目（序号不是正整数，或者缺少时间行）会被丢弃并记录警告，
/// 不会导致整个解析失败。
pub fn parse_srt(content: &str) -> Result<Vec<SubtitleEntry>, ConvertError> {
    let mut entries = Vec::new();
    let mut block = PendingBlock::default();

    for (line_num_zero_based, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() {
            if let Some(entry) = finish_block(std::mem::take(&mut block)) {
                entries.push(entry);
            }
            continue;
        }

        if block.lines.is_empty() {
            block.first_line = line_num_zero_based + 1;
        }
        block.lines.push(line.to_string());
    }

    if let Some(entry) = finish_block(block) {
        entries.push(entry);
    }

    debug!("SRT 解析完成: {} 个条目。", entries.len());
    Ok(entries)
}

/// 把累积的块转换为字幕条目，块无效时返回 `None`。
fn finish_block(block: PendingBlock) -> Option<SubtitleEntry> {
    let mut lines = block.lines.into_iter();
    let number_line = lines.next()?;

    let number = match number_line.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            warn!(
                "SRT解析警告 (行 {}): 无效的序号 '{}'，已丢弃该条目。",
                block.first_line, number_line
            );
            return None;
        }
    };

    let Some(timing_line) = lines.next() else {
        warn!(
            "SRT解析警告 (行 {}): 条目 {} 缺少时间行，已丢弃。",
            block.first_line, number
        );
        return None;
    };
    let Some((start_str, end_str)) = timing_line.split_once(TIME_SEPARATOR) else {
        warn!(
            "SRT解析警告 (行 {}): 条目 {} 的时间行 '{}' 缺少 '-->' 分隔符，已丢弃。",
            block.first_line + 1,
            number,
            timing_line
        );
        return None;
    };

    let start = parse_entry_timestamp(start_str, number);
    let end = parse_entry_timestamp(end_str, number);
    let content = lines.collect::<Vec<_>>().join("\n");

    Some(SubtitleEntry {
        number,
        start,
        end,
        content,
    })
}

fn parse_entry_timestamp(text: &str, number: u32) -> Timestamp {
    if try_parse_srt_timestamp(text).is_none() {
        warn!("SRT解析警告: 条目 {number} 的时间戳 '{text}' 无效，按 00:00:00,000 处理。");
    }
    parse_srt_timestamp(text)
}

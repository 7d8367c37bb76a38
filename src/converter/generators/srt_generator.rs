//! SRT 格式生成器

use std::fmt::Write as FmtWrite;

use crate::converter::{
    timestamp::{add_seconds, format_srt},
    types::{ConvertError, LyricsDocument, SubtitleEntry},
};

/// 将字幕条目写成 SRT 文本，每个条目后跟一个空行。
pub fn generate_srt(entries: &[SubtitleEntry]) -> Result<String, ConvertError> {
    let mut srt_output = String::with_capacity(entries.len() * 60);

    for entry in entries {
        writeln!(srt_output, "{}", entry.number)?;
        writeln!(
            srt_output,
            "{} --> {}",
            format_srt(&entry.start),
            format_srt(&entry.end)
        )?;
        writeln!(srt_output, "{}", entry.content)?;
        writeln!(srt_output)?;
    }

    Ok(srt_output)
}

/// 将逐行歌词转换为字幕条目。
///
/// 每行的结束时间是下一行的开始时间；最后一行没有下一行，
/// 使用开始时间加上 `last_line_duration_secs` 秒。
#[must_use]
pub fn lyrics_to_subtitles(
    lyrics: &LyricsDocument,
    last_line_duration_secs: i64,
) -> Vec<SubtitleEntry> {
    lyrics
        .lines()
        .enumerate()
        .map(|(i, (start, text))| {
            let end = lyrics
                .timeline
                .get(i + 1)
                .copied()
                .unwrap_or_else(|| add_seconds(start, last_line_duration_secs));
            SubtitleEntry {
                number: u32::try_from(i + 1).unwrap_or(u32::MAX),
                start: *start,
                end,
                content: text.to_string(),
            }
        })
        .collect()
}

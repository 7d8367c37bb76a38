//! 歌词转换器核心模块

pub mod generators;
pub mod parsers;
pub mod processors;
pub mod timestamp;
pub mod types;
pub mod utils;

pub use types::{
    ConversionOptions, ConversionRoute, ConvertError, LyricFormat, LyricsDocument, SubtitleEntry,
    Timestamp,
};

use crate::converter::{
    generators::{lrc_generator, srt_generator, txt_generator},
    parsers::{lrc_parser, srt_parser},
    processors::timeline_sync::{self, SyncReport},
};
use tracing::debug;

// ==========================================================
//  格式转换
// ==========================================================

/// 按给定路线把源文本完整地转换为目标文本。
///
/// 源文本会先被完整解析，任何解析错误都会在生成输出之前返回。
///
/// # 参数
/// * `content` - 源文件的全部内容。
/// * `route` - 转换路线，决定源格式和目标格式。
/// * `options` - 转换选项。
///
/// # 返回
/// * `Result<String, ConvertError>` - 成功时返回目标格式的完整文本。
pub fn convert_content(
    content: &str,
    route: ConversionRoute,
    options: &ConversionOptions,
) -> Result<String, ConvertError> {
    debug!(
        "开始转换: {} -> {}",
        route.source(),
        route.target()
    );

    match route {
        ConversionRoute::LrcToTxt => {
            let lyrics = lrc_parser::parse_lrc(content)?;
            txt_generator::generate_txt_from_lyrics(&lyrics)
        }
        ConversionRoute::LrcToSrt => {
            let lyrics = lrc_parser::parse_lrc(content)?;
            let entries =
                srt_generator::lyrics_to_subtitles(&lyrics, options.last_line_duration_secs);
            srt_generator::generate_srt(&entries)
        }
        ConversionRoute::SrtToLrc => {
            let entries = srt_parser::parse_srt(content)?;
            lrc_generator::generate_lrc(&subtitles_to_lyrics(&entries))
        }
        ConversionRoute::SrtToTxt => {
            let entries = srt_parser::parse_srt(content)?;
            txt_generator::generate_txt_from_subtitles(&entries)
        }
    }
}

/// 将字幕条目转换为逐行歌词：取每个条目的开始时间，丢弃结束时间，元数据为空。
#[must_use]
pub fn subtitles_to_lyrics(entries: &[SubtitleEntry]) -> LyricsDocument {
    let mut lyrics = LyricsDocument::default();
    for entry in entries {
        lyrics.push_line(entry.start, entry.content.clone());
    }
    lyrics
}

/// 规范化一份 LRC 歌词：补齐时间戳的位数，统一元数据格式，去掉文本两端空白。
pub fn format_lyrics(content: &str) -> Result<String, ConvertError> {
    let lyrics = lrc_parser::parse_lrc(content)?;
    lrc_generator::generate_lrc(&lyrics)
}

/// 用 `source` 的时间轴同步 `target`，返回生成的 LRC 文本和同步统计。
pub fn sync_lyrics(
    source: &LyricsDocument,
    mut target: LyricsDocument,
) -> Result<(String, SyncReport), ConvertError> {
    let report = timeline_sync::sync_timeline(source, &mut target);
    let output = lrc_generator::generate_lrc(&target)?;
    Ok((output, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LRC_SAMPLE: &str = "[ti: Sample]\n[00:01.00]One\n[00:03.5]Two\n[00:07.25]Three\n";

    #[test]
    fn test_lrc_to_txt() {
        let output =
            convert_content(LRC_SAMPLE, ConversionRoute::LrcToTxt, &ConversionOptions::default())
                .unwrap();
        assert_eq!(output, "One\nTwo\nThree\n");
    }

    #[test]
    fn test_lrc_to_srt_end_times() {
        let output =
            convert_content(LRC_SAMPLE, ConversionRoute::LrcToSrt, &ConversionOptions::default())
                .unwrap();
        let entries = srt_parser::parse_srt(&output).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].end, entries[1].start);
        assert_eq!(entries[1].end, entries[2].start);
        assert_eq!(entries[2].start, Timestamp::new(0, 0, 7, 250));
        assert_eq!(entries[2].end, Timestamp::new(0, 0, 10, 250));
    }

    #[test]
    fn test_lrc_to_srt_custom_last_line_duration() {
        let options = ConversionOptions {
            last_line_duration_secs: 10,
        };
        let output = convert_content("[00:55.00]Only", ConversionRoute::LrcToSrt, &options).unwrap();
        assert_eq!(output, "1\n00:00:55,000 --> 00:01:05,000\nOnly\n\n");
    }

    #[test]
    fn test_srt_to_lrc_discards_end_time() {
        let entries = srt_parser::parse_srt("1\n00:00:01,000 --> 00:00:04,000\nHello\n\n").unwrap();
        let lyrics = subtitles_to_lyrics(&entries);

        assert_eq!(lyrics.timeline, vec![Timestamp::new(0, 0, 1, 0)]);
        assert_eq!(lyrics.content, vec!["Hello"]);
        assert!(lyrics.metadata.is_empty());

        let output = convert_content(
            "1\n00:00:01,000 --> 00:00:04,000\nHello\n\n",
            ConversionRoute::SrtToLrc,
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(output, "[00:01.000] Hello\n");
    }

    #[test]
    fn test_srt_to_txt() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\nA\nB\n\n2\n00:00:02,000 --> 00:00:03,000\nC\n";
        let output =
            convert_content(content, ConversionRoute::SrtToTxt, &ConversionOptions::default())
                .unwrap();
        assert_eq!(output, "A\nB\nC\n");
    }

    #[test]
    fn test_lrc_parse_error_aborts_conversion() {
        let result = convert_content(
            "[00:01.00]ok\n[99999999999:00.00]bad",
            ConversionRoute::LrcToSrt,
            &ConversionOptions::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_format_lyrics() {
        let output = format_lyrics("[ar:Someone]\n[0:1.5]  Hi  \nnoise\n[1:02:03.04]Late").unwrap();
        assert_eq!(output, "[ar: Someone]\n[00:01.500] Hi\n[01:02:03.040] Late\n");
    }

    #[test]
    fn test_sync_lyrics() {
        let source = "[00:01.00]a\n[00:02.00]b\n[00:03.00]c\n";
        let target = "[ti: Translated]\n[00:10.00]A\n[00:20.00]B\n";

        let source = lrc_parser::parse_lrc(source).unwrap();
        let target = lrc_parser::parse_lrc(target).unwrap();

        let (output, report) = sync_lyrics(&source, target).unwrap();

        assert_eq!(
            output,
            "[ti: Translated]\n[00:01.000] A\n[00:02.000] B\n"
        );
        assert!(report.is_partial());
        assert_eq!(report.synced_lines, 2);
    }
}

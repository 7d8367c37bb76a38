//! 纯文本生成器，丢弃所有时间轴和元数据。

use std::fmt::Write as FmtWrite;

use crate::converter::types::{ConvertError, LyricsDocument, SubtitleEntry};

/// 逐行输出歌词文本。
pub fn generate_txt_from_lyrics(lyrics: &LyricsDocument) -> Result<String, ConvertError> {
    write_records(lyrics.content.iter().map(String::as_str))
}

/// 每个字幕条目输出一条记录，多行文本块不会被拆开。
pub fn generate_txt_from_subtitles(entries: &[SubtitleEntry]) -> Result<String, ConvertError> {
    write_records(entries.iter().map(|entry| entry.content.as_str()))
}

fn write_records<'a>(records: impl Iterator<Item = &'a str>) -> Result<String, ConvertError> {
    let mut output = String::new();
    for record in records {
        writeln!(output, "{record}")?;
    }
    Ok(output)
}

//! LRC 格式生成器

use std::fmt::Write as FmtWrite;

use crate::converter::{
    timestamp::format_lrc,
    types::{ConvertError, LyricsDocument},
};

/// LRC 生成的主入口函数。
///
/// 先按键名顺序输出 `[key: value]` 元数据，再逐行输出 `时间戳 + 空格 + 文本`。
pub fn generate_lrc(lyrics: &LyricsDocument) -> Result<String, ConvertError> {
    let mut lrc_output = String::with_capacity(lyrics.len() * 40);

    for (key, value) in &lyrics.metadata {
        writeln!(lrc_output, "[{key}: {value}]")?;
    }

    for (timestamp, text) in lyrics.lines() {
        writeln!(lrc_output, "{} {}", format_lrc(timestamp), text)?;
    }

    Ok(lrc_output)
}

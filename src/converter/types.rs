//! 定义了歌词转换中使用的核心数据类型。

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

//=============================================================================
// 1. 错误枚举
//=============================================================================

/// 定义歌词解析、转换和同步过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 无效的时间格式字符串。
    #[error("无效的时间格式: {0}")]
    InvalidTime(String),
    /// 字符串格式化错误。
    #[error("格式错误: {0}")]
    Format(#[from] fmt::Error),
    /// 无效的歌词格式。
    #[error("无效的歌词格式: {0}")]
    InvalidLyricFormat(String),
    /// 不支持的源格式或目标格式。
    #[error("不支持的格式: {0}")]
    UnsupportedFormat(String),
}

//=============================================================================
// 2. 歌词格式枚举及转换路线
//=============================================================================

/// 枚举：表示支持的歌词格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum LyricFormat {
    /// 标准 LRC (`LyRiCs`) 格式。
    Lrc,
    /// `SubRip` 字幕格式。
    Srt,
    /// 不含任何时间轴和元数据的纯文本。
    Txt,
}

impl LyricFormat {
    /// 将歌词格式枚举转换为对应的文件扩展名字符串。
    #[must_use]
    pub fn to_extension_str(self) -> &'static str {
        match self {
            LyricFormat::Lrc => "lrc",
            LyricFormat::Srt => "srt",
            LyricFormat::Txt => "txt",
        }
    }

    /// 从文件扩展名（不含点）解析歌词格式。
    ///
    /// 区分大小写，`"LRC"` 不会被识别。
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::iter().find(|format| format.to_extension_str() == ext)
    }
}

impl fmt::Display for LyricFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LyricFormat::Lrc => write!(f, "LRC"),
            LyricFormat::Srt => write!(f, "SRT"),
            LyricFormat::Txt => write!(f, "TXT"),
        }
    }
}

/// 受支持的 (源格式, 目标格式) 组合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionRoute {
    /// LRC 转纯文本，丢弃时间轴和元数据。
    LrcToTxt,
    /// LRC 转 SRT，结束时间取自下一行的开始时间。
    LrcToSrt,
    /// SRT 转 LRC，丢弃结束时间。
    SrtToLrc,
    /// SRT 转纯文本，每个条目输出一条记录。
    SrtToTxt,
}

impl ConversionRoute {
    /// 根据源格式和目标格式选择转换路线。
    ///
    /// 先检查源格式，再检查目标格式；错误信息中包含不被支持的那一个。
    pub fn new(source: LyricFormat, target: LyricFormat) -> Result<Self, ConvertError> {
        match (source, target) {
            (LyricFormat::Lrc, LyricFormat::Txt) => Ok(Self::LrcToTxt),
            (LyricFormat::Lrc, LyricFormat::Srt) => Ok(Self::LrcToSrt),
            (LyricFormat::Srt, LyricFormat::Lrc) => Ok(Self::SrtToLrc),
            (LyricFormat::Srt, LyricFormat::Txt) => Ok(Self::SrtToTxt),
            (LyricFormat::Txt, _) => Err(ConvertError::UnsupportedFormat(format!(
                "源文件格式 {source}"
            ))),
            (_, target) => Err(ConvertError::UnsupportedFormat(format!(
                "目标格式 {target}"
            ))),
        }
    }

    /// 此路线的源格式。
    #[must_use]
    pub fn source(self) -> LyricFormat {
        match self {
            Self::LrcToTxt | Self::LrcToSrt => LyricFormat::Lrc,
            Self::SrtToLrc | Self::SrtToTxt => LyricFormat::Srt,
        }
    }

    /// 此路线的目标格式。
    #[must_use]
    pub fn target(self) -> LyricFormat {
        match self {
            Self::LrcToTxt | Self::SrtToTxt => LyricFormat::Txt,
            Self::LrcToSrt => LyricFormat::Srt,
            Self::SrtToLrc => LyricFormat::Lrc,
        }
    }
}

//=============================================================================
// 3. 时间戳
//=============================================================================

/// 一个时间点，从 00:00:00.000 开始计算，不含日期和时区。
///
/// 分和秒不做范围校验：`[01:75.000]` 会被原样保留。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// 小时。
    pub hours: u32,
    /// 分钟，通常为 0-59。
    pub minutes: u32,
    /// 秒，通常为 0-59。
    pub seconds: u32,
    /// 毫秒，0-999。
    pub milliseconds: u32,
}

impl Timestamp {
    /// 用各个字段创建一个时间戳。
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// 从总毫秒数创建一个规范化的时间戳。
    #[must_use]
    pub fn from_millis(total_ms: u64) -> Self {
        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        let milliseconds = total_ms % 1000;
        Self {
            hours: u32::try_from(hours).unwrap_or(u32::MAX),
            minutes: minutes as u32,
            seconds: seconds as u32,
            milliseconds: milliseconds as u32,
        }
    }

    /// 换算为总毫秒数。
    #[must_use]
    pub fn total_millis(&self) -> u64 {
        u64::from(self.hours) * 3_600_000
            + u64::from(self.minutes) * 60_000
            + u64::from(self.seconds) * 1000
            + u64::from(self.milliseconds)
    }
}

//=============================================================================
// 4. 文档模型
//=============================================================================

/// 一份逐行 LRC 歌词。
///
/// `timeline` 与 `content` 按下标一一对应，二者长度始终相同。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsDocument {
    /// `[key: value]` 形式的元数据，重复的键以最后一次出现为准。
    pub metadata: BTreeMap<String, String>,
    /// 每一行的开始时间。
    pub timeline: Vec<Timestamp>,
    /// 每一行的文本。
    pub content: Vec<String>,
}

impl LyricsDocument {
    /// 追加一行歌词。
    pub fn push_line(&mut self, timestamp: Timestamp, text: impl Into<String>) {
        self.timeline.push(timestamp);
        self.content.push(text.into());
    }

    /// 歌词行数。
    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// 是否不含任何歌词行。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// 按顺序遍历 (时间戳, 文本) 对。
    pub fn lines(&self) -> impl Iterator<Item = (&Timestamp, &str)> {
        self.timeline
            .iter()
            .zip(self.content.iter().map(String::as_str))
    }
}

/// SRT 文件中的一个字幕条目。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleEntry {
    /// 序号，只作展示用途，不要求连续。
    pub number: u32,
    /// 开始时间。
    pub start: Timestamp,
    /// 结束时间。
    pub end: Timestamp,
    /// 文本块，多行之间以 `\n` 连接。
    pub content: String,
}

//=============================================================================
// 5. 转换选项
//=============================================================================

/// LRC 转 SRT 时最后一行的默认持续秒数。
pub const DEFAULT_LAST_LINE_DURATION_SECS: i64 = 3;

/// 控制转换过程的选项。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// LRC 转 SRT 时，最后一行没有下一行可作为结束时间，
    /// 此时使用开始时间加上这个秒数。
    pub last_line_duration_secs: i64,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            last_line_duration_secs: DEFAULT_LAST_LINE_DURATION_SECS,
        }
    }
}

//! LRC 与 SRT 时间戳的解析、格式化和运算。

use chrono::TimeDelta;

use crate::converter::types::{ConvertError, Timestamp};

/// 解析 LRC 时间戳，例如 `[01:02.50]` 或 `01:01:02.500`。
///
/// 两段为 `mm:ss[.xx]`，三段为 `hh:mm:ss[.xx]`。小数部分按位数换算为毫秒：
/// 1 位乘 100，2 位乘 10，3 位原样使用，超过 3 位时只取前 3 位。
///
/// # 错误
/// 段数不是 2 或 3，或者任一数字部分不是非负整数时，返回 `ConvertError::InvalidTime`。
pub fn parse_lrc_timestamp(text: &str) -> Result<Timestamp, ConvertError> {
    let inner = text.trim().trim_start_matches('[').trim_end_matches(']');
    let parts: Vec<&str> = inner.split(':').collect();

    let (hours, minutes, seconds_part) = match parts.as_slice() {
        [minutes, seconds] => (0, parse_field(minutes, inner)?, *seconds),
        [hours, minutes, seconds] => (
            parse_field(hours, inner)?,
            parse_field(minutes, inner)?,
            *seconds,
        ),
        _ => {
            return Err(ConvertError::InvalidTime(format!(
                "LRC 时间戳 '{text}' 应为 mm:ss 或 hh:mm:ss 形式"
            )));
        }
    };

    let (seconds_str, fraction_str) = match seconds_part.split_once('.') {
        Some((sec, frac)) => (sec, Some(frac)),
        None => (seconds_part, None),
    };
    let seconds = parse_field(seconds_str, inner)?;
    let milliseconds = match fraction_str {
        Some(frac) => parse_fraction(frac, inner)?,
        None => 0,
    };

    Ok(Timestamp {
        hours,
        minutes,
        seconds,
        milliseconds,
    })
}

fn parse_field(field: &str, whole: &str) -> Result<u32, ConvertError> {
    field
        .parse::<u32>()
        .map_err(|e| ConvertError::InvalidTime(format!("无法解析时间戳 '{whole}' 中的 '{field}': {e}")))
}

/// 将秒后面的小数部分换算为毫秒。
fn parse_fraction(fraction: &str, whole: &str) -> Result<u32, ConvertError> {
    let digits = fraction.get(..3).unwrap_or(fraction);
    let value = parse_field(digits, whole)?;
    Ok(match digits.len() {
        1 => value * 100,
        2 => value * 10,
        _ => value,
    })
}

/// 严格解析 SRT 时间戳 `hh:mm:ss,mmm`，格式不符时返回 `None`。
#[must_use]
pub fn try_parse_srt_timestamp(text: &str) -> Option<Timestamp> {
    let (clock, millis) = text.trim().split_once(',')?;
    let mut fields = clock.split(':');
    let hours = fields.next()?.parse().ok()?;
    let minutes = fields.next()?.parse().ok()?;
    let seconds = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    let milliseconds = millis.parse().ok()?;

    Some(Timestamp {
        hours,
        minutes,
        seconds,
        milliseconds,
    })
}

/// 解析 SRT 时间戳 `hh:mm:ss,mmm`。
///
/// SRT 的毫秒总是 3 位，不做换算。格式错误时返回零时间戳而不是报错。
#[must_use]
pub fn parse_srt_timestamp(text: &str) -> Timestamp {
    try_parse_srt_timestamp(text).unwrap_or_default()
}

/// 将时间戳格式化为 LRC 时间标签。
///
/// 小时为 0 时省略小时，输出 `[mm:ss.xxx]`，否则输出 `[hh:mm:ss.xxx]`。
#[must_use]
pub fn format_lrc(ts: &Timestamp) -> String {
    if ts.hours > 0 {
        format!(
            "[{:02}:{:02}:{:02}.{:03}]",
            ts.hours, ts.minutes, ts.seconds, ts.milliseconds
        )
    } else {
        format!("[{:02}:{:02}.{:03}]", ts.minutes, ts.seconds, ts.milliseconds)
    }
}

/// 将时间戳格式化为 SRT 的 `hh:mm:ss,mmm`，小时总是输出。
#[must_use]
pub fn format_srt(ts: &Timestamp) -> String {
    format!(
        "{:02}:{:02}:{:02},{:03}",
        ts.hours, ts.minutes, ts.seconds, ts.milliseconds
    )
}

/// 返回向后推移 `seconds` 秒的新时间戳，秒、分、时之间正确进位。
///
/// 不在 24 小时处回绕；结果为负时截断为零。
#[must_use]
pub fn add_seconds(ts: &Timestamp, seconds: i64) -> Timestamp {
    let start = TimeDelta::milliseconds(i64::try_from(ts.total_millis()).unwrap_or(i64::MAX));
    let shifted = TimeDelta::try_seconds(seconds)
        .and_then(|delta| start.checked_add(&delta))
        .unwrap_or(start);
    Timestamp::from_millis(shifted.num_milliseconds().max(0) as u64)
}

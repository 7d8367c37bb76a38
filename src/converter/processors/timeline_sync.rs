//! 时间轴同步处理器。
//!
//! 把一份歌词的时间轴按行号复制到另一份歌词上，保留后者的文本和元数据。
//! 常见用法是用已经打好轴的原文歌词给翻译歌词对轴。

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::converter::types::LyricsDocument;

/// 一次时间轴同步的结果统计。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// 源歌词的行数。
    pub source_lines: usize,
    /// 目标歌词的行数。
    pub target_lines: usize,
    /// 实际被覆盖时间戳的行数。
    pub synced_lines: usize,
}

impl SyncReport {
    /// 两份歌词行数不同，只同步了较短的那部分。
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.source_lines != self.target_lines
    }
}

/// 就地同步：将 `source` 的前 `min(源行数, 目标行数)` 个时间戳写入 `target`。
///
/// 行数不一致只记录警告，不会返回错误；目标多出来的行保持原来的时间戳。
pub fn sync_timeline(source: &LyricsDocument, target: &mut LyricsDocument) -> SyncReport {
    let synced_lines = source.timeline.len().min(target.timeline.len());

    if source.timeline.len() != target.timeline.len() {
        warn!(
            "时间轴行数不一致。源: {} 行, 目标: {} 行。将只同步前 {} 行。",
            source.timeline.len(),
            target.timeline.len(),
            synced_lines
        );
    }

    target.timeline[..synced_lines].copy_from_slice(&source.timeline[..synced_lines]);

    info!("已同步 {} 行时间轴。", synced_lines);

    SyncReport {
        source_lines: source.timeline.len(),
        target_lines: target.timeline.len(),
        synced_lines,
    }
}

/// 返回用 `source` 时间轴同步后的 `target`。
#[must_use]
pub fn sync(source: &LyricsDocument, mut target: LyricsDocument) -> LyricsDocument {
    sync_timeline(source, &mut target);
    target
}

//! 用于演示 `lyc_rs` 库的核心功能。
//!
//! ## 如何运行
//!
//! ```bash
//! cargo run --package lyc_rs --example demo
//! ```

use std::fs;

use lyc_rs::{LycHelper, config::VERSION};
use tracing::{Level, info, warn};

const SOURCE_LRC: &str = "[ti: Demo]
[ar: lyc]
[00:01.5]第一行
[00:04.25]第二行
[00:07.000]第三行
";

const TRANSLATION_LRC: &str = "[ti: Demo (English)]
[00:00.00]First line
[00:00.00]Second line
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("lyc_rs {VERSION}");
    let work_dir = std::env::temp_dir().join("lyc_rs_demo");
    fs::create_dir_all(&work_dir)?;

    let source = work_dir.join("demo.lrc");
    let translation = work_dir.join("demo_en.lrc");
    fs::write(&source, SOURCE_LRC)?;
    fs::write(&translation, TRANSLATION_LRC)?;

    let helper = LycHelper::from_user_config();

    let srt_path = helper.convert_file(&source, &work_dir.join("demo.srt"))?;
    info!("SRT 输出:\n{}", fs::read_to_string(&srt_path)?);

    let txt_path = helper.convert_file(&srt_path, &work_dir.join("demo.txt"))?;
    info!("纯文本输出:\n{}", fs::read_to_string(&txt_path)?);

    let outcome = helper.sync_files(&source, &translation)?;
    if outcome.report.is_partial() {
        warn!(
            "只同步了 {} / {} 行。",
            outcome.report.synced_lines, outcome.report.target_lines
        );
    }
    info!("同步输出:\n{}", fs::read_to_string(&outcome.output_path)?);

    let fmt_path = helper.format_file(&source)?;
    info!("格式化输出:\n{}", fs::read_to_string(&fmt_path)?);

    Ok(())
}

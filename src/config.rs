//! 负责处理库的静态信息和持久化配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::{
    converter::types::{ConversionOptions, DEFAULT_LAST_LINE_DURATION_SECS},
    error::{LycError, Result},
};

/// 当前版本号。
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 总体用法说明。
pub const USAGE: &str = "Usage: lyc-cli [command] [options]
  Commands:
    sync\tSynchronize timeline of two lyrics files
    convert\tConvert lyrics file to another format
    fmt\tNormalize a lyrics file
    version\tShow version
    help\tShow help";

/// `sync` 命令的用法说明。
pub const SYNC_USAGE: &str = "Usage: lyc-cli sync <source> <target>";

/// `convert` 命令的用法说明。
pub const CONVERT_USAGE: &str = "Usage: lyc-cli convert <source> <target>
  Note:
  Target format is determined by file extension. Supported conversions:
    .lrc -> .txt\tPlain text format (no meta/timeline tags)
    .lrc -> .srt\tSubRip subtitles
    .srt -> .lrc\tLRC lyrics
    .srt -> .txt\tPlain text format";

/// `fmt` 命令的用法说明。
pub const FMT_USAGE: &str = "Usage: lyc-cli fmt <source>";

const CONFIG_DIR_NAME: &str = "lyc";
const CONFIG_FILE_NAME: &str = "lyc_config.json";

/// 持久化的用户配置。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LycConfig {
    /// 格式转换的默认选项。
    pub conversion: ConversionOptions,
}

impl LycConfig {
    /// 从配置文件加载；文件不存在或无法解析时使用默认配置。
    #[must_use]
    pub fn load_or_default() -> Self {
        match load_config() {
            Ok(config) => config,
            Err(e) => {
                info!("未能加载配置 ({e})，将使用默认配置。");
                Self::default()
            }
        }
    }
}

/// 获取应用配置目录下指定文件的完整路径。
///
/// # 参数
/// * `filename` - 目标配置文件的名称，例如 "lyc_config.json"。
pub(crate) fn get_config_file_path(filename: &str) -> std::result::Result<PathBuf, std::io::Error> {
    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push(CONFIG_DIR_NAME);
        fs::create_dir_all(&config_dir)?;
        config_dir.push(filename);
        Ok(config_dir)
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "无法找到用户配置目录",
        ))
    }
}

/// 从文件加载配置。
pub fn load_config() -> Result<LycConfig> {
    let config_path = get_config_file_path(CONFIG_FILE_NAME)
        .map_err(|e| LycError::Config(e.to_string()))?;
    let content =
        fs::read_to_string(&config_path).map_err(|e| LycError::file_access(&config_path, e))?;
    let config = parse_config(&content)?;
    info!("已从 '{}' 加载配置。", config_path.display());
    Ok(config)
}

/// 将配置序列化为 JSON 并保存到文件。
pub fn save_config(config: &LycConfig) -> Result<()> {
    let config_path = get_config_file_path(CONFIG_FILE_NAME)
        .map_err(|e| LycError::Config(e.to_string()))?;
    let content =
        serde_json::to_string_pretty(config).map_err(|e| LycError::Config(e.to_string()))?;
    fs::write(&config_path, content).map_err(|e| LycError::file_access(&config_path, e))?;
    info!("配置已保存。");
    Ok(())
}

/// 从 JSON 文本解析配置，缺失的字段取默认值。
pub fn parse_config(content: &str) -> Result<LycConfig> {
    let config: LycConfig =
        serde_json::from_str(content).map_err(|e| LycError::Config(e.to_string()))?;
    let duration = config.conversion.last_line_duration_secs;
    if duration != DEFAULT_LAST_LINE_DURATION_SECS {
        info!(
            "配置覆盖了最后一行的持续时间: {duration} 秒 (默认 {DEFAULT_LAST_LINE_DURATION_SECS} 秒)。"
        );
    }
    Ok(config)
}

//! 歌词生成器模块

pub mod lrc_generator;
pub mod srt_generator;
pub mod txt_generator;

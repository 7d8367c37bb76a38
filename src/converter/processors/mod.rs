//! 歌词处理器模块

pub mod file_processor;
pub mod timeline_sync;

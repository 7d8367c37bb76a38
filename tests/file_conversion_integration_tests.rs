use std::fs;
use std::path::{Path, PathBuf};

use lyc_rs::{LycConfig, LycError, LycHelper, converter::types::ConversionOptions};
use tempfile::TempDir;

/// 把 `tests/test_data` 中的文件复制到临时目录，返回复制后的路径。
fn stage_test_data(dir: &TempDir, filename: &str) -> PathBuf {
    let source = Path::new("tests/test_data").join(filename);
    let staged = dir.path().join(filename);
    fs::copy(&source, &staged)
        .unwrap_or_else(|e| panic!("复制测试文件 '{:?}' 失败: {}", source, e));
    staged
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("读取 '{:?}' 失败: {}", path, e))
}

#[test_log::test]
fn test_lrc_to_srt_file() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "source.lrc");
    let target = dir.path().join("source.srt");

    let written = LycHelper::new().convert_file(&source, &target).unwrap();

    assert_eq!(written, target);
    insta::assert_snapshot!(read(&target), @r"
    1
    00:00:12,500 --> 00:00:17,250
    When the night has come

    2
    00:00:17,250 --> 00:00:21,000
    And the land is dark

    3
    00:00:21,000 --> 01:02:03,040
    And the moon is the only light we'll see

    4
    01:02:03,040 --> 01:02:08,000
    No I won't be afraid

    5
    01:02:08,000 --> 01:02:11,000
    Oh I won't be afraid
    ");
}

#[test_log::test]
fn test_lrc_to_srt_respects_configured_last_line_duration() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "source.lrc");
    let target = dir.path().join("out.srt");

    let helper = LycHelper::with_config(LycConfig {
        conversion: ConversionOptions {
            last_line_duration_secs: 60,
        },
    });
    helper.convert_file(&source, &target).unwrap();

    assert!(read(&target).contains("01:02:08,000 --> 01:03:08,000"));
}

#[test_log::test]
fn test_lrc_to_txt_file() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "source.lrc");
    let target = dir.path().join("lyrics.txt");

    LycHelper::new().convert_file(&source, &target).unwrap();

    assert_eq!(
        read(&target),
        "When the night has come\n\
         And the land is dark\n\
         And the moon is the only light we'll see\n\
         No I won't be afraid\n\
         Oh I won't be afraid\n"
    );
}

#[test_log::test]
fn test_srt_to_lrc_file() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "subtitles.srt");
    let target = dir.path().join("subtitles.lrc");

    LycHelper::new().convert_file(&source, &target).unwrap();

    assert_eq!(
        read(&target),
        "[00:01.000] Hello\n\
         [00:04.500] This block has\ntwo lines\n\
         [01:00:00.100] Late entry\n"
    );
}

#[test_log::test]
fn test_srt_to_txt_file() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "subtitles.srt");
    let target = dir.path().join("subtitles.txt");

    LycHelper::new().convert_file(&source, &target).unwrap();

    assert_eq!(read(&target), "Hello\nThis block has\ntwo lines\nLate entry\n");
}

#[test]
fn test_unsupported_target_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "source.lrc");
    let target = dir.path().join("source.xyz");

    let err = LycHelper::new().convert_file(&source, &target).unwrap_err();

    assert!(matches!(err, LycError::UnsupportedFormat(ref s) if s.contains("xyz")));
    assert!(!target.exists(), "不支持的格式不应创建输出文件");
}

#[test]
fn test_unsupported_source_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("notes.md");
    fs::write(&source, "# notes").unwrap();
    let target = dir.path().join("notes.txt");

    let err = LycHelper::new().convert_file(&source, &target).unwrap_err();

    assert!(matches!(err, LycError::UnsupportedFormat(ref s) if s.contains("md")));
    assert!(!target.exists());
}

#[test]
fn test_parse_error_names_the_file_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "broken.lrc");
    let target = dir.path().join("broken.srt");

    let err = LycHelper::new().convert_file(&source, &target).unwrap_err();

    match err {
        LycError::Parse { path, .. } => assert_eq!(path, source),
        other => panic!("应返回 Parse 错误，实际为 {other:?}"),
    }
    assert!(!target.exists());
}

#[test]
fn test_missing_source_is_file_access_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("missing.lrc");
    let target = dir.path().join("missing.txt");

    let err = LycHelper::new().convert_file(&source, &target).unwrap_err();

    assert!(matches!(err, LycError::FileAccess { ref path, .. } if *path == source));
    assert!(err.to_string().contains("missing.lrc"));
    assert!(!target.exists());
}

#[test_log::test]
fn test_sync_files_with_length_mismatch() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "source.lrc");
    let target = stage_test_data(&dir, "translation.lrc");

    let outcome = LycHelper::new().sync_files(&source, &target).unwrap();

    assert_eq!(outcome.output_path, dir.path().join("translation_synced.lrc"));
    assert_eq!(outcome.report.source_lines, 5);
    assert_eq!(outcome.report.target_lines, 3);
    assert_eq!(outcome.report.synced_lines, 3);
    assert!(outcome.report.is_partial());

    assert_eq!(
        read(&outcome.output_path),
        "[la: zh]\n\
         [ti: Example Song (Translation)]\n\
         [00:12.500] 当夜幕降临\n\
         [00:17.250] 大地一片漆黑\n\
         [00:21.000] 月亮是我们唯一能看到的光\n"
    );
    // 目标文件本身保持不变
    assert!(read(&target).contains("[00:00.00]当夜幕降临"));
}

#[test]
fn test_sync_files_aborts_when_target_fails_to_parse() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "source.lrc");
    let target = stage_test_data(&dir, "broken.lrc");

    let err = LycHelper::new().sync_files(&source, &target).unwrap_err();

    assert!(matches!(err, LycError::Parse { ref path, .. } if *path == target));
    assert!(!dir.path().join("broken_synced.lrc").exists());
}

#[test_log::test]
fn test_format_file() {
    let dir = TempDir::new().unwrap();
    let source = stage_test_data(&dir, "source.lrc");

    let output_path = LycHelper::new().format_file(&source).unwrap();

    assert_eq!(output_path, dir.path().join("source_fmt.lrc"));
    insta::assert_snapshot!(read(&output_path), @r"
    [ar: Example Artist]
    [by: lyc]
    [ti: Example Song]
    [00:12.500] When the night has come
    [00:17.250] And the land is dark
    [00:21.000] And the moon is the only light we'll see
    [01:02:03.040] No I won't be afraid
    [01:02:08.000] Oh I won't be afraid
    ");
}

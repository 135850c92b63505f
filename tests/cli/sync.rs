use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Backend that records the last request and answers every creation with Korean content.
const BACKEND_CONFIG: &str = r#"{
    "defaultLocale": "en",
    "locales": { "en": "English", "zh": "简体中文", "ko": "한국어" },
    "scanDirs": ["content/docs"],
    "backend": {
        "command": "/bin/sh",
        "args": ["-c", "cat > request.json; printf '{\"ko\":\"translated ko\"}'"]
    }
}"#;

const FAILING_BACKEND_CONFIG: &str = r#"{
    "defaultLocale": "en",
    "locales": { "en": "English", "ko": "한국어" },
    "scanDirs": ["content/docs"],
    "backend": { "command": "/bin/sh", "args": ["-c", "cat > /dev/null; exit 3"] }
}"#;

#[test]
fn test_dry_run_full_scan_plans_every_family() -> Result<()> {
    let test = CliTest::with_files(&["content/docs/index.mdx", "content/docs/index.zh.mdx"])?;

    let output = test.sync_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("Found 2 file(s) in 1 document family."));
    assert!(out.contains("==> content/docs/index"));
    assert!(out.contains(
        "  source: en content/docs/index.mdx (no changes, using default locale)"
    ));
    assert!(out.contains("  create: ko -> content/docs/index.ko.mdx"));
    assert!(out.contains("  update: zh content/docs/index.zh.mdx"));
    assert!(out.contains("Would create 1 file(s) and update 1 file(s)."));
    assert!(out.contains("Run with --apply to translate."));

    // Dry run never writes.
    assert!(!test.root().join("content/docs/index.ko.mdx").exists());
    assert_eq!(test.read_file("content/docs/index.zh.mdx")?, "content/docs/index.zh.mdx");

    Ok(())
}

#[test]
fn test_missing_scan_dir_is_a_warning() -> Result<()> {
    let test = CliTest::with_files(&["content/docs/index.mdx"])?;

    let output = test.sync_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("warning: Scan directory does not exist: messages"));
    assert!(out.contains("Would create 2 file(s) and update 0 file(s)."));

    Ok(())
}

#[test]
fn test_bare_locale_files_form_one_family() -> Result<()> {
    let test = CliTest::with_files(&["messages/en.json", "messages/zh.json"])?;

    let output = test.sync_command().output()?;
    let out = stdout(&output);

    assert!(out.contains("==> messages"));
    assert!(out.contains("  create: ko -> messages/ko.json"));
    assert!(out.contains("  update: zh messages/zh.json"));

    Ok(())
}

#[test]
fn test_changed_files_select_affected_families() -> Result<()> {
    let test = CliTest::with_files(&[
        "content/docs/index.mdx",
        "content/docs/guide.mdx",
        "content/docs/guide.zh.mdx",
    ])?;

    let output = test
        .sync_command()
        .arg("--changed-files")
        .arg("content/docs/guide.zh.mdx")
        .output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("1 changed file(s) affect 1 family."));
    assert!(out.contains("==> content/docs/guide"));
    assert!(!out.contains("==> content/docs/index"));
    assert!(out.contains(
        "  source: zh content/docs/guide.zh.mdx (only changed file in family)"
    ));
    assert!(out.contains("  update: en content/docs/guide.mdx"));

    Ok(())
}

#[test]
fn test_changed_files_from_env_with_root_prefix() -> Result<()> {
    let test = CliTest::with_files(&["content/docs/index.mdx", "content/docs/guide.mdx"])?;
    let changed = format!("{}/content/docs/index.mdx", test.root_name());

    let output = test
        .sync_command()
        .env("I18N_CHANGED_FILES", changed)
        .output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("==> content/docs/index"));
    assert!(out.contains("(default locale file changed)"));
    assert!(!out.contains("==> content/docs/guide"));

    Ok(())
}

#[test]
fn test_unrelated_changes_translate_nothing() -> Result<()> {
    let test = CliTest::with_files(&["content/docs/index.mdx"])?;

    let output = test
        .sync_command()
        .arg("--changed-files")
        .arg("README.md, src/app.ts")
        .output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("No document family affected by the changes, nothing to translate."));
    assert!(!out.contains("==>"));

    Ok(())
}

#[test]
fn test_blank_change_list_translates_nothing() -> Result<()> {
    let test = CliTest::with_files(&["content/docs/index.mdx", "content/docs/guide.mdx"])?;

    let output = test
        .sync_command()
        .env("I18N_CHANGED_FILES", " , ")
        .output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("0 changed file(s) affect 0 families."));
    assert!(out.contains("No document family affected by the changes, nothing to translate."));
    assert!(!out.contains("==>"));

    Ok(())
}

#[test]
fn test_ambiguous_family_is_skipped_with_failure_exit() -> Result<()> {
    let test = CliTest::with_files(&[
        "content/docs/index.mdx",
        "content/docs/index.zh.mdx",
        "content/docs/index.ko.mdx",
        "content/docs/guide.mdx",
    ])?;

    let output = test
        .sync_command()
        .arg("--changed-files")
        .arg("content/docs/index.zh.mdx,content/docs/index.ko.mdx,content/docs/guide.mdx")
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains(
        "error: several non-default locales changed (ko, zh); cannot choose a source of truth, family skipped"
    ));
    // The other family is still planned.
    assert!(out.contains("==> content/docs/guide"));
    assert!(out.contains("  create: ko -> content/docs/guide.ko.mdx"));
    assert!(out.contains("1 family skipped or failed"));

    Ok(())
}

#[test]
fn test_apply_creates_and_updates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", BACKEND_CONFIG)?;
    test.write_file("content/docs/index.mdx", "# Hello")?;
    test.write_file("content/docs/index.zh.mdx", "# 你好")?;

    let output = test.sync_command().arg("--apply").output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("content/docs/index.ko.mdx")?, "translated ko");
    assert!(out.contains("Created 1 file(s) and updated 1 file(s)."));

    // The update request is the last one sent: source first, then targets.
    let request: Value = serde_json::from_str(&test.read_file("request.json")?)?;
    assert_eq!(request["mode"], "update");
    assert_eq!(request["sourceLocale"], "en");
    assert_eq!(request["targetLocales"], serde_json::json!(["zh"]));
    let files = request["files"].as_array().expect("files array");
    assert_eq!(files.len(), 2);
    assert!(files[0].as_str().unwrap_or_default().ends_with("content/docs/index.mdx"));
    assert!(files[1].as_str().unwrap_or_default().ends_with("content/docs/index.zh.mdx"));

    Ok(())
}

#[test]
fn test_apply_backend_failure_reports_and_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", FAILING_BACKEND_CONFIG)?;
    test.write_file("content/docs/index.mdx", "# Hello")?;
    test.write_file("content/docs/guide.mdx", "# Guide")?;

    let output = test.sync_command().arg("--apply").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(out.matches("error: translation failed:").count(), 2);
    assert!(out.contains("2 families skipped or failed"));
    assert!(!test.root().join("content/docs/index.ko.mdx").exists());

    Ok(())
}

#[test]
fn test_apply_without_backend_is_fatal() -> Result<()> {
    let test = CliTest::with_files(&["content/docs/index.mdx"])?;

    let output = test.sync_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--apply requires a translation backend"));

    Ok(())
}

#[test]
fn test_missing_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("content/docs/index.mdx", "# Hello")?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".i18nrc.json not found"));

    Ok(())
}

#[test]
fn test_unknown_default_locale_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nrc.json",
        r#"{ "defaultLocale": "fr", "locales": { "en": "English" } }"#,
    )?;

    let output = test.sync_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Default locale 'fr' is not one of the supported locales"));

    Ok(())
}

#[test]
fn test_locales_from_script_source() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nrc.json",
        r#"{ "localeSource": "src/i18n/config.ts", "scanDirs": ["content/docs"] }"#,
    )?;
    test.write_file(
        "src/i18n/config.ts",
        r#"export const defaultLocale = 'en';
export const supportedLocales = {
  en: 'English',
  ja: '日本語',
};
"#,
    )?;
    test.write_file("content/docs/index.mdx", "# Hello")?;

    let output = test.sync_command().arg("-v").output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("Locales: en, ja (default: en)"));
    assert!(out.contains("content/docs/index.mdx -> content/docs/index [en, default]"));
    assert!(out.contains("  create: ja -> content/docs/index.ja.mdx"));

    Ok(())
}

#[test]
fn test_scan_dir_override() -> Result<()> {
    let test = CliTest::with_files(&["content/docs/index.mdx", "other/page.md"])?;

    let output = test
        .sync_command()
        .args(["--scan-dir", "other"])
        .output()?;
    let out = stdout(&output);

    assert!(out.contains("==> other/page"));
    assert!(!out.contains("==> content/docs/index"));

    Ok(())
}

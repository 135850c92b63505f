use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_families_table() -> Result<()> {
    let test = CliTest::with_files(&[
        "content/docs/index.mdx",
        "content/docs/index.zh.mdx",
        "messages/en.json",
        "messages/ko.json",
    ])?;

    let output = test.families_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    insta::assert_snapshot!(stdout(&output), @r"
    content/docs/index
      en  English   content/docs/index.mdx
      ko  한국어    (missing)
      zh  简体中文  content/docs/index.zh.mdx
    messages
      en  English   messages/en.json
      ko  한국어    messages/ko.json
      zh  简体中文  (missing)
    2 document families, 4 file(s).
    ");

    Ok(())
}

#[test]
fn test_families_reports_collisions() -> Result<()> {
    let test = CliTest::with_files(&["content/docs/zh.md", "content/docs/zh.mdx"])?;

    let output = test.families_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains(
        "warning: content/docs/zh.md and content/docs/zh.mdx both map to 'zh' of content/docs; using content/docs/zh.mdx"
    ));
    assert!(out.contains("1 document family, 1 file(s)."));

    Ok(())
}

#[test]
fn test_families_respects_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nrc.json",
        r#"{
            "defaultLocale": "en",
            "locales": { "en": "English", "zh": "简体中文" },
            "scanDirs": ["content/docs"],
            "ignores": ["content/docs/drafts", "**/*.json"]
        }"#,
    )?;
    test.write_file("content/docs/index.mdx", "")?;
    test.write_file("content/docs/meta.json", "{}")?;
    test.write_file("content/docs/drafts/wip.mdx", "")?;

    let output = test.families_command().output()?;
    let out = stdout(&output);

    assert!(out.contains("content/docs/index\n"));
    assert!(!out.contains("meta"));
    assert!(!out.contains("wip"));
    assert!(out.contains("1 document family, 1 file(s)."));

    Ok(())
}

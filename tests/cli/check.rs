use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_check_clean_locales() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"nav": {"home": "Home"}}"#),
        ("fr", r#"{"nav": {"home": "Accueil"}}"#),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 2 locales (en, fr), 1 key - no conflicts found\n"
    );
    assert!(!test.root().join("locales.ts").exists());
    Ok(())
}

#[test]
fn test_check_reports_missing_namespace_once() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"nav": {"home": "Home", "about": "About"}}"#),
        ("fr", r#"{}"#),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("key \"nav\" not found in \"fr.json\""));
    assert!(!out.contains("nav.home"));
    assert!(out.contains("1 warning"));
    Ok(())
}

#[test]
fn test_check_conflict_fails() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("de", r#"{"a": "flat"}"#),
        ("en", r#"{"a": {"b": "x"}}"#),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(
        "conflict at key \"a\" in locale \"en\": expected a string, found a nested object"
    ));
    Ok(())
}

#[test]
fn test_check_respects_ignores() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#), ("draft", r#"{"a": {"b": "B"}}"#)])?;
    test.write_file(".typelocalesrc.json", r#"{"ignores": ["draft.json"]}"#)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Checked 1 locale (en)"));
    Ok(())
}

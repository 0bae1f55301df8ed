use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_generate_typescript_module() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": {"b": "x", "c": "y"}}"#),
        ("fr", r#"{"a": {"b": "x2"}}"#),
    ])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let content = test.read_file("locales.ts")?;
    assert_eq!(
        content,
        r#"type Locales = {
  "a": {
    "b": "a.b"
    "c"?: "a.c"
  }
}

const keys: Locales = {
  "a": {
    "b": "a.b",
    "c": "a.c",
  },
}

export default keys

export type LocalesMap = {
  "a.b": {}
  "a.c": {}
}
"#
    );

    let out = stdout(&output);
    assert!(out.contains("warning: key \"a.c\" not found in \"fr.json\""));
    assert!(out.contains("Generated ./locales.ts from 2 locales (en, fr), 2 keys"));
    Ok(())
}

#[test]
fn test_generate_conflict_writes_nothing() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": {"b": "x"}}"#),
        ("fr", r#"{"a": "flat"}"#),
    ])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("error: conflict at key \"a\" in locale \"fr\""));
    assert!(out.contains("1 problems (1 error, 0 warnings)"));
    assert!(!test.root().join("locales.ts").exists());
    Ok(())
}

#[test]
fn test_generate_empty_directory_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/.keep", "")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("no valid locale files found in \"./locales\""));
    assert!(!test.root().join("locales.ts").exists());
    Ok(())
}

#[test]
fn test_generate_missing_directory_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().arg("missing").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Locales directory 'missing' does not exist."));
    Ok(())
}

#[test]
fn test_generate_skips_malformed_file() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"title": "Title"}"#), ("fr", "{ not json")])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("warning: locale file \"fr.json\""));
    assert!(out.contains("from 1 locale (en), 1 key"));
    assert!(test.read_file("locales.ts")?.contains("\"title\": \"title\","));
    Ok(())
}

#[test]
fn test_generate_json_to_custom_output() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"nav": {"home": "Home"}}"#)])?;

    let output = test
        .generate_command()
        .args(["--lang", "json", "--output", "generated/keys", "--indent", "4"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("generated/keys.json")?,
        "{\n    \"nav\": {\n        \"home\": \"nav.home\"\n    }\n}\n"
    );
    Ok(())
}

#[test]
fn test_generate_output_inside_locales_dir_is_not_read_back() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#)])?;

    let args = ["--lang", "json", "--output", "locales/keys.json"];
    let first = test.generate_command().args(args).output()?;
    assert_eq!(first.status.code(), Some(0));

    let second = test.generate_command().args(args).output()?;
    assert_eq!(second.status.code(), Some(0));
    assert!(stdout(&second).contains("from 1 locale (en)"));
    Ok(())
}

#[test]
fn test_generate_javascript_without_typing() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#)])?;

    let output = test
        .generate_command()
        .args(["-l", "js", "--no-typing", "--semi"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("locales.js")?,
        "export default {\n  \"a\": \"a\",\n};\n"
    );
    Ok(())
}

#[test]
fn test_generate_recursive() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"a": "A"}"#)?;
    test.write_file("locales/extra/fr.json", r#"{"a": "A", "b": "B"}"#)?;

    let flat = test.generate_command().output()?;
    assert!(stdout(&flat).contains("from 1 locale (en)"));

    let recursive = test.generate_command().arg("--recursive").output()?;
    assert!(stdout(&recursive).contains("from 2 locales (en, fr)"));
    assert!(test.read_file("locales.ts")?.contains("\"b\"?: \"b\""));
    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#)])?;
    test.write_file(
        ".typelocalesrc.json",
        r#"{"localesRoot": "./locales", "output": "./src/i18n/keys", "semi": true}"#,
    )?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(
        test.read_file("src/i18n/keys.ts")?
            .contains("export default keys;\n")
    );
    Ok(())
}

#[test]
fn test_generate_quiet_prints_nothing_on_success() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A", "b": "B"}"#), ("fr", r#"{"a": "A"}"#)])?;

    let output = test.generate_command().arg("--quiet").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    Ok(())
}

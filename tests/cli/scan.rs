use anyhow::Result;

use crate::CliTest;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_scan_end_to_end() -> Result<()> {
    let test = CliTest::with_login_project()?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Loaded 1 localization strings"));
    assert!(out.contains("Found 1 Dart files"));
    assert!(out.contains("Found 1 potential string replacements"));
    assert!(out.contains("\"Log In\" -> auth.login"));

    Ok(())
}

#[test]
fn test_scan_verbose_shows_rewrite() -> Result<()> {
    let test = CliTest::with_login_project()?;

    let output = test.scan_command().arg("--verbose").output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("return Text('Log In');"));
    assert!(out.contains("return Text('auth.login'.tr());"));

    Ok(())
}

#[test]
fn test_scan_report_export() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "assets/translations/en.json",
        r#"{"auth": {"login": "Log In"}, "common": {"submit": "Submit"}}"#,
    )?;
    test.write_file("lib/a.dart", "Text('Log In')\n")?;
    test.write_file("lib/b.dart", "Text('Submit')\n")?;

    let output = test.scan_command().args(["--report", "report.csv"]).output()?;
    assert!(output.status.success());

    let csv = test.read_file("report.csv")?;
    let lines: Vec<&str> = csv.lines().collect();

    // Header plus one row per replacement.
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "File,Line,String,Key,Original,Replacement");
    assert!(lines.iter().skip(1).any(|l| l.contains("\"Log In\"")));
    assert!(lines.iter().skip(1).any(|l| l.contains("\"Submit\"")));

    Ok(())
}

#[test]
fn test_scan_with_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/strings.json", r#"{"greet": "Hello World"}"#)?;
    test.write_file("app/ui.dart", "Text(\"Hello World\")\n")?;

    let output = test
        .scan_command()
        .args(["--catalog", "i18n/strings.json", "--source-root", "app"])
        .output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("\"Hello World\" -> greet"));

    Ok(())
}

#[test]
fn test_scan_respects_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lokeyrc.json",
        r#"{
            "catalogPath": "i18n/en.json",
            "sourceRoot": "app",
            "ignores": ["**/generated/**"]
        }"#,
    )?;
    test.write_file("i18n/en.json", r#"{"greet": "Hello World"}"#)?;
    test.write_file("app/ui.dart", "Text('Hello World')\n")?;
    test.write_file("app/generated/skipped.dart", "Text('Hello World')\n")?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Found 1 Dart files"));
    assert!(out.contains("Found 1 potential string replacements"));

    Ok(())
}

#[test]
fn test_scan_missing_catalog_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/main.dart", "Text('Hello')\n")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(err.contains("Error:"));

    Ok(())
}

#[test]
fn test_scan_missing_source_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("assets/translations/en.json", r#"{"k": "v"}"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_scan_no_candidates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("assets/translations/en.json", r#"{"greet": "Hello"}"#)?;
    test.write_file("lib/main.dart", "void main() {}\n")?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Found 0 potential string replacements"));

    Ok(())
}

#[test]
fn test_help_without_command() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Usage"));

    Ok(())
}

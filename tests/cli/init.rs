use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());

    let config = test.read_file(".lokeyrc.json")?;
    assert!(config.contains("\"catalogPath\""));
    assert!(config.contains("\"sourceRoot\""));
    assert!(config.contains("\"checkedAttributes\""));

    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lokeyrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(err.contains("already exists"));

    Ok(())
}

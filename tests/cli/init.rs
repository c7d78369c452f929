use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .podistrc.json\n");

    let content = test.read_file(".podistrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["name"], "install-brother-printer");
    assert_eq!(parsed["poDir"], "po");
    assert_eq!(parsed["tools"]["msgfmt"], "msgfmt");
    assert!(
        content.contains("  \"name\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".podistrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "✘ .podistrc.json already exists\n");
    assert_eq!(test.read_file(".podistrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("install-brother-printer", "#!/usr/bin/python\n")?;
    test.write_file("LICENSE.driver", "license\n")?;

    let output = test.build_command().output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(
        test.root()
            .join("build/scripts/install-brother-printer")
            .is_file()
    );

    Ok(())
}

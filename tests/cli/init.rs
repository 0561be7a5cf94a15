use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} Created .kartorc.json\n");
    assert!(test.root().join(".kartorc.json").exists());

    let content = test.read_file(".kartorc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["defaultLocale"], "fr");
    assert_eq!(parsed["primaryLocale"], "fr");
    assert_eq!(parsed["strictShape"], true);
    assert!(parsed.get("messagesRoot").is_none());
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".kartorc.json", "{}")?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains(".kartorc.json already exists"));
    assert_eq!(test.read_file(".kartorc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    test.write_file("src/app.tsx", "export const title = t(\"hero.badge\")\n")?;

    let (code, stdout, stderr) = run(test.check_command())?;
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("no issues found"));
    Ok(())
}

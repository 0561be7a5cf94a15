use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_get_defaults_to_french() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.args(["get", "footer.copyright"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "2026 KartoMap. Tous droits reserves.\n");
    Ok(())
}

#[test]
fn test_get_in_english() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.args(["get", "footer.copyright", "--locale", "en"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "2026 KartoMap. All rights reserved.\n");
    Ok(())
}

#[test]
fn test_get_missing_path_prints_path() -> Result<()> {
    let test = CliTest::new()?;

    for args in [
        ["get", "does.not.exist"],
        // a list read as a scalar falls back the same way
        ["get", "pricing.discovery.features"],
    ] {
        let (code, stdout, _) = run({
            let mut cmd = test.command();
            cmd.args(args);
            cmd
        })?;
        assert_eq!(code, 0);
        assert_eq!(stdout, format!("{}\n", args[1]));
    }
    Ok(())
}

#[test]
fn test_get_default_locale_from_config() -> Result<()> {
    let test = CliTest::with_file(".kartorc.json", r#"{ "defaultLocale": "en" }"#)?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.args(["get", "nav.login"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "Sign in\n");
    Ok(())
}

#[test]
fn test_get_unsupported_locale() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.command();
        cmd.args(["get", "nav.login", "--locale", "de"]);
        cmd
    })?;

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("'de'"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_get_refuses_drifted_tables() -> Result<()> {
    let test = CliTest::new()?;
    test.with_messages(
        r#"{"nav": {"login": "Se connecter", "cta": "Essayer"}}"#,
        r#"{"nav": {"login": "Sign in"}}"#,
    )?;

    let (code, _, stderr) = run({
        let mut cmd = test.command();
        cmd.args(["get", "nav.login"]);
        cmd
    })?;

    assert_eq!(code, 2);
    assert!(stderr.contains("karto check"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_get_drifted_tables_without_strict_shape() -> Result<()> {
    let test = CliTest::new()?;
    test.with_messages(
        r#"{"nav": {"login": "Se connecter", "cta": "Essayer"}}"#,
        r#"{"nav": {"login": "Sign in"}}"#,
    )?;
    test.write_file(
        ".kartorc.json",
        r#"{ "messagesRoot": "./messages", "strictShape": false }"#,
    )?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.args(["get", "nav.cta", "--locale", "en"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "nav.cta\n");
    Ok(())
}

#[test]
fn test_get_finds_config_above_working_dir() -> Result<()> {
    let test = CliTest::with_file(".kartorc.json", r#"{ "defaultLocale": "en" }"#)?;
    test.write_file("app/components/.keep", "")?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.command();
        cmd.current_dir(test.root().join("app/components"));
        cmd.args(["get", "nav.login"]);
        cmd
    })?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout, "Sign in\n");
    Ok(())
}

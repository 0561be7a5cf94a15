use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const FR_DRIFTED: &str = r#"{
  "nav": {
    "login": "Se connecter",
    "cta": "Essayer"
  }
}
"#;

const EN_DRIFTED: &str = r#"{
  "nav": {
    "login": "Sign in",
    "blog": "Blog"
  }
}
"#;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "components/navbar.tsx",
        r##"
export function Navbar() {
  const { t, ta } = useI18n()
  return <a href="#tarifs">{t("nav.pricing")}</a>
}
"##,
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "\u{2713} Checked 1 source file, 2 locale files - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_missing_key() -> Result<()> {
    let test = CliTest::with_file(
        "components/navbar.tsx",
        "<a href=\"/blog\">{t(\"nav.blog\")}</a>\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert_eq!(
        stdout,
        "error: \"nav.blog\"  missing-key\n\
         \x20 --> ./components/navbar.tsx:1:18\n\
         \x20 |\n\
         1 | <a href=\"/blog\">{t(\"nav.blog\")}</a>\n\
         \x20 |                  ^\n\
         \x20 = note: missing in: fr, en\n\
         \n\
         \u{2718} 1 problem (1 error, 0 warnings)\n"
    );
    Ok(())
}

#[test]
fn test_accessor_mismatch() -> Result<()> {
    let test = CliTest::with_file(
        "src/pricing.tsx",
        "const features = t(\"pricing.pro.features\")\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"pricing.pro.features\"  accessor-mismatch\n"));
    assert!(stdout.contains("= note: t() expects string, but 'fr' has array\n"));
    assert!(stdout.contains("= hint: use ta(\"pricing.pro.features\")\n"));
    Ok(())
}

#[test]
fn test_table_drift() -> Result<()> {
    let test = CliTest::new()?;
    test.with_messages(FR_DRIFTED, EN_DRIFTED)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert_eq!(
        stdout,
        "warning: \"nav.blog\"  orphan-key\n\
         \x20 --> ./messages/en.json:4:1\n\
         \x20 = note: in en (\"Blog\")\n\
         \n\
         error: \"nav.cta\"  replica-lag\n\
         \x20 --> ./messages/fr.json:4:1\n\
         \x20 = note: (\"Essayer\") missing in: en\n\
         \x20 = used: (no usages found)\n\
         \n\
         \u{2718} 2 problems (1 error, 1 warning)\n"
    );
    Ok(())
}

#[test]
fn test_replica_lag_shows_usages() -> Result<()> {
    let test = CliTest::with_file("app/page.tsx", "<Button>{t(\"nav.cta\")}</Button>\n")?;
    test.with_messages(FR_DRIFTED, EN_DRIFTED)?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.arg("replica-lag");
        cmd
    })?;

    assert_eq!(code, 1);
    assert!(stdout.contains("= used: ./app/page.tsx:1:10\n"));
    assert!(!stdout.contains("orphan-key"));
    Ok(())
}

#[test]
fn test_warnings_only_exit_zero() -> Result<()> {
    let test = CliTest::new()?;
    test.with_messages(FR_DRIFTED, EN_DRIFTED)?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.arg("orphan-key");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stdout.ends_with("\u{2718} 1 problem (0 errors, 1 warning)\n"));
    Ok(())
}

#[test]
fn test_type_mismatch() -> Result<()> {
    let test = CliTest::new()?;
    test.with_messages(
        r#"{"pricing": {"features": ["Export PNG"]}}"#,
        r#"{"pricing": {"features": "PNG export"}}"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"pricing.features\"  type-mismatch\n"));
    assert!(stdout.contains("= note: expected array, got: en (string)\n"));
    Ok(())
}

#[test]
fn test_unparsable_message_file() -> Result<()> {
    let test = CliTest::new()?;
    test.with_messages(r#"{"nav": {"login": "Se connecter"}}"#, "{ broken")?;

    let (code, stdout, stderr) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> ./messages/en.json\n"));
    // the unreadable locale is not reported as lagging
    assert!(!stdout.contains("replica-lag"));
    assert!(stderr.contains("1 file(s) could not be loaded"));
    Ok(())
}

#[test]
fn test_missing_messages_dir() -> Result<()> {
    let test = CliTest::with_file(".kartorc.json", r#"{ "messagesRoot": "./locales" }"#)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("site/components/hero.tsx", "{t(\"hero.missing\")}\n")?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.args(["--source-root", "site"]);
        cmd
    })?;

    assert_eq!(code, 1);
    assert!(stdout.contains("--> site/components/hero.tsx:1:2\n"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.check_command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stdout.contains("missing-key"));
    assert!(stdout.contains("--messages-root"));
    Ok(())
}

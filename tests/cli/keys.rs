use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_keys_with_prefix() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.args(["keys", "pricing.discovery"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "pricing.discovery.name      string\n\
         pricing.discovery.price     string\n\
         pricing.discovery.desc      string\n\
         pricing.discovery.features  array\n\
         pricing.discovery.cta       string\n"
    );
    Ok(())
}

#[test]
fn test_keys_lists_every_leaf() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("keys");
        cmd
    })?;

    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first().map(|l| l.split_whitespace().next()), Some(Some("nav.features")));
    assert_eq!(lines.last().map(|l| l.split_whitespace().next()), Some(Some("map3d.badge5")));
    assert!(lines.iter().all(|l| l.ends_with("string") || l.ends_with("array")));
    Ok(())
}

#[test]
fn test_keys_unknown_prefix() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.args(["keys", "blog"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "");
    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_render_cta() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.args(["render", "cta", "--locale", "en"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Ready to map your data?\n\
         Join the hundreds of organizations already using KartoMap to visualize and share their geographic data.\n\
         > Get started for free  > Request a demo\n"
    );
    Ok(())
}

#[test]
fn test_render_every_section() -> Result<()> {
    let test = CliTest::new()?;

    for section in [
        "nav",
        "hero",
        "stats",
        "features",
        "how-it-works",
        "ecosystem",
        "api",
        "pricing",
        "cta",
        "footer",
        "map3d",
    ] {
        let (code, stdout, stderr) = run({
            let mut cmd = test.command();
            cmd.args(["render", section]);
            cmd
        })?;
        assert_eq!(code, 0, "{section}: {stderr}");
        assert!(!stdout.trim().is_empty(), "{section} rendered nothing");
    }
    Ok(())
}

#[test]
fn test_render_unknown_section() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, _) = run({
        let mut cmd = test.command();
        cmd.args(["render", "blog"]);
        cmd
    })?;

    assert_eq!(code, 2);
    Ok(())
}

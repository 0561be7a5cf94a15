use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_list_discovery_features() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.args(["list", "pricing.discovery.features", "--locale", "en"]);
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "1 interactive map\n3 data layers\n100 data points\nStandard basemaps\nPNG export\n"
    );
    Ok(())
}

#[test]
fn test_list_missing_path_prints_nothing() -> Result<()> {
    let test = CliTest::new()?;

    for path in ["does.not.exist", "pricing.discovery.name"] {
        let (code, stdout, _) = run({
            let mut cmd = test.command();
            cmd.args(["list", path]);
            cmd
        })?;
        assert_eq!(code, 0);
        assert_eq!(stdout, "");
    }
    Ok(())
}

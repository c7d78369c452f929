use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_info_prints_metadata() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".podistrc.json",
        r#"{
  "name": "hello",
  "version": "1.2",
  "description": "Says hello",
  "longDescription": "",
  "author": "Jo",
  "authorEmail": "jo@example.org",
  "license": "GPLv2",
  "platforms": ["Linux"]
}"#,
    )?;

    let output = test.command().arg("info").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "name:        hello\n\
         version:     1.2\n\
         description: Says hello\n\
         author:      Jo <jo@example.org>\n\
         license:     GPLv2\n\
         platforms:   Linux\n"
    );

    Ok(())
}

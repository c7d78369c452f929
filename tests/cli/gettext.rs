//! Runs against the real gettext tools when they are installed.

use std::{fs, process::Command};

use anyhow::Result;

use crate::{CliTest, stderr};

fn gettext_available() -> bool {
    ["xgettext", "msgmerge", "msgfmt"].iter().all(|tool| {
        Command::new(tool)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

const SCRIPT: &str = r#"#!/usr/bin/python
# -*- coding: utf-8 -*-

print(_("Install driver"))
print(_("Select printer"))
"#;

const FR_PO: &str = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

msgid "Install driver"
msgstr "Installer le pilote"
"#;

#[test]
fn test_real_gettext_round_trip() -> Result<()> {
    if !gettext_available() {
        eprintln!("gettext tools not installed, skipping");
        return Ok(());
    }

    let test = CliTest::new()?;
    test.write_file("hello", SCRIPT)?;
    test.write_file("po/fr.po", FR_PO)?;
    test.write_file(
        ".podistrc.json",
        r#"{ "name": "hello", "scripts": ["hello"], "dataFiles": [] }"#,
    )?;

    let output = test.build_po_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let template = test.read_file("po/hello.pot")?;
    assert!(template.contains("msgid \"Select printer\""));
    let fr = test.read_file("po/fr.po")?;
    assert!(fr.contains("msgstr \"Installer le pilote\""));
    assert!(fr.contains("msgid \"Select printer\""));

    let output = test.install_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let artifact = fs::read(test.artifact("fr"))?;
    // GNU .mo magic number, little or big endian.
    assert!(
        artifact.starts_with(&[0xde, 0x12, 0x04, 0x95])
            || artifact.starts_with(&[0x95, 0x04, 0x12, 0xde])
    );
    assert!(!test.root().join("po/fr.mo").exists());

    Ok(())
}

use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_install_two_languages() -> Result<()> {
    let test = CliTest::with_catalogs(&[("fr", "fr catalog\n"), ("tr", "tr catalog\n")])?;

    let output = test.install_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(fs::read_to_string(test.artifact("fr"))?, "fr catalog\n");
    assert_eq!(fs::read_to_string(test.artifact("tr"))?, "tr catalog\n");

    let locale_root = test.dest_root().join("usr/share/locale");
    let mut langs: Vec<String> = fs::read_dir(&locale_root)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    langs.sort();
    assert_eq!(langs, vec!["fr", "tr"]);

    let out = stdout(&output);
    assert!(out.contains("Installing 'fr' translations...\n"));
    assert!(out.contains("Installing 'tr' translations...\n"));
    assert!(out.contains(&format!(
        "✓ Installed 1 script, 1 data file and 2 translations under {}\n",
        test.dest_root().display()
    )));

    Ok(())
}

#[test]
fn test_install_cleans_compiled_files() -> Result<()> {
    let test = CliTest::with_catalogs(&[("fr", "fr\n"), ("tr", "tr\n")])?;

    let output = test.install_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(!test.root().join("po/fr.mo").exists());
    assert!(!test.root().join("po/tr.mo").exists());
    assert_eq!(test.read_file("po/fr.po")?, "fr\n");

    Ok(())
}

#[test]
fn test_install_creates_locale_directories() -> Result<()> {
    let test = CliTest::with_catalogs(&[("tr", "tr\n")])?;
    assert!(!test.dest_root().exists());

    let output = test.install_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let dir = test.dest_root().join("usr/share/locale/tr/LC_MESSAGES");
    assert!(dir.is_dir());
    let names: Vec<String> = fs::read_dir(&dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    assert_eq!(names, vec!["hello.mo"]);

    Ok(())
}

#[test]
fn test_install_scripts_and_data_files_under_root() -> Result<()> {
    let test = CliTest::with_catalogs(&[])?;

    let output = test.install_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let root = test.dest_root();
    assert_eq!(
        fs::read_to_string(root.join("usr/bin/hello"))?,
        test.read_file("hello")?
    );
    assert_eq!(
        fs::read_to_string(root.join("usr/share/hello/LICENSE.driver"))?,
        "license\n"
    );

    Ok(())
}

#[test]
fn test_install_root_from_env() -> Result<()> {
    let test = CliTest::with_catalogs(&[("fr", "fr\n")])?;

    let output = test
        .command()
        .arg("install")
        .env("PODIST_ROOT", test.dest_root())
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.artifact("fr").is_file());

    Ok(())
}

#[test]
fn test_install_compile_failure_keeps_earlier_languages() -> Result<()> {
    let test = CliTest::with_catalogs(&[("cs", "cs\n"), ("de", "MALFORMED\n"), ("fr", "fr\n")])?;

    let output = test.install_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let err = stderr(&output);
    assert!(err.contains("po/de.po: syntax error"), "stderr: {}", err);
    assert!(err.contains("Error: Failed to compile po/de.po"));

    assert!(test.artifact("cs").is_file());
    assert!(!test.artifact("de").exists());
    assert!(!test.artifact("fr").exists());
    assert!(!stdout(&output).contains("Installing 'fr'"));

    Ok(())
}

#[test]
fn test_install_custom_locale_dir() -> Result<()> {
    let test = CliTest::with_catalogs(&[("fr", "fr\n")])?;
    test.write_config(r#""localeDir": "/opt/hello/locale","#)?;

    let output = test.install_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        test.dest_root()
            .join("opt/hello/locale/fr/LC_MESSAGES/hello.mo")
            .is_file()
    );

    Ok(())
}

#[test]
fn test_install_rejects_locale_dir_leaving_root() -> Result<()> {
    let test = CliTest::with_catalogs(&[("tr", "tr\n")])?;
    test.write_config(r#""localeDir": "../escaped/locale","#)?;

    let output = test.install_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'localeDir' must not contain '..'"));
    assert!(!test.dest_root().exists());
    assert!(!test.dest_root().with_file_name("escaped").exists());

    Ok(())
}

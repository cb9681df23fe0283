use anyhow::Result;

use crate::{CliTest, run};

const ORDER_MANIFEST: &str = r#"{
  "types": [{
    "name": "Order",
    "constructors": [{ "parameters": [] }],
    "properties": [{ "name": "Id", "type": "int" }]
  }]
}"#;

const POINT_MANIFEST: &str = r#"{
  "types": [{
    "name": "Point",
    "constructors": [
      { "parameters": [{ "name": "x", "type": "int" }, { "name": "y", "type": "int" }] },
      { "parameters": [{ "name": "a", "type": "int" }, { "name": "b", "type": "int" }] }
    ]
  }]
}"#;

#[test]
fn test_clean_manifest() -> Result<()> {
    let test = CliTest::with_file("models/orders.model.json", ORDER_MANIFEST)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 manifest file, 2 elements - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_ambiguous_designated_constructor() -> Result<()> {
    let test = CliTest::with_file(
        "models/orders.model.json",
        r#"{
          "types": [{
            "name": "Order",
            "constructors": [
              { "markers": [{ "bindingConstructor": {} }], "parameters": [] },
              {
                "markers": [{ "bindingConstructor": {} }],
                "parameters": [{ "name": "id", "type": "int" }]
              }
            ]
          }]
        }"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: \"Order\"  ambiguous-constructor")
    );
    assert!(output.stdout.contains("--> models/orders.model.json"));
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_unresolved_constructor_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("models/point.model.json", POINT_MANIFEST)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("warning: \"Point\"  unresolved-constructor")
    );
    assert!(output.stdout.contains("take 2 parameters"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_unresolved_constructor_warning_can_be_disabled() -> Result<()> {
    let test = CliTest::with_file("models/point.model.json", POINT_MANIFEST)?;
    test.write_file(
        ".bindmetarc.json",
        r#"{ "warnOnUnresolvedConstructor": false }"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_duplicate_type() -> Result<()> {
    let test = CliTest::with_file("models/a.model.json", ORDER_MANIFEST)?;
    test.write_file("models/b.model.json", ORDER_MANIFEST)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"Order\"  duplicate-type"));
    assert!(output.stdout.contains("--> models/b.model.json"));
    assert!(
        output
            .stdout
            .contains("first declared in models/a.model.json")
    );

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("models/orders.model.json", ORDER_MANIFEST)?;
    test.write_file("models/broken.model.json", "{ \"types\": [")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> models/broken.model.json"));

    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("models/point.model.json", POINT_MANIFEST)?;

    let mut cmd = test.check_command();
    cmd.arg("duplicate-type");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file("models/orders.model.json", ORDER_MANIFEST)?;
    test.write_file("generated/point.model.json", POINT_MANIFEST)?;
    test.write_file(".bindmetarc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 manifest file"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".bindmetarc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_missing_source_root() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.check_command();
    cmd.args(["--source-root", "nope"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Source root is not a directory"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    for command in ["check", "resolve", "init"] {
        assert!(
            output.stdout.contains(command),
            "help should list {}",
            command
        );
    }

    Ok(())
}

use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

const SHOP_MANIFEST: &str = r#"{
  "types": [{
    "name": "Order",
    "markers": [
      { "bindRequired": {} },
      { "bind": { "include": ["Id", "Note"] } },
      { "bindExclude": { "exclude": ["Note"] } }
    ],
    "constructors": [{
      "parameters": [
        { "name": "id", "type": "int" },
        { "name": "customer", "type": "Customer" }
      ]
    }],
    "properties": [
      { "name": "Id", "type": "int", "markers": [{ "fromQuery": { "name": "id" } }] },
      { "name": "Note", "type": "string", "markers": [{ "bindNever": {} }] },
      { "name": "Secret", "type": "string" }
    ]
  }, {
    "name": "Customer",
    "markers": [{ "fromBody": {} }]
  }]
}"#;

fn shop() -> Result<CliTest> {
    CliTest::with_file("models/shop.model.json", SHOP_MANIFEST)
}

#[test]
fn test_resolve_type_text() -> Result<()> {
    let test = shop()?;

    let output = run(test.resolve_command("Order"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("type Order\n"));
    assert!(output.stdout.contains("  required     no\n"));
    assert!(
        output
            .stdout
            .contains("  filter       bind(include: [Id, Note]) & bindExclude([Note])\n")
    );
    assert!(
        output
            .stdout
            .contains("  constructor  Order(int id, Customer customer)\n")
    );
    assert!(output.stdout.contains("    Id      int     included\n"));
    assert!(output.stdout.contains("    Note    string  excluded\n"));
    assert!(output.stdout.contains("    Secret  string  excluded\n"));

    Ok(())
}

#[test]
fn test_resolve_property_json() -> Result<()> {
    let test = shop()?;

    let mut cmd = test.resolve_command("Order");
    cmd.args(["--property", "Id", "--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(output.stdout, @r#"
    {
      "key": "Order.Id",
      "kind": "property",
      "modelType": "int",
      "binderModelName": "id",
      "binderType": null,
      "bindingSource": "query",
      "propertyFilter": [],
      "isBindingAllowed": true,
      "isBindingRequired": true,
      "boundConstructor": null
    }
    "#);

    Ok(())
}

#[test]
fn test_property_marker_overrides_container_behavior() -> Result<()> {
    let test = shop()?;

    let mut cmd = test.resolve_command("Order");
    cmd.args(["--property", "Note", "--format", "json"]);
    let output = run(cmd)?;

    let json: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json["isBindingAllowed"], false);
    assert_eq!(json["isBindingRequired"], false);

    Ok(())
}

#[test]
fn test_resolve_parameter_uses_declared_type_markers() -> Result<()> {
    let test = shop()?;

    let mut cmd = test.resolve_command("Order");
    cmd.args(["--parameter", "customer", "--format", "json"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let json: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json["key"], "Customer customer");
    assert_eq!(json["bindingSource"], "body");
    // Parameters never inherit the container's behavior.
    assert_eq!(json["isBindingRequired"], false);

    Ok(())
}

#[test]
fn test_resolve_unknown_type() -> Result<()> {
    let test = shop()?;

    let output = run(test.resolve_command("Invoice"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Type 'Invoice' is not declared"));

    Ok(())
}

#[test]
fn test_resolve_unknown_property() -> Result<()> {
    let test = shop()?;

    let mut cmd = test.resolve_command("Order");
    cmd.args(["--property", "Total"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .contains("Type 'Order' has no property 'Total'")
    );

    Ok(())
}

const AMBIGUOUS_MANIFEST: &str = r#"{
  "types": [{
    "name": "Order",
    "constructors": [
      {
        "markers": [{ "bindingConstructor": {} }],
        "parameters": [{ "name": "id", "type": "int" }]
      },
      {
        "markers": [{ "bindingConstructor": {} }],
        "parameters": [{ "name": "id", "type": "string" }]
      }
    ]
  }]
}"#;

#[test]
fn test_resolve_ambiguous_constructor() -> Result<()> {
    let test = CliTest::with_file("models/orders.model.json", AMBIGUOUS_MANIFEST)?;

    let output = run(test.resolve_command("Order"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("ambiguous-constructor"));
    assert!(
        output
            .stdout
            .contains("2 constructors marked as the binding constructor")
    );

    Ok(())
}

#[test]
fn test_resolve_parameter_of_ambiguous_type_reports_issue() -> Result<()> {
    let test = CliTest::with_file("models/orders.model.json", AMBIGUOUS_MANIFEST)?;

    let mut cmd = test.resolve_command("Order");
    cmd.args(["--parameter", "id"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: \"Order\"  ambiguous-constructor")
    );
    assert!(output.stdout.contains("--> models/orders.model.json"));
    assert!(output.stderr.is_empty());

    Ok(())
}

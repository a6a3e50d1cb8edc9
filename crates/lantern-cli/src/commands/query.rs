use anyhow::Result;
use lantern_core::Item;
use serde::Serialize;

use super::tree_prefix;
use crate::host::Host;

#[derive(Serialize)]
struct QueryOutput<'a> {
    plugin: &'static str,
    items: &'a [Item],
}

pub fn execute(host: &Host, raw: &str, json: bool) -> Result<()> {
    let (plugin, items) = host.query(raw)?;

    if json {
        let output = QueryOutput {
            plugin: plugin.id(),
            items: &items,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("{}: no results", plugin.name());
        return Ok(());
    }

    println!("\n{} ({}):\n", plugin.name(), items.len());
    for (index, item) in items.iter().enumerate() {
        println!("{} {}  [{}]", tree_prefix(index, items.len()), item.text, item.id);
        if !item.subtext.is_empty() {
            println!("      {}", item.subtext);
        }
    }
    println!();

    Ok(())
}

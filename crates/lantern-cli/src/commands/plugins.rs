use anyhow::Result;
use serde::Serialize;

use super::tree_prefix;
use crate::host::Host;

#[derive(Serialize)]
struct PluginOutput {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    synopsis: &'static str,
    trigger: &'static str,
}

pub fn execute(host: &Host, json: bool) -> Result<()> {
    let plugins: Vec<PluginOutput> = host
        .plugins()
        .map(|plugin| PluginOutput {
            id: plugin.id(),
            name: plugin.name(),
            description: plugin.description(),
            synopsis: plugin.synopsis(),
            trigger: plugin.default_trigger(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&plugins)?);
        return Ok(());
    }

    println!("\nPlugins:\n");
    for (index, plugin) in plugins.iter().enumerate() {
        println!(
            "{} {:<22} {}{}",
            tree_prefix(index, plugins.len()),
            plugin.name,
            plugin.trigger,
            plugin.synopsis
        );
        println!("      {}", plugin.description);
    }
    println!();

    Ok(())
}

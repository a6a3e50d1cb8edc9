use anyhow::Result;

use crate::host::Host;

pub fn execute(host: &Host, raw: &str, item_id: &str, action_id: Option<&str>) -> Result<()> {
    let item = host.activate(raw, item_id, action_id)?;
    println!("✓ {}", item.text);
    Ok(())
}

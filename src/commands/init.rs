//! `pomade init` - write a fresh seed database

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::domain::ports::DocumentStore;
use crate::infrastructure::{seed, JsonDocumentStore};
use crate::presentation::factory::resolve_store_path;

pub fn cmd_init(config: &Config, path: Option<PathBuf>, force: bool, json: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| resolve_store_path(config));

    if path.exists() && !force {
        anyhow::bail!(
            "data file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let document = seed::seed_document();
    let store = JsonDocumentStore::with_path(path.clone());
    store.write(&document)?;

    if json {
        let output = serde_json::json!({
            "event": "data",
            "command": "init",
            "path": path.display().to_string(),
            "salons": document.salons.len(),
            "services": document.services.len(),
            "staff": document.staff.len(),
            "schedules": document.schedules.len(),
            "users": document.users.len(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("Seeded {}", path.display());
    println!(
        "  {} salons, {} services, {} staff, {} schedule slots",
        document.salons.len(),
        document.services.len(),
        document.staff.len(),
        document.schedules.len()
    );
    println!("  demo account: demo@salon.com / demo123");
    Ok(())
}

use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(content: &Path) -> Result<(), String> {
    let game = super::load_content(content)?;
    let catalog = game.catalog().map_err(|e| e.to_string())?;

    if catalog.is_empty() {
        println!("  No items found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Flags", "Audio", "Image", "Caption"]);

    for item in catalog.iter() {
        let mut flags = Vec::new();
        if item.grabbable {
            flags.push("grabbable");
        }
        if item.collectible {
            flags.push("collectible");
        }
        let flags = if flags.is_empty() {
            "—".to_string()
        } else {
            flags.join(", ")
        };

        let audio = item
            .audio
            .as_ref()
            .map(|clip| format!("{} ({:.1}s)", clip.name, clip.duration))
            .unwrap_or_else(|| "—".to_string());
        let image = item.image.clone().unwrap_or_else(|| "—".to_string());

        table.add_row(vec![
            item.id.to_string(),
            flags,
            audio,
            image,
            super::truncate(&item.text, 60),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} items", catalog.len());

    Ok(())
}

use std::path::Path;

pub fn run(content: &Path) -> Result<(), String> {
    let game = super::load_content(content)?;
    let summary = game.validate().map_err(|e| e.to_string())?;

    println!("  All checks passed for '{}'.", content.display());
    println!(
        "  {} items, {} levels, {} interactables",
        summary.items, summary.levels, summary.interactables
    );

    Ok(())
}

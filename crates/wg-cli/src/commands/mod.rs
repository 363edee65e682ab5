pub mod check;
pub mod items;
pub mod play;
pub mod progress;

use std::path::Path;

use wg_scene::GameContent;

/// Load a content file, turning errors into CLI messages.
fn load_content(path: &Path) -> Result<GameContent, String> {
    GameContent::load(path).map_err(|e| format!("cannot load {}: {e}", path.display()))
}

/// Shorten `text` to at most `max` characters for table cells.
fn truncate(text: &str, max: usize) -> String {
    if text.is_empty() {
        return "—".to_string();
    }
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

//! Main menu.

use std::fmt;

use wg_core::AudioClip;

use crate::level::LevelId;
use crate::progress::{KeyValueStore, LevelProgress};

/// A choice on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Forget progress and start from the first level.
    NewGame,
    /// Resume from the recorded level.
    Continue,
    /// Leave the game.
    Exit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewGame => write!(f, "New game"),
            Self::Continue => write!(f, "Continue"),
            Self::Exit => write!(f, "Exit"),
        }
    }
}

/// Main menu state, captured when the menu is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct MainMenu {
    continue_level: Option<LevelId>,
    click_sound: Option<AudioClip>,
}

impl MainMenu {
    /// Build the menu from the recorded progress.
    pub fn load<S: KeyValueStore>(progress: &LevelProgress<S>, click_sound: Option<AudioClip>) -> Self {
        Self {
            continue_level: progress.current_level(),
            click_sound,
        }
    }

    /// Level that `Continue` resumes, if progress was recorded.
    pub fn continue_level(&self) -> Option<LevelId> {
        self.continue_level
    }

    /// Sound played when a game starts.
    pub fn click_sound(&self) -> Option<&AudioClip> {
        self.click_sound.as_ref()
    }

    /// The actions to offer. `Continue` is only offered with recorded progress.
    pub fn actions(&self) -> Vec<MenuAction> {
        let mut actions = Vec::with_capacity(3);
        if self.continue_level.is_some() {
            actions.push(MenuAction::Continue);
        }
        actions.push(MenuAction::NewGame);
        actions.push(MenuAction::Exit);
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryStore;

    #[test]
    fn fresh_menu_offers_no_continue() {
        let progress = LevelProgress::new(MemoryStore::new());
        let menu = MainMenu::load(&progress, None);
        assert_eq!(menu.continue_level(), None);
        assert_eq!(menu.actions(), vec![MenuAction::NewGame, MenuAction::Exit]);
    }

    #[test]
    fn recorded_progress_enables_continue() {
        let mut progress = LevelProgress::new(MemoryStore::new());
        progress.record(LevelId(2)).unwrap();
        let menu = MainMenu::load(&progress, Some(AudioClip::new("click", 0.1)));
        assert_eq!(menu.continue_level(), Some(LevelId(2)));
        assert_eq!(menu.actions()[0], MenuAction::Continue);
        assert_eq!(menu.click_sound().map(|c| c.name.as_str()), Some("click"));
    }
}

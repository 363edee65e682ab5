//! The game orchestrator.
//!
//! `Game` owns the loaded content, the current level's interactables, the
//! interaction controller driving the HUD, the zone triggers and the
//! progress store. Hosts feed it frames and zone entries.

use tracing::{debug, info};
use wg_core::{InteractableRegistry, ItemCatalog};
use wg_interaction::{AudioPlayer, Frame, InteractionController, Targeting};

use crate::error::SceneResult;
use crate::hud::Hud;
use crate::level::{FIRST_LEVEL, GameContent, LevelId};
use crate::menu::{MainMenu, MenuAction};
use crate::progress::{KeyValueStore, LevelProgress};
use crate::triggers::{Triggers, ZoneOutcome};

const LEVEL_TAG_PREFIX: &str = "level:";

/// Parse a `level:<n>` hook tag.
pub fn parse_level_tag(tag: &str) -> Option<LevelId> {
    tag.strip_prefix(LEVEL_TAG_PREFIX)?
        .trim()
        .parse()
        .ok()
        .map(LevelId)
}

/// A running game.
pub struct Game<S: KeyValueStore, A: AudioPlayer> {
    content: GameContent,
    catalog: ItemCatalog,
    controller: InteractionController<Hud, A>,
    registry: InteractableRegistry,
    triggers: Triggers,
    progress: LevelProgress<S>,
    menu: MainMenu,
    current_level: Option<LevelId>,
}

impl<S: KeyValueStore, A: AudioPlayer> std::fmt::Debug for Game<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("current_level", &self.current_level)
            .field("interactables", &self.registry.len())
            .field("controller", &self.controller)
            .finish()
    }
}

impl<S: KeyValueStore, A: AudioPlayer> Game<S, A> {
    /// Set up a game at the main menu. No level is loaded yet.
    pub fn new(content: GameContent, store: S, audio: A) -> SceneResult<Self> {
        let catalog = content.catalog()?;
        let hud = Hud::new(content.inventory_slots);
        let controller = InteractionController::new(content.config.clone(), hud, audio);
        let progress = LevelProgress::new(store);
        let menu = MainMenu::load(&progress, content.click_sound.clone());

        Ok(Self {
            content,
            catalog,
            controller,
            registry: InteractableRegistry::new(),
            triggers: Triggers::default(),
            progress,
            menu,
            current_level: None,
        })
    }

    /// Replace the current level with `id` and record it as progress.
    ///
    /// Any interaction in progress is abandoned. The inventory carries over.
    /// On error the current level is left untouched.
    pub fn load_level(&mut self, id: LevelId) -> SceneResult<()> {
        let level = self.content.level(id)?;
        let registry = level.build_registry(&self.catalog)?;
        self.progress.record(id)?;

        self.controller.abandon(&mut self.registry);
        self.registry = registry;
        self.triggers = Triggers::from_level(level);
        self.current_level = Some(id);

        info!(
            level = %id,
            name = %level.name,
            interactables = self.registry.len(),
            "level loaded"
        );
        Ok(())
    }

    /// Advance one frame. Returns the level that was loaded if an
    /// interaction raised a `level:<n>` hook tag.
    pub fn tick(&mut self, frame: &Frame, targeting: &mut dyn Targeting) -> SceneResult<Option<LevelId>> {
        self.controller
            .gateway_mut()
            .tick(frame.delta.max(0.0), &frame.input);
        self.controller.tick(frame, &mut self.registry, targeting)?;

        let requested = self
            .controller
            .raised_hooks()
            .iter()
            .find_map(|tag| parse_level_tag(tag));
        if let Some(level) = requested {
            self.load_level(level)?;
        }
        Ok(requested)
    }

    /// Report that the player entered `zone`.
    pub fn enter_zone(&mut self, zone: &str) -> SceneResult<ZoneOutcome> {
        let outcome = self.triggers.enter(zone);
        if let Some(level) = outcome.exit {
            debug!(zone, level = %level, "exit taken");
            self.load_level(level)?;
        }
        Ok(outcome)
    }

    /// Start over: forget progress, empty the inventory and load the first level.
    pub fn new_game(&mut self) -> SceneResult<()> {
        self.play_click();
        self.progress.clear()?;
        self.load_level(FIRST_LEVEL)?;
        self.controller.clear_inventory();
        Ok(())
    }

    /// Resume from the level recorded when the menu was shown, or the first
    /// level if there is none.
    pub fn continue_game(&mut self) -> SceneResult<()> {
        self.play_click();
        let level = self.menu.continue_level().unwrap_or(FIRST_LEVEL);
        self.load_level(level)
    }

    /// Apply a menu choice. Returns false when the player chose to exit.
    pub fn apply_menu(&mut self, action: MenuAction) -> SceneResult<bool> {
        match action {
            MenuAction::NewGame => self.new_game()?,
            MenuAction::Continue => self.continue_game()?,
            MenuAction::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn play_click(&mut self) {
        if let Some(clip) = self.menu.click_sound() {
            self.controller.audio_mut().play(clip);
        }
    }

    /// The level currently loaded.
    pub fn current_level(&self) -> Option<LevelId> {
        self.current_level
    }

    /// The interaction controller.
    pub fn controller(&self) -> &InteractionController<Hud, A> {
        &self.controller
    }

    /// The interaction controller, mutably.
    pub fn controller_mut(&mut self) -> &mut InteractionController<Hud, A> {
        &mut self.controller
    }

    /// The HUD.
    pub fn hud(&self) -> &Hud {
        self.controller.gateway()
    }

    /// Interactables of the current level.
    pub fn registry(&self) -> &InteractableRegistry {
        &self.registry
    }

    /// The item catalog.
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// The loaded content.
    pub fn content(&self) -> &GameContent {
        &self.content
    }

    /// The main menu.
    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    /// Recorded progress.
    pub fn progress(&self) -> &LevelProgress<S> {
        &self.progress
    }
}

//! Zone triggers: level exits and one-shot scares.

use tracing::debug;

use crate::level::{LevelDef, LevelId};

/// Loads another level when the player enters its zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ExitTrigger {
    /// Zone name.
    pub zone: String,
    /// Level to load.
    pub go_to: LevelId,
}

impl ExitTrigger {
    /// The level to load if `zone` is this trigger's zone.
    pub fn enter(&self, zone: &str) -> Option<LevelId> {
        (self.zone == zone).then_some(self.go_to)
    }
}

/// Fires its tags the first time the player enters its zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ScareTrigger {
    /// Zone name.
    pub zone: String,
    /// Hook tags fired on activation.
    pub on_scare: Vec<String>,
    activated: bool,
}

impl ScareTrigger {
    /// Create an armed trigger.
    pub fn new(zone: impl Into<String>, on_scare: Vec<String>) -> Self {
        Self {
            zone: zone.into(),
            on_scare,
            activated: false,
        }
    }

    /// Returns the tags to fire, or `None` if the zone differs or the
    /// trigger already fired.
    pub fn enter(&mut self, zone: &str) -> Option<&[String]> {
        if self.activated || self.zone != zone {
            return None;
        }
        self.activated = true;
        Some(&self.on_scare)
    }

    /// Returns true once the trigger has fired.
    pub fn is_activated(&self) -> bool {
        self.activated
    }
}

/// What entering a zone caused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneOutcome {
    /// Scare tags fired, in trigger order.
    pub scare_tags: Vec<String>,
    /// Level the player left for, if an exit matched.
    pub exit: Option<LevelId>,
}

impl ZoneOutcome {
    /// Returns true if nothing happened.
    pub fn is_empty(&self) -> bool {
        self.scare_tags.is_empty() && self.exit.is_none()
    }
}

/// All zone triggers of the current level.
#[derive(Debug, Clone, Default)]
pub struct Triggers {
    exits: Vec<ExitTrigger>,
    scares: Vec<ScareTrigger>,
}

impl Triggers {
    /// Arm the triggers authored for `level`.
    pub fn from_level(level: &LevelDef) -> Self {
        Self {
            exits: level
                .exits
                .iter()
                .map(|exit| ExitTrigger {
                    zone: exit.zone.clone(),
                    go_to: exit.go_to,
                })
                .collect(),
            scares: level
                .scares
                .iter()
                .map(|scare| ScareTrigger::new(scare.zone.clone(), scare.on_scare.clone()))
                .collect(),
        }
    }

    /// Report that the player entered `zone`.
    ///
    /// Scares fire before the first matching exit is taken.
    pub fn enter(&mut self, zone: &str) -> ZoneOutcome {
        let mut outcome = ZoneOutcome::default();
        for scare in &mut self.scares {
            if let Some(tags) = scare.enter(zone) {
                debug!(zone, tags = tags.len(), "scare triggered");
                outcome.scare_tags.extend_from_slice(tags);
            }
        }
        outcome.exit = self.exits.iter().find_map(|exit| exit.enter(zone));
        outcome
    }

    /// The exit triggers.
    pub fn exits(&self) -> &[ExitTrigger] {
        &self.exits
    }

    /// The scare triggers.
    pub fn scares(&self) -> &[ScareTrigger] {
        &self.scares
    }
}

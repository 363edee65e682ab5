use std::fmt;

use wg_core::{InteractableId, ItemId};

/// Where an authored hook tag was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    /// The interactable's on-interact tags.
    Interact,
    /// The on-interact tags of the previous-item rule at this index.
    Rule(usize),
    /// The interactable's on-collect tags.
    Collect,
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interact => write!(f, "interact"),
            Self::Rule(i) => write!(f, "rule #{i}"),
            Self::Collect => write!(f, "collect"),
        }
    }
}

/// What kind of interaction event occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEventKind {
    /// The player interacted with an interactable.
    Interacted {
        /// The interactable.
        interactable: InteractableId,
    },
    /// An authored hook tag fired.
    Hook {
        /// The interactable carrying the tag.
        interactable: InteractableId,
        /// Where the tag was attached.
        point: HookPoint,
        /// The tag itself.
        tag: String,
    },
    /// A previous-item rule consumed an inventory item.
    RuleApplied {
        /// The interactable whose item changed.
        interactable: InteractableId,
        /// The consumed inventory item.
        consumed: ItemId,
        /// The item the interactable switched to.
        replacement: ItemId,
    },
    /// A view session started.
    ViewStarted {
        /// The viewed interactable.
        interactable: InteractableId,
        /// The item being presented.
        item: ItemId,
    },
    /// The view can now be finished by the player.
    ReadyToFinish {
        /// The viewed interactable.
        interactable: InteractableId,
        /// The item being presented.
        item: ItemId,
    },
    /// The viewed item entered the inventory.
    Collected {
        /// The interactable the item came from.
        interactable: InteractableId,
        /// The collected item.
        item: ItemId,
        /// Inventory slot index.
        index: usize,
    },
    /// A view session ended.
    ViewFinished {
        /// The viewed interactable.
        interactable: InteractableId,
        /// The item that was presented.
        item: ItemId,
    },
    /// An interactable reached the end of a move transition.
    MoveCompleted {
        /// The moved interactable.
        interactable: InteractableId,
    },
}

impl InteractionEventKind {
    /// The interactable this event is about.
    pub fn interactable(&self) -> InteractableId {
        match self {
            Self::Interacted { interactable }
            | Self::Hook { interactable, .. }
            | Self::RuleApplied { interactable, .. }
            | Self::ViewStarted { interactable, .. }
            | Self::ReadyToFinish { interactable, .. }
            | Self::Collected { interactable, .. }
            | Self::ViewFinished { interactable, .. }
            | Self::MoveCompleted { interactable } => *interactable,
        }
    }

    /// Short label used in transcripts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Interacted { .. } => "interact",
            Self::Hook { .. } => "hook",
            Self::RuleApplied { .. } => "rule",
            Self::ViewStarted { .. } => "view",
            Self::ReadyToFinish { .. } => "ready",
            Self::Collected { .. } => "collect",
            Self::ViewFinished { .. } => "finish",
            Self::MoveCompleted { .. } => "moved",
        }
    }
}

/// A record of something that happened during a frame.
#[derive(Debug, Clone)]
pub struct InteractionEvent {
    /// The frame when this event occurred.
    pub frame: u64,
    /// The specific kind of event that occurred.
    pub kind: InteractionEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl InteractionEvent {
    /// Create a new event at the given frame.
    pub fn new(frame: u64, kind: InteractionEventKind, description: impl Into<String>) -> Self {
        Self {
            frame,
            kind,
            description: description.into(),
        }
    }
}

/// An append-only log of interaction events with optional capacity limit.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<InteractionEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: InteractionEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[InteractionEvent] {
        &self.events
    }

    /// Return all events that occurred at the given frame.
    pub fn events_at_frame(&self, frame: u64) -> Vec<&InteractionEvent> {
        self.events.iter().filter(|e| e.frame == frame).collect()
    }

    /// Return all events about the given interactable.
    pub fn events_for_interactable(&self, id: InteractableId) -> Vec<&InteractionEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.interactable() == id)
            .collect()
    }

    /// Hook tags fired at the given frame, in order.
    pub fn hooks_at_frame(&self, frame: u64) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.frame == frame)
            .filter_map(|e| match &e.kind {
                InteractionEventKind::Hook { tag, .. } => Some(tag.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interacted(id: InteractableId) -> InteractionEventKind {
        InteractionEventKind::Interacted { interactable: id }
    }

    #[test]
    fn event_log_push_and_query() {
        let mut log = EventLog::new(0);
        let id = InteractableId::new();
        log.push(InteractionEvent::new(1, interacted(id), "test"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.events_at_frame(1).len(), 1);
        assert_eq!(log.events_for_interactable(id).len(), 1);
        assert!(log.events_for_interactable(InteractableId::new()).is_empty());
    }

    #[test]
    fn event_log_max_events_trims() {
        let mut log = EventLog::new(2);
        let id = InteractableId::new();
        for frame in 0..5 {
            log.push(InteractionEvent::new(frame, interacted(id), "test"));
        }
        assert_eq!(log.len(), 2);
        // Oldest events were dropped, newest remain
        assert_eq!(log.events()[0].frame, 3);
        assert_eq!(log.events()[1].frame, 4);
    }

    #[test]
    fn hooks_at_frame_filters_tags() {
        let mut log = EventLog::new(0);
        let id = InteractableId::new();
        log.push(InteractionEvent::new(1, interacted(id), "interact"));
        log.push(InteractionEvent::new(
            1,
            InteractionEventKind::Hook {
                interactable: id,
                point: HookPoint::Interact,
                tag: "lights_off".into(),
            },
            "hook",
        ));
        log.push(InteractionEvent::new(
            2,
            InteractionEventKind::Hook {
                interactable: id,
                point: HookPoint::Collect,
                tag: "level:2".into(),
            },
            "hook",
        ));
        assert_eq!(log.hooks_at_frame(1), vec!["lights_off"]);
        assert_eq!(log.hooks_at_frame(2), vec!["level:2"]);
        assert!(log.hooks_at_frame(3).is_empty());
    }

    #[test]
    fn event_log_clear() {
        let mut log = EventLog::new(0);
        log.push(InteractionEvent::new(1, interacted(InteractableId::new()), "test"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn hook_point_display() {
        assert_eq!(HookPoint::Interact.to_string(), "interact");
        assert_eq!(HookPoint::Rule(2).to_string(), "rule #2");
        assert_eq!(HookPoint::Collect.to_string(), "collect");
    }
}

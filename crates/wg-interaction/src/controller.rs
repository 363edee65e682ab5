use std::sync::Arc;

use glam::Vec2;
use tracing::debug;
use wg_core::{InteractableId, InteractableRegistry, Inventory, Item};

use crate::audio::AudioPlayer;
use crate::clock::FrameClock;
use crate::config::InteractionConfig;
use crate::error::{InteractionError, InteractionResult};
use crate::event::{EventLog, HookPoint, InteractionEvent, InteractionEventKind};
use crate::gateway::PresentationGateway;
use crate::input::Frame;
use crate::observer::InteractionObserver;
use crate::session::Session;
use crate::targeting::Targeting;
use crate::timer::OneShotTimer;
use crate::transition::{MoveTransition, MoveTransitions};

/// Externally visible state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// Looking around; clicking a targeted interactable starts a view.
    Idle,
    /// An item is being viewed.
    Viewing {
        /// Whether the player may finish the view now.
        finishable: bool,
    },
}

/// The interaction state machine.
///
/// Owns the inventory, the current session, running move transitions and
/// the event log. The presentation gateway and audio backend are injected
/// at construction; interactables live in the level's registry, which is
/// passed to every tick.
pub struct InteractionController<G: PresentationGateway, A: AudioPlayer> {
    config: InteractionConfig,
    gateway: G,
    audio: A,
    inventory: Inventory,
    session: Option<Session>,
    transitions: MoveTransitions,
    clock: FrameClock,
    events: EventLog,
    observers: Vec<Box<dyn InteractionObserver>>,
    cursor_shown: Option<bool>,
    raised_hooks: Vec<String>,
}

impl<G: PresentationGateway, A: AudioPlayer> std::fmt::Debug for InteractionController<G, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("frame", &self.clock.frame())
            .field("state", &self.state())
            .field("inventory", &self.inventory.len())
            .field("moving", &self.transitions.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl<G: PresentationGateway, A: AudioPlayer> InteractionController<G, A> {
    /// Create a controller with an empty inventory.
    pub fn new(config: InteractionConfig, gateway: G, audio: A) -> Self {
        let events = EventLog::new(config.max_events);
        Self {
            config,
            gateway,
            audio,
            inventory: Inventory::new(),
            session: None,
            transitions: MoveTransitions::new(),
            clock: FrameClock::new(),
            events,
            observers: Vec::new(),
            cursor_shown: None,
            raised_hooks: Vec::new(),
        }
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn add_observer<O: InteractionObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Advance one frame.
    ///
    /// Running move transitions advance first, then the finish timer, then
    /// input is handled.
    pub fn tick(
        &mut self,
        frame: &Frame,
        registry: &mut InteractableRegistry,
        targeting: &mut dyn Targeting,
    ) -> InteractionResult<()> {
        let delta = frame.delta.max(0.0);
        self.clock.advance(delta);
        self.raised_hooks.clear();

        for id in self.transitions.step(delta, registry) {
            let name = display_name(registry, id);
            self.emit(
                InteractionEventKind::MoveCompleted { interactable: id },
                format!("{name} came to rest"),
            );
        }

        self.advance_finish_timer(delta, registry)?;

        if self.session.is_some() {
            self.handle_viewing(frame, registry)
        } else {
            self.handle_idle(frame, registry, targeting)
        }
    }

    /// Finish the current view if the player is allowed to.
    ///
    /// Returns `Ok(false)` while the finish timer is still pending.
    pub fn request_finish(&mut self, registry: &mut InteractableRegistry) -> InteractionResult<bool> {
        let session = self.session.as_ref().ok_or(InteractionError::NotViewing)?;
        if !session.can_finish {
            return Ok(false);
        }
        self.finish(registry)?;
        Ok(true)
    }

    /// Drop the current session and stop every move transition.
    ///
    /// Used when the level is torn down mid-interaction.
    pub fn abandon(&mut self, registry: &mut InteractableRegistry) {
        if let Some(session) = self.session.take() {
            debug!(interactable = %session.interactable, "session abandoned");
            self.gateway.set_back_affordance(false);
            self.gateway.set_caption("");
            self.audio.stop();
        }
        self.transitions.cancel_all(registry);
        self.cursor_shown = None;
    }

    /// Put an item straight into the inventory. Returns the slot index, or
    /// `None` if it was already held.
    pub fn give(&mut self, item: Arc<Item>) -> Option<usize> {
        self.inventory.add(item, &mut self.gateway)
    }

    /// Empty the inventory.
    pub fn clear_inventory(&mut self) {
        self.inventory.clear(&mut self.gateway);
    }

    /// Current state.
    pub fn state(&self) -> InteractionState {
        match &self.session {
            None => InteractionState::Idle,
            Some(session) => InteractionState::Viewing {
                finishable: session.can_finish,
            },
        }
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The player's inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The configuration in use.
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// The presentation gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The presentation gateway, mutably.
    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// The audio backend.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// The audio backend, mutably.
    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// The event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Hook tags fired since the start of the last tick, in firing order.
    ///
    /// Unlike the event log this is never trimmed.
    pub fn raised_hooks(&self) -> &[String] {
        &self.raised_hooks
    }

    /// The frame clock.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Number of the most recent frame.
    pub fn current_frame(&self) -> u64 {
        self.clock.frame()
    }

    fn advance_finish_timer(
        &mut self,
        delta: f32,
        registry: &mut InteractableRegistry,
    ) -> InteractionResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let fired = session
            .finish_timer
            .as_mut()
            .is_some_and(|timer| timer.tick(delta));
        if !fired {
            return Ok(());
        }

        session.finish_timer = None;
        session.can_finish = true;
        let interactable = session.interactable;
        let item = Arc::clone(&session.item);

        self.emit(
            InteractionEventKind::ReadyToFinish {
                interactable,
                item: item.id.clone(),
            },
            format!("{} can be put away", item.id),
        );

        if !item.has_image() && !item.grabbable {
            self.finish(registry)?;
        } else {
            self.gateway.set_back_affordance(true);
        }
        self.gateway.set_caption("");
        Ok(())
    }

    fn handle_idle(
        &mut self,
        frame: &Frame,
        registry: &mut InteractableRegistry,
        targeting: &mut dyn Targeting,
    ) -> InteractionResult<()> {
        let target = targeting
            .pick(&frame.camera.center_ray(), self.config.ray_distance)
            .filter(|&id| registry.get(id).is_some());
        self.show_cursor(target.is_some());

        match target {
            Some(id) if frame.input.primary_pressed => self.interact(id, registry),
            _ => Ok(()),
        }
    }

    fn handle_viewing(
        &mut self,
        frame: &Frame,
        registry: &mut InteractableRegistry,
    ) -> InteractionResult<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let id = session.interactable;
        let grabbable = session.item.grabbable;
        let can_finish = session.can_finish;

        let pointer = frame.input.pointer_delta;
        if grabbable && frame.input.primary_held && pointer != Vec2::ZERO {
            let interactable = registry
                .get_mut(id)
                .ok_or(InteractionError::InteractableNotFound(id))?;
            let speed = self.config.rotate_speed;
            interactable
                .transform
                .rotate_world(frame.camera.right, -(pointer.y * speed).to_radians());
            interactable
                .transform
                .rotate_world(frame.camera.up, -(pointer.x * speed).to_radians());
        }

        if can_finish && frame.input.secondary_held {
            self.finish(registry)?;
        }
        Ok(())
    }

    fn interact(&mut self, id: InteractableId, registry: &mut InteractableRegistry) -> InteractionResult<()> {
        let interactable = registry
            .get_mut(id)
            .ok_or(InteractionError::InteractableNotFound(id))?;
        if interactable.is_moving {
            debug!(interactable = %id, name = %interactable.name, "ignored interaction with moving object");
            return Ok(());
        }

        let name = interactable.name.clone();
        self.emit(
            InteractionEventKind::Interacted { interactable: id },
            format!("interacted with {name}"),
        );
        for observer in &mut self.observers {
            observer.on_interact(id);
        }
        let tags = interactable.on_interact.clone();
        self.fire_hooks(id, HookPoint::Interact, &tags);

        let Some(current) = interactable.item.clone() else {
            return Ok(());
        };

        for observer in &mut self.observers {
            observer.on_view(id);
        }

        let item = match interactable.apply_first_rule(&mut self.inventory, &mut self.gateway) {
            Some(index) => {
                let rule = interactable.rules[index].clone();
                debug!(
                    interactable = %id,
                    consumed = %rule.required.id,
                    replacement = %rule.replacement.id,
                    "previous-item rule applied"
                );
                self.emit(
                    InteractionEventKind::RuleApplied {
                        interactable: id,
                        consumed: rule.required.id.clone(),
                        replacement: rule.replacement.id.clone(),
                    },
                    format!(
                        "{name} used {} and became {}",
                        rule.required.id, rule.replacement.id
                    ),
                );
                for observer in &mut self.observers {
                    observer.on_rule_applied(id, &rule);
                }
                self.fire_hooks(id, HookPoint::Rule(index), &rule.on_interact);
                Arc::clone(&rule.replacement)
            }
            None => current,
        };

        let mut session = Session::new(id, Arc::clone(&item));
        if item.grabbable {
            session.origin = Some(interactable.transform);
        }

        self.emit(
            InteractionEventKind::ViewStarted {
                interactable: id,
                item: item.id.clone(),
            },
            format!("viewing {} on {name}", item.id),
        );
        self.session = Some(session);
        self.present_item(&item);

        if item.grabbable {
            let transition = MoveTransition::new(
                id,
                self.config.viewer_position,
                self.config.move_duration,
                self.config.move_rate,
            );
            self.transitions.start(transition, registry);
        }
        Ok(())
    }

    fn present_item(&mut self, item: &Item) {
        if let Some(image) = &item.image {
            self.gateway.set_image(image);
        }
        let audio_duration = match &item.audio {
            Some(clip) => Some(self.audio.play(clip)),
            None => {
                self.audio.stop();
                None
            }
        };
        self.gateway.set_caption(&item.text);

        let delay = self.config.finish_delay(audio_duration);
        if let Some(session) = self.session.as_mut() {
            session.finish_timer = Some(OneShotTimer::new(delay));
        }
    }

    fn finish(&mut self, registry: &mut InteractableRegistry) -> InteractionResult<()> {
        let session = self.session.take().ok_or(InteractionError::NotViewing)?;
        let id = session.interactable;
        let item = session.item;
        self.gateway.set_back_affordance(false);

        if item.collectible {
            if let Some(index) = self.inventory.add(Arc::clone(&item), &mut self.gateway) {
                self.emit(
                    InteractionEventKind::Collected {
                        interactable: id,
                        item: item.id.clone(),
                        index,
                    },
                    format!("{} added to inventory", item.id),
                );
            }
            if let Some(clip) = &self.config.confirm_sound {
                self.audio.play(clip);
            }
            for observer in &mut self.observers {
                observer.on_collect(id, &item);
            }
            let tags = registry
                .get(id)
                .map(|interactable| interactable.on_collect.clone())
                .unwrap_or_default();
            self.fire_hooks(id, HookPoint::Collect, &tags);
        }

        if item.grabbable {
            let interactable = registry
                .get_mut(id)
                .ok_or(InteractionError::InteractableNotFound(id))?;
            if let Some(origin) = session.origin {
                interactable.transform.rotation = origin.rotation;
                let transition = MoveTransition::new(
                    id,
                    origin.position,
                    self.config.move_duration,
                    self.config.move_rate,
                );
                self.transitions.start(transition, registry);
            }
        }

        let name = display_name(registry, id);
        self.emit(
            InteractionEventKind::ViewFinished {
                interactable: id,
                item: item.id.clone(),
            },
            format!("put away {} from {name}", item.id),
        );
        for observer in &mut self.observers {
            observer.on_finish_view(id);
        }
        Ok(())
    }

    fn fire_hooks(&mut self, id: InteractableId, point: HookPoint, tags: &[String]) {
        for tag in tags {
            self.emit(
                InteractionEventKind::Hook {
                    interactable: id,
                    point,
                    tag: tag.clone(),
                },
                format!("hook '{tag}' ({point})"),
            );
            for observer in &mut self.observers {
                observer.on_hook(id, point, tag);
            }
            self.raised_hooks.push(tag.clone());
        }
    }

    fn show_cursor(&mut self, visible: bool) {
        if self.cursor_shown != Some(visible) {
            self.gateway.set_hand_cursor(visible);
            self.cursor_shown = Some(visible);
        }
    }

    fn emit(&mut self, kind: InteractionEventKind, description: impl Into<String>) {
        self.events
            .push(InteractionEvent::new(self.clock.frame(), kind, description));
    }
}

fn display_name(registry: &InteractableRegistry, id: InteractableId) -> String {
    registry
        .get(id)
        .map(|interactable| interactable.name.clone())
        .unwrap_or_else(|| id.to_string())
}

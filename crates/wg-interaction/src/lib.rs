//! Frame-driven interaction state machine for Wandelgang.
//!
//! The [`InteractionController`] is ticked once per frame. It queries a
//! [`Targeting`] collaborator for the object under the crosshair, runs the
//! interact → view → finish cycle, moves grabbable objects to and from the
//! viewer, and reports everything to an injected [`PresentationGateway`],
//! [`AudioPlayer`], registered [`InteractionObserver`]s and an [`EventLog`].
//! Timers and move transitions are plain values advanced by the tick; no
//! coroutine runtime is involved.

/// Audio playback collaborator.
pub mod audio;
/// Frame clock tracking frames and elapsed time.
pub mod clock;
/// Configuration for the interaction controller.
pub mod config;
/// The interaction state machine.
pub mod controller;
/// Error types for the interaction crate.
pub mod error;
/// Interaction event types and the event log.
pub mod event;
/// Presentation collaborator interface.
pub mod gateway;
/// Per-frame input and camera state.
pub mod input;
/// Observer interface replacing engine event slots.
pub mod observer;
/// Transient state of one interact → view → finish cycle.
pub mod session;
/// Targeting collaborator interface.
pub mod targeting;
/// One-shot timers.
pub mod timer;
/// Smoothed move transitions.
pub mod transition;

/// Re-exports of [`audio::AudioPlayer`] and [`audio::HeadlessAudio`].
pub use audio::{AudioPlayer, HeadlessAudio};
/// Re-export of [`clock::FrameClock`].
pub use clock::FrameClock;
/// Re-export of [`config::InteractionConfig`].
pub use config::InteractionConfig;
/// Re-exports of [`controller::InteractionController`] and [`controller::InteractionState`].
pub use controller::{InteractionController, InteractionState};
/// Re-exports of [`error::InteractionError`] and [`error::InteractionResult`].
pub use error::{InteractionError, InteractionResult};
/// Re-exports of [`event::EventLog`], [`event::HookPoint`], [`event::InteractionEvent`], and [`event::InteractionEventKind`].
pub use event::{EventLog, HookPoint, InteractionEvent, InteractionEventKind};
/// Re-exports of [`gateway::NullGateway`] and [`gateway::PresentationGateway`].
pub use gateway::{NullGateway, PresentationGateway};
/// Re-exports of [`input::Camera`], [`input::Frame`], and [`input::InputState`].
pub use input::{Camera, Frame, InputState};
/// Re-export of [`observer::InteractionObserver`].
pub use observer::InteractionObserver;
/// Re-export of [`session::Session`].
pub use session::Session;
/// Re-exports of [`targeting::FixedTarget`], [`targeting::Ray`], and [`targeting::Targeting`].
pub use targeting::{FixedTarget, Ray, Targeting};
/// Re-export of [`timer::OneShotTimer`].
pub use timer::OneShotTimer;
/// Re-exports of [`transition::MoveTransition`] and [`transition::MoveTransitions`].
pub use transition::{MoveTransition, MoveTransitions};

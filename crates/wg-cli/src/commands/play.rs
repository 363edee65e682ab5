use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use wg_interaction::{FixedTarget, Frame, HeadlessAudio, InteractionEvent, InteractionEventKind};
use wg_scene::{Game, GameContent, JsonFileStore, KeyValueStore, MemoryStore};

use crate::script::{Script, Start};

pub fn run(content: &Path, script: &Path, state: Option<&Path>, all: bool) -> Result<(), String> {
    let content = super::load_content(content)?;
    content.validate().map_err(|e| e.to_string())?;
    let script = Script::load(script)?;

    match state {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            replay(content, &script, store, all)
        }
        None => replay(content, &script, MemoryStore::new(), all),
    }
}

fn replay<S: KeyValueStore>(
    content: GameContent,
    script: &Script,
    store: S,
    all: bool,
) -> Result<(), String> {
    let mut game = Game::new(content, store, HeadlessAudio::new()).map_err(|e| e.to_string())?;
    match script.start {
        Start::NewGame => game.new_game(),
        Start::Continue => game.continue_game(),
    }
    .map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        "Replay".bold(),
        format!(
            "({} steps, {:.2}s/frame)",
            script.steps.len(),
            script.frame_delta
        )
        .dimmed()
    );
    print_level(&game);
    println!();

    let mut target = FixedTarget::default();
    let mut aim: Option<String> = None;

    for (index, step) in script.steps.iter().enumerate() {
        if let Some(zone) = &step.enter_zone {
            let outcome = game.enter_zone(zone).map_err(|e| e.to_string())?;
            for tag in &outcome.scare_tags {
                println!("  {} {}", "[zone]".dimmed(), format!("scare '{tag}' in {zone}").magenta());
            }
            if outcome.exit.is_some() {
                print_level(&game);
            }
        }

        if step.look_away {
            aim = None;
        }
        if let Some(name) = &step.target {
            if game.registry().find_by_name(name).is_none() {
                return Err(format!("step {}: no interactable named '{name}'", index + 1));
            }
            aim = Some(name.clone());
        }

        for n in 0..step.frames {
            target.set(
                aim.as_deref()
                    .and_then(|name| game.registry().find_id_by_name(name)),
            );
            let frame = Frame::new(script.frame_delta, step.input(n));
            let loaded = game
                .tick(&frame, &mut target)
                .map_err(|e| format!("step {}: {e}", index + 1))?;

            let now = game.controller().current_frame();
            for event in game.controller().events().events_at_frame(now) {
                if all || is_notable(&event.kind) {
                    print_event(event);
                }
            }
            if loaded.is_some() {
                print_level(&game);
            }
        }
    }

    println!();
    print_summary(&game);
    Ok(())
}

fn is_notable(kind: &InteractionEventKind) -> bool {
    !matches!(
        kind,
        InteractionEventKind::ReadyToFinish { .. } | InteractionEventKind::MoveCompleted { .. }
    )
}

fn print_event(event: &InteractionEvent) {
    let frame_label = format!("[frame {:>4}]", event.frame).dimmed();
    let description = match event.kind {
        InteractionEventKind::Collected { .. } => event.description.green().bold(),
        InteractionEventKind::RuleApplied { .. } => event.description.yellow(),
        InteractionEventKind::Hook { .. } => event.description.magenta(),
        InteractionEventKind::ViewStarted { .. } => event.description.cyan(),
        InteractionEventKind::ViewFinished { .. } => event.description.blue(),
        InteractionEventKind::Interacted { .. } => event.description.normal(),
        InteractionEventKind::ReadyToFinish { .. } | InteractionEventKind::MoveCompleted { .. } => {
            event.description.dimmed()
        }
    };
    println!("  {frame_label} {:<8} {description}", event.kind.label());
}

fn print_level<S: KeyValueStore>(game: &Game<S, HeadlessAudio>) {
    let Some(level) = game.current_level() else {
        return;
    };
    let name = game
        .content()
        .level(level)
        .map(|def| def.name.clone())
        .unwrap_or_default();
    println!("  {} {level} {}", "Level".bold(), name.italic());
}

fn print_summary<S: KeyValueStore>(game: &Game<S, HeadlessAudio>) {
    let controller = game.controller();
    println!("  {}", "Inventory".bold().underline());
    println!();

    if controller.inventory().is_empty() {
        println!("  {}", "(empty)".dimmed());
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Slot", "Item", "Message"]);
        for (slot, item) in controller.inventory().items().iter().enumerate() {
            table.add_row(vec![
                slot.to_string(),
                item.id.to_string(),
                super::truncate(&item.collect_message, 60),
            ]);
        }
        println!("{table}");
    }
    println!();

    let level = game
        .current_level()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "none".to_string());
    println!(
        "  Level {level}, {} frames, {} events",
        controller.current_frame(),
        controller.events().len()
    );
}

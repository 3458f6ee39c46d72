//! Interactive play mode
//!
//! Hosts a controller per scene, pumps game events through the bus from
//! typed commands, and rebuilds the screen graph when a transition lands.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use crate::bus::EventBus;
use crate::cinematic::{CinematicTrigger, PLAYER_TAG};
use crate::cli::console::{
    ConsoleAudio, ConsoleDialogue, ConsoleSceneLoader, ConsoleTimeline, ConsoleTree,
};
use crate::controller::{HostBindings, StartMode, UiController};
use crate::infrastructure::{JsonProgressStore, MemoryProgressStore, TaskSceneDirector};
use crate::ports::{ProgressStore, SceneDirector};
use crate::types::{
    event::dialogue_requested, GameEvent, QuestItem, SceneIndex, Vec2,
};

/// Run the interactive demo. With a path, progress persists across runs.
pub fn run_play(progress_path: Option<PathBuf>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let progress: Rc<dyn ProgressStore> = match progress_path {
        Some(path) => Rc::new(JsonProgressStore::open(path)?),
        None => Rc::new(MemoryProgressStore::new()),
    };

    let loaded: Arc<Mutex<Option<SceneIndex>>> = Arc::new(Mutex::new(None));
    let director: Rc<dyn SceneDirector> = Rc::new(TaskSceneDirector::new(Arc::new(
        ConsoleSceneLoader::new(loaded.clone()),
    )));

    let mut bus = EventBus::new();
    let mut session = Session::open(SceneIndex(0), &progress, &director, &mut bus);

    println!("=== screenflow demo ===");
    print_help();

    loop {
        // A finished scene load tears the current screen graph down and
        // builds the next one.
        let landed = loaded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(scene) = landed {
            if scene != SceneIndex(0) {
                progress.record_scene(scene);
            }
            session.close(&mut bus);
            session = Session::open(scene, &progress, &director, &mut bus);
        }

        let line = read_line("> ")?;
        match line.as_str() {
            "q" => break,
            "help" => print_help(),
            "" => session.controller.borrow_mut().handle_confirm(),
            "w" => session.controller.borrow_mut().handle_direction(Vec2::UP),
            "s" => session.controller.borrow_mut().handle_direction(Vec2::DOWN),
            "a" => session.controller.borrow_mut().handle_direction(Vec2::LEFT),
            "d" => session.controller.borrow_mut().handle_direction(Vec2::RIGHT),
            "talk" => bus.publish(&dialogue_requested("intro.ink", "Guide")),
            "chest" => bus.publish(&GameEvent::QuestItemUnlocked {
                item: QuestItem::new("Ancient Key"),
                show_ui: true,
            }),
            "chest-quiet" => bus.publish(&GameEvent::QuestItemUnlocked {
                item: QuestItem::new("Ancient Key"),
                show_ui: false,
            }),
            "win" => bus.publish(&GameEvent::Victory),
            "lose" => bus.publish(&GameEvent::GameOver),
            "zone" => {
                if let Some(trigger) = session.trigger.as_mut() {
                    trigger.object_entered(PLAYER_TAG, &bus);
                }
            }
            "cutend" => {
                if let Some(trigger) = session.trigger.as_mut() {
                    trigger.timeline_stopped(&bus);
                }
            }
            other => {
                if let Some(rest) = other.strip_prefix("hit ") {
                    match rest.parse::<f32>() {
                        Ok(points) => bus.publish(&GameEvent::HealthChanged(points)),
                        Err(_) => println!("usage: hit <health>"),
                    }
                } else if let Some(rest) = other.strip_prefix("potion ") {
                    match rest.parse::<i32>() {
                        Ok(count) => bus.publish(&GameEvent::PotionsChanged(count)),
                        Err(_) => println!("usage: potion <count>"),
                    }
                } else {
                    println!("unknown command '{other}' (try 'help')");
                }
            }
        }
    }

    session.close(&mut bus);
    println!("bye");
    Ok(())
}

/// One scene's worth of wiring: controller plus the optional intro trigger.
struct Session {
    controller: Rc<RefCell<UiController>>,
    trigger: Option<CinematicTrigger>,
}

impl Session {
    fn open(
        scene: SceneIndex,
        progress: &Rc<dyn ProgressStore>,
        director: &Rc<dyn SceneDirector>,
        bus: &mut EventBus,
    ) -> Self {
        let tree: Box<ConsoleTree> = if scene == SceneIndex(0) {
            Box::new(ConsoleTree::menu_scene())
        } else {
            Box::new(ConsoleTree::gameplay_scene())
        };

        let controller = Rc::new(RefCell::new(UiController::new(HostBindings {
            tree,
            progress: progress.clone(),
            director: director.clone(),
            dialogue: Box::new(ConsoleDialogue),
            audio: Some(Box::new(ConsoleAudio)),
        })));
        UiController::activate(&controller, bus);
        let mode = controller.borrow_mut().start();

        let trigger = match mode {
            StartMode::Gameplay => {
                let mut trigger = CinematicTrigger::new(
                    Box::new(ConsoleTimeline),
                    progress.clone(),
                    false,
                );
                trigger.activate(bus);
                Some(trigger)
            }
            StartMode::MainMenu => None,
        };

        Self { controller, trigger }
    }

    fn close(&mut self, bus: &mut EventBus) {
        self.controller.borrow_mut().deactivate(bus);
    }
}

fn print_help() {
    println!("controls:");
    println!("  w/a/s/d       move the menu selection");
    println!("  enter         confirm");
    println!("  hit <n>       health changed event");
    println!("  potion <n>    potions changed event");
    println!("  talk          dialogue request event");
    println!("  chest         quest item unlocked (with notice)");
    println!("  chest-quiet   quest item unlocked (icon only)");
    println!("  win / lose    end-of-run events");
    println!("  zone          player enters the cinematic trigger");
    println!("  cutend        cutscene timeline finished");
    println!("  help / q      this text / quit");
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

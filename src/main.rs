//! sheetview main entry point.
//!
//! A sprite-sheet animation viewer written in Rust using:
//! - **raylib** for windowing, input, and drawing
//! - **bevy_ecs** for the world, systems, and observers
//!
//! The viewer loads one character sheet, plays the active action's clip at a
//! fixed animation rate on a 400×400 canvas, and cycles through the action
//! set on mouse click or Space/Enter/Right-arrow. F11 toggles the sheet and
//! frame overlays.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Load the sheet texture and spawn the character entity
//! 3. Register observers and systems
//! 4. Run the loop: frame delta → input + animation systems → render →
//!    window-size poll
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use sheetview::components::action::Action;
use sheetview::events::cycleaction::cycle_action_observer;
use sheetview::events::switchdebug::switch_debug_observer;
use sheetview::game;
use sheetview::resources::debugmode::DebugMode;
use sheetview::resources::input::InputState;
use sheetview::resources::rendertarget::RenderTarget;
use sheetview::resources::screensize::ScreenSize;
use sheetview::resources::spritesheet::{SheetLayout, SheetState};
use sheetview::resources::texturestore::TextureStore;
use sheetview::resources::viewerconfig::ViewerConfig;
use sheetview::resources::windowsize::WindowSize;
use sheetview::resources::worldtime::WorldTime;
use sheetview::systems::animation::animation;
use sheetview::systems::input::update_input_state;
use sheetview::systems::render::render_frame;
use sheetview::systems::time::update_world_time;

/// Sprite-sheet animation viewer
#[derive(Parser)]
#[command(version, about = "Cycle through a character sheet's actions on a pixel-perfect canvas")]
struct Cli {
    /// Path to the INI configuration file (default: ./sheetview.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the sprite sheet image, overriding the configuration.
    #[arg(long, value_name = "PATH")]
    sheet: Option<PathBuf>,

    /// Action to start on (idle, walk, run, jumpUp, jumpDown, throw, die).
    #[arg(long, value_name = "NAME")]
    action: Option<String>,

    /// Start without the sheet and frame overlays (F11 brings them back).
    #[arg(long)]
    no_overlays: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => ViewerConfig::with_path(path),
        None => ViewerConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::info!("no config file, using defaults ({e})");
    }
    if let Some(sheet) = cli.sheet {
        config.sheet_path = sheet;
    }

    let start_action = match cli.action.as_deref() {
        Some(name) => Action::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown action '{name}', starting on idle");
            Action::Idle
        }),
        None => Action::Idle,
    };

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("sheetview");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let render_target = RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height)
        .expect("Failed to create render target");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(SheetState::Pending);
    world.insert_resource(SheetLayout {
        frame_width: config.frame_width,
        frame_height: config.frame_height,
        scale: config.sprite_scale,
    });
    // Overlays start on; the viewer is a sheet-inspection tool. F11 toggles.
    if !cli.no_overlays {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(cycle_action_observer));
    // Ensure the observers are registered before any system can trigger events.
    world.flush();

    game::setup(&mut world, start_action);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(animation.after(update_input_state));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        render_frame(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (resize or DPI scale change)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
}

//! Viewer tick integration tests for animation playback and action cycling.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use sheetview::components::action::Action;
use sheetview::components::animation::Animation;
use sheetview::components::mapposition::MapPosition;
use sheetview::components::player::Player;
use sheetview::components::sprite::Sprite;
use sheetview::components::zindex::ZIndex;
use sheetview::events::cycleaction::{CycleActionEvent, cycle_action_observer};
use sheetview::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use sheetview::game::spawn_player;
use sheetview::resources::animationstore::{AnimationStore, ClipDef, DEFAULT_FPS};
use sheetview::resources::debugmode::DebugMode;
use sheetview::resources::screensize::ScreenSize;
use sheetview::resources::spritesheet::{SheetLayout, SheetState};
use sheetview::resources::worldtime::WorldTime;
use sheetview::systems::animation::animation;
use sheetview::systems::time::update_world_time;

const EPSILON: f32 = 1e-5;

/// One animation frame interval at the default playback speed, in seconds.
const FRAME_INTERVAL: f32 = 1.0 / DEFAULT_FPS;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize { w: 400, h: 400 });
    world.insert_resource(SheetLayout {
        frame_width: 80.0,
        frame_height: 64.0,
        scale: 2.0,
    });
    world.insert_resource(AnimationStore::builtin());
    world.insert_resource(SheetState::Ready {
        width: 800,
        height: 448,
    });
    world
}

fn tick_animation(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(world);
}

fn player_animation(world: &mut World) -> Animation {
    let mut q = world.query_filtered::<&Animation, With<Player>>();
    q.iter(world).next().expect("player missing").clone()
}

fn player_sprite(world: &mut World) -> Sprite {
    let mut q = world.query_filtered::<&Sprite, With<Player>>();
    q.iter(world).next().expect("player missing").clone()
}

// --- frame advance ---

#[test]
fn zero_delta_tick_stays_on_frame_zero() {
    for action in Action::ALL {
        let mut world = make_world();
        spawn_player(&mut world, action);
        tick_animation(&mut world, 0.0);
        let anim = player_animation(&mut world);
        assert_eq!(anim.frame_index, 0, "action {}", action.name());
    }
}

#[test]
fn sub_interval_ticks_do_not_advance() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Walk);
    tick_animation(&mut world, FRAME_INTERVAL * 0.5);
    assert_eq!(player_animation(&mut world).frame_index, 0);
}

#[test]
fn one_interval_advances_one_frame() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Walk);
    tick_animation(&mut world, FRAME_INTERVAL);
    assert_eq!(player_animation(&mut world).frame_index, 1);
}

#[test]
fn full_cycle_visits_every_frame_and_wraps() {
    for action in Action::ALL {
        let mut world = make_world();
        spawn_player(&mut world, action);

        let count = action.frame_count();
        let mut seen = vec![false; count];
        seen[0] = true;
        for _ in 0..count {
            tick_animation(&mut world, FRAME_INTERVAL);
            let anim = player_animation(&mut world);
            assert!(
                anim.frame_index < count,
                "frame_index out of range for {}",
                action.name()
            );
            seen[anim.frame_index] = true;
        }
        assert!(
            seen.iter().all(|&s| s),
            "action {} skipped a frame",
            action.name()
        );
        // after frame_count intervals the cycle is back at frame 0
        assert_eq!(player_animation(&mut world).frame_index, 0);
    }
}

#[test]
fn single_large_delta_advances_one_frame() {
    // Accumulator policy: at most one frame advance per update call, with
    // the remainder carried over.
    let mut world = make_world();
    spawn_player(&mut world, Action::Idle);
    tick_animation(&mut world, 0.5); // six intervals at 12 fps
    let anim = player_animation(&mut world);
    assert_eq!(anim.frame_index, 1);
    assert!(approx_eq(anim.elapsed_time, 0.5 - FRAME_INTERVAL));
}

#[test]
fn carried_remainder_speeds_up_the_next_advance() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Walk);
    // 1.5 intervals: advance once, carry roughly half an interval
    tick_animation(&mut world, FRAME_INTERVAL * 1.5);
    assert_eq!(player_animation(&mut world).frame_index, 1);
    // another 0.6 intervals tips the carried remainder over the threshold
    tick_animation(&mut world, FRAME_INTERVAL * 0.6);
    assert_eq!(player_animation(&mut world).frame_index, 2);
}

#[test]
fn pending_sheet_freezes_playback() {
    let mut world = make_world();
    world.insert_resource(SheetState::Pending);
    spawn_player(&mut world, Action::Run);
    for _ in 0..10 {
        tick_animation(&mut world, FRAME_INTERVAL);
    }
    let anim = player_animation(&mut world);
    assert_eq!(anim.frame_index, 0);
    assert_eq!(anim.elapsed_time, 0.0, "no time accumulates while pending");
}

#[test]
fn failed_sheet_freezes_playback() {
    let mut world = make_world();
    world.insert_resource(SheetState::Failed);
    spawn_player(&mut world, Action::Run);
    tick_animation(&mut world, 1.0);
    assert_eq!(player_animation(&mut world).frame_index, 0);
}

#[test]
fn sprite_offset_tracks_frame_and_row() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Run);

    let sprite = player_sprite(&mut world);
    assert!(approx_eq(sprite.offset.x, 0.0));
    assert!(approx_eq(sprite.offset.y, Action::Run.row() as f32 * 64.0));

    tick_animation(&mut world, FRAME_INTERVAL);
    let sprite = player_sprite(&mut world);
    assert!(approx_eq(sprite.offset.x, 80.0));
    assert!(approx_eq(sprite.offset.y, Action::Run.row() as f32 * 64.0));
}

#[test]
fn non_looping_clip_holds_the_last_frame() {
    let mut world = make_world();
    let mut store = AnimationStore::builtin();
    store.insert(
        Action::Die,
        ClipDef {
            row: Action::Die.row(),
            frame_count: 3,
            fps: DEFAULT_FPS,
            looped: false,
        },
    );
    world.insert_resource(store);
    spawn_player(&mut world, Action::Die);

    for _ in 0..6 {
        tick_animation(&mut world, FRAME_INTERVAL);
    }
    assert_eq!(player_animation(&mut world).frame_index, 2);
}

// --- action switching ---

#[test]
fn switching_action_restarts_the_clip() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Walk);
    tick_animation(&mut world, FRAME_INTERVAL * 2.0);
    assert_eq!(player_animation(&mut world).frame_index, 1);

    let mut q = world.query_filtered::<&mut Animation, With<Player>>();
    q.iter_mut(&mut world)
        .next()
        .expect("player missing")
        .set_action(Action::Throw);

    let anim = player_animation(&mut world);
    assert_eq!(anim.action, Action::Throw);
    assert_eq!(anim.frame_index, 0);
    assert_eq!(anim.elapsed_time, 0.0);
}

#[test]
fn asserting_the_same_action_every_tick_never_restarts() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Walk);
    for _ in 0..3 {
        tick_animation(&mut world, FRAME_INTERVAL);
        let mut q = world.query_filtered::<&mut Animation, With<Player>>();
        q.iter_mut(&mut world)
            .next()
            .expect("player missing")
            .set_action(Action::Walk);
    }
    assert_eq!(player_animation(&mut world).frame_index, 3);
}

// --- cycling via events ---

#[test]
fn cycle_event_advances_to_the_next_action() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Idle);
    world.spawn(Observer::new(cycle_action_observer));
    world.flush();

    world.trigger(CycleActionEvent {});
    assert_eq!(player_animation(&mut world).action, Action::Walk);
}

#[test]
fn cycle_event_wraps_from_die_to_idle() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Die);
    world.spawn(Observer::new(cycle_action_observer));
    world.flush();

    world.trigger(CycleActionEvent {});
    assert_eq!(player_animation(&mut world).action, Action::Idle);
}

#[test]
fn cycling_through_all_actions_returns_to_the_start() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Idle);
    world.spawn(Observer::new(cycle_action_observer));
    world.flush();

    let mut visited = Vec::new();
    for _ in 0..Action::ALL.len() {
        world.trigger(CycleActionEvent {});
        visited.push(player_animation(&mut world).action);
    }
    assert_eq!(visited.last(), Some(&Action::Idle));
    // every action was visited exactly once
    for action in Action::ALL {
        assert_eq!(visited.iter().filter(|a| **a == action).count(), 1);
    }
}

#[test]
fn cycle_resets_playback_mid_clip() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Walk);
    world.spawn(Observer::new(cycle_action_observer));
    world.flush();

    tick_animation(&mut world, FRAME_INTERVAL * 3.0);
    world.trigger(CycleActionEvent {});
    let anim = player_animation(&mut world);
    assert_eq!(anim.action, Action::Run);
    assert_eq!(anim.frame_index, 0);
}

// --- debug toggle ---

#[test]
fn switch_debug_event_toggles_the_marker() {
    let mut world = make_world();
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    assert!(!world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}

// --- spawn geometry ---

#[test]
fn player_spawns_feet_at_bottom_center() {
    let mut world = make_world();
    spawn_player(&mut world, Action::Idle);

    let (pos, sprite, z) = {
        let mut q = world.query_filtered::<(&MapPosition, &Sprite, &ZIndex), With<Player>>();
        let (p, s, z) = q.iter(&world).next().expect("player missing");
        (*p, s.clone(), *z)
    };
    assert!(approx_eq(pos.pos.x, 200.0));
    assert!(approx_eq(pos.pos.y, 400.0));
    assert_eq!(z, ZIndex(0));
    // pivot at the feet: bottom-center of the frame
    assert!(approx_eq(sprite.origin.x, 40.0));
    assert!(approx_eq(sprite.origin.y, 64.0));
    // idle starts on the first cell of the first row
    assert!(approx_eq(sprite.offset.x, 0.0));
    assert!(approx_eq(sprite.offset.y, 0.0));
}

#[test]
fn time_scale_slows_playback() {
    let mut world = make_world();
    world.insert_resource(WorldTime::default().with_time_scale(0.5));
    spawn_player(&mut world, Action::Walk);

    tick_animation(&mut world, FRAME_INTERVAL);
    assert_eq!(
        player_animation(&mut world).frame_index,
        0,
        "half-speed time should not have completed an interval"
    );
    tick_animation(&mut world, FRAME_INTERVAL);
    assert_eq!(player_animation(&mut world).frame_index, 1);
}

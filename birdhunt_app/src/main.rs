//! Headless bird-hunt demo
//!
//! Builds the field scene, steers the player toward the bird's roost with
//! scripted input, and resolves a capture click once close enough. Exercises
//! the whole engine loop without a renderer: movement, collisions, damage
//! tagging, proximity cues and the capture ray-cast.

use field_engine::prelude::*;
use rand::Rng;

/// Fixed simulation step
const TICK: f64 = 1.0 / 60.0;

/// Give up if the player has not reached the bird after this much game time
const TIME_LIMIT: f64 = 120.0;

/// Build the field: ground, obstacle layout and the bird at the chosen roost
fn build_scene(config: &GameConfig, roost_index: usize) -> (SceneColliders, CollidableId) {
    let mut scene = SceneColliders::new();

    spawn_ground(&mut scene, config.field_range);

    let bird = spawn(&mut scene, SceneKind::Bird, roost(roost_index));

    spawn(&mut scene, SceneKind::Stump, Vec3::new(-1.0, 0.0, 9.0));
    spawn(&mut scene, SceneKind::Spruce, Vec3::new(-5.0, 0.0, 9.0));
    spawn(&mut scene, SceneKind::Spruce, Vec3::new(-2.0, 4.5, -24.0));
    spawn_scaled(
        &mut scene,
        SceneKind::Boulder,
        Vec3::new(-8.0, 0.0, -24.0),
        Vec3::new(0.7, 0.55, 0.7),
    );

    // The windmill blade cluster; touching any of these hurts.
    for x in [7.0, 8.0] {
        for z in [-21.0, -20.0, -19.0] {
            spawn(&mut scene, SceneKind::WindmillBlade, Vec3::new(x, 0.0, z));
        }
    }

    for position in [
        Vec3::new(0.0, 0.0, -8.0),
        Vec3::new(2.0, 0.0, -16.0),
        Vec3::new(-12.0, 0.0, -7.0),
        Vec3::new(-5.0, 0.0, -29.0),
        Vec3::new(-30.0, 0.0, -6.0),
        Vec3::new(-28.0, 0.0, -31.0),
    ] {
        spawn(&mut scene, SceneKind::CircularSpruce, position);
    }

    for position in [
        Vec3::new(-25.0, 0.0, -23.0),
        Vec3::new(-24.0, 0.0, -18.0),
        Vec3::new(-26.0, 0.0, -15.0),
        Vec3::new(-20.0, 0.0, -20.0),
        Vec3::new(-21.0, 0.0, -16.0),
    ] {
        spawn(&mut scene, SceneKind::Stump, position);
    }

    // Boulder walls along the field edges.
    let range = config.field_range;
    let segments = 13;
    for i in 1..=segments {
        let step = (range / f64::from(segments) - range)
            + f64::from(i - 1) * 2.0 * range / f64::from(segments);
        spawn_scaled(
            &mut scene,
            SceneKind::Boulder,
            Vec3::new(step, 0.0, -(range - 2.0)),
            Vec3::new(1.0, 0.6, 1.0),
        );
        spawn_scaled(
            &mut scene,
            SceneKind::Boulder,
            Vec3::new(step, 0.0, range - 2.0),
            Vec3::new(1.0, 1.5, 1.0),
        );
        spawn_scaled(
            &mut scene,
            SceneKind::Boulder,
            Vec3::new(-(range - 2.0), 0.0, step),
            Vec3::new(1.0, 1.2, 1.0),
        );
        spawn_scaled(
            &mut scene,
            SceneKind::Boulder,
            Vec3::new(range - 2.0, 0.0, step),
            Vec3::new(1.0, 0.9, 1.0),
        );
    }

    (scene, bird)
}

/// Difference between two headings, folded into [-180, 180]
fn heading_difference(desired: f64, current: f64) -> f64 {
    let mut difference = (desired - current) % 360.0;
    if difference > 180.0 {
        difference -= 360.0;
    } else if difference < -180.0 {
        difference += 360.0;
    }
    difference
}

/// Scripted input steering the player toward `target`
fn steer(player: &PlayerController, target: Vec3) -> MovementInput {
    let eye = player.position();
    let dx = target.x - eye.x;
    let dz = target.z - eye.z;

    // Facing direction at heading h is (-sin h, -cos h).
    let desired = (-dx).atan2(-dz).to_degrees();
    let difference = heading_difference(desired, player.compass_direction());

    MovementInput {
        forward: difference.abs() < 30.0,
        turn_left: difference > 2.0,
        turn_right: difference < -2.0,
        ..MovementInput::default()
    }
}

fn main() {
    env_logger::init();

    let config = match GameConfig::load_from_file("birdhunt.toml") {
        Ok(config) => config,
        Err(error) => {
            log::warn!("no usable birdhunt.toml ({error}), using default tuning");
            GameConfig::default()
        }
    };

    let roost_index = rand::thread_rng().gen_range(0..BIRD_ROOSTS.len());
    let bird_position = roost(roost_index);
    log::info!("the bird roosts at {bird_position:?}");

    let (scene, bird) = build_scene(&config, roost_index);
    log::info!("field assembled with {} collidables", scene.len());

    let capture_range = config.capture_distance;
    let mut game = GameSession::new(config, scene, bird);

    // A quick hop at the start, showing the jump while grounded.
    game.jump();

    let mut next_progress_log = 0.0;

    while game.elapsed() < TIME_LIMIT {
        let input = steer(game.player(), bird_position);
        let report = game.tick(TICK, &input);

        if report.chirp_started {
            log::info!("a chirp nearby! {:.2} units away", game.bird_distance());
        }
        if report.harmful_contacts > 0 {
            log::debug!("ouch, life at {:.1}", game.life().value());
        }
        if report.died {
            log::info!("respawned at the start position");
        }

        if game.elapsed() >= next_progress_log {
            let eye = game.player().position();
            log::info!(
                "t={:>5.1}s position=({:>6.2}, {:>5.2}, {:>6.2}) bird at {:.2}",
                game.elapsed(),
                eye.x,
                eye.y,
                eye.z,
                game.bird_distance()
            );
            next_progress_log += 5.0;
        }

        // Close enough: aim straight at the bird and click.
        if game.bird_distance() < capture_range * 0.8 {
            let eye = game.player().position();
            let ray = Ray::new(eye, bird_position - eye);
            match game.click(&ray) {
                CaptureOutcome::Captured => {
                    log::info!(
                        "captured the bird in {:.1} s with {:.0} life left",
                        game.elapsed(),
                        game.life().value()
                    );
                    break;
                }
                CaptureOutcome::WrongTarget(id) => {
                    let label = game.scene().get(id).map_or("?", Collidable::label);
                    log::info!("clicked the {label} instead of the bird");
                }
                CaptureOutcome::Missed => log::debug!("capture click missed"),
            }
        }
    }

    match game.state() {
        GameState::Won => log::info!("round over: the bird was found"),
        GameState::Running => log::warn!("round over: gave up after {TIME_LIMIT} s"),
    }
}

//! Per-frame run simulation
//!
//! Order within a tick: jump, player pose/physics, distance and checkpoints,
//! background scroll, spawning, obstacle movement and removal, ferns, and
//! finally collision.

use super::collision::first_collision;
use super::state::RunState;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// A jump key went down this frame
    pub jump: bool,
    /// A duck key is currently held
    pub duck_held: bool,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    /// The player left the ground
    Jumped,
    /// A checkpoint index (> 0) was reached
    Checkpoint(i64),
    /// An obstacle scrolled off the left edge
    ObstaclePassed,
    /// The player hit an obstacle; the run is over
    Crashed,
}

/// Advance the run by one frame of `dt` seconds
pub fn tick(run: &mut RunState, input: &TickInput, dt: f32) -> Vec<RunEvent> {
    let mut events = Vec::new();
    if run.crashed {
        return events;
    }
    run.ticks += 1;

    let took_off = input.jump && run.player.start_jump();
    run.player.update(input.duck_held);
    // A jump from the ducking pose lands within the same update
    if took_off && !run.player.on_ground {
        events.push(RunEvent::Jumped);
    }

    run.distance += DISTANCE_SPEED * dt as f64;
    advance_checkpoints(run, &mut events);

    run.background.update();

    if let Some(obstacle) = run.spawner.tick(&mut run.rng, run.distance) {
        log::debug!(
            "Spawned {:?} obstacle at tick {} (distance {:.0})",
            obstacle.kind,
            run.ticks,
            run.distance
        );
        run.obstacles.push(obstacle);
    }

    for obstacle in &mut run.obstacles {
        obstacle.update();
    }
    let before = run.obstacles.len();
    run.obstacles.retain(|o| !o.is_offscreen());
    for _ in run.obstacles.len()..before {
        run.score += 1;
        events.push(RunEvent::ObstaclePassed);
    }

    run.ferns.update(&mut run.rng, dt);

    if let Some(index) = first_collision(&run.player.hitbox, &run.obstacles) {
        log::debug!("Collision with obstacle #{} at tick {}", index, run.ticks);
        run.crashed = true;
        events.push(RunEvent::Crashed);
    }

    events
}

/// Step the checkpoint index up to the current distance, one index at a time
fn advance_checkpoints(run: &mut RunState, events: &mut Vec<RunEvent>) {
    let reached = (run.distance / CHECKPOINT_STEP).floor() as i64;
    while run.last_checkpoint < reached {
        run.last_checkpoint += 1;
        if run.last_checkpoint > 0 {
            events.push(RunEvent::Checkpoint(run.last_checkpoint));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Obstacle;

    fn run_ticks(run: &mut RunState, n: usize, input: TickInput) -> Vec<RunEvent> {
        (0..n).flat_map(|_| tick(run, &input, SIM_DT)).collect()
    }

    #[test]
    fn test_distance_accumulates_linearly() {
        let mut run = RunState::new(1337, 1);
        // Keep the lane clear so the run survives
        let mut elapsed = 0.0f64;
        for _ in 0..600 {
            run.obstacles.clear();
            run.spawner.timer = 0;
            tick(&mut run, &TickInput::default(), SIM_DT);
            elapsed += SIM_DT as f64;
        }
        let expected = DISTANCE_SPEED * elapsed;
        assert!((run.distance - expected).abs() < 1e-2);
        assert_eq!(run.ticks, 600);
    }

    #[test]
    fn test_first_tick_sets_checkpoint_zero_silently() {
        let mut run = RunState::new(1, 1);
        let events = tick(&mut run, &TickInput::default(), SIM_DT);
        assert_eq!(run.last_checkpoint, 0);
        assert!(!events.iter().any(|e| matches!(e, RunEvent::Checkpoint(_))));
    }

    #[test]
    fn test_checkpoints_fire_once_each() {
        let mut run = RunState::new(2, 1);
        let mut fired = Vec::new();
        // 0.5 s per tick => 10 distance units per tick
        for _ in 0..160 {
            run.obstacles.clear();
            run.spawner.timer = 0;
            for e in tick(&mut run, &TickInput::default(), 0.5) {
                if let RunEvent::Checkpoint(i) = e {
                    fired.push(i);
                }
            }
        }
        assert_eq!(run.distance, 1600.0);
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_large_step_crossing_two_checkpoints_fires_both() {
        let mut run = RunState::new(3, 1);
        tick(&mut run, &TickInput::default(), SIM_DT);
        run.obstacles.clear();
        let events = tick(&mut run, &TickInput::default(), 60.0);
        let indices: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                RunEvent::Checkpoint(i) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(run.last_checkpoint, 2);
    }

    #[test]
    fn test_jump_event_only_from_ground() {
        let mut run = RunState::new(4, 1);
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let events = tick(&mut run, &jump, SIM_DT);
        assert!(events.contains(&RunEvent::Jumped));
        let events = tick(&mut run, &jump, SIM_DT);
        assert!(!events.contains(&RunEvent::Jumped));
    }

    #[test]
    fn test_duck_jump_emits_no_jump_event() {
        let mut run = RunState::new(4, 1);
        let duck = TickInput {
            duck_held: true,
            ..Default::default()
        };
        tick(&mut run, &duck, SIM_DT);
        assert!(run.player.ducking);

        let jump = TickInput {
            jump: true,
            duck_held: true,
        };
        let events = tick(&mut run, &jump, SIM_DT);
        assert!(run.player.on_ground);
        assert!(!events.contains(&RunEvent::Jumped));
    }

    #[test]
    fn test_distance_stays_linear_on_long_runs() {
        let mut run = RunState::new(1337, 1);
        run.distance = 70_000.0;
        run.last_checkpoint = 140;
        for _ in 0..600 {
            run.obstacles.clear();
            run.spawner.timer = 0;
            tick(&mut run, &TickInput::default(), SIM_DT);
        }
        let gained = run.distance - 70_000.0;
        let expected = DISTANCE_SPEED * SIM_DT as f64 * 600.0;
        assert!((gained - expected).abs() < 1e-6, "gained {gained}");
    }

    #[test]
    fn test_passed_obstacle_scores() {
        let mut run = RunState::new(5, 1);
        let mut obstacle = Obstacle::ground();
        // Place it behind the player, about to leave the screen
        let dx = -obstacle.visual.right() + 1.0;
        obstacle.visual.shift_x(dx);
        obstacle.hitbox.shift_x(dx);
        run.obstacles.push(obstacle);
        let events = tick(&mut run, &TickInput::default(), SIM_DT);
        assert!(events.contains(&RunEvent::ObstaclePassed));
        assert_eq!(run.score, 1);
        assert!(run.obstacles.is_empty());
    }

    #[test]
    fn test_crash_happens_once_and_freezes_run() {
        let mut run = RunState::new(1337, 1);
        let events = run_ticks(&mut run, 2_000, TickInput::default());
        let crashes = events.iter().filter(|e| **e == RunEvent::Crashed).count();
        assert_eq!(crashes, 1);
        assert!(run.crashed);

        let ticks = run.ticks;
        let distance = run.distance;
        assert!(tick(&mut run, &TickInput::default(), SIM_DT).is_empty());
        assert_eq!(run.ticks, ticks);
        assert_eq!(run.distance, distance);
    }

    #[test]
    fn test_standing_player_hit_by_first_cactus_on_tick_88_after_spawn() {
        let mut run = RunState::new(1337, 1);
        let spawn_tick = run.spawner.next_spawn as u64;
        let mut crash_tick = None;
        for _ in 0..500 {
            let events = tick(&mut run, &TickInput::default(), SIM_DT);
            if events.contains(&RunEvent::Crashed) {
                crash_tick = Some(run.ticks);
                break;
            }
        }
        // The cactus moves once on its spawn tick, so the 88th move lands
        // 87 ticks after the spawn tick.
        assert_eq!(crash_tick, Some(spawn_tick + 87));
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = RunState::new(99_999, 2);
        let mut b = RunState::new(99_999, 2);
        let inputs = [
            TickInput::default(),
            TickInput {
                jump: true,
                duck_held: false,
            },
            TickInput {
                jump: false,
                duck_held: true,
            },
        ];
        for i in 0..400 {
            let input = inputs[i % inputs.len()];
            assert_eq!(tick(&mut a, &input, SIM_DT), tick(&mut b, &input, SIM_DT));
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.player.visual, b.player.visual);
    }
}

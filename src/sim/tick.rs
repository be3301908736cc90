//! Per-frame simulation step
//!
//! [`tick`] is the single transition function over [`GameState`]: input
//! edges, phase machine, physics, pillar stream and collision/scoring all
//! advance here, in distinct passes, with no rendering or platform
//! dependencies. Gravity and scroll speed are applied once per call;
//! `delta_ms` only feeds the spawn accumulator and the animation timers.

use super::collision::{craft_hits_pipe, craft_out_of_bounds, craft_passed_pipe};
use super::state::{GamePhase, GameState};

/// Input edges latched since the previous frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Key/touch press ("activate") occurred
    pub activate: bool,
    /// Key/touch release ("deactivate") occurred
    pub deactivate: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, delta_ms: f64) {
    state.frames += 1;

    if input.activate {
        match state.phase {
            GamePhase::Idle => {
                state.phase = GamePhase::Running;
                state.craft.apply_lift();
                state.boosting = true;
                log::info!("run started (seed {})", state.seed);
            }
            GamePhase::Running => {
                state.craft.apply_lift();
                state.boosting = true;
            }
            GamePhase::Over => {
                // Back to the start screen; the next activate launches
                log::info!("run reset after score {}", state.score);
                state.reset();
            }
        }
    }
    if input.deactivate {
        state.boosting = false;
    }

    // The background animates on every screen, including Idle and Over
    state.background.advance(delta_ms);

    if state.phase != GamePhase::Running {
        return;
    }

    // Physics: one un-scaled gravity application per frame
    state.craft.integrate();

    if state.boosting {
        state.boost.advance(delta_ms);
    } else {
        state.boost.reset();
    }

    // Stream phases are kept distinct: advance/spawn, then recycle, then
    // collision and scoring over a stable collection
    state.pipes.advance(delta_ms, &mut state.rng);
    state.pipes.recycle();

    let mut collided = false;
    for pipe in &mut state.pipes.pipes {
        if craft_hits_pipe(&state.craft, pipe) {
            collided = true;
        }
        if !pipe.scored && craft_passed_pipe(&state.craft, pipe) {
            pipe.scored = true;
            state.score += 1;
            log::debug!("pillar cleared, score {}", state.score);
        }
    }

    if collided || craft_out_of_bounds(&state.craft) {
        state.phase = GamePhase::Over;
        log::info!("game over at score {}", state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pipes::PipePair;

    /// A typical display-refresh delta that never trips the spawn timer
    /// in a single frame
    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn activate() -> FrameInput {
        FrameInput {
            activate: true,
            deactivate: false,
        }
    }

    fn running_state() -> GameState {
        let mut state = GameState::new(1);
        tick(&mut state, &activate(), FRAME_MS);
        state
    }

    fn pipe_at(x: f32, top: f32) -> PipePair {
        PipePair {
            x,
            top,
            bottom: PLAYFIELD_HEIGHT - top - PIPE_GAP,
            scored: false,
        }
    }

    #[test]
    fn test_idle_ignores_time() {
        let mut state = GameState::new(1);
        for _ in 0..100 {
            tick(&mut state, &FrameInput::default(), FRAME_MS);
        }
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.craft.pos.y, CRAFT_START_Y);
        assert!(state.pipes.pipes.is_empty());
    }

    #[test]
    fn test_activate_from_idle_launches() {
        let mut state = GameState::new(1);
        tick(&mut state, &activate(), FRAME_MS);
        assert_eq!(state.phase, GamePhase::Running);
        // Lift applies before integration, so one frame of gravity is in
        assert_eq!(state.craft.velocity, LIFT + GRAVITY);
        assert!(state.boosting);
    }

    #[test]
    fn test_gravity_accumulates_linearly() {
        let mut state = running_state();
        state.craft.velocity = 0.0;
        state.craft.pos.y = CRAFT_START_Y;

        let mut expected_y = CRAFT_START_Y;
        let n = 10;
        for k in 1..=n {
            tick(&mut state, &FrameInput::default(), FRAME_MS);
            expected_y += GRAVITY * k as f32;
            assert!((state.craft.velocity - GRAVITY * k as f32).abs() < 1e-4);
        }
        assert!((state.craft.pos.y - expected_y).abs() < 1e-3);
    }

    #[test]
    fn test_end_to_end_first_frames() {
        // Spec scenario: y 300, velocity 0, one gravity application
        let mut state = running_state();
        state.craft.velocity = 0.0;
        state.craft.pos.y = 300.0;

        tick(&mut state, &FrameInput::default(), FRAME_MS);
        assert!((state.craft.velocity - 0.68).abs() < 1e-6);
        assert!((state.craft.pos.y - 300.68).abs() < 1e-4);

        tick(&mut state, &activate(), FRAME_MS);
        assert!((state.craft.velocity - (-11.0 + 0.68)).abs() < 1e-4);
    }

    #[test]
    fn test_deactivate_clears_boost_only() {
        let mut state = running_state();
        let v = state.craft.velocity;
        tick(
            &mut state,
            &FrameInput {
                activate: false,
                deactivate: true,
            },
            FRAME_MS,
        );
        assert!(!state.boosting);
        assert_eq!(state.phase, GamePhase::Running);
        assert!((state.craft.velocity - (v + GRAVITY)).abs() < 1e-4);
        assert_eq!(state.boost.frame(), 0);
    }

    #[test]
    fn test_scoring_exactly_once_per_pair() {
        let mut state = running_state();
        // Park the craft mid-gap so nothing collides
        state.craft.velocity = 0.0;
        state.craft.pos.y = 300.0;
        // A pair about to cross the craft's leading edge
        state
            .pipes
            .pipes
            .push_back(pipe_at(CRAFT_X - PIPE_WIDTH + 1.0, 250.0));

        tick(&mut state, &activate(), FRAME_MS);
        assert_eq!(state.score, 1);
        assert!(state.pipes.pipes[0].scored);

        tick(&mut state, &activate(), FRAME_MS);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_collision_transitions_to_over() {
        let mut state = running_state();
        state.craft.velocity = 0.0;
        state.craft.pos.y = 100.0;
        // Top segment reaching well below the craft
        state.pipes.pipes.push_back(pipe_at(CRAFT_X, 300.0));

        tick(&mut state, &FrameInput::default(), FRAME_MS);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_falling_out_of_bounds_ends_run() {
        let mut state = running_state();
        let mut frames = 0;
        while state.phase == GamePhase::Running {
            tick(&mut state, &FrameInput::default(), FRAME_MS);
            frames += 1;
            assert!(frames < 10_000, "craft never left the playfield");
        }
        assert_eq!(state.phase, GamePhase::Over);
        assert!(state.craft.pos.y + CRAFT_HEIGHT > PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_over_freezes_simulation() {
        let mut state = running_state();
        state.phase = GamePhase::Over;
        let y = state.craft.pos.y;
        tick(&mut state, &FrameInput::default(), FRAME_MS);
        assert_eq!(state.craft.pos.y, y);
    }

    #[test]
    fn test_activate_from_over_resets_to_idle() {
        let mut state = running_state();
        state.score = 7;
        state.pipes.pipes.push_back(pipe_at(200.0, 250.0));
        state.phase = GamePhase::Over;

        tick(&mut state, &activate(), FRAME_MS);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.pipes.pipes.is_empty());
        assert_eq!(state.craft.pos.y, CRAFT_START_Y);
        assert_eq!(state.craft.velocity, 0.0);
        assert!(!state.boosting);

        // Restart does not auto-launch: a second activate is required
        tick(&mut state, &activate(), FRAME_MS);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pipes_spawn_on_interval() {
        let mut state = running_state();
        // Keep the craft safe in the middle while time accumulates
        let frames_per_spawn = (PIPE_SPAWN_INTERVAL_MS / FRAME_MS).ceil() as u32 + 1;
        for _ in 0..frames_per_spawn {
            state.craft.velocity = 0.0;
            state.craft.pos.y = 300.0;
            tick(&mut state, &FrameInput::default(), FRAME_MS);
        }
        assert_eq!(state.pipes.pipes.len(), 1);
    }

    #[test]
    fn test_same_seed_same_run() {
        let script = |state: &mut GameState| {
            for frame in 0..600u32 {
                let input = FrameInput {
                    activate: frame % 20 == 0,
                    deactivate: frame % 20 == 10,
                };
                tick(state, &input, FRAME_MS);
            }
        };

        let mut a = GameState::new(77);
        let mut b = GameState::new(77);
        script(&mut a);
        script(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_snapshot_resumes_identically() {
        let mut state = running_state();
        for _ in 0..200 {
            state.craft.velocity = 0.0;
            state.craft.pos.y = 300.0;
            tick(&mut state, &FrameInput::default(), FRAME_MS);
        }

        let json = serde_json::to_string(&state).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();

        for _ in 0..200 {
            tick(&mut state, &FrameInput::default(), FRAME_MS);
            tick(&mut restored, &FrameInput::default(), FRAME_MS);
        }
        assert_eq!(state, restored);
    }
}

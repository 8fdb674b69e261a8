//! Game state module - the per-tick lifecycle driver
//!
//! Ties together the bird, the active pipe set, scoring, and the
//! running/game-over state machine. One call to [`GameState::tick`] advances
//! the simulation by exactly one tick; the caller supplies the real elapsed
//! time, which only feeds the spawn interval accumulator.

use crate::core::bird::Bird;
use crate::core::pipe::{Pipe, PipeTemplate};
use crate::core::rng::SimpleRng;
use crate::core::snapshot::{GameSnapshot, PipeSnapshot};
use crate::types::{FieldConfig, GameAction, SPAWN_INTERVAL_SECS};

/// What happened during one tick, for callers that need to react (the runner
/// persists the best score when `new_best` is set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Pipes passed this tick.
    pub scored: u32,
    /// Best score increased this tick and should be persisted.
    pub new_best: bool,
    /// The running -> game-over transition happened this tick.
    pub died: bool,
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: FieldConfig,
    /// Immutable geometry shared by all pipes in this session.
    pub template: PipeTemplate,
    pub bird: Bird,
    /// Active pipes, ordered by creation time.
    pub pipes: Vec<Pipe>,
    /// Session RNG for pipe geometry; substitute the seed in tests.
    pub rng: SimpleRng,
    pub score: u32,
    /// Monotonically non-decreasing across restarts.
    pub best: u32,
    pub game_over: bool,
    /// Real seconds since the last pipe spawn.
    pub spawn_timer: f32,
}

impl GameState {
    /// Create a new session with the given RNG seed.
    pub fn new(seed: u32, field: FieldConfig) -> Self {
        Self {
            field,
            template: PipeTemplate::new(field),
            bird: Bird::new(),
            pipes: Vec::new(),
            rng: SimpleRng::new(seed),
            score: 0,
            best: 0,
            game_over: false,
            spawn_timer: 0.0,
        }
    }

    /// Seed the session best from a persisted record.
    pub fn set_best(&mut self, best: u32) {
        self.best = best;
    }

    /// Handle a discrete input event. Flap is only honored while running,
    /// restart only while game over; anything else is dropped.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Flap => {
                if !self.game_over {
                    self.bird.jump();
                }
            }
            GameAction::Restart => {
                if self.game_over {
                    self.restart();
                }
            }
        }
    }

    /// Reinitialize the session: fresh bird, no pipes, score 0. The best
    /// score and the RNG stream survive the restart.
    fn restart(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0;
        self.game_over = false;
        self.spawn_timer = 0.0;
    }

    /// Advance the simulation by one tick. `dt_secs` is the real time the
    /// frame took and only drives the spawn interval.
    ///
    /// While game over, the simulation is frozen: nothing moves and the
    /// outcome is empty until a restart is applied.
    pub fn tick(&mut self, dt_secs: f32) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.game_over {
            return outcome;
        }

        self.spawn_timer += dt_secs;
        self.bird.update();

        // One spawn per tick, even after a long frame: the accumulator resets
        // to zero instead of carrying the overshoot.
        if self.spawn_timer > SPAWN_INTERVAL_SECS {
            let pipe = Pipe::new(self.field.width, &self.template, &mut self.rng);
            self.pipes.push(pipe);
            self.spawn_timer = 0.0;
        }

        let bird_bounds = self.bird.bounds();
        for pipe in &mut self.pipes {
            pipe.update();

            // Scores on the leading edge crossing the bird's x, once.
            if !pipe.passed && pipe.x < self.bird.x {
                pipe.passed = true;
                self.score += 1;
                outcome.scored += 1;
            }

            // Every pipe is checked even if an earlier one already ended the
            // game this tick; the transition is idempotent.
            if pipe.check_collision(&bird_bounds) {
                self.game_over = true;
            }
        }

        self.pipes.retain(|pipe| !pipe.is_expired());

        if self.bird.y < 0.0 || self.bird.y > self.field.height {
            self.game_over = true;
        }

        if self.score > self.best {
            self.best = self.score;
            outcome.new_best = true;
        }

        outcome.died = self.game_over;
        outcome
    }

    /// Read-only view for the render layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            field: self.field,
            bird_y: self.bird.y,
            bird_velocity: self.bird.velocity,
            bird_bounds: self.bird.bounds(),
            pipes: self
                .pipes
                .iter()
                .map(|p| PipeSnapshot {
                    x: p.x,
                    gap_y: p.gap_y,
                    top: p.top_rect(),
                    bottom: p.bottom_rect(),
                    passed: p.passed,
                })
                .collect(),
            score: self.score,
            best: self.best,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FIELD_HEIGHT, GRAVITY};

    fn new_game() -> GameState {
        GameState::new(12345, FieldConfig::default())
    }

    #[test]
    fn test_tick_applies_gravity() {
        let mut state = new_game();
        state.tick(0.016);
        assert_eq!(state.bird.velocity, GRAVITY);
        assert_eq!(state.bird.y, 300.0 + GRAVITY);
    }

    #[test]
    fn test_flap_ignored_after_game_over() {
        let mut state = new_game();
        state.game_over = true;
        let v0 = state.bird.velocity;
        state.apply_action(GameAction::Flap);
        assert_eq!(state.bird.velocity, v0);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = new_game();
        state.score = 3;
        state.apply_action(GameAction::Restart);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_ceiling_ends_game() {
        let mut state = new_game();
        state.bird.y = -20.0;
        let outcome = state.tick(0.0);
        assert!(state.game_over);
        assert!(outcome.died);
    }

    #[test]
    fn test_floor_ends_game() {
        let mut state = new_game();
        state.bird.y = FIELD_HEIGHT + 1.0;
        state.tick(0.0);
        assert!(state.game_over);
    }

    #[test]
    fn test_best_tracks_score() {
        let mut state = new_game();
        state.set_best(2);
        state.score = 2;

        // Plant an unpassed pipe just ahead of the bird, gap around it.
        let mut rng = SimpleRng::new(1);
        let mut pipe = Pipe::new(state.field.width, &state.template, &mut rng);
        pipe.x = state.bird.x + 1.0;
        pipe.gap_y = 200.0; // gap spans 200..400; the bird at ~300 flies clear
        state.pipes.push(pipe);

        let outcome = state.tick(0.0);
        assert_eq!(outcome.scored, 1);
        assert_eq!(state.score, 3);
        assert_eq!(state.best, 3);
        assert!(outcome.new_best);
    }
}

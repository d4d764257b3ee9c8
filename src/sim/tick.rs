//! Fixed-rate session tick
//!
//! Advances one `GameState` by a single frame. Paused and finished
//! sessions do not move at all.

use super::collision::ball_missed;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the session by one frame at time `now_ms`
pub fn tick(state: &mut GameState, now_ms: u64, events: &mut Vec<GameEvent>) {
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Countdown => {
            tick_countdown(state, now_ms, events);
            return;
        }
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    if ball_missed(state.board.ball.rect, state.bounds()) {
        state.lose_life(events);
        return;
    }

    let first = events.len();
    state.board.step(Some(&state.paddle), events);
    state.paddle.update(state.bounds());

    let hits = events[first..]
        .iter()
        .filter(|e| matches!(e, GameEvent::TargetHit { .. }))
        .count() as u64;
    state.score += hits * TARGET_POINTS;
}

/// The countdown arms on its first tick and hands over to play once the
/// full duration has passed
fn tick_countdown(state: &mut GameState, now_ms: u64, events: &mut Vec<GameEvent>) {
    let started = *state.countdown_started_at.get_or_insert_with(|| {
        events.push(GameEvent::CountdownStarted);
        now_ms
    });
    state.countdown_elapsed = now_ms.saturating_sub(started);
    if state.countdown_elapsed >= COUNTDOWN_MS {
        state.phase = GamePhase::Running;
        state.countdown_started_at = None;
        events.push(GameEvent::CountdownFinished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::Rect;
    use crate::sim::state::SessionConfig;
    use glam::IVec2;

    const SCREEN: Rect = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

    fn running_state() -> GameState {
        let mut state = GameState::new(SCREEN, SessionConfig::default());
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_countdown_to_running() {
        let mut state = GameState::new(SCREEN, SessionConfig::default());
        let mut events = Vec::new();

        tick(&mut state, 10_000, &mut events);
        assert_eq!(state.countdown_started_at, Some(10_000));
        assert_eq!(events, [GameEvent::CountdownStarted]);

        tick(&mut state, 11_500, &mut events);
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.countdown_digit(), Some(2));

        tick(&mut state, 13_100, &mut events);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(events.last(), Some(&GameEvent::CountdownFinished));
    }

    #[test]
    fn test_countdown_does_not_move_ball() {
        let mut state = GameState::new(SCREEN, SessionConfig::default());
        let start = state.board.ball.rect.pos;
        tick(&mut state, 0, &mut Vec::new());
        tick(&mut state, 500, &mut Vec::new());
        assert_eq!(state.board.ball.rect.pos, start);
    }

    #[test]
    fn test_restart_rearms_countdown() {
        let mut state = GameState::new(SCREEN, SessionConfig::default());
        tick(&mut state, 0, &mut Vec::new());
        tick(&mut state, 3000, &mut Vec::new());
        assert_eq!(state.phase, GamePhase::Running);

        state.restart();
        let mut events = Vec::new();
        tick(&mut state, 5000, &mut events);
        assert_eq!(state.countdown_started_at, Some(5000));
        assert_eq!(events, [GameEvent::CountdownStarted]);
    }

    #[test]
    fn test_paused_session_is_frozen() {
        let mut state = running_state();
        state.paddle.set_moving_left(true);
        state.toggle_pause();
        let ball = state.board.ball.rect.pos;
        let paddle = state.paddle.rect.pos;
        let mut events = Vec::new();
        for t in 0..30 {
            tick(&mut state, t, &mut events);
        }
        assert_eq!(state.board.ball.rect.pos, ball);
        assert_eq!(state.paddle.rect.pos, paddle);
        assert!(events.is_empty());
    }

    #[test]
    fn test_miss_with_lives_left_returns_to_countdown() {
        let mut state = running_state();
        state.score = 400;
        state.board.ball.rect.pos = IVec2::new(300, SCREEN_HEIGHT + 1);
        let mut events = Vec::new();
        tick(&mut state, 0, &mut events);
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.attempts_remaining, 2);
        assert_eq!(state.score, 400);
        assert_eq!(state.board.ball.rect.center(), SCREEN.center());
        assert_eq!(events, [GameEvent::LifeLost { remaining: 2 }]);
    }

    #[test]
    fn test_last_miss_freezes_session() {
        let mut state = running_state();
        state.attempts_remaining = 1;
        state.board.ball.rect.pos = IVec2::new(300, SCREEN_HEIGHT + 1);
        let mut events = Vec::new();
        tick(&mut state, 0, &mut events);
        assert_eq!(state.phase, GamePhase::GameOver);

        let ball = state.board.ball.rect.pos;
        let ticks = state.time_ticks;
        events.clear();
        for t in 1..60 {
            tick(&mut state, t, &mut events);
        }
        assert_eq!(state.board.ball.rect.pos, ball);
        assert_eq!(state.time_ticks, ticks);
        assert!(events.is_empty());
    }

    #[test]
    fn test_target_hit_scores_points() {
        let mut state = running_state();
        // Rising into the bottom row of the wall
        state.board.ball.rect.pos = IVec2::new(70, 157);
        state.board.ball.vel = IVec2::new(2, -2);
        let mut events = Vec::new();
        tick(&mut state, 0, &mut events);
        assert_eq!(state.score, TARGET_POINTS);
        assert!(state.board.ball.vel.y > 0);
    }
}

//! Game phase state machine

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-run
    Paused,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Something that can move the game between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseEvent {
    Start,
    TogglePause,
    PlayerDied,
    Restart,
}

impl GamePhase {
    /// Phase reached by applying `event`, or an error if the move is illegal
    pub fn transition(self, event: PhaseEvent) -> Result<GamePhase, TransitionError> {
        use GamePhase::*;
        use PhaseEvent::*;

        match (self, event) {
            (Menu, Start) => Ok(Playing),
            (Playing, TogglePause) => Ok(Paused),
            (Paused, TogglePause) => Ok(Playing),
            (Playing, PlayerDied) => Ok(GameOver),
            (GameOver, Restart) => Ok(Playing),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    /// Whether the simulation step runs in this phase
    #[inline]
    pub fn is_simulating(self) -> bool {
        self == GamePhase::Playing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "Menu",
            GamePhase::Playing => "Playing",
            GamePhase::Paused => "Paused",
            GamePhase::GameOver => "Game Over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_legal_transitions() {
        use GamePhase::*;
        use PhaseEvent::*;

        assert_eq!(Menu.transition(Start), Ok(Playing));
        assert_eq!(Playing.transition(TogglePause), Ok(Paused));
        assert_eq!(Paused.transition(TogglePause), Ok(Playing));
        assert_eq!(Playing.transition(PlayerDied), Ok(GameOver));
        assert_eq!(GameOver.transition(Restart), Ok(Playing));
    }

    #[test]
    fn test_menu_cannot_die() {
        let err = GamePhase::Menu.transition(PhaseEvent::PlayerDied).unwrap_err();
        assert_eq!(err.from, GamePhase::Menu);
        assert_eq!(err.event, PhaseEvent::PlayerDied);
    }

    #[test]
    fn test_game_over_only_restarts() {
        for event in [PhaseEvent::Start, PhaseEvent::TogglePause, PhaseEvent::PlayerDied] {
            assert!(GamePhase::GameOver.transition(event).is_err());
        }
    }

    fn any_event() -> impl Strategy<Value = PhaseEvent> {
        prop_oneof![
            Just(PhaseEvent::Start),
            Just(PhaseEvent::TogglePause),
            Just(PhaseEvent::PlayerDied),
            Just(PhaseEvent::Restart),
        ]
    }

    proptest! {
        #[test]
        fn prop_never_returns_to_menu(events in prop::collection::vec(any_event(), 0..64)) {
            let mut phase = GamePhase::Menu;
            let mut started = false;
            for event in events {
                if let Ok(next) = phase.transition(event) {
                    phase = next;
                    started = true;
                }
                if started {
                    prop_assert_ne!(phase, GamePhase::Menu);
                }
            }
        }
    }
}

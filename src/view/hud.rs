//! Status line shown over the board

use crate::sim::{GameState, Outcome};

pub fn hud_message(state: &GameState, ships_to_win: u32) -> String {
    match state.outcome {
        Outcome::Victory => "You win!".to_string(),
        Outcome::Defeat => "You lost :-(".to_string(),
        Outcome::Pending => {
            let remaining = ships_to_win.saturating_sub(state.ships_sunk);
            format!("Sink {} more!", remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Simulation;

    #[test]
    fn test_messages() {
        let mut sim = Simulation::new(0);
        let s = sim.start(800.0, 600.0);
        assert_eq!(hud_message(&s, 3), "Sink 3 more!");

        let s = GameState { ships_sunk: 2, ..s };
        assert_eq!(hud_message(&s, 3), "Sink 1 more!");

        let won = GameState { outcome: Outcome::Victory, ..s.clone() };
        assert_eq!(hud_message(&won, 3), "You win!");
        let lost = GameState { outcome: Outcome::Defeat, ..s };
        assert_eq!(hud_message(&lost, 3), "You lost :-(");
    }
}

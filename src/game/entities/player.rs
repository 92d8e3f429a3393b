use log::warn;

use crate::game::types::Player;

/// Build the starting roster: everyone at the origin with full health and nothing collected.
/// Blank names are replaced with `Player N`.
pub fn spawn_roster(names: &[String], initial_health: i32) -> Vec<Player> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.trim();
            if name.is_empty() {
                warn!("[Roster] Player {} has a blank name, using a default", i + 1);
                Player::new(format!("Player {}", i + 1), initial_health)
            } else {
                Player::new(name, initial_health)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Position;

    #[test]
    fn test_roster_starts_at_origin() {
        let names = vec!["Ann".to_string(), "  ".to_string()];
        let roster = spawn_roster(&names, 10);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Ann");
        assert_eq!(roster[1].name, "Player 2");
        for player in &roster {
            assert_eq!(player.pos, Position::new(0, 0));
            assert_eq!((player.health, player.score, player.keys), (10, 0, 0));
        }
    }
}

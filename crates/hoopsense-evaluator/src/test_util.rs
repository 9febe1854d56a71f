use hoopsense_engine::{
    CourtDimensions, GameState, GameStateParams, Player, PlayerId, Point, Position, Possession,
    TeamId, Zone,
};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;

/// A player occupying a 1 m box centered on `(x, y)`.
pub(crate) fn player(id: PlayerId, team: TeamId, x: f64, y: f64) -> Player {
    Player::new(id, team, Position::around(Point::new(x, y), 0.5), None)
}

pub(crate) fn zoned_player(id: PlayerId, team: TeamId, x: f64, y: f64, zone: Zone) -> Player {
    Player::new(id, team, Position::around(Point::new(x, y), 0.5), Some(zone))
}

pub(crate) fn state(players: Vec<Player>, possession: Possession, timestamp: f64) -> GameState {
    GameState::new(GameStateParams::new(
        players,
        Position::around(Point::new(14.0, 7.5), 0.1),
        possession,
        CourtDimensions::default().default_baskets(),
        timestamp,
    ))
    .unwrap()
}

pub(crate) fn team1_ball() -> Possession {
    Possession::Team(TeamId::Team1)
}

pub(crate) fn team2_ball() -> Possession {
    Possession::Team(TeamId::Team2)
}

/// Random 5v5 snapshot anywhere on a standard court.
pub(crate) fn random_state(seed: u64) -> GameState {
    let mut rng = Pcg32::seed_from_u64(seed);
    let players = (1..=10)
        .map(|id| {
            let team = if id <= 5 { TeamId::Team1 } else { TeamId::Team2 };
            let x = rng.random_range(0.0..28.0);
            let y = rng.random_range(0.0..15.0);
            if rng.random_bool(0.3) {
                let zone = Zone::new(x - 3.0, y - 3.0, x + rng.random_range(-1.0..3.0), y + 3.0);
                zoned_player(id, team, x, y, zone)
            } else {
                player(id, team, x, y)
            }
        })
        .collect();
    let possession = match rng.random_range(0..3) {
        0 => Possession::Loose,
        1 => team1_ball(),
        _ => team2_ball(),
    };
    state(players, possession, rng.random_range(0.0..2400.0))
}

use crate::domain::PlayerRecord;

// Total value   = 0.5 * win contribution + 0.5 * total stats
// Win contribution = level of impact * quality of impact
// Level of impact  = team win ratio * minutes per game / 48 * usage rate / 100
// Quality of impact = 0.4 * (VORP + win shares) + 0.2 * box plus/minus
// Total stats   = (pts * TS% + 1.5 ast + 1.2 trb + 3 blk + 3 stl - pf - tov) / 25

/// Composite value score for one validated record. Pure and deterministic;
/// validation already guarantees every input is finite, so the only guarded
/// edge is a team with zero games played.
pub fn player_value(player: &PlayerRecord) -> f64 {
    let team_win_ratio = if player.team_games_played > 0 {
        f64::from(player.team_wins) / f64::from(player.team_games_played)
    } else {
        0.0
    };

    let minutes_factor = player.minutes_per_game / 48.0;
    let usage_factor = player.usage_rate / 100.0;
    let level_of_impact = team_win_ratio * minutes_factor * usage_factor;

    let quality_of_impact =
        0.4 * (player.value_over_replacement + player.win_share) + 0.2 * player.box_plus_minus;

    let win_contribution = level_of_impact * quality_of_impact;

    let total_stats = (player.points_per_game * player.true_shooting_percentage
        + 1.5 * player.assists_per_game
        + 1.2 * player.rebounds_per_game
        + 3.0 * player.blocks_per_game
        + 3.0 * player.steals_per_game
        - player.fouls_per_game
        - player.turnovers_per_game)
        / 25.0;

    0.5 * win_contribution + 0.5 * total_stats
}

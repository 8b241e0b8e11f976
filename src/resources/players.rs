//! Player records and the player lookup endpoint.

use serde::{Deserialize, Serialize};

use super::common::impl_json_display;
use super::{ClanReference, Label, League};
use crate::client::CocClient;
use crate::clients::QueryParams;
use crate::error::CocError;

/// A player profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    /// Achievement progress.
    pub achievements: Vec<PlayerAchievement>,
    /// Multiplayer attacks won this season.
    pub attack_wins: i32,
    /// Highest trophy count ever reached.
    pub best_trophies: i32,
    /// Highest builder base trophy count ever reached.
    pub best_versus_trophies: i32,
    /// Builder hall level.
    pub builder_hall_level: i32,
    /// Clan the player belongs to, if any.
    pub clan: ClanReference,
    /// Defenses won this season.
    pub defense_wins: i32,
    /// Troops donated this season.
    pub donations: i32,
    /// Troops received this season.
    pub donations_received: i32,
    /// Experience level.
    pub exp_level: i32,
    /// Unlocked heroes.
    pub heroes: Vec<Troop>,
    /// Labels chosen for the profile.
    pub labels: Vec<Label>,
    /// Current trophy league.
    pub league: League,
    /// Display name.
    pub name: String,
    /// Role in the clan.
    pub role: String,
    /// Unlocked spells.
    pub spells: Vec<Troop>,
    /// Unique tag, including the leading `#`.
    pub tag: String,
    /// Town hall level.
    pub town_hall_level: i32,
    /// Unlocked troops.
    pub troops: Vec<Troop>,
    /// Current trophy count.
    pub trophies: i32,
    /// Builder base battles won in total.
    pub versus_battle_win_count: i32,
    /// Builder base battles won.
    pub versus_battle_wins: i32,
    /// Builder base trophy count.
    pub versus_trophies: i32,
    /// Total stars earned in clan wars.
    pub war_stars: i32,
}

/// Progress on a single achievement.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerAchievement {
    /// Progress text shown once the achievement is complete.
    pub completion_info: String,
    /// What the achievement asks for.
    pub info: String,
    /// Achievement name.
    pub name: String,
    /// Stars earned so far.
    pub stars: i32,
    /// Value needed for the next star.
    pub target: i32,
    /// Current progress value.
    pub value: i32,
    /// `home` or `builderBase`.
    pub village: String,
}

/// A troop, hero or spell with its level.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Troop {
    /// Current level.
    pub level: i32,
    /// Highest level available.
    pub max_level: i32,
    /// Unit name.
    pub name: String,
    /// `home` or `builderBase`.
    pub village: String,
}

/// A player's position in a location's ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRanking {
    /// Clan of the player.
    pub clan: ClanReference,
    /// Current trophy league.
    pub league: League,
    /// Multiplayer attacks won this season.
    pub attack_wins: i32,
    /// Defenses won this season.
    pub defense_wins: i32,
    /// Unique tag, including the leading `#`.
    pub tag: String,
    /// Display name.
    pub name: String,
    /// Experience level.
    pub exp_level: i32,
    /// Current rank.
    pub rank: i32,
    /// Rank at the previous update.
    pub previous_rank: i32,
    /// Current trophy count.
    pub trophies: i32,
}

/// A player's position in a location's builder base (versus) ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerVersusRanking {
    /// Clan of the player.
    pub clan: ClanReference,
    /// Builder base battles won.
    pub versus_battle_wins: i32,
    /// Unique tag, including the leading `#`.
    pub tag: String,
    /// Display name.
    pub name: String,
    /// Experience level.
    pub exp_level: i32,
    /// Current rank.
    pub rank: i32,
    /// Rank at the previous update.
    pub previous_rank: i32,
    /// Builder base trophy count.
    pub versus_trophies: i32,
}

impl_json_display!(Player, PlayerAchievement, Troop, PlayerRanking, PlayerVersusRanking);

impl CocClient {
    /// Retrieves information about the player with the given tag.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::Http`] on a non-200 status or transport failure,
    /// and [`CocError::Decode`] if the body is not a player.
    pub async fn get_player(&self, tag: &str) -> Result<Player, CocError> {
        let url = self.url().path("players").tag(tag);
        self.fetch(&url, &QueryParams::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_decodes_nested_records() {
        let json = r##"{
            "tag": "#PLAYER",
            "name": "Chief",
            "townHallLevel": 14,
            "clan": {"tag": "#2PP", "name": "Clash Bros", "clanLevel": 12},
            "league": {"id": 29000022, "name": "Legend League"},
            "heroes": [{"name": "Barbarian King", "level": 80, "maxLevel": 85, "village": "home"}],
            "achievements": [{"name": "Gold Grab", "stars": 3, "value": 2000000000, "target": 100000000, "village": "home"}]
        }"##;
        let player: Player = serde_json::from_str(json).unwrap();

        assert_eq!(player.town_hall_level, 14);
        assert_eq!(player.clan.tag, "#2PP");
        assert_eq!(player.league.name, "Legend League");
        assert_eq!(player.heroes[0].max_level, 85);
        assert_eq!(player.achievements[0].stars, 3);
        assert!(player.spells.is_empty());
    }
}

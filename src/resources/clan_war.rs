//! Clan war records, the war log and the current war endpoint.

use serde::{Deserialize, Serialize};

use super::common::{impl_json_display, BadgeUrls};
use crate::client::CocClient;
use crate::clients::QueryParams;
use crate::error::CocError;
use crate::time::CocTime;

/// War state reported for a clan that is not at war.
pub const NOT_IN_WAR: &str = "notInWar";

/// A clan war, either ongoing or from the war log.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWar {
    /// `notInWar`, `preparation`, `inWar` or `warEnded`; absent in war log entries.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    /// Number of participants per side.
    pub team_size: i32,
    /// When preparation day started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_start_time: Option<CocTime>,
    /// When the battle day starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<CocTime>,
    /// When the battle day ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<CocTime>,
    /// `win`, `lose` or `tie`; only present in war log entries.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub result: String,
    /// The queried clan's side.
    pub clan: ClanWarTeam,
    /// The opposing clan.
    pub opponent: ClanWarTeam,
}

/// One side of a clan war.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarTeam {
    /// Attacks used.
    pub attacks: i32,
    /// Badge image URLs.
    pub badge_urls: BadgeUrls,
    /// Clan level.
    pub clan_level: i32,
    /// Destruction percentage.
    pub destruction_percentage: f64,
    /// Clan experience earned from the war.
    pub exp_earned: i32,
    /// Members of this side.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ClanWarMember>,
    /// Clan name; empty for war log entries of league rounds.
    pub name: String,
    /// Stars earned in the war.
    pub stars: i32,
    /// Unique tag, including the leading `#`.
    pub tag: String,
}

/// A war participant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarMember {
    /// Attacks made by this member.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attacks: Vec<ClanWarAttack>,
    /// Strongest attack made against this member, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_opponent_attack: Option<ClanWarAttack>,
    /// Position on the war map, starting at 1.
    pub map_position: i32,
    /// Display name.
    pub name: String,
    /// Attacks received from the opponent.
    pub opponent_attacks: i32,
    /// Unique tag, including the leading `#`.
    pub tag: String,
    /// Town hall level.
    pub townhall_level: i32,
}

/// A single attack in a clan war.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarAttack {
    /// Order of the attack within the war.
    pub order: i32,
    /// Tag of the attacking player.
    pub attacker_tag: String,
    /// Tag of the defending player.
    pub defender_tag: String,
    /// Stars earned by the attack.
    pub stars: i32,
    /// Destruction percentage of the attack.
    pub destruction_percentage: i32,
    /// Attack duration in seconds.
    pub duration: i32,
}

impl ClanWar {
    /// Returns `true` if the queried clan is not at war.
    #[must_use]
    pub fn is_not_in_war(&self) -> bool {
        self.state == NOT_IN_WAR
    }
}

impl_json_display!(ClanWar, ClanWarTeam, ClanWarMember, ClanWarAttack);

impl CocClient {
    /// Lists the wars a clan has taken part in.
    ///
    /// Clan war league rounds show up in the war log without an opponent
    /// name; those entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::Http`] on a non-200 status or transport failure
    /// (403 if the clan's war log is private), and [`CocError::Decode`] if
    /// the body cannot be decoded.
    pub async fn get_clan_war_log(
        &self,
        tag: &str,
        params: &QueryParams,
    ) -> Result<Vec<ClanWar>, CocError> {
        let url = self.url().path("clans").tag(tag).path("warlog");
        let mut wars: Vec<ClanWar> = self.fetch_items(&url, params).await?;
        wars.retain(|war| !war.opponent.name.is_empty());
        Ok(wars)
    }

    /// Retrieves the war a clan is currently taking part in.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::NotInWar`] if the clan is not at war, otherwise
    /// the errors of [`CocClient::get_clan_war_log`].
    pub async fn get_current_war(&self, tag: &str) -> Result<ClanWar, CocError> {
        let url = self.url().path("clans").tag(tag).path("currentwar");
        let war: ClanWar = self.fetch(&url, &QueryParams::new()).await?;
        if war.is_not_in_war() {
            tracing::debug!("Clan {} is not in a war", tag);
            return Err(CocError::NotInWar {
                tag: tag.to_string(),
            });
        }
        Ok(war)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_war_decodes_compact_timestamps() {
        let json = r##"{
            "state": "inWar",
            "teamSize": 15,
            "preparationStartTime": "20230114T093000.000Z",
            "startTime": "20230115T093000.000Z",
            "endTime": "20230116T093000.000Z",
            "clan": {"tag": "#2PP", "name": "Clash Bros", "stars": 30, "destructionPercentage": 87.5,
                     "members": [{"tag": "#A", "name": "a", "mapPosition": 1, "townhallLevel": 14,
                                  "attacks": [{"attackerTag": "#A", "defenderTag": "#B", "stars": 3, "destructionPercentage": 100, "order": 1}]}]},
            "opponent": {"tag": "#9XY", "name": "Rivals"}
        }"##;
        let war: ClanWar = serde_json::from_str(json).unwrap();

        assert_eq!(war.team_size, 15);
        assert_eq!(war.start_time.unwrap().format(), "20230115T093000.000Z");
        assert!(war.end_time.unwrap() > war.start_time.unwrap());
        assert!((war.clan.destruction_percentage - 87.5).abs() < f64::EPSILON);
        assert_eq!(war.clan.members[0].attacks[0].stars, 3);
        assert!(war.clan.members[0].best_opponent_attack.is_none());
        assert!(!war.is_not_in_war());
    }

    #[test]
    fn test_war_rejects_malformed_timestamp() {
        let json = r#"{"state": "inWar", "startTime": "2023-01-15T09:30:00Z"}"#;
        assert!(serde_json::from_str::<ClanWar>(json).is_err());
    }

    #[test]
    fn test_not_in_war_state() {
        let war: ClanWar = serde_json::from_str(r#"{"state": "notInWar"}"#).unwrap();
        assert!(war.is_not_in_war());
        assert!(war.start_time.is_none());
    }

    #[test]
    fn test_war_display_reemits_compact_timestamps() {
        let war = ClanWar {
            start_time: Some("20230115T093000.000Z".parse().unwrap()),
            ..Default::default()
        };
        assert!(war.to_string().contains(r#""startTime":"20230115T093000.000Z""#));
    }
}

//! Clan records and the clan lookup endpoints.

use serde::{Deserialize, Serialize};

use super::common::{impl_json_display, BadgeUrls};
use super::{Label, League, Location, WarLeague};
use crate::client::CocClient;
use crate::clients::QueryParams;
use crate::error::CocError;

/// A clan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Clan {
    /// Badge image URLs.
    pub badge_urls: BadgeUrls,
    /// Clan level.
    pub clan_level: i32,
    /// Clan trophies.
    pub clan_points: i32,
    /// Clan builder base trophies.
    pub clan_versus_points: i32,
    /// Free-text description.
    pub description: String,
    /// Whether the war log can be read by anyone.
    pub is_war_log_public: bool,
    /// Labels chosen for the profile.
    pub labels: Vec<Label>,
    /// Home location.
    pub location: Location,
    /// Number of members.
    pub members: i32,
    /// Member list; only present on single-clan lookups.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub member_list: Vec<ClanMember>,
    /// Display name.
    pub name: String,
    /// Trophies needed to join.
    pub required_trophies: i32,
    /// Unique tag, including the leading `#`.
    pub tag: String,
    /// `open`, `inviteOnly` or `closed`.
    #[serde(rename = "type")]
    pub clan_type: String,
    /// How often the clan wars, e.g. `always` or `moreThanOncePerWeek`.
    pub war_frequency: String,
    /// Current clan war league.
    pub war_league: WarLeague,
    /// Wars lost.
    pub war_losses: i32,
    /// Wars tied.
    pub war_ties: i32,
    /// Wars won.
    pub war_wins: i32,
    /// Current streak of wars won.
    pub war_win_streak: i32,
}

/// A member of a clan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanMember {
    /// Position within the clan by trophies.
    pub clan_rank: i32,
    /// Troops donated this season.
    pub donations: i32,
    /// Troops received this season.
    pub donations_received: i32,
    /// Experience level.
    pub exp_level: i32,
    /// Current trophy league.
    pub league: League,
    /// Display name.
    pub name: String,
    /// Position within the clan at the previous update.
    pub previous_clan_rank: i32,
    /// `member`, `admin`, `coLeader` or `leader`.
    pub role: String,
    /// Unique tag, including the leading `#`.
    pub tag: String,
    /// Current trophy count.
    pub trophies: i32,
    /// Builder base trophy count.
    pub versus_trophies: i32,
}

/// A short reference to a clan, embedded in player and ranking records.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanReference {
    /// Badge image URLs.
    pub badge_urls: BadgeUrls,
    /// Clan level.
    pub clan_level: i32,
    /// Display name.
    pub name: String,
    /// Unique tag, including the leading `#`.
    pub tag: String,
}

/// A clan's position in a location's clan ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanRanking {
    /// Badge image URLs.
    pub badge_urls: BadgeUrls,
    /// Clan level.
    pub clan_level: i32,
    /// Clan trophies.
    pub clan_points: i32,
    /// Location of the clan.
    pub location: Location,
    /// Number of members.
    pub members: i32,
    /// Display name.
    pub name: String,
    /// Rank at the previous update.
    pub previous_rank: i32,
    /// Current rank.
    pub rank: i32,
    /// Unique tag, including the leading `#`.
    pub tag: String,
}

/// A clan's position in a location's builder base (versus) ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanVersusRanking {
    /// Badge image URLs.
    pub badge_urls: BadgeUrls,
    /// Clan level.
    pub clan_level: i32,
    /// Clan trophies.
    pub clan_points: i32,
    /// Clan builder base trophies.
    pub clan_versus_points: i32,
    /// Location of the clan.
    pub location: Location,
    /// Number of members.
    pub members: i32,
    /// Display name.
    pub name: String,
    /// Rank at the previous update.
    pub previous_rank: i32,
    /// Current rank.
    pub rank: i32,
    /// Unique tag, including the leading `#`.
    pub tag: String,
}

impl_json_display!(Clan, ClanMember, ClanReference, ClanRanking, ClanVersusRanking);

impl CocClient {
    /// Retrieves information about the clan with the given tag.
    ///
    /// The `#` marker is optional.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::Http`] on a non-200 status or transport failure,
    /// and [`CocError::Decode`] if the body is not a clan.
    pub async fn get_clan(&self, tag: &str) -> Result<Clan, CocError> {
        let url = self.url().path("clans").tag(tag);
        self.fetch(&url, &QueryParams::new()).await
    }

    /// Searches clans matching the query parameters (`name`, `minMembers`,
    /// `locationId`, `limit`, ...).
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_clan`].
    pub async fn search_clans(&self, params: &QueryParams) -> Result<Vec<Clan>, CocError> {
        let url = self.url().path("clans");
        self.fetch_items(&url, params).await
    }

    /// Lists the members of a clan.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_clan`].
    pub async fn get_clan_members(
        &self,
        tag: &str,
        params: &QueryParams,
    ) -> Result<Vec<ClanMember>, CocError> {
        let url = self.url().path("clans").tag(tag).path("members");
        self.fetch_items(&url, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clan_decodes_api_payload() {
        let json = r##"{
            "tag": "#2PP",
            "name": "Clash Bros",
            "type": "inviteOnly",
            "clanLevel": 12,
            "members": 48,
            "isWarLogPublic": true,
            "warLeague": {"id": 48000012, "name": "Crystal League I"},
            "labels": [{"id": 56000000, "name": "Clan Wars", "iconUrls": {"small": "s", "medium": "m"}}],
            "memberList": [{"tag": "#PLAYER", "name": "Chief", "role": "leader", "trophies": 5000}]
        }"##;
        let clan: Clan = serde_json::from_str(json).unwrap();

        assert_eq!(clan.tag, "#2PP");
        assert_eq!(clan.clan_type, "inviteOnly");
        assert_eq!(clan.clan_level, 12);
        assert!(clan.is_war_log_public);
        assert_eq!(clan.war_league.name, "Crystal League I");
        assert_eq!(clan.labels[0].name, "Clan Wars");
        assert_eq!(clan.member_list[0].role, "leader");
        assert_eq!(clan.war_wins, 0);
    }

    #[test]
    fn test_clan_display_round_trips_through_json() {
        let clan = Clan {
            name: "Clash Bros".to_string(),
            tag: "#2PP".to_string(),
            ..Default::default()
        };
        let back: Clan = serde_json::from_str(&clan.to_string()).unwrap();
        assert_eq!(back, clan);
    }
}

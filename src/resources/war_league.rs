//! Clan war league (CWL) groups and wars.

use serde::{Deserialize, Serialize};

use super::common::{impl_json_display, BadgeUrls};
use super::ClanWarTeam;
use crate::client::CocClient;
use crate::clients::QueryParams;
use crate::error::CocError;
use crate::time::CocTime;

/// The league group a clan is placed in for the current CWL season.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarLeagueGroup {
    /// Clans placed in the group.
    pub clans: Vec<ClanWarLeagueClan>,
    /// Rounds of the group, in order.
    pub rounds: Vec<ClanWarLeagueRound>,
    /// Season in `YYYY-MM` form.
    pub season: String,
    /// `preparation`, `inWar` or `ended`.
    pub state: String,
    /// Group tag.
    pub tag: String,
}

/// A clan taking part in a league group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarLeagueClan {
    /// Badge image URLs.
    pub badge_urls: BadgeUrls,
    /// Clan level.
    pub clan_level: i32,
    /// Roster of the clan for the season.
    pub members: Vec<ClanWarLeagueClanMember>,
    /// Display name.
    pub name: String,
    /// Unique tag, including the leading `#`.
    pub tag: String,
}

/// A member on a league group roster.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarLeagueClanMember {
    /// Display name.
    pub name: String,
    /// Unique tag, including the leading `#`.
    pub tag: String,
    /// Town hall level.
    pub town_hall_level: i32,
}

/// One round of a league group. Unscheduled wars carry the tag `#0`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarLeagueRound {
    /// War tags of the round; `#0` until the war is scheduled.
    pub war_tags: Vec<String>,
}

/// A single war within a league group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarLeagueWar {
    /// The queried clan's side.
    pub clan: ClanWarTeam,
    /// When the battle day ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<CocTime>,
    /// The opposing clan.
    pub opponent: ClanWarTeam,
    /// When preparation day started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_start_time: Option<CocTime>,
    /// When the battle day starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<CocTime>,
    /// `preparation`, `inWar` or `warEnded`.
    pub state: String,
    /// Number of participants per side.
    pub team_size: i32,
    /// When the battle day of the war starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub war_start_time: Option<CocTime>,
}

impl ClanWarLeagueGroup {
    /// Iterates over the tags of all scheduled wars, skipping `#0` placeholders.
    pub fn war_tags(&self) -> impl Iterator<Item = &str> {
        self.rounds
            .iter()
            .flat_map(|round| round.war_tags.iter())
            .map(String::as_str)
            .filter(|tag| *tag != "#0")
    }
}

impl_json_display!(
    ClanWarLeagueGroup,
    ClanWarLeagueClan,
    ClanWarLeagueClanMember,
    ClanWarLeagueRound,
    ClanWarLeagueWar,
);

impl CocClient {
    /// Retrieves the league group of a clan for the current CWL season.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::Http`] on a non-200 status or transport failure
    /// (404 outside of CWL), and [`CocError::Decode`] if the body cannot be
    /// decoded.
    pub async fn get_clan_war_league_group(
        &self,
        tag: &str,
    ) -> Result<ClanWarLeagueGroup, CocError> {
        let url = self
            .url()
            .path("clans")
            .tag(tag)
            .path("currentwar")
            .path("leaguegroup");
        self.fetch(&url, &QueryParams::new()).await
    }

    /// Retrieves a single CWL war by its war tag.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_clan_war_league_group`].
    pub async fn get_clan_war_league_war(
        &self,
        war_tag: &str,
    ) -> Result<ClanWarLeagueWar, CocError> {
        let url = self
            .url()
            .path("clanwarleagues")
            .path("wars")
            .tag(war_tag);
        self.fetch(&url, &QueryParams::new()).await
    }
}

//! League records and the league endpoints.

use serde::{Deserialize, Serialize};

use super::common::{impl_json_display, IconUrls};
use super::ClanReference;
use crate::client::CocClient;
use crate::clients::QueryParams;
use crate::error::CocError;

/// A trophy league.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct League {
    /// Icon image URLs.
    pub icon_urls: IconUrls,
    /// League id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// A Legend League season, identified by `YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueSeason {
    /// Season in `YYYY-MM` form.
    pub id: String,
}

/// A player's final position in a league season.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueSeasonRanking {
    /// Multiplayer attacks won this season.
    pub attack_wins: i32,
    /// Clan of the player at season end.
    pub clan: ClanReference,
    /// Defenses won this season.
    pub defense_wins: i32,
    /// Experience level.
    pub exp_level: i32,
    /// Current trophy league.
    pub league: League,
    /// Display name.
    pub name: String,
    /// Rank at the previous update.
    pub previous_rank: i32,
    /// Final rank in the season.
    pub rank: i32,
    /// Unique tag, including the leading `#`.
    pub tag: String,
    /// Trophies at season end.
    pub trophies: i32,
}

/// A clan war league tier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WarLeague {
    /// War league id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl_json_display!(League, LeagueSeason, LeagueSeasonRanking, WarLeague);

impl CocClient {
    /// Lists all trophy leagues.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::Http`] on a non-200 status or transport failure,
    /// and [`CocError::Decode`] if the body cannot be decoded.
    pub async fn get_leagues(&self, params: &QueryParams) -> Result<Vec<League>, CocError> {
        let url = self.url().path("leagues");
        self.fetch_items(&url, params).await
    }

    /// Retrieves a single trophy league by id.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_leagues`].
    pub async fn get_league(&self, league_id: i64) -> Result<League, CocError> {
        let url = self.url().path("leagues").id(league_id);
        self.fetch(&url, &QueryParams::new()).await
    }

    /// Lists the seasons of a league. Only the Legend League has seasons.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_leagues`].
    pub async fn get_league_seasons(
        &self,
        league_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<LeagueSeason>, CocError> {
        let url = self.url().path("leagues").id(league_id).path("seasons");
        self.fetch_items(&url, params).await
    }

    /// Lists the player rankings of a league season.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_leagues`].
    pub async fn get_league_season_rankings(
        &self,
        league_id: i64,
        season_id: &str,
        params: &QueryParams,
    ) -> Result<Vec<LeagueSeasonRanking>, CocError> {
        let url = self
            .url()
            .path("leagues")
            .id(league_id)
            .path("seasons")
            .id(season_id);
        self.fetch_items(&url, params).await
    }

    /// Lists all clan war league tiers.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_leagues`].
    pub async fn get_war_leagues(&self, params: &QueryParams) -> Result<Vec<WarLeague>, CocError> {
        let url = self.url().path("warleagues");
        self.fetch_items(&url, params).await
    }
}

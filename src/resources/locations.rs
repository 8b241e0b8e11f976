//! Location records and the location ranking endpoints.

use serde::{Deserialize, Serialize};

use super::common::impl_json_display;
use super::{ClanRanking, ClanVersusRanking, PlayerRanking, PlayerVersusRanking};
use crate::client::CocClient;
use crate::clients::QueryParams;
use crate::error::CocError;

/// A country or region used for rankings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    /// ISO country code; empty for regions such as "International".
    pub country_code: String,
    /// Location id.
    pub id: i64,
    /// Whether the location is a country rather than a region.
    pub is_country: bool,
    /// Name in the requested locale, if the API sent one.
    pub localized_name: String,
    /// Location name.
    pub name: String,
}

impl_json_display!(Location);

impl CocClient {
    /// Lists all locations.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::Http`] on a non-200 status or transport failure,
    /// and [`CocError::Decode`] if the body cannot be decoded.
    pub async fn get_locations(&self, params: &QueryParams) -> Result<Vec<Location>, CocError> {
        let url = self.url().path("locations");
        self.fetch_items(&url, params).await
    }

    /// Retrieves a single location by id.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_locations`].
    pub async fn get_location(&self, location_id: i64) -> Result<Location, CocError> {
        let url = self.url().path("locations").id(location_id);
        self.fetch(&url, &QueryParams::new()).await
    }

    /// Lists the clan ranking of a location.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_locations`].
    pub async fn get_clan_rankings(
        &self,
        location_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<ClanRanking>, CocError> {
        self.fetch_items(&self.rankings_url(location_id, "clans"), params).await
    }

    /// Lists the builder base clan ranking of a location.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_locations`].
    pub async fn get_clan_versus_rankings(
        &self,
        location_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<ClanVersusRanking>, CocError> {
        self.fetch_items(&self.rankings_url(location_id, "clans-versus"), params).await
    }

    /// Lists the player ranking of a location.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_locations`].
    pub async fn get_player_rankings(
        &self,
        location_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<PlayerRanking>, CocError> {
        self.fetch_items(&self.rankings_url(location_id, "players"), params).await
    }

    /// Lists the builder base player ranking of a location.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_locations`].
    pub async fn get_player_versus_rankings(
        &self,
        location_id: i64,
        params: &QueryParams,
    ) -> Result<Vec<PlayerVersusRanking>, CocError> {
        self.fetch_items(&self.rankings_url(location_id, "players-versus"), params).await
    }

    fn rankings_url(&self, location_id: i64, kind: &str) -> crate::clients::UrlBuilder {
        self.url()
            .path("locations")
            .id(location_id)
            .path("rankings")
            .path(kind)
    }
}

//! Clan and player labels.

use serde::{Deserialize, Serialize};

use super::common::{impl_json_display, IconUrls};
use crate::client::CocClient;
use crate::clients::QueryParams;
use crate::error::CocError;

/// A label a clan or player can display, such as "Clan Wars" or "Friendly".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    /// Display name.
    pub name: String,
    /// Label id.
    pub id: i64,
    /// Icon image URLs.
    pub icon_urls: IconUrls,
}

impl_json_display!(Label);

impl CocClient {
    /// Lists the labels a clan can choose from.
    ///
    /// # Errors
    ///
    /// Returns [`CocError::Http`] on a non-200 status or transport failure,
    /// and [`CocError::Decode`] if the body cannot be decoded.
    pub async fn get_clan_labels(&self, params: &QueryParams) -> Result<Vec<Label>, CocError> {
        let url = self.url().path("labels").path("clans");
        self.fetch_items(&url, params).await
    }

    /// Lists the labels a player can choose from.
    ///
    /// # Errors
    ///
    /// See [`CocClient::get_clan_labels`].
    pub async fn get_player_labels(&self, params: &QueryParams) -> Result<Vec<Label>, CocError> {
        let url = self.url().path("labels").path("players");
        self.fetch_items(&url, params).await
    }
}

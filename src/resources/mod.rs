//! Resource records returned by the Clash of Clans API.
//!
//! Each submodule defines the records of one area of the API together with
//! the [`CocClient`](crate::CocClient) methods that fetch them. All records
//! tolerate missing fields (they fall back to their defaults) and display as
//! compact JSON.
//!
//! | Area | Records |
//! |------|---------|
//! | clans | [`Clan`], [`ClanMember`], [`ClanReference`], [`ClanRanking`], [`ClanVersusRanking`] |
//! | players | [`Player`], [`PlayerAchievement`], [`Troop`], [`PlayerRanking`], [`PlayerVersusRanking`] |
//! | wars | [`ClanWar`], [`ClanWarTeam`], [`ClanWarMember`], [`ClanWarAttack`] |
//! | war leagues | [`ClanWarLeagueGroup`], [`ClanWarLeagueWar`] |
//! | leagues | [`League`], [`LeagueSeason`], [`LeagueSeasonRanking`], [`WarLeague`] |
//! | locations | [`Location`] |
//! | labels | [`Label`] |

mod clan_war;
mod clans;
pub(crate) mod common;
mod labels;
mod leagues;
mod locations;
mod players;
mod war_league;

pub use clan_war::{ClanWar, ClanWarAttack, ClanWarMember, ClanWarTeam, NOT_IN_WAR};
pub use clans::{Clan, ClanMember, ClanRanking, ClanReference, ClanVersusRanking};
pub use common::{BadgeUrls, IconUrls};
pub use labels::Label;
pub use leagues::{League, LeagueSeason, LeagueSeasonRanking, WarLeague};
pub use locations::Location;
pub use players::{Player, PlayerAchievement, PlayerRanking, PlayerVersusRanking, Troop};
pub use war_league::{
    ClanWarLeagueClan, ClanWarLeagueClanMember, ClanWarLeagueGroup, ClanWarLeagueRound,
    ClanWarLeagueWar,
};

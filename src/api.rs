//! `EpgApi` trait definition.

use crate::error::Result;
use crate::types::{Country, Language, Response, Schedule};

/// EPG API trait.
///
/// Abstracts the request surface of [`crate::EpgClient`] so callers can substitute a mock
/// in tests. Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[trait_variant::make(EpgApi: Send)]
pub trait LocalEpgApi {
    /// Gets the EPG for a single date.
    async fn get(
        &self,
        country: &Country,
        language: &Language,
        date: &str,
        params: &[(&str, &str)],
    ) -> Result<Response>;

    /// Gets the EPG for a period of dates.
    async fn get_period(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        params: &[(&str, &str)],
    ) -> Result<Response>;

    /// Gets the EPG of a channel group for a period of dates.
    async fn get_channel_group(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        channel_group: &str,
        params: &[(&str, &str)],
    ) -> Result<Response>;

    /// Gets the EPG of a single channel for a period of dates.
    async fn get_channel(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        channel_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Response>;
}

/// Fetches one date for a single channel and returns that channel's schedules.
///
/// An empty list is returned when the API has no matching day or channel.
///
/// # Errors
///
/// Returns an error if the underlying request fails.
pub async fn channel_schedules(
    api: &(impl LocalEpgApi + Sync),
    country: &Country,
    language: &Language,
    date: &str,
    channel_id: &str,
) -> Result<Vec<Schedule>> {
    let response = api
        .get_channel(country, language, date, date, channel_id, &[])
        .await?;

    let schedules = response.day(Some(date)).channel(channel_id).schedules.clone();
    tracing::debug!(
        channel_id,
        date,
        count = schedules.len(),
        "Collected channel schedules"
    );

    Ok(schedules)
}

//! Type definitions for EPG API requests and responses.

use crate::error::{EpgError, Result};
use crate::time::Time;
use crate::xml::{empty_as_default, lenient_bool, resources_images};
use crate::{FULL_SIZE_IMAGE_FORMAT, IMAGE_BASE_URL};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// Lowercase ISO 3166-1 alpha-2 country code used in request paths
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country(Cow<'static, str>);

impl Country {
    /// Sweden (`se`)
    pub const SWEDEN: Country = Country(Cow::Borrowed("se"));
    /// Norway (`no`)
    pub const NORWAY: Country = Country(Cow::Borrowed("no"));
    /// Denmark (`dk`)
    pub const DENMARK: Country = Country(Cow::Borrowed("dk"));
    /// Finland (`fi`)
    pub const FINLAND: Country = Country(Cow::Borrowed("fi"));

    /// Create a country from any non-empty code
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.is_empty() {
            return Err(EpgError::invalid_input("Country code cannot be empty"));
        }
        Ok(Self(Cow::Owned(code)))
    }

    /// The country code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ISO 639-1 language code used in request paths
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(Cow<'static, str>);

impl Language {
    /// Swedish (`sv`)
    pub const SWEDISH: Language = Language(Cow::Borrowed("sv"));
    /// Norwegian (`no`)
    pub const NORWEGIAN: Language = Language(Cow::Borrowed("no"));
    /// Danish (`da`)
    pub const DANISH: Language = Language(Cow::Borrowed("da"));
    /// Finnish (`fi`)
    pub const FINNISH: Language = Language(Cow::Borrowed("fi"));

    /// Create a language from any non-empty code
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.is_empty() {
            return Err(EpgError::invalid_input("Language code cannot be empty"));
        }
        Ok(Self(Cow::Owned(code)))
    }

    /// The language code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returned by lookups that find no matching day
static EMPTY_DAY: Day = Day {
    broadcast_date: String::new(),
    channels: Vec::new(),
};

/// Returned by lookups that find no matching channel
static EMPTY_CHANNEL: Channel = Channel {
    id: String::new(),
    name: String::new(),
    title: String::new(),
    logo_id: String::new(),
    logo_dark_id: String::new(),
    logo_light_id: String::new(),
    is_hd: false,
    schedules: Vec::new(),
};

/// Root response container for all EPG queries
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Response {
    /// Days in upstream order
    #[serde(rename(deserialize = "Day", serialize = "days"), default)]
    pub days: Vec<Day>,

    /// First date of the requested range, as echoed by the API
    #[serde(rename(deserialize = "@FromDate", serialize = "from_date"), default)]
    pub from_date: String,

    /// Last date of the requested range, as echoed by the API
    #[serde(rename(deserialize = "@UntilDate", serialize = "until_date"), default)]
    pub until_date: String,

    /// What was actually requested; attached by the client after decoding
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Response {
    /// Get the first day, or the first day whose broadcast date starts with `date`.
    ///
    /// Returns an empty [`Day`] when nothing matches.
    pub fn day(&self, date: Option<&str>) -> &Day {
        let found = match date {
            None => self.days.first(),
            Some(date) => self
                .days
                .iter()
                .find(|d| d.broadcast_date.starts_with(date)),
        };
        found.unwrap_or(&EMPTY_DAY)
    }
}

/// Request metadata recorded for auditing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    /// Resolved request path
    pub path: String,
    /// Query parameters in the order they were sent
    pub query: Vec<(String, String)>,
}

/// One broadcast date's worth of schedules
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Day {
    /// Broadcast date in upstream format (may carry a time suffix)
    #[serde(
        rename(deserialize = "@BroadcastDate", serialize = "broadcast_date"),
        default
    )]
    pub broadcast_date: String,

    /// Channels in upstream order
    #[serde(rename(deserialize = "Channel", serialize = "channels"), default)]
    pub channels: Vec<Channel>,
}

impl Day {
    /// Get the channel with the given id, or an empty [`Channel`] if not found
    pub fn channel(&self, id: &str) -> &Channel {
        self.channels
            .iter()
            .find(|c| c.id == id)
            .unwrap_or(&EMPTY_CHANNEL)
    }

    /// Check if this is an empty day (no broadcast date, no channels)
    pub fn is_empty(&self) -> bool {
        self.broadcast_date.is_empty() && self.channels.is_empty()
    }
}

/// A TV channel in the EPG
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Channel {
    #[serde(rename(deserialize = "@ChannelId", serialize = "channel_id"), default)]
    pub id: String,

    #[serde(rename(deserialize = "@Name", serialize = "name"), default)]
    pub name: String,

    #[serde(rename(deserialize = "@Title", serialize = "title"), default)]
    pub title: String,

    /// Image id of the default logo
    #[serde(rename(deserialize = "@LogoId", serialize = "logo_id"), default)]
    pub logo_id: String,

    /// Image id of the logo for dark backgrounds
    #[serde(rename(deserialize = "@LogoDarkId", serialize = "logo_dark_id"), default)]
    pub logo_dark_id: String,

    /// Image id of the logo for light backgrounds
    #[serde(rename(deserialize = "@LogoLightId", serialize = "logo_light_id"), default)]
    pub logo_light_id: String,

    #[serde(
        rename(deserialize = "@IsHd", serialize = "hd"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub is_hd: bool,

    /// Schedules in upstream order
    #[serde(rename(deserialize = "Schedule", serialize = "schedules"), default)]
    pub schedules: Vec<Schedule>,
}

impl Channel {
    /// Check if this is an empty channel (no id, no schedules)
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.schedules.is_empty()
    }
}

/// One airing of a program on a channel
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(rename(deserialize = "@ScheduleId", serialize = "schedule_id"), default)]
    pub id: String,

    #[serde(rename(deserialize = "@NextStart", serialize = "next_start"), default)]
    pub next_start: String,

    /// Start of the airing, normalized to the reference zone
    #[serde(
        rename(deserialize = "@CalendarDate", serialize = "calendar_date"),
        default
    )]
    pub calendar_date: Time,

    #[serde(
        rename(deserialize = "@IsPremiere", serialize = "premiere"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub is_premiere: bool,

    #[serde(
        rename(deserialize = "@IsDubbed", serialize = "dubbed"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub is_dubbed: bool,

    /// Upstream `Type` tag
    #[serde(rename(deserialize = "@Type", serialize = "type"), default)]
    pub kind: String,

    #[serde(
        rename(deserialize = "@AlsoAvailableInHD", serialize = "also_available_in_hd"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub also_available_in_hd: bool,

    #[serde(
        rename(deserialize = "@AlsoAvailableIn3D", serialize = "also_available_in_3d"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub also_available_in_3d: bool,

    #[serde(
        rename(deserialize = "@Is3D", serialize = "is_3d"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub is_3d: bool,

    #[serde(
        rename(deserialize = "@IsPPV", serialize = "is_ppv"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub is_ppv: bool,

    #[serde(
        rename(deserialize = "@PlayAssetId1", serialize = "play_asset_id"),
        default
    )]
    pub play_asset_id: String,

    #[serde(rename(deserialize = "Program", serialize = "program"), default)]
    pub program: Program,
}

/// Show metadata for a schedule
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Program {
    #[serde(rename(deserialize = "@ProgramId", serialize = "program_id"), default)]
    pub id: String,

    #[serde(rename(deserialize = "@Title", serialize = "title"), default)]
    pub title: String,

    #[serde(
        rename(deserialize = "@OriginalTitle", serialize = "original_title"),
        default
    )]
    pub original_title: String,

    #[serde(rename(deserialize = "@Genre", serialize = "genre"), default)]
    pub genre: String,

    #[serde(rename(deserialize = "@GenreKey", serialize = "genre_key"), default)]
    pub genre_key: String,

    /// Raw upstream value, see [`Program::first_calendar_time`]
    #[serde(
        rename(deserialize = "@FirstCalendarDate", serialize = "first_calendar_date"),
        default
    )]
    pub first_calendar_date: String,

    /// Raw upstream value, see [`Program::last_calendar_time`]
    #[serde(
        rename(deserialize = "@LastCalendarDate", serialize = "last_calendar_date"),
        default
    )]
    pub last_calendar_date: String,

    /// Raw upstream value, see [`Program::vod_start_time`]
    #[serde(rename(deserialize = "@VodStart", serialize = "vod_start"), default)]
    pub vod_start: String,

    /// Raw upstream value, see [`Program::vod_end_time`]
    #[serde(rename(deserialize = "@VodEnd", serialize = "vod_end"), default)]
    pub vod_end: String,

    /// Duration in minutes
    #[serde(
        rename(deserialize = "@Duration", serialize = "duration"),
        default,
        deserialize_with = "empty_as_default"
    )]
    pub duration: i32,

    #[serde(
        rename(deserialize = "@ContentSourceId", serialize = "content_source_id"),
        default
    )]
    pub content_source_id: String,

    #[serde(
        rename(deserialize = "@ProductionYear", serialize = "production_year"),
        default,
        deserialize_with = "empty_as_default"
    )]
    pub production_year: i32,

    #[serde(rename(deserialize = "@Rating", serialize = "rating"), default)]
    pub rating: String,

    /// Comma separated, see [`Program::actor_names`]
    #[serde(rename(deserialize = "@Actors", serialize = "actors"), default)]
    pub actors: String,

    /// Comma separated, see [`Program::director_names`]
    #[serde(rename(deserialize = "@Directors", serialize = "directors"), default)]
    pub directors: String,

    #[serde(rename(deserialize = "@Class", serialize = "class"), default)]
    pub class: String,

    /// Upstream `Type` tag
    #[serde(rename(deserialize = "@Type", serialize = "type"), default)]
    pub kind: String,

    #[serde(rename(deserialize = "@Category", serialize = "category"), default)]
    pub category: String,

    #[serde(
        rename(
            deserialize = "@IsDubbedVersionAvailable",
            serialize = "dubbed_version_available"
        ),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub is_dubbed_version_available: bool,

    #[serde(
        rename(deserialize = "@Vod", serialize = "vod"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub vod: bool,

    #[serde(
        rename(deserialize = "@OTTBlackout", serialize = "ott_blackout"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub ott_blackout: bool,

    #[serde(
        rename(deserialize = "@IsDubbed", serialize = "dubbed"),
        default,
        deserialize_with = "lenient_bool"
    )]
    pub is_dubbed: bool,

    #[serde(rename(deserialize = "@SeriesId", serialize = "series_id"), default)]
    pub series_id: String,

    #[serde(
        rename(deserialize = "@SeasonNumber", serialize = "season_number"),
        default,
        deserialize_with = "empty_as_default"
    )]
    pub season_number: i32,

    #[serde(
        rename(deserialize = "@EpisodeNumber", serialize = "episode_number"),
        default,
        deserialize_with = "empty_as_default"
    )]
    pub episode_number: i32,

    #[serde(
        rename(deserialize = "@NumberOfEpisodes", serialize = "number_of_episodes"),
        default,
        deserialize_with = "empty_as_default"
    )]
    pub number_of_episodes: i32,

    #[serde(rename(deserialize = "Synopsis", serialize = "synopsis"), default)]
    pub synopsis: Synopsis,

    /// Images from the `Resources` element
    #[serde(
        rename(deserialize = "Resources", serialize = "images"),
        default,
        deserialize_with = "resources_images"
    )]
    pub images: Vec<Image>,
}

impl Program {
    /// Actor names, split from the comma separated `Actors` attribute
    pub fn actor_names(&self) -> Vec<&str> {
        names(&self.actors)
    }

    /// Director names, split from the comma separated `Directors` attribute
    pub fn director_names(&self) -> Vec<&str> {
        names(&self.directors)
    }

    /// First airing as a normalized [`Time`]
    pub fn first_calendar_time(&self) -> Result<Time> {
        Time::parse(&self.first_calendar_date)
    }

    /// Last airing as a normalized [`Time`]
    pub fn last_calendar_time(&self) -> Result<Time> {
        Time::parse(&self.last_calendar_date)
    }

    /// Start of the VOD window as a normalized [`Time`]
    pub fn vod_start_time(&self) -> Result<Time> {
        Time::parse(&self.vod_start)
    }

    /// End of the VOD window as a normalized [`Time`]
    pub fn vod_end_time(&self) -> Result<Time> {
        Time::parse(&self.vod_end)
    }
}

/// Synopsis texts of a program in increasing length
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Synopsis {
    #[serde(rename(deserialize = "ExtraShort", serialize = "extra_short"), default)]
    pub extra_short: String,

    #[serde(rename(deserialize = "Short", serialize = "short"), default)]
    pub short: String,

    #[serde(rename(deserialize = "Medium", serialize = "medium"), default)]
    pub medium: String,

    #[serde(rename(deserialize = "Long", serialize = "long"), default)]
    pub long: String,

    #[serde(rename(deserialize = "Facts", serialize = "facts"), default)]
    pub facts: String,
}

/// Typed identifier for an image hosted on the image CDN
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    #[serde(rename(deserialize = "@Id", serialize = "id"), default)]
    pub id: String,

    #[serde(rename(deserialize = "@Category", serialize = "category"), default)]
    pub category: String,
}

impl Image {
    /// Create an image reference
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
        }
    }

    /// URL of this image in the given format: `{IMAGE_BASE_URL}/{id}/{format}.img`
    pub fn url(&self, format: &str) -> Result<Url> {
        let mut url = Url::parse(IMAGE_BASE_URL)?;
        url.path_segments_mut()
            .map_err(|_| EpgError::invalid_input("Image base URL cannot be a base"))?
            .clear()
            .push(&self.id)
            .push(&format!("{}.img", format));
        Ok(url)
    }

    /// URL of the full size image
    pub fn full_size_url(&self) -> Result<Url> {
        self.url(FULL_SIZE_IMAGE_FORMAT)
    }
}

/// Split a comma separated list of names, trimming whitespace around each name.
///
/// A blank string yields no names. Otherwise every segment is kept in position, so
/// `"a, ,b"` gives `["a", "", "b"]`.
pub fn names(s: &str) -> Vec<&str> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    s.split(',').map(str::trim).collect()
}

//! # C More EPG API Client
//!
//! A typed, async Rust client library for the C More Electronic Program Guide (EPG) Web API.
//!
//! This library builds country/language/date scoped schedule queries, fetches them over
//! HTTP and decodes the XML responses into days, channels, schedules, programs and images.
//!
//! ## Features
//!
//! - **Type-safe**: All API responses are parsed into strongly-typed Rust structs
//! - **Async**: Built on reqwest for async/await support
//! - **Normalized timestamps**: Every upstream timestamp variant becomes one absolute
//!   instant in Swedish time, see [`Time`]
//! - **Error Handling**: Typed errors for transport, decoding and HTTP status failures
//! - **Mockable**: The [`EpgApi`] trait lets tests swap in a fake client
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cmore_epg::{channels, date, Country, EpgClient, Language};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EpgClient::new()?;
//!
//!     let response = client
//!         .get(&Country::SWEDEN, &Language::SWEDISH, &date(2017, 1, 25), &[])
//!         .await?;
//!
//!     for schedule in &response.day(None).channel(channels::TV4).schedules {
//!         println!("{} {}", schedule.calendar_date, schedule.program.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Images
//!
//! Program images and channel logos are identifiers. [`Image::url`] turns them into
//! fetchable URLs on the image CDN; format `164` is the full size image.

pub mod api;
pub mod channels;
pub mod client;
pub mod error;
pub mod time;
pub mod types;
mod xml;

pub use api::{channel_schedules, EpgApi, LocalEpgApi};
pub use channels::channel_id;
pub use client::{EpgClient, EpgClientConfig};
pub use error::{EpgError, Result};
pub use time::{date, date_at, Time, REFERENCE_ZONE};
pub use types::{
    names, Channel, Country, Day, Image, Language, Meta, Program, Response, Schedule, Synopsis,
};

/// The default base URL for the EPG API
pub const DEFAULT_BASE_URL: &str = "https://api.cmore.se";

/// Default user agent string for requests
pub const DEFAULT_USER_AGENT: &str = concat!("cmore-epg/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

/// Base URL of the image CDN
pub const IMAGE_BASE_URL: &str = "https://img-cdn-cmore.b17g.services";

/// Image format for the full size image
pub const FULL_SIZE_IMAGE_FORMAT: &str = "164";

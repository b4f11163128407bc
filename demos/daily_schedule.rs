//! Daily schedule example for the EPG library.
//!
//! This example demonstrates how to:
//! - Create an EPG client
//! - Fetch one day of the Swedish EPG
//! - Look up a channel by name
//! - Handle errors gracefully
//!
//! Usage:
//! ```
//! cargo run --example daily_schedule -- TV4 2017-01-25
//! ```

use chrono::Local;
use cmore_epg::{channel_id, date_at, Country, EpgClient, EpgError, Language};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <channel name> [YYYY-MM-DD]", args[0]);
        eprintln!("Example: {} TV4 2017-01-25", args[0]);
        std::process::exit(1);
    }

    let channel_name = &args[1];
    let date = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| date_at(&Local::now()));

    let id = channel_id(channel_name);
    if id.is_empty() {
        eprintln!("Unknown channel: {}", channel_name);
        std::process::exit(1);
    }

    let client = EpgClient::new()?;

    println!("Fetching EPG for {} on {}...", channel_name, date);
    let response = match client
        .get(&Country::SWEDEN, &Language::SWEDISH, &date, &[])
        .await
    {
        Ok(response) => response,
        Err(EpgError::NotFound { path }) => {
            eprintln!("No EPG published at {}", path);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("EPG request failed: {}", e);
            std::process::exit(1);
        }
    };

    let channel = response.day(Some(&date)).channel(id);
    if channel.is_empty() {
        println!("{} has no schedule on {}", channel_name, date);
        return Ok(());
    }

    println!("\n=== {} ({}) ===", channel.title, date);
    for schedule in &channel.schedules {
        let program = &schedule.program;
        println!(
            "{}  {} ({} min)",
            schedule.calendar_date, program.title, program.duration
        );

        let actors = program.actor_names();
        if !actors.is_empty() {
            println!("      With: {}", actors.join(", "));
        }

        if let Some(image) = program.images.first() {
            println!("      Image: {}", image.full_size_url()?);
        }
    }

    Ok(())
}

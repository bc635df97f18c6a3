//! Resolve command - resolve identifiers through one cache

use crate::cli::args::ResolveArgs;
use crate::config::Config;
use crate::error::{TzMemoError, TzMemoResult};
use crate::resolver::{CacheStats, Outcome, Resolved};
use crate::ui::{self, UiContext};
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::Serialize;
use tracing::info;

/// One lookup of one identifier
#[derive(Debug, Serialize)]
struct Lookup {
    identifier: String,
    round: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone: Option<ZoneInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ZoneInfo {
    name: Option<String>,
    offset: String,
    offset_seconds: i32,
    local_time: String,
}

impl ZoneInfo {
    fn at(tz: &TimeZone, timestamp: Timestamp) -> Self {
        let offset = tz.to_offset(timestamp);
        Self {
            name: tz.iana_name().map(str::to_string),
            offset: offset.to_string(),
            offset_seconds: offset.seconds(),
            local_time: offset.to_datetime(timestamp).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    timestamp: i64,
    lookups: Vec<Lookup>,
    stats: CacheStats,
}

/// Execute the resolve command
pub fn execute(args: ResolveArgs, config: &Config) -> TzMemoResult<()> {
    let db = super::database(config)?;
    let resolver = super::resolver(config)?;
    let timestamp = match args.at {
        Some(seconds) => Timestamp::from_second(seconds)
            .map_err(|e| TzMemoError::User(format!("Invalid timestamp {}: {}", seconds, e)))?,
        None => Timestamp::now(),
    };

    let ctx = if args.json {
        UiContext::plain()
    } else {
        UiContext::detect()
    };

    let mut lookups = Vec::new();
    for round in 1..=args.repeat {
        for identifier in &args.identifiers {
            let lookup = match resolver.lookup(identifier, &db) {
                Ok(Resolved {
                    descriptor,
                    outcome,
                }) => Lookup {
                    identifier: identifier.clone(),
                    round,
                    outcome: Some(outcome),
                    zone: Some(ZoneInfo::at(&descriptor, timestamp)),
                    error: None,
                },
                Err(e) => Lookup {
                    identifier: identifier.clone(),
                    round,
                    outcome: None,
                    zone: None,
                    error: Some(e.to_string()),
                },
            };

            if !args.json {
                print_lookup(&ctx, &lookup);
            }
            lookups.push(lookup);
        }
    }

    let stats = resolver.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        entries = stats.entries,
        "resolve finished"
    );

    let failed = lookups.iter().filter(|l| l.error.is_some()).count();
    let total = lookups.len();

    if args.json {
        let report = Report {
            timestamp: timestamp.as_second(),
            lookups,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_stats(&ctx, &stats);
    }

    if failed > 0 {
        return Err(TzMemoError::User(format!(
            "{} of {} lookups failed",
            failed, total
        )));
    }

    Ok(())
}

fn print_lookup(ctx: &UiContext, lookup: &Lookup) {
    match (&lookup.zone, &lookup.error) {
        (Some(zone), _) => {
            let hit = lookup.outcome.is_some_and(Outcome::is_hit);
            let detail = format!("{} ({})", zone.local_time, zone.offset);
            ui::step_resolved(ctx, &lookup.identifier, hit, &detail);
        }
        (None, Some(error)) => ui::step_error_detail(ctx, &lookup.identifier, error),
        (None, None) => {}
    }
}

fn print_stats(ctx: &UiContext, stats: &CacheStats) {
    ui::section(ctx, "Cache");
    ui::key_value(ctx, "hits", &stats.hits.to_string());
    ui::key_value(ctx, "misses", &stats.misses.to_string());
    ui::key_value(ctx, "parse failures", &stats.parse_failures.to_string());
    ui::key_value(ctx, "entries", &stats.entries.to_string());
}

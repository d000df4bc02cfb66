//! AI itinerary helpers: request validation, prompt construction, response
//! parsing and the date / identifier rules used when a generated itinerary
//! is materialised as a trip.

use std::sync::LazyLock;

use chrono::Days;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::TripDate;

/// Expected number of generated places per trip day.
pub const PLACES_PER_DAY: u32 = 2;

/// Prefix of every synthesized place identifier.
pub const SYNTHETIC_PLACE_ID_PREFIX: &str = "ai-";

/// Title prefix marking a trip as AI-sourced.
pub const AI_TRIP_TITLE_PREFIX: &str = "AI: ";

/// Vibe used when the caller leaves it blank.
pub const DEFAULT_VIBE: &str = "general sightseeing";

/// Client-facing message for every generation failure.
pub const GENERATION_FAILED: &str = "Failed to generate AI trip.";

const MISSING_FIELDS: &str = "Destination and days are required.";

static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z0-9_-]*").expect("valid regex"));

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRequest {
    pub destination: String,
    pub days: u32,
    pub vibe: String,
}

impl ItineraryRequest {
    /// Validate raw request fields. `days` must lie in `1..=max_days`.
    pub fn new(
        destination: Option<&str>,
        days: Option<i64>,
        vibe: Option<&str>,
        max_days: u32,
    ) -> Result<Self, CoreError> {
        let destination = destination.map(str::trim).filter(|d| !d.is_empty());
        let (Some(destination), Some(days)) = (destination, days) else {
            return Err(CoreError::Validation(MISSING_FIELDS.to_string()));
        };

        let days = u32::try_from(days)
            .ok()
            .filter(|d| (1..=max_days).contains(d))
            .ok_or_else(|| {
                CoreError::Validation(format!("days must be between 1 and {max_days}"))
            })?;

        let vibe = vibe
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VIBE);

        Ok(Self {
            destination: destination.to_string(),
            days,
            vibe: vibe.to_string(),
        })
    }

    /// Number of places the generator is asked for.
    pub fn expected_places(&self) -> u32 {
        self.days * PLACES_PER_DAY
    }

    /// Human title of the itinerary, e.g. `3 Days in Jaffna`.
    pub fn title(&self) -> String {
        format!("{} Days in {}", self.days, self.destination)
    }

    /// Title of the trip created by an import.
    pub fn trip_title(&self) -> String {
        format!("{AI_TRIP_TITLE_PREFIX}{}", self.title())
    }

    /// The constrained prompt sent to the text generator.
    pub fn prompt(&self) -> String {
        format!(
            "You are an expert travel agent. Create a {days}-day itinerary for {destination}.\n\
             The vibe of the trip is: {vibe}.\n\n\
             You MUST respond ONLY with a valid JSON array of objects. Do not include markdown formatting like ```json.\n\
             Each object should represent a place to visit and match this exact structure:\n\
             [\n  {{\n    \"name\": \"Name of the place\",\n    \"address\": \"City, Country\",\n    \
             \"summary\": \"1 sentence describing why to visit\"\n  }}\n]\n\
             Generate about {count} places ({per_day} per day).",
            days = self.days,
            destination = self.destination,
            vibe = self.vibe,
            count = self.expected_places(),
            per_day = PLACES_PER_DAY,
        )
    }
}

/// One generated itinerary stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlace {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub summary: String,
}

/// Remove markdown code-fence markers (```` ``` ```` with or without a
/// language tag) and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE_RE.replace_all(raw, "").trim().to_string()
}

/// Parse generator output into places. Fails with [`CoreError::Upstream`]
/// when the cleaned text is not a JSON array of place objects.
pub fn parse_itinerary(raw: &str) -> Result<Vec<GeneratedPlace>, CoreError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| CoreError::Upstream {
        message: GENERATION_FAILED,
        detail: format!("itinerary is not a JSON array of places: {e}"),
    })
}

/// Inclusive end date of a `days`-long trip starting on `start`.
pub fn end_date(start: TripDate, days: u32) -> Result<TripDate, CoreError> {
    let span = days.saturating_sub(1);
    start
        .checked_add_days(Days::new(u64::from(span)))
        .ok_or_else(|| CoreError::Validation("Trip end date is out of range".to_string()))
}

/// A fresh placeholder identifier for a generated place.
///
/// Generated places have no provider id, so each gets `ai-` followed by a
/// random UUID in simple (hex) form. Provider ids never use this prefix.
pub fn synthesize_place_id() -> String {
    format!("{SYNTHETIC_PLACE_ID_PREFIX}{}", Uuid::new_v4().simple())
}

pub fn is_synthetic_place_id(place_id: &str) -> bool {
    place_id
        .strip_prefix(SYNTHETIC_PLACE_ID_PREFIX)
        .is_some_and(|rest| Uuid::try_parse(rest).is_ok())
}

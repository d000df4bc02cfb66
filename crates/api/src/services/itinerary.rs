//! AI itinerary preview and import.
//!
//! Import creates the trip first and then appends generated places one at
//! a time through [`TripService::add_place`], so the duplicate and owner
//! rules are the same as for hand-picked places. The loop keeps going past
//! a failed place; the caller gets the trip plus what could not be added.

use serde::Serialize;
use wayfarer_core::error::CoreError;
use wayfarer_core::itinerary::{
    self, synthesize_place_id, GeneratedPlace, ItineraryRequest, GENERATION_FAILED,
};
use wayfarer_core::trip::{PlaceDraft, TripDraft};
use wayfarer_core::types::{DbId, TripDate};
use wayfarer_db::models::trip::Trip;
use wayfarer_db::Store;
use wayfarer_providers::ItineraryGenerator;

use crate::error::AppResult;
use crate::services::TripService;

const BLANK_NAME: &str = "Generated place has no name";

/// A generated place that did not make it into the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPlace {
    pub name: String,
    pub error: String,
}

/// Result of an import: the trip as it ended up plus any skipped places.
#[derive(Debug, Serialize)]
pub struct ImportOutcome {
    pub trip: Trip,
    pub failed: Vec<FailedPlace>,
}

pub struct ItineraryService;

impl ItineraryService {
    /// Ask the generator for places and parse them. At most
    /// `2 * days` places are returned.
    pub async fn generate(
        generator: &dyn ItineraryGenerator,
        request: &ItineraryRequest,
    ) -> AppResult<Vec<GeneratedPlace>> {
        let raw = generator
            .generate(&request.prompt())
            .await
            .map_err(|e| CoreError::Upstream {
                message: GENERATION_FAILED,
                detail: e.to_string(),
            })?;

        let mut places = itinerary::parse_itinerary(&raw)?;
        let cap = usize::try_from(request.expected_places()).unwrap_or(usize::MAX);
        if places.len() > cap {
            tracing::debug!(returned = places.len(), cap, "Truncating generated itinerary");
            places.truncate(cap);
        }
        Ok(places)
    }

    /// Generate an itinerary and persist it as a new trip for `user_id`.
    pub async fn import(
        store: &dyn Store,
        generator: &dyn ItineraryGenerator,
        user_id: DbId,
        request: &ItineraryRequest,
        start_date: TripDate,
    ) -> AppResult<ImportOutcome> {
        let places = Self::generate(generator, request).await?;

        let draft = TripDraft {
            title: request.trip_title(),
            start_date,
            end_date: itinerary::end_date(start_date, request.days)?,
        };
        let mut trip = TripService::create(store, user_id, draft).await?;
        let mut failed = Vec::new();

        for place in places {
            let name = place.name.trim();
            if name.is_empty() {
                failed.push(FailedPlace {
                    name: place.name,
                    error: BLANK_NAME.to_string(),
                });
                continue;
            }

            // Generated places carry no coordinates.
            let draft = PlaceDraft {
                place_id: synthesize_place_id(),
                name: name.to_string(),
                address: place.address.trim().to_string(),
                lat: 0.0,
                lng: 0.0,
            };

            match TripService::add_place(store, user_id, trip.id, &draft).await {
                Ok(updated) => trip = updated,
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        user_id,
                        trip_id = trip.id,
                        place = %draft.name,
                        "Failed to import generated place",
                    );
                    failed.push(FailedPlace {
                        name: draft.name,
                        error: err.public_message(),
                    });
                }
            }
        }

        tracing::info!(
            user_id,
            trip_id = trip.id,
            added = trip.places.len(),
            failed = failed.len(),
            "AI itinerary imported",
        );
        Ok(ImportOutcome { trip, failed })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use wayfarer_core::itinerary::is_synthetic_place_id;
    use wayfarer_db::MemoryStore;
    use wayfarer_providers::ProviderError;

    use super::*;
    use crate::error::AppError;

    struct Canned(&'static str);

    #[async_trait]
    impl ItineraryGenerator for Canned {
        async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct Down;

    #[async_trait]
    impl ItineraryGenerator for Down {
        async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
            Err(ProviderError::MissingApiKey("Gemini"))
        }
    }

    const SEVEN_PLACES: &str = r#"```json
[{"name":"A","address":"Jaffna"},{"name":"B"},{"name":"C"},{"name":"D"},
 {"name":"E"},{"name":"F"},{"name":"G"}]
```"#;

    fn request(days: i64) -> ItineraryRequest {
        ItineraryRequest::new(Some("Jaffna"), Some(days), Some("culture"), 14).unwrap()
    }

    fn jan_first() -> TripDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn generate_caps_at_two_per_day() {
        let places = ItineraryService::generate(&Canned(SEVEN_PLACES), &request(3))
            .await
            .unwrap();
        assert_eq!(places.len(), 6);
    }

    #[tokio::test]
    async fn generator_failure_is_upstream() {
        let err = ItineraryService::generate(&Down, &request(2)).await.unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::Upstream { message, .. }) if message == GENERATION_FAILED
        );
    }

    #[tokio::test]
    async fn import_builds_trip() {
        let store = MemoryStore::new();
        let outcome =
            ItineraryService::import(&store, &Canned(SEVEN_PLACES), 1, &request(3), jan_first())
                .await
                .unwrap();

        let trip = outcome.trip;
        assert_eq!(trip.title, "AI: 3 Days in Jaffna");
        assert_eq!(trip.end_date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(trip.places.len(), 6);
        assert!(trip.places.iter().all(|p| is_synthetic_place_id(&p.place_id)));
        assert!(trip.places.iter().all(|p| p.lat == 0.0 && p.lng == 0.0));
        assert!(outcome.failed.is_empty());
    }

    #[tokio::test]
    async fn blank_names_are_reported_not_fatal() {
        let store = MemoryStore::new();
        let raw = r#"[{"name":"Fort"},{"name":"  "}]"#;
        let outcome = ItineraryService::import(&store, &Canned(raw), 1, &request(1), jan_first())
            .await
            .unwrap();

        assert_eq!(outcome.trip.places.len(), 1);
        assert_eq!(
            outcome.failed,
            [FailedPlace {
                name: "  ".to_string(),
                error: BLANK_NAME.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn failed_generation_creates_nothing() {
        let store = MemoryStore::new();
        let result =
            ItineraryService::import(&store, &Canned("no json here"), 1, &request(2), jan_first())
                .await;
        assert!(result.is_err());
        assert!(TripService::list(&store, 1).await.unwrap().is_empty());
    }
}

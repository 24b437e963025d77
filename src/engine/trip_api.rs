use super::{prompts, Engine};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::TripAPI,
    entities::{Place, Trip},
    error::{invalid_input_error, no_places_error, Error},
    external::google_maps,
};

#[async_trait]
impl TripAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_trip(&self, query: String) -> Result<Trip, Error> {
        if query.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let location = self
            .openai
            .chat(prompts::LOCATION_SYSTEM_PROMPT, &query, 0.0)
            .await?;

        if location.is_empty() {
            return Err(invalid_input_error());
        }

        let content = self
            .openai
            .chat(&prompts::recommendation_system_prompt(&location), &query, 0.7)
            .await?;

        let drafts = prompts::parse_drafts(&content)?;

        // Model-supplied coordinates are never trusted; every place is
        // re-resolved against Google and dropped if that fails.
        let mut places = Vec::new();

        for draft in drafts {
            let resolved = match self.maps.find_place(&draft.name, &location).await {
                Ok(Some(resolved)) if resolved.coordinates.in_bounds() => resolved,
                Ok(_) => {
                    tracing::warn!(name = %draft.name, "skipping unresolved place");
                    continue;
                }
                Err(err) => {
                    tracing::warn!(
                        name = %draft.name,
                        code = err.code,
                        "skipping place after lookup failure"
                    );
                    continue;
                }
            };

            let embed_url = self.maps.place_embed_url(resolved.coordinates);

            places.push(Place {
                name: draft.name,
                description: draft.description,
                coordinates: resolved.coordinates,
                place_id: resolved.place_id,
                maps_url: resolved.maps_url,
                photo_url: resolved.photo_url,
                embed_url,
            });
        }

        if places.is_empty() {
            return Err(no_places_error());
        }

        let coordinates: Vec<_> = places.iter().map(|place| place.coordinates).collect();
        let map_url = self.maps.trip_embed_url(&places[0].place_id, &coordinates);
        let directions_url = google_maps::directions_url(&places);

        let trip = Trip::new(query, location, places, map_url, directions_url);

        self.trips.write().await.insert(trip.id, trip.clone());

        Ok(trip)
    }

    #[tracing::instrument(skip(self))]
    async fn find_trip(&self, id: Uuid) -> Result<Trip, Error> {
        let trips = self.trips.read().await;

        trips.get(&id).cloned().ok_or_else(|| invalid_input_error())
    }
}

use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::{
    entities::{Coordinates, Place},
    error::{invalid_input_error, upstream_error, Error},
};

const DEFAULT_API_BASE: &str = "https://maps.googleapis.com";

// Browser-facing URLs always target the public hosts, even when the
// service itself talks to a different base (tests point it elsewhere).
const PUBLIC_API_BASE: &str = "https://maps.googleapis.com";
const EMBED_API_BASE: &str = "https://www.google.com/maps/embed/v1";
const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir";

#[derive(Clone, Debug)]
pub struct ResolvedPlace {
    pub place_id: String,
    pub coordinates: Coordinates,
    pub maps_url: String,
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    results: Option<T>,
}

#[derive(Clone, Debug, Deserialize)]
struct SearchResult {
    place_id: String,
}

#[derive(Clone, Debug, Deserialize)]
struct PlaceDetails {
    formatted_address: Option<String>,
    geometry: Geometry,
    url: Option<String>,
    photos: Option<Vec<Photo>>,
}

#[derive(Clone, Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Clone, Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}

#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    key: String,
    api_base: String,
}

impl GoogleMaps {
    pub fn new(key: String, api_base: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(GoogleMaps {
            client,
            key,
            api_base,
        })
    }

    pub fn from_env() -> Result<Self, Error> {
        let key = env::var("GOOGLE_MAPS_API_KEY")?;
        let api_base =
            env::var("GOOGLE_MAPS_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());

        Self::new(key, api_base)
    }

    /// Resolve a recommended place name against the Places API: text search
    /// for `"name, location"`, then details for the top hit. `Ok(None)` means
    /// Google has no usable match for the name.
    #[tracing::instrument(skip(self))]
    pub async fn find_place(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Option<ResolvedPlace>, Error> {
        let query = format!("{}, {}", name, location);
        let url = format!("{}/maps/api/place/textsearch/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("key", self.key.as_str())])
            .query(&[("query", query.as_str())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<SearchResult>> = res.json().await?;

        if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
            return Err(upstream_error());
        }

        let place_id = match data.results.and_then(|results| results.into_iter().next()) {
            Some(result) => result.place_id,
            None => return Ok(None),
        };

        self.find_place_details(&place_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_place_details(&self, place_id: &str) -> Result<Option<ResolvedPlace>, Error> {
        let url = format!("{}/maps/api/place/details/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("key", self.key.as_str())])
            .query(&[("place_id", place_id)])
            .query(&[("fields", "name,formatted_address,geometry,url,photos")])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<PlaceDetails> = res.json().await?;

        if data.status != "OK" {
            return Ok(None);
        }

        let details = data.result.ok_or_else(|| upstream_error())?;

        tracing::debug!(
            place_id,
            address = details.formatted_address.as_deref().unwrap_or(""),
            "resolved place"
        );

        let photo_url = details
            .photos
            .and_then(|photos| photos.into_iter().next())
            .map(|photo| self.photo_url(&photo.photo_reference));

        Ok(Some(ResolvedPlace {
            place_id: place_id.into(),
            coordinates: Coordinates::new(details.geometry.location.lat, details.geometry.location.lng),
            maps_url: details.url.unwrap_or_default(),
            photo_url,
        }))
    }

    pub fn photo_url(&self, photo_reference: &str) -> String {
        format!(
            "{}/maps/api/place/photo?maxwidth=800&photo_reference={}&key={}",
            PUBLIC_API_BASE, photo_reference, self.key
        )
    }

    /// Embed URL for the whole trip: centred on the first place, one
    /// numbered red marker per place.
    pub fn trip_embed_url(&self, center_place_id: &str, coordinates: &[Coordinates]) -> String {
        let mut url = format!(
            "{}/place?key={}&q=place_id:{}&zoom=12",
            EMBED_API_BASE, self.key, center_place_id
        );

        for (i, c) in coordinates.iter().enumerate() {
            url.push_str(&format!(
                "&markers=color:red|label:{}|{},{}",
                i + 1,
                c.latitude,
                c.longitude
            ));
        }

        url
    }

    pub fn place_embed_url(&self, coordinates: Coordinates) -> String {
        let center: String = coordinates.into();

        format!(
            "{}/view?key={}&center={}&zoom=16",
            EMBED_API_BASE, self.key, center
        )
    }
}

/// Google Maps directions link covering every place in order.
pub fn directions_url(places: &[Place]) -> String {
    let segments: Vec<String> = places
        .iter()
        .map(|place| {
            let segment = format!(
                "{}@{},{}",
                place.name, place.coordinates.latitude, place.coordinates.longitude
            );
            urlencoding::encode(&segment).into_owned()
        })
        .collect();

    format!("{}/{}", DIRECTIONS_BASE, segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps() -> GoogleMaps {
        GoogleMaps::new("test-key".into(), DEFAULT_API_BASE.into()).unwrap()
    }

    fn place(name: &str, latitude: f64, longitude: f64) -> Place {
        Place {
            name: name.into(),
            description: "".into(),
            coordinates: Coordinates::new(latitude, longitude),
            place_id: "p".into(),
            maps_url: "".into(),
            photo_url: None,
            embed_url: "".into(),
        }
    }

    #[test]
    fn trip_embed_url_numbers_markers_in_order() {
        let coordinates = vec![
            Coordinates::new(48.8584, 2.2945),
            Coordinates::new(48.8606, 2.3376),
        ];

        let url = maps().trip_embed_url("center-id", &coordinates);

        assert!(url.starts_with(
            "https://www.google.com/maps/embed/v1/place?key=test-key&q=place_id:center-id&zoom=12"
        ));
        assert!(url.contains("&markers=color:red|label:1|48.8584,2.2945"));
        assert!(url.contains("&markers=color:red|label:2|48.8606,2.3376"));
    }

    #[test]
    fn place_embed_url_centres_on_the_place() {
        let url = maps().place_embed_url(Coordinates::new(35.6586, 139.7454));

        assert_eq!(
            url,
            "https://www.google.com/maps/embed/v1/view?key=test-key&center=35.6586,139.7454&zoom=16"
        );
    }

    #[test]
    fn photo_url_carries_reference_and_key() {
        let url = maps().photo_url("abc123");

        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=800&photo_reference=abc123&key=test-key"
        );
    }

    #[test]
    fn directions_url_percent_encodes_each_segment() {
        let places = vec![
            place("Eiffel Tower", 48.8584, 2.2945),
            place("Louvre Museum", 48.8606, 2.3376),
        ];

        let url = directions_url(&places);

        assert_eq!(
            url,
            "https://www.google.com/maps/dir/Eiffel%20Tower%4048.8584%2C2.2945/Louvre%20Museum%4048.8606%2C2.3376"
        );
    }
}

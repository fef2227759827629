use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    entities::Coordinates,
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub place_id: String,
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub place_id: String,
    pub description: String,
}

pub type PlaceSuggestions = Vec<PlaceSuggestion>;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    results: Option<T>,
    predictions: Option<T>,
}

#[tracing::instrument]
pub async fn find_place_suggestions(
    input: String,
    location: Coordinates,
    radius: f64,
    session_token: String,
) -> Result<Vec<PlaceSuggestion>, Error> {
    let location: String = location.into();

    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/place/autocomplete/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("input", input)])
        .query(&[("location", location)])
        .query(&[("radius", radius)])
        .query(&[("sessiontoken", session_token)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response<PlaceSuggestions> = res.json().await?;

    if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
        return Err(upstream_error());
    }

    Ok(data.predictions.ok_or_else(|| upstream_error())?)
}

#[tracing::instrument]
pub async fn find_place(id: String, session_token: String) -> Result<Place, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/place/details/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("sessiontoken", session_token)])
        .query(&[("place_id", id)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response<Place> = res.json().await?;

    if data.status != "OK" {
        return Err(upstream_error());
    }

    Ok(data.result.ok_or_else(|| upstream_error())?)
}

/// The first leg of the best route between two coordinates.
#[derive(Clone, Debug)]
pub struct DirectionsLeg {
    pub path: Vec<Coordinates>,
    pub distance_km: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsResponse {
    status: String,
    routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    overview_polyline: OverviewPolyline,
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct OverviewPolyline {
    points: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    distance: Distance,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Distance {
    // meters
    value: i64,
}

/// `Ok(None)` means the service found no route between the endpoints;
/// callers degrade that (and any `Err`) to an empty zero-distance route.
#[tracing::instrument]
pub async fn find_directions(
    origin: Coordinates,
    destination: Coordinates,
) -> Result<Option<DirectionsLeg>, Error> {
    let origin: String = origin.into();
    let destination: String = destination.into();

    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/directions/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("origin", origin)])
        .query(&[("destination", destination)])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: DirectionsResponse = res.json().await?;

    if data.status == "ZERO_RESULTS" {
        return Ok(None);
    }

    if data.status != "OK" {
        return Err(upstream_error());
    }

    let leg = data
        .routes
        .first()
        .and_then(|route| route.legs.first().map(|leg| (route, leg)));

    Ok(leg.map(|(route, leg)| DirectionsLeg {
        path: decode_polyline(&route.overview_polyline.points),
        distance_km: leg.distance.value as f64 / 1000.0,
    }))
}

/// Decodes a Google encoded polyline into coordinates.
///
/// Each coordinate is a pair of zigzag-encoded deltas in 1e-5 degree
/// units, split into 5-bit groups offset by 63. A truncated trailing pair
/// is dropped rather than rejected.
pub fn decode_polyline(encoded: &str) -> Vec<Coordinates> {
    let mut path = Vec::new();
    let mut bytes = encoded.bytes();
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while let Some(dlat) = decode_component(&mut bytes) {
        let dlng = match decode_component(&mut bytes) {
            Some(value) => value,
            None => break,
        };

        lat += dlat;
        lng += dlng;

        path.push(Coordinates {
            lat: lat as f64 * 1e-5,
            lng: lng as f64 * 1e-5,
        });
    }

    path
}

fn decode_component(bytes: &mut impl Iterator<Item = u8>) -> Option<i64> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let chunk = bytes.next()? as i64 - 63;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    Some(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn decodes_reference_polyline() {
        // the worked example from Google's encoding documentation
        let path = decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@");

        assert_eq!(path.len(), 3);
        assert_close(path[0].lat, 38.5);
        assert_close(path[0].lng, -120.2);
        assert_close(path[1].lat, 40.7);
        assert_close(path[1].lng, -120.95);
        assert_close(path[2].lat, 43.252);
        assert_close(path[2].lng, -126.453);
    }

    #[test]
    fn empty_polyline_decodes_to_empty_path() {
        assert!(decode_polyline("").is_empty());
    }

    #[test]
    fn directions_without_configuration_fail_cleanly() {
        use tokio_test::block_on;

        std::env::remove_var("GOOGLE_MAPS_API_BASE");

        let origin = Coordinates { lat: 0.0, lng: 0.0 };
        let destination = Coordinates { lat: 1.0, lng: 1.0 };

        let result = block_on(find_directions(origin, destination));
        assert!(result.is_err());
    }
}

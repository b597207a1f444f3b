// File: src/client/core.rs
//! HTTP adapter for the routing provider (geocoding + directions).
//!
//! The transport is a plain hyper client with rustls and native roots.
//! `https_or_http` keeps the client usable against a local mock server in
//! tests. No retries are performed on any call: a failed query degrades
//! its own output section and nothing else.

use crate::error::CommuteError;
use crate::model::{
    Coordinates, DirectionsResponse, GeocodeResponse, RouteLeg, TimeConstraint, TravelMode,
};

use chrono::{Local, NaiveTime};
use http::{Request, Uri};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::future::Future;

type HttpsClient =
    Client<hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>, String>;

/// The request/response contract the calculation core consumes. Any
/// provider that resolves addresses to coordinates and returns mode-tagged
/// itinerary legs can stand behind it.
pub trait RouteProvider {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Coordinates, CommuteError>> + Send;

    fn route(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
        constraint: TimeConstraint,
    ) -> impl Future<Output = Result<Vec<RouteLeg>, CommuteError>> + Send;
}

#[derive(Clone, Debug)]
pub struct MapsClient {
    client: HttpsClient,
    base_url: String,
    api_key: String,
}

/// Minimal RFC 3986 query-component escaping. Addresses routinely carry
/// spaces, commas and umlauts.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Resolves a wall-clock time against the current local day, as seconds
/// since the Unix epoch. The form inputs carry no date; both "today" and
/// the clock reading follow the user's timezone, so an 08:00 constraint
/// means 08:00 on the user's clock.
fn epoch_today(time: NaiveTime) -> i64 {
    let today = Local::now().date_naive();
    match today.and_time(time).and_local_timezone(Local).earliest() {
        Some(dt) => dt.timestamp(),
        // A DST gap can swallow the exact minute.
        None => today.and_time(time).and_utc().timestamp(),
    }
}

impl MapsClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let mut root_store = rustls::RootCertStore::empty();
        let result = rustls_native_certs::load_native_certs();
        root_store.add_parsable_certificates(result.certs);
        if root_store.is_empty() {
            // Plain-HTTP endpoints (tests, local proxies) still work.
            log::warn!("No valid system certificates found; HTTPS endpoints will fail.");
        }
        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(TokioExecutor::new()).build(https_connector);
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// One GET round trip, decoded as JSON. Transport, HTTP-status and
    /// decode failures all map through `fail` so the caller's error variant
    /// carries the reason text.
    async fn get_json<T>(
        &self,
        path_and_query: &str,
        fail: fn(String) -> CommuteError,
    ) -> Result<T, CommuteError>
    where
        T: serde::de::DeserializeOwned,
    {
        let uri: Uri = format!("{}{}", self.base_url, path_and_query)
            .parse()
            .map_err(|e: http::uri::InvalidUri| fail(e.to_string()))?;

        let request = Request::get(uri)
            .body(String::new())
            .map_err(|e| fail(e.to_string()))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| fail(e.to_string()))?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| fail(e.to_string()))?
            .to_bytes();

        if !status.is_success() {
            return Err(fail(format!("HTTP {}", status)));
        }

        serde_json::from_slice(&body).map_err(|e| fail(e.to_string()))
    }
}

impl RouteProvider for MapsClient {
    /// Resolves an address to coordinates. Non-"OK" provider status or an
    /// empty result list is `GeocodeFailed` with the status as reason.
    async fn geocode(&self, address: &str) -> Result<Coordinates, CommuteError> {
        let query = format!(
            "/geocode/json?address={}&key={}",
            encode_component(address),
            encode_component(&self.api_key)
        );
        let response: GeocodeResponse = self.get_json(&query, CommuteError::GeocodeFailed).await?;

        if response.status != "OK" {
            return Err(CommuteError::GeocodeFailed(response.status));
        }
        response
            .results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or_else(|| CommuteError::GeocodeFailed("ZERO_RESULTS".to_string()))
    }

    /// Fetches the legs of the best route. The first route's legs are
    /// returned as-is; summarization happens downstream.
    async fn route(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
        constraint: TimeConstraint,
    ) -> Result<Vec<RouteLeg>, CommuteError> {
        let mut query = format!(
            "/directions/json?origin={}&destination={}&mode={}&key={}",
            encode_component(origin),
            encode_component(destination),
            mode.as_param(),
            encode_component(&self.api_key)
        );
        match constraint {
            TimeConstraint::DepartAt(t) => {
                query.push_str(&format!("&departure_time={}", epoch_today(t)));
            }
            TimeConstraint::ArriveBy(t) => {
                query.push_str(&format!("&arrival_time={}", epoch_today(t)));
            }
            TimeConstraint::None => {}
        }

        let response: DirectionsResponse =
            self.get_json(&query, CommuteError::RouteFailed).await?;

        if response.status != "OK" {
            return Err(CommuteError::RouteFailed(response.status));
        }
        Ok(response
            .routes
            .into_iter()
            .next()
            .map(|r| r.legs)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_component_escaping() {
        assert_eq!(encode_component("Bahnhofstrasse 1"), "Bahnhofstrasse%201");
        assert_eq!(encode_component("Zürich"), "Z%C3%BCrich");
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    }
}

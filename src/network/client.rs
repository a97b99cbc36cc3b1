//! API client - executes backend calls and reduces outcomes to messages
//!
//! The client owns its `reqwest::Client` and base URL; it is constructed
//! once in `main` and handed to the network actor, so tests and staging
//! setups can point it elsewhere.

use std::time::{Duration, Instant};

use crate::constants::{APPROVE_PATH, BALANCE_PATH, DRIVERS_PATH};
use crate::messages::NetworkResponse;
use crate::models::parse_drivers;

/// HTTP client for the driver administration backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        ApiClient {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Fetch and parse the full driver listing.
    ///
    /// Transport and parse failures reduce to `FetchFailed`; the caller
    /// keeps its previous collection either way.
    pub async fn fetch_drivers(&self, seq: u64) -> NetworkResponse {
        let start = Instant::now();
        let result = self.http.get(self.url(DRIVERS_PATH)).send().await;
        let time_ms = start.elapsed().as_millis() as u64;

        let body = match result {
            Ok(resp) => match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    return NetworkResponse::FetchFailed {
                        seq,
                        message: format!("Error reading body: {}", e),
                        time_ms,
                    }
                }
            },
            Err(e) => {
                return NetworkResponse::FetchFailed {
                    seq,
                    message: describe_error(&e),
                    time_ms,
                }
            }
        };

        match parse_drivers(&body) {
            Ok(drivers) => NetworkResponse::DriversFetched {
                seq,
                drivers,
                time_ms: start.elapsed().as_millis() as u64,
            },
            Err(e) => NetworkResponse::FetchFailed {
                seq,
                message: format!("Malformed driver listing: {}", e),
                time_ms: start.elapsed().as_millis() as u64,
            },
        }
    }

    /// Approve a driver's documents. The response body is opaque text.
    pub async fn approve_driver(&self, seq: u64, driver_id: i64) -> NetworkResponse {
        let params = [("driver_id", driver_id.to_string())];
        self.post_form(seq, APPROVE_PATH, &params).await
    }

    /// Set a driver's balance. The response body is opaque text.
    pub async fn update_balance(&self, seq: u64, driver_id: i64, balance: i64) -> NetworkResponse {
        let params = [
            ("driver_id", driver_id.to_string()),
            ("solde", balance.to_string()),
        ];
        self.post_form(seq, BALANCE_PATH, &params).await
    }

    /// POST string-keyed form parameters; any HTTP-level success counts as
    /// completion regardless of what the body says.
    async fn post_form(&self, seq: u64, path: &str, params: &[(&str, String)]) -> NetworkResponse {
        let result = self.http.post(self.url(path)).form(params).send().await;

        match result {
            Ok(resp) => match resp.text().await {
                Ok(body) => NetworkResponse::MutationCompleted { seq, body },
                Err(e) => NetworkResponse::MutationFailed {
                    seq,
                    message: format!("Error reading body: {}", e),
                },
            },
            Err(e) => NetworkResponse::MutationFailed {
                seq,
                message: describe_error(&e),
            },
        }
    }
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out (30s)".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("https://backend.example/");
        assert_eq!(
            client.url(DRIVERS_PATH),
            "https://backend.example/get_drivers.php"
        );
    }
}

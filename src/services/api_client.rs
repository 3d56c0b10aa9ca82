// ============================================================================
// API CLIENT - the only HTTP boundary (stateless)
// ============================================================================
// Named operations over the booking backend. No retry, no caching; every
// failure is reported back to the calling page.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::models::booking::{Booking, BookingSummary, Requester};
use crate::models::kit::{Kit, KitQuantity};
use crate::utils::constants::BACKEND_URL;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not authorized")]
    Unauthorized,
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Stateless HTTP client; cheap to construct per call site.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// List the full kit catalog.
    pub async fn fetch_kits(&self) -> Result<Vec<Kit>, ApiError> {
        let url = format!("{}/kit/", self.base_url);
        let response = send(Request::get(&url)).await?;

        decode::<Vec<Kit>>(&response).await
    }

    /// Create the requester's user record; returns the new user id.
    pub async fn create_user(&self, requester: &Requester) -> Result<i64, ApiError> {
        let url = format!("{}/user/create_user", self.base_url);

        log::info!(
            "👤 Creating user record for {} {}",
            requester.first_name,
            requester.last_name
        );

        let response = send_json(Request::post(&url), requester).await?;
        let created = decode::<CreateUserResponse>(&response).await?;

        Ok(created.id)
    }

    /// Create the booking referencing an existing user id.
    pub async fn create_booking(&self, request: &CreateBookingRequest) -> Result<(), ApiError> {
        let url = format!("{}/bookings/create", self.base_url);

        log::info!(
            "📦 Creating booking for user {} ({} kit lines)",
            request.user_id,
            request.kit_quantities.len()
        );

        send_json(Request::post(&url), request).await?;
        Ok(())
    }

    /// Find bookings matching a requester name. Tolerates both response
    /// shapes the backend has shipped: a plain array of summaries, or a
    /// `{booking}` singular object. A 404 is reported as an empty list.
    pub async fn find_user_bookings(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<BookingSummary>, ApiError> {
        let url = format!("{}/returns/find-user-bookings", self.base_url);
        let request = FindBookingsRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };

        log::info!("🔍 Looking up bookings for {} {}", first_name, last_name);

        let response = match send_json(Request::post(&url), &request).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let found = match decode::<FindBookingsResponse>(&response).await? {
            FindBookingsResponse::Many(summaries) => summaries,
            FindBookingsResponse::One { booking } => vec![booking],
        };

        log::info!("✅ Lookup matched {} booking(s)", found.len());
        Ok(found)
    }

    /// Fetch one booking together with its kit line items.
    pub async fn fetch_booking(&self, booking_id: i64) -> Result<Booking, ApiError> {
        let url = format!("{}/returns/booking-details", self.base_url);
        let request = BookingIdRequest { booking_id };

        let response = send_json(Request::post(&url), &request).await?;
        let details = decode::<BookingDetailsResponse>(&response).await?;

        log::info!(
            "✅ Booking {} loaded with {} kit(s)",
            details.booking.id,
            details.booking.kits.len()
        );
        Ok(details.booking)
    }

    /// Finalize the return of a booking's equipment.
    pub async fn confirm_return(&self, booking_id: i64) -> Result<(), ApiError> {
        let url = format!("{}/returns/confirm-return", self.base_url);
        let request = BookingIdRequest { booking_id };

        log::info!("📦 Confirming return of booking {}", booking_id);

        send_json(Request::post(&url), &request).await?;
        Ok(())
    }

    /// Authenticate an admin. The session lives in a cookie set by the
    /// backend, so the response body is irrelevant here.
    pub async fn admin_login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let url = format!("{}/admin/login", self.base_url);
        let request = AdminLoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Admin login for {}", username);

        let builder = Request::post(&url).credentials(RequestCredentials::Include);
        send_json(builder, &request).await?;
        Ok(())
    }

    /// Current bookings for the admin portal. Returned as raw JSON records;
    /// `AdminBooking::from_value` normalizes the drifting field names.
    pub async fn admin_bookings(&self) -> Result<Vec<serde_json::Value>, ApiError> {
        let url = format!("{}/admin/bookings", self.base_url);
        let response = send(Request::get(&url).credentials(RequestCredentials::Include)).await?;

        let body = decode::<serde_json::Value>(&response).await?;

        // Some revisions wrap the array in {"data": [...]}
        let records = match body {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(mut map) => match map.remove("data") {
                Some(serde_json::Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        log::info!("✅ Admin bookings loaded: {}", records.len());
        Ok(records)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn send(builder: gloo_net::http::RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn send_json<T: Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &T,
) -> Result<Response, ApiError> {
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn check(response: Response) -> Result<Response, ApiError> {
    match response.status() {
        401 | 403 => Err(ApiError::Unauthorized),
        status if !response.ok() => {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            Err(ApiError::Status { status, message })
        }
        _ => Ok(response),
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Deserialize)]
struct CreateUserResponse {
    id: i64,
}

/// Wire shape of `POST /bookings/create`. Start and end are full
/// `"YYYY-MM-DD HH:mm:00"` timestamps, recombined from the draft at this
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateBookingRequest {
    pub user_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub email: String,
    pub project_title: String,
    #[serde(rename = "kitQuantities")]
    pub kit_quantities: Vec<KitQuantity>,
}

#[derive(Serialize)]
struct FindBookingsRequest {
    first_name: String,
    last_name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FindBookingsResponse {
    Many(Vec<BookingSummary>),
    One { booking: BookingSummary },
}

#[derive(Serialize)]
struct BookingIdRequest {
    #[serde(rename = "bookingId")]
    booking_id: i64,
}

#[derive(Serialize)]
struct AdminLoginRequest {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct BookingDetailsResponse {
    booking: Booking,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::kit::Kit;

    #[test]
    fn create_booking_wire_shape() {
        let camera = Kit {
            id: 1,
            name: "Camera-1".to_string(),
            kit_type: "Camera".to_string(),
        };
        let mic = Kit {
            id: 2,
            name: "Lav-Mic".to_string(),
            kit_type: "Sound (3)".to_string(),
        };

        let request = CreateBookingRequest {
            user_id: 42,
            start_time: "2025-08-25 09:00:00".to_string(),
            end_time: "2025-08-25 17:00:00".to_string(),
            email: "jane@x.com".to_string(),
            project_title: "Showreel".to_string(),
            kit_quantities: vec![KitQuantity::new(&camera, 1), KitQuantity::new(&mic, 2)],
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["start_time"], "2025-08-25 09:00:00");
        assert_eq!(body["end_time"], "2025-08-25 17:00:00");
        assert_eq!(body["user_id"], 42);

        let kits = body["kitQuantities"].as_array().unwrap();
        assert_eq!(kits.len(), 2);
        assert_eq!(kits[0]["name"], "Camera-1");
        assert_eq!(kits[0]["quantity"], 1);
        assert_eq!(kits[0]["type"], "Camera");
        assert_eq!(kits[1]["name"], "Lav-Mic");
        assert_eq!(kits[1]["quantity"], 2);
    }

    #[test]
    fn find_bookings_accepts_both_response_shapes() {
        let many: FindBookingsResponse = serde_json::from_str(
            r#"[
                {"id": 1, "start_time": "a", "end_time": "b"},
                {"id": 2, "project_title": "Promo", "start_time": "a", "end_time": "b"}
            ]"#,
        )
        .unwrap();
        match many {
            FindBookingsResponse::Many(summaries) => assert_eq!(summaries.len(), 2),
            FindBookingsResponse::One { .. } => panic!("expected the array shape"),
        }

        let one: FindBookingsResponse = serde_json::from_str(
            r#"{"booking": {"id": 7, "start_time": "a", "end_time": "b", "kits": []}}"#,
        )
        .unwrap();
        match one {
            FindBookingsResponse::One { booking } => assert_eq!(booking.id, 7),
            FindBookingsResponse::Many(_) => panic!("expected the singular shape"),
        }
    }

    #[test]
    fn booking_id_request_uses_camel_case_key() {
        let body = serde_json::to_value(BookingIdRequest { booking_id: 9 }).unwrap();
        assert_eq!(body["bookingId"], 9);
    }
}

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use super::kit::KitQuantity;

/// Booking draft built across the selection and details pages. Travels only
/// as in-memory navigation state; a page entered directly starts from
/// `Default` and renders its empty state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingDraft {
    pub kit_quantities: Vec<KitQuantity>,
    pub project_title: String,
    /// Canonical `YYYY-MM-DD`.
    pub date: String,
    /// Canonical `HH:mm`.
    pub start_time: String,
    /// Canonical `HH:mm`.
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please pick a valid booking date.")]
    InvalidDate,
    #[error("Please pick valid start and end times.")]
    InvalidTime,
    #[error("End time cannot be earlier than start time!")]
    EndBeforeStart,
}

impl BookingDraft {
    /// Validates the date/time fields. Equal start and end times are allowed;
    /// an end time strictly before the start blocks progression.
    pub fn validate(&self) -> Result<(), DraftError> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| DraftError::InvalidDate)?;

        let start = NaiveTime::parse_from_str(&self.start_time, "%H:%M")
            .map_err(|_| DraftError::InvalidTime)?;
        let end = NaiveTime::parse_from_str(&self.end_time, "%H:%M")
            .map_err(|_| DraftError::InvalidTime)?;

        if end < start {
            return Err(DraftError::EndBeforeStart);
        }

        Ok(())
    }

    /// Full `"<date> <HH:mm>:00"` start timestamp for the create payload.
    pub fn full_start(&self) -> String {
        format!("{} {}:00", self.date, self.start_time)
    }

    /// Full `"<date> <HH:mm>:00"` end timestamp for the create payload.
    pub fn full_end(&self) -> String {
        format!("{} {}:00", self.date, self.end_time)
    }
}

/// Identity collected on the finalize page; creates the server-side user
/// record whose id the booking references.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Requester {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Requester {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("Please fill in your first and last name.");
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address.");
        }
        Ok(())
    }
}

/// Server-owned booking read back during the return flow. Never mutated
/// client-side; only its id is submitted to trigger the return.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub project_title: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub kits: Vec<BookingKit>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingKit {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl BookingKit {
    /// Checklist line label with a quantity annotation when above one.
    pub fn display_label(&self) -> String {
        if self.quantity > 1 {
            format!("{} (x{})", self.name, self.quantity)
        } else {
            self.name.clone()
        }
    }
}

/// Lightweight booking shape listed in the return-flow chooser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingSummary {
    pub id: i64,
    #[serde(default)]
    pub project_title: Option<String>,
    pub start_time: String,
    pub end_time: String,
}

impl BookingSummary {
    pub fn title(&self) -> &str {
        self.project_title.as_deref().unwrap_or("Untitled booking")
    }

    pub fn time_range(&self) -> String {
        format!("{} → {}", self.start_time, self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(date: &str, start: &str, end: &str) -> BookingDraft {
        BookingDraft {
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn end_before_start_is_rejected() {
        assert_eq!(
            draft("2025-08-25", "17:00", "09:00").validate(),
            Err(DraftError::EndBeforeStart)
        );
    }

    #[test]
    fn end_after_or_equal_start_is_accepted() {
        assert!(draft("2025-08-25", "09:00", "17:00").validate().is_ok());
        assert!(draft("2025-08-25", "09:00", "09:00").validate().is_ok());
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert_eq!(
            draft("soon", "09:00", "17:00").validate(),
            Err(DraftError::InvalidDate)
        );
        assert_eq!(
            draft("2025-08-25", "9 o'clock", "17:00").validate(),
            Err(DraftError::InvalidTime)
        );
        assert_eq!(
            draft("2025-08-25", "09:00", "").validate(),
            Err(DraftError::InvalidTime)
        );
    }

    #[test]
    fn full_timestamps_recombine_date_and_time() {
        let draft = draft("2025-08-25", "09:00", "17:00");
        assert_eq!(draft.full_start(), "2025-08-25 09:00:00");
        assert_eq!(draft.full_end(), "2025-08-25 17:00:00");
    }

    #[test]
    fn requester_validation() {
        let ok = Requester {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
        };
        assert!(ok.validate().is_ok());

        let blank = Requester {
            first_name: " ".into(),
            ..ok.clone()
        };
        assert!(blank.validate().is_err());

        let bad_email = Requester {
            email: "jane.x.com".into(),
            ..ok
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn booking_kits_default_missing_quantity_to_one() {
        let booking: Booking = serde_json::from_str(
            r#"{
                "id": 7,
                "user_id": 3,
                "start_time": "2025-08-25 09:00:00",
                "end_time": "2025-08-25 17:00:00",
                "kits": [
                    {"id": 1, "name": "Canon R6"},
                    {"id": 2, "name": "Lav Mic", "quantity": 2}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(booking.kits[0].quantity, 1);
        assert_eq!(booking.kits[0].display_label(), "Canon R6");
        assert_eq!(booking.kits[1].display_label(), "Lav Mic (x2)");
    }
}

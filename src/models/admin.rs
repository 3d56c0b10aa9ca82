use chrono::DateTime;
use serde_json::Value;

/// Normalized admin view of a booking.
///
/// The admin bookings endpoint has drifted across backend revisions, so field
/// names come in several variants (`name`/`userName`/`requester`,
/// `kits`/`items`, ...). All of them are resolved once, here, into one
/// canonical shape instead of with fallback chains at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminBooking {
    pub id: String,
    pub name: String,
    pub project: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub kits: Vec<AdminKit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminKit {
    pub name: String,
    pub quantity: Option<u32>,
}

impl AdminBooking {
    pub fn from_value(value: &Value) -> Self {
        let name = first_string(value, &["name", "userName", "requester"])
            .unwrap_or_else(|| "Unknown".to_string());
        let project = first_string(value, &["projectName", "project", "project_title"]);
        let start = first_string(value, &["startTime", "start", "bookingTime", "from", "start_time"]);
        let end = first_string(value, &["endTime", "end", "to", "end_time"]);

        let id = first_string(value, &["id"])
            .unwrap_or_else(|| format!("{}-{}", name, start.as_deref().unwrap_or("?")));

        let kits = ["kits", "items", "kit"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_array))
            .map(|items| items.iter().map(AdminKit::from_value).collect())
            .unwrap_or_default();

        Self {
            id,
            name,
            project,
            start,
            end,
            kits,
        }
    }

    /// `"YYYY-MM-DD HH:mm → YYYY-MM-DD HH:mm"`, degrading through
    /// start-only down to `"Time: N/A"` when the record carries no times.
    pub fn time_label(&self) -> String {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => format!("{} → {}", format_time(start), format_time(end)),
            (Some(start), None) => format_time(start),
            _ => "Time: N/A".to_string(),
        }
    }
}

impl AdminKit {
    fn from_value(value: &Value) -> Self {
        let name = first_string(value, &["name", "title"])
            .unwrap_or_else(|| "Unnamed kit".to_string());
        let quantity = ["qty", "quantity"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_u64))
            .map(|n| n as u32);

        Self { name, quantity }
    }

    pub fn quantity_label(&self) -> Option<String> {
        self.quantity.map(|n| format!("Qty: {}", n))
    }
}

/// First present key, stringified. Numbers are accepted so numeric ids
/// normalize like string ones.
fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn format_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_field_name_variants() {
        let a = AdminBooking::from_value(&json!({
            "id": "BKG-1001",
            "name": "John Smith",
            "projectName": "Project Aurora",
            "startTime": "2025-10-21T09:30:00Z",
            "endTime": "2025-10-21T12:30:00Z",
            "kits": [{"id": "KIT-1", "name": "Canon EOS R6", "qty": 1}]
        }));
        assert_eq!(a.name, "John Smith");
        assert_eq!(a.project.as_deref(), Some("Project Aurora"));
        assert_eq!(a.kits.len(), 1);

        let b = AdminBooking::from_value(&json!({
            "id": 42,
            "userName": "Alice Wong",
            "project": "Student Promo",
            "start": "2025-10-21T13:00:00Z",
            "to": "2025-10-21T15:00:00Z",
            "items": [{"title": "Sony A7 IV", "quantity": 2}]
        }));
        assert_eq!(b.id, "42");
        assert_eq!(b.name, "Alice Wong");
        assert_eq!(b.kits[0].name, "Sony A7 IV");
        assert_eq!(b.kits[0].quantity, Some(2));
    }

    #[test]
    fn missing_fields_do_not_fail() {
        let booking = AdminBooking::from_value(&json!({"requester": "Dept. Physics"}));
        assert_eq!(booking.name, "Dept. Physics");
        assert!(booking.project.is_none());
        assert!(booking.kits.is_empty());
        assert_eq!(booking.time_label(), "Time: N/A");
    }

    #[test]
    fn time_label_formats_rfc3339_and_degrades() {
        let both = AdminBooking::from_value(&json!({
            "name": "Tom",
            "startTime": "2025-10-21T09:30:00Z",
            "endTime": "2025-10-21T12:30:00Z"
        }));
        assert_eq!(both.time_label(), "2025-10-21 09:30 → 2025-10-21 12:30");

        let start_only = AdminBooking::from_value(&json!({
            "name": "Tom",
            "startTime": "2025-10-23T10:00:00Z"
        }));
        assert_eq!(start_only.time_label(), "2025-10-23 10:00");

        let raw = AdminBooking::from_value(&json!({
            "name": "Tom",
            "startTime": "tomorrow-ish"
        }));
        assert_eq!(raw.time_label(), "tomorrow-ish");
    }

    #[test]
    fn unnamed_kits_get_a_placeholder() {
        let booking = AdminBooking::from_value(&json!({
            "name": "Sara",
            "kit": [{"qty": 3}]
        }));
        assert_eq!(booking.kits[0].name, "Unnamed kit");
        assert_eq!(booking.kits[0].quantity_label().as_deref(), Some("Qty: 3"));
    }
}

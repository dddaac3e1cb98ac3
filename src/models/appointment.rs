use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw field values read from the booking form, untrimmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Builds an appointment from raw form input: trims every field, folds
    /// empty optional fields to `None`, stamps `created_at`. Does not
    /// validate.
    pub fn from_request(request: &BookingRequest, now: DateTime<Utc>) -> Self {
        Self {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: optional(&request.phone),
            service: request.service.trim().to_string(),
            date: request.date.trim().to_string(),
            time: request.time.trim().to_string(),
            message: optional(&request.message),
            created_at: now,
        }
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            name: "  Léa Test  ".to_string(),
            email: "a@b.com".to_string(),
            phone: "   ".to_string(),
            service: "Coupe".to_string(),
            date: " 2999-01-01".to_string(),
            time: "10:00 ".to_string(),
            message: "À bientôt".to_string(),
        }
    }

    #[test]
    fn test_from_request_trims_and_stamps() {
        let now = Utc::now();
        let appt = Appointment::from_request(&request(), now);

        assert_eq!(appt.name, "Léa Test");
        assert_eq!(appt.date, "2999-01-01");
        assert_eq!(appt.time, "10:00");
        assert_eq!(appt.message.as_deref(), Some("À bientôt"));
        assert_eq!(appt.created_at, now);
    }

    #[test]
    fn test_from_request_empty_optional_is_none() {
        let appt = Appointment::from_request(&request(), Utc::now());
        assert_eq!(appt.phone, None);
    }

    #[test]
    fn test_serde_round_trip() {
        let appt = Appointment::from_request(&request(), Utc::now());
        let json = serde_json::to_string(&appt).unwrap();
        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, appt);
    }

    #[test]
    fn test_created_at_uses_camel_case_key() {
        let appt = Appointment::from_request(&request(), Utc::now());
        let json = serde_json::to_string(&appt).unwrap();
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_absent_optional_fields_deserialize() {
        let json = r#"{"name":"A","email":"a@b.com","service":"Coupe","date":"2999-01-01","time":"10:00","createdAt":"2026-08-06T10:00:00Z"}"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.phone, None);
        assert_eq!(appt.message, None);
    }
}

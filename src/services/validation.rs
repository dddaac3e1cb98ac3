use chrono::{Duration, NaiveDateTime};

use crate::models::Appointment;

pub const PAST_GRACE_MINUTES: i64 = 5;

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MissingFields,
    PastSlot,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingFields => {
                write!(f, "required booking fields are missing")
            }
            ValidationError::PastSlot => {
                write!(
                    f,
                    "requested slot is more than {PAST_GRACE_MINUTES} minutes in the past"
                )
            }
        }
    }
}

/// Checks a booking request against `now`. Name, email, service, date and
/// time must be non-empty; a slot that parses to a point in time must not be
/// more than `PAST_GRACE_MINUTES` in the past. A slot that does not parse
/// passes — this is a loose sanity check, not a calendar validator.
pub fn validate(appt: &Appointment, now: NaiveDateTime) -> Result<(), ValidationError> {
    if appt.name.trim().is_empty()
        || appt.email.trim().is_empty()
        || appt.service.trim().is_empty()
        || appt.date.trim().is_empty()
        || appt.time.trim().is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    let combined = format!("{} {}", appt.date.trim(), appt.time.trim());
    let slot = match NaiveDateTime::parse_from_str(&combined, "%Y-%m-%d %H:%M") {
        Ok(slot) => slot,
        Err(e) => {
            tracing::debug!(error = %e, slot = %combined, "requested slot did not parse");
            return Ok(());
        }
    };

    if slot < now - Duration::minutes(PAST_GRACE_MINUTES) {
        return Err(ValidationError::PastSlot);
    }

    Ok(())
}

use std::time::Duration;

use chrono::{Local, Utc};

use crate::config::AppConfig;
use crate::models::{Appointment, BookingRequest};
use crate::services::log::AppointmentLog;
use crate::services::notify::{NotificationSurface, Notifier};
use crate::services::{mailto, validation};
use crate::storage::SqliteStore;

const MSG_SAVED: &str = "Demande enregistrée 💗 Tu peux aussi l’envoyer par e-mail si tu veux.";
const MSG_INVALID: &str = "Oups… vérifie les champs (et choisis un créneau futur).";
const MSG_MAIL_INCOMPLETE: &str =
    "Remplis d’abord le formulaire (nom, email, prestation, date, heure).";
const MSG_CLEARED: &str = "C’est tout effacé ✨";
const MSG_STORE_FAILED: &str = "Oups… impossible d’enregistrer pour le moment.";

/// Walks a user action end to end: read form, validate, persist, notify.
/// Nothing here is fatal to the embedding page; every failure ends in a
/// toast.
pub struct FrontDesk {
    log: AppointmentLog,
    notifier: Notifier,
    config: AppConfig,
}

impl FrontDesk {
    pub fn new(log: AppointmentLog, notifier: Notifier, config: AppConfig) -> Self {
        Self {
            log,
            notifier,
            config,
        }
    }

    /// Wires a desk over the durable store named by the config.
    pub fn from_config(
        config: AppConfig,
        surface: Box<dyn NotificationSurface>,
    ) -> anyhow::Result<Self> {
        let store = SqliteStore::open(&config.database_path)?;
        let log = AppointmentLog::new(Box::new(store), config.storage_key.clone());
        let notifier = Notifier::new(surface, Duration::from_millis(config.toast_duration_ms));
        Ok(Self::new(log, notifier, config))
    }

    /// Handles a booking submission. Returns whether the request was
    /// accepted and persisted; rejection leaves the log untouched.
    pub fn submit(&mut self, request: &BookingRequest) -> bool {
        let appt = Appointment::from_request(request, Utc::now());

        if let Err(e) = validation::validate(&appt, Local::now().naive_local()) {
            tracing::debug!(error = %e, "rejected booking request");
            self.notifier.notify(MSG_INVALID);
            return false;
        }

        if let Err(e) = self.log.append(appt) {
            tracing::error!(error = %e, "failed to persist booking request");
            self.notifier.notify(MSG_STORE_FAILED);
            return false;
        }

        self.notifier.notify(MSG_SAVED);
        true
    }

    /// Builds the mail-composition URI for the current form values, after an
    /// independent completeness check.
    pub fn mail_draft(&mut self, request: &BookingRequest) -> Option<String> {
        let appt = Appointment::from_request(request, Utc::now());

        if appt.name.is_empty()
            || appt.email.is_empty()
            || appt.service.is_empty()
            || appt.date.is_empty()
            || appt.time.is_empty()
        {
            self.notifier.notify(MSG_MAIL_INCOMPLETE);
            return None;
        }

        Some(mailto::build_mailto(&appt, &self.config.mail_recipient))
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.log.clear() {
            tracing::error!(error = %e, "failed to clear appointment log");
            self.notifier.notify(MSG_STORE_FAILED);
            return;
        }
        self.notifier.notify(MSG_CLEARED);
    }

    pub fn render(&self) -> String {
        self.log.render()
    }

    /// Drives the notification hide timer; forward from the embedding event
    /// loop.
    pub fn tick(&mut self) {
        self.notifier.tick();
    }
}

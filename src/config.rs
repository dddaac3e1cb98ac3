use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_path: String,
    pub storage_key: String,
    pub mail_recipient: String,
    pub toast_duration_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("RENDEZVOUS_DB")
                .unwrap_or_else(|_| "rendezvous.db".to_string()),
            storage_key: env::var("RENDEZVOUS_STORAGE_KEY")
                .unwrap_or_else(|_| "lbdl_appointments_v1".to_string()),
            mail_recipient: env::var("RENDEZVOUS_MAIL_TO")
                .unwrap_or_else(|_| "contact@lesbeautesdelea.fr".to_string()),
            toast_duration_ms: env::var("RENDEZVOUS_TOAST_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4500),
        }
    }
}

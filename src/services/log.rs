use crate::errors::AppError;
use crate::models::Appointment;
use crate::services::render;
use crate::storage::StorageBackend;

/// The persisted, ordered collection of booking requests. Owns its storage
/// backend handle and the fixed key the log lives under.
pub struct AppointmentLog {
    store: Box<dyn StorageBackend>,
    key: String,
}

impl AppointmentLog {
    pub fn new(store: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Reads the persisted log. Absent, unreadable, or malformed data
    /// degrades to an empty log rather than an error.
    pub fn load(&self) -> Vec<Appointment> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read appointment log");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "stored appointment log is malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Serializes and overwrites the whole log in a single backend write.
    pub fn save(&self, items: &[Appointment]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(&self.key, &raw)
    }

    pub fn append(&self, appt: Appointment) -> Result<(), AppError> {
        let mut items = self.load();
        items.push(appt);
        self.save(&items)
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.save(&[])
    }

    pub fn render(&self) -> String {
        render::render_list(&self.load())
    }
}

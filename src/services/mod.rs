pub mod desk;
pub mod log;
pub mod mailto;
pub mod notify;
pub mod render;
pub mod validation;

pub use desk::FrontDesk;
pub use log::AppointmentLog;
pub use notify::{NotificationSurface, Notifier};

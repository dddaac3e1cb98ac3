use crate::models::Appointment;

pub const EMPTY_PLACEHOLDER: &str = "<div class=\"appt\"><div class=\"appt__title\">Aucune demande pour le moment</div><div class=\"appt__meta\">Tes demandes s’afficheront ici 💗</div></div>";

/// Renders the log as an HTML fragment, most recent submission first. Every
/// interpolated field goes through `escape_html`; raw user input must never
/// reach the markup.
pub fn render_list(items: &[Appointment]) -> String {
    if items.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    items.iter().rev().map(render_entry).collect()
}

fn render_entry(appt: &Appointment) -> String {
    let mut meta = format!(
        "<div><strong>Email :</strong> {}</div>",
        escape_html(&appt.email)
    );
    if let Some(phone) = &appt.phone {
        meta.push_str(&format!(
            "<div><strong>Tél :</strong> {}</div>",
            escape_html(phone)
        ));
    }
    if let Some(message) = &appt.message {
        meta.push_str(&format!(
            "<div><strong>Message :</strong> {}</div>",
            escape_html(message)
        ));
    }

    let title = format!("{} — {}", escape_html(&appt.service), escape_html(&appt.name));
    let when = escape_html(&format_when(appt));

    format!(
        "<div class=\"appt\">\
         <div class=\"appt__top\">\
         <div class=\"appt__title\">{title}</div>\
         <div class=\"appt__when\">{when}</div>\
         </div>\
         <div class=\"appt__meta\">{meta}</div>\
         </div>"
    )
}

fn format_when(appt: &Appointment) -> String {
    format!("{} • {}", appt.date, appt.time)
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

use crate::models::Appointment;

pub fn mail_subject(appt: &Appointment) -> String {
    format!("Demande de rendez-vous — {}", appt.service)
}

/// Fixed-template message body enumerating the request, with `—` standing in
/// for an absent phone or message.
pub fn mail_body(appt: &Appointment) -> String {
    let phone = appt.phone.as_deref().unwrap_or("—");
    let message = appt.message.as_deref().unwrap_or("—");

    format!(
        "Bonjour Léa,\n\
         \n\
         Je souhaite prendre rendez-vous :\n\
         \n\
         • Prestation : {service}\n\
         • Date : {date}\n\
         • Heure : {time}\n\
         • Nom : {name}\n\
         • Email : {email}\n\
         • Téléphone : {phone}\n\
         \n\
         Message :\n\
         {message}\n\
         \n\
         Merci 💗",
        service = appt.service,
        date = appt.date,
        time = appt.time,
        name = appt.name,
        email = appt.email,
    )
}

/// Builds the `mailto:` URI handed to the environment's default mail
/// handler. Subject and body are percent-encoded independently.
pub fn build_mailto(appt: &Appointment, recipient: &str) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&mail_subject(appt)),
        urlencoding::encode(&mail_body(appt))
    )
}

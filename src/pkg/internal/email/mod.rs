use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub mod newsletter;

use crate::{conf::settings, prelude::Result};

pub trait SendEmail {
    fn send(&self, email: &str) -> Result<()>;
}

/// Fire-and-forget delivery: the caller never waits on SMTP, and failures
/// are logged rather than surfaced. Without an smtp server configured the
/// message is only logged.
pub fn send_email(email: &str, subject: &str, body: &str, is_html: bool) -> Result<()> {
    if settings.smtp_server.is_empty() {
        tracing::info!("smtp not configured, message for {}:\n{}", email, body);
        return Ok(());
    }
    let (name, _) = email.split_once('@').unwrap_or(("unknown", ""));
    let name = name.to_string();
    let email = email.to_string();
    let subject = subject.to_string();
    let body = body.to_string();
    tracing::debug!("sending email to {}", &email);
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || -> std::result::Result<(), String> {
            let content_type = if is_html {
                ContentType::TEXT_HTML
            } else {
                ContentType::TEXT_PLAIN
            };

            let message = Message::builder()
                .from(
                    format!("{} <{}>", &settings.service_name, &settings.from_email)
                        .parse()
                        .map_err(|e| format!("bad from address: {e}"))?,
                )
                .to(format!("{} <{}>", &name, &email)
                    .parse()
                    .map_err(|e| format!("bad to address: {e}"))?)
                .subject(subject)
                .header(content_type)
                .body(body)
                .map_err(|e| format!("could not build message: {e}"))?;

            let creds = Credentials::new(settings.smtp_user.clone(), settings.smtp_pass.clone());

            let mailer = SmtpTransport::relay(&settings.smtp_server)
                .map_err(|e| format!("smtp relay error: {e}"))?
                .port(settings.smtp_port)
                .credentials(creds)
                .build();

            mailer.send(&message).map_err(|e| format!("{e}"))?;
            Ok(())
        })
        .await;

        match result {
            Ok(Ok(())) => tracing::debug!("email sent successfully"),
            Ok(Err(e)) => tracing::error!("could not send email: {}", e),
            Err(e) => tracing::error!("email task failed: {:?}", e),
        }
    });
    Ok(())
}

//! Outbound email for the agot website.
//!
//! - [`MailMessage`] -- one rendered message (subject, HTML body, sender,
//!   recipients).
//! - [`TemplateRenderer`] -- renders the bundled mail templates with `tera`.
//! - [`MailTransport`] -- where messages go: SMTP in production, the log in
//!   development, memory in tests.
//! - [`send_mass_mail`] -- hands a batch to a transport and reports how many
//!   went out.

pub mod error;
pub mod mass;
pub mod message;
pub mod template;
pub mod transport;

pub use error::MailError;
pub use mass::{send_mass_mail, MassMailReport};
pub use message::MailMessage;
pub use template::TemplateRenderer;
pub use transport::log::LogTransport;
pub use transport::memory::MemoryTransport;
pub use transport::smtp::{EmailConfig, SmtpTransport};
pub use transport::MailTransport;

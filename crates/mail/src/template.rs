//! Mail template rendering.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Names ending in `.html` are auto-escaped by `tera`.

use tera::{Context, Tera};

use crate::error::MailError;

/// Name of the "it's your turn" notification template.
pub const TURN_NOTIFICATION_TEMPLATE: &str = "mail_notification.html";

const BUILTIN_TEMPLATES: [(&str, &str); 1] = [(
    TURN_NOTIFICATION_TEMPLATE,
    include_str!("../templates/mail_notification.html"),
)];

/// Renders the bundled mail templates.
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Build a renderer with every bundled template registered.
    pub fn new() -> Result<Self, MailError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Render the named template with `context`.
    pub fn render(&self, name: &str, context: &Context) -> Result<String, MailError> {
        Ok(self.tera.render(name, context)?)
    }
}

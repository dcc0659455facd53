//! services/template_service.rs
//! Plantilla única del correo de prospección para clientes comerciales.
//! La usan el envío SMTP y el endpoint de envío unitario.

use crate::models::email_model::OutreachEmail;

pub const OUTREACH_SUBJECT: &str = "Lawn care and moving help for your business";

/// Renderiza el correo para un negocio. El nombre es el único parámetro.
pub fn render_outreach(name: &str) -> OutreachEmail {
    let name = name.trim();
    let greeting = if name.is_empty() {
        "Hello,".to_string()
    } else {
        format!("Hello {},", name)
    };

    let text = format!(
        "{greeting}\n\n\
         We are a local, family-run crew offering commercial lawn care \
         (mowing, edging, leaf cleanup, seasonal maintenance) and moving help \
         for offices and storefronts.\n\n\
         If {target} could use a reliable team on a weekly schedule or for a one-off job, \
         reply to this email and we will send a free quote within one business day.\n\n\
         Thanks for your time,\n\
         The Lawn & Move team\n",
        greeting = greeting,
        target = if name.is_empty() { "your business" } else { name },
    );

    let html = format!(
        "<p>{greeting}</p>\
         <p>We are a local, family-run crew offering commercial <strong>lawn care</strong> \
         (mowing, edging, leaf cleanup, seasonal maintenance) and <strong>moving help</strong> \
         for offices and storefronts.</p>\
         <p>If {target} could use a reliable team on a weekly schedule or for a one-off job, \
         reply to this email and we will send a free quote within one business day.</p>\
         <p>Thanks for your time,<br>The Lawn &amp; Move team</p>",
        greeting = escape_html(&greeting),
        target = if name.is_empty() {
            "your business".to_string()
        } else {
            escape_html(name)
        },
    );

    OutreachEmail {
        subject: OUTREACH_SUBJECT.to_string(),
        text,
        html,
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

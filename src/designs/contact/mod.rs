use crate::contact::{ContactEcho, ContactFields};
use crate::render::html_escape;
use crate::theme::ThemeName;

const INTRO: &str = "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions.";

/// Build the contact section. `echo` carries the values and acknowledgement
/// of a no-script submit; the inputs keep whatever was entered.
pub fn render_section(theme: ThemeName, echo: Option<&ContactEcho>) -> String {
    let tokens = theme.tokens();
    let blank = ContactFields::default();
    let fields = echo.map(|e| &e.fields).unwrap_or(&blank);

    let flash_html = match echo.and_then(|e| e.acknowledgement) {
        Some(ack) => format!(
            "<p class=\"contact-flash\" role=\"status\">{}</p>",
            html_escape(ack.message)
        ),
        None => String::new(),
    };

    format!(
        r#"<section id="contact" class="contact-section"><div class="container"><div class="contact-content">
<h2 class="section-title">Get In Touch</h2>
<p style="color: {text_alt}; margin-bottom: 30px">{intro}</p>
{flash_html}<form id="contact-form" class="contact-form" method="post" action="/contact?theme={theme}">
<input class="input" type="text" name="name" placeholder="Your Name" value="{name}" required>
<input class="input" type="email" name="email" placeholder="Your Email" value="{email}" required>
<input class="input" type="text" name="subject" placeholder="Subject" value="{subject}" required>
<textarea class="input textarea" name="message" placeholder="Your Message" required>{message}</textarea>
<button class="submit-button" type="submit">Send Message</button>
</form>
</div></div></section>"#,
        text_alt = tokens.text_alt,
        intro = INTRO,
        flash_html = flash_html,
        theme = theme,
        name = html_escape(&fields.name),
        email = html_escape(&fields.email),
        subject = html_escape(&fields.subject),
        message = html_escape(&fields.message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Acknowledgement, ACKNOWLEDGEMENT};

    #[test]
    fn test_blank_form_has_four_required_fields() {
        let html = render_section(ThemeName::Dark, None);
        assert_eq!(html.matches(" required").count(), 4);
        assert!(html.contains("action=\"/contact?theme=dark\""));
        assert!(!html.contains("contact-flash"));
        assert!(html.contains("color: #8892b0"));
    }

    #[test]
    fn test_echo_keeps_values_and_shows_acknowledgement() {
        let echo = ContactEcho {
            fields: ContactFields {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                subject: "Hello".into(),
                message: "Test <message>".into(),
            },
            acknowledgement: Some(Acknowledgement { message: ACKNOWLEDGEMENT }),
        };
        let html = render_section(ThemeName::Light, Some(&echo));
        assert!(html.contains("value=\"Jane Doe\""));
        assert!(html.contains("value=\"jane@example.com\""));
        assert!(html.contains(">Test &lt;message&gt;</textarea>"));
        assert_eq!(html.matches("Form submitted!").count(), 1);
    }
}

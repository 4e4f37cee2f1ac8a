//! Terminal output for CLI commands.
//!
//! Status lines go to stderr so that `show` and `routes` payloads on stdout
//! stay pipeable.

use console::{Style, Term};

/// Styled status lines plus a plain payload channel.
pub(crate) struct Output {
    status: Term,
    stdout: Term,
    ok: Style,
    warn: Style,
    fail: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            stdout: Term::stdout(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    /// Unstyled status line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.styled(&self.ok, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&self.warn, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.fail, msg);
    }

    /// Section heading, e.g. the config file being checked.
    pub(crate) fn heading(&self, msg: &str) {
        self.styled(&self.heading, msg);
    }

    /// Write command payload to stdout as exactly one trailing newline.
    pub(crate) fn payload(&self, text: &str) -> std::io::Result<()> {
        self.stdout.write_line(payload_body(text))
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.status.write_line(&style.apply_to(msg).to_string());
    }
}

/// Payload text without trailing newlines; `write_line` adds one back.
fn payload_body(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_body_strips_trailing_newlines() {
        assert_eq!(payload_body("lang = \"zh-CN\"\n\n"), "lang = \"zh-CN\"");
        assert_eq!(payload_body("a\r\nb\r\n"), "a\r\nb");
        assert_eq!(payload_body(""), "");
    }
}

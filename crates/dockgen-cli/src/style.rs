const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const MAGENTA: &str = "\x1b[35m";
const BOLD: &str = "\x1b[1m";

/// Terminal styling for prompts and status messages.
///
/// When disabled every helper returns the text unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn banner(&self, text: &str) -> String {
        self.paint(&[GREEN, BOLD], text)
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(&[MAGENTA, BOLD], text)
    }

    pub fn hint(&self, text: &str) -> String {
        self.paint(&[RED], text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(&[RED, BOLD], text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(&[GREEN, BOLD], text)
    }

    fn paint(&self, codes: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", codes.concat())
        } else {
            text.to_owned()
        }
    }
}

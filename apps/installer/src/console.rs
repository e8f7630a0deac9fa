//! Colored, interactive console output.
//!
//! Each line is styled on its own, so no color state leaks between lines.

use console::{Term, style};

/// Total number of pipeline stages shown in step counters.
pub const TOTAL_STEPS: u8 = 5;

/// Console front end for the installer.
pub struct Console {
    term: Term,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) {
        // A closed stdout only loses the message.
        let _ = self.term.write_line(text);
    }

    /// Prints the start banner with the Steam-only warning.
    pub fn banner(&self) {
        for text in [
            "=================================================",
            "    INSTALADOR DE TRADUÇÃO - PERSONA 3 PORTABLE  ",
            "=================================================",
            "AVISO: Esta tradução funciona SOMENTE na versão da STEAM.",
            "Certifique-se de que o jogo está instalado e atualizado.",
        ] {
            self.line(&style(text).yellow().to_string());
        }
    }

    /// Prints a `[n/5]` stage header.
    pub fn step(&self, n: u8, text: &str) {
        self.line(&step_line(n, text));
    }

    /// Prints an indented detail line under the current stage.
    pub fn detail(&self, text: &str) {
        self.line(&format!(" -> {text}"));
    }

    pub fn warn(&self, text: &str) {
        self.line(&style(format!(" -> AVISO: {text}")).yellow().to_string());
    }

    pub fn success(&self, text: &str) {
        self.line(&style(text).green().bold().to_string());
    }

    pub fn error(&self, text: &str) {
        self.line(&style(text).red().to_string());
    }

    /// Blocks until a key is pressed. Returns immediately without a terminal.
    pub fn pause(&self, prompt: &str) {
        self.line(prompt);
        if let Err(e) = self.term.read_key() {
            tracing::debug!(error = %e, "no key read");
        }
    }
}

fn step_line(n: u8, text: &str) -> String {
    format!("[{n}/{TOTAL_STEPS}] {text}")
}

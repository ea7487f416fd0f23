use std::{
    cell::{Cell, RefCell},
    io::{self, Write},
};

use forecast_core::{DisplayCard, Surface};

const LOADING_LINE: &str = "Loading forecast...";

/// How cards are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Surface backed by the terminal.
///
/// Status lines go to stderr, each on a line of its own so they interleave
/// cleanly with log output. Text cards are printed as they arrive; JSON cards
/// are buffered and written as one array by [`TerminalSurface::flush_cards`].
pub struct TerminalSurface {
    format: OutputFormat,
    status: RefCell<Box<dyn Write>>,
    loading: Cell<bool>,
    enabled: Cell<bool>,
    printed: Cell<usize>,
    buffered: RefCell<Vec<DisplayCard>>,
}

impl TerminalSurface {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_status_writer(format, Box::new(io::stderr()))
    }

    fn with_status_writer(format: OutputFormat, status: Box<dyn Write>) -> Self {
        Self {
            format,
            status: RefCell::new(status),
            loading: Cell::new(false),
            enabled: Cell::new(true),
            printed: Cell::new(0),
            buffered: RefCell::new(Vec::new()),
        }
    }

    /// Write buffered JSON cards, if any.
    pub fn flush_cards(&self) -> anyhow::Result<()> {
        if self.format != OutputFormat::Json {
            return Ok(());
        }

        let cards = self.buffered.borrow();
        if cards.is_empty() {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&*cards)?;
        println!("{json}");
        Ok(())
    }

    fn status_line(&self, line: &str) {
        let mut out = self.status.borrow_mut();
        // A closed stderr is not worth failing the cycle over.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

impl Surface for TerminalSurface {
    fn show_error(&self, message: &str) {
        self.status_line(&format!("error: {message}"));
    }

    fn hide_error(&self) {}

    fn show_loading(&self) {
        if !self.loading.replace(true) {
            self.status_line(LOADING_LINE);
        }
    }

    fn hide_loading(&self) {
        self.loading.set(false);
    }

    fn clear_cards(&self) {
        self.printed.set(0);
        self.buffered.borrow_mut().clear();
    }

    fn push_card(&self, card: &DisplayCard) {
        match self.format {
            OutputFormat::Json => self.buffered.borrow_mut().push(card.clone()),
            OutputFormat::Text => {
                if self.printed.get() > 0 {
                    println!();
                }
                println!("{card}");
                self.printed.set(self.printed.get() + 1);
            }
        }
    }

    fn control_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn set_control_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

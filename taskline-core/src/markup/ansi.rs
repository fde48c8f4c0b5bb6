use crate::markup::{Backend, Tone};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Terminal colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Backend for Ansi {
    fn write_text(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        out.write_all(text.as_bytes())
    }

    fn write_toned(&self, out: &mut dyn Write, tone: Tone, text: &str) -> io::Result<()> {
        match tone {
            Tone::Emphasis => write!(out, "{}", text.bold()),
            Tone::Success => write!(out, "{}", text.green()),
            Tone::Danger => write!(out, "{}", text.red()),
            Tone::Warning => write!(out, "{}", text.yellow()),
        }
    }
}

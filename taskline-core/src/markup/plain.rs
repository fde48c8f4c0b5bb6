use crate::markup::{Backend, Tone};
use std::io::{self, Write};

/// Drops all tones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Backend for Plain {
    fn write_text(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        out.write_all(text.as_bytes())
    }

    fn write_toned(&self, out: &mut dyn Write, _tone: Tone, text: &str) -> io::Result<()> {
        out.write_all(text.as_bytes())
    }
}

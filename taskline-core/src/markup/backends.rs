use crate::markup::{Ansi, Fragment, Html, Markup, Plain, Tone};
use std::io::{self, Write};

/// Maps semantic tones onto a concrete output representation.
pub trait Backend {
    fn write_text(&self, out: &mut dyn Write, text: &str) -> io::Result<()>;

    fn write_toned(&self, out: &mut dyn Write, tone: Tone, text: &str) -> io::Result<()>;

    fn write_markup(&self, out: &mut dyn Write, markup: &Markup) -> io::Result<()> {
        for fragment in markup.fragments() {
            match fragment {
                Fragment::Text(text) => self.write_text(out, text)?,
                Fragment::Toned(tone, text) => self.write_toned(out, *tone, text)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Plain,
    Ansi,
    Html,
}

pub fn backend(kind: BackendKind) -> Box<dyn Backend> {
    match kind {
        BackendKind::Plain => Box::new(Plain),
        BackendKind::Ansi => Box::new(Ansi),
        BackendKind::Html => Box::new(Html),
    }
}

/// Render markup to a string with the given backend.
pub fn render_to_string(backend: &dyn Backend, markup: &Markup) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = backend.write_markup(&mut buf, markup);
    String::from_utf8_lossy(&buf).into_owned()
}

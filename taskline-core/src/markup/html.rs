use crate::markup::{Backend, Tone};
use std::io::{self, Write};

/// HTML fragments meant for a `<pre>` block; tones become `tone-*` classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

impl Backend for Html {
    fn write_text(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        out.write_all(escape(text).as_bytes())
    }

    fn write_toned(&self, out: &mut dyn Write, tone: Tone, text: &str) -> io::Result<()> {
        write!(
            out,
            "<span class=\"tone-{}\">{}</span>",
            tone.name(),
            escape(text)
        )
    }
}

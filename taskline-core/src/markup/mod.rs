//! Presentation-neutral narrative text.
//!
//! The renderer never emits escape codes. It produces [`Markup`]: plain text
//! interleaved with spans tagged by a semantic [`Tone`]. A [`Backend`] decides
//! what a tone looks like on the way out.

mod ansi;
mod backends;
mod html;
mod plain;

pub use ansi::Ansi;
pub use backends::*;
pub use html::Html;
pub use plain::Plain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Emphasis,
    Success,
    Danger,
    Warning,
}

impl Tone {
    pub fn name(self) -> &'static str {
        match self {
            Tone::Emphasis => "emphasis",
            Tone::Success => "success",
            Tone::Danger => "danger",
            Tone::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Toned(Tone, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    fragments: Vec<Fragment>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        // Adjacent plain runs are merged so fragment lists stay easy to compare.
        if let Some(Fragment::Text(last)) = self.fragments.last_mut() {
            last.push_str(&text);
        } else {
            self.fragments.push(Fragment::Text(text));
        }
        self
    }

    pub fn toned(&mut self, tone: Tone, text: impl Into<String>) -> &mut Self {
        self.fragments.push(Fragment::Toned(tone, text.into()));
        self
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The text with all tones dropped.
    pub fn plain_text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| match f {
                Fragment::Text(t) | Fragment::Toned(_, t) => t.as_str(),
            })
            .collect()
    }
}

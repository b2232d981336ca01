//! Rendered text panels.
//!
//! A panel is the unit of dashboard output: a title plus pre-formatted lines.
//! Empty input produces a `NoData` panel instead of an error so the caller can
//! always display something.

use std::fmt;

use crossterm::style::{Color, Stylize};

use super::palette::Rgb;


const NO_DATA_MESSAGE: &str = "No data available";


/// A run of text with an optional foreground color.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub color: Option<Rgb>,
}


impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), color: None }
    }

    pub fn colored(text: impl Into<String>, color: Option<Rgb>) -> Self {
        Self { text: text.into(), color }
    }

    fn styled(&self) -> String {
        match self.color {
            Some(c) => self
                .text
                .as_str()
                .with(Color::Rgb { r: c.r, g: c.g, b: c.b })
                .to_string(),
            None => self.text.clone(),
        }
    }
}


/// One output line made of spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelLine {
    pub spans: Vec<Span>,
}


impl PanelLine {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { spans: vec![Span::plain(text)] }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// The line without any styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width in characters.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    fn styled(&self) -> String {
        self.spans.iter().map(Span::styled).collect()
    }
}


/// A titled block of rendered output.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    NoData { title: String, message: String },
    Rendered { title: String, lines: Vec<PanelLine> },
}


impl Panel {
    pub fn no_data(title: impl Into<String>) -> Self {
        Self::NoData {
            title: title.into(),
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn no_data_with(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NoData {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn rendered(title: impl Into<String>, lines: Vec<PanelLine>) -> Self {
        Self::Rendered {
            title: title.into(),
            lines,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::NoData { title, .. } | Self::Rendered { title, .. } => title,
        }
    }

    #[allow(dead_code)]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    /// Body lines; a `NoData` panel has exactly one.
    pub fn lines(&self) -> Vec<PanelLine> {
        match self {
            Self::NoData { message, .. } => vec![PanelLine::text(message.clone())],
            Self::Rendered { lines, .. } => lines.clone(),
        }
    }

    #[allow(dead_code)]
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines().iter().map(PanelLine::plain).collect()
    }

    /// Boxed form of the panel, optionally with ANSI colors.
    pub fn render(&self, colored: bool) -> String {
        let lines = self.lines();
        let title = self.title();

        let inner = lines
            .iter()
            .map(PanelLine::width)
            .chain(std::iter::once(title.chars().count()))
            .max()
            .unwrap_or(0);
        let border = "─".repeat(inner + 2);

        let mut out = Vec::with_capacity(lines.len() + 4);
        out.push(format!("┌{}┐", border));
        out.push(format!("│ {}{} │", title, " ".repeat(inner - title.chars().count())));
        out.push(format!("├{}┤", border));

        for line in &lines {
            let body = if colored { line.styled() } else { line.plain() };
            out.push(format!("│ {}{} │", body, " ".repeat(inner - line.width())));
        }

        out.push(format!("└{}┘", border));
        out.join("\n")
    }
}


impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

//! Line rendering for object tree rows.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::render::IconKind;
use crate::tree::{icon_tag, TreeRow};

/// Foreground colors for the tree view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Bright colors for dark backgrounds.
    Dark,
    /// Deeper colors for light backgrounds.
    Light,
    /// No colors at all.
    Mono,
}

impl Palette {
    /// Palette for a `tui.color_scheme` value. `auto` assumes a dark terminal.
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme {
            "light" => Palette::Light,
            "none" => Palette::Mono,
            _ => Palette::Dark,
        }
    }

    pub fn is_colored(self) -> bool {
        self != Palette::Mono
    }

    /// Style with `color` as foreground, plain in [`Palette::Mono`].
    pub fn fg(self, color: Color) -> Style {
        if self.is_colored() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Color of label text.
    pub fn text(self) -> Color {
        match self {
            Palette::Light => Color::Black,
            _ => Color::White,
        }
    }

    /// Color of an icon tag by kind.
    pub fn icon_color(self, kind: IconKind) -> Color {
        match self {
            Palette::Light => match kind {
                IconKind::Array => Color::Rgb(150, 100, 0),
                IconKind::Dict => Color::Blue,
                IconKind::Hex => Color::Magenta,
                IconKind::Indirect => Color::Rgb(0, 120, 140),
                IconKind::Integer | IconKind::Real => Color::Green,
                IconKind::Name => Color::Red,
                IconKind::StreamDict => Color::Rgb(40, 40, 160),
                IconKind::String => Color::Rgb(0, 110, 40),
                IconKind::None => Color::DarkGray,
            },
            _ => match kind {
                IconKind::Array => Color::Yellow,
                IconKind::Dict => Color::Blue,
                IconKind::Hex => Color::Magenta,
                IconKind::Indirect => Color::Cyan,
                IconKind::Integer | IconKind::Real => Color::Green,
                IconKind::Name => Color::LightRed,
                IconKind::StreamDict => Color::LightBlue,
                IconKind::String => Color::LightGreen,
                IconKind::None => Color::Gray,
            },
        }
    }
}

/// Build the line for one row: indentation, expand marker, icon tag, label.
pub fn row_line(row: &TreeRow, show_icons: bool, palette: Palette) -> Line<'static> {
    let indent = "  ".repeat(row.depth);
    let marker = if row.has_children {
        if row.is_expanded {
            "▼ "
        } else {
            "► "
        }
    } else {
        "  "
    };

    let mut spans = vec![Span::raw(format!("{}{}", indent, marker))];

    if show_icons {
        let tag = icon_tag(&row.rendered);
        if !tag.is_empty() {
            spans.push(Span::styled(tag, palette.fg(palette.icon_color(row.rendered.icon))));
            spans.push(Span::raw(" "));
        }
    }

    let mut label_style = palette.fg(palette.text());
    if row.has_children && palette.is_colored() {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    spans.push(Span::styled(row.rendered.label.clone(), label_style));

    Line::from(spans)
}

use clatter::stats::Stats;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::palette::popup_style;

pub const POPUP_WIDTH: u16 = 32;
pub const POPUP_HEIGHT: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PopupButton {
    Retry,
    Exit,
}

/// Results dialog shown when a round ends
#[derive(Debug, Clone, PartialEq)]
pub struct GameOverPopup {
    pub stats: Stats,
    pub selected: PopupButton,
}

impl GameOverPopup {
    pub fn new(stats: Stats) -> Self {
        Self {
            stats,
            selected: PopupButton::Retry,
        }
    }

    /// Moves the selection; with two buttons every move is a toggle
    pub fn toggle(&mut self) {
        self.selected = match self.selected {
            PopupButton::Retry => PopupButton::Exit,
            PopupButton::Exit => PopupButton::Retry,
        };
    }

    /// Where the dialog goes: one row below the top of `anchor`, cut to `bounds`
    pub fn area(anchor: Rect, bounds: Rect) -> Rect {
        Rect::new(anchor.x, anchor.y + 1, POPUP_WIDTH, POPUP_HEIGHT).intersection(bounds)
    }

    fn button(&self, button: PopupButton) -> Span<'static> {
        let label = format!("< {button} >");
        if self.selected == button {
            Span::styled(label, Style::default().add_modifier(Modifier::REVERSED))
        } else {
            Span::raw(label)
        }
    }
}

impl Widget for &GameOverPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(self.stats.chars_line()),
            Line::from(self.stats.words_line()),
            Line::from(self.stats.wpm_line()),
            Line::default(),
            Line::from(vec![
                self.button(PopupButton::Retry),
                Span::raw("  "),
                self.button(PopupButton::Exit),
            ])
            .alignment(Alignment::Center),
        ];

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("game over"))
            .style(popup_style())
            .render(area, buf);
    }
}

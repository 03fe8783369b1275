pub mod palette;
pub mod popup;

use clatter::{runtime::Clock, stats::Stats, word_source::WordSource, wrap::WordLine};
use itertools::{Itertools, Position};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::App;
use palette::letter_style;
use popup::GameOverPopup;

/// Columns taken by the outer border and the word box border
pub const WORD_BOX_INSET: u16 = 4;
const STATS_WIDTH: u16 = 25;
const STATS_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const HINT_HEIGHT: u16 = 1;

impl<S: WordSource, C: Clock> Widget for &App<S, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = Block::default().borders(Borders::ALL);
        let inner = outer.inner(area);
        outer.render(area, buf);

        let wrap_width = area.width.saturating_sub(WORD_BOX_INSET) as usize;
        let lines = self.session.layout(wrap_width);
        let word_box_height = lines.len() as u16 + 2;

        let [stats_area, word_box_area, input_area, hint_area] = Layout::vertical([
            Constraint::Length(STATS_HEIGHT),
            Constraint::Length(word_box_height),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(HINT_HEIGHT),
        ])
        .flex(Flex::Center)
        .areas(inner);

        let [stats_area] = Layout::horizontal([Constraint::Length(STATS_WIDTH)])
            .flex(Flex::Center)
            .areas(stats_area);
        Paragraph::new(stats_lines(self.last_stats.as_ref())).render(stats_area, buf);

        Paragraph::new(lines.iter().map(word_line).collect::<Vec<_>>())
            .block(Block::default().borders(Borders::ALL))
            .render(word_box_area, buf);

        let cursor = Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED));
        Paragraph::new(Line::from(vec![Span::raw(self.field.text()), cursor]))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(input_area, buf);

        let hint = if self.popup.is_some() {
            "enter: choose   r: retry   q: exit"
        } else {
            "esc: exit"
        };
        Paragraph::new(Span::styled(
            hint,
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(hint_area, buf);

        if let Some(popup) = &self.popup {
            popup.render(GameOverPopup::area(word_box_area, inner), buf);
        }
    }
}

/// Stats panel contents; blank until a round has been finished
fn stats_lines(stats: Option<&Stats>) -> Vec<Line<'static>> {
    match stats {
        Some(stats) => vec![
            Line::from(stats.chars_line()),
            Line::from(stats.words_line()),
            Line::from(stats.wpm_line()),
        ],
        None => vec![Line::default(); STATS_HEIGHT as usize],
    }
}

/// One wrapped line of words, a span per letter, words separated by a space
fn word_line<'a>(line: &WordLine<'a>) -> Line<'a> {
    let mut spans = Vec::new();
    for (position, (word, colors)) in line.words.iter().zip(line.colors).with_position() {
        spans.extend(
            word.chars()
                .zip(colors)
                .map(|(letter, &status)| Span::styled(letter.to_string(), letter_style(status))),
        );
        if matches!(position, Position::First | Position::Middle) {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

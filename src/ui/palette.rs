use clatter::colors::LetterStatus;
use ratatui::style::{Color, Style};

/// How each letter status is drawn
pub fn letter_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Green),
        LetterStatus::Incorrect => Style::default().fg(Color::Red),
        LetterStatus::Default => Style::default().fg(Color::Gray),
        LetterStatus::CurrentLetter => Style::default().fg(Color::Black).bg(Color::White),
        LetterStatus::CorrectCurrentWord => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::IncorrectCurrentWord => Style::default().fg(Color::Black).bg(Color::Red),
        LetterStatus::DefaultCurrentWord => Style::default().fg(Color::Blue).bg(Color::Black),
    }
}

pub fn popup_style() -> Style {
    Style::default().fg(Color::Red).bg(Color::Black)
}

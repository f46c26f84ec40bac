/// Hangman renderer: gallows, word blanks, on-screen keyboard and status.
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::core::renderer::GameRenderer;
use super::rules::GameStatus;
use super::view::{GameView, MASK};

/// The guessable alphabet, one keyboard control per symbol.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const KEYS_PER_ROW: usize = 13;

/// Gallows stages, revealed one per incorrect guess in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    /// Stage `i` shows once more than `i` guesses were wrong.
    pub fn is_revealed(self, incorrect: u8) -> bool {
        (self as u8) < incorrect
    }

    pub fn revealed(incorrect: u8) -> impl Iterator<Item = BodyPart> {
        Self::ALL.into_iter().filter(move |p| p.is_revealed(incorrect))
    }
}

/// How a keyboard control should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Available,
    /// Already guessed; `hit` tells whether it is in the word.
    Consumed { hit: bool },
    /// The game is over, nothing can be pressed.
    Locked,
}

pub fn key_state(view: &GameView, letter: char) -> KeyState {
    if view.is_guessed(letter) {
        let hit = view.slots.contains(&Some(letter));
        KeyState::Consumed { hit }
    } else if view.status.is_terminal() {
        KeyState::Locked
    } else {
        KeyState::Available
    }
}

/// ASCII gallows for the given number of misses.
pub fn gallows_lines(incorrect: u8) -> Vec<String> {
    let part = |p: BodyPart, glyph: char| if p.is_revealed(incorrect) { glyph } else { ' ' };

    let lines = [
        "  +----+".to_string(),
        "  |    |".to_string(),
        format!("  |    {}", part(BodyPart::Head, 'O')),
        format!(
            "  |   {}{}{}",
            part(BodyPart::LeftArm, '/'),
            part(BodyPart::Torso, '|'),
            part(BodyPart::RightArm, '\\'),
        ),
        format!(
            "  |   {} {}",
            part(BodyPart::LeftLeg, '/'),
            part(BodyPart::RightLeg, '\\'),
        ),
        "  |".to_string(),
        "==========".to_string(),
    ];
    lines.into_iter().map(|l| l.trim_end().to_string()).collect()
}

/// Everything the renderer draws in one frame.
pub struct HangmanScreen<'a> {
    pub view: Option<&'a GameView>,
    /// Index into `ALPHABET` of the highlighted key.
    pub cursor: usize,
    pub message: &'a str,
}

#[derive(Debug)]
pub struct HangmanRenderer;

impl<'a> GameRenderer<HangmanScreen<'a>> for HangmanRenderer {
    fn render(frame: &mut Frame, screen: &HangmanScreen<'a>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(9),    // Gallows + word
                Constraint::Length(4), // Keyboard
                Constraint::Length(4), // Status
            ])
            .split(frame.area());

        let header = Paragraph::new("HANGMAN")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let Some(view) = screen.view else {
            let waiting = Paragraph::new(screen.message.to_string())
                .block(Block::default().borders(Borders::ALL).title("Status"))
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(waiting, chunks[3]);
            return;
        };

        let board = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(0)])
            .split(chunks[1]);

        let gallows = gallows_lines(view.incorrect_guesses).join("\n");
        frame.render_widget(
            Paragraph::new(gallows).block(Block::default().borders(Borders::ALL)),
            board[0],
        );
        frame.render_widget(Self::word_widget(view), board[1]);
        frame.render_widget(Self::keyboard_widget(view, screen.cursor), chunks[2]);
        frame.render_widget(Self::status_widget(view, screen.message), chunks[3]);
    }
}

impl HangmanRenderer {
    fn word_widget(view: &GameView) -> Paragraph<'static> {
        let spaced: String = view
            .masked(MASK)
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(spaced, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(format!(
                "Misses: {}/{}  Tries left: {}",
                view.incorrect_guesses,
                view.max_incorrect_guesses,
                view.remaining_guesses()
            )),
        ];

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Word"))
            .alignment(Alignment::Center)
    }

    fn keyboard_widget(view: &GameView, cursor: usize) -> Paragraph<'static> {
        let lines: Vec<Line> = ALPHABET
            .chunks(KEYS_PER_ROW)
            .enumerate()
            .map(|(row, keys)| {
                let spans: Vec<Span> = keys
                    .iter()
                    .enumerate()
                    .map(|(col, &letter)| {
                        let idx = row * KEYS_PER_ROW + col;
                        let mut style = match key_state(view, letter) {
                            KeyState::Available => Style::default().add_modifier(Modifier::BOLD),
                            KeyState::Consumed { hit: true } => {
                                Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
                            }
                            KeyState::Consumed { hit: false } => Style::default()
                                .fg(Color::Red)
                                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
                            KeyState::Locked => Style::default().fg(Color::DarkGray),
                        };
                        if idx == cursor && !view.status.is_terminal() {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        Span::styled(format!(" {letter} "), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Keyboard"))
            .alignment(Alignment::Center)
    }

    fn status_widget(view: &GameView, message: &str) -> Paragraph<'static> {
        let answer = view.answer.clone().unwrap_or_default();
        let (headline, color) = match view.status {
            GameStatus::Playing => (message.to_string(), Color::Yellow),
            GameStatus::Won => (format!("You won! The word was: {answer}"), Color::Green),
            GameStatus::Lost => (format!("You lost! The word was: {answer}"), Color::Red),
        };

        // The restart control only exists once the game is over.
        let hint = if view.status.is_terminal() {
            "[Enter] Play again  [Esc] Quit"
        } else {
            "Type a letter or [<-/->] + [Enter] to guess  [Esc] Quit"
        };

        Paragraph::new(vec![
            Line::from(Span::styled(headline, Style::default().fg(color))),
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        ])
        .block(Block::default().borders(Borders::ALL).title("Status"))
    }
}

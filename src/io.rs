use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::Coord;

/// Cells the view moves per key press
const PAN_STEP: Coord = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Exit the application
    Exit,

    /// Stop or resume stepping the simulation
    Pause,

    /// Shift the view by this many cells
    Move { dx: Coord, dy: Coord },

    /// Put the population back in the middle of the view
    Center,

    /// The terminal changed size
    Resize { cols: u16, rows: u16 },
}

/// Converts a crossterm event into a life event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::Pause),
            KeyEvent {
                code: KeyCode::Char('h') | KeyCode::Left,
                ..
            } => Some(Event::Move {
                dx: -PAN_STEP,
                dy: 0,
            }),
            KeyEvent {
                code: KeyCode::Char('j') | KeyCode::Down,
                ..
            } => Some(Event::Move {
                dx: 0,
                dy: PAN_STEP,
            }),
            KeyEvent {
                code: KeyCode::Char('k') | KeyCode::Up,
                ..
            } => Some(Event::Move {
                dx: 0,
                dy: -PAN_STEP,
            }),
            KeyEvent {
                code: KeyCode::Char('l') | KeyCode::Right,
                ..
            } => Some(Event::Move {
                dx: PAN_STEP,
                dy: 0,
            }),
            KeyEvent {
                code: KeyCode::Char('0'),
                ..
            } => Some(Event::Center),
            _ => None,
        },
        CrossTermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

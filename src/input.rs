/// Keyboard handling: translate terminal events into game commands.
///
/// Events arrive over a channel fed by a reader thread, so polling here never
/// blocks the frame loop.

use std::sync::mpsc::Receiver;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Map one terminal event to a command. Only key presses count; repeats,
/// releases, and non-key events are ignored.
pub fn command_for(event: &Event) -> Option<Command> {
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        modifiers,
        ..
    }) = event
    else {
        return None;
    };
    match code {
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        _ => None,
    }
}

/// Pull this frame's commands off the queue.
///
/// By default exactly one event is taken per frame, whatever it is, so keys
/// pressed together land on consecutive frames. With `drain` the whole
/// queue is consumed in arrival order.
pub fn poll_commands(rx: &Receiver<Event>, drain: bool) -> Vec<Command> {
    if drain {
        rx.try_iter().filter_map(|ev| command_for(&ev)).collect()
    } else {
        rx.try_recv()
            .ok()
            .and_then(|ev| command_for(&ev))
            .into_iter()
            .collect()
    }
}

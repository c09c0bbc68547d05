//! Terminal input translated into board actions

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::drag::Point;

/// What a key press asks the board to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Quit,
    Refresh,
    OpenDialog,
    NextTarget,
    PreviousTarget,
    Submit,
    /// Close the dialog or cancel a drag
    Back,
    DismissToast,
    None,
}

/// Left-button pointer activity in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Down(Point),
    Drag(Point),
    Up(Point),
}

/// Map a key to an action. Arrow keys and Enter only act while the dialog is open.
pub fn translate_key(key: KeyEvent, dialog_open: bool) -> BoardAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => BoardAction::Quit,
        KeyCode::Char('q') => BoardAction::Quit,
        KeyCode::Char('r') => BoardAction::Refresh,
        KeyCode::Char('t') => BoardAction::OpenDialog,
        KeyCode::Char('x') => BoardAction::DismissToast,
        KeyCode::Esc => BoardAction::Back,
        KeyCode::Right if dialog_open => BoardAction::NextTarget,
        KeyCode::Left if dialog_open => BoardAction::PreviousTarget,
        KeyCode::Enter if dialog_open => BoardAction::Submit,
        _ => BoardAction::None,
    }
}

pub fn translate_mouse(event: MouseEvent) -> Option<PointerAction> {
    let at = Point::new(f64::from(event.column), f64::from(event.row));
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Down(at)),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerAction::Drag(at)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerAction::Up(at)),
        _ => None,
    }
}

//! 输入事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::FocusDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::FocusUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextCategory),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevCategory),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::PressBack),
        _ => None,
    }
}

/// 根据鼠标事件获取对应的 Action
pub fn get_mouse_action(event: MouseEvent) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: event.column,
            row: event.row,
        }),
        MouseEventKind::ScrollDown => Some(Action::FocusDown),
        MouseEventKind::ScrollUp => Some(Action::FocusUp),
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    if let Some(action) = get_action(key) {
        app.dispatch(action);
    }
    app.should_quit
}

/// 处理鼠标事件，返回是否退出
pub fn handle_mouse_event(app: &mut App, event: MouseEvent) -> bool {
    if let Some(action) = get_mouse_action(event) {
        app.dispatch(action);
    }
    app.should_quit
}

//! 键盘事件映射 (Input -> Action)

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Choosing { multiple } => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveHighlightDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveHighlightUp),
            KeyCode::Char(' ') => Some(Action::PickHighlighted),
            KeyCode::Enter if multiple => Some(Action::Confirm),
            KeyCode::Enter => Some(Action::PickHighlighted),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|d| Action::Pick(d as usize - 1)),
            // 未作答时也映射，由引擎拒绝并给出提示
            KeyCode::Char('n') | KeyCode::Right => Some(Action::Advance),
            _ => None,
        },
        AppMode::Reviewing => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Right => Some(Action::Advance),
            _ => None,
        },
        AppMode::Finished => match key {
            KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Restart),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.mode(), key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

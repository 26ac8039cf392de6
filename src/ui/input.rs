//! 事件映射 (Input -> Action)
//!
//! 将按键、鼠标与窗口事件转换为 Action

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::actions::Action;
use super::modal::{Modal, ModalKind};
use super::state::{App, pointer_x};

/// 根据弹窗状态和按键获取对应的 Action
pub fn get_action(modal: &Modal, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if modal.is_open() {
        // 弹窗打开时只响应关闭
        return match key.code {
            KeyCode::Esc | KeyCode::Char('x') | KeyCode::Enter => Some(Action::CloseModal),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
        KeyCode::Char(c @ '1'..='4') => Some(Action::CategoryClick(c as usize - '1' as usize)),
        KeyCode::Char('r') => Some(Action::ResetFilter),
        KeyCode::Enter => Some(Action::OpenFeatherImage),
        KeyCode::Char('m') => Some(Action::OpenGuide(ModalKind::MotifGuide)),
        KeyCode::Char('c') => Some(Action::OpenGuide(ModalKind::CategoryGuide)),
        KeyCode::Char('n') => Some(Action::OpenGuide(ModalKind::ColourGuide)),
        _ => None,
    }
}

/// 根据点击区域获取鼠标对应的 Action
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    let (column, row) = (mouse.column, mouse.row);
    let dragging = app.slider.dragging().is_some();

    // 松开总是结束拖动，即使弹窗已打开
    if dragging && matches!(mouse.kind, MouseEventKind::Up(_)) {
        return Some(Action::DragEnd);
    }

    if app.modal.is_open() {
        // 点击关闭按钮或弹窗外部（背景）关闭弹窗
        return match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if app.hit.on_dialog_close(column, row) || !app.hit.in_dialog(column, row) =>
            {
                Some(Action::CloseModal)
            }
            _ => None,
        };
    }

    if dragging {
        return match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) => Some(Action::DragMove(pointer_x(column))),
            _ => None,
        };
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(handle) = app.hit.handle_at(column, row, app.slider.visuals()) {
                Some(Action::DragStart(handle))
            } else if app.hit.on_track(column, row) {
                Some(Action::TrackClick(pointer_x(column)))
            } else if let Some(zone) = app.hit.zone_at(column, row) {
                Some(Action::CategoryClick(zone))
            } else {
                app.hit.list_row(column, row).map(Action::Select)
            }
        }
        MouseEventKind::ScrollUp => Some(Action::MoveSelectionUp),
        MouseEventKind::ScrollDown => Some(Action::MoveSelectionDown),
        _ => None,
    }
}

/// 处理终端事件，返回是否退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    let action = match event {
        // 只处理按下（Windows 会同时发送按下和松开）
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(&app.modal, key),
        Event::Mouse(mouse) => get_mouse_action(app, mouse),
        Event::Resize(_, _) => Some(Action::Resize),
        _ => None,
    };

    action.is_some_and(|action| app.dispatch(action))
}

//! 通用 UI 组件
//!
//! 弹窗框架等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear},
};

/// 弹窗上边框右侧的关闭按钮
const CLOSE_BUTTON: &str = " [x] ";

/// 弹窗框架渲染后的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogAreas {
    pub inner: Rect,
    pub close: Rect,
}

/// [组件] 弹窗基础框架，返回内容区域与关闭按钮区域
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> DialogAreas {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_top(
            Line::styled(
                CLOSE_BUTTON,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
            .right_aligned(),
        )
        .title_bottom(" [Esc] 关闭 ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    DialogAreas {
        inner,
        close: close_button_rect(area),
    }
}

/// 右对齐的标题紧贴右上角边框
fn close_button_rect(area: Rect) -> Rect {
    let width = (CLOSE_BUTTON.len() as u16).min(area.width.saturating_sub(2));
    Rect::new(area.right().saturating_sub(1 + width), area.y, width, 1)
}

/// 在一行字符中以 center 为中心写入 text，越界部分截断
pub fn overlay_centered(row: &mut [char], center: usize, text: &str) {
    let width = text.chars().count();
    let start = center.saturating_sub(width / 2);
    for (offset, ch) in text.chars().enumerate() {
        if let Some(cell) = row.get_mut(start + offset) {
            *cell = ch;
        }
    }
}

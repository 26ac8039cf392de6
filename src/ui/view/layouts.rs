//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// 在 area 中居中，宽高为百分比
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

/// 去掉左右边距后的区域，宽度不足时原样返回
pub fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    if area.width <= margin * 2 {
        return area;
    }
    Rect {
        x: area.x + margin,
        width: area.width - margin * 2,
        ..area
    }
}

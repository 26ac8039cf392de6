//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;
pub mod slider;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::modal::ModalKind;
use super::state::App;
use components::render_dialog_framework;
use layouts::centered_rect;
use slider::{SLIDER_ROWS, render_slider};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // 标题
            Constraint::Length(SLIDER_ROWS + 2), // 尺寸滑块
            Constraint::Min(5),                  // 羽毛列表
            Constraint::Length(5),               // 详情
            Constraint::Length(3),               // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_slider(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_details(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    // 渲染弹窗
    let dialog = app.modal.current().map(|kind| render_modal(frame, kind));
    app.hit.dialog = dialog.map(|(area, _)| area);
    app.hit.dialog_close = dialog.map(|(_, close)| close);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let updated = app
        .catalog
        .meta
        .updated_at
        .map(|t| format!("  (更新于 {})", t.format("%Y-%m-%d")))
        .unwrap_or_default();

    let title = Paragraph::new(format!("🪶 羽毛图鉴{updated}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .visible
        .iter()
        .filter_map(|&i| app.catalog.feathers.get(i))
        .enumerate()
        .map(|(row, feather)| {
            let content = format!(
                "{:<4} {:<28} {:<9} {}",
                feather.code(),
                feather.name,
                feather.size_label(),
                feather.colour
            );

            let style = if row == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![Span::styled(content, style)]))
        })
        .collect();

    let block = Block::default()
        .title(format!("羽毛 ({})", app.visible.len()))
        .borders(Borders::ALL);
    let inner = block.inner(area);

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !app.visible.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);

    app.hit.list = Some(inner);
    app.hit.list_offset = state.offset();
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(feather) = app.selected_feather() {
        format!(
            "{} ({})  尺寸: {}\n颜色: {}  花纹: {}",
            feather.name,
            feather.code(),
            feather.size_label(),
            feather.colour,
            feather.motif
        )
    } else {
        "没有符合尺寸范围的羽毛，按 'r' 重置".to_string()
    };

    let details = Paragraph::new(content)
        .block(Block::default().title("详情").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.modal.is_open() {
        "[Esc] [x] 关闭"
    } else {
        "[j/k] 导航  [Enter] 图片  [m] 花纹  [c] 类别  [n] 颜色  [1-4] 尺寸  [r] 重置  [q] 退出"
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// 渲染弹窗，返回弹窗区域与关闭按钮区域
fn render_modal(frame: &mut Frame, kind: &ModalKind) -> (Rect, Rect) {
    let area = centered_rect(60, 40, frame.area());
    let dialog = render_dialog_framework(frame, area, kind.title());

    let body = Paragraph::new(kind.body().join("\n"))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, dialog.inner);

    (area, dialog.close)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::models::Catalog;
    use crate::slider::SliderInput;
    use crate::ui::state::pointer_x;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_mounts_slider() {
        let mut app = App::new(Catalog::sample(), Duration::from_millis(100));
        assert!(app.slider.track().is_none());

        let screen = draw(&mut app);
        assert!(screen.contains("60 cm"));
        assert!(screen.contains("Merle noir"));
        assert!(app.slider.track().is_some());
        assert_eq!(app.hit.zones.len(), 4);
        assert!(app.hit.dialog.is_none());
    }

    #[test]
    fn test_track_click_after_render_uses_layout() {
        let mut app = App::new(Catalog::sample(), Duration::from_millis(100));
        draw(&mut app);

        let track = app.hit.track.unwrap();
        let last = track.x + track.width - 1;
        // 点击终点手柄所在刻度：终点后退一格
        app.slider.on_track_click(pointer_x(last));
        assert_eq!(app.slider.range().as_array(), [0, 3]);
    }

    #[test]
    fn test_modal_rect_is_recorded() {
        let mut app = App::new(Catalog::sample(), Duration::from_millis(100));
        app.modal.show(ModalKind::ColourGuide);

        let screen = draw(&mut app);
        assert!(screen.contains("nuance.jpg"));
        assert!(screen.contains("[x]"));

        let dialog = app.hit.dialog.unwrap();
        let close = app.hit.dialog_close.unwrap();
        assert_eq!(close.y, dialog.y);
        assert_eq!(close.right(), dialog.right() - 1);

        // [x] 画在弹窗的上边框
        let top = screen.lines().nth(usize::from(close.y)).unwrap();
        assert!(top.contains("[x]"));
    }

    #[test]
    fn test_closed_modal_clears_close_button() {
        let mut app = App::new(Catalog::sample(), Duration::from_millis(100));
        app.modal.show(ModalKind::MotifGuide);
        draw(&mut app);
        assert!(app.hit.dialog_close.is_some());

        app.modal.hide();
        draw(&mut app);
        assert!(app.hit.dialog.is_none());
        assert!(app.hit.dialog_close.is_none());
    }
}

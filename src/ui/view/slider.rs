//! 尺寸滑块的渲染
//!
//! 刻度标签、刻度线、轨道与手柄、类别区域，同时记录可点击区域与轨道几何

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::components::overlay_centered;
use super::layouts::inset_horizontal;
use crate::slider::{Category, Handle, POSITION_COUNT, Position, TrackGeometry};
use crate::ui::state::{App, column_for};

/// 边框内需要的行数
pub const SLIDER_ROWS: u16 = 5;
/// 轨道两侧留给端点标签的空间
const LABEL_MARGIN: u16 = 3;

const ACTIVE: Color = Color::Yellow;
const INACTIVE: Color = Color::DarkGray;

pub fn render_slider(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title("尺寸 [1-4] 类别  [r] 重置")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < SLIDER_ROWS || inner.width <= LABEL_MARGIN * 2 + POSITION_COUNT as u16 {
        // 空间不足，不挂载轨道
        app.hit.track = None;
        app.hit.zones.clear();
        app.slider.set_track(None);
        return;
    }

    let track = Rect {
        y: inner.y + 2,
        height: 1,
        ..inset_horizontal(inner, LABEL_MARGIN)
    };
    let offset = usize::from(track.x - inner.x);
    let stop_columns: Vec<usize> = (0..POSITION_COUNT)
        .map(|i| usize::from(column_for(track, Position::clamped(i).percent()) - inner.x))
        .collect();

    let visuals = *app.slider.visuals();
    let range = app.slider.range();
    let row_width = usize::from(inner.width);

    // 刻度标签
    let mut labels = vec![' '; row_width];
    for (i, &column) in stop_columns.iter().enumerate() {
        overlay_centered(&mut labels, column, Position::clamped(i).label());
    }

    // 刻度线
    let ticks: Vec<Span> = (0..row_width)
        .map(|column| match stop_columns.iter().position(|&c| c == column) {
            Some(i) if visuals.ticks[i] => Span::styled("│", Style::default().fg(ACTIVE)),
            Some(_) => Span::styled("│", Style::default().fg(INACTIVE)),
            None => Span::raw(" "),
        })
        .collect();

    // 轨道与手柄
    let start_column = usize::from(column_for(track, visuals.active_left) - inner.x);
    let end_column =
        usize::from(column_for(track, visuals.active_left + visuals.active_width) - inner.x);
    let dragging = app.slider.dragging();
    let handle_style = |handle: Handle| {
        let style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        if dragging == Some(handle) {
            style.fg(Color::Cyan)
        } else {
            style
        }
    };
    let track_row: Vec<Span> = (0..row_width)
        .map(|column| {
            if column < offset || column >= offset + usize::from(track.width) {
                Span::raw(" ")
            } else if column == start_column || column == end_column {
                let handle = match dragging {
                    Some(Handle::Start) if column == start_column => Handle::Start,
                    Some(Handle::End) if column == end_column => Handle::End,
                    _ if column == start_column => Handle::Start,
                    _ => Handle::End,
                };
                Span::styled("●", handle_style(handle))
            } else if (start_column..=end_column).contains(&column) {
                Span::styled("━", Style::default().fg(ACTIVE))
            } else {
                Span::styled("─", Style::default().fg(INACTIVE))
            }
        })
        .collect();

    // 类别区域
    let mut zones = Vec::new();
    let mut zone_row = vec![' '; row_width];
    let mut zone_active = vec![false; row_width];
    for (i, label) in app.slider.categories().iter().enumerate() {
        let Some(category) = Category::new(i) else {
            continue;
        };
        let (left, right) = (stop_columns[i], stop_columns[i + 1]);
        let width = if i + 1 == app.slider.categories().len() {
            right - left + 1
        } else {
            right - left
        };
        zones.push(Rect::new(
            inner.x + left as u16,
            inner.y + 3,
            width as u16,
            1,
        ));
        overlay_centered(&mut zone_row, (left + right) / 2, label);
        if range.contains_category(category) {
            zone_active[left..left + width].fill(true);
        }
    }
    let zone_spans: Vec<Span> = zone_row
        .iter()
        .zip(&zone_active)
        .map(|(ch, &active)| {
            let style = if active {
                Style::default().fg(ACTIVE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(ch.to_string(), style)
        })
        .collect();

    let summary = format!(
        "已选 {} - {}  ({} / {})",
        range.start().label(),
        range.end().label(),
        app.visible.len(),
        app.catalog.feathers.len()
    );

    let lines = vec![
        Line::from(labels.into_iter().collect::<String>()),
        Line::from(ticks),
        Line::from(track_row),
        Line::from(zone_spans),
        Line::from(Span::styled(summary, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    app.hit.track = Some(track);
    app.hit.zones = zones;
    app.slider
        .set_track(TrackGeometry::new(f64::from(track.x), f64::from(track.width)));
}

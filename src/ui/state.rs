//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及视图记录下来的点击区域

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use ratatui::layout::{Position as CellPosition, Rect};

use super::debounce::Debouncer;
use super::modal::Modal;
use crate::models::{Catalog, Feather, SIZE_CATEGORIES};
use crate::slider::{Handle, RangeSlider, SliderVisuals};

/// 应用状态
pub struct App {
    pub catalog: Catalog,
    pub slider: RangeSlider,
    pub visible: Vec<usize>, // 当前显示的羽毛在图鉴中的下标
    pub selected_index: usize,
    pub modal: Modal,
    pub message: Option<String>,
    pub hit: HitAreas,
    pub resize: Debouncer,
    filter_changed: Rc<Cell<bool>>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(catalog: Catalog, resize_debounce: Duration) -> Self {
        let filter_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&filter_changed);
        let slider = RangeSlider::new(SIZE_CATEGORIES).with_on_change(move || flag.set(true));

        let mut app = Self {
            catalog,
            slider,
            visible: Vec::new(),
            selected_index: 0,
            modal: Modal::default(),
            message: None,
            hit: HitAreas::default(),
            resize: Debouncer::new(resize_debounce),
            filter_changed,
        };
        app.refresh_visible();
        app
    }

    /// 按滑块区间刷新显示列表
    pub fn refresh_visible(&mut self) {
        self.visible = self.catalog.visible(self.slider.range());

        // 确保选中索引有效
        if self.visible.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.visible.len() {
            self.selected_index = self.visible.len() - 1;
        }
    }

    /// 滑块回调置位后刷新列表，返回是否刷新
    pub fn apply_filter_change(&mut self) -> bool {
        if !self.filter_changed.replace(false) {
            return false;
        }
        self.refresh_visible();
        let range = self.slider.range();
        self.message = Some(format!(
            "尺寸 {} - {}: {} 根羽毛",
            range.start().label(),
            range.end().label(),
            self.visible.len()
        ));
        true
    }

    /// 获取当前选中的羽毛
    pub fn selected_feather(&self) -> Option<&Feather> {
        self.visible
            .get(self.selected_index)
            .and_then(|&i| self.catalog.feathers.get(i))
    }
}

/// 视图在每次渲染时记录的可点击区域
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitAreas {
    pub track: Option<Rect>,
    pub zones: Vec<Rect>,
    pub list: Option<Rect>,
    pub list_offset: usize, // 列表滚动偏移
    pub dialog: Option<Rect>,
    pub dialog_close: Option<Rect>, // 弹窗右上角的关闭按钮
}

impl HitAreas {
    /// 手柄附近左右各一格都算命中；两个手柄重合时，在最右端取起点手柄，否则取终点手柄
    pub fn handle_at(&self, column: u16, row: u16, visuals: &SliderVisuals) -> Option<Handle> {
        let track = self.track?;
        if row != track.y {
            return None;
        }

        let near = |percent: f64| column.abs_diff(column_for(track, percent)) <= 1;
        match (near(visuals.start_percent), near(visuals.end_percent)) {
            (true, true) if visuals.start_percent == visuals.end_percent => {
                if visuals.end_percent >= 100.0 {
                    Some(Handle::Start)
                } else {
                    Some(Handle::End)
                }
            }
            (true, true) => {
                let to_start = column.abs_diff(column_for(track, visuals.start_percent));
                let to_end = column.abs_diff(column_for(track, visuals.end_percent));
                if to_start <= to_end {
                    Some(Handle::Start)
                } else {
                    Some(Handle::End)
                }
            }
            (true, false) => Some(Handle::Start),
            (false, true) => Some(Handle::End),
            (false, false) => None,
        }
    }

    pub fn on_track(&self, column: u16, row: u16) -> bool {
        self.track
            .is_some_and(|track| track.contains(CellPosition::new(column, row)))
    }

    pub fn zone_at(&self, column: u16, row: u16) -> Option<usize> {
        self.zones
            .iter()
            .position(|zone| zone.contains(CellPosition::new(column, row)))
    }

    /// 点击位置对应的列表项下标
    pub fn list_row(&self, column: u16, row: u16) -> Option<usize> {
        let list = self.list?;
        list.contains(CellPosition::new(column, row))
            .then(|| usize::from(row - list.y) + self.list_offset)
    }

    pub fn in_dialog(&self, column: u16, row: u16) -> bool {
        self.dialog
            .is_some_and(|dialog| dialog.contains(CellPosition::new(column, row)))
    }

    pub fn on_dialog_close(&self, column: u16, row: u16) -> bool {
        self.dialog_close
            .is_some_and(|button| button.contains(CellPosition::new(column, row)))
    }
}

/// 百分比在轨道上对应的列
pub fn column_for(track: Rect, percent: f64) -> u16 {
    let span = f64::from(track.width.saturating_sub(1));
    track.x + (percent / 100.0 * span).round() as u16
}

/// 单元格中心的横坐标，与轨道几何使用同一坐标系
pub fn pointer_x(column: u16) -> f64 {
    f64::from(column) + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::{Position, SelectedRange};

    fn track() -> Rect {
        Rect::new(10, 5, 41, 1)
    }

    #[test]
    fn test_column_for_stops() {
        assert_eq!(column_for(track(), 0.0), 10);
        assert_eq!(column_for(track(), 50.0), 30);
        assert_eq!(column_for(track(), 100.0), 50);
    }

    #[test]
    fn test_handle_hit_testing() {
        let hit = HitAreas {
            track: Some(track()),
            ..Default::default()
        };
        let visuals = SliderVisuals::from_range(SelectedRange::FULL);

        assert_eq!(hit.handle_at(11, 5, &visuals), Some(Handle::Start));
        assert_eq!(hit.handle_at(49, 5, &visuals), Some(Handle::End));
        assert_eq!(hit.handle_at(30, 5, &visuals), None);
        assert_eq!(hit.handle_at(10, 6, &visuals), None);
    }

    #[test]
    fn test_coincident_handles_pick_movable_one() {
        let hit = HitAreas {
            track: Some(track()),
            ..Default::default()
        };
        let at_max = SelectedRange::new(Position::MAX, Position::MAX).unwrap();
        let at_min = SelectedRange::new(Position::MIN, Position::MIN).unwrap();

        assert_eq!(
            hit.handle_at(50, 5, &SliderVisuals::from_range(at_max)),
            Some(Handle::Start)
        );
        assert_eq!(
            hit.handle_at(10, 5, &SliderVisuals::from_range(at_min)),
            Some(Handle::End)
        );
    }

    #[test]
    fn test_list_row() {
        let hit = HitAreas {
            list: Some(Rect::new(1, 10, 30, 5)),
            ..Default::default()
        };
        assert_eq!(hit.list_row(2, 12), Some(2));
        assert_eq!(hit.list_row(2, 15), None);

        let scrolled = HitAreas {
            list_offset: 4,
            ..hit
        };
        assert_eq!(scrolled.list_row(2, 10), Some(4));
    }

    #[test]
    fn test_filter_change_refreshes_list() {
        use crate::slider::SliderInput;

        let mut app = App::new(Catalog::sample(), Duration::from_millis(100));
        app.selected_index = 9;
        assert_eq!(app.visible.len(), 10);

        app.slider.on_category_click(0);
        assert!(app.apply_filter_change());
        assert_eq!(app.visible, vec![0, 1]);
        assert_eq!(app.selected_index, 1);
        assert!(!app.apply_filter_change());
    }
}

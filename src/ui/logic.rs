//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use std::time::Instant;

use tracing::debug;

use super::actions::Action;
use super::modal::ModalKind;
use super::state::App;
use crate::slider::SliderInput;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::Select(index) => self.select(index),

            Action::CategoryClick(index) => self.slider.on_category_click(index),
            Action::TrackClick(x) => self.slider.on_track_click(x),
            Action::DragStart(handle) => self.slider.on_drag_start(handle),
            Action::DragMove(x) => self.slider.on_drag_move(x),
            Action::DragEnd => self.slider.on_drag_end(),
            Action::ResetFilter => self.slider.reset(),

            Action::OpenGuide(kind) => self.open_modal(kind),
            Action::OpenFeatherImage => self.open_feather_image(),
            Action::CloseModal => {
                self.modal.hide();
            }

            Action::Resize => self.resize.trigger(Instant::now()),
        }

        self.apply_filter_change();
        false
    }

    /// 窗口尺寸稳定后重新计算滑块显示
    pub fn tick(&mut self, now: Instant) {
        if self.resize.fire(now) {
            debug!("resize settled, updating slider visuals");
            self.slider.update_visuals();
        }
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.visible.len() {
            self.selected_index += 1;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.visible.len() {
            self.selected_index = index;
        }
    }

    // ============ 弹窗相关 ============

    /// 打开弹窗；拖动中的手柄先松开，弹窗会吞掉之后的鼠标事件
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.slider.on_drag_end();
        self.modal.show(kind);
    }

    /// 打开当前羽毛的图片
    pub fn open_feather_image(&mut self) {
        if let Some(feather) = self.selected_feather() {
            let kind = ModalKind::for_feather(feather);
            self.open_modal(kind);
        }
    }
}

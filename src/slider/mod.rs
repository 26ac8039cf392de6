//! 尺寸范围滑块
//!
//! 5 个离散刻度、4 个尺寸类别、两个可拖动手柄。
//! 交互逻辑与渲染分离：
//! - range.rs: 刻度、类别与区间的状态转移
//! - visuals.rs: 由区间推导出的显示状态
//! - 本文件: 滑块实例，持有区间、拖动状态与变更回调

pub mod range;
pub mod visuals;

use tracing::debug;

pub use range::{CATEGORY_COUNT, Category, POSITION_COUNT, Position, SelectedRange};
pub use visuals::{SliderVisuals, TrackGeometry};

/// 区间变化时调用的回调，通过 [`RangeSlider::range`] 读取新区间
pub type ChangeCallback = Box<dyn FnMut()>;

/// 手柄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Start,
    End,
}

/// 滑块交互接口，与具体的 UI 工具包无关
pub trait SliderInput {
    /// 点击类别区域
    fn on_category_click(&mut self, category_index: usize);
    /// 点击轨道，`pointer_x` 与轨道几何使用同一坐标系
    fn on_track_click(&mut self, pointer_x: f64);
    /// 在手柄上按下
    fn on_drag_start(&mut self, handle: Handle);
    /// 拖动中移动
    fn on_drag_move(&mut self, pointer_x: f64);
    /// 松开
    fn on_drag_end(&mut self);
}

/// 滑块实例
pub struct RangeSlider {
    categories: Vec<String>,
    range: SelectedRange,
    visuals: SliderVisuals,
    track: Option<TrackGeometry>,
    drag: Option<Handle>,
    on_change: Option<ChangeCallback>,
}

impl RangeSlider {
    /// 按类别顺序创建滑块，超过 4 个的类别没有对应区域
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories
            .into_iter()
            .map(Into::into)
            .take(CATEGORY_COUNT)
            .collect();
        let range = SelectedRange::FULL;

        Self {
            categories,
            range,
            visuals: SliderVisuals::from_range(range),
            track: None,
            drag: None,
            on_change: None,
        }
    }

    /// 设置变更回调
    pub fn with_on_change(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// 当前选中区间
    pub fn range(&self) -> SelectedRange {
        self.range
    }

    pub fn visuals(&self) -> &SliderVisuals {
        &self.visuals
    }

    /// 每个类别区域的标签
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[cfg(test)]
    pub fn track(&self) -> Option<TrackGeometry> {
        self.track
    }

    /// 由视图在每次布局时更新；None 表示尚未挂载
    pub fn set_track(&mut self, track: Option<TrackGeometry>) {
        self.track = track;
    }

    /// 正在拖动的手柄
    pub fn dragging(&self) -> Option<Handle> {
        self.drag
    }

    /// 根据区间重新计算显示状态
    pub fn update_visuals(&mut self) {
        self.visuals = SliderVisuals::from_range(self.range);
    }

    /// 恢复为全部选中
    pub fn reset(&mut self) {
        self.range = SelectedRange::FULL;
        self.update_visuals();
        self.notify();
    }

    /// 点击某个刻度
    pub fn on_position_click(&mut self, position: Position) {
        let Some(next) = self.range.with_position_click(position) else {
            return;
        };

        debug!(position = position.index(), range = ?next.as_array(), "position click");
        self.range = next;
        self.update_visuals();
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }
}

impl SliderInput for RangeSlider {
    fn on_category_click(&mut self, category_index: usize) {
        if category_index >= self.categories.len() {
            return;
        }
        let Some(category) = Category::new(category_index) else {
            return;
        };

        self.range = self.range.with_category(category);
        debug!(category = category_index, range = ?self.range.as_array(), "category click");
        self.update_visuals();
        self.notify();
    }

    fn on_track_click(&mut self, pointer_x: f64) {
        let Some(track) = self.track else {
            debug!("track click before layout, ignored");
            return;
        };
        self.on_position_click(track.snap(pointer_x));
    }

    fn on_drag_start(&mut self, handle: Handle) {
        debug!(?handle, "drag start");
        self.drag = Some(handle);
    }

    fn on_drag_move(&mut self, pointer_x: f64) {
        let (Some(handle), Some(track)) = (self.drag, self.track) else {
            return;
        };

        let position = track.snap(pointer_x);
        let next = match handle {
            Handle::Start => self.range.with_start_dragged(position),
            Handle::End => self.range.with_end_dragged(position),
        };

        if let Some(next) = next {
            self.range = next;
            self.update_visuals();
        }
    }

    fn on_drag_end(&mut self) {
        if let Some(handle) = self.drag.take() {
            debug!(?handle, range = ?self.range.as_array(), "drag end");
            self.notify();
        }
    }
}

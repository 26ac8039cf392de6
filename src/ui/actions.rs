//! Action 枚举定义 (Intent)
//!
//! 按键与鼠标事件转化为明确的语义化 Action

use crate::slider::Handle;

use super::modal::ModalKind;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    Select(usize), // 列表中的行

    // 尺寸滑块
    CategoryClick(usize),
    TrackClick(f64), // 指针横坐标
    DragStart(Handle),
    DragMove(f64),
    DragEnd,
    ResetFilter,

    // 弹窗
    OpenGuide(ModalKind),
    OpenFeatherImage,
    CloseModal,

    Resize,
}

//! 由选中区间推导出的视觉状态，以及轨道几何

use super::range::{POSITION_COUNT, Position, SelectedRange};

/// 轨道在屏幕上的位置（横向）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    left: f64,
    width: f64,
}

impl TrackGeometry {
    /// 宽度必须为正
    pub fn new(left: f64, width: f64) -> Option<Self> {
        (width > 0.0 && left.is_finite() && width.is_finite()).then_some(Self { left, width })
    }

    /// 指针横坐标对应的百分比，限制在 [0, 100]
    pub fn percent_at(&self, pointer_x: f64) -> f64 {
        ((pointer_x - self.left) / self.width * 100.0).clamp(0.0, 100.0)
    }

    /// 指针横坐标吸附到最近的刻度
    pub fn snap(&self, pointer_x: f64) -> Position {
        Position::nearest(self.percent_at(pointer_x))
    }
}

/// 手柄、高亮轨道与刻度线的显示状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderVisuals {
    pub start_percent: f64,
    pub end_percent: f64,
    pub active_left: f64,
    pub active_width: f64,
    /// 刻度是否落在选中区间内
    pub ticks: [bool; POSITION_COUNT],
}

impl SliderVisuals {
    pub fn from_range(range: SelectedRange) -> Self {
        let start_percent = range.start().percent();
        let end_percent = range.end().percent();

        let mut ticks = [false; POSITION_COUNT];
        for (index, tick) in ticks.iter_mut().enumerate() {
            *tick = range.contains_position(Position::clamped(index));
        }

        Self {
            start_percent,
            end_percent,
            active_left: start_percent,
            active_width: end_percent - start_percent,
            ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_requires_width() {
        assert!(TrackGeometry::new(3.0, 0.0).is_none());
        assert!(TrackGeometry::new(3.0, -5.0).is_none());
        assert!(TrackGeometry::new(3.0, 40.0).is_some());
    }

    #[test]
    fn test_percent_at_clamps() {
        let track = TrackGeometry::new(10.0, 200.0).unwrap();
        assert_eq!(track.percent_at(10.0), 0.0);
        assert_eq!(track.percent_at(110.0), 50.0);
        assert_eq!(track.percent_at(-50.0), 0.0);
        assert_eq!(track.percent_at(900.0), 100.0);
        assert_eq!(track.snap(160.0).index(), 3);
    }

    #[test]
    fn test_visuals_follow_range() {
        let range = SelectedRange::new(Position::clamped(1), Position::clamped(3)).unwrap();
        let visuals = SliderVisuals::from_range(range);
        assert_eq!(visuals.start_percent, 25.0);
        assert_eq!(visuals.end_percent, 75.0);
        assert_eq!(visuals.active_left, 25.0);
        assert_eq!(visuals.active_width, 50.0);
        assert_eq!(visuals.ticks, [false, true, true, true, false]);
    }

    #[test]
    fn test_degenerate_range_has_empty_track() {
        let range = SelectedRange::new(Position::MAX, Position::MAX).unwrap();
        let visuals = SliderVisuals::from_range(range);
        assert_eq!(visuals.active_width, 0.0);
        assert_eq!(visuals.ticks, [false, false, false, false, true]);
    }
}

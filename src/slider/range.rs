//! 刻度位置、尺寸类别与选中区间
//!
//! 这里只有纯数据与状态转移，不涉及任何渲染

/// 刻度数量
pub const POSITION_COUNT: usize = 5;
/// 类别数量，相邻两个刻度之间为一个类别
pub const CATEGORY_COUNT: usize = POSITION_COUNT - 1;
/// 各刻度在轨道上的百分比
pub const STOP_PERCENTS: [f64; POSITION_COUNT] = [0.0, 25.0, 50.0, 75.0, 100.0];
/// 各刻度的标签
pub const STOP_LABELS: [&str; POSITION_COUNT] = ["0 cm", "10 cm", "20 cm", "35 cm", "60 cm"];

/// 滑块上的离散刻度 (0..=4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub const MIN: Position = Position(0);
    pub const MAX: Position = Position(POSITION_COUNT - 1);

    #[cfg(test)]
    pub fn new(index: usize) -> Option<Self> {
        (index < POSITION_COUNT).then_some(Self(index))
    }

    pub fn clamped(index: usize) -> Self {
        Self(index.min(POSITION_COUNT - 1))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn percent(self) -> f64 {
        STOP_PERCENTS[self.0]
    }

    pub fn label(self) -> &'static str {
        STOP_LABELS[self.0]
    }

    /// 找到离给定百分比最近的刻度
    ///
    /// 先把百分比限制在 [0, 100]，再按顺序扫描；距离相等时保留先遇到的（较小的）刻度。
    pub fn nearest(percent: f64) -> Self {
        let percent = percent.clamp(0.0, 100.0);
        let mut closest = 0;
        let mut min_dist = (percent - STOP_PERCENTS[0]).abs();

        for (i, stop) in STOP_PERCENTS.iter().enumerate().skip(1) {
            let dist = (percent - stop).abs();
            if dist < min_dist {
                min_dist = dist;
                closest = i;
            }
        }

        Self(closest)
    }
}

/// 尺寸类别 (0..=3)，类别 i 覆盖刻度 i 到 i+1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(usize);

impl Category {
    pub fn new(index: usize) -> Option<Self> {
        (index < CATEGORY_COUNT).then_some(Self(index))
    }

    /// 类别覆盖的 (起点, 终点) 刻度
    pub fn span(self) -> (Position, Position) {
        (Position(self.0), Position(self.0 + 1))
    }

    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = Category> {
        (0..CATEGORY_COUNT).map(Category)
    }
}

/// 当前选中的区间，始终满足 0 <= start <= end <= 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedRange {
    start: Position,
    end: Position,
}

impl Default for SelectedRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl SelectedRange {
    /// 全部类别选中
    pub const FULL: SelectedRange = SelectedRange {
        start: Position::MIN,
        end: Position::MAX,
    };

    pub fn new(start: Position, end: Position) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// 以 `[start, end]` 的形式返回
    pub fn as_array(&self) -> [usize; 2] {
        [self.start.index(), self.end.index()]
    }

    pub fn contains_position(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// 类别的整个跨度落在区间内才算选中
    pub fn contains_category(&self, category: Category) -> bool {
        let (cat_start, cat_end) = category.span();
        self.start <= cat_start && cat_end <= self.end
    }

    /// 点击类别后的新区间
    pub fn with_category(self, category: Category) -> Self {
        let (cat_start, cat_end) = category.span();
        let Self { start, end } = self;

        if cat_end <= start {
            // 类别在区间之前：向前扩展
            Self { start: cat_start, end }
        } else if cat_start >= end {
            // 类别在区间之后：向后扩展
            Self { start, end: cat_end }
        } else if cat_start >= start && cat_end <= end {
            // 类别完全在区间内：收缩为该类别
            Self {
                start: cat_start,
                end: cat_end,
            }
        } else {
            Self {
                start: start.min(cat_start),
                end: end.max(cat_end),
            }
        }
    }

    /// 点击某个刻度后的新区间；两个手柄重合在该刻度上时返回 None
    pub fn with_position_click(self, position: Position) -> Option<Self> {
        let Self { start, end } = self;

        if position < start {
            Some(Self { start: position, end })
        } else if position > end {
            Some(Self { start, end: position })
        } else if position == start && position == end {
            None
        } else if position == start {
            // 手柄不能交叉
            let next = Position((position.0 + 1).min(end.0));
            Some(Self { start: next, end })
        } else if position == end {
            let prev = Position(position.0.saturating_sub(1).max(start.0));
            Some(Self { start, end: prev })
        } else {
            let to_start = position.0 - start.0;
            let to_end = end.0 - position.0;
            if to_start <= to_end {
                Some(Self { start: position, end })
            } else {
                Some(Self { start, end: position })
            }
        }
    }

    /// 拖动起点手柄；越过终点时拒绝
    pub fn with_start_dragged(self, position: Position) -> Option<Self> {
        (position <= self.end).then_some(Self {
            start: position,
            end: self.end,
        })
    }

    /// 拖动终点手柄；越过起点时拒绝
    pub fn with_end_dragged(self, position: Position) -> Option<Self> {
        (position >= self.start).then_some(Self {
            start: self.start,
            end: position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn range(start: usize, end: usize) -> SelectedRange {
        SelectedRange::new(Position::clamped(start), Position::clamped(end)).unwrap()
    }

    fn cat(i: usize) -> Category {
        Category::new(i).unwrap()
    }

    fn pos(i: usize) -> Position {
        Position::new(i).unwrap()
    }

    #[test]
    fn test_nearest_snaps_and_clamps() {
        assert_eq!(Position::nearest(0.0), pos(0));
        assert_eq!(Position::nearest(11.0), pos(0));
        assert_eq!(Position::nearest(13.0), pos(1));
        assert_eq!(Position::nearest(49.0), pos(2));
        assert_eq!(Position::nearest(88.0), pos(4));
        assert_eq!(Position::nearest(-40.0), pos(0));
        assert_eq!(Position::nearest(180.0), pos(4));
    }

    #[test]
    fn test_nearest_tie_favours_lower_stop() {
        assert_eq!(Position::nearest(12.5), pos(0));
        assert_eq!(Position::nearest(62.5), pos(2));
    }

    #[test]
    fn test_labels() {
        assert_eq!(pos(0).label(), "0 cm");
        assert_eq!(pos(3).label(), "35 cm");
        assert_eq!(Position::MAX.percent(), 100.0);
    }

    #[test]
    fn test_category_click_branches() {
        // 完全在区间内 -> 收缩
        assert_eq!(SelectedRange::FULL.with_category(cat(1)), range(1, 2));
        // 在区间之后 -> 向后扩展
        assert_eq!(range(1, 2).with_category(cat(3)), range(1, 4));
        // 在区间之前 -> 向前扩展
        assert_eq!(range(2, 3).with_category(cat(0)), range(0, 3));
        // 两个手柄重合时也按前后扩展处理
        assert_eq!(range(2, 2).with_category(cat(1)), range(1, 2));
        assert_eq!(range(1, 1).with_category(cat(1)), range(1, 2));
    }

    #[test]
    fn test_category_click_on_exact_span_is_stable() {
        assert_eq!(range(2, 3).with_category(cat(2)), range(2, 3));
    }

    #[test]
    fn test_position_click_branches() {
        assert_eq!(range(2, 3).with_position_click(pos(0)), Some(range(0, 3)));
        assert_eq!(range(1, 2).with_position_click(pos(4)), Some(range(1, 4)));
        assert_eq!(range(2, 2).with_position_click(pos(2)), None);
        assert_eq!(range(1, 3).with_position_click(pos(1)), Some(range(2, 3)));
        assert_eq!(range(1, 3).with_position_click(pos(3)), Some(range(1, 2)));
        // 等距时移动起点
        assert_eq!(range(0, 4).with_position_click(pos(2)), Some(range(2, 4)));
        assert_eq!(range(0, 4).with_position_click(pos(3)), Some(range(0, 3)));
        assert_eq!(range(0, 4).with_position_click(pos(1)), Some(range(1, 4)));
    }

    #[test]
    fn test_drag_cannot_cross() {
        assert_eq!(range(0, 4).with_start_dragged(pos(3)), Some(range(3, 4)));
        assert_eq!(range(0, 2).with_start_dragged(pos(3)), None);
        assert_eq!(range(2, 4).with_end_dragged(pos(1)), None);
        assert_eq!(range(2, 4).with_end_dragged(pos(2)), Some(range(2, 2)));
    }

    #[test]
    fn test_contains_category() {
        let r = range(1, 3);
        assert!(!r.contains_category(cat(0)));
        assert!(r.contains_category(cat(1)));
        assert!(r.contains_category(cat(2)));
        assert!(!r.contains_category(cat(3)));
        assert!(Category::all().all(|c| SelectedRange::FULL.contains_category(c)));
        assert!(Category::all().all(|c| !range(2, 2).contains_category(c)));
    }

    fn arb_range() -> impl Strategy<Value = SelectedRange> {
        (0..POSITION_COUNT, 0..POSITION_COUNT).prop_map(|(a, b)| range(a.min(b), a.max(b)))
    }

    proptest! {
        #[test]
        fn category_click_keeps_order(r in arb_range(), i in 0..CATEGORY_COUNT) {
            let next = r.with_category(cat(i));
            prop_assert!(next.start() <= next.end());
            // 点击后的区间总是包含被点击的类别
            prop_assert!(next.contains_category(cat(i)));
        }

        #[test]
        fn position_click_keeps_order(r in arb_range(), p in 0..POSITION_COUNT) {
            if let Some(next) = r.with_position_click(pos(p)) {
                prop_assert!(next.start() <= next.end());
            } else {
                prop_assert_eq!(r.start(), r.end());
            }
        }

        #[test]
        fn drags_keep_order(r in arb_range(), p in 0..POSITION_COUNT) {
            for next in [r.with_start_dragged(pos(p)), r.with_end_dragged(pos(p))].into_iter().flatten() {
                prop_assert!(next.start() <= next.end());
            }
        }

        #[test]
        fn nearest_is_always_a_stop(percent in -1000.0..1000.0_f64) {
            let p = Position::nearest(percent);
            prop_assert!(p.index() < POSITION_COUNT);
            let clamped = percent.clamp(0.0, 100.0);
            for stop in STOP_PERCENTS {
                prop_assert!((clamped - p.percent()).abs() <= (clamped - stop).abs());
            }
        }
    }
}

//! 合并短时间内的连续事件，只在最后一次之后触发一次

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// 记录一次事件，重新开始计时
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// 到期时返回 true 并清除计时
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// 距离到期的时间，用作事件轮询的超时
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_fires_once_after_last_event() {
        let window = Duration::from_millis(100);
        let mut debouncer = Debouncer::new(window);
        let t0 = Instant::now();

        debouncer.trigger(t0);
        debouncer.trigger(t0 + Duration::from_millis(60));
        assert!(!debouncer.fire(t0 + Duration::from_millis(120)));
        assert_eq!(
            debouncer.time_left(t0 + Duration::from_millis(120)),
            Some(Duration::from_millis(40))
        );

        assert!(debouncer.fire(t0 + Duration::from_millis(160)));
        assert!(!debouncer.fire(t0 + Duration::from_millis(500)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        assert!(debouncer.time_left(Instant::now()).is_none());
        assert!(!debouncer.fire(Instant::now()));
    }
}

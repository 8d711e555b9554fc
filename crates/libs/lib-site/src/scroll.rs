//! # Smooth Scroll
//!
//! Eased scroll animation driven by animation-frame timestamps. The service
//! has an explicit lifecycle: while stopped, `scroll_to` asks for a direct
//! jump instead of animating.

use log::debug;

pub const SCROLL_DURATION_MS: f64 = 1200.0;

/// `e(t) = min(1, 1.001 - 2^(-10t))`
pub fn ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// How a `scroll_to` request should be carried out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollStart {
    /// Set the scroll position immediately.
    Jump(f64),
    /// An animation was started; drive it with `tick`.
    Animate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    started_at: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroller {
    running: bool,
    duration_ms: f64,
    animation: Option<Animation>,
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new(SCROLL_DURATION_MS)
    }
}

impl SmoothScroller {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            running: false,
            duration_ms,
            animation: None,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the service and drop any animation in progress.
    pub fn stop(&mut self) {
        self.running = false;
        self.animation = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Begin scrolling from `from` to `target` at time `now` (ms).
    pub fn scroll_to(&mut self, target: f64, from: f64, now: f64) -> ScrollStart {
        if !self.running || self.duration_ms <= 0.0 {
            return ScrollStart::Jump(target);
        }

        debug!("Smooth scroll {from} -> {target}");
        self.animation = Some(Animation {
            from,
            to: target,
            started_at: now,
        });
        ScrollStart::Animate
    }

    /// Position for the frame at `now`, or `None` when idle.
    ///
    /// The frame that reaches the end of the duration returns the exact
    /// target and ends the animation.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        let anim = self.animation?;

        let t = ((now - anim.started_at) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            self.animation = None;
            return Some(anim.to);
        }
        Some(anim.from + (anim.to - anim.from) * ease(t))
    }

    /// Cancel the animation because the user scrolled by hand.
    pub fn interrupt(&mut self) -> bool {
        self.animation.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert!((ease(0.0) - 0.001).abs() < 1e-9);
        assert_eq!(ease(1.0), 1.0);
        assert!(ease(0.5) > 0.9);
        assert!(ease(0.2) < ease(0.3));
    }

    #[test]
    fn test_stopped_service_jumps() {
        let mut scroller = SmoothScroller::default();
        assert_eq!(scroller.scroll_to(900.0, 0.0, 0.0), ScrollStart::Jump(900.0));
        assert!(scroller.tick(16.0).is_none());
    }

    #[test]
    fn test_reaches_target() {
        let mut scroller = SmoothScroller::default();
        scroller.start();
        assert_eq!(scroller.scroll_to(1000.0, 0.0, 0.0), ScrollStart::Animate);

        let mut last = 0.0;
        let mut now = 0.0;
        while let Some(pos) = scroller.tick(now) {
            assert!(pos >= last);
            last = pos;
            now += 16.0;
        }

        assert_eq!(last, 1000.0);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_scrolls_upward() {
        let mut scroller = SmoothScroller::default();
        scroller.start();
        scroller.scroll_to(0.0, 2000.0, 100.0);

        let mid = scroller.tick(100.0 + SCROLL_DURATION_MS / 2.0).unwrap();
        assert!(mid < 2000.0 && mid > 0.0);
        assert_eq!(scroller.tick(100.0 + SCROLL_DURATION_MS), Some(0.0));
    }

    #[test]
    fn test_interrupt_cancels() {
        let mut scroller = SmoothScroller::default();
        scroller.start();
        scroller.scroll_to(500.0, 0.0, 0.0);
        scroller.tick(16.0);

        assert!(scroller.interrupt());
        assert!(scroller.tick(32.0).is_none());
        assert!(!scroller.interrupt());
        assert!(scroller.is_running());
    }

    #[test]
    fn test_stop_drops_animation() {
        let mut scroller = SmoothScroller::default();
        scroller.start();
        scroller.scroll_to(500.0, 0.0, 0.0);

        scroller.stop();
        assert!(!scroller.is_animating());
        assert_eq!(scroller.scroll_to(500.0, 0.0, 0.0), ScrollStart::Jump(500.0));
    }
}

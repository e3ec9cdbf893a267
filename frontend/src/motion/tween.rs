use std::rc::Rc;

use super::ease::Ease;
use super::path::MotionPath;

/// Visual state a tween drives: opacity plus a 2D offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
}

impl Pose {
    /// Natural position, fully visible.
    pub const REST: Pose = Pose { opacity: 1.0, x: 0.0, y: 0.0 };

    pub const fn new(opacity: f64, x: f64, y: f64) -> Self {
        Self { opacity, x, y }
    }

    /// Hidden and pushed down by `offset`.
    pub const fn hidden_below(offset: f64) -> Self {
        Self { opacity: 0.0, x: 0.0, y: offset }
    }

    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    pub fn with_offset(self, x: f64, y: f64) -> Pose {
        Pose { x, y, ..self }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

#[derive(Clone, Debug)]
pub enum Motion {
    Between { from: Pose, to: Pose },
    /// Follows `path`; the pose offset is the path point scaled to percent of
    /// `view_box`.
    Along { path: Rc<MotionPath>, view_box: f64 },
}

#[derive(Clone, Debug)]
pub struct Tween {
    pub motion: Motion,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Tween {
    pub fn between(from: Pose, to: Pose, duration_ms: f64, ease: Ease) -> Self {
        Self {
            motion: Motion::Between { from, to },
            duration_ms,
            delay_ms: 0.0,
            ease,
            repeat: Repeat::Once,
        }
    }

    pub fn along(path: Rc<MotionPath>, view_box: f64, period_ms: f64) -> Self {
        Self {
            motion: Motion::Along { path, view_box },
            duration_ms: period_ms,
            delay_ms: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::Forever,
        }
    }

    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// The pose to show before the tween's first frame.
    pub fn initial_pose(&self) -> Pose {
        self.pose_at_progress(0.0)
    }

    /// Pose at `elapsed_ms` since the tween was started, or `None` while the
    /// delay has not run out yet.
    pub fn sample(&self, elapsed_ms: f64) -> Option<Pose> {
        let active = elapsed_ms - self.delay_ms;
        if active < 0.0 {
            return None;
        }
        let raw = if self.duration_ms <= 0.0 {
            1.0
        } else {
            match self.repeat {
                Repeat::Once => (active / self.duration_ms).min(1.0),
                Repeat::Forever => (active % self.duration_ms) / self.duration_ms,
            }
        };
        Some(self.pose_at_progress(self.ease.apply(raw)))
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.repeat == Repeat::Once && elapsed_ms >= self.delay_ms + self.duration_ms
    }

    fn pose_at_progress(&self, t: f64) -> Pose {
        match &self.motion {
            Motion::Between { from, to } => from.lerp(*to, t),
            Motion::Along { path, view_box } => {
                let point = path.point_at(t);
                Pose::new(1.0, point.x / view_box * 100.0, point.y / view_box * 100.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn between_runs_from_start_to_end() {
        let tween = Tween::between(Pose::hidden_below(20.0), Pose::REST, 800.0, Ease::Power3Out);
        assert_eq!(tween.sample(0.0), Some(Pose::hidden_below(20.0)));
        let mid = tween.sample(400.0).unwrap();
        assert!(close(mid.opacity, 0.875));
        assert!(close(mid.y, 2.5));
        assert_eq!(tween.sample(800.0), Some(Pose::REST));
        assert_eq!(tween.sample(5_000.0), Some(Pose::REST));
        assert!(tween.is_complete(800.0));
        assert!(!tween.is_complete(799.0));
    }

    #[test]
    fn delay_holds_the_tween_back() {
        let tween = Tween::between(Pose::hidden_below(24.0), Pose::REST, 800.0, Ease::Linear)
            .delayed(160.0);
        assert_eq!(tween.sample(100.0), None);
        assert_eq!(tween.sample(160.0), Some(Pose::hidden_below(24.0)));
        assert!(!tween.is_complete(800.0));
        assert!(tween.is_complete(960.0));
    }

    #[test]
    fn looping_tween_never_completes() {
        let path = Rc::new(MotionPath::parse("M 0 0 L 100 0 L 0 0").unwrap());
        let tween = Tween::along(path, 100.0, 1_000.0);
        assert!(!tween.is_complete(1e9));
        let quarter = tween.sample(250.0).unwrap();
        assert!(close(quarter.x, 50.0));
        let wrapped = tween.sample(1_250.0).unwrap();
        assert!(close(wrapped.x, 50.0));
    }

    #[test]
    fn zero_duration_jumps_to_the_end() {
        let tween = Tween::between(Pose::hidden_below(8.0), Pose::REST, 0.0, Ease::Linear);
        assert_eq!(tween.sample(0.0), Some(Pose::REST));
        assert!(tween.is_complete(0.0));
    }
}

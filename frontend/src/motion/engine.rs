use super::ease::Ease;
use super::tween::{Pose, Tween};

pub type TargetId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

/// Something a tween can move. Implemented for DOM elements in the browser.
pub trait Target {
    fn apply(&self, pose: &Pose);
}

struct Track {
    id: TweenId,
    target: TargetId,
    tween: Tween,
    started_at: Option<f64>,
}

/// Runs tweens against registered targets, one `advance` per frame.
///
/// Tracks start on the first frame after they are added, so tweens queued in
/// the same turn share a start time and their delays line up.
#[derive(Default)]
pub struct Engine {
    targets: Vec<Box<dyn Target>>,
    poses: Vec<Pose>,
    tracks: Vec<Track>,
    next_id: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_target(&mut self, target: Box<dyn Target>) -> TargetId {
        self.targets.push(target);
        self.poses.push(Pose::REST);
        self.targets.len() - 1
    }

    pub fn pose(&self, target: TargetId) -> Option<Pose> {
        self.poses.get(target).copied()
    }

    /// Queues `tween` on `target` and applies its starting pose right away.
    pub fn play(&mut self, target: TargetId, tween: Tween) -> Option<TweenId> {
        if target >= self.targets.len() {
            return None;
        }
        let initial = tween.initial_pose();
        self.set_pose(target, initial);
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tracks.push(Track {
            id,
            target,
            tween,
            started_at: None,
        });
        Some(id)
    }

    /// Replaces whatever is running on `target` with a tween from its current
    /// pose towards `to`.
    pub fn retarget(
        &mut self,
        target: TargetId,
        to: Pose,
        duration_ms: f64,
        ease: Ease,
    ) -> Option<TweenId> {
        let from = self.pose(target)?;
        self.tracks.retain(|track| track.target != target);
        self.play(target, Tween::between(from, to, duration_ms, ease))
    }

    pub fn kill_all(&mut self) {
        self.tracks.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn active_tweens(&self) -> usize {
        self.tracks.len()
    }

    /// Moves every track to `now_ms`, applying poses to their targets.
    /// Returns how many poses were applied.
    pub fn advance(&mut self, now_ms: f64) -> usize {
        let mut applied = 0;
        let mut finished = Vec::new();
        for track in &mut self.tracks {
            let started_at = *track.started_at.get_or_insert(now_ms);
            let elapsed = now_ms - started_at;
            if let Some(pose) = track.tween.sample(elapsed) {
                self.targets[track.target].apply(&pose);
                self.poses[track.target] = pose;
                applied += 1;
            }
            if track.tween.is_complete(elapsed) {
                finished.push(track.id);
            }
        }
        if !finished.is_empty() {
            self.tracks.retain(|track| !finished.contains(&track.id));
        }
        applied
    }

    fn set_pose(&mut self, target: TargetId, pose: Pose) {
        self.targets[target].apply(&pose);
        self.poses[target] = pose;
    }
}

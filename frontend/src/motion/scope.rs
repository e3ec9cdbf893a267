use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::ease::Ease;
use super::engine::{Engine, Target, TargetId, TweenId};
use super::ticker::Ticker;
use super::tween::{Pose, Tween};

struct Inner {
    engine: RefCell<Engine>,
    ticker: Box<dyn Ticker>,
    frame: RefCell<Option<Box<dyn Any>>>,
    resources: RefCell<Vec<Box<dyn Any>>>,
    alive: Cell<bool>,
}

/// Everything one view animates: its tweens, the pending frame request and
/// the listeners feeding it.
///
/// Cloning gives another handle to the same scope. Callbacks that outlive the
/// current turn should hold a [`WeakScope`] so the scope's resources never
/// keep the scope itself alive.
#[derive(Clone)]
pub struct MotionScope {
    inner: Rc<Inner>,
}

#[derive(Clone)]
pub struct WeakScope(Weak<Inner>);

impl WeakScope {
    pub fn upgrade(&self) -> Option<MotionScope> {
        self.0
            .upgrade()
            .map(|inner| MotionScope { inner })
            .filter(MotionScope::is_alive)
    }
}

impl MotionScope {
    pub fn new(ticker: impl Ticker + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                engine: RefCell::new(Engine::new()),
                ticker: Box::new(ticker),
                frame: RefCell::new(None),
                resources: RefCell::new(Vec::new()),
                alive: Cell::new(true),
            }),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.get()
    }

    pub fn downgrade(&self) -> WeakScope {
        WeakScope(Rc::downgrade(&self.inner))
    }

    pub fn add_target(&self, target: impl Target + 'static) -> Option<TargetId> {
        if !self.is_alive() {
            return None;
        }
        Some(self.inner.engine.borrow_mut().add_target(Box::new(target)))
    }

    pub fn play(&self, target: TargetId, tween: Tween) -> Option<TweenId> {
        if !self.is_alive() {
            return None;
        }
        let id = self.inner.engine.borrow_mut().play(target, tween)?;
        self.wake();
        Some(id)
    }

    /// Plays `from → to` on each target in order, each one `each_ms` after
    /// the previous.
    pub fn stagger(
        &self,
        targets: &[TargetId],
        from: Pose,
        to: Pose,
        duration_ms: f64,
        each_ms: f64,
        ease: Ease,
    ) -> Vec<TweenId> {
        targets
            .iter()
            .enumerate()
            .filter_map(|(index, &target)| {
                let tween = Tween::between(from, to, duration_ms, ease).delayed(index as f64 * each_ms);
                self.play(target, tween)
            })
            .collect()
    }

    pub fn retarget(&self, target: TargetId, to: Pose, duration_ms: f64, ease: Ease) -> Option<TweenId> {
        if !self.is_alive() {
            return None;
        }
        let id = self
            .inner
            .engine
            .borrow_mut()
            .retarget(target, to, duration_ms, ease)?;
        self.wake();
        Some(id)
    }

    pub fn pose(&self, target: TargetId) -> Option<Pose> {
        self.inner.engine.borrow().pose(target)
    }

    pub fn active_tweens(&self) -> usize {
        self.inner.engine.borrow().active_tweens()
    }

    /// Keeps `resource` alive until the scope is disposed. A resource handed
    /// to a disposed scope is dropped immediately.
    pub fn hold(&self, resource: impl Any) {
        if self.is_alive() {
            self.inner.resources.borrow_mut().push(Box::new(resource));
        }
    }

    /// Kills every tween, cancels the pending frame and drops held resources.
    /// Later calls on any handle are no-ops.
    pub fn dispose(&self) {
        if !self.inner.alive.replace(false) {
            return;
        }
        self.inner.engine.borrow_mut().kill_all();
        let frame = self.inner.frame.borrow_mut().take();
        drop(frame);
        let resources: Vec<_> = self.inner.resources.borrow_mut().drain(..).collect();
        drop(resources);
    }

    fn wake(&self) {
        if self.inner.frame.borrow().is_some() {
            return;
        }
        let weak = self.downgrade();
        let handle = self.inner.ticker.request(Box::new(move |now| {
            if let Some(scope) = weak.upgrade() {
                scope.on_frame(now);
            }
        }));
        *self.inner.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(&self, now: f64) {
        self.inner.frame.borrow_mut().take();
        let busy = {
            let mut engine = self.inner.engine.borrow_mut();
            engine.advance(now);
            !engine.is_idle()
        };
        if busy && self.is_alive() {
            self.wake();
        }
    }
}

/// Owns a scope and disposes it on drop.
pub struct ScopeGuard(MotionScope);

impl ScopeGuard {
    pub fn new(scope: MotionScope) -> Self {
        Self(scope)
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.0.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::engine::tests::Recorder;
    use crate::motion::path::MotionPath;
    use crate::motion::ticker::manual::ManualTicker;
    use crate::motion::ORBIT_PATH_DATA;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn orbiting_scope(ticker: &ManualTicker, icons: usize) -> (MotionScope, Vec<Recorder>) {
        let scope = MotionScope::new(ticker.clone());
        let path = Rc::new(MotionPath::parse(ORBIT_PATH_DATA).unwrap());
        let recorders: Vec<_> = (0..icons).map(|_| Recorder::default()).collect();
        for (i, rec) in recorders.iter().enumerate() {
            let target = scope.add_target(rec.clone()).unwrap();
            scope.play(target, Tween::along(path.clone(), 600.0, (14 + i) as f64 * 1_000.0));
        }
        (scope, recorders)
    }

    #[test]
    fn frames_are_requested_only_while_busy() {
        let ticker = ManualTicker::default();
        let scope = MotionScope::new(ticker.clone());
        let rec = Recorder::default();
        let target = scope.add_target(rec.clone()).unwrap();
        scope.play(target, Tween::between(Pose::hidden_below(20.0), Pose::REST, 800.0, Ease::Power3Out));
        assert_eq!(ticker.pending(), 1);

        ticker.fire(0.0);
        ticker.fire(400.0);
        ticker.fire(800.0);
        assert_eq!(rec.last(), Some(Pose::REST));
        assert_eq!(ticker.pending(), 0);
        assert_eq!(scope.active_tweens(), 0);
    }

    #[test]
    fn one_frame_request_serves_all_tweens() {
        let ticker = ManualTicker::default();
        let (_scope, _recorders) = orbiting_scope(&ticker, 8);
        assert_eq!(ticker.pending(), 1);
        assert_eq!(ticker.fire(16.0), 1);
        assert_eq!(ticker.pending(), 1);
    }

    #[test]
    fn no_updates_reach_targets_after_dispose() {
        let ticker = ManualTicker::default();
        let (scope, recorders) = orbiting_scope(&ticker, 3);
        let parallax = Recorder::default();
        let parallax_target = scope.add_target(parallax.clone()).unwrap();
        scope.retarget(parallax_target, Pose::REST.with_offset(10.0, -4.0), 600.0, Ease::Power3Out);

        for frame in 0..10 {
            ticker.fire(frame as f64 * 16.0);
        }
        let counts: Vec<_> = recorders.iter().map(Recorder::count).collect();
        let parallax_count = parallax.count();
        assert!(counts.iter().all(|&c| c > 1));

        scope.dispose();
        for frame in 10..40 {
            ticker.fire(frame as f64 * 16.0);
        }
        let after: Vec<_> = recorders.iter().map(Recorder::count).collect();
        assert_eq!(counts, after);
        assert_eq!(parallax.count(), parallax_count);
        assert_eq!(ticker.pending(), 0);
    }

    #[test]
    fn disposed_scope_rejects_new_work() {
        let ticker = ManualTicker::default();
        let scope = MotionScope::new(ticker.clone());
        let rec = Recorder::default();
        let target = scope.add_target(rec.clone()).unwrap();
        let weak = scope.downgrade();
        scope.dispose();

        assert!(weak.upgrade().is_none());
        assert!(scope.add_target(Recorder::default()).is_none());
        assert!(scope
            .play(target, Tween::between(Pose::hidden_below(8.0), Pose::REST, 100.0, Ease::Linear))
            .is_none());
        assert!(scope.retarget(target, Pose::REST, 100.0, Ease::Linear).is_none());
        assert_eq!(rec.count(), 0);
        assert_eq!(ticker.pending(), 0);
    }

    #[test]
    fn held_resources_drop_exactly_once_on_dispose() {
        let drops = Rc::new(Cell::new(0));
        let scope = MotionScope::new(ManualTicker::default());
        scope.hold(DropCounter(drops.clone()));
        scope.hold(DropCounter(drops.clone()));
        assert_eq!(drops.get(), 0);

        scope.dispose();
        assert_eq!(drops.get(), 2);
        scope.dispose();
        assert_eq!(drops.get(), 2);

        scope.hold(DropCounter(drops.clone()));
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn guard_disposes_on_drop() {
        let ticker = ManualTicker::default();
        let (scope, recorders) = orbiting_scope(&ticker, 2);
        let guard = ScopeGuard::new(scope.clone());
        ticker.fire(0.0);
        let before = recorders[0].count();

        drop(guard);
        assert!(!scope.is_alive());
        ticker.fire(100.0);
        assert_eq!(recorders[0].count(), before);
    }
}

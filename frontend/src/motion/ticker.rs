use std::any::Any;

use gloo_render::request_animation_frame;

/// Source of frame callbacks. Dropping the returned handle cancels the
/// request.
pub trait Ticker {
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Box<dyn Any>;
}

/// Frames from the browser's `requestAnimationFrame`.
pub struct RafTicker;

impl Ticker for RafTicker {
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Box<dyn Any> {
        Box::new(request_animation_frame(callback))
    }
}

/// Current high resolution time, on the same clock as frame timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod manual {
    use super::*;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    type Slot = Rc<RefCell<Option<Box<dyn FnOnce(f64)>>>>;

    /// Ticker driven by hand from tests.
    #[derive(Clone, Default)]
    pub(crate) struct ManualTicker {
        pending: Rc<RefCell<Vec<Weak<RefCell<Option<Box<dyn FnOnce(f64)>>>>>>>,
    }

    struct Request(Slot);

    impl Drop for Request {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl ManualTicker {
        /// Runs every live request once with timestamp `now`.
        pub(crate) fn fire(&self, now: f64) -> usize {
            let due: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            let mut ran = 0;
            for slot in due {
                let callback = slot.upgrade().and_then(|slot| slot.borrow_mut().take());
                if let Some(callback) = callback {
                    callback(now);
                    ran += 1;
                }
            }
            ran
        }

        pub(crate) fn pending(&self) -> usize {
            self.pending
                .borrow()
                .iter()
                .filter(|slot| slot.upgrade().map_or(false, |s| s.borrow().is_some()))
                .count()
        }
    }

    impl Ticker for ManualTicker {
        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Box<dyn Any> {
            let slot: Slot = Rc::new(RefCell::new(Some(callback)));
            self.pending.borrow_mut().push(Rc::downgrade(&slot));
            Box::new(Request(slot))
        }
    }
}

use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::ease::Ease;
use super::parallax::{parallax_offset, Bounds, PARALLAX_FOLLOW_MS, PARALLAX_STRENGTH};
use super::scope::MotionScope;
use super::target::{select_all, ElementTarget, Placement};
use super::tween::{Pose, Tween};
use super::{registry, MotionError, ORBIT_PATH};

pub const ENTRANCE_MS: f64 = 800.0;
pub const ORBIT_BASE_SECS: f64 = 14.0;

/// A staggered fade-up of every element matching `selector`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub selector: &'static str,
    pub offset: f64,
    pub each_ms: f64,
}

pub const HERO_ENTRANCE: Entrance = Entrance {
    selector: ".hero-stagger",
    offset: 20.0,
    each_ms: 100.0,
};

pub const CARD_ENTRANCE: Entrance = Entrance {
    selector: ".category-card",
    offset: 24.0,
    each_ms: 80.0,
};

/// Loop period of the `index`th orbiting icon.
pub fn orbit_period_ms(index: usize) -> f64 {
    (ORBIT_BASE_SECS + index as f64) * 1_000.0
}

pub fn entrance(scope: &MotionScope, root: &Element, preset: Entrance) -> usize {
    let targets: Vec<_> = select_all(root, preset.selector)
        .into_iter()
        .filter_map(|element| scope.add_target(ElementTarget::new(element, Placement::Offset)))
        .collect();
    scope
        .stagger(
            &targets,
            Pose::hidden_below(preset.offset),
            Pose::REST,
            ENTRANCE_MS,
            preset.each_ms,
            Ease::Power3Out,
        )
        .len()
}

/// Sends every element matching `selector` around the orbit path forever.
pub fn orbit(scope: &MotionScope, root: &Element, selector: &str) -> Result<usize, MotionError> {
    let orbit = registry()?.path(ORBIT_PATH)?;
    let path = Rc::new(orbit.path.clone());
    let mut started = 0;
    for (index, element) in select_all(root, selector).into_iter().enumerate() {
        let Some(target) = scope.add_target(ElementTarget::new(element, Placement::Anchored)) else {
            break;
        };
        let tween = Tween::along(path.clone(), orbit.view_box, orbit_period_ms(index));
        if scope.play(target, tween).is_some() {
            started += 1;
        }
    }
    Ok(started)
}

/// Makes elements matching `selector` drift after the pointer while it moves
/// over `container`.
pub fn parallax(scope: &MotionScope, container: &HtmlElement, selector: &str) {
    let targets: Vec<_> = select_all(container, selector)
        .into_iter()
        .filter_map(|element| scope.add_target(ElementTarget::new(element, Placement::Offset)))
        .collect();
    if targets.is_empty() {
        return;
    }
    debug!("Parallax attached to {} element(s)", targets.len());

    let weak = scope.downgrade();
    let bounds_source = container.clone();
    let listener = EventListener::new(container, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(scope) = weak.upgrade() else {
            return;
        };
        let bounds = Bounds::from(bounds_source.get_bounding_client_rect());
        let (x, y) = parallax_offset(
            bounds,
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            PARALLAX_STRENGTH,
        );
        for &target in &targets {
            let current = scope.pose(target).unwrap_or_default();
            scope.retarget(target, current.with_offset(x, y), PARALLAX_FOLLOW_MS, Ease::Power3Out);
        }
    });
    scope.hold(listener);
}

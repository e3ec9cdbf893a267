use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::info;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::ticker::now_ms;
use crate::transition::{Layer, LayerState, Navigation, TransitionController};
use crate::{resolve, switch};

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Renders the view for the current location, cross-fading from the previous
/// one whenever the path changes.
#[function_component(PageTransitions)]
pub fn page_transitions() -> Html {
    let location = use_location();
    let path = location
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    let controller = use_mut_ref(TransitionController::new);
    let frame: FrameSlot = use_mut_ref(|| None);
    let redraw = use_force_update();

    if let Navigation::Started { generation } = controller.borrow_mut().navigate(&path, now_ms()) {
        info!("Rendering {} page (transition {})", resolve(&path).view_name(), generation);
    }
    let generation = controller.borrow().generation();

    {
        let controller = controller.clone();
        let frame = frame.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |generation: &u64| {
                scroll_to_top();
                let animating = controller.borrow().is_animating();
                if animating {
                    drive(controller, frame, redraw, *generation);
                }
                || ()
            },
            generation,
        );
    }

    {
        let frame = frame.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    frame.borrow_mut().take();
                }
            },
            (),
        );
    }

    let layers = controller.borrow().layers(now_ms());
    html! {
        <div class="page-stack">
            { for layers.into_iter().map(render_layer) }
        </div>
    }
}

/// Redraws every frame until the transition with `generation` settles.
/// Replacing the slot's handle cancels the previous transition's loop.
fn drive(
    controller: Rc<RefCell<TransitionController>>,
    frame: FrameSlot,
    redraw: UseForceUpdateHandle,
    generation: u64,
) {
    let slot = frame.clone();
    let handle = request_animation_frame(move |now| {
        slot.borrow_mut().take();
        let running = controller.borrow_mut().tick_generation(generation, now);
        redraw.force_update();
        if running {
            drive(controller, slot, redraw, generation);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

fn render_layer(layer: Layer) -> Html {
    let state = match layer.state {
        LayerState::Entering => "page-layer--entering",
        LayerState::Exiting => "page-layer--exiting",
        LayerState::Settled => "page-layer--settled",
    };
    let style = format!(
        "opacity: {:.4}; transform: translate3d(0, {:.3}px, 0);",
        layer.pose.opacity, layer.pose.y
    );
    let route = resolve(&layer.path);
    html! {
        <div key={layer.path} class={classes!("page-layer", state)} {style}>
            { switch(route) }
        </div>
    }
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

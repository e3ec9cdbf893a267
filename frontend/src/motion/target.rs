use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::engine::Target;
use super::tween::Pose;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Pose offset is a pixel translation, pose opacity is applied.
    Offset,
    /// Pose offset is a percentage position inside the parent. Used for
    /// elements following a motion path.
    Anchored,
}

pub struct ElementTarget {
    element: HtmlElement,
    placement: Placement,
}

impl ElementTarget {
    pub fn new(element: HtmlElement, placement: Placement) -> Self {
        Self { element, placement }
    }
}

impl Target for ElementTarget {
    fn apply(&self, pose: &Pose) {
        let style = self.element.style();
        match self.placement {
            Placement::Offset => {
                let _ = style.set_property(
                    "transform",
                    &format!("translate3d({:.3}px, {:.3}px, 0)", pose.x, pose.y),
                );
                let _ = style.set_property("opacity", &format!("{:.4}", pose.opacity));
            }
            Placement::Anchored => {
                let _ = style.set_property("left", &format!("{:.4}%", pose.x));
                let _ = style.set_property("top", &format!("{:.4}%", pose.y));
            }
        }
    }
}

/// All `HtmlElement`s under `root` matching `selector`, in document order.
pub fn select_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

use web_sys::HtmlElement;
use yew::prelude::*;

use super::scope::{MotionScope, ScopeGuard};
use super::ticker::RafTicker;

/// Runs `setup` once the element behind `root` is mounted, with a fresh
/// scope driven by animation frames. The scope is disposed when the
/// component unmounts.
#[hook]
pub fn use_motion_scope<F>(root: NodeRef, setup: F)
where
    F: FnOnce(&MotionScope, &HtmlElement) + 'static,
{
    use_effect_with_deps(
        move |root: &NodeRef| {
            let guard = root.cast::<HtmlElement>().map(|element| {
                let scope = MotionScope::new(RafTicker);
                setup(&scope, &element);
                ScopeGuard::new(scope)
            });
            move || drop(guard)
        },
        root,
    );
}

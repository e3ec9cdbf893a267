use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::MenuIcon;
use crate::config;
use crate::Route;

/// The header only hides once the page has scrolled this far.
pub const HIDE_AFTER_PX: f64 = 80.0;

/// Hidden while scrolling down past [`HIDE_AFTER_PX`], shown on any scroll up.
pub fn header_hidden(scroll_y: f64, last_y: f64) -> bool {
    scroll_y > HIDE_AFTER_PX && scroll_y - last_y > 0.0
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let hidden = use_state(|| false);
    let last_y = use_mut_ref(|| 0.0_f64);
    let (_, scroll_y) = use_window_scroll();

    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |y: &f64| {
                let mut last = last_y.borrow_mut();
                hidden.set(header_hidden(*y, *last));
                *last = *y;
                || ()
            },
            scroll_y,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*hidden).then_some("site-header--hidden"))}>
            <div class="site-header__inner">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand__mark" style={config::brand_mark_style()} />
                    <span class="brand__name">{ config::PRODUCT_NAME }</span>
                </Link<Route>>
                <nav class={classes!("site-nav", (*menu_open).then_some("site-nav--open"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Categories} classes="nav-link">{"Categories"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Testimonials} classes="nav-link">{"Testimonials"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Download} classes="nav-link">{"Download App"}</Link<Route>>
                    </div>
                </nav>
                <button class="menu-button" onclick={toggle_menu}>
                    <MenuIcon size={20} />
                </button>
            </div>
        </header>
    }
}

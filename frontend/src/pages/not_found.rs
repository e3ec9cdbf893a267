use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section section--slim not-found">
            <h2 class="section__title">{"Page not found"}</h2>
            <p class="section__lead">{"We couldn't find what you were looking for."}</p>
            <Link<Route> to={Route::Home} classes="button button--primary">{"Back to home"}</Link<Route>>
        </section>
    }
}

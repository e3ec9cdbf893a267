use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog;
use crate::components::icons::ChevronRightIcon;
use crate::components::lottie::LottieRemote;
use crate::motion::effects::{self, CARD_ENTRANCE};
use crate::motion::hooks::use_motion_scope;
use crate::Route;

#[function_component(Categories)]
pub fn categories() -> Html {
    let section = use_node_ref();

    use_motion_scope(section.clone(), |scope, root| {
        effects::entrance(scope, root, CARD_ENTRANCE);
    });

    html! {
        <section ref={section} class="section">
            <h2 class="section__title">{"Popular Categories"}</h2>
            <p class="section__lead">{"Tap a card to explore services near you."}</p>

            <div class="category-grid">
                { for catalog::list().iter().map(|service| html! {
                    <Link<Route>
                        key={service.key}
                        to={Route::Service { id: service.key.to_string() }}
                        classes="category-card"
                    >
                        <div class="category-card__sheen" />
                        <div class="category-card__icon">
                            <LottieRemote src={service.animation_source} class={classes!("icon-animation")} />
                        </div>
                        <h3 class="category-card__name">{ service.name }</h3>
                        <div class="category-card__cta">
                            {"Explore "}<ChevronRightIcon />
                        </div>
                        <div class="category-card__underline" />
                    </Link<Route>>
                }) }
            </div>
        </section>
    }
}

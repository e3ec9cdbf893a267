use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog;
use crate::components::icons::{SearchIcon, StarIcon};
use crate::components::lottie::LottieRemote;
use crate::motion::effects::{self, HERO_ENTRANCE};
use crate::motion::hooks::use_motion_scope;
use crate::motion::{self, ORBIT_PATH, ORBIT_PATH_DATA};
use crate::pages::categories::Categories;
use crate::pages::download::DownloadApp;
use crate::pages::testimonials::Testimonials;
use crate::Route;

const CITIES: [&str; 4] = ["Mumbai", "Delhi", "Bengaluru", "Pune"];
const ORBIT_ICONS: usize = 8;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <Categories />
            <DownloadApp />
            <Testimonials />
        </>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container = use_node_ref();

    use_motion_scope(container.clone(), |scope, root| {
        effects::entrance(scope, root, HERO_ENTRANCE);
        if let Err(err) = effects::orbit(scope, root, ".orbit-icon") {
            warn!("Orbit animation disabled: {}", err);
        }
        effects::parallax(scope, root, ".parallax");
    });

    html! {
        <section ref={container} class="hero">
            <div class="hero__glow hero__glow--teal" />
            <div class="hero__glow hero__glow--gold" />
            <div class="hero__grid">
                <div class="parallax">
                    <p class="hero-stagger eyebrow">{"SERVICES ON-DEMAND"}</p>
                    <h1 class="hero-stagger hero__title">{"Get anything done in your city"}</h1>
                    <p class="hero-stagger hero__lead">
                        {"Book trusted professionals for home, health, and everyday needs. Premium experience, local convenience."}
                    </p>

                    <div class="hero-stagger search-bar">
                        <div class="search-bar__field">
                            <SearchIcon size={18} class={classes!("muted")} />
                            <input placeholder="Search a service" />
                        </div>
                        <div class="search-bar__divider" />
                        <select class="search-bar__city">
                            { for CITIES.iter().map(|city| html! { <option>{ *city }</option> }) }
                        </select>
                        <Link<Route> to={Route::Categories} classes="button button--primary search-bar__go">
                            {"Explore"}
                        </Link<Route>>
                    </div>

                    <div class="hero-stagger hero__proof">
                        <div class="rating"><StarIcon class={classes!("star")} />{" 4.9/5"}</div>
                        <div>{"Trusted by 50k+ users"}</div>
                    </div>
                </div>

                <div class="orbit parallax">
                    <svg class="orbit__track" viewBox={motion::orbit_view_box()} preserveAspectRatio="none" fill="none">
                        <path id={ORBIT_PATH} d={ORBIT_PATH_DATA} stroke="#e5e7eb" />
                    </svg>
                    { for catalog::featured(ORBIT_ICONS).iter().map(|service| html! {
                        <div key={service.key} class="orbit-icon">
                            <LottieRemote src={service.animation_source} class={classes!("icon-animation")} />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

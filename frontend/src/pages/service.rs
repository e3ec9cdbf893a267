use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog;
use crate::components::icons::{PhoneIcon, StarIcon};
use crate::components::lottie::LottieRemote;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailsProps {
    pub id: String,
}

#[function_component(ServiceDetails)]
pub fn service_details(props: &ServiceDetailsProps) -> Html {
    if !catalog::contains(&props.id) {
        debug!("Unknown service `{}`, showing the default entry", props.id);
    }
    let service = catalog::find(&props.id);

    html! {
        <section class="section">
            <div class="service">
                <div class="service__stage">
                    <LottieRemote src={service.animation_source} class={classes!("stage-animation")} />
                </div>
                <div>
                    <h2 class="section__title">{ service.name }</h2>
                    <p class="section__lead">
                        {"Deep cleaning by vetted professionals. Eco-safe supplies, punctual service, transparent pricing."}
                    </p>
                    <div class="actions">
                        <Link<Route> to={Route::Book} classes="button button--primary">{"Book now"}</Link<Route>>
                        <button class="button button--outline">{"View packages"}</button>
                    </div>
                    <ul class="service__perks">
                        <li><PhoneIcon />{" 24x7 Support"}</li>
                        <li><StarIcon />{" 4.9 Rated Pros"}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

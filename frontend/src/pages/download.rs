use yew::prelude::*;

use crate::config;

#[function_component(DownloadApp)]
pub fn download_app() -> Html {
    html! {
        <section class="section download">
            <div>
                <h2 class="section__title">{ format!("Get the {} app", config::PRODUCT_NAME) }</h2>
                <p class="section__lead">{"Faster bookings, live tracking, rewards and more."}</p>
                <div class="actions">
                    <button class="button button--primary">{"App Store"}</button>
                    <button class="button button--outline">{"Play Store"}</button>
                </div>
            </div>
            <div class="download__phones">
                <div class="phone phone--back" />
                <div class="phone phone--front" />
            </div>
        </section>
    }
}

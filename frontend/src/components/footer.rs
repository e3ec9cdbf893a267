use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <div class="brand__mark brand__mark--large" style={config::brand_mark_style()} />
                    <p class="muted">{"Premium services for every day, in every city."}</p>
                </div>
                <div>
                    <div class="site-footer__heading">{"Company"}</div>
                    <ul class="site-footer__list">
                        <li>{"About"}</li>
                        <li>{"Careers"}</li>
                        <li>{"Help"}</li>
                    </ul>
                </div>
                <div>
                    <div class="site-footer__heading">{"Legal"}</div>
                    <ul class="site-footer__list">
                        <li>{"Terms"}</li>
                        <li>{"Privacy"}</li>
                    </ul>
                </div>
                <div>
                    <div class="site-footer__heading">{"Get the app"}</div>
                    <div class="store-badges">
                        <div class="store-badge" />
                        <div class="store-badge" />
                    </div>
                </div>
            </div>
            <div class="site-footer__legal">{ format!("© {} {}", year, config::PRODUCT_NAME) }</div>
        </footer>
    }
}

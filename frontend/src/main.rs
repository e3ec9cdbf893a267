use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod loader;
mod motion;
mod transition;
mod components {
    pub mod footer;
    pub mod header;
    pub mod icons;
    pub mod lottie;
    pub mod page_transitions;
}
mod pages {
    pub mod booking;
    pub mod categories;
    pub mod download;
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod service;
    pub mod testimonials;
}

use components::{footer::Footer, header::Header, page_transitions::PageTransitions};
use pages::{
    booking::BookingFlow,
    categories::Categories,
    download::DownloadApp,
    home::Home,
    login::LoginOtp,
    not_found::NotFound,
    service::ServiceDetails,
    testimonials::Testimonials,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/categories")]
    Categories,
    #[at("/service/:id")]
    Service { id: String },
    #[at("/book")]
    Book,
    #[at("/login")]
    Login,
    #[at("/testimonials")]
    Testimonials,
    #[at("/download")]
    Download,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn view_name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Categories => "Categories",
            Route::Service { .. } => "Service",
            Route::Book => "Booking",
            Route::Login => "Login",
            Route::Testimonials => "Testimonials",
            Route::Download => "Download",
            Route::NotFound => "NotFound",
        }
    }
}

/// Resolves a path to exactly one route; anything unknown is `NotFound`.
pub fn resolve(path: &str) -> Route {
    Route::recognize(path).unwrap_or(Route::NotFound)
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Categories => html! { <Categories /> },
        Route::Service { id } => html! { <ServiceDetails {id} /> },
        Route::Book => html! { <BookingFlow /> },
        Route::Login => html! { <LoginOtp /> },
        Route::Testimonials => html! { <Testimonials /> },
        Route::Download => html! { <DownloadApp /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-shell">
            <Header />
            <main>{ for props.children.iter() }</main>
            <Footer />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <PageTransitions />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(err) = motion::init() {
        error!("Motion engine unavailable: {}", err);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

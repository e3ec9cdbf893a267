use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(16)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("none"))]
    pub fill: AttrValue,
}

fn icon(props: &IconProps, body: Html) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill={props.fill.clone()}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { body }
        </svg>
    }
}

#[function_component(StarIcon)]
pub fn star_icon(props: &IconProps) -> Html {
    icon(props, html! {
        <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
    })
}

#[function_component(SearchIcon)]
pub fn search_icon(props: &IconProps) -> Html {
    icon(props, html! {
        <>
            <circle cx="11" cy="11" r="8" />
            <line x1="21" y1="21" x2="16.65" y2="16.65" />
        </>
    })
}

#[function_component(MenuIcon)]
pub fn menu_icon(props: &IconProps) -> Html {
    icon(props, html! {
        <>
            <line x1="3" y1="6" x2="21" y2="6" />
            <line x1="3" y1="12" x2="21" y2="12" />
            <line x1="3" y1="18" x2="21" y2="18" />
        </>
    })
}

#[function_component(ChevronRightIcon)]
pub fn chevron_right_icon(props: &IconProps) -> Html {
    icon(props, html! { <polyline points="9 18 15 12 9 6" /> })
}

#[function_component(PhoneIcon)]
pub fn phone_icon(props: &IconProps) -> Html {
    icon(props, html! {
        <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.8 19.8 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z" />
    })
}

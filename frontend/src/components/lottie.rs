use std::rc::Rc;

use log::warn;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::loader::{self, AssetCache, HttpFetcher, Lease};

#[wasm_bindgen]
extern "C" {
    type AnimationItem;

    #[wasm_bindgen(catch, js_namespace = lottie, js_name = loadAnimation)]
    fn load_animation(params: &JsValue) -> Result<AnimationItem, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &AnimationItem);
}

#[derive(Properties, PartialEq)]
pub struct LottieRemoteProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub looping: bool,
    #[prop_or(true)]
    pub autoplay: bool,
}

/// Fetches a Lottie descriptor from `src` and plays it. Renders an empty
/// placeholder until the descriptor arrives, and keeps it if the fetch fails.
#[function_component(LottieRemote)]
pub fn lottie_remote(props: &LottieRemoteProps) -> Html {
    let cache = use_state(|| AssetCache::pending(&*props.src));

    {
        let cache = cache.clone();
        use_effect_with_deps(
            move |src: &AttrValue| {
                if cache.source() != &**src {
                    cache.set(AssetCache::pending(&**src));
                }
                let lease = Lease::new();
                let task_lease = lease.clone();
                let src = src.to_string();
                spawn_local(async move {
                    let fetcher = HttpFetcher::new(config::asset_timeout_ms());
                    loader::load(&fetcher, &src, &task_lease, |settled| cache.set(settled)).await;
                });
                move || lease.release()
            },
            props.src.clone(),
        );
    }

    let payload = cache
        .payload()
        .filter(|_| cache.source() == &*props.src);
    match payload {
        Some(data) => html! {
            <LottiePlayer
                {data}
                class={props.class.clone()}
                looping={props.looping}
                autoplay={props.autoplay}
            />
        },
        None => html! { <div class={props.class.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct LottiePlayerProps {
    data: Rc<Value>,
    class: Classes,
    looping: bool,
    autoplay: bool,
}

#[function_component(LottiePlayer)]
fn lottie_player(props: &LottiePlayerProps) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        let (looping, autoplay) = (props.looping, props.autoplay);
        use_effect_with_deps(
            move |data: &Rc<Value>| {
                let item = container
                    .cast::<Element>()
                    .and_then(|element| mount(&element, data, looping, autoplay));
                move || {
                    if let Some(item) = item {
                        item.destroy();
                    }
                }
            },
            props.data.clone(),
        );
    }

    html! { <div ref={container} class={props.class.clone()} /> }
}

fn mount(container: &Element, data: &Value, looping: bool, autoplay: bool) -> Option<AnimationItem> {
    let animation_data = match data.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(value) => value,
        Err(err) => {
            warn!("Could not hand animation data to lottie: {}", err);
            return None;
        }
    };

    let params = js_sys::Object::new();
    let entries: [(&str, JsValue); 5] = [
        ("container", container.clone().into()),
        ("renderer", JsValue::from_str("svg")),
        ("loop", JsValue::from_bool(looping)),
        ("autoplay", JsValue::from_bool(autoplay)),
        ("animationData", animation_data),
    ];
    for (key, value) in entries {
        let _ = js_sys::Reflect::set(&params, &JsValue::from_str(key), &value);
    }

    match load_animation(&params) {
        Ok(item) => Some(item),
        Err(err) => {
            warn!("lottie.loadAnimation failed: {:?}", err);
            None
        }
    }
}

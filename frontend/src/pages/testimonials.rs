use yew::prelude::*;

use crate::components::icons::StarIcon;

const REVIEWS: usize = 3;
const STARS: usize = 5;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section">
            <h2 class="section__title">{"Loved by locals"}</h2>
            <div class="review-grid">
                { for (0..REVIEWS).map(|i| html! {
                    <div key={i} class="review">
                        <div class="review__stars">
                            { for (0..STARS).map(|j| html! {
                                <StarIcon key={j} fill="#F59E0B" class={classes!("star")} />
                            }) }
                        </div>
                        <p class="review__body">
                            {"Amazing experience! booked in 2 taps and the pro arrived on time. Clean finish."}
                        </p>
                        <div class="review__city">{"Mumbai"}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

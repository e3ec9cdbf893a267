use yew::prelude::*;

#[function_component(BookingFlow)]
pub fn booking_flow() -> Html {
    html! {
        <section class="section section--narrow">
            <h2 class="section__title">{"Book your service"}</h2>
            <div class="steps">
                <div class="step">
                    <h3>{"Step 1: Select date & time"}</h3>
                    <input type="date" class="field" />
                </div>
                <div class="step">
                    <h3>{"Step 2: Address"}</h3>
                    <input placeholder="Your address" class="field field--wide" />
                </div>
                <div class="step">
                    <h3>{"Step 3: Confirm"}</h3>
                    <button class="button button--primary">{"Confirm Booking"}</button>
                </div>
            </div>
        </section>
    }
}

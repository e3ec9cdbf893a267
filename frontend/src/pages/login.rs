use yew::prelude::*;

#[function_component(LoginOtp)]
pub fn login_otp() -> Html {
    html! {
        <section class="section section--slim">
            <h2 class="section__title">{"Login with OTP"}</h2>
            <input placeholder="Phone number" class="field field--wide" />
            <button class="button button--primary button--block">{"Send OTP"}</button>
        </section>
    }
}

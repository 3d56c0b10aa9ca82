use yew::prelude::*;

#[function_component(ConfirmationPage)]
pub fn confirmation_page() -> Html {
    html! {
        <div class="page">
            <div class="card centered">
                <h2>{"🎉 Booking Confirmed!"}</h2>
                <p>{"You should see a confirmation email in your inbox shortly."}</p>
            </div>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator().unwrap();

    let go_book = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::KitSelection))
    };
    let go_return = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Return))
    };
    let go_admin = Callback::from(move |_: MouseEvent| navigator.push(&Route::AdminLogin));

    html! {
        <div class="page">
            <h1>{"PalTV Kit Booking System"}</h1>
            <div class="home-actions">
                <button class="primary" onclick={go_book}>{"Book a Kit"}</button>
                <button class="primary" onclick={go_return}>{"Return a Kit"}</button>
                <button class="booking-option" onclick={go_admin}>{"Admin"}</button>
            </div>
        </div>
    }
}

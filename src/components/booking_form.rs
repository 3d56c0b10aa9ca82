use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{alert, Route};
use crate::models::booking::BookingDraft;
use crate::models::kit::KitQuantity;

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let navigator = use_navigator().unwrap();
    let location = use_location();

    // Selection payload from the catalog page; empty on direct entry
    let kit_quantities: Vec<KitQuantity> = location
        .and_then(|l| l.state::<Vec<KitQuantity>>())
        .map(|rc| (*rc).clone())
        .unwrap_or_default();

    let title_ref = use_node_ref();
    let date_ref = use_node_ref();
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();

    let today = {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    };

    let on_submit = {
        let kit_quantities = kit_quantities.clone();
        let title_ref = title_ref.clone();
        let date_ref = date_ref.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node_ref: &NodeRef| {
                node_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            let draft = BookingDraft {
                kit_quantities: kit_quantities.clone(),
                project_title: value(&title_ref),
                date: value(&date_ref),
                start_time: value(&start_ref),
                end_time: value(&end_ref),
            };

            // Validation errors block navigation; no network call happens here
            if let Err(e) = draft.validate() {
                alert(&e.to_string());
                return;
            }

            navigator.push_with_state(&Route::Finish, draft);
        })
    };

    html! {
        <div class="page">
            <h1>{"Book Your Kit"}</h1>

            <div class="card">
                if kit_quantities.is_empty() {
                    <p class="empty-state">{"No kits selected yet — you can still set the booking details."}</p>
                } else {
                    <p>{ format!("{} kit(s) selected", kit_quantities.len()) }</p>
                }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="project-title">{"Project Title"}</label>
                        <input id="project-title" type="text" ref={title_ref} placeholder="What is this booking for?" />
                    </div>

                    <div class="form-group">
                        <label for="booking-date">{"Booking Date"}</label>
                        <input id="booking-date" type="date" ref={date_ref} value={today} />
                    </div>

                    <div class="form-group">
                        <label for="start-time">{"Start Time"}</label>
                        <input id="start-time" type="time" ref={start_ref} value="09:00" />
                    </div>

                    <div class="form-group">
                        <label for="end-time">{"End Time"}</label>
                        <input id="end-time" type="time" ref={end_ref} value="17:00" />
                    </div>

                    <button type="submit" class="primary">{"Finish Booking"}</button>
                </form>
            </div>
        </div>
    }
}

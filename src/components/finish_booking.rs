use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{alert, Route};
use crate::models::booking::{BookingDraft, Requester};
use crate::services::api_client::CreateBookingRequest;
use crate::services::ApiClient;

#[function_component(FinishBookingPage)]
pub fn finish_booking_page() -> Html {
    let navigator = use_navigator().unwrap();
    let location = use_location();

    // Draft from the booking page; empty on direct entry
    let draft: BookingDraft = location
        .and_then(|l| l.state::<BookingDraft>())
        .map(|rc| (*rc).clone())
        .unwrap_or_default();

    let submitting = use_state(|| false);

    let first_ref = use_node_ref();
    let last_ref = use_node_ref();
    let email_ref = use_node_ref();

    let on_submit = {
        let navigator = navigator.clone();
        let draft = draft.clone();
        let submitting = submitting.clone();
        let first_ref = first_ref.clone();
        let last_ref = last_ref.clone();
        let email_ref = email_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Guard against double submission while the calls are in flight
            if *submitting {
                return;
            }

            let value = |node_ref: &NodeRef| {
                node_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            let requester = Requester {
                first_name: value(&first_ref),
                last_name: value(&last_ref),
                email: value(&email_ref),
            };

            if let Err(message) = requester.validate() {
                alert(message);
                return;
            }

            let navigator = navigator.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            spawn_local(async move {
                let api = ApiClient::new();

                match api.create_user(&requester).await {
                    Ok(user_id) => {
                        let request = CreateBookingRequest {
                            user_id,
                            start_time: draft.full_start(),
                            end_time: draft.full_end(),
                            email: requester.email.clone(),
                            project_title: draft.project_title.clone(),
                            kit_quantities: draft.kit_quantities.clone(),
                        };

                        match api.create_booking(&request).await {
                            Ok(()) => {
                                log::info!("✅ Booking confirmed for user {}", user_id);
                                navigator.push(&Route::Confirmed);
                            }
                            Err(e) => {
                                // The user record created above is now orphaned;
                                // cleanup is left to the backend.
                                log::error!(
                                    "❌ Booking create failed after user {} was created: {}",
                                    user_id,
                                    e
                                );
                                alert("Error confirming booking. Please try again.");
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("❌ User create failed: {}", e);
                        alert("Error confirming booking. Please try again.");
                    }
                }

                submitting.set(false);
            });
        })
    };

    html! {
        <div class="page">
            <h1>{"Confirm Your Booking"}</h1>

            <div class="card">
                <h2>{"Selected Kits"}</h2>
                if draft.kit_quantities.is_empty() {
                    <p class="empty-state">{"No kits selected."}</p>
                } else {
                    <ul>
                        { for draft.kit_quantities.iter().map(|kit| html! {
                            <li key={kit.id}>{ kit.display_label() }</li>
                        }) }
                    </ul>
                }

                <h2>{"Booking Date & Time"}</h2>
                <p>{ format!("{} | {} → {}", draft.date, draft.start_time, draft.end_time) }</p>

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="first-name">{"First Name"}</label>
                        <input id="first-name" type="text" ref={first_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="last-name">{"Last Name"}</label>
                        <input id="last-name" type="text" ref={last_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email Address"}</label>
                        <input id="email" type="email" ref={email_ref} required=true />
                    </div>

                    <button type="submit" class="primary" disabled={*submitting}>
                        { if *submitting { "Submitting..." } else { "Confirm Booking" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

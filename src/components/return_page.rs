use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::booking::Booking;
use crate::services::ApiClient;
use crate::state::return_flow::{LookupOutcome, ReturnFlow, ReturnStep};

const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[function_component(ReturnPage)]
pub fn return_page() -> Html {
    // A fresh session per visit; navigating away discards it
    let flow = use_state(ReturnFlow::new);
    let busy = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let first_ref = use_node_ref();
    let last_ref = use_node_ref();

    // Step 1: look up bookings by requester name
    let on_find = {
        let flow = flow.clone();
        let busy = busy.clone();
        let error = error.clone();
        let first_ref = first_ref.clone();
        let last_ref = last_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let first_name = first_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let last_name = last_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            if first_name.trim().is_empty() || last_name.trim().is_empty() {
                error.set(Some("Please enter your first and last name.".to_string()));
                return;
            }

            let flow = flow.clone();
            let busy = busy.clone();
            let error = error.clone();
            busy.set(true);
            error.set(None);

            spawn_local(async move {
                let api = ApiClient::new();

                match api.find_user_bookings(&first_name, &last_name).await {
                    Ok(found) => {
                        let mut next = (*flow).clone();
                        match next.apply_lookup(found) {
                            LookupOutcome::NoMatch => {
                                error.set(Some("No booking found for that name.".to_string()));
                            }
                            LookupOutcome::Single(booking_id) => {
                                // Common case: one booking, skip the chooser
                                load_checklist(&api, &mut next, booking_id, &error).await;
                            }
                            LookupOutcome::Multiple => {
                                log::info!(
                                    "✅ Multiple bookings found, showing chooser"
                                );
                            }
                        }
                        flow.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Booking lookup failed: {}", e);
                        error.set(Some(GENERIC_ERROR.to_string()));
                    }
                }

                busy.set(false);
            });
        })
    };

    // Step 2: pick one of several candidate bookings
    let on_choose = {
        let flow = flow.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |booking_id: i64| {
            if *busy {
                return;
            }

            let flow = flow.clone();
            let busy = busy.clone();
            let error = error.clone();
            busy.set(true);
            error.set(None);

            spawn_local(async move {
                let api = ApiClient::new();
                let mut next = (*flow).clone();
                load_checklist(&api, &mut next, booking_id, &error).await;
                flow.set(next);
                busy.set(false);
            });
        })
    };

    // Step 3: tick off every kit
    let on_toggle_kit = {
        let flow = flow.clone();
        Callback::from(move |kit_id: i64| {
            let mut next = (*flow).clone();
            next.toggle_kit(kit_id);
            flow.set(next);
        })
    };

    let on_confirm = {
        let flow = flow.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            if *busy || !flow.can_confirm() {
                return;
            }
            let Some(booking_id) = flow.booking().map(|b| b.id) else {
                return;
            };

            let flow = flow.clone();
            let busy = busy.clone();
            let error = error.clone();
            busy.set(true);
            error.set(None);

            spawn_local(async move {
                match ApiClient::new().confirm_return(booking_id).await {
                    Ok(()) => {
                        log::info!("✅ Return of booking {} complete", booking_id);
                        let mut next = (*flow).clone();
                        next.complete();
                        flow.set(next);
                    }
                    Err(e) => {
                        // Selections stay intact; the user can retry
                        log::error!("❌ Return confirm failed: {}", e);
                        error.set(Some("Error confirming return. Please try again.".to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let error_banner = error.as_ref().map(|message| {
        html! { <div class="error-banner">{ message.clone() }</div> }
    });

    let body = match flow.step() {
        ReturnStep::Lookup => html! {
            <form onsubmit={on_find}>
                <div class="form-group">
                    <label for="first-name">{"First Name"}</label>
                    <input id="first-name" type="text" ref={first_ref} required=true />
                </div>
                <div class="form-group">
                    <label for="last-name">{"Last Name"}</label>
                    <input id="last-name" type="text" ref={last_ref} required=true />
                </div>
                <button type="submit" class="primary" disabled={*busy}>
                    { if *busy { "Searching..." } else { "Find Booking" } }
                </button>
            </form>
        },
        ReturnStep::ChooseBooking => html! {
            <>
                <h2>{"Choose a Booking"}</h2>
                { for flow.candidates().iter().map(|candidate| {
                    let onclick = on_choose.reform({
                        let id = candidate.id;
                        move |_: MouseEvent| id
                    });
                    html! {
                        <button class="booking-option" key={candidate.id} {onclick} disabled={*busy}>
                            <strong>{ candidate.title() }</strong>
                            <div>{ candidate.time_range() }</div>
                        </button>
                    }
                }) }
            </>
        },
        ReturnStep::Checklist => match flow.booking() {
            Some(booking) => checklist(booking, &flow, &on_toggle_kit, &on_confirm, *busy),
            None => html! {},
        },
        ReturnStep::Completed => html! {
            <div class="centered">
                <h2>{"Kit Return Complete ✅"}</h2>
                <p>{"Thank you for returning your equipment!"}</p>
            </div>
        },
    };

    html! {
        <div class="page">
            <h1>{"Return Your Kit"}</h1>
            { for error_banner }
            <div class="card">
                { body }
            </div>
        </div>
    }
}

fn checklist(
    booking: &Booking,
    flow: &ReturnFlow,
    on_toggle_kit: &Callback<i64>,
    on_confirm: &Callback<MouseEvent>,
    busy: bool,
) -> Html {
    html! {
        <>
            <h2>{"Kits to Return"}</h2>
            if let Some(project) = &booking.project_title {
                <p>{ project.clone() }</p>
            }
            <p class="empty-state">{ format!("{} → {}", booking.start_time, booking.end_time) }</p>
            { for booking.kits.iter().map(|kit| {
                let onchange = on_toggle_kit.reform({
                    let id = kit.id;
                    move |_: Event| id
                });
                html! {
                    <div class="kit-row" key={kit.id}>
                        <label>
                            <input
                                type="checkbox"
                                checked={flow.is_checked(kit.id)}
                                {onchange}
                            />
                            { kit.display_label() }
                        </label>
                    </div>
                }
            }) }

            <button
                class="primary success"
                onclick={on_confirm.clone()}
                disabled={!flow.can_confirm() || busy}
            >
                { if busy { "Confirming..." } else { "Confirm Return" } }
            </button>
        </>
    }
}

/// Fetches a booking's kit detail and advances the flow to its checklist.
/// On failure the flow is left where it was and a generic error is surfaced.
async fn load_checklist(
    api: &ApiClient,
    flow: &mut ReturnFlow,
    booking_id: i64,
    error: &UseStateHandle<Option<String>>,
) {
    match api.fetch_booking(booking_id).await {
        Ok(booking) => flow.begin_checklist(booking),
        Err(e) => {
            log::error!("❌ Error loading booking {}: {}", booking_id, e);
            let message = if e.is_not_found() {
                "That booking could not be found anymore."
            } else {
                GENERIC_ERROR
            };
            error.set(Some(message.to_string()));
        }
    }
}

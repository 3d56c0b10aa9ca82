use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::models::admin::AdminBooking;
use crate::services::ApiClient;

#[function_component(AdminPortalPage)]
pub fn admin_portal_page() -> Html {
    let navigator = use_navigator().unwrap();

    let bookings = use_state(Vec::<AdminBooking>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    // Fetch current bookings on mount; unauthenticated callers bounce to login
    {
        let bookings = bookings.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().admin_bookings().await {
                    Ok(records) => {
                        let normalized: Vec<AdminBooking> =
                            records.iter().map(AdminBooking::from_value).collect();
                        bookings.set(normalized);
                    }
                    Err(e) if e.is_unauthorized() => {
                        log::warn!("🔐 Not authenticated, redirecting to admin login");
                        navigator.replace(&Route::AdminLogin);
                        return;
                    }
                    Err(e) => {
                        log::error!("❌ Error fetching admin bookings: {}", e);
                        error.set(Some("Failed to fetch bookings.".to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <p>{"Loading bookings..."}</p> }
    } else if let Some(message) = error.as_ref() {
        html! { <div class="error-banner">{ message.clone() }</div> }
    } else if bookings.is_empty() {
        html! { <p class="empty-state">{"No current bookings."}</p> }
    } else {
        html! {
            <>
                { for bookings.iter().map(booking_entry) }
            </>
        }
    };

    html! {
        <div class="page">
            <h1>{"Current Bookings"}</h1>
            { body }
        </div>
    }
}

fn booking_entry(booking: &AdminBooking) -> Html {
    let heading = match &booking.project {
        Some(project) => format!("{} – {}", booking.name, project),
        None => booking.name.clone(),
    };

    html! {
        <div class="card" key={booking.id.clone()}>
            <strong>{ heading }</strong>
            <div>{ booking.time_label() }</div>

            <h4>{"Kit booked"}</h4>
            if booking.kits.is_empty() {
                <p class="empty-state">{"No kits on this booking."}</p>
            } else {
                <ul>
                    { for booking.kits.iter().map(|kit| html! {
                        <li>
                            { &kit.name }
                            { for kit.quantity_label().map(|label| html! {
                                <span>{ format!(" — {}", label) }</span>
                            }) }
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}

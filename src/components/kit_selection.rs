use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::models::kit::{group_kits, Kit};
use crate::services::ApiClient;
use crate::state::selection::SelectionState;

#[function_component(KitSelectionPage)]
pub fn kit_selection_page() -> Html {
    let navigator = use_navigator().unwrap();
    let kits = use_state(Vec::<Kit>::new);
    let selection = use_state(SelectionState::new);
    let load_failed = use_state(|| false);

    // Load the catalog on mount
    {
        let kits = kits.clone();
        let load_failed = load_failed.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().fetch_kits().await {
                    Ok(list) => {
                        log::info!("✅ Kits loaded: {}", list.len());
                        kits.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Error fetching kits: {}", e);
                        load_failed.set(true);
                    }
                }
            });
            || ()
        });
    }

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |kit: Kit| {
            let mut next = (*selection).clone();
            next.toggle(&kit);
            selection.set(next);
        })
    };

    let on_quantity = {
        let selection = selection.clone();
        Callback::from(move |(kit, quantity): (Kit, u32)| {
            let mut next = (*selection).clone();
            next.set_quantity(&kit, quantity);
            selection.set(next);
        })
    };

    // Selection travels forward as in-memory navigation state only
    let on_proceed = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let payload = selection.to_list();
            log::info!("➡️ Proceeding to booking with {} kit(s)", payload.len());
            navigator.push_with_state(&Route::Booking, payload);
        })
    };

    let grouped = group_kits(&kits);

    html! {
        <div class="page">
            <h1>{"Select Your Kits"}</h1>

            if *load_failed {
                <div class="error-banner">{"Failed to load the kit catalog. Please try again later."}</div>
            }

            <div class="card">
                <div class="kit-group">
                    <h3>{"📷 Camera"}</h3>
                    { for grouped.cameras.iter().map(|kit| kit_row(kit, &selection, &on_toggle, &on_quantity)) }

                    <h4>{"Camera Equipment"}</h4>
                    { for grouped.camera_equipment.iter().map(|kit| kit_row(kit, &selection, &on_toggle, &on_quantity)) }

                    <h4>{"Camera Lenses"}</h4>
                    { for grouped.camera_lenses.iter().map(|kit| kit_row(kit, &selection, &on_toggle, &on_quantity)) }
                </div>

                <div class="kit-group">
                    <h3>{"🎤 Sound"}</h3>
                    { for grouped.sound.iter().map(|kit| kit_row(kit, &selection, &on_toggle, &on_quantity)) }
                </div>

                <div class="kit-group">
                    <h3>{"💡 Lighting"}</h3>
                    { for grouped.lighting.iter().map(|kit| kit_row(kit, &selection, &on_toggle, &on_quantity)) }
                </div>

                if !grouped.other.is_empty() {
                    <div class="kit-group">
                        <h3>{"Other"}</h3>
                        { for grouped.other.iter().map(|kit| kit_row(kit, &selection, &on_toggle, &on_quantity)) }
                    </div>
                }
            </div>

            <button
                class="primary"
                onclick={on_proceed}
                disabled={selection.is_empty()}
            >
                {"Proceed to Booking"}
            </button>
        </div>
    }
}

fn kit_row(
    kit: &Kit,
    selection: &SelectionState,
    on_toggle: &Callback<Kit>,
    on_quantity: &Callback<(Kit, u32)>,
) -> Html {
    let control = if kit.is_multi_unit() {
        let max = kit.max_quantity();
        let current = selection.quantity_of(kit.id);
        let onchange = {
            let kit = kit.clone();
            let on_quantity = on_quantity.clone();
            Callback::from(move |e: Event| {
                if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                    let quantity = select.value().parse::<u32>().unwrap_or(0);
                    on_quantity.emit((kit.clone(), quantity));
                }
            })
        };

        html! {
            <select {onchange}>
                { for (0..=max).map(|n| html! {
                    <option value={n.to_string()} selected={n == current}>
                        { n.to_string() }
                    </option>
                }) }
            </select>
        }
    } else {
        let onchange = {
            let kit = kit.clone();
            on_toggle.reform(move |_: Event| kit.clone())
        };

        html! {
            <input
                type="checkbox"
                checked={selection.is_selected(kit.id)}
                {onchange}
            />
        }
    };

    html! {
        <div class="kit-row" key={kit.id}>
            <span>{ &kit.name }</span>
            { control }
        </div>
    }
}

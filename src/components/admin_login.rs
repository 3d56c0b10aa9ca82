use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::services::ApiClient;

#[function_component(AdminLoginPage)]
pub fn admin_login_page() -> Html {
    let navigator = use_navigator().unwrap();

    let username_error = use_state(|| Option::<String>::None);
    let password_error = use_state(|| Option::<String>::None);
    let submit_error = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let username_error = username_error.clone();
        let password_error = password_error.clone();
        let submit_error = submit_error.clone();
        let loading = loading.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let username = username_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            // Client-side validation before any network call
            let mut valid = true;
            if username.trim().len() < 3 {
                username_error.set(Some(
                    "Please enter a valid username (at least 3 characters).".to_string(),
                ));
                valid = false;
            } else {
                username_error.set(None);
            }
            if password.len() < 6 {
                password_error.set(Some(
                    "Password must be at least 6 characters.".to_string(),
                ));
                valid = false;
            } else {
                password_error.set(None);
            }
            if !valid {
                return;
            }

            let navigator = navigator.clone();
            let submit_error = submit_error.clone();
            let loading = loading.clone();
            loading.set(true);
            submit_error.set(None);

            spawn_local(async move {
                match ApiClient::new().admin_login(&username, &password).await {
                    Ok(()) => {
                        log::info!("✅ Admin logged in");
                        navigator.push(&Route::AdminPortal);
                    }
                    Err(e) => {
                        log::error!("❌ Admin login failed: {}", e);
                        submit_error.set(Some("Login failed.".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let field_error = |state: &UseStateHandle<Option<String>>| {
        state.as_ref().map(|message| {
            html! { <div class="field-error">{ message.clone() }</div> }
        })
    };

    html! {
        <div class="page">
            <h1>{"PalTV Admin Login"}</h1>

            <div class="card">
                { for submit_error.as_ref().map(|message| html! {
                    <div class="error-banner">{ message.clone() }</div>
                }) }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            id="username"
                            type="text"
                            placeholder="admin_user"
                            ref={username_ref}
                            required=true
                        />
                        { for field_error(&username_error) }
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••"
                            ref={password_ref}
                            required=true
                        />
                        { for field_error(&password_error) }
                    </div>

                    <button type="submit" class="primary" disabled={*loading}>
                        { if *loading { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

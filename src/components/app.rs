use yew::prelude::*;
use yew_router::prelude::*;

use super::{
    AdminLoginPage, AdminPortalPage, BookingPage, ConfirmationPage, FinishBookingPage, HomePage,
    KitSelectionPage, ReturnPage,
};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/kit-selection")]
    KitSelection,
    #[at("/booking")]
    Booking,
    #[at("/finish")]
    Finish,
    #[at("/confirmed")]
    Confirmed,
    #[at("/return")]
    Return,
    #[at("/admin")]
    AdminLogin,
    #[at("/admin/portal")]
    AdminPortal,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::KitSelection => html! { <KitSelectionPage /> },
        Route::Booking => html! { <BookingPage /> },
        Route::Finish => html! { <FinishBookingPage /> },
        Route::Confirmed => html! { <ConfirmationPage /> },
        Route::Return => html! { <ReturnPage /> },
        Route::AdminLogin => html! { <AdminLoginPage /> },
        Route::AdminPortal => html! { <AdminPortalPage /> },
        Route::NotFound => html! {
            <div class="page">
                <div class="card centered">
                    <h2>{"Page not found"}</h2>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

mod admin_login;
mod admin_portal;
mod app;
mod booking_form;
mod confirmation;
mod finish_booking;
mod home;
mod kit_selection;
mod return_page;

pub use admin_login::AdminLoginPage;
pub use admin_portal::AdminPortalPage;
pub use app::{App, Route};
pub use booking_form::BookingPage;
pub use confirmation::ConfirmationPage;
pub use finish_booking::FinishBookingPage;
pub use home::HomePage;
pub use kit_selection::KitSelectionPage;
pub use return_page::ReturnPage;

/// Blocking user-visible message, same channel for validation and request
/// failures.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

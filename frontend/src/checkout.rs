use web_sys::window;

use crate::config;

/// Opens the payment page in a new tab. A blocked popup is only logged.
pub fn open_checkout() {
    log::info!("Opening checkout");
    match window() {
        Some(window) => match window.open_with_url_and_target(config::CHECKOUT_URL, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => log::warn!("Checkout window was blocked"),
            Err(e) => log::error!("Failed to open checkout: {:?}", e),
        },
        None => log::error!("No window to open checkout from"),
    }
}

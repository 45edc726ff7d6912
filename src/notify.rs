//! User Notifications
//!
//! Blocking alert shown when an operation fails.

/// Presents a user-visible failure notice
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert()` in the browser
#[derive(Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("alert failed: {:?}", e);
                }
            }
            None => log::error!("no window for alert: {}", message),
        }
    }
}

//! Hydrate-only DOM side effects: alerts and scrolling.
//!
//! TRADE-OFFS
//! ==========
//! These are best-effort browser behaviors; SSR and test builds no-op so the
//! callers never need their own `cfg` guards.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Smoothly scroll the transcript entry `entry_id` to the middle of the view.
pub fn scroll_entry_into_view(entry_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let dom_id = crate::state::transcript::entry_dom_id(entry_id);
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&dom_id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entry_id;
    }
}

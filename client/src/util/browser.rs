//! Thin wrappers over browser dialogs.

/// Ask the user to confirm `message`. Outside the browser nothing is shown
/// and the answer is always yes.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}

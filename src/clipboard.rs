//! Clipboard sink.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::warn;
use zeroize::Zeroize;

/// Put `text` on the system clipboard. Returns false if no clipboard is
/// reachable or the write fails.
pub fn copy(text: &str) -> bool {
    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!(error = %e, "clipboard unavailable");
            return false;
        }
    };

    match ctx.set_contents(text.to_owned()) {
        Ok(()) => {
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            true
        }
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            false
        }
    }
}

//! Browser-side setup for the client-rendered page.

/// Routes `tracing` events to the browser console.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging() {
    if tracing_wasm::try_set_as_global_default().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

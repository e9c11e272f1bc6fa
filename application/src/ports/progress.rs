//! Busy indicator port
//!
//! Every gateway call blocks the interface until it returns. The dispatcher
//! brackets each call with these callbacks so the presentation layer can
//! show a spinner.

use intelli_domain::Panel;

/// Callback for the "busy" state around a gateway call
///
/// Implementations live in the presentation layer.
pub trait BusyIndicator: Send + Sync {
    /// Called right before the gateway call for `panel` is issued
    fn on_busy_start(&self, panel: Panel);

    /// Called once the call returned, successfully or not
    fn on_busy_end(&self, panel: Panel, success: bool);
}

/// No-op indicator for quiet mode and tests
pub struct NoProgress;

impl BusyIndicator for NoProgress {
    fn on_busy_start(&self, _panel: Panel) {}
    fn on_busy_end(&self, _panel: Panel, _success: bool) {}
}

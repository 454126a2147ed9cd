use leptos::prelude::*;

/// UI state of the prompt form: the prompt text plus the outcome of the
/// last submission. `plot_url` and `error_message` use the empty string
/// for "absent"; at most one of them is non-empty once a request settles.
#[derive(Clone, Debug, Default)]
pub struct GeneratePlotState {
    pub prompt: String,
    pub plot_url: String,
    pub error_message: String,
    pub is_loading: bool,
}

impl GeneratePlotState {
    /// Move to the Submitting state: clear the previous outcome and raise
    /// the loading flag. Returns `false` without touching anything when a
    /// request is already in flight, so a second submit is rejected.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.error_message.clear();
        self.plot_url.clear();
        self.is_loading = true;
        true
    }

    /// Settle successfully. The server may answer without a URL; the
    /// result then stays empty and no error is shown.
    pub fn finish_success(&mut self, plot_url: Option<String>) {
        self.plot_url = plot_url.unwrap_or_default();
        self.is_loading = false;
    }

    /// Settle with a failure reason to show the user.
    pub fn finish_failure(&mut self, reason: String) {
        self.error_message = reason;
        self.is_loading = false;
    }
}

pub fn create_state() -> RwSignal<GeneratePlotState> {
    RwSignal::new(GeneratePlotState::default())
}

use gloo::dialogs;
use gloo_timers::future::TimeoutFuture;
use shared::controller::{Pause, SpinView};
use shared::history::{HistoryRow, ResultDisplay};
use shared::shared_roulette_game::{ColorOdds, Statistics};
use web_sys::window;
use yew::functional::UseStateSetter;

/// Pushes controller output into the component's state.
pub struct StateView {
    pub controls_enabled: UseStateSetter<bool>,
    pub spin_label: UseStateSetter<String>,
    pub batch_label: UseStateSetter<String>,
    pub rotation: UseStateSetter<f64>,
    pub result: UseStateSetter<Option<ResultDisplay>>,
    pub statistics: UseStateSetter<Statistics>,
    pub history: UseStateSetter<Vec<HistoryRow>>,
    pub odds: UseStateSetter<Vec<ColorOdds>>,
}

impl SpinView for StateView {
    fn set_controls_enabled(&self, enabled: bool) {
        self.controls_enabled.set(enabled);
    }

    fn set_spin_label(&self, label: &str) {
        self.spin_label.set(label.to_string());
    }

    fn set_batch_label(&self, label: &str) {
        self.batch_label.set(label.to_string());
    }

    fn rotate_wheel(&self, degrees: f64) {
        self.rotation.set(degrees);
    }

    fn show_result(&self, result: &ResultDisplay) {
        self.result.set(Some(result.clone()));
    }

    fn show_statistics(&self, statistics: &Statistics) {
        self.statistics.set(statistics.clone());
    }

    fn show_history(&self, rows: &[HistoryRow]) {
        self.history.set(rows.to_vec());
    }

    fn show_odds(&self, odds: &[ColorOdds]) {
        self.odds.set(odds.to_vec());
    }

    fn alert(&self, message: &str) {
        dialogs::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        dialogs::confirm(message)
    }

    fn reload(&self) {
        if let Some(window) = window() {
            if let Err(e) = window.location().reload() {
                log::error!("Failed to reload page: {:?}", e);
            }
        }
    }
}

pub struct TimerPause;

impl Pause for TimerPause {
    async fn pause(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

//! The roulette page's controller.
//!
//! Everything the page does goes through [`SpinController`]: button presses
//! become backend calls, replies become view updates. The backend, the page
//! and the clock are traits so the same state machine runs in the browser and
//! in plain `cargo test`.

use std::cell::{Cell, RefCell};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::constants::{
    BATCH_LABEL_BUSY, BATCH_LABEL_IDLE, BATCH_PAUSE_MS, BATCH_SPINS, RESET_CONFIRM_PROMPT,
    RESET_FAILED_ALERT, SPIN_ANIMATION_MS, SPIN_FAILED_ALERT, SPIN_LABEL_BUSY, SPIN_LABEL_IDLE,
};
use crate::error::ApiError;
use crate::history::{HistoryRow, HistoryView, ResultDisplay};
use crate::rotation::plan_rotation;
use crate::shared_roulette_game::{
    ColorOdds, HistorySnapshot, Outcome, SpinReply, SpinResult, Statistics,
};

/// The roulette backend.
#[allow(async_fn_in_trait)]
pub trait RouletteApi {
    async fn spin(&self) -> Result<SpinReply, ApiError>;
    async fn history(&self) -> Result<HistorySnapshot, ApiError>;
    async fn reset(&self) -> Result<(), ApiError>;
    async fn colors(&self) -> Result<Vec<ColorOdds>, ApiError>;
}

/// Everything the player can see or answer.
pub trait SpinView {
    fn set_controls_enabled(&self, enabled: bool);
    fn set_spin_label(&self, label: &str);
    fn set_batch_label(&self, label: &str);
    /// Absolute rotation of the wheel in degrees.
    fn rotate_wheel(&self, degrees: f64);
    fn show_result(&self, result: &ResultDisplay);
    fn show_statistics(&self, statistics: &Statistics);
    fn show_history(&self, rows: &[HistoryRow]);
    fn show_odds(&self, odds: &[ColorOdds]);
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn reload(&self);
}

#[allow(async_fn_in_trait)]
pub trait Pause {
    async fn pause(&self, millis: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Single,
    Batch,
}

pub struct SpinController<A, V, P> {
    api: A,
    view: V,
    pause: P,
    is_spinning: Cell<bool>,
    rotation: Cell<f64>,
    history: RefCell<HistoryView>,
    rng: RefCell<SmallRng>,
}

impl<A: RouletteApi, V: SpinView, P: Pause> SpinController<A, V, P> {
    pub fn new(api: A, view: V, pause: P) -> Self {
        Self::with_rng(api, view, pause, SmallRng::from_entropy())
    }

    pub fn with_rng(api: A, view: V, pause: P, rng: SmallRng) -> Self {
        Self {
            api,
            view,
            pause,
            is_spinning: Cell::new(false),
            rotation: Cell::new(0.0),
            history: RefCell::new(HistoryView::new()),
            rng: RefCell::new(rng),
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning.get()
    }

    pub fn current_rotation(&self) -> f64 {
        self.rotation.get()
    }

    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history.borrow().rows()
    }

    /// Page start-up: history and statistics, then the odds table. Neither
    /// failure is shown to the player.
    pub async fn initialize(&self) {
        self.load_history().await;
        self.load_odds().await;
    }

    pub async fn load_history(&self) {
        match self.api.history().await {
            Ok(snapshot) => {
                self.view.show_statistics(&snapshot.statistics);
                let rows = {
                    let mut history = self.history.borrow_mut();
                    history.replace(&snapshot.history);
                    history.rows()
                };
                self.view.show_history(&rows);
            }
            Err(err) => log::error!("Error loading history: {}", err),
        }
    }

    async fn load_odds(&self) {
        match self.api.colors().await {
            Ok(odds) => self.view.show_odds(&odds),
            Err(err) => log::error!("Error loading color odds: {}", err),
        }
    }

    pub async fn spin_once(&self) {
        if !self.begin(Trigger::Single) {
            return;
        }

        match self.api.spin().await {
            Ok(reply) => {
                self.animate(reply.result.outcome).await;
                self.apply(&reply);
            }
            Err(err) => self.report("Error spinning", &err, SPIN_FAILED_ALERT),
        }

        self.finish();
    }

    /// Ten spins, strictly one after another. Only the last one animates.
    pub async fn spin_ten(&self) {
        if !self.begin(Trigger::Batch) {
            return;
        }

        for index in 0..BATCH_SPINS {
            let last = index + 1 == BATCH_SPINS;
            match self.api.spin().await {
                Ok(reply) => {
                    if last {
                        self.animate(reply.result.outcome).await;
                    }
                    self.apply(&reply);
                    if !last {
                        self.pause.pause(BATCH_PAUSE_MS).await;
                    }
                }
                Err(err) => {
                    self.report("Error spinning 10", &err, SPIN_FAILED_ALERT);
                    break;
                }
            }
        }

        self.finish();
    }

    pub async fn reset(&self) {
        if !self.view.confirm(RESET_CONFIRM_PROMPT) {
            return;
        }

        match self.api.reset().await {
            Ok(()) => self.view.reload(),
            Err(err) => self.report("Error resetting", &err, RESET_FAILED_ALERT),
        }
    }

    fn begin(&self, trigger: Trigger) -> bool {
        if self.is_spinning.replace(true) {
            log::debug!("Ignoring {:?} spin while another is running", trigger);
            return false;
        }
        self.view.set_controls_enabled(false);
        match trigger {
            Trigger::Single => self.view.set_spin_label(SPIN_LABEL_BUSY),
            Trigger::Batch => self.view.set_batch_label(BATCH_LABEL_BUSY),
        }
        true
    }

    fn finish(&self) {
        self.is_spinning.set(false);
        self.view.set_controls_enabled(true);
        self.view.set_spin_label(SPIN_LABEL_IDLE);
        self.view.set_batch_label(BATCH_LABEL_IDLE);
    }

    /// Resolves once the wheel has visually stopped.
    async fn animate(&self, outcome: Outcome) {
        let plan = plan_rotation(self.rotation.get(), outcome, &mut *self.rng.borrow_mut());
        self.view.rotate_wheel(plan.total);
        self.rotation.set(plan.resting);
        self.pause.pause(SPIN_ANIMATION_MS).await;
    }

    fn apply(&self, reply: &SpinReply) {
        self.view.show_result(&ResultDisplay::from(&reply.result));
        self.view.show_statistics(&reply.statistics);
        self.add_to_history(&reply.result);
    }

    fn add_to_history(&self, result: &SpinResult) {
        let rows = {
            let mut history = self.history.borrow_mut();
            history.push(result);
            history.rows()
        };
        self.view.show_history(&rows);
    }

    fn report(&self, context: &str, err: &ApiError, alert: &str) {
        log::error!("{}: {}", context, err);
        self.view.alert(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HISTORY_LIMIT;
    use crate::shared_roulette_game::Color;
    use futures::executor::block_on;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Request(&'static str),
        Controls(bool),
        SpinLabel(String),
        BatchLabel(String),
        Rotate(f64),
        Result(String, &'static str),
        Stats(u64),
        History(Vec<u64>),
        Odds(usize),
        Alert(String),
        Confirm,
        Reload,
        Pause(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct FakeApi {
        log: Log,
        spins: RefCell<VecDeque<Result<SpinReply, ApiError>>>,
        history: Result<HistorySnapshot, ApiError>,
        reset: Result<(), ApiError>,
    }

    impl RouletteApi for FakeApi {
        async fn spin(&self) -> Result<SpinReply, ApiError> {
            self.log.borrow_mut().push(Event::Request("spin"));
            self.spins
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no reply queued".to_string())))
        }

        async fn history(&self) -> Result<HistorySnapshot, ApiError> {
            self.log.borrow_mut().push(Event::Request("history"));
            self.history.clone()
        }

        async fn reset(&self) -> Result<(), ApiError> {
            self.log.borrow_mut().push(Event::Request("reset"));
            self.reset.clone()
        }

        async fn colors(&self) -> Result<Vec<ColorOdds>, ApiError> {
            self.log.borrow_mut().push(Event::Request("colors"));
            Ok(Outcome::ALL
                .iter()
                .map(|&outcome| ColorOdds {
                    outcome,
                    color: outcome.color(),
                    probability: 10.0,
                })
                .collect())
        }
    }

    struct FakeView {
        log: Log,
        confirm_answer: bool,
    }

    impl SpinView for FakeView {
        fn set_controls_enabled(&self, enabled: bool) {
            self.log.borrow_mut().push(Event::Controls(enabled));
        }
        fn set_spin_label(&self, label: &str) {
            self.log.borrow_mut().push(Event::SpinLabel(label.to_string()));
        }
        fn set_batch_label(&self, label: &str) {
            self.log.borrow_mut().push(Event::BatchLabel(label.to_string()));
        }
        fn rotate_wheel(&self, degrees: f64) {
            self.log.borrow_mut().push(Event::Rotate(degrees));
        }
        fn show_result(&self, result: &ResultDisplay) {
            self.log
                .borrow_mut()
                .push(Event::Result(result.text.clone(), result.css_class));
        }
        fn show_statistics(&self, statistics: &Statistics) {
            self.log.borrow_mut().push(Event::Stats(statistics.total_spins));
        }
        fn show_history(&self, rows: &[HistoryRow]) {
            let numbers = rows.iter().map(|row| row.spin_number).collect();
            self.log.borrow_mut().push(Event::History(numbers));
        }
        fn show_odds(&self, odds: &[ColorOdds]) {
            self.log.borrow_mut().push(Event::Odds(odds.len()));
        }
        fn alert(&self, message: &str) {
            self.log.borrow_mut().push(Event::Alert(message.to_string()));
        }
        fn confirm(&self, _message: &str) -> bool {
            self.log.borrow_mut().push(Event::Confirm);
            self.confirm_answer
        }
        fn reload(&self) {
            self.log.borrow_mut().push(Event::Reload);
        }
    }

    /// Pending exactly once, so a joined future gets polled mid-operation.
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    struct FakePause {
        log: Log,
    }

    impl Pause for FakePause {
        async fn pause(&self, millis: u32) {
            self.log.borrow_mut().push(Event::Pause(millis));
            YieldNow(false).await;
        }
    }

    fn spin_result(n: u64, outcome: Outcome) -> SpinResult {
        SpinResult {
            spin_number: n,
            outcome,
            color: outcome.color(),
            timestamp: "2025-03-01T14:05:09.123456".to_string(),
        }
    }

    fn reply(n: u64, outcome: Outcome) -> Result<SpinReply, ApiError> {
        Ok(SpinReply {
            result: spin_result(n, outcome),
            statistics: Statistics {
                total_spins: n,
                ..Statistics::default()
            },
        })
    }

    struct Harness {
        log: Log,
        controller: SpinController<FakeApi, FakeView, FakePause>,
    }

    impl Harness {
        fn new(spins: Vec<Result<SpinReply, ApiError>>) -> Self {
            Self::build(spins, Ok(empty_snapshot()), Ok(()), true)
        }

        fn build(
            spins: Vec<Result<SpinReply, ApiError>>,
            history: Result<HistorySnapshot, ApiError>,
            reset: Result<(), ApiError>,
            confirm_answer: bool,
        ) -> Self {
            let log: Log = Rc::default();
            let api = FakeApi {
                log: log.clone(),
                spins: RefCell::new(spins.into()),
                history,
                reset,
            };
            let view = FakeView {
                log: log.clone(),
                confirm_answer,
            };
            let pause = FakePause { log: log.clone() };
            let controller =
                SpinController::with_rng(api, view, pause, SmallRng::seed_from_u64(1234));
            Self { log, controller }
        }

        fn events(&self) -> Vec<Event> {
            self.log.borrow().clone()
        }

        fn requests(&self) -> usize {
            self.events()
                .iter()
                .filter(|e| matches!(e, Event::Request("spin")))
                .count()
        }
    }

    fn empty_snapshot() -> HistorySnapshot {
        HistorySnapshot {
            history: Vec::new(),
            statistics: Statistics::default(),
        }
    }

    #[test]
    fn test_spin_once_success_flow() {
        let harness = Harness::new(vec![reply(1, Outcome::Yellow)]);
        block_on(harness.controller.spin_once());

        let events = harness.events();
        assert_eq!(events[0], Event::Controls(false));
        assert_eq!(events[1], Event::SpinLabel(SPIN_LABEL_BUSY.to_string()));
        assert_eq!(events[2], Event::Request("spin"));
        assert!(matches!(events[3], Event::Rotate(_)));
        assert_eq!(events[4], Event::Pause(SPIN_ANIMATION_MS));
        assert_eq!(events[5], Event::Result("3 - AMARILLO".to_string(), "yellow"));
        assert_eq!(events[6], Event::Stats(1));
        assert_eq!(events[7], Event::History(vec![1]));
        assert_eq!(
            &events[8..],
            &[
                Event::Controls(true),
                Event::SpinLabel(SPIN_LABEL_IDLE.to_string()),
                Event::BatchLabel(BATCH_LABEL_IDLE.to_string()),
            ]
        );
        assert!(!harness.controller.is_spinning());
    }

    #[test]
    fn test_rotation_carries_over_between_spins() {
        let harness = Harness::new(vec![reply(1, Outcome::Blue), reply(2, Outcome::Purple)]);
        block_on(harness.controller.spin_once());
        let resting = harness.controller.current_rotation();
        assert!((0.0..360.0).contains(&resting));

        block_on(harness.controller.spin_once());
        let rotations: Vec<f64> = harness
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Rotate(deg) => Some(*deg),
                _ => None,
            })
            .collect();
        assert_eq!(rotations.len(), 2);
        let low = resting + 360.0 * 3.0 + (360.0 - 29.16 - 5.0);
        let high = resting + 360.0 * 5.0 + (360.0 - 29.16 + 5.0);
        assert!(rotations[1] >= low && rotations[1] <= high);
        assert_eq!(
            harness.controller.current_rotation(),
            rotations[1].rem_euclid(360.0)
        );
    }

    #[test]
    fn test_spin_once_failure_restores_idle() {
        let harness = Harness::new(vec![Err(ApiError::Status(500))]);
        block_on(harness.controller.spin_once());

        let events = harness.events();
        assert!(events.contains(&Event::Alert(SPIN_FAILED_ALERT.to_string())));
        assert!(!events.iter().any(|e| matches!(e, Event::Rotate(_) | Event::Result(..))));
        assert_eq!(events.last(), Some(&Event::BatchLabel(BATCH_LABEL_IDLE.to_string())));
        assert!(events.contains(&Event::Controls(true)));
        assert!(!harness.controller.is_spinning());
        assert!(harness.controller.history_rows().is_empty());
    }

    #[test]
    fn test_spin_while_spinning_is_ignored() {
        let harness = Harness::new(vec![reply(1, Outcome::Blue), reply(2, Outcome::Blue)]);
        let controller = &harness.controller;

        block_on(async {
            futures::join!(controller.spin_once(), async {
                assert!(controller.is_spinning());
                let before = harness.events().len();
                controller.spin_ten().await;
                controller.spin_once().await;
                assert_eq!(harness.events().len(), before);
            });
        });

        assert_eq!(harness.requests(), 1);
        assert!(!controller.is_spinning());
        assert_eq!(controller.history_rows().len(), 1);
    }

    #[test]
    fn test_clicks_during_batch_are_ignored() {
        let replies = (1..=12).map(|n| reply(n, Outcome::Blue)).collect();
        let harness = Harness::new(replies);
        let controller = &harness.controller;

        block_on(async {
            futures::join!(controller.spin_ten(), async {
                assert!(controller.is_spinning());
                controller.spin_once().await;
                controller.spin_ten().await;
            });
        });

        assert_eq!(harness.requests(), 10);
        assert!(!controller.is_spinning());
        assert_eq!(controller.history_rows()[0].spin_number, 10);
    }

    #[test]
    fn test_spin_ten_is_sequential_and_animates_last() {
        let replies = (1..=10).map(|n| reply(n, Outcome::Blue)).collect();
        let harness = Harness::new(replies);
        block_on(harness.controller.spin_ten());

        let events = harness.events();
        assert_eq!(events[0], Event::Controls(false));
        assert_eq!(events[1], Event::BatchLabel(BATCH_LABEL_BUSY.to_string()));

        let pacing: Vec<Event> = events
            .iter()
            .filter(|e| matches!(e, Event::Request(_) | Event::Pause(_) | Event::Rotate(_)))
            .map(|e| match e {
                Event::Rotate(_) => Event::Rotate(0.0),
                other => other.clone(),
            })
            .collect();
        let mut expected = Vec::new();
        for index in 0..10 {
            expected.push(Event::Request("spin"));
            if index == 9 {
                expected.push(Event::Rotate(0.0));
                expected.push(Event::Pause(SPIN_ANIMATION_MS));
            } else {
                expected.push(Event::Pause(BATCH_PAUSE_MS));
            }
        }
        assert_eq!(pacing, expected);

        // each reply is rendered before the next request goes out
        let first_result = events.iter().position(|e| matches!(e, Event::Result(..))).unwrap();
        let second_request = events
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, Event::Request("spin")))
            .nth(1)
            .map(|(i, _)| i)
            .unwrap();
        assert!(first_result < second_request);

        let rows: Vec<u64> = harness
            .controller
            .history_rows()
            .iter()
            .map(|row| row.spin_number)
            .collect();
        assert_eq!(rows, (1..=10).rev().collect::<Vec<_>>());
        assert!(!harness.controller.is_spinning());
    }

    #[test]
    fn test_spin_ten_aborts_on_first_failure() {
        let replies = vec![
            reply(1, Outcome::Blue),
            reply(2, Outcome::Purple),
            reply(3, Outcome::Blue),
            Err(ApiError::Decode("bad json".to_string())),
            reply(5, Outcome::Blue),
        ];
        let harness = Harness::new(replies);
        block_on(harness.controller.spin_ten());

        let events = harness.events();
        assert_eq!(harness.requests(), 4);
        assert!(events.contains(&Event::Alert(SPIN_FAILED_ALERT.to_string())));
        assert!(!events.iter().any(|e| matches!(e, Event::Rotate(_))));
        assert_eq!(harness.controller.history_rows().len(), 3);
        assert!(events.ends_with(&[
            Event::Controls(true),
            Event::SpinLabel(SPIN_LABEL_IDLE.to_string()),
            Event::BatchLabel(BATCH_LABEL_IDLE.to_string()),
        ]));
        assert!(!harness.controller.is_spinning());
    }

    #[test]
    fn test_history_view_never_exceeds_limit() {
        let replies = (1..=30).map(|n| reply(n, Outcome::Blue)).collect();
        let harness = Harness::new(replies);
        block_on(async {
            for _ in 0..3 {
                harness.controller.spin_ten().await;
            }
        });

        for event in harness.events() {
            if let Event::History(numbers) = event {
                assert!(numbers.len() <= HISTORY_LIMIT);
            }
        }
        let rows = harness.controller.history_rows();
        assert_eq!(rows.len(), HISTORY_LIMIT);
        assert_eq!(rows[0].spin_number, 30);
        assert_eq!(rows[HISTORY_LIMIT - 1].spin_number, 11);
    }

    #[test]
    fn test_reset_confirmed_reloads() {
        let harness = Harness::build(Vec::new(), Ok(empty_snapshot()), Ok(()), true);
        block_on(harness.controller.reset());
        assert_eq!(
            harness.events(),
            vec![Event::Confirm, Event::Request("reset"), Event::Reload]
        );
    }

    #[test]
    fn test_reset_declined_makes_no_request() {
        let harness = Harness::build(Vec::new(), Ok(empty_snapshot()), Ok(()), false);
        block_on(harness.controller.reset());
        assert_eq!(harness.events(), vec![Event::Confirm]);
    }

    #[test]
    fn test_reset_failure_alerts_without_reload() {
        let harness = Harness::build(
            Vec::new(),
            Ok(empty_snapshot()),
            Err(ApiError::Network("offline".to_string())),
            true,
        );
        block_on(harness.controller.reset());
        assert_eq!(
            harness.events(),
            vec![
                Event::Confirm,
                Event::Request("reset"),
                Event::Alert(RESET_FAILED_ALERT.to_string()),
            ]
        );
    }

    #[test]
    fn test_initialize_renders_latest_twenty_newest_first() {
        let history = (1..=25)
            .map(|n| spin_result(n, Outcome::ALL[(n % 3) as usize]))
            .collect();
        let snapshot = HistorySnapshot {
            history,
            statistics: Statistics {
                total_spins: 25,
                ..Statistics::default()
            },
        };
        let harness = Harness::build(Vec::new(), Ok(snapshot), Ok(()), true);
        block_on(harness.controller.initialize());

        assert_eq!(
            harness.events(),
            vec![
                Event::Request("history"),
                Event::Stats(25),
                Event::History((6..=25).rev().collect()),
                Event::Request("colors"),
                Event::Odds(3),
            ]
        );
        assert_eq!(harness.controller.history_rows()[0].label, "2 - morado");
    }

    #[test]
    fn test_initialize_failure_is_silent() {
        let harness = Harness::build(
            Vec::new(),
            Err(ApiError::Rejected(None)),
            Ok(()),
            true,
        );
        block_on(harness.controller.initialize());

        let events = harness.events();
        assert!(!events.iter().any(|e| matches!(e, Event::Alert(_))));
        assert!(!events.iter().any(|e| matches!(e, Event::History(_) | Event::Stats(_))));
        assert!(!harness.controller.is_spinning());
    }

    #[test]
    fn test_result_classes_follow_color() {
        let harness = Harness::new(vec![reply(1, Outcome::Purple)]);
        block_on(harness.controller.spin_once());
        assert!(harness
            .events()
            .contains(&Event::Result("2 - MORADO".to_string(), Color::Purple.css_class())));
    }
}

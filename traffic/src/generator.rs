use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use rand::Rng;
use reqwest::{Client, StatusCode};
use shared::constants::{HISTORY_ENDPOINT, SPIN_ENDPOINT, STATISTICS_ENDPOINT};
use shared::shared_roulette_game::{SpinResponse, StatisticsResponse};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::plan::{Level, Pattern};
use crate::report::{Counters, Report};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_IDLE_PER_HOST: usize = 50;
const MIN_USER_DELAY: Duration = Duration::from_millis(500);
const BURST_DELAY: (Duration, Duration) = (Duration::from_millis(100), Duration::from_millis(500));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Spin,
    History,
    Stats,
}

const ACTIONS: [Action; 3] = [Action::Spin, Action::History, Action::Stats];

fn random_between(min: Duration, max: Duration) -> Duration {
    if max <= min {
        return min;
    }
    Duration::from_secs_f64(rand::thread_rng().gen_range(min.as_secs_f64()..max.as_secs_f64()))
}

#[derive(Clone)]
pub struct TrafficGenerator {
    client: Client,
    base_url: Arc<str>,
    counters: Arc<Counters>,
}

impl TrafficGenerator {
    pub fn new(base_url: &str) -> reqwest::Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            counters: Arc::new(Counters::default()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn run(&self, level: Level, duration: Duration) -> Report {
        info!("Starting {:?} traffic against {} for {}s", level, self.base_url, duration.as_secs());
        let started = Instant::now();

        let patterns = level.patterns(duration);
        join_all(patterns.into_iter().map(|pattern| self.run_pattern(pattern))).await;

        self.counters.report(started.elapsed())
    }

    async fn run_pattern(&self, pattern: Pattern) {
        debug!("Running {:?}", pattern);
        match pattern {
            Pattern::Continuous { duration, rate } => self.continuous(duration, rate).await,
            Pattern::Users { users, actions, max_delay } => {
                self.simulate_users(users, actions, max_delay).await
            }
            Pattern::Burst { count } => self.burst(count).await,
        }
    }

    pub async fn continuous(&self, duration: Duration, rate: f64) {
        let interval = if rate > 0.0 {
            Duration::from_secs_f64(1.0 / rate)
        } else {
            Duration::from_secs(1)
        };
        let end = Instant::now() + duration;

        while Instant::now() < end {
            let tick = Instant::now();
            self.single_spin().await;
            if let Some(rest) = interval.checked_sub(tick.elapsed()) {
                sleep(rest).await;
            }
        }
    }

    pub async fn simulate_users(&self, users: usize, actions: usize, max_delay: Duration) {
        join_all((0..users).map(|user| self.user_session(user, actions, max_delay))).await;
    }

    async fn user_session(&self, user: usize, actions: usize, max_delay: Duration) {
        debug!(user, "User started");
        for _ in 0..actions {
            let action = ACTIONS[rand::thread_rng().gen_range(0..ACTIONS.len())];
            match action {
                Action::Spin => self.single_spin().await,
                Action::History => self.history().await,
                Action::Stats => self.statistics().await,
            }
            sleep(random_between(MIN_USER_DELAY, max_delay)).await;
        }
        debug!(user, "User finished");
    }

    pub async fn burst(&self, count: usize) {
        info!("Bursting {} spins", count);
        join_all((0..count).map(|_| async {
            sleep(random_between(BURST_DELAY.0, BURST_DELAY.1)).await;
            self.single_spin().await;
        }))
        .await;
    }

    /// Sends a request and records it. Only a 200 counts as a success.
    async fn send(&self, request: reqwest::RequestBuilder) -> Option<reqwest::Response> {
        match request.send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                self.counters.record(true);
                Some(response)
            }
            Ok(response) => {
                self.counters.record(false);
                warn!("Unexpected status {}", response.status());
                None
            }
            Err(e) => {
                self.counters.record(false);
                warn!("Request error: {}", e);
                None
            }
        }
    }

    async fn single_spin(&self) {
        let Some(response) = self.send(self.client.post(self.url(SPIN_ENDPOINT))).await else {
            return;
        };
        match response.json::<SpinResponse>().await {
            Ok(body) => match body.into_reply() {
                Ok(reply) => self.counters.record_color(reply.result.color),
                Err(e) => debug!("Spin reply not usable: {}", e),
            },
            Err(e) => debug!("Spin body not decodable: {}", e),
        }
    }

    async fn history(&self) {
        self.send(self.client.get(self.url(HISTORY_ENDPOINT))).await;
    }

    async fn statistics(&self) {
        let Some(response) = self.send(self.client.get(self.url(STATISTICS_ENDPOINT))).await else {
            return;
        };
        match response.json::<StatisticsResponse>().await.map(StatisticsResponse::into_statistics) {
            Ok(Ok(stats)) => debug!(total_spins = stats.total_spins, "Statistics read"),
            Ok(Err(e)) => debug!("Statistics not usable: {}", e),
            Err(e) => debug!("Statistics body not decodable: {}", e),
        }
    }
}

use std::time::Duration;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Low,
    Medium,
    High,
    Extreme,
}

/// One load shape. A level runs all of its patterns at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Spins at a fixed rate until the time is up.
    Continuous { duration: Duration, rate: f64 },
    /// Concurrent players mixing spins, history and statistics reads.
    Users { users: usize, actions: usize, max_delay: Duration },
    /// Concurrent spins, each after a short random delay.
    Burst { count: usize },
}

impl Level {
    pub fn patterns(self, duration: Duration) -> Vec<Pattern> {
        let secs = duration.as_secs();
        match self {
            Level::Low => vec![Pattern::Continuous { duration, rate: 1.5 }],
            Level::Medium => vec![Pattern::Users {
                users: 8,
                actions: 20,
                max_delay: Duration::from_secs(2),
            }],
            Level::High => vec![
                Pattern::Users {
                    users: 25,
                    actions: 15,
                    max_delay: Duration::from_secs(1),
                },
                Pattern::Continuous {
                    duration: Duration::from_secs(secs / 2),
                    rate: 10.0,
                },
                Pattern::Burst { count: 50 },
            ],
            Level::Extreme => vec![
                Pattern::Users {
                    users: 50,
                    actions: 20,
                    max_delay: Duration::from_millis(500),
                },
                Pattern::Continuous {
                    duration: Duration::from_secs(secs / 3),
                    rate: 20.0,
                },
                Pattern::Burst { count: 100 },
                Pattern::Burst { count: 100 },
            ],
        }
    }
}

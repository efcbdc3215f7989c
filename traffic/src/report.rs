use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use shared::shared_roulette_game::{Color, ColorCounts};

/// Request tallies shared by every concurrent pattern.
#[derive(Debug, Default)]
pub struct Counters {
    total: AtomicU64,
    successful: AtomicU64,
    failed: AtomicU64,
    blue: AtomicU64,
    purple: AtomicU64,
    yellow: AtomicU64,
}

impl Counters {
    pub fn record(&self, ok: bool) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if ok {
            self.successful.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_color(&self, color: Color) {
        let counter = match color {
            Color::Blue => &self.blue,
            Color::Purple => &self.purple,
            Color::Yellow => &self.yellow,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self, elapsed: Duration) -> Report {
        Report {
            elapsed,
            total: self.total.load(Ordering::Relaxed),
            successful: self.successful.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            colors: ColorCounts {
                blue: self.blue.load(Ordering::Relaxed),
                purple: self.purple.load(Ordering::Relaxed),
                yellow: self.yellow.load(Ordering::Relaxed),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub elapsed: Duration,
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub colors: ColorCounts,
}

impl Report {
    pub fn requests_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total as f64 / secs
        } else {
            0.0
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.total > 0 {
            self.successful as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{}", rule)?;
        writeln!(f, "📊 TRAFFIC TEST RESULTS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "⏱️  Duration: {:.2} s", self.elapsed.as_secs_f64())?;
        writeln!(f, "📤 Total requests: {}", self.total)?;
        writeln!(f, "✅ Successful: {}", self.successful)?;
        writeln!(f, "❌ Failed: {}", self.failed)?;
        writeln!(f, "🚀 Requests/s: {:.2}", self.requests_per_second())?;
        writeln!(f, "📈 Success rate: {:.2}%", self.success_rate())?;
        for color in Color::ALL {
            writeln!(f, "🎰 {}: {}", color.wire_name(), self.colors.get(color))?;
        }
        write!(f, "{}", rule)
    }
}

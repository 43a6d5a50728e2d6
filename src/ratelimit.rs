use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Bucket {
    count: u32,
    window_start: Instant,
}

/// Fixed-window request counter keyed by client identifier.
///
/// Counting is strict: a denied request still increments its bucket, so a
/// client that keeps hammering during a full window only recovers once the
/// window itself expires. Buckets are created lazily and only reclaimed by
/// [`RateLimiter::sweep`]; within a live window eviction never happens, so
/// sweeping cannot change an allow/deny outcome.
///
/// Each endpoint gets its own instance with its own `(limit, window)` pair.
pub struct RateLimiter {
    buckets: DashMap<String, Bucket>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            buckets: DashMap::new(),
            limit,
            window,
        }
    }

    /// Returns `true` if the request is allowed. Mutates the bucket either way.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        // The entry guard holds the shard lock for the whole read-modify-write,
        // which keeps the counter update atomic across parallel handlers.
        let mut bucket = self.buckets.entry(key.to_string()).or_insert(Bucket {
            count: 0,
            window_start: now,
        });

        if now.duration_since(bucket.window_start) > self.window {
            bucket.count = 0;
            bucket.window_start = now;
        }

        bucket.count += 1;
        bucket.count <= self.limit
    }

    /// Drops buckets whose window has lapsed, bounding memory under many
    /// distinct client keys.
    pub fn sweep(&self) {
        self.sweep_at(Instant::now());
    }

    fn sweep_at(&self, now: Instant) {
        self.buckets
            .retain(|_, bucket| now.duration_since(bucket.window_start) <= self.window);
    }

    pub fn tracked_keys(&self) -> usize {
        self.buckets.len()
    }
}

/// Periodically sweeps expired buckets out of the given limiters.
pub fn spawn_sweeper(limiters: Vec<Arc<RateLimiter>>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await; // first tick fires immediately
        loop {
            ticker.tick().await;
            for limiter in &limiters {
                limiter.sweep();
                debug!("Rate limit sweep done, {} keys tracked", limiter.tracked_keys());
            }
        }
    })
}

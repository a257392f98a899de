use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::errors::{OpennoteError, Result};
use crate::models::{JobStatus, JobStatusResponse};

/// Polling config for `Video::wait` / `PracticeProblems::wait`.
pub struct PollOptions {
    /// Fixed sleep between status calls. Default: 10s.
    pub interval: Duration,
    /// Give up with [`OpennoteError::PollTimeout`] after this long. Default: 30min.
    ///
    /// The last sleep is cut short at the deadline, so the loop never waits
    /// past it (the status call in flight at that point still completes).
    pub timeout: Duration,
    /// Called after each status call with the 1-based poll count and status.
    #[allow(clippy::type_complexity)]
    pub on_progress: Option<Box<dyn Fn(u32, JobStatus) + Send + Sync>>,
}

impl PollOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn on_progress(mut self, f: impl Fn(u32, JobStatus) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            timeout: Duration::from_secs(30 * 60),
            on_progress: None,
        }
    }
}

/// Call `fetch` until it reports a terminal status.
///
/// One status request per iteration; errors from `fetch` end the loop.
pub(crate) async fn poll_until_terminal<T, F, Fut>(opts: &PollOptions, mut fetch: F) -> Result<T>
where
    T: JobStatusResponse,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let deadline = Instant::now() + opts.timeout;
    let mut polls: u32 = 0;

    loop {
        let resp = fetch().await?;
        polls += 1;
        let status = resp.job_status();

        tracing::debug!(polls, ?status, "polled job status");

        if let Some(ref cb) = opts.on_progress {
            cb(polls, status);
        }

        if status.is_terminal() {
            return Ok(resp);
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(OpennoteError::PollTimeout(opts.timeout));
        }

        tokio::time::sleep(opts.interval.min(deadline - now)).await;
    }
}

use std::time::Duration;

use retry::OperationResult;
use retry::delay::Fixed;
use tracing::debug;

use crate::constants::DEFAULT_POLL_INTERVAL_IN_MILLIS;

/// Result of a wait that did not fail.
///
/// Running out of attempts is not an error: callers branch on the variant instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome<S> {
    Reached { state: S, attempts: u32 },
    TimedOut { last_state: Option<S>, attempts: u32 },
}

impl<S> WaitOutcome<S> {
    pub fn is_reached(&self) -> bool {
        matches!(self, WaitOutcome::Reached { .. })
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, WaitOutcome::TimedOut { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            WaitOutcome::Reached { attempts, .. } => *attempts,
            WaitOutcome::TimedOut { attempts, .. } => *attempts,
        }
    }

    /// Last state observed, whether the target was reached or not.
    pub fn state(&self) -> Option<&S> {
        match self {
            WaitOutcome::Reached { state, .. } => Some(state),
            WaitOutcome::TimedOut { last_state, .. } => last_state.as_ref(),
        }
    }
}

enum PollFailure<S, E> {
    NotReady(S),
    Fatal(E),
}

/// Polls a state at a fixed interval until a predicate holds or the attempt budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poller {
    interval: Duration,
    max_attempts: u32,
}

impl Poller {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Poller { interval, max_attempts }
    }

    /// One query per second, at most `timeout_in_seconds` queries.
    pub fn every_second(timeout_in_seconds: u32) -> Self {
        Poller::new(Duration::from_millis(DEFAULT_POLL_INTERVAL_IN_MILLIS), timeout_in_seconds)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Calls `fetch` until `is_done` accepts the fetched state.
    ///
    /// The first query is immediate and the interval is slept between two queries only, so the call blocks
    /// for at most `(max_attempts - 1) * interval` plus the queries themselves. Any error returned by
    /// `fetch` stops the polling and is returned as is.
    pub fn poll_until<S, E, F, P>(&self, mut fetch: F, is_done: P) -> Result<WaitOutcome<S>, E>
    where
        F: FnMut() -> Result<S, E>,
        P: Fn(&S) -> bool,
    {
        if self.max_attempts == 0 {
            return Ok(WaitOutcome::TimedOut {
                last_state: None,
                attempts: 0,
            });
        }

        let mut attempts: u32 = 0;
        let delays = Fixed::from(self.interval).take(self.max_attempts as usize - 1);

        let result = retry::retry(delays, || {
            attempts += 1;
            match fetch() {
                Err(e) => OperationResult::Err(PollFailure::Fatal(e)),
                Ok(state) if is_done(&state) => OperationResult::Ok(state),
                Ok(state) => {
                    debug!("attempt {}/{}: target state not reached yet", attempts, self.max_attempts);
                    OperationResult::Retry(PollFailure::NotReady(state))
                }
            }
        });

        match result {
            Ok(state) => Ok(WaitOutcome::Reached { state, attempts }),
            Err(retry::Error {
                error: PollFailure::NotReady(state),
                ..
            }) => Ok(WaitOutcome::TimedOut {
                last_state: Some(state),
                attempts,
            }),
            Err(retry::Error {
                error: PollFailure::Fatal(e),
                ..
            }) => Err(e),
        }
    }
}

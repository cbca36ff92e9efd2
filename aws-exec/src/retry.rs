/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Standard-mode retries for the execution runtime.
//!
//! Retry state is split in two: a [`TokenBucket`] shared by every request a
//! client dispatches, and a per-request attempt counter carried by
//! [`StandardRetryStrategy`]. An attempt is retried only while both agree
//! there is room: the bucket must have quota for the error class, and the
//! attempt count must stay below the configured ceiling. A server-supplied
//! `x-amz-retry-after` hint replaces the backoff delay but is bounded by
//! the same attempt ceiling.

use sdk_http::operation::Operation;
use sdk_http::result::{SdkError, SdkSuccess};
use sdk_http::retry::ClassifyResponse;
use sdk_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const INITIAL_QUOTA: usize = 500;
const RETRY_COST: usize = 5;
const TIMEOUT_RETRY_COST: usize = 10;
const NO_RETRY_INCREMENT: usize = 1;

#[derive(Clone)]
pub struct RetryConfig {
    initial_quota: usize,
    retry_cost: usize,
    timeout_retry_cost: usize,
    no_retry_increment: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl RetryConfig {
    /// Use a fixed backoff base instead of a random one, for deterministic
    /// tests.
    pub fn with_static_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    /// Total attempts per request, including the initial one.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_initial_quota(mut self, quota: usize) -> Self {
        self.initial_quota = quota;
        self
    }

    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            initial_quota: INITIAL_QUOTA,
            retry_cost: RETRY_COST,
            timeout_retry_cost: TIMEOUT_RETRY_COST,
            no_retry_increment: NO_RETRY_INCREMENT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_backoff: Duration::from_secs(20),
            base: fastrand::f64,
        }
    }
}

/// Cross-request retry quota.
///
/// Every retry withdraws tokens; requests that complete without another
/// attempt pay back their withdrawal (or trickle the bucket back up by the
/// no-retry increment). An empty bucket suppresses retries entirely, which
/// sheds load from a service that is already failing.
pub struct TokenBucket {
    quota: usize,
    last_withdrawal: Option<usize>,
    config: RetryConfig,
}

impl TokenBucket {
    pub fn new(config: RetryConfig) -> Self {
        TokenBucket {
            quota: config.initial_quota,
            last_withdrawal: None,
            config,
        }
    }

    /// Withdraw the cost of retrying `err`, or `None` if the quota is spent.
    fn withdraw(&mut self, err: ErrorKind) -> Option<()> {
        let cost = match err {
            ErrorKind::TransientError => self.config.timeout_retry_cost,
            _ => self.config.retry_cost,
        };
        if cost > self.quota {
            return None;
        }
        self.quota -= cost;
        self.last_withdrawal = Some(cost);
        Some(())
    }

    /// A request finished without needing another attempt: pay back the last
    /// withdrawal, never exceeding the bucket's capacity.
    fn refill(&mut self) {
        let payback = self
            .last_withdrawal
            .take()
            .unwrap_or(self.config.no_retry_increment);
        self.quota = (self.quota + payback).min(self.config.initial_quota);
    }

    /// Exponential backoff for the retry following `prior_attempts`.
    fn backoff(&self, prior_attempts: u32) -> Duration {
        let delay = (self.config.base)() * 2_f64.powi(prior_attempts as i32 - 1);
        Duration::from_secs_f64(delay).min(self.config.max_backoff)
    }
}

/// Per-request retry state over the shared [`TokenBucket`].
///
/// `attempts` counts attempts already made, so a fresh strategy starts at 1.
#[derive(Clone)]
pub struct StandardRetryStrategy {
    attempts: u32,
    max_attempts: u32,
    bucket: Arc<Mutex<TokenBucket>>,
}

impl StandardRetryStrategy {
    pub fn new(bucket: Arc<Mutex<TokenBucket>>) -> Self {
        let max_attempts = bucket.lock().unwrap().config.max_attempts;
        StandardRetryStrategy {
            attempts: 1,
            max_attempts,
            bucket,
        }
    }

    fn next_attempt(&self) -> Option<Self> {
        if self.attempts >= self.max_attempts {
            return None;
        }
        let mut next = self.clone();
        next.attempts += 1;
        Some(next)
    }

    /// Decide whether, and after what delay, the request should be retried.
    fn plan(&self, kind: RetryKind) -> Option<(Self, Duration)> {
        match kind {
            RetryKind::NotRetryable => None,
            // The server named its own delay. Honor it without drawing on
            // the quota, but it still counts against the attempt ceiling.
            RetryKind::Explicit(delay) => Some((self.next_attempt()?, delay)),
            RetryKind::Error(err) => {
                let next = self.next_attempt()?;
                let mut bucket = self.bucket.lock().unwrap();
                bucket.withdraw(err)?;
                Some((next, bucket.backoff(self.attempts)))
            }
        }
    }
}

impl<Handler, R, T, E> tower::retry::Policy<Operation<Handler, R>, SdkSuccess<T>, SdkError<E>>
    for StandardRetryStrategy
where
    E: ProvideErrorKind,
    Handler: Clone,
    R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
{
    type Future = Pin<Box<dyn Future<Output = Self>>>;

    fn retry(
        &self,
        req: &Operation<Handler, R>,
        result: Result<&SdkSuccess<T>, &SdkError<E>>,
    ) -> Option<Self::Future> {
        if result.is_ok() {
            self.bucket.lock().unwrap().refill();
            return None;
        }
        let kind = req.retry_policy().classify(result);
        let (next, delay) = self.plan(kind)?;
        let fut = async move {
            tokio::time::sleep(delay).await;
            next
        };
        Some(Box::pin(fut))
    }

    fn clone_request(&self, req: &Operation<Handler, R>) -> Option<Operation<Handler, R>> {
        req.try_clone()
    }
}

#[cfg(test)]
mod test {
    use super::{RetryConfig, StandardRetryStrategy, TokenBucket};
    use sdk_types::retry::{ErrorKind, RetryKind};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn bucket(config: RetryConfig) -> Arc<Mutex<TokenBucket>> {
        Arc::new(Mutex::new(TokenBucket::new(
            config.with_static_base(|| 1.0),
        )))
    }

    fn quota(bucket: &Arc<Mutex<TokenBucket>>) -> usize {
        bucket.lock().unwrap().quota
    }

    #[test]
    fn backoff_doubles_and_quota_drains() {
        let bucket = bucket(RetryConfig::default().with_max_attempts(5));
        let strategy = StandardRetryStrategy::new(bucket.clone());

        let (strategy, delay) = strategy
            .plan(RetryKind::Error(ErrorKind::ServerError))
            .expect("first retry");
        assert_eq!(delay, Duration::from_secs(1));
        assert_eq!(quota(&bucket), 495);

        let (_, delay) = strategy
            .plan(RetryKind::Error(ErrorKind::ServerError))
            .expect("second retry");
        assert_eq!(delay, Duration::from_secs(2));
        assert_eq!(quota(&bucket), 490);
    }

    #[test]
    fn attempt_ceiling_stops_retries() {
        let bucket = bucket(RetryConfig::default());
        let strategy = StandardRetryStrategy::new(bucket);

        let (strategy, _) = strategy
            .plan(RetryKind::Error(ErrorKind::ServerError))
            .expect("first retry");
        let (strategy, _) = strategy
            .plan(RetryKind::Error(ErrorKind::ServerError))
            .expect("second retry");
        assert!(strategy
            .plan(RetryKind::Error(ErrorKind::ServerError))
            .is_none());
    }

    #[test]
    fn retry_after_hint_respects_the_attempt_ceiling() {
        let bucket = bucket(RetryConfig::default());
        let strategy = StandardRetryStrategy::new(bucket.clone());
        let hint = Duration::from_millis(100);

        let (strategy, delay) = strategy
            .plan(RetryKind::Explicit(hint))
            .expect("first retry");
        assert_eq!(delay, hint);
        let (strategy, _) = strategy
            .plan(RetryKind::Explicit(hint))
            .expect("second retry");
        assert!(strategy.plan(RetryKind::Explicit(hint)).is_none());
        // hints never draw on the shared quota
        assert_eq!(quota(&bucket), 500);
    }

    #[test]
    fn spent_quota_suppresses_retries() {
        let bucket = bucket(
            RetryConfig::default()
                .with_initial_quota(5)
                .with_max_attempts(5),
        );
        let strategy = StandardRetryStrategy::new(bucket.clone());

        let (strategy, _) = strategy
            .plan(RetryKind::Error(ErrorKind::ThrottlingError))
            .expect("bucket can fund one retry");
        assert_eq!(quota(&bucket), 0);
        assert!(strategy
            .plan(RetryKind::Error(ErrorKind::ThrottlingError))
            .is_none());
    }

    #[test]
    fn success_pays_back_the_withdrawal() {
        let bucket = bucket(RetryConfig::default().with_max_attempts(5));
        let strategy = StandardRetryStrategy::new(bucket.clone());

        let (_, _) = strategy
            .plan(RetryKind::Error(ErrorKind::TransientError))
            .expect("retry");
        assert_eq!(quota(&bucket), 490);

        bucket.lock().unwrap().refill();
        assert_eq!(quota(&bucket), 500);
        // a full bucket stays at capacity
        bucket.lock().unwrap().refill();
        assert_eq!(quota(&bucket), 500);
    }

    #[test]
    fn backoff_is_capped() {
        let bucket = bucket(
            RetryConfig::default()
                .with_max_attempts(6)
                .with_max_backoff(Duration::from_secs(3)),
        );
        let mut strategy = StandardRetryStrategy::new(bucket);
        let mut delays = Vec::new();
        while let Some((next, delay)) = strategy.plan(RetryKind::Error(ErrorKind::ServerError)) {
            delays.push(delay.as_secs());
            strategy = next;
        }
        assert_eq!(delays, vec![1, 2, 3, 3, 3]);
    }
}

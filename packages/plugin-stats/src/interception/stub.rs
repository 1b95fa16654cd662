// packages/plugin-stats/src/interception/stub.rs
//! Test double for the host plugin manager

use crate::interception::manager::PluginManager;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) const SENTINEL: &str = "sentinel-result";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SentinelError(pub &'static str);

/// Counts calls and returns fixed results
#[derive(Debug, Default)]
pub(crate) struct StubManager {
    pub enable_calls: AtomicUsize,
    pub disable_calls: AtomicUsize,
    fail_enable: Option<&'static str>,
    fail_disable: Option<&'static str>,
}

impl StubManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_enable(error: &'static str) -> Self {
        Self {
            fail_enable: Some(error),
            ..Self::default()
        }
    }

    pub fn failing_disable(error: &'static str) -> Self {
        Self {
            fail_disable: Some(error),
            ..Self::default()
        }
    }

    pub fn enable_count(&self) -> usize {
        self.enable_calls.load(Ordering::SeqCst)
    }

    pub fn disable_count(&self) -> usize {
        self.disable_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PluginManager for StubManager {
    type Output = &'static str;
    type Error = SentinelError;

    async fn enable_plugin(&self, _id: &str) -> Result<Self::Output, Self::Error> {
        self.enable_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        match self.fail_enable {
            Some(error) => Err(SentinelError(error)),
            None => Ok(SENTINEL),
        }
    }

    async fn disable_plugin(&self, _id: &str) -> Result<Self::Output, Self::Error> {
        self.disable_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        match self.fail_disable {
            Some(error) => Err(SentinelError(error)),
            None => Ok(SENTINEL),
        }
    }
}

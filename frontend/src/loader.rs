use std::cell::Cell;
use std::rc::Rc;

use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed animation descriptor: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("animation descriptor is not a JSON object")]
    NotAnObject,
    #[error("no response within {0} ms")]
    TimedOut(u32),
}

/// Where a loader instance is in its single fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetStatus {
    Pending,
    Loaded(Rc<Value>),
    Failed,
}

/// The per-instance cache of one remote animation descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetCache {
    source: String,
    status: AssetStatus,
}

impl AssetCache {
    pub fn pending(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            status: AssetStatus::Pending,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn status(&self) -> &AssetStatus {
        &self.status
    }

    pub fn payload(&self) -> Option<Rc<Value>> {
        match &self.status {
            AssetStatus::Loaded(payload) => Some(payload.clone()),
            _ => None,
        }
    }

    /// Applies a fetch outcome. Only a pending cache moves; a settled one is
    /// returned unchanged.
    pub fn resolve(self, outcome: Result<Value, AssetError>) -> Self {
        if self.status != AssetStatus::Pending {
            return self;
        }
        let status = match outcome {
            Ok(payload) => AssetStatus::Loaded(Rc::new(payload)),
            Err(_) => AssetStatus::Failed,
        };
        Self { status, ..self }
    }
}

/// Liveness of one loader instance. Released on unmount; a released lease
/// never lets a result through.
#[derive(Clone, Debug)]
pub struct Lease(Rc<Cell<bool>>);

impl Lease {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for Lease {
    fn default() -> Self {
        Self::new()
    }
}

pub trait AssetFetcher {
    fn fetch(&self, url: &str) -> LocalBoxFuture<'static, Result<Value, AssetError>>;
}

/// Fetches descriptors over HTTP, giving up after `timeout_ms`.
#[derive(Clone, Copy, Debug)]
pub struct HttpFetcher {
    pub timeout_ms: u32,
}

impl HttpFetcher {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl AssetFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> LocalBoxFuture<'static, Result<Value, AssetError>> {
        let url = url.to_string();
        let timeout_ms = self.timeout_ms;
        async move {
            let request = fetch_descriptor(url).boxed_local();
            let timer = TimeoutFuture::new(timeout_ms).boxed_local();
            match future::select(request, timer).await {
                Either::Left((outcome, _)) => outcome,
                Either::Right(((), _)) => Err(AssetError::TimedOut(timeout_ms)),
            }
        }
        .boxed_local()
    }
}

async fn fetch_descriptor(url: String) -> Result<Value, AssetError> {
    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(AssetError::Status(response.status()));
    }
    let body = response.text().await?;
    parse_descriptor(&body)
}

pub fn parse_descriptor(body: &str) -> Result<Value, AssetError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(AssetError::NotAnObject);
    }
    Ok(value)
}

/// Fetches `source` and hands the settled cache to `commit`, unless `lease`
/// was released first. Returns whether `commit` ran.
pub async fn load<F, C>(fetcher: &F, source: &str, lease: &Lease, commit: C) -> bool
where
    F: AssetFetcher + ?Sized,
    C: FnOnce(AssetCache),
{
    let outcome = fetcher.fetch(source).await;
    if !lease.is_live() {
        return false;
    }
    commit(AssetCache::pending(source).resolve(outcome));
    true
}

//! Event, series and live-result endpoints.
//!
//! Every call asks the client for a session, issues one GET and returns the
//! JSON body untouched.

mod model;

pub use model::EventData;

use serde_json::Value;
use url::Url;

use crate::core::net::{api3_url, cache3_url, get_json};
use crate::{ZpClient, ZpError};

/// Promoter used when none is given.
pub const DEFAULT_PROMOTER: &str = "FRR";

/// Fetches the series/event list published by a promoter.
///
/// # Errors
///
/// Returns `ZpError` if no session is available, the request fails, or the
/// body is not JSON.
pub async fn series_event_list(client: &mut ZpClient, promoter: &str) -> Result<Value, ZpError> {
    let url = api3_url(client.base_url(), "series_event_list", &[("id", promoter)])?;
    get_json(client, url).await
}

/// Fetches the cached results view of an event.
///
/// # Errors
///
/// Returns `ZpError` if no session is available, the request fails, or the
/// body is not JSON.
pub async fn event_view(client: &mut ZpClient, zid: u64) -> Result<Value, ZpError> {
    EventBuilder::new(client, zid).view().await
}

/// Fetches live results of an event in progress.
///
/// # Errors
///
/// Returns `ZpError` if no session is available, the request fails, or the
/// body is not JSON.
pub async fn live_results(client: &mut ZpClient, zid: u64) -> Result<Value, ZpError> {
    EventBuilder::new(client, zid).live_results().await
}

/// Prime segment timing (`prime_type=msec`) or points (`prime_type=elapsed`).
pub const DEFAULT_PRIME_TYPE: &str = "msec";

/// A builder over the endpoints of a single event.
///
/// ```no_run
/// # use zwiftpower_rs::{EventBuilder, ZpClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = ZpClient::new()?;
/// let data = EventBuilder::new(&mut client, 4_123_456)
///     .category("A")
///     .fetch_all()
///     .await?;
/// println!("{}", data.view);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EventBuilder<'a> {
    client: &'a mut ZpClient,
    zid: u64,
    category: Option<String>,
    prime_type: String,
}

impl<'a> EventBuilder<'a> {
    pub fn new(client: &'a mut ZpClient, zid: u64) -> Self {
        Self {
            client,
            zid,
            category: None,
            prime_type: DEFAULT_PRIME_TYPE.to_string(),
        }
    }

    /// Restricts primes to one category (`A`..`E`). `all` clears the filter.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.eq_ignore_ascii_case("all")).then_some(category);
        self
    }

    #[must_use]
    pub fn prime_type(mut self, prime_type: impl Into<String>) -> Self {
        self.prime_type = prime_type.into();
        self
    }

    fn cached(&self, kind: &str) -> Result<Url, ZpError> {
        cache3_url(self.client.base_url(), "results", &format!("{}_{kind}.json", self.zid))
    }

    fn primes_url(&self) -> Result<Url, ZpError> {
        let zid = self.zid.to_string();
        let mut params = vec![("zid", zid.as_str())];
        if let Some(cat) = self.category.as_deref() {
            params.push(("category", cat));
        }
        params.push(("prime_type", self.prime_type.as_str()));
        api3_url(self.client.base_url(), "event_primes", &params)
    }

    /// `cache3/results/{zid}_view.json`
    ///
    /// # Errors
    ///
    /// Returns `ZpError` on session, transport, status or JSON failure.
    pub async fn view(&mut self) -> Result<Value, ZpError> {
        let url = self.cached("view")?;
        get_json(self.client, url).await
    }

    /// `cache3/results/{zid}_zwift.json`
    ///
    /// # Errors
    ///
    /// Returns `ZpError` on session, transport, status or JSON failure.
    pub async fn zwift(&mut self) -> Result<Value, ZpError> {
        let url = self.cached("zwift")?;
        get_json(self.client, url).await
    }

    /// `cache3/results/{zid}_signups.json`
    ///
    /// # Errors
    ///
    /// Returns `ZpError` on session, transport, status or JSON failure.
    pub async fn signups(&mut self) -> Result<Value, ZpError> {
        let url = self.cached("signups")?;
        get_json(self.client, url).await
    }

    /// Prime results, filtered by the builder's category and prime type.
    ///
    /// # Errors
    ///
    /// Returns `ZpError` on session, transport, status or JSON failure.
    pub async fn primes(&mut self) -> Result<Value, ZpError> {
        let url = self.primes_url()?;
        get_json(self.client, url).await
    }

    /// # Errors
    ///
    /// Returns `ZpError` on session, transport, status or JSON failure.
    pub async fn sprints(&mut self) -> Result<Value, ZpError> {
        let zid = self.zid.to_string();
        let url = api3_url(self.client.base_url(), "event_sprints", &[("zid", zid.as_str())])?;
        get_json(self.client, url).await
    }

    /// # Errors
    ///
    /// Returns `ZpError` on session, transport, status or JSON failure.
    pub async fn live_results(&mut self) -> Result<Value, ZpError> {
        let zid = self.zid.to_string();
        let url = api3_url(self.client.base_url(), "live_results", &[("id", zid.as_str())])?;
        get_json(self.client, url).await
    }

    /// Fetches view, zwift, primes, signups and sprints, one after another.
    ///
    /// # Errors
    ///
    /// Stops at the first failing endpoint and returns its error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(zid = self.zid)))]
    pub async fn fetch_all(mut self) -> Result<EventData, ZpError> {
        Ok(EventData {
            view: self.view().await?,
            zwift: self.zwift().await?,
            primes: self.primes().await?,
            signups: self.signups().await?,
            sprints: self.sprints().await?,
        })
    }
}

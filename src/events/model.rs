use serde::Serialize;
use serde_json::Value;

/// All per-event documents except live results, as returned by the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventData {
    pub view: Value,
    pub zwift: Value,
    pub primes: Value,
    pub signups: Value,
    pub sprints: Value,
}

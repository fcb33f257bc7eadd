//! Personal bests from the cached race-history JSON (`{zwid}_all.json`).

use serde_json::Value;

use super::PowerBests;

impl PowerBests {
    /// Best power and max heart rate over every race in `history["data"]`.
    ///
    /// Each metric is stored as `[value, ...]` with the value as a number or a
    /// numeric string; anything unreadable counts as 0. Returns `None` when
    /// there are no races.
    pub fn from_history(zwid: u64, history: &Value) -> Option<Self> {
        let races = history.get("data")?.as_array()?;
        let first = races.first()?;

        let text = |key: &str| first.get(key).and_then(Value::as_str).map(str::to_string);
        let mut best = PowerBests {
            name: text("name").unwrap_or_else(|| format!("Athlete {zwid}")),
            team: text("tname").unwrap_or_default(),
            race_count: races.len(),
            w5: 0,
            w15: 0,
            w60: 0,
            w300: 0,
            w1200: 0,
            hr_max: 0,
        };

        for race in races {
            best.w5 = best.w5.max(metric(race, "w5"));
            best.w15 = best.w15.max(metric(race, "w15"));
            best.w60 = best.w60.max(metric(race, "w60"));
            best.w300 = best.w300.max(metric(race, "w300"));
            best.w1200 = best.w1200.max(metric(race, "w1200"));
            best.hr_max = best.hr_max.max(metric(race, "hrmax"));
        }
        Some(best)
    }
}

/// Integer part of `race[key][0]`, 0 if absent or unparsable.
fn metric(race: &Value, key: &str) -> u32 {
    match race.get(key).and_then(|v| v.get(0)) {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|f| f.is_finite() && *f > 0.0)
            .map_or(0, |f| f as u32),
        Some(Value::String(s)) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

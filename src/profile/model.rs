use serde::Serialize;

/// Summary fields scraped from a rider's profile page.
///
/// Every field is `None` unless it was found; serializes to a flat object with
/// keys `ProfileName`, `RaceRankingPts`, `RaceRankingPlace`, `ZwiftRacingScore`,
/// `ZPoints`, `ZPointsPlace` and `Country`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileSummary {
    /// Display name, e.g. `mads hedelund [DBR]`.
    pub profile_name: Option<String>,
    pub race_ranking_pts: Option<f64>,
    pub race_ranking_place: Option<u32>,
    pub zwift_racing_score: Option<u32>,
    pub z_points: Option<u32>,
    pub z_points_place: Option<u32>,
    pub country: Option<String>,
}

/// A points total with its place in the matching ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Standing<P> {
    pub points: Option<P>,
    pub place: Option<u32>,
}

/// Personal bests across a rider's race history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerBests {
    pub name: String,
    pub team: String,
    pub race_count: usize,
    pub w5: u32,
    pub w15: u32,
    pub w60: u32,
    pub w300: u32,
    pub w1200: u32,
    pub hr_max: u32,
}

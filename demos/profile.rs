use tracing_subscriber::EnvFilter;
use zwiftpower_rs::{ZpClient, events, profile};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let zwid: u64 = std::env::args()
        .nth(1)
        .ok_or("usage: profile <zwift-id>")?
        .parse()?;

    // 1. Credentials come from ZWIFTPOWER_USERNAME / ZWIFTPOWER_PASSWORD (or .env).
    let mut client = ZpClient::new()?;

    // 2. Scraped summary from the profile page.
    let summary = profile::load_profile(&mut client, zwid).await?;
    println!("--- Profile {zwid} ---");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // 3. Personal bests from the cached race history.
    match profile::load_power_bests(&mut client, zwid).await? {
        Some(best) => println!(
            "{} ({}) over {} races: 5s={}W 1m={}W 5m={}W 20m={}W, max HR {}",
            best.name, best.team, best.race_count, best.w5, best.w60, best.w300, best.w1200, best.hr_max
        ),
        None => println!("No race data found for {zwid}"),
    }

    // 4. Events of the default promoter, passed through as JSON.
    let series = events::series_event_list(&mut client, events::DEFAULT_PROMOTER).await?;
    println!("Promoter events payload: {} bytes", series.to_string().len());

    Ok(())
}

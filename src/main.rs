use chrono::Utc;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use reliefgrid::allocation::cluster_locations;
use reliefgrid::services::AppState;
use reliefgrid::{logger, scoring, seed, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let config = Config::from_env()?;
    let state = AppState::new(config)?;
    if state.is_degraded() {
        tracing::warn!("running without map provider, distances are straight-line only");
    }

    let now = Utc::now();
    let hq = state.config.headquarters();

    let mut locations = seed::relief_locations(now);
    scoring::assess_all(&mut locations, hq, now);
    locations.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    let clusters = cluster_locations(&locations, state.config.cluster_radius_km);

    // Ctrl-C abandons the distance batch instead of waiting on the provider.
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let allocation = state
        .planner
        .compute_distances(seed::volunteers(), &cancel)
        .await?;

    let area = match (&state.maps, locations.first()) {
        (Some(client), Some(top)) => Some(client.area_boundary(top.coordinates).await),
        _ => None,
    };

    let inventory: Vec<serde_json::Value> = seed::inventory()
        .into_iter()
        .map(|item| {
            let status = item.status();
            json!({ "item": item, "status": status })
        })
        .collect();

    let report = json!({
        "degraded": state.is_degraded(),
        "headquarters": hq,
        "locations": locations,
        "clusters": clusters,
        "allocation": allocation,
        "area": area,
        "teams": seed::teams(),
        "inventory": inventory,
        "breaker": state.breaker.state(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

use jobsweep::{conf::Settings, pkg::server::state::AppState, prelude::Result};

pub async fn once(conf: &Settings) -> Result<()> {
    let state = AppState::new(conf)?;
    let jobs = state.aggregator.run().await?;
    tracing::info!("found {} total unique jobs", jobs.len());
    for job in jobs.iter().take(5) {
        tracing::info!(
            "  - {} at {} in {}",
            job.title.as_deref().unwrap_or("-"),
            job.company.as_deref().unwrap_or("-"),
            job.location.as_deref().unwrap_or("-"),
        );
    }
    println!("{}", serde_json::to_string_pretty(&jobs)?);
    Ok(())
}

use crate::core::planner::Planner;
use crate::core::report::TripReport;
use crate::domain::model::TripRequest;
use crate::domain::ports::{ConfigProvider, Storage, TextGenerator};
use crate::utils::error::Result;

pub const JSON_REPORT: &str = "trip_plan.json";
pub const MARKDOWN_REPORT: &str = "trip_plan.md";

/// Runs one planning cycle end to end: generate, extract, render, persist.
pub struct TripEngine<G: TextGenerator, S: Storage, C: ConfigProvider> {
    planner: Planner<G>,
    storage: S,
    config: C,
}

impl<G: TextGenerator, S: Storage, C: ConfigProvider> TripEngine<G, S, C> {
    pub fn new(planner: Planner<G>, storage: S, config: C) -> Self {
        Self {
            planner,
            storage,
            config,
        }
    }

    pub async fn run(&self, request: &TripRequest) -> Result<String> {
        tracing::info!(
            "Planning {} day trip: {} -> {}",
            request.days,
            request.start_location,
            request.destination
        );

        let planned = self.planner.plan_trip(request).await?;
        tracing::info!(
            "Plan \"{}\" covers {} days with {} sources",
            planned.plan.trip_name,
            planned.plan.itinerary.len(),
            planned.sources.len()
        );

        let report = TripReport::new(request.clone(), planned);

        let json = serde_json::to_string_pretty(&report)?;
        self.storage.write_file(JSON_REPORT, json.as_bytes()).await?;

        let markdown = report.to_markdown();
        self.storage
            .write_file(MARKDOWN_REPORT, markdown.as_bytes())
            .await?;

        tracing::info!("Reports written to {}", self.config.output_path());
        Ok(format!("{}/{}", self.config.output_path(), MARKDOWN_REPORT))
    }
}

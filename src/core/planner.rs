use crate::core::{extract, prompt, route};
use crate::domain::model::{GroundingSource, PlaceDetails, TripPlan, TripRequest};
use crate::domain::ports::{GroundingTool, TextGenerator};
use crate::utils::error::{PlannerError, Result};

/// A plan plus the artifacts the presentation layer needs alongside it.
#[derive(Debug, Clone)]
pub struct PlannedTrip {
    pub plan: TripPlan,
    /// Rebuilt directions link; empty when the itinerary has too few stops.
    pub route_url: String,
    pub sources: Vec<GroundingSource>,
}

#[derive(Debug, Clone)]
pub struct PlaceLookup {
    pub details: PlaceDetails,
    pub sources: Vec<GroundingSource>,
}

/// Drives one generation round-trip per user action: build the prompt, hand
/// it to the injected generator, recover structure from whatever comes back.
pub struct Planner<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Planner<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn plan_trip(&self, request: &TripRequest) -> Result<PlannedTrip> {
        let prompt = prompt::trip_prompt(request);
        tracing::debug!(
            "Requesting {} day itinerary: {} -> {}",
            request.days,
            request.start_location,
            request.destination
        );

        let generated = self
            .generator
            .generate(&prompt, GroundingTool::WebSearch)
            .await?;
        tracing::debug!(
            "Received {} chars, {} grounding sources",
            generated.text.len(),
            generated.sources.len()
        );

        let mut plan =
            extract::extract_trip_plan(&generated.text).ok_or(PlannerError::PlanParse)?;

        // Days arrive in an order of the model's choosing; the itinerary
        // contract is chronological.
        plan.itinerary.sort_by_key(|day| day.day);

        // The model's own link is unreliable, so rebuild it from the stops.
        let route_url = route::build_route_url(&plan.itinerary);
        if route_url.is_empty() {
            tracing::warn!("Itinerary has too few unique stops for a directions link");
        } else {
            plan.google_maps_link = route_url.clone();
        }

        Ok(PlannedTrip {
            plan,
            route_url,
            sources: generated.sources,
        })
    }

    pub async fn place_details(&self, query: &str) -> Result<PlaceLookup> {
        let prompt = prompt::place_prompt(query);
        let generated = self.generator.generate(&prompt, GroundingTool::Maps).await?;

        // Unlike trip planning, a prose answer here is still useful: keep it
        // as the summary when it is short enough to be one.
        let details = extract::extract_place_details(&generated.text)
            .unwrap_or_else(|| fallback_details(query, &generated.text));

        Ok(PlaceLookup {
            details,
            sources: generated.sources,
        })
    }
}

fn fallback_details(query: &str, text: &str) -> PlaceDetails {
    let summary = if text.len() < 200 {
        text.trim().to_string()
    } else {
        "Could not verify exact details.".to_string()
    };
    PlaceDetails {
        name: query.to_string(),
        rating: None,
        address: None,
        summary: Some(summary),
    }
}

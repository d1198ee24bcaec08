use serde::{Deserialize, Serialize};

/// What the user asked for: where to ride, for how long, and in what spirit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub start_location: String,
    pub destination: String,
    pub days: u32,
    pub is_round_trip: bool,
    pub preferences: String,
}

/// The structured itinerary recovered from the generation service.
///
/// The wire shape is camelCase because that is what the model is prompted to
/// produce. Every field defaults so a partially-conforming response still
/// decodes into something renderable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPlan {
    pub trip_name: String,
    pub summary: String,
    pub total_distance: String,
    /// The model writes this itself and routinely gets it wrong; the planner
    /// replaces it with a rebuilt directions link when one can be derived.
    pub google_maps_link: String,
    pub itinerary: Vec<DayItinerary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayItinerary {
    pub day: u32,
    pub start_location: String,
    pub end_location: String,
    pub distance: String,
    pub route_description: String,
    pub points_of_interest: Vec<PointOfInterest>,
    pub meals: Meals,
    pub accommodation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// A single stop. `name` should be a Maps-searchable string,
/// ideally "Name, State, Country".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointOfInterest {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Detail lookup for one place. Everything past the name is best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A citation the generation service attaches to substantiate its answer.
/// Advisory only; never validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroundingSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Raw output of one generation call: the text blob plus whatever citations
/// came with it.
#[derive(Debug, Clone)]
pub struct Generated {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

use crate::core::planner::PlannedTrip;
use crate::domain::model::{GroundingSource, TripPlan, TripRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything one planning run produced, in a shape worth persisting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripReport {
    pub generated_at: DateTime<Utc>,
    pub request: TripRequest,
    pub plan: TripPlan,
    pub route_url: String,
    pub sources: Vec<GroundingSource>,
}

impl TripReport {
    pub fn new(request: TripRequest, planned: PlannedTrip) -> Self {
        Self {
            generated_at: Utc::now(),
            request,
            plan: planned.plan,
            route_url: planned.route_url,
            sources: planned.sources,
        }
    }

    /// Human-readable itinerary. Mirrors what the plan display shows: header,
    /// map link, one section per day, then the grounding citations.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let plan = &self.plan;

        out.push_str(&format!("# {}\n\n", plan.trip_name));
        out.push_str(&format!("{}\n\n", plan.summary));
        out.push_str(&format!("**Total distance:** {}\n\n", plan.total_distance));
        if self.route_url.is_empty() {
            out.push_str("_No directions link available for this itinerary._\n\n");
        } else {
            out.push_str(&format!("[Open route map]({})\n\n", self.route_url));
        }

        for day in &plan.itinerary {
            out.push_str(&format!(
                "## Day {}: {} -> {}\n\n",
                day.day, day.start_location, day.end_location
            ));
            out.push_str(&format!("*{}*\n\n", day.distance));
            out.push_str(&format!("{}\n\n", day.route_description));

            if !day.points_of_interest.is_empty() {
                out.push_str("### Curated stops\n\n");
                for poi in &day.points_of_interest {
                    if poi.tags.is_empty() {
                        out.push_str(&format!("- **{}**: {}\n", poi.name, poi.description));
                    } else {
                        out.push_str(&format!(
                            "- **{}**: {} [{}]\n",
                            poi.name,
                            poi.description,
                            poi.tags.join(", ")
                        ));
                    }
                }
                out.push('\n');
            }

            out.push_str(&format!(
                "**Meals:** breakfast: {} / lunch: {} / dinner: {}\n\n",
                day.meals.breakfast, day.meals.lunch, day.meals.dinner
            ));
            out.push_str(&format!("**Stay:** {}\n\n", day.accommodation));
        }

        if !self.sources.is_empty() {
            out.push_str("## Sources\n\n");
            for source in &self.sources {
                let title = source.title.as_deref().unwrap_or("Untitled source");
                match source.uri.as_deref() {
                    Some(uri) => out.push_str(&format!("- [{}]({})\n", title, uri)),
                    None => out.push_str(&format!("- {}\n", title)),
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DayItinerary, Meals, PointOfInterest};

    fn sample_report() -> TripReport {
        let plan = TripPlan {
            trip_name: "Big Sur Deep Scan".to_string(),
            summary: "Forgotten pullouts.".to_string(),
            total_distance: "180 km".to_string(),
            google_maps_link: "https://www.google.com/maps/dir/?api=1&origin=A&destination=B"
                .to_string(),
            itinerary: vec![DayItinerary {
                day: 1,
                start_location: "Big Sur, CA".to_string(),
                end_location: "Carmel, CA".to_string(),
                distance: "60 km".to_string(),
                route_description: "Coastal rollers.".to_string(),
                points_of_interest: vec![PointOfInterest {
                    name: "McWay Falls, CA".to_string(),
                    description: "Tidefall".to_string(),
                    tags: vec!["Viewpoint".to_string()],
                }],
                meals: Meals {
                    breakfast: "Camp oats".to_string(),
                    lunch: "Deli".to_string(),
                    dinner: "Tavern".to_string(),
                },
                accommodation: "Pfeiffer camp".to_string(),
            }],
        };
        let route_url = plan.google_maps_link.clone();
        TripReport::new(
            TripRequest {
                start_location: "Big Sur, CA".to_string(),
                destination: "Carmel, CA".to_string(),
                days: 1,
                is_round_trip: false,
                preferences: String::new(),
            },
            PlannedTrip {
                plan,
                route_url,
                sources: vec![GroundingSource {
                    title: Some("Forum thread".to_string()),
                    uri: Some("https://forum.example/t/9".to_string()),
                }],
            },
        )
    }

    #[test]
    fn test_markdown_contains_plan_and_day_sections() {
        let md = sample_report().to_markdown();
        assert!(md.contains("# Big Sur Deep Scan"));
        assert!(md.contains("## Day 1: Big Sur, CA -> Carmel, CA"));
        assert!(md.contains("**McWay Falls, CA**: Tidefall [Viewpoint]"));
        assert!(md.contains("dinner: Tavern"));
        assert!(md.contains("[Forum thread](https://forum.example/t/9)"));
    }

    #[test]
    fn test_markdown_without_route_url_says_so() {
        let mut report = sample_report();
        report.route_url = String::new();
        let md = report.to_markdown();
        assert!(md.contains("No directions link available"));
        assert!(!md.contains("[Open route map]"));
    }

    #[test]
    fn test_json_report_is_camel_case() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert!(json.get("generatedAt").is_some());
        assert!(json.get("routeUrl").is_some());
        assert_eq!(json["plan"]["tripName"], "Big Sur Deep Scan");
        assert_eq!(json["request"]["startLocation"], "Big Sur, CA");
    }
}

use crate::domain::model::TripRequest;

/// The "deep scan" prompt: asks the search-grounded model to surface
/// low-visibility stops and answer with raw JSON in the plan wire shape.
///
/// Output-format enforcement has to live in the prompt text because the
/// hosted API rejects response schemas when grounding tools are enabled.
pub fn trip_prompt(request: &TripRequest) -> String {
    let route_type = if request.is_round_trip {
        format!(
            "round trip starting from {} to {} and returning to {}",
            request.start_location, request.destination, request.start_location
        )
    } else {
        format!(
            "one-way trip from {} to {}",
            request.start_location, request.destination
        )
    };

    format!(
        r#"Act as a Deep-Search Cycling Scout. Use Google Search to find "Ghost Places" (0-5 reviews, niche forum mentions, or nameless vista points) for a {route_type} over {days} days.

CRITICAL INSTRUCTIONS:
1. Search for places that NO ONE expects. Cross-reference niche cycling blogs and satellite views.
2. Preferences: "{preferences}".
3. The Google Maps URL MUST include the Start, Destination, AND every single hidden gem discovered as intermediate waypoints in a directions link.

OUTPUT FORMAT (Raw JSON only):
{{
  "tripName": "string",
  "summary": "string explaining why these spots were hidden",
  "totalDistance": "string",
  "googleMapsLink": "https://www.google.com/maps/dir/Start/Hidden1/Hidden2/.../End",
  "itinerary": [
    {{
      "day": number,
      "startLocation": "string",
      "endLocation": "string",
      "distance": "string",
      "routeDescription": "string",
      "pointsOfInterest": [{{ "name": "string", "description": "curator note", "tags": ["string"] }}],
      "meals": {{ "breakfast": "string", "lunch": "string", "dinner": "string" }},
      "accommodation": "string"
    }}
  ]
}}"#,
        days = request.days,
        preferences = request.preferences,
    )
}

/// Detail lookup for a single place, grounded against Maps data.
pub fn place_prompt(query: &str) -> String {
    format!(
        r#"Return details for: "{query}".
JSON Format: {{"name": string, "rating": number, "address": string, "summary": string}}.
If it has 0 reviews, describe its physical location based on Maps data."#
    )
}

use crate::domain::model::DayItinerary;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::HashSet;

/// Directions links degrade once they carry more than about ten stops, so the
/// intermediate stops are capped at nine; origin and destination are exempt.
pub const MAX_WAYPOINTS: usize = 9;

// RFC 3986 unreserved characters pass through bare; everything else is
// escaped, so spaces become %20 and commas %2C.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Derive a single navigable directions link from an itinerary.
///
/// The stop order is the first day's start, then each day's points of
/// interest followed by that day's end. Stops are trimmed, empties dropped,
/// and duplicates removed case-sensitively keeping the first occurrence.
/// Fewer than two unique stops yields `""` (callers treat the empty string as
/// "link unavailable"), and the function never fails otherwise.
///
/// No travel-mode parameter is emitted: cycling mode makes the maps service
/// report "no route found" in regions without bike-route data, so mode
/// selection is left to whoever opens the link.
pub fn build_route_url(itinerary: &[DayItinerary]) -> String {
    if itinerary.is_empty() {
        return String::new();
    }

    let mut stops: Vec<&str> = vec![itinerary[0].start_location.as_str()];
    for day in itinerary {
        for poi in &day.points_of_interest {
            stops.push(poi.name.as_str());
        }
        stops.push(day.end_location.as_str());
    }

    let mut seen = HashSet::new();
    let unique: Vec<&str> = stops
        .into_iter()
        .map(str::trim)
        .filter(|stop| !stop.is_empty() && seen.insert(*stop))
        .collect();

    if unique.len() < 2 {
        return String::new();
    }

    let origin = unique[0];
    let destination = unique[unique.len() - 1];
    let waypoints: Vec<String> = unique[1..unique.len() - 1]
        .iter()
        .take(MAX_WAYPOINTS)
        .map(|stop| encode_component(stop))
        .collect();

    let mut url = format!(
        "https://www.google.com/maps/dir/?api=1&origin={}&destination={}",
        encode_component(origin),
        encode_component(destination)
    );
    if !waypoints.is_empty() {
        url.push_str("&waypoints=");
        url.push_str(&waypoints.join("|"));
    }
    url
}

pub mod settings;

use crate::domain::model::TripRequest;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "veloventure")]
#[command(about = "Deep-scan cycling trip planner targeting nameless overlooks and hidden trails")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Optional TOML settings file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Override the configured output directory")]
    pub output_path: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Plan a multi-day trip between two places
    Plan {
        #[arg(long, help = "Starting point, e.g. \"Big Sur, CA\"")]
        start: String,

        #[arg(long, help = "Destination, e.g. \"Tahoe, CA\"")]
        destination: String,

        #[arg(long, default_value_t = 3)]
        days: u32,

        #[arg(long, help = "Return to the starting point")]
        round_trip: bool,

        #[arg(long, default_value = "", help = "Free-text preferences")]
        preferences: String,
    },
    /// Look up details for a single place
    Place {
        /// Maps-searchable place name
        query: String,
    },
}

#[cfg(feature = "cli")]
impl Command {
    /// The trip request this invocation describes, if it is a planning run.
    pub fn trip_request(&self) -> Option<TripRequest> {
        match self {
            Command::Plan {
                start,
                destination,
                days,
                round_trip,
                preferences,
            } => Some(TripRequest {
                start_location: start.clone(),
                destination: destination.clone(),
                days: *days,
                is_round_trip: *round_trip,
                preferences: preferences.clone(),
            }),
            Command::Place { .. } => None,
        }
    }
}

impl Validate for TripRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("start", &self.start_location)?;
        validate_non_empty_string("destination", &self.destination)?;
        validate_range("days", self.days, 1, 60)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(days: u32) -> TripRequest {
        TripRequest {
            start_location: "Big Sur, CA".to_string(),
            destination: "Tahoe, CA".to_string(),
            days,
            is_round_trip: false,
            preferences: String::new(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request(3).validate().is_ok());
    }

    #[test]
    fn test_day_bounds_match_the_form_limits() {
        assert!(request(1).validate().is_ok());
        assert!(request(60).validate().is_ok());
        assert!(request(0).validate().is_err());
        assert!(request(61).validate().is_err());
    }

    #[test]
    fn test_blank_locations_fail() {
        let mut req = request(3);
        req.start_location = "  ".to_string();
        assert!(req.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_plan_subcommand_parses_into_request() {
        let cli = CliConfig::parse_from([
            "veloventure",
            "plan",
            "--start",
            "Big Sur, CA",
            "--destination",
            "Tahoe, CA",
            "--days",
            "5",
            "--round-trip",
        ]);
        let request = cli.command.trip_request().unwrap();
        assert_eq!(request.start_location, "Big Sur, CA");
        assert_eq!(request.days, 5);
        assert!(request.is_round_trip);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_place_subcommand_has_no_trip_request() {
        let cli = CliConfig::parse_from(["veloventure", "place", "Salt Point, CA"]);
        assert!(cli.command.trip_request().is_none());
    }
}

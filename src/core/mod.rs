pub mod engine;
pub mod extract;
pub mod planner;
pub mod prompt;
pub mod report;
pub mod route;

pub use crate::domain::model::{
    DayItinerary, Generated, GroundingSource, Meals, PlaceDetails, PointOfInterest, TripPlan,
    TripRequest,
};
pub use crate::domain::ports::{ConfigProvider, GroundingTool, Storage, TextGenerator};
pub use crate::utils::error::Result;

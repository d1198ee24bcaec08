// Adapters layer: concrete implementations for the external seams
// (generation service, report storage).

pub mod gemini;
pub mod storage;

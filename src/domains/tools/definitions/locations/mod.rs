//! Location tools.

pub mod search;

pub use search::{SearchLocationsParams, SearchLocationsTool};

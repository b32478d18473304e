//! Hub visit tools.
//!
//! A hub visit is one person's attendance record at the hub on one date.
//! Per-visit endpoints are addressed as `/hub_visits/{person_id}/{date}`.
//!
//! - `list`: filtered listing with paging
//! - `update`: change notes and/or app data
//! - `notes`: replace only the notes
//! - `delete`: remove a visit

pub mod delete;
pub mod list;
pub mod notes;
pub mod update;

pub use delete::{DeleteHubVisitParams, DeleteHubVisitTool};
pub use list::{GetHubVisitsParams, GetHubVisitsTool};
pub use notes::{UpdateHubVisitNotesParams, UpdateHubVisitNotesTool};
pub use update::{UpdateHubVisitParams, UpdateHubVisitTool};

use crate::domains::api::ApiPath;

/// Path of a single visit.
pub(crate) fn visit_path(person_id: u64, date: &str) -> ApiPath {
    ApiPath::new("hub_visits").segment(person_id).segment(date)
}

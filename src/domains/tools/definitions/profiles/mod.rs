//! Profile tools.
//!
//! - `search`: filtered profile search
//! - `get`: one profile by id or e-mail
//! - `me`: the profile behind the configured token

pub mod get;
pub mod me;
pub mod search;

pub use get::{GetProfileParams, GetProfileTool};
pub use me::GetMyProfileTool;
pub use search::{ProfileRole, ProfileScope, SearchProfilesParams, SearchProfilesTool};

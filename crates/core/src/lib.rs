#![forbid(unsafe_code)]

pub mod model;
pub mod time;

pub use model::{Profile, ProfileDetail, ProfileId, ProfileIdError, ProfileSummary};

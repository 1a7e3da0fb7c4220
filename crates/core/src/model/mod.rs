mod ids;
mod profile;

pub use ids::{ProfileId, ProfileIdError};
pub use profile::{Profile, ProfileDetail, ProfileSummary};

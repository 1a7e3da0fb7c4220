mod avatar_vm;
mod profile_vm;
mod skills_vm;
mod time_fmt;

pub use avatar_vm::{AvatarSize, AvatarVm};
pub use profile_vm::{
    ProfileCardVm, ProfileDetailVm, map_profile_cards, map_profile_detail, profile_count_label,
};
pub use skills_vm::SkillRatingVm;

use directory_core::{Profile, ProfileId};

use crate::vm::avatar_vm::{AvatarSize, AvatarVm};
use crate::vm::skills_vm::{SkillRatingVm, placeholder_skills};
use crate::vm::time_fmt::{format_date, format_datetime};

// Client-side placeholders for the detail page. None of these come from the
// backend.
pub const PLACEHOLDER_DEPARTMENT: &str = "Operations";
pub const PLACEHOLDER_EXPERIENCE: &str = "5+ years";
pub const PLACEHOLDER_PHONE: &str = "+1 (555) 123-4567";
pub const PLACEHOLDER_LOCATION: &str = "San Francisco, CA";
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "company.com";
pub const PLACEHOLDER_ABOUT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute \
irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileCardVm {
    pub id: ProfileId,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub avatar: AvatarVm,
    pub joined_str: String,
}

impl From<&Profile> for ProfileCardVm {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().clone(),
            name: profile.name().to_string(),
            title: profile.title().to_string(),
            description: profile.description().map(str::to_string),
            avatar: AvatarVm::new(
                profile.name(),
                profile.avatar_url().as_ref(),
                AvatarSize::Card,
            ),
            joined_str: format_date(profile.created_at()),
        }
    }
}

/// One card per record, in response order.
#[must_use]
pub fn map_profile_cards(profiles: &[Profile]) -> Vec<ProfileCardVm> {
    profiles.iter().map(ProfileCardVm::from).collect()
}

/// `1 Profile`, `3 Profiles`
#[must_use]
pub fn profile_count_label(count: usize) -> String {
    let noun = if count == 1 { "Profile" } else { "Profiles" };
    format!("{count} {noun}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDetailVm {
    pub id: ProfileId,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub avatar: AvatarVm,
    pub joined_str: String,

    pub employee_id: String,
    pub contact_email: String,
    pub phone: &'static str,
    pub location: &'static str,
    pub department: &'static str,
    pub experience: &'static str,
    pub about_extra: &'static str,
    pub skills: Vec<SkillRatingVm>,
}

impl From<&Profile> for ProfileDetailVm {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().clone(),
            name: profile.name().to_string(),
            title: profile.title().to_string(),
            description: profile.description().map(str::to_string),
            avatar: AvatarVm::new(
                profile.name(),
                profile.avatar_url().as_ref(),
                AvatarSize::Detail,
            ),
            joined_str: format_datetime(profile.created_at()),
            employee_id: employee_id(profile.id()),
            contact_email: contact_email(profile.name()),
            phone: PLACEHOLDER_PHONE,
            location: PLACEHOLDER_LOCATION,
            department: PLACEHOLDER_DEPARTMENT,
            experience: PLACEHOLDER_EXPERIENCE,
            about_extra: PLACEHOLDER_ABOUT,
            skills: placeholder_skills(profile.id()),
        }
    }
}

#[must_use]
pub fn map_profile_detail(profile: &Profile) -> ProfileDetailVm {
    ProfileDetailVm::from(profile)
}

/// `EMP-0007`
#[must_use]
pub fn employee_id(id: &ProfileId) -> String {
    format!("EMP-{:0>4}", id.as_str())
}

/// `ada.lovelace@company.com`
#[must_use]
pub fn contact_email(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    format!("{local}@{PLACEHOLDER_EMAIL_DOMAIN}")
}

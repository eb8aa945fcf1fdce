//! Domain types shared by the site's views

use serde::{Deserialize, Serialize};

/// One showcased design, as shown on a showroom card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub title: String,
    pub category: String,
    /// Primary image URL
    pub image: String,
}

impl ProjectSummary {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            image: image.into(),
        }
    }
}

/// Which view the root container renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Main,
    ProjectDetail(ProjectSummary),
}

/// Contact form payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Contact form submission status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    /// Carries the id of the send that succeeded
    Sent(u32),
    Failed(String),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }

    /// Drop the confirmation for send `id`; a later send's status is kept
    pub fn expire_sent(&mut self, id: u32) {
        if *self == SubmitStatus::Sent(id) {
            *self = SubmitStatus::Idle;
        }
    }
}

/// One row of the fixed spec sheet on the project detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecItem {
    pub label: &'static str,
    pub value: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_clears_matching_send() {
        let mut status = SubmitStatus::Sent(1);
        status.expire_sent(1);
        assert_eq!(status, SubmitStatus::Idle);
    }

    #[test]
    fn test_stale_timer_keeps_later_confirmation() {
        // First send's timer fires after a second send already succeeded
        let mut status = SubmitStatus::Sent(2);
        status.expire_sent(1);
        assert_eq!(status, SubmitStatus::Sent(2));
    }

    #[test]
    fn test_expire_leaves_other_states() {
        for mut status in [
            SubmitStatus::Idle,
            SubmitStatus::Sending,
            SubmitStatus::Failed("Network error: offline".to_string()),
        ] {
            let before = status.clone();
            status.expire_sent(1);
            assert_eq!(status, before);
        }
    }
}

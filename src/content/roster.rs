// SPDX-License-Identifier: MPL-2.0
//! Instructor records.

use super::image_url::instructor_image_url;
use serde::{Deserialize, Serialize};

/// One carousel item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Display name.
    pub name: String,
    /// Role line shown above the name.
    pub title: String,
    /// Free-form biography, may be empty.
    #[serde(default)]
    pub bio: String,
    /// Portrait file name on the CDN.
    #[serde(default)]
    pub image: String,
}

impl Instructor {
    /// Full portrait URL under `cdn_base`.
    #[must_use]
    pub fn image_url(&self, cdn_base: &str) -> String {
        instructor_image_url(cdn_base, &self.image)
    }

    /// Whether there is any biography text to show.
    #[must_use]
    pub fn has_bio(&self) -> bool {
        !self.bio.trim().is_empty()
    }
}

/// The instructors section of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstructorsSection {
    /// Section heading, also used as the oversized backdrop word.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Instructors in carousel order.
    #[serde(default)]
    pub members: Vec<Instructor>,
}

impl InstructorsSection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }
}

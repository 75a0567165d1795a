// SPDX-License-Identifier: MPL-2.0
//! Portrait URLs on the image CDN.

use crate::config::{INSTRUCTOR_IMAGE_PATH, PLACEHOLDER_INSTRUCTOR_IMAGE};

/// Builds the CDN URL of an instructor portrait.
///
/// Leading slashes in `filename` and trailing slashes in `cdn_base` are
/// dropped. A blank file name yields the local placeholder image.
#[must_use]
pub fn instructor_image_url(cdn_base: &str, filename: &str) -> String {
    let filename = filename.trim().trim_start_matches('/');
    if filename.is_empty() {
        return PLACEHOLDER_INSTRUCTOR_IMAGE.to_string();
    }
    let base = cdn_base.trim().trim_end_matches('/');
    format!("{base}/{INSTRUCTOR_IMAGE_PATH}/{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cdn.timerightproduction.org";

    #[test]
    fn joins_base_path_and_file() {
        assert_eq!(
            instructor_image_url(BASE, "timeright-instructor-onur-tan.webp"),
            "https://cdn.timerightproduction.org/images/instructor/timeright-instructor-onur-tan.webp"
        );
    }

    #[test]
    fn strips_leading_slashes_from_file() {
        assert_eq!(
            instructor_image_url(BASE, "///a.webp"),
            format!("{BASE}/images/instructor/a.webp")
        );
    }

    #[test]
    fn strips_trailing_slashes_from_base() {
        assert_eq!(
            instructor_image_url("https://cdn.example.org//", "a.webp"),
            "https://cdn.example.org/images/instructor/a.webp"
        );
    }

    #[test]
    fn blank_file_uses_placeholder() {
        assert_eq!(instructor_image_url(BASE, ""), PLACEHOLDER_INSTRUCTOR_IMAGE);
        assert_eq!(instructor_image_url(BASE, "  "), PLACEHOLDER_INSTRUCTOR_IMAGE);
        assert_eq!(instructor_image_url(BASE, "/"), PLACEHOLDER_INSTRUCTOR_IMAGE);
    }
}

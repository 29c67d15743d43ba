//! Media filename validators.
//!
//! Extension matching is pattern-based (`.ext` appearing in the path) rather
//! than strict suffix equality, so paths that carry trailing segment noise
//! still match once the query string is stripped.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static IMAGE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)\.(jpeg|jpg|gif|png|svg|webp|jfif|bmp|dpg)").unwrap()
});

static VIDEO_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)\.(mp4|mpg|mpeg|dat|asf|avi|rm|rmvb|mov|wmv|flv|mkv|m3u8)").unwrap()
});

// ============================================================================
// IMAGE PATH
// ============================================================================

crate::validator! {
    /// Validates that a path names an image file.
    ///
    /// Any `?query` suffix is stripped before matching, so CDN-style URLs
    /// like `photo.jpg?x-oss-process=resize` qualify.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::prelude::*;
    ///
    /// assert!(image_path().validate("photo.jpg?x=1").is_ok());
    /// assert!(image_path().validate("logo.SVG").is_ok());
    /// assert!(image_path().validate("doc.pdf").is_err());
    /// ```
    pub ImagePath for str;
    rule(input) {
        let path = input.split('?').next().unwrap_or(input);
        IMAGE_REGEX.is_match(path)
    }
    error(input) { ValidationError::invalid_format("image path") }
    fn image_path();
}

// ============================================================================
// VIDEO PATH
// ============================================================================

crate::validator! {
    /// Validates that a path names a video file.
    pub VideoPath for str;
    rule(input) { VIDEO_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("video path") }
    fn video_path();
}

// ============================================================================
// TESTS
// ============================================================================

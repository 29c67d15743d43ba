//! Built-in validators.
//!
//! # Categories
//!
//! - **Content**: email, URL, CJK-only text
//! - **Phone**: mainland-China mobile numbers, SMS codes
//! - **Numeric**: decimal grammar, inclusive ranges
//! - **Date**: timestamps and calendar strings
//! - **Shape**: string/array/object/callable tags, promise-shaped objects
//! - **Emptiness and containment**
//! - **Media**: image and video filenames
//!
//! # Examples
//!
//! ```
//! use formcheck::prelude::*;
//!
//! assert!(email().validate("a@b.com").is_ok());
//! assert!(chinese_mobile().validate("13812345678").is_ok());
//! assert!(in_range(1.0, 10.0).validate(&5.0).is_ok());
//! assert!(empty().validate(&FieldValue::Null).is_ok());
//! ```

pub mod collection;
pub mod content;
pub mod datetime;
pub mod emptiness;
pub mod media;
pub mod numeric;
pub mod phone;
pub mod types;

pub use collection::{Contains, contains};
pub use content::{ChineseOnly, Email, Url, chinese_only, email, url};
pub use datetime::{DateLike, date_like};
pub use emptiness::{Empty, empty};
pub use media::{ImagePath, VideoPath, image_path, video_path};
pub use numeric::{Decimal, InRange, decimal, in_range, is_decimal_str};
pub use phone::{ChineseMobile, SmsCode, chinese_mobile, sms_code};
pub use types::{
    IsArray, IsCallable, IsObject, IsString, PromiseLike, is_array, is_callable, is_object,
    is_string, promise_like,
};

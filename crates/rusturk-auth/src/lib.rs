//! Request signing for the Mechanical Turk requester API.
//!
//! Every request carries a `Timestamp` and a `Signature` computed as
//!
//! ```text
//! Signature = Base64(HMAC-SHA1(SecretKey, Service + Operation + Timestamp))
//! ```
//!
//! where `Service` is the fixed `AWSMechanicalTurkRequester` literal and
//! `Timestamp` is the UTC time formatted as `YYYY-MM-DDTHH:MM:SSZ`.
//!
//! # Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use rusturk_auth::RequestSigner;
//! use rusturk_core::Credentials;
//!
//! let signer = RequestSigner::new(Credentials::new("AKIDEXAMPLE", "secret"));
//! let now = Utc.with_ymd_and_hms(2010, 3, 15, 12, 0, 0).unwrap();
//! let signed = signer.sign("GetAccountBalance", now).unwrap();
//! assert_eq!(signed.timestamp, "2010-03-15T12:00:00Z");
//! assert_eq!(signed.signature, "0hxEPu6ZgiuadwiexnFaqnW0M6I=");
//! ```

pub mod error;
pub mod signature;

pub use error::AuthError;
pub use signature::{
    RequestSigner, SignedRequest, TIMESTAMP_LEN, compute_signature, format_timestamp,
    string_to_sign,
};

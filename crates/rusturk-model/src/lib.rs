//! Requester API model types for Rusturk.
//!
//! Holds the catalog of remote operations, the value types shared between
//! requests and responses, one input struct per operation (flattened into
//! wire [`Parameters`] through [`OperationInput`]) and the typed outputs the
//! response extractors produce. Nothing here performs I/O.
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod params;
pub mod types;

pub use error::ApiError;
pub use operations::MTurkOperation;
pub use output::OperationStatus;
pub use params::{OperationInput, Parameters};
pub use types::{
    Comparator, ExternalQuestion, Money, Paging, QualificationRequirement,
    qualification_requirement,
};

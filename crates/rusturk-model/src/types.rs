//! Shared value types used by inputs and outputs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Declare a closed set of wire string values with `as_str`/`from_name`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Returns the wire value.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }

            /// Parse a wire value.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// How a worker's qualification value is compared to a requirement.
    Comparator {
        /// Strictly less than the requirement value.
        LessThan => "LessThan",
        /// Less than or equal to the requirement value.
        LessThanOrEqualTo => "LessThanOrEqualTo",
        /// Strictly greater than the requirement value.
        GreaterThan => "GreaterThan",
        /// Greater than or equal to the requirement value.
        GreaterThanOrEqualTo => "GreaterThanOrEqualTo",
        /// Equal to the requirement value.
        EqualTo => "EqualTo",
        /// Not equal to the requirement value.
        NotEqualTo => "NotEqualTo",
        /// The worker holds the qualification at all.
        Exists => "Exists",
    }
}

wire_enum! {
    /// Whether a qualification type accepts new requests.
    QualificationTypeStatus {
        /// Workers may request the qualification.
        Active => "Active",
        /// The qualification type is retired.
        Inactive => "Inactive",
    }
}

wire_enum! {
    /// Result ordering.
    SortDirection {
        /// Smallest first.
        Ascending => "Ascending",
        /// Largest first.
        Descending => "Descending",
    }
}

wire_enum! {
    /// Sort keys accepted by `SearchHITs`.
    SearchHitsSortProperty {
        /// HIT title.
        Title => "Title",
        /// Reward amount.
        Reward => "Reward",
        /// Expiration time.
        Expiration => "Expiration",
        /// Creation time.
        CreationTime => "CreationTime",
        /// Creation order.
        Enumeration => "Enumeration",
    }
}

wire_enum! {
    /// Sort keys accepted by `SearchQualificationTypes`.
    QualificationTypeSortProperty {
        /// Qualification type name.
        Name => "Name",
    }
}

wire_enum! {
    /// Sort keys accepted by `GetQualificationRequests`.
    QualificationRequestSortProperty {
        /// Requested qualification type.
        QualificationTypeId => "QualificationTypeId",
        /// Request submission time.
        SubmitTime => "SubmitTime",
    }
}

wire_enum! {
    /// Lifecycle state of an assignment.
    AssignmentStatus {
        /// Submitted, awaiting review.
        Submitted => "Submitted",
        /// Approved and paid.
        Approved => "Approved",
        /// Rejected.
        Rejected => "Rejected",
    }
}

wire_enum! {
    /// State of a qualification held by a worker.
    QualificationStatus {
        /// Currently held.
        Granted => "Granted",
        /// Revoked by the requester.
        Revoked => "Revoked",
    }
}

wire_enum! {
    /// Review states a HIT can be listed under by `GetReviewableHITs`.
    ReviewableHitStatus {
        /// Finished, not yet being reviewed.
        Reviewable => "Reviewable",
        /// Marked as under review.
        Reviewing => "Reviewing",
    }
}

wire_enum! {
    /// Aggregation window for requester statistics.
    TimePeriod {
        /// A single day; allows a `Count` of days.
        OneDay => "OneDay",
        /// The last seven days.
        SevenDays => "SevenDays",
        /// The last thirty days.
        ThirtyDays => "ThirtyDays",
        /// The account's whole history.
        LifeToDate => "LifeToDate",
    }
}

/// A monetary amount sent in a request (`Prefix.1.Amount`, `Prefix.1.CurrencyCode`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    /// Decimal amount, e.g. `"0.05"`.
    pub amount: String,
    /// ISO currency code.
    pub currency_code: String,
}

impl Money {
    /// An amount in US dollars.
    #[must_use]
    pub fn usd(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: "USD".to_owned(),
        }
    }

    /// A whole number of US cents.
    #[must_use]
    pub fn usd_cents(cents: u64) -> Self {
        Self::usd(format!("{}.{:02}", cents / 100, cents % 100))
    }
}

/// A monetary amount reported in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Price {
    /// Decimal amount.
    pub amount: String,
    /// ISO currency code, when reported.
    pub currency_code: Option<String>,
    /// Display string such as `$0.05`, when reported.
    pub formatted_price: Option<String>,
}

/// Paging controls shared by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    /// Results per page.
    pub page_size: u32,
    /// 1-based page index.
    pub page_number: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page_size: 100,
            page_number: 1,
        }
    }
}

/// Paging counters reported by list operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Items on this page.
    pub num_results: Option<u32>,
    /// Items across all pages.
    pub total_num_results: Option<u32>,
    /// The page returned.
    pub page_number: Option<u32>,
}

/// Default integer threshold used by [`qualification_requirement`].
pub const DEFAULT_QUALIFICATION_THRESHOLD: i32 = 50;

/// One entry of a HIT's qualification requirement list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationRequirement {
    /// The qualification type to test.
    pub qualification_type_id: String,
    /// How the worker's value is compared.
    pub comparator: Comparator,
    /// Integer to compare against.
    pub integer_value: Option<i32>,
    /// ISO country code to compare against (locale requirements).
    pub locale_country: Option<String>,
    /// Hide the HIT from workers who do not meet the requirement.
    pub required_to_preview: Option<bool>,
}

impl QualificationRequirement {
    /// A requirement with no comparison value.
    #[must_use]
    pub fn new(qualification_type_id: impl Into<String>, comparator: Comparator) -> Self {
        Self {
            qualification_type_id: qualification_type_id.into(),
            comparator,
            integer_value: None,
            locale_country: None,
            required_to_preview: None,
        }
    }

    /// Compare against an integer value.
    #[must_use]
    pub fn with_integer_value(mut self, value: i32) -> Self {
        self.integer_value = Some(value);
        self
    }

    /// Compare against a country code.
    #[must_use]
    pub fn with_locale_country(mut self, country: impl Into<String>) -> Self {
        self.locale_country = Some(country.into());
        self
    }

    /// Set whether the requirement also gates previewing.
    #[must_use]
    pub fn with_required_to_preview(mut self, required: bool) -> Self {
        self.required_to_preview = Some(required);
        self
    }
}

/// Build a single qualification requirement entry.
///
/// The comparator defaults to [`Comparator::GreaterThan`] and the threshold to
/// [`DEFAULT_QUALIFICATION_THRESHOLD`].
#[must_use]
pub fn qualification_requirement(
    qualification_type_id: impl Into<String>,
    comparator: Option<Comparator>,
) -> QualificationRequirement {
    QualificationRequirement::new(
        qualification_type_id,
        comparator.unwrap_or(Comparator::GreaterThan),
    )
    .with_integer_value(DEFAULT_QUALIFICATION_THRESHOLD)
}

/// Default frame height for an external question, in pixels.
pub const DEFAULT_FRAME_HEIGHT: u32 = 800;

/// A question hosted on the requester's own site, shown in a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalQuestion {
    /// URL of the question page.
    pub external_url: String,
    /// Frame height in pixels.
    pub frame_height: u32,
}

impl ExternalQuestion {
    /// An external question with the default frame height.
    #[must_use]
    pub fn new(external_url: impl Into<String>) -> Self {
        Self {
            external_url: external_url.into(),
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }

    /// Override the frame height.
    #[must_use]
    pub fn with_frame_height(mut self, frame_height: u32) -> Self {
        self.frame_height = frame_height;
        self
    }
}

/// A qualification type as described by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationType {
    /// Unique identifier.
    pub qualification_type_id: String,
    /// Creation time.
    pub creation_time: Option<DateTime<Utc>>,
    /// Display name.
    pub name: Option<String>,
    /// Description shown to workers.
    pub description: Option<String>,
    /// Comma-separated search keywords.
    pub keywords: Option<String>,
    /// Whether the type is active.
    pub qualification_type_status: Option<QualificationTypeStatus>,
    /// Seconds a worker must wait before re-requesting.
    pub retry_delay_in_seconds: Option<u64>,
    /// Time limit for the qualification test.
    pub test_duration_in_seconds: Option<u64>,
    /// Whether workers can request the qualification.
    pub is_requestable: Option<bool>,
    /// Whether requests are granted automatically.
    pub auto_granted: Option<bool>,
    /// Value assigned on automatic grant.
    pub auto_granted_value: Option<i32>,
}

/// A qualification held by a worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Qualification {
    /// Qualification type.
    pub qualification_type_id: Option<String>,
    /// The worker holding it.
    pub subject_id: Option<String>,
    /// When it was granted.
    pub grant_time: Option<DateTime<Utc>>,
    /// Integer score.
    pub integer_value: Option<i32>,
    /// Country code for locale qualifications.
    pub locale_country: Option<String>,
    /// Granted or revoked.
    pub status: Option<QualificationStatus>,
}

/// A worker's pending request for a qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationRequest {
    /// Identifier used to grant or reject the request.
    pub qualification_request_id: String,
    /// Requested qualification type.
    pub qualification_type_id: Option<String>,
    /// Requesting worker.
    pub subject_id: Option<String>,
    /// Test document the worker answered.
    pub test: Option<String>,
    /// The worker's answers.
    pub answer: Option<String>,
    /// When the request was submitted.
    pub submit_time: Option<DateTime<Utc>>,
}

/// A HIT as it appears in list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HitSummary {
    /// HIT identifier.
    pub hit_id: String,
    /// HIT type identifier.
    pub hit_type_id: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Creation time.
    pub creation_time: Option<DateTime<Utc>>,
    /// Expiration time.
    pub expiration: Option<DateTime<Utc>>,
    /// Maximum number of assignments.
    pub max_assignments: Option<u32>,
    /// Marketplace status.
    pub hit_status: Option<String>,
    /// Review status.
    pub hit_review_status: Option<String>,
    /// Reward per assignment.
    pub reward: Option<Price>,
}

/// One worker's assignment for a HIT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// Assignment identifier.
    pub assignment_id: String,
    /// Worker who accepted the HIT.
    pub worker_id: String,
    /// Review state.
    pub assignment_status: AssignmentStatus,
    /// HIT the assignment belongs to.
    pub hit_id: Option<String>,
    /// When the worker accepted.
    pub accept_time: Option<DateTime<Utc>>,
    /// When the worker submitted.
    pub submit_time: Option<DateTime<Utc>>,
    /// When it will be approved automatically.
    pub auto_approval_time: Option<DateTime<Utc>>,
    /// When it was approved.
    pub approval_time: Option<DateTime<Utc>>,
    /// When it was rejected.
    pub rejection_time: Option<DateTime<Utc>>,
    /// Submission deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// The worker's answer document.
    pub answer: Option<String>,
    /// Feedback left by the requester.
    pub requester_feedback: Option<String>,
}

/// A bonus paid to a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusPayment {
    /// Paid worker.
    pub worker_id: String,
    /// Assignment the bonus relates to.
    pub assignment_id: Option<String>,
    /// Amount paid.
    pub bonus_amount: Option<Price>,
    /// Reason given to the worker.
    pub reason: Option<String>,
    /// When the bonus was paid.
    pub grant_time: Option<DateTime<Utc>>,
}

/// One value of a requester statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// Day the value applies to.
    pub date: Option<DateTime<Utc>>,
    /// Integer-valued statistics.
    pub long_value: Option<i64>,
    /// Real-valued statistics.
    pub double_value: Option<f64>,
}

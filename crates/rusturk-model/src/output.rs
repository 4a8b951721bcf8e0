//! Typed results for each operation.
//!
//! Status-only operations share [`OperationStatus`]; describe-style
//! operations reuse the record types from [`crate::types`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{
    Assignment, BonusPayment, DataPoint, HitSummary, PageInfo, Price, Qualification,
    QualificationRequest, QualificationType,
};

/// Result of operations that only report whether the request was valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationStatus {
    /// The service's `IsValid` flag.
    pub is_valid: bool,
}

/// Output for `GetAccountBalance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAccountBalanceOutput {
    /// Formatted available balance, e.g. `$10,000.00`.
    pub available_balance: String,
    /// Decimal available amount.
    pub available_amount: Option<String>,
    /// Currency of the balance.
    pub currency_code: Option<String>,
    /// Formatted balance on hold, when reported.
    pub on_hold_balance: Option<String>,
}

/// Output for `UpdateQualificationType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateQualificationTypeOutput {
    /// The service's `IsValid` flag.
    pub is_valid: bool,
    /// The updated type, when echoed back.
    pub qualification_type: Option<QualificationType>,
}

/// Output for `SearchQualificationTypes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQualificationTypesOutput {
    /// The service's `IsValid` flag.
    pub is_valid: bool,
    /// Paging counters.
    pub page: PageInfo,
    /// Matching types, in response order.
    pub qualification_types: Vec<QualificationType>,
}

/// Output for `GetQualificationScore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetQualificationScoreOutput {
    /// The worker's score.
    pub integer_value: i32,
    /// The full qualification record.
    pub qualification: Qualification,
}

/// Output for `GetQualificationRequests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetQualificationRequestsOutput {
    /// The service's `IsValid` flag.
    pub is_valid: bool,
    /// Paging counters.
    pub page: PageInfo,
    /// Pending requests, in response order.
    pub qualification_requests: Vec<QualificationRequest>,
}

/// Output for `GetQualificationsForQualificationType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetQualificationsForQualificationTypeOutput {
    /// The service's `IsValid` flag.
    pub is_valid: bool,
    /// Paging counters.
    pub page: PageInfo,
    /// Granted qualifications, in response order.
    pub qualifications: Vec<Qualification>,
}

/// Output for `CreateHIT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateHitOutput {
    /// The service's `IsValid` flag.
    pub is_valid: bool,
    /// New HIT identifier.
    pub hit_id: String,
    /// HIT type the HIT was registered under.
    pub hit_type_id: String,
}

/// Output for `GetHIT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetHitOutput {
    /// HIT identifier.
    pub hit_id: Option<String>,
    /// HIT type identifier.
    pub hit_type_id: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Keywords.
    pub keywords: Option<String>,
    /// Question document.
    pub question: Option<String>,
    /// Creation time.
    pub creation_time: DateTime<Utc>,
    /// Expiration time.
    pub expiration: Option<DateTime<Utc>>,
    /// Marketplace status.
    pub hit_status: String,
    /// Review status.
    pub hit_review_status: String,
    /// Maximum number of assignments.
    pub max_assignments: Option<u32>,
    /// Reward per assignment.
    pub reward: Price,
    /// Time a worker has to complete an assignment.
    pub assignment_duration_in_seconds: u64,
    /// Delay before submissions are approved automatically.
    pub auto_approval_delay_in_seconds: Option<u64>,
    /// Private requester note.
    pub requester_annotation: Option<String>,
    /// Assignments accepted but not submitted.
    pub number_of_assignments_pending: Option<u32>,
    /// Assignments still available.
    pub number_of_assignments_available: Option<u32>,
    /// Assignments completed.
    pub number_of_assignments_completed: Option<u32>,
}

/// Output for `SearchHITs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHitsOutput {
    /// Paging counters.
    pub page: PageInfo,
    /// HITs, in response order.
    pub hits: Vec<HitSummary>,
}

/// Output for `GetReviewableHITs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetReviewableHitsOutput {
    /// Reviewable HITs across all pages.
    pub total_num_results: u32,
    /// Reviewable HITs on this page.
    pub num_results: Option<u32>,
    /// The page returned.
    pub page_number: Option<u32>,
    /// HIT identifiers, in response order.
    pub hit_ids: Vec<String>,
}

/// Output for `GetHITsForQualificationType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetHitsForQualificationTypeOutput {
    /// Paging counters.
    pub page: PageInfo,
    /// HITs, in response order.
    pub hits: Vec<HitSummary>,
}

/// Output for `GetAssignmentsForHIT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAssignmentsForHitOutput {
    /// Paging counters.
    pub page: PageInfo,
    /// Assignments, in response order.
    pub assignments: Vec<Assignment>,
}

/// Output for `GetBonusPayments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBonusPaymentsOutput {
    /// Paging counters.
    pub page: PageInfo,
    /// Payments, in response order.
    pub bonus_payments: Vec<BonusPayment>,
}

/// Output for `RegisterHITType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterHitTypeOutput {
    /// The service's `IsValid` flag.
    pub is_valid: bool,
    /// Registered HIT type identifier.
    pub hit_type_id: String,
}

/// Output for `GetFileUploadURL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetFileUploadUrlOutput {
    /// Temporary download URL for the uploaded file.
    pub file_upload_url: String,
}

/// Output for `GetRequesterStatistic`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetRequesterStatisticOutput {
    /// Values, in response order.
    pub data_points: Vec<DataPoint>,
}

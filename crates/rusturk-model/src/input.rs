//! Input types for every requester operation.
//!
//! Each input implements [`OperationInput`], which names the remote operation,
//! the typed output it produces, and how it flattens into wire parameters.
//! Optional fields are only transmitted when set.

use crate::operations::MTurkOperation;
use crate::output::{
    CreateHitOutput, GetAccountBalanceOutput, GetAssignmentsForHitOutput, GetBonusPaymentsOutput,
    GetFileUploadUrlOutput, GetHitOutput, GetHitsForQualificationTypeOutput,
    GetQualificationRequestsOutput, GetQualificationScoreOutput,
    GetQualificationsForQualificationTypeOutput, GetRequesterStatisticOutput,
    GetReviewableHitsOutput, OperationStatus, RegisterHitTypeOutput, SearchHitsOutput,
    SearchQualificationTypesOutput, UpdateQualificationTypeOutput,
};
use crate::params::{OperationInput, Parameters};
use crate::types::{
    AssignmentStatus, Money, Paging, QualificationRequestSortProperty, QualificationRequirement,
    QualificationStatus, QualificationType, QualificationTypeSortProperty,
    QualificationTypeStatus, ReviewableHitStatus, SearchHitsSortProperty, SortDirection,
    TimePeriod,
};

/// Reason sent with `BlockWorker` when the caller gives none.
pub const DEFAULT_BLOCK_REASON: &str = "poor performance";

/// Reason sent with `UnblockWorker` when the caller gives none.
pub const DEFAULT_UNBLOCK_REASON: &str = "improved performance";

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// Input for the `GetAccountBalance` operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAccountBalanceInput;

impl OperationInput for GetAccountBalanceInput {
    type Output = GetAccountBalanceOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetAccountBalance;

    fn to_parameters(&self) -> Parameters {
        Parameters::new()
    }
}

/// Input for the `GetRequesterStatistic` operation.
#[derive(Debug, Clone)]
pub struct GetRequesterStatisticInput {
    /// Statistic name, e.g. `NumberAssignmentsApproved`.
    pub statistic: String,
    /// Aggregation window.
    pub time_period: TimePeriod,
    /// Number of days to report; only sent for [`TimePeriod::OneDay`].
    pub count: u32,
}

impl GetRequesterStatisticInput {
    /// Query `statistic` for a single day.
    #[must_use]
    pub fn new(statistic: impl Into<String>) -> Self {
        Self {
            statistic: statistic.into(),
            time_period: TimePeriod::OneDay,
            count: 1,
        }
    }
}

impl OperationInput for GetRequesterStatisticInput {
    type Output = GetRequesterStatisticOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetRequesterStatistic;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("Statistic", &self.statistic)
            .insert("TimePeriod", self.time_period);
        if self.time_period == TimePeriod::OneDay {
            params.insert("Count", self.count);
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Qualification types
// ---------------------------------------------------------------------------

/// Input for the `CreateQualificationType` operation.
#[derive(Debug, Clone)]
pub struct CreateQualificationTypeInput {
    /// Unique display name.
    pub name: String,
    /// Description shown to workers.
    pub description: String,
    /// Initial status.
    pub qualification_type_status: QualificationTypeStatus,
    /// Grant requests automatically.
    pub auto_granted: Option<bool>,
    /// Value assigned on automatic grant.
    pub auto_granted_value: Option<i32>,
    /// Search keywords.
    pub keywords: Option<String>,
    /// Seconds a worker must wait before re-requesting.
    pub retry_delay_in_seconds: Option<u64>,
    /// Qualification test document.
    pub test: Option<String>,
    /// Answer key for the test; only sent together with `test`.
    pub answer_key: Option<String>,
    /// Time limit for the test.
    pub test_duration_in_seconds: Option<u64>,
}

impl CreateQualificationTypeInput {
    /// An active, auto-granted type with value 70.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            qualification_type_status: QualificationTypeStatus::Active,
            auto_granted: Some(true),
            auto_granted_value: Some(70),
            keywords: None,
            retry_delay_in_seconds: None,
            test: None,
            answer_key: None,
            test_duration_in_seconds: None,
        }
    }
}

impl OperationInput for CreateQualificationTypeInput {
    type Output = QualificationType;
    const OPERATION: MTurkOperation = MTurkOperation::CreateQualificationType;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("Name", &self.name)
            .insert("Description", &self.description)
            .insert("QualificationTypeStatus", self.qualification_type_status)
            .insert_opt("AutoGranted", self.auto_granted)
            .insert_opt("AutoGrantedValue", self.auto_granted_value)
            .insert_opt("Keywords", self.keywords.as_deref())
            .insert_opt("RetryDelayInSeconds", self.retry_delay_in_seconds)
            .insert_opt("TestDurationInSeconds", self.test_duration_in_seconds);
        if let Some(test) = &self.test {
            params
                .insert("Test", test)
                .insert_opt("AnswerKey", self.answer_key.as_deref());
        }
        params
    }
}

/// Input for the `UpdateQualificationType` operation.
#[derive(Debug, Clone, Default)]
pub struct UpdateQualificationTypeInput {
    /// Type to update.
    pub qualification_type_id: String,
    /// New retry delay.
    pub retry_delay_in_seconds: Option<u64>,
    /// New status.
    pub qualification_type_status: Option<QualificationTypeStatus>,
    /// New description.
    pub description: Option<String>,
    /// New test document.
    pub test: Option<String>,
    /// New answer key; only sent together with `test`.
    pub answer_key: Option<String>,
    /// New test time limit.
    pub test_duration_in_seconds: Option<u64>,
    /// Change automatic granting.
    pub auto_granted: Option<bool>,
    /// New automatic grant value.
    pub auto_granted_value: Option<i32>,
}

impl UpdateQualificationTypeInput {
    /// An update that changes nothing yet.
    #[must_use]
    pub fn new(qualification_type_id: impl Into<String>) -> Self {
        Self {
            qualification_type_id: qualification_type_id.into(),
            ..Self::default()
        }
    }
}

impl OperationInput for UpdateQualificationTypeInput {
    type Output = UpdateQualificationTypeOutput;
    const OPERATION: MTurkOperation = MTurkOperation::UpdateQualificationType;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("QualificationTypeId", &self.qualification_type_id)
            .insert_opt("RetryDelayInSeconds", self.retry_delay_in_seconds)
            .insert_opt("QualificationTypeStatus", self.qualification_type_status)
            .insert_opt("Description", self.description.as_deref())
            .insert_opt("TestDurationInSeconds", self.test_duration_in_seconds)
            .insert_opt("AutoGranted", self.auto_granted)
            .insert_opt("AutoGrantedValue", self.auto_granted_value);
        if let Some(test) = &self.test {
            params
                .insert("Test", test)
                .insert_opt("AnswerKey", self.answer_key.as_deref());
        }
        params
    }
}

/// Input for the `DisposeQualificationType` operation.
#[derive(Debug, Clone)]
pub struct DisposeQualificationTypeInput {
    /// Type to dispose of.
    pub qualification_type_id: String,
}

impl OperationInput for DisposeQualificationTypeInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::DisposeQualificationType;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("QualificationTypeId", &self.qualification_type_id);
        params
    }
}

/// Input for the `SearchQualificationTypes` operation.
#[derive(Debug, Clone)]
pub struct SearchQualificationTypesInput {
    /// Free-text query.
    pub query: Option<String>,
    /// Sort key.
    pub sort_property: Option<QualificationTypeSortProperty>,
    /// Sort order.
    pub sort_direction: Option<SortDirection>,
    /// Paging controls.
    pub paging: Paging,
    /// Only types workers can request.
    pub must_be_requestable: bool,
    /// Only types owned by the requester.
    pub must_be_owned_by_caller: bool,
}

impl Default for SearchQualificationTypesInput {
    fn default() -> Self {
        Self {
            query: None,
            sort_property: None,
            sort_direction: None,
            paging: Paging::default(),
            must_be_requestable: true,
            must_be_owned_by_caller: true,
        }
    }
}

impl OperationInput for SearchQualificationTypesInput {
    type Output = SearchQualificationTypesOutput;
    const OPERATION: MTurkOperation = MTurkOperation::SearchQualificationTypes;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert_paging(self.paging)
            .insert("MustBeRequestable", self.must_be_requestable)
            .insert("MustBeOwnedByCaller", self.must_be_owned_by_caller)
            .insert_opt("Query", self.query.as_deref())
            .insert_opt("SortProperty", self.sort_property)
            .insert_opt("SortDirection", self.sort_direction);
        params
    }
}

/// Input for the `GetQualificationType` operation.
#[derive(Debug, Clone)]
pub struct GetQualificationTypeInput {
    /// Type to describe.
    pub qualification_type_id: String,
}

impl OperationInput for GetQualificationTypeInput {
    type Output = QualificationType;
    const OPERATION: MTurkOperation = MTurkOperation::GetQualificationType;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("QualificationTypeId", &self.qualification_type_id);
        params
    }
}

// ---------------------------------------------------------------------------
// Qualifications held by workers
// ---------------------------------------------------------------------------

/// Input for the `GetQualificationScore` operation.
#[derive(Debug, Clone)]
pub struct GetQualificationScoreInput {
    /// Qualification type.
    pub qualification_type_id: String,
    /// Worker whose score is read.
    pub subject_id: String,
}

impl OperationInput for GetQualificationScoreInput {
    type Output = GetQualificationScoreOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetQualificationScore;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("QualificationTypeId", &self.qualification_type_id)
            .insert("SubjectId", &self.subject_id);
        params
    }
}

/// Input for the `UpdateQualificationScore` operation.
#[derive(Debug, Clone)]
pub struct UpdateQualificationScoreInput {
    /// Qualification type.
    pub qualification_type_id: String,
    /// Worker whose score changes.
    pub subject_id: String,
    /// New score.
    pub integer_value: i32,
}

impl OperationInput for UpdateQualificationScoreInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::UpdateQualificationScore;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("QualificationTypeId", &self.qualification_type_id)
            .insert("SubjectId", &self.subject_id)
            .insert("IntegerValue", self.integer_value);
        params
    }
}

/// Input for the `AssignQualification` operation.
#[derive(Debug, Clone)]
pub struct AssignQualificationInput {
    /// Qualification type to assign.
    pub qualification_type_id: String,
    /// Receiving worker.
    pub worker_id: String,
    /// Initial score.
    pub integer_value: Option<i32>,
    /// Email the worker about the grant.
    pub send_notification: Option<bool>,
}

impl AssignQualificationInput {
    /// Assign with the type's default score and no notification preference.
    #[must_use]
    pub fn new(qualification_type_id: impl Into<String>, worker_id: impl Into<String>) -> Self {
        Self {
            qualification_type_id: qualification_type_id.into(),
            worker_id: worker_id.into(),
            integer_value: None,
            send_notification: None,
        }
    }
}

impl OperationInput for AssignQualificationInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::AssignQualification;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("QualificationTypeId", &self.qualification_type_id)
            .insert("WorkerId", &self.worker_id)
            .insert_opt("IntegerValue", self.integer_value)
            .insert_opt("SendNotification", self.send_notification);
        params
    }
}

/// Input for the `GrantQualification` operation.
#[derive(Debug, Clone)]
pub struct GrantQualificationInput {
    /// Pending request to grant.
    pub qualification_request_id: String,
    /// Score to grant.
    pub integer_value: Option<i32>,
}

impl GrantQualificationInput {
    /// Grant with score 1.
    #[must_use]
    pub fn new(qualification_request_id: impl Into<String>) -> Self {
        Self {
            qualification_request_id: qualification_request_id.into(),
            integer_value: Some(1),
        }
    }
}

impl OperationInput for GrantQualificationInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::GrantQualification;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("QualificationRequestId", &self.qualification_request_id)
            .insert_opt("IntegerValue", self.integer_value);
        params
    }
}

/// Input for the `RevokeQualification` operation.
#[derive(Debug, Clone)]
pub struct RevokeQualificationInput {
    /// Worker losing the qualification.
    pub subject_id: String,
    /// Qualification type to revoke.
    pub qualification_type_id: String,
    /// Message for the worker.
    pub reason: Option<String>,
}

impl OperationInput for RevokeQualificationInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::RevokeQualification;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("SubjectId", &self.subject_id)
            .insert("QualificationTypeId", &self.qualification_type_id)
            .insert_opt("Reason", self.reason.as_deref());
        params
    }
}

/// Input for the `GetQualificationRequests` operation.
#[derive(Debug, Clone, Default)]
pub struct GetQualificationRequestsInput {
    /// Restrict to one qualification type.
    pub qualification_type_id: Option<String>,
    /// Sort key.
    pub sort_property: Option<QualificationRequestSortProperty>,
    /// Sort order.
    pub sort_direction: Option<SortDirection>,
    /// Paging controls.
    pub paging: Paging,
}

impl OperationInput for GetQualificationRequestsInput {
    type Output = GetQualificationRequestsOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetQualificationRequests;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert_paging(self.paging)
            .insert_opt("QualificationTypeId", self.qualification_type_id.as_deref())
            .insert_opt("SortProperty", self.sort_property)
            .insert_opt("SortDirection", self.sort_direction);
        params
    }
}

/// Input for the `RejectQualificationRequest` operation.
#[derive(Debug, Clone)]
pub struct RejectQualificationRequestInput {
    /// Pending request to reject.
    pub qualification_request_id: String,
    /// Message for the worker.
    pub reason: Option<String>,
}

impl OperationInput for RejectQualificationRequestInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::RejectQualificationRequest;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("QualificationRequestId", &self.qualification_request_id)
            .insert_opt("Reason", self.reason.as_deref());
        params
    }
}

/// Input for the `GetQualificationsForQualificationType` operation.
#[derive(Debug, Clone)]
pub struct GetQualificationsForQualificationTypeInput {
    /// Qualification type.
    pub qualification_type_id: String,
    /// Restrict to granted or revoked qualifications.
    pub status: Option<QualificationStatus>,
    /// Paging controls.
    pub paging: Paging,
}

impl GetQualificationsForQualificationTypeInput {
    /// First page of every qualification of a type.
    #[must_use]
    pub fn new(qualification_type_id: impl Into<String>) -> Self {
        Self {
            qualification_type_id: qualification_type_id.into(),
            status: None,
            paging: Paging::default(),
        }
    }
}

impl OperationInput for GetQualificationsForQualificationTypeInput {
    type Output = GetQualificationsForQualificationTypeOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetQualificationsForQualificationType;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("QualificationTypeId", &self.qualification_type_id)
            .insert_opt("Status", self.status)
            .insert_paging(self.paging);
        params
    }
}

// ---------------------------------------------------------------------------
// Workers
// ---------------------------------------------------------------------------

/// Input for the `BlockWorker` operation.
#[derive(Debug, Clone)]
pub struct BlockWorkerInput {
    /// Worker to block.
    pub worker_id: String,
    /// Reason sent unchanged when given; [`DEFAULT_BLOCK_REASON`] otherwise.
    pub reason: Option<String>,
}

impl OperationInput for BlockWorkerInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::BlockWorker;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("WorkerId", &self.worker_id).insert(
            "Reason",
            self.reason.as_deref().unwrap_or(DEFAULT_BLOCK_REASON),
        );
        params
    }
}

/// Input for the `UnblockWorker` operation.
#[derive(Debug, Clone)]
pub struct UnblockWorkerInput {
    /// Worker to unblock.
    pub worker_id: String,
    /// Reason sent unchanged when given; [`DEFAULT_UNBLOCK_REASON`] otherwise.
    pub reason: Option<String>,
}

impl OperationInput for UnblockWorkerInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::UnblockWorker;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("WorkerId", &self.worker_id).insert(
            "Reason",
            self.reason.as_deref().unwrap_or(DEFAULT_UNBLOCK_REASON),
        );
        params
    }
}

/// Input for the `NotifyWorkers` operation.
#[derive(Debug, Clone)]
pub struct NotifyWorkersInput {
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message_text: String,
    /// Recipients, sent as `WorkerId.1`, `WorkerId.2`, ...
    pub worker_ids: Vec<String>,
}

impl OperationInput for NotifyWorkersInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::NotifyWorkers;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("Subject", &self.subject)
            .insert("MessageText", &self.message_text);
        for (i, worker_id) in self.worker_ids.iter().enumerate() {
            params.insert_indexed("WorkerId", i, None, worker_id);
        }
        params
    }
}

// ---------------------------------------------------------------------------
// HITs
// ---------------------------------------------------------------------------

/// Input for the `CreateHIT` operation.
#[derive(Debug, Clone)]
pub struct CreateHitInput {
    /// Title shown to workers.
    pub title: String,
    /// Description shown to workers.
    pub description: String,
    /// Question document, e.g. from an external question.
    pub question: String,
    /// Reward per assignment.
    pub reward: Money,
    /// Time a worker has to complete an assignment.
    pub assignment_duration_in_seconds: u64,
    /// Time the HIT stays available.
    pub lifetime_in_seconds: u64,
    /// Existing HIT type to register under.
    pub hit_type_id: Option<String>,
    /// Maximum number of assignments.
    pub max_assignments: Option<u32>,
    /// Private requester note.
    pub requester_annotation: Option<String>,
    /// Search keywords.
    pub keywords: Option<String>,
    /// Delay before submissions are approved automatically.
    pub auto_approval_delay_in_seconds: Option<u64>,
    /// Worker requirements, sent as `QualificationRequirement.N.*`.
    pub qualification_requirements: Vec<QualificationRequirement>,
}

impl CreateHitInput {
    /// A HIT living two days, with one-hour assignments auto-approved after twelve hours.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        question: impl Into<String>,
        reward: Money,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            question: question.into(),
            reward,
            assignment_duration_in_seconds: 3600,
            lifetime_in_seconds: 60 * 60 * 24 * 2,
            hit_type_id: None,
            max_assignments: None,
            requester_annotation: None,
            keywords: None,
            auto_approval_delay_in_seconds: Some(12 * 60 * 60),
            qualification_requirements: Vec::new(),
        }
    }
}

impl OperationInput for CreateHitInput {
    type Output = CreateHitOutput;
    const OPERATION: MTurkOperation = MTurkOperation::CreateHIT;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("Title", &self.title)
            .insert("Description", &self.description)
            .insert("Question", &self.question)
            .insert_money("Reward", &self.reward)
            .insert(
                "AssignmentDurationInSeconds",
                self.assignment_duration_in_seconds,
            )
            .insert("LifetimeInSeconds", self.lifetime_in_seconds)
            .insert_opt("HITTypeId", self.hit_type_id.as_deref())
            .insert_opt("MaxAssignments", self.max_assignments)
            .insert_opt("RequesterAnnotation", self.requester_annotation.as_deref())
            .insert_opt("Keywords", self.keywords.as_deref())
            .insert_opt(
                "AutoApprovalDelayInSeconds",
                self.auto_approval_delay_in_seconds,
            )
            .insert_requirements(&self.qualification_requirements);
        params
    }
}

/// Input for the `GetHIT` operation.
#[derive(Debug, Clone)]
pub struct GetHitInput {
    /// HIT to describe.
    pub hit_id: String,
}

impl OperationInput for GetHitInput {
    type Output = GetHitOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetHIT;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("HITId", &self.hit_id);
        params
    }
}

/// Input for the `ExtendHIT` operation.
#[derive(Debug, Clone)]
pub struct ExtendHitInput {
    /// HIT to extend.
    pub hit_id: String,
    /// Extra assignments.
    pub max_assignments_increment: Option<u32>,
    /// Extra lifetime.
    pub expiration_increment_in_seconds: Option<u64>,
}

impl OperationInput for ExtendHitInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::ExtendHIT;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("HITId", &self.hit_id)
            .insert_opt("MaxAssignmentsIncrement", self.max_assignments_increment)
            .insert_opt(
                "ExpirationIncrementInSeconds",
                self.expiration_increment_in_seconds,
            );
        params
    }
}

/// Input for the `DisposeHIT` operation.
#[derive(Debug, Clone)]
pub struct DisposeHitInput {
    /// HIT to dispose of.
    pub hit_id: String,
}

impl OperationInput for DisposeHitInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::DisposeHIT;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("HITId", &self.hit_id);
        params
    }
}

/// Input for the `DisableHIT` operation.
#[derive(Debug, Clone)]
pub struct DisableHitInput {
    /// HIT to disable.
    pub hit_id: String,
}

impl OperationInput for DisableHitInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::DisableHIT;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("HITId", &self.hit_id);
        params
    }
}

/// Input for the `ForceExpireHIT` operation.
#[derive(Debug, Clone)]
pub struct ForceExpireHitInput {
    /// HIT to expire.
    pub hit_id: String,
}

impl OperationInput for ForceExpireHitInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::ForceExpireHIT;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("HITId", &self.hit_id);
        params
    }
}

/// Input for the `ChangeHITTypeOfHIT` operation.
#[derive(Debug, Clone)]
pub struct ChangeHitTypeOfHitInput {
    /// HIT to move.
    pub hit_id: String,
    /// Destination HIT type.
    pub hit_type_id: String,
}

impl OperationInput for ChangeHitTypeOfHitInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::ChangeHITTypeOfHIT;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("HITId", &self.hit_id)
            .insert("HITTypeId", &self.hit_type_id);
        params
    }
}

/// Input for the `SetHITAsReviewing` operation.
#[derive(Debug, Clone)]
pub struct SetHitAsReviewingInput {
    /// HIT to mark.
    pub hit_id: String,
    /// Move the HIT back to `Reviewable` instead.
    pub revert: bool,
}

impl OperationInput for SetHitAsReviewingInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::SetHITAsReviewing;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("HITId", &self.hit_id)
            .insert("Revert", self.revert);
        params
    }
}

/// Input for the `SearchHITs` operation.
#[derive(Debug, Clone, Copy)]
pub struct SearchHitsInput {
    /// Paging controls.
    pub paging: Paging,
    /// Sort order.
    pub sort_direction: SortDirection,
    /// Sort key.
    pub sort_property: SearchHitsSortProperty,
}

impl Default for SearchHitsInput {
    fn default() -> Self {
        Self {
            paging: Paging::default(),
            sort_direction: SortDirection::Descending,
            sort_property: SearchHitsSortProperty::Expiration,
        }
    }
}

impl OperationInput for SearchHitsInput {
    type Output = SearchHitsOutput;
    const OPERATION: MTurkOperation = MTurkOperation::SearchHITs;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert_paging(self.paging)
            .insert("SortDirection", self.sort_direction)
            .insert("SortProperty", self.sort_property);
        params
    }
}

/// Input for the `GetReviewableHITs` operation.
#[derive(Debug, Clone, Default)]
pub struct GetReviewableHitsInput {
    /// Restrict to one HIT type.
    pub hit_type_id: Option<String>,
    /// Restrict to one review state.
    pub status: Option<ReviewableHitStatus>,
    /// Paging controls.
    pub paging: Paging,
}

impl OperationInput for GetReviewableHitsInput {
    type Output = GetReviewableHitsOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetReviewableHITs;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert_paging(self.paging)
            .insert_opt("HITTypeId", self.hit_type_id.as_deref())
            .insert_opt("Status", self.status);
        params
    }
}

/// Input for the `GetHITsForQualificationType` operation.
#[derive(Debug, Clone)]
pub struct GetHitsForQualificationTypeInput {
    /// Qualification type the HITs require.
    pub qualification_type_id: String,
    /// Paging controls.
    pub paging: Paging,
}

impl OperationInput for GetHitsForQualificationTypeInput {
    type Output = GetHitsForQualificationTypeOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetHITsForQualificationType;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("QualificationTypeId", &self.qualification_type_id)
            .insert_paging(self.paging);
        params
    }
}

/// Input for the `RegisterHITType` operation.
#[derive(Debug, Clone)]
pub struct RegisterHitTypeInput {
    /// Title shown to workers.
    pub title: String,
    /// Description shown to workers.
    pub description: String,
    /// Reward per assignment.
    pub reward: Money,
    /// Time a worker has to complete an assignment.
    pub assignment_duration_in_seconds: u64,
    /// Search keywords.
    pub keywords: Option<String>,
    /// Delay before submissions are approved automatically.
    pub auto_approval_delay_in_seconds: Option<u64>,
    /// Worker requirements, sent as `QualificationRequirement.N.*`.
    pub qualification_requirements: Vec<QualificationRequirement>,
}

impl RegisterHitTypeInput {
    /// A HIT type with one-hour assignments.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, reward: Money) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            reward,
            assignment_duration_in_seconds: 3600,
            keywords: None,
            auto_approval_delay_in_seconds: None,
            qualification_requirements: Vec::new(),
        }
    }
}

impl OperationInput for RegisterHitTypeInput {
    type Output = RegisterHitTypeOutput;
    const OPERATION: MTurkOperation = MTurkOperation::RegisterHITType;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("Title", &self.title)
            .insert("Description", &self.description)
            .insert_money("Reward", &self.reward)
            .insert(
                "AssignmentDurationInSeconds",
                self.assignment_duration_in_seconds,
            )
            .insert_opt("Keywords", self.keywords.as_deref())
            .insert_opt(
                "AutoApprovalDelayInSeconds",
                self.auto_approval_delay_in_seconds,
            )
            .insert_requirements(&self.qualification_requirements);
        params
    }
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

/// Input for the `GetAssignmentsForHIT` operation.
#[derive(Debug, Clone)]
pub struct GetAssignmentsForHitInput {
    /// HIT whose assignments are listed.
    pub hit_id: String,
    /// Restrict to one review state.
    pub assignment_status: Option<AssignmentStatus>,
    /// Paging controls.
    pub paging: Paging,
}

impl GetAssignmentsForHitInput {
    /// First page of every assignment of a HIT.
    #[must_use]
    pub fn new(hit_id: impl Into<String>) -> Self {
        Self {
            hit_id: hit_id.into(),
            assignment_status: None,
            paging: Paging::default(),
        }
    }
}

impl OperationInput for GetAssignmentsForHitInput {
    type Output = GetAssignmentsForHitOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetAssignmentsForHIT;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("HITId", &self.hit_id)
            .insert_opt("AssignmentStatus", self.assignment_status)
            .insert_paging(self.paging);
        params
    }
}

/// Input for the `ApproveAssignment` operation.
#[derive(Debug, Clone)]
pub struct ApproveAssignmentInput {
    /// Assignment to approve.
    pub assignment_id: String,
    /// Message for the worker.
    pub requester_feedback: Option<String>,
}

impl OperationInput for ApproveAssignmentInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::ApproveAssignment;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("AssignmentId", &self.assignment_id)
            .insert_opt("RequesterFeedback", self.requester_feedback.as_deref());
        params
    }
}

/// Input for the `RejectAssignment` operation.
#[derive(Debug, Clone)]
pub struct RejectAssignmentInput {
    /// Assignment to reject.
    pub assignment_id: String,
    /// Message for the worker.
    pub requester_feedback: Option<String>,
}

impl OperationInput for RejectAssignmentInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::RejectAssignment;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("AssignmentId", &self.assignment_id)
            .insert_opt("RequesterFeedback", self.requester_feedback.as_deref());
        params
    }
}

/// Input for the `GetFileUploadURL` operation.
#[derive(Debug, Clone)]
pub struct GetFileUploadUrlInput {
    /// Assignment holding the upload.
    pub assignment_id: String,
    /// Question the file answers.
    pub question_identifier: String,
}

impl OperationInput for GetFileUploadUrlInput {
    type Output = GetFileUploadUrlOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetFileUploadURL;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("AssignmentId", &self.assignment_id)
            .insert("QuestionIdentifier", &self.question_identifier);
        params
    }
}

// ---------------------------------------------------------------------------
// Bonuses
// ---------------------------------------------------------------------------

/// Input for the `GrantBonus` operation.
#[derive(Debug, Clone)]
pub struct GrantBonusInput {
    /// Worker to pay.
    pub worker_id: String,
    /// Assignment the bonus is for.
    pub assignment_id: String,
    /// Amount, sent as `BonusAmount.1.*`.
    pub bonus_amount: Money,
    /// Message for the worker.
    pub reason: String,
}

impl OperationInput for GrantBonusInput {
    type Output = OperationStatus;
    const OPERATION: MTurkOperation = MTurkOperation::GrantBonus;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params
            .insert("WorkerId", &self.worker_id)
            .insert("AssignmentId", &self.assignment_id)
            .insert_money("BonusAmount", &self.bonus_amount)
            .insert("Reason", &self.reason);
        params
    }
}

/// What `GetBonusPayments` lists payments for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BonusPaymentTarget {
    /// Every payment for assignments of a HIT.
    Hit(String),
    /// Payments for one assignment.
    Assignment(String),
}

/// Input for the `GetBonusPayments` operation.
#[derive(Debug, Clone)]
pub struct GetBonusPaymentsInput {
    /// HIT or assignment to list payments for.
    pub target: BonusPaymentTarget,
    /// Paging controls.
    pub paging: Paging,
}

impl OperationInput for GetBonusPaymentsInput {
    type Output = GetBonusPaymentsOutput;
    const OPERATION: MTurkOperation = MTurkOperation::GetBonusPayments;

    fn to_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        match &self.target {
            BonusPaymentTarget::Hit(hit_id) => params.insert("HITId", hit_id),
            BonusPaymentTarget::Assignment(assignment_id) => {
                params.insert("AssignmentId", assignment_id)
            }
        };
        params.insert_paging(self.paging);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Comparator, qualification_requirement};

    #[test]
    fn test_should_encode_create_hit_with_two_requirements() {
        let mut input = CreateHitInput::new(
            "Tag images",
            "Tag each image",
            "<ExternalQuestion/>",
            Money::usd("0.10"),
        );
        input.qualification_requirements = vec![
            qualification_requirement("QUAL_A", None),
            QualificationRequirement::new("QUAL_B", Comparator::EqualTo).with_integer_value(1),
        ];
        let params = input.to_parameters();

        assert_eq!(
            params.get("QualificationRequirement.1.QualificationTypeId"),
            Some("QUAL_A")
        );
        assert_eq!(
            params.get("QualificationRequirement.1.Comparator"),
            Some("GreaterThan")
        );
        assert_eq!(
            params.get("QualificationRequirement.2.QualificationTypeId"),
            Some("QUAL_B")
        );
        assert_eq!(
            params.get("QualificationRequirement.2.Comparator"),
            Some("EqualTo")
        );
        assert_eq!(params.get("Reward.1.Amount"), Some("0.10"));
        assert_eq!(params.get("Reward.1.CurrencyCode"), Some("USD"));
        assert_eq!(params.get("LifetimeInSeconds"), Some("172800"));
        assert_eq!(params.get("AssignmentDurationInSeconds"), Some("3600"));
        assert_eq!(params.get("AutoApprovalDelayInSeconds"), Some("43200"));
        assert!(!params.contains_key("HITTypeId"));
        assert!(!params.contains_key("MaxAssignments"));
    }

    #[test]
    fn test_should_pass_caller_block_reasons_through_unchanged() {
        let block = BlockWorkerInput {
            worker_id: "W1".to_owned(),
            reason: Some("copied answers".to_owned()),
        };
        assert_eq!(block.to_parameters().get("Reason"), Some("copied answers"));

        let unblock = UnblockWorkerInput {
            worker_id: "W1".to_owned(),
            reason: Some("appeal accepted".to_owned()),
        };
        assert_eq!(
            unblock.to_parameters().get("Reason"),
            Some("appeal accepted")
        );
    }

    #[test]
    fn test_should_use_default_block_reasons_when_absent() {
        let block = BlockWorkerInput {
            worker_id: "W1".to_owned(),
            reason: None,
        };
        assert_eq!(block.to_parameters().get("Reason"), Some(DEFAULT_BLOCK_REASON));

        let unblock = UnblockWorkerInput {
            worker_id: "W1".to_owned(),
            reason: None,
        };
        assert_eq!(
            unblock.to_parameters().get("Reason"),
            Some(DEFAULT_UNBLOCK_REASON)
        );
    }

    #[test]
    fn test_should_send_hit_id_for_change_hit_type() {
        let params = ChangeHitTypeOfHitInput {
            hit_id: "HIT1".to_owned(),
            hit_type_id: "TYPE2".to_owned(),
        }
        .to_parameters();
        assert_eq!(params.get("HITId"), Some("HIT1"));
        assert_eq!(params.get("HITTypeId"), Some("TYPE2"));
    }

    #[test]
    fn test_should_index_notify_worker_ids() {
        let params = NotifyWorkersInput {
            subject: "Hello".to_owned(),
            message_text: "Thanks".to_owned(),
            worker_ids: vec!["W1".to_owned(), "W2".to_owned(), "W3".to_owned()],
        }
        .to_parameters();
        assert_eq!(params.get("WorkerId.1"), Some("W1"));
        assert_eq!(params.get("WorkerId.2"), Some("W2"));
        assert_eq!(params.get("WorkerId.3"), Some("W3"));
        assert!(!params.contains_key("WorkerId.0"));
        assert!(!params.contains_key("WorkerId.4"));
    }

    #[test]
    fn test_should_send_count_only_for_one_day() {
        let mut input = GetRequesterStatisticInput::new("NumberHITsCreated");
        input.count = 7;
        let params = input.to_parameters();
        assert_eq!(params.get("TimePeriod"), Some("OneDay"));
        assert_eq!(params.get("Count"), Some("7"));

        input.time_period = TimePeriod::ThirtyDays;
        let params = input.to_parameters();
        assert_eq!(params.get("TimePeriod"), Some("ThirtyDays"));
        assert!(!params.contains_key("Count"));
    }

    #[test]
    fn test_should_send_answer_key_only_with_test() {
        let mut input = UpdateQualificationTypeInput::new("Q1");
        input.answer_key = Some("<AnswerKey/>".to_owned());
        input.auto_granted_value = Some(90);
        let params = input.to_parameters();
        assert!(!params.contains_key("AnswerKey"));
        assert_eq!(params.get("AutoGrantedValue"), Some("90"));

        input.test = Some("<QuestionForm/>".to_owned());
        let params = input.to_parameters();
        assert_eq!(params.get("Test"), Some("<QuestionForm/>"));
        assert_eq!(params.get("AnswerKey"), Some("<AnswerKey/>"));
    }

    #[test]
    fn test_should_default_create_qualification_type() {
        let params = CreateQualificationTypeInput::new("Grammar", "Proofreading test").to_parameters();
        assert_eq!(params.get("Name"), Some("Grammar"));
        assert_eq!(params.get("QualificationTypeStatus"), Some("Active"));
        assert_eq!(params.get("AutoGranted"), Some("true"));
        assert_eq!(params.get("AutoGrantedValue"), Some("70"));
    }

    #[test]
    fn test_should_send_auto_granted_value_without_auto_granted_flag() {
        let mut input = CreateQualificationTypeInput::new("Grammar", "Proofreading test");
        input.auto_granted = None;
        input.auto_granted_value = Some(85);
        let params = input.to_parameters();
        assert!(!params.contains_key("AutoGranted"));
        assert_eq!(params.get("AutoGrantedValue"), Some("85"));

        input.auto_granted_value = None;
        assert!(!input.to_parameters().contains_key("AutoGrantedValue"));
    }

    #[test]
    fn test_should_encode_search_defaults() {
        let params = SearchHitsInput::default().to_parameters();
        assert_eq!(params.get("SortDirection"), Some("Descending"));
        assert_eq!(params.get("SortProperty"), Some("Expiration"));
        assert_eq!(params.get("PageSize"), Some("100"));

        let params = SearchQualificationTypesInput::default().to_parameters();
        assert_eq!(params.get("MustBeRequestable"), Some("true"));
        assert_eq!(params.get("MustBeOwnedByCaller"), Some("true"));
        assert!(!params.contains_key("Query"));
    }

    #[test]
    fn test_should_encode_bonus_amount_and_target() {
        let params = GrantBonusInput {
            worker_id: "W1".to_owned(),
            assignment_id: "A1".to_owned(),
            bonus_amount: Money::usd_cents(5),
            reason: "great work".to_owned(),
        }
        .to_parameters();
        assert_eq!(params.get("BonusAmount.1.Amount"), Some("0.05"));
        assert_eq!(params.get("BonusAmount.1.CurrencyCode"), Some("USD"));

        let params = GetBonusPaymentsInput {
            target: BonusPaymentTarget::Assignment("A1".to_owned()),
            paging: Paging::default(),
        }
        .to_parameters();
        assert_eq!(params.get("AssignmentId"), Some("A1"));
        assert!(!params.contains_key("HITId"));
    }

    #[test]
    fn test_should_encode_register_hit_type_requirements() {
        let mut input = RegisterHitTypeInput::new("Survey", "Fill a survey", Money::usd("0.01"));
        input.qualification_requirements = vec![qualification_requirement("Q1", None)];
        let params = input.to_parameters();
        assert_eq!(
            params.get("QualificationRequirement.1.IntegerValue"),
            Some("50")
        );
        assert!(!params.contains_key("QualificationRequirement"));
    }

    #[test]
    fn test_should_name_operations() {
        assert_eq!(GetAccountBalanceInput::OPERATION.as_str(), "GetAccountBalance");
        assert_eq!(SetHitAsReviewingInput::OPERATION.as_str(), "SetHITAsReviewing");
        assert!(GetAccountBalanceInput.to_parameters().is_empty());
    }
}

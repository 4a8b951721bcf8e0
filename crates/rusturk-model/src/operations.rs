//! Requester API operation enum.

use std::fmt;

/// All supported requester API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MTurkOperation {
    // Account
    /// Query the requester's available balance.
    GetAccountBalance,
    /// Query a requester statistic over a time period.
    GetRequesterStatistic,

    // Qualification types
    /// Create a qualification type.
    CreateQualificationType,
    /// Update an existing qualification type.
    UpdateQualificationType,
    /// Dispose of a qualification type.
    DisposeQualificationType,
    /// Search qualification types.
    SearchQualificationTypes,
    /// Describe a qualification type.
    GetQualificationType,

    // Qualifications held by workers
    /// Read a worker's score for a qualification type.
    GetQualificationScore,
    /// Change a worker's score for a qualification type.
    UpdateQualificationScore,
    /// Assign a qualification to a worker directly.
    AssignQualification,
    /// Grant a pending qualification request.
    GrantQualification,
    /// Revoke a worker's qualification.
    RevokeQualification,
    /// List pending qualification requests.
    GetQualificationRequests,
    /// Reject a pending qualification request.
    RejectQualificationRequest,
    /// List the qualifications granted for a qualification type.
    GetQualificationsForQualificationType,

    // Workers
    /// Block a worker from the requester's HITs.
    BlockWorker,
    /// Lift a worker block.
    UnblockWorker,
    /// Send a message to a set of workers.
    NotifyWorkers,

    // HITs
    /// Create a HIT.
    CreateHIT,
    /// Describe a HIT.
    GetHIT,
    /// Add assignments or lifetime to a HIT.
    ExtendHIT,
    /// Dispose of a reviewed HIT.
    DisposeHIT,
    /// Remove a HIT from the marketplace and approve its submissions.
    DisableHIT,
    /// Expire a HIT immediately.
    ForceExpireHIT,
    /// Move a HIT to a different HIT type.
    ChangeHITTypeOfHIT,
    /// Mark a reviewable HIT as being reviewed, or revert it.
    SetHITAsReviewing,
    /// Search the requester's HITs.
    SearchHITs,
    /// List HITs awaiting review.
    GetReviewableHITs,
    /// List HITs that use a qualification type.
    GetHITsForQualificationType,
    /// Register a HIT type.
    RegisterHITType,

    // Assignments
    /// List the assignments of a HIT.
    GetAssignmentsForHIT,
    /// Approve a submitted assignment.
    ApproveAssignment,
    /// Reject a submitted assignment.
    RejectAssignment,
    /// Get a temporary URL for an uploaded answer file.
    GetFileUploadURL,

    // Bonuses
    /// Pay a bonus to a worker.
    GrantBonus,
    /// List bonus payments for a HIT or assignment.
    GetBonusPayments,
}

impl MTurkOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 36] = [
        Self::GetAccountBalance,
        Self::GetRequesterStatistic,
        Self::CreateQualificationType,
        Self::UpdateQualificationType,
        Self::DisposeQualificationType,
        Self::SearchQualificationTypes,
        Self::GetQualificationType,
        Self::GetQualificationScore,
        Self::UpdateQualificationScore,
        Self::AssignQualification,
        Self::GrantQualification,
        Self::RevokeQualification,
        Self::GetQualificationRequests,
        Self::RejectQualificationRequest,
        Self::GetQualificationsForQualificationType,
        Self::BlockWorker,
        Self::UnblockWorker,
        Self::NotifyWorkers,
        Self::CreateHIT,
        Self::GetHIT,
        Self::ExtendHIT,
        Self::DisposeHIT,
        Self::DisableHIT,
        Self::ForceExpireHIT,
        Self::ChangeHITTypeOfHIT,
        Self::SetHITAsReviewing,
        Self::SearchHITs,
        Self::GetReviewableHITs,
        Self::GetHITsForQualificationType,
        Self::RegisterHITType,
        Self::GetAssignmentsForHIT,
        Self::ApproveAssignment,
        Self::RejectAssignment,
        Self::GetFileUploadURL,
        Self::GrantBonus,
        Self::GetBonusPayments,
    ];

    /// Returns the wire operation name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAccountBalance => "GetAccountBalance",
            Self::GetRequesterStatistic => "GetRequesterStatistic",
            Self::CreateQualificationType => "CreateQualificationType",
            Self::UpdateQualificationType => "UpdateQualificationType",
            Self::DisposeQualificationType => "DisposeQualificationType",
            Self::SearchQualificationTypes => "SearchQualificationTypes",
            Self::GetQualificationType => "GetQualificationType",
            Self::GetQualificationScore => "GetQualificationScore",
            Self::UpdateQualificationScore => "UpdateQualificationScore",
            Self::AssignQualification => "AssignQualification",
            Self::GrantQualification => "GrantQualification",
            Self::RevokeQualification => "RevokeQualification",
            Self::GetQualificationRequests => "GetQualificationRequests",
            Self::RejectQualificationRequest => "RejectQualificationRequest",
            Self::GetQualificationsForQualificationType => "GetQualificationsForQualificationType",
            Self::BlockWorker => "BlockWorker",
            Self::UnblockWorker => "UnblockWorker",
            Self::NotifyWorkers => "NotifyWorkers",
            Self::CreateHIT => "CreateHIT",
            Self::GetHIT => "GetHIT",
            Self::ExtendHIT => "ExtendHIT",
            Self::DisposeHIT => "DisposeHIT",
            Self::DisableHIT => "DisableHIT",
            Self::ForceExpireHIT => "ForceExpireHIT",
            Self::ChangeHITTypeOfHIT => "ChangeHITTypeOfHIT",
            Self::SetHITAsReviewing => "SetHITAsReviewing",
            Self::SearchHITs => "SearchHITs",
            Self::GetReviewableHITs => "GetReviewableHITs",
            Self::GetHITsForQualificationType => "GetHITsForQualificationType",
            Self::RegisterHITType => "RegisterHITType",
            Self::GetAssignmentsForHIT => "GetAssignmentsForHIT",
            Self::ApproveAssignment => "ApproveAssignment",
            Self::RejectAssignment => "RejectAssignment",
            Self::GetFileUploadURL => "GetFileUploadURL",
            Self::GrantBonus => "GrantBonus",
            Self::GetBonusPayments => "GetBonusPayments",
        }
    }

    /// Parse a wire operation name into an `MTurkOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for MTurkOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

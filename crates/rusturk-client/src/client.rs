//! The requester client.
//!
//! [`MTurkClient`] exposes one async method per remote operation. Methods
//! for operations with many optional parameters take the operation's input
//! struct; the rest take their arguments directly. Every method is a single
//! request through the shared [`RequestGateway`].

use std::sync::Arc;

use rusturk_auth::RequestSigner;
use rusturk_core::MTurkConfig;
use rusturk_model::input::{
    ApproveAssignmentInput, AssignQualificationInput, BlockWorkerInput, ChangeHitTypeOfHitInput,
    CreateHitInput, CreateQualificationTypeInput, DisableHitInput, DisposeHitInput,
    DisposeQualificationTypeInput, ExtendHitInput, ForceExpireHitInput, GetAccountBalanceInput,
    GetAssignmentsForHitInput, GetBonusPaymentsInput, GetFileUploadUrlInput, GetHitInput,
    GetHitsForQualificationTypeInput, GetQualificationRequestsInput, GetQualificationScoreInput,
    GetQualificationTypeInput, GetQualificationsForQualificationTypeInput,
    GetRequesterStatisticInput, GetReviewableHitsInput, GrantBonusInput, GrantQualificationInput,
    NotifyWorkersInput, RegisterHitTypeInput, RejectAssignmentInput,
    RejectQualificationRequestInput, RevokeQualificationInput, SearchHitsInput,
    SearchQualificationTypesInput, SetHitAsReviewingInput, UnblockWorkerInput,
    UpdateQualificationScoreInput, UpdateQualificationTypeInput,
};
use rusturk_model::output::{
    CreateHitOutput, GetAccountBalanceOutput, GetAssignmentsForHitOutput, GetBonusPaymentsOutput,
    GetFileUploadUrlOutput, GetHitOutput, GetHitsForQualificationTypeOutput,
    GetQualificationRequestsOutput, GetQualificationScoreOutput,
    GetQualificationsForQualificationTypeOutput, GetRequesterStatisticOutput,
    GetReviewableHitsOutput, OperationStatus, RegisterHitTypeOutput, SearchHitsOutput,
    SearchQualificationTypesOutput, UpdateQualificationTypeOutput,
};
use rusturk_model::types::{Paging, QualificationType};
use rusturk_model::{MTurkOperation, OperationInput, Parameters};
use rusturk_xml::{MTurkDeserialize, XmlElement};

use crate::error::MTurkResult;
use crate::gateway::RequestGateway;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Async client for the requester API.
///
/// Cloning is cheap and clones share the same transport. The client holds no
/// mutable state, so one instance can serve many tasks at once.
#[derive(Debug, Clone)]
pub struct MTurkClient {
    gateway: Arc<RequestGateway>,
}

impl MTurkClient {
    /// Create a client that talks HTTP through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`MTurkError::Config`](crate::MTurkError::Config) if the
    /// configuration is invalid and
    /// [`MTurkError::Transport`](crate::MTurkError::Transport) if the HTTP
    /// client cannot be built.
    pub fn new(config: &MTurkConfig) -> MTurkResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client from `MTURK_*` environment variables.
    pub fn from_env() -> MTurkResult<Self> {
        Self::new(&MTurkConfig::from_env())
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(
        config: &MTurkConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> MTurkResult<Self> {
        config.validate()?;
        let endpoint = config.endpoint();
        tracing::debug!(endpoint = %endpoint, sandbox = config.sandbox, "created requester client");
        let gateway = RequestGateway::new(
            endpoint.url(),
            RequestSigner::new(config.credentials()),
            transport,
        );
        Ok(Self {
            gateway: Arc::new(gateway),
        })
    }

    /// The URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.gateway.endpoint()
    }

    /// Send any operation with hand-built parameters.
    ///
    /// Returns the parsed response document after the `Errors` check, for
    /// elements the typed outputs do not model.
    pub async fn call(
        &self,
        operation: MTurkOperation,
        params: &Parameters,
    ) -> MTurkResult<XmlElement> {
        self.gateway.call(operation, params).await
    }

    /// Send a typed input and extract its typed output.
    pub async fn execute<I>(&self, input: &I) -> MTurkResult<I::Output>
    where
        I: OperationInput + Sync,
        I::Output: MTurkDeserialize,
    {
        self.gateway.execute(input).await
    }

    // -----------------------------------------------------------------------
    // Account
    // -----------------------------------------------------------------------

    /// Query the available balance.
    pub async fn get_account_balance(&self) -> MTurkResult<GetAccountBalanceOutput> {
        self.execute(&GetAccountBalanceInput).await
    }

    /// Query a requester statistic.
    pub async fn get_requester_statistic(
        &self,
        input: &GetRequesterStatisticInput,
    ) -> MTurkResult<GetRequesterStatisticOutput> {
        self.execute(input).await
    }

    // -----------------------------------------------------------------------
    // Qualification types
    // -----------------------------------------------------------------------

    /// Create a qualification type.
    pub async fn create_qualification_type(
        &self,
        input: &CreateQualificationTypeInput,
    ) -> MTurkResult<QualificationType> {
        self.execute(input).await
    }

    /// Update a qualification type.
    pub async fn update_qualification_type(
        &self,
        input: &UpdateQualificationTypeInput,
    ) -> MTurkResult<UpdateQualificationTypeOutput> {
        self.execute(input).await
    }

    /// Dispose of a qualification type.
    pub async fn dispose_qualification_type(
        &self,
        qualification_type_id: &str,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&DisposeQualificationTypeInput {
            qualification_type_id: qualification_type_id.to_owned(),
        })
        .await
    }

    /// Search qualification types.
    pub async fn search_qualification_types(
        &self,
        input: &SearchQualificationTypesInput,
    ) -> MTurkResult<SearchQualificationTypesOutput> {
        self.execute(input).await
    }

    /// Describe a qualification type.
    pub async fn get_qualification_type(
        &self,
        qualification_type_id: &str,
    ) -> MTurkResult<QualificationType> {
        self.execute(&GetQualificationTypeInput {
            qualification_type_id: qualification_type_id.to_owned(),
        })
        .await
    }

    // -----------------------------------------------------------------------
    // Qualifications held by workers
    // -----------------------------------------------------------------------

    /// Read a worker's score.
    pub async fn get_qualification_score(
        &self,
        qualification_type_id: &str,
        subject_id: &str,
    ) -> MTurkResult<GetQualificationScoreOutput> {
        self.execute(&GetQualificationScoreInput {
            qualification_type_id: qualification_type_id.to_owned(),
            subject_id: subject_id.to_owned(),
        })
        .await
    }

    /// Change a worker's score.
    pub async fn update_qualification_score(
        &self,
        qualification_type_id: &str,
        subject_id: &str,
        integer_value: i32,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&UpdateQualificationScoreInput {
            qualification_type_id: qualification_type_id.to_owned(),
            subject_id: subject_id.to_owned(),
            integer_value,
        })
        .await
    }

    /// Assign a qualification to a worker directly.
    pub async fn assign_qualification(
        &self,
        input: &AssignQualificationInput,
    ) -> MTurkResult<OperationStatus> {
        self.execute(input).await
    }

    /// Grant a pending qualification request.
    pub async fn grant_qualification(
        &self,
        input: &GrantQualificationInput,
    ) -> MTurkResult<OperationStatus> {
        self.execute(input).await
    }

    /// Revoke a worker's qualification.
    pub async fn revoke_qualification(
        &self,
        input: &RevokeQualificationInput,
    ) -> MTurkResult<OperationStatus> {
        self.execute(input).await
    }

    /// List pending qualification requests.
    pub async fn get_qualification_requests(
        &self,
        input: &GetQualificationRequestsInput,
    ) -> MTurkResult<GetQualificationRequestsOutput> {
        self.execute(input).await
    }

    /// Reject a pending qualification request.
    pub async fn reject_qualification_request(
        &self,
        qualification_request_id: &str,
        reason: Option<&str>,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&RejectQualificationRequestInput {
            qualification_request_id: qualification_request_id.to_owned(),
            reason: reason.map(str::to_owned),
        })
        .await
    }

    /// List the qualifications granted for a type.
    pub async fn get_qualifications_for_qualification_type(
        &self,
        input: &GetQualificationsForQualificationTypeInput,
    ) -> MTurkResult<GetQualificationsForQualificationTypeOutput> {
        self.execute(input).await
    }

    // -----------------------------------------------------------------------
    // Workers
    // -----------------------------------------------------------------------

    /// Block a worker. `reason` is sent unchanged when given.
    pub async fn block_worker(
        &self,
        worker_id: &str,
        reason: Option<&str>,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&BlockWorkerInput {
            worker_id: worker_id.to_owned(),
            reason: reason.map(str::to_owned),
        })
        .await
    }

    /// Unblock a worker. `reason` is sent unchanged when given.
    pub async fn unblock_worker(
        &self,
        worker_id: &str,
        reason: Option<&str>,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&UnblockWorkerInput {
            worker_id: worker_id.to_owned(),
            reason: reason.map(str::to_owned),
        })
        .await
    }

    /// Email a message to workers.
    pub async fn notify_workers(&self, input: &NotifyWorkersInput) -> MTurkResult<OperationStatus> {
        self.execute(input).await
    }

    // -----------------------------------------------------------------------
    // HITs
    // -----------------------------------------------------------------------

    /// Create a HIT.
    pub async fn create_hit(&self, input: &CreateHitInput) -> MTurkResult<CreateHitOutput> {
        self.execute(input).await
    }

    /// Describe a HIT.
    pub async fn get_hit(&self, hit_id: &str) -> MTurkResult<GetHitOutput> {
        self.execute(&GetHitInput {
            hit_id: hit_id.to_owned(),
        })
        .await
    }

    /// Add assignments or lifetime to a HIT.
    pub async fn extend_hit(&self, input: &ExtendHitInput) -> MTurkResult<OperationStatus> {
        self.execute(input).await
    }

    /// Dispose of a reviewed HIT.
    pub async fn dispose_hit(&self, hit_id: &str) -> MTurkResult<OperationStatus> {
        self.execute(&DisposeHitInput {
            hit_id: hit_id.to_owned(),
        })
        .await
    }

    /// Remove a HIT from the marketplace and dispose of it.
    pub async fn disable_hit(&self, hit_id: &str) -> MTurkResult<OperationStatus> {
        self.execute(&DisableHitInput {
            hit_id: hit_id.to_owned(),
        })
        .await
    }

    /// Expire a HIT immediately.
    pub async fn force_expire_hit(&self, hit_id: &str) -> MTurkResult<OperationStatus> {
        self.execute(&ForceExpireHitInput {
            hit_id: hit_id.to_owned(),
        })
        .await
    }

    /// Move a HIT to another HIT type.
    pub async fn change_hit_type_of_hit(
        &self,
        hit_id: &str,
        hit_type_id: &str,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&ChangeHitTypeOfHitInput {
            hit_id: hit_id.to_owned(),
            hit_type_id: hit_type_id.to_owned(),
        })
        .await
    }

    /// Mark a HIT as being reviewed, or with `revert` move it back.
    pub async fn set_hit_as_reviewing(
        &self,
        hit_id: &str,
        revert: bool,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&SetHitAsReviewingInput {
            hit_id: hit_id.to_owned(),
            revert,
        })
        .await
    }

    /// List the requester's HITs.
    pub async fn search_hits(&self, input: &SearchHitsInput) -> MTurkResult<SearchHitsOutput> {
        self.execute(input).await
    }

    /// List HITs ready for review.
    pub async fn get_reviewable_hits(
        &self,
        input: &GetReviewableHitsInput,
    ) -> MTurkResult<GetReviewableHitsOutput> {
        self.execute(input).await
    }

    /// List HITs that require a qualification type.
    pub async fn get_hits_for_qualification_type(
        &self,
        qualification_type_id: &str,
        paging: Paging,
    ) -> MTurkResult<GetHitsForQualificationTypeOutput> {
        self.execute(&GetHitsForQualificationTypeInput {
            qualification_type_id: qualification_type_id.to_owned(),
            paging,
        })
        .await
    }

    /// Register a HIT type.
    pub async fn register_hit_type(
        &self,
        input: &RegisterHitTypeInput,
    ) -> MTurkResult<RegisterHitTypeOutput> {
        self.execute(input).await
    }

    // -----------------------------------------------------------------------
    // Assignments
    // -----------------------------------------------------------------------

    /// List a HIT's assignments.
    pub async fn get_assignments_for_hit(
        &self,
        input: &GetAssignmentsForHitInput,
    ) -> MTurkResult<GetAssignmentsForHitOutput> {
        self.execute(input).await
    }

    /// Approve and pay for an assignment.
    pub async fn approve_assignment(
        &self,
        assignment_id: &str,
        requester_feedback: Option<&str>,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&ApproveAssignmentInput {
            assignment_id: assignment_id.to_owned(),
            requester_feedback: requester_feedback.map(str::to_owned),
        })
        .await
    }

    /// Reject an assignment.
    pub async fn reject_assignment(
        &self,
        assignment_id: &str,
        requester_feedback: Option<&str>,
    ) -> MTurkResult<OperationStatus> {
        self.execute(&RejectAssignmentInput {
            assignment_id: assignment_id.to_owned(),
            requester_feedback: requester_feedback.map(str::to_owned),
        })
        .await
    }

    /// Get a temporary URL for a file a worker uploaded.
    pub async fn get_file_upload_url(
        &self,
        assignment_id: &str,
        question_identifier: &str,
    ) -> MTurkResult<GetFileUploadUrlOutput> {
        self.execute(&GetFileUploadUrlInput {
            assignment_id: assignment_id.to_owned(),
            question_identifier: question_identifier.to_owned(),
        })
        .await
    }

    // -----------------------------------------------------------------------
    // Bonuses
    // -----------------------------------------------------------------------

    /// Pay a worker a bonus.
    pub async fn grant_bonus(&self, input: &GrantBonusInput) -> MTurkResult<OperationStatus> {
        self.execute(input).await
    }

    /// List bonus payments for a HIT or assignment.
    pub async fn get_bonus_payments(
        &self,
        input: &GetBonusPaymentsInput,
    ) -> MTurkResult<GetBonusPaymentsOutput> {
        self.execute(input).await
    }
}

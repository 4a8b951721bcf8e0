//! Typed extraction of operation results from response documents.
//!
//! Every output implements [`MTurkDeserialize`]. Record types (HITs,
//! assignments, qualification types...) are read from their own element when
//! the document contains one and from the whole document otherwise, so both
//! full service responses and bare fragments extract the same way. Lists keep
//! document order.
//!
//! Extraction runs only after the caller has checked the document for an
//! `Errors` block.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusturk_model::output::{
    CreateHitOutput, GetAccountBalanceOutput, GetAssignmentsForHitOutput, GetBonusPaymentsOutput,
    GetFileUploadUrlOutput, GetHitOutput, GetHitsForQualificationTypeOutput,
    GetQualificationRequestsOutput, GetQualificationScoreOutput,
    GetQualificationsForQualificationTypeOutput, GetRequesterStatisticOutput,
    GetReviewableHitsOutput, OperationStatus, RegisterHitTypeOutput, SearchHitsOutput,
    SearchQualificationTypesOutput, UpdateQualificationTypeOutput,
};
use rusturk_model::types::{
    Assignment, AssignmentStatus, BonusPayment, DataPoint, HitSummary, PageInfo, Price,
    Qualification, QualificationRequest, QualificationStatus, QualificationType,
    QualificationTypeStatus,
};

use crate::document::XmlElement;
use crate::error::XmlError;

/// Trait for building a typed value from a parsed response document.
pub trait MTurkDeserialize: Sized {
    /// Extract the value from `doc`.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::MissingElement`] when a required element is absent
    /// and [`XmlError::ParseError`] when an element's text is not a valid
    /// value of its type.
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError>;
}

/// A record that lives in a named element and may repeat inside lists.
trait Record: Sized {
    const ELEMENT: &'static str;

    fn from_element(el: &XmlElement) -> Result<Self, XmlError>;

    /// Read the first record element, or the whole document if there is none.
    fn single(doc: &XmlElement) -> Result<Self, XmlError> {
        Self::from_element(doc.find(Self::ELEMENT).unwrap_or(doc))
    }

    /// Read every record element in document order.
    fn list(doc: &XmlElement) -> Result<Vec<Self>, XmlError> {
        doc.find_all(Self::ELEMENT)
            .into_iter()
            .map(Self::from_element)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Text of the first element named `name`, or `MissingElement`.
pub(crate) fn required_text<'a>(scope: &'a XmlElement, name: &str) -> Result<&'a str, XmlError> {
    scope
        .text_of(name)
        .ok_or_else(|| XmlError::MissingElement(name.to_owned()))
}

fn optional_text(scope: &XmlElement, name: &str) -> Option<String> {
    scope.text_of(name).map(str::to_owned)
}

fn required<T>(
    scope: &XmlElement,
    name: &str,
    parse: fn(&str) -> Result<T, XmlError>,
) -> Result<T, XmlError> {
    parse(required_text(scope, name)?)
}

fn optional<T>(
    scope: &XmlElement,
    name: &str,
    parse: fn(&str) -> Result<T, XmlError>,
) -> Result<Option<T>, XmlError> {
    scope.text_of(name).map(parse).transpose()
}

/// Parse a boolean, accepting any letter case (`true`, `True`, `FALSE`).
pub(crate) fn parse_bool(s: &str) -> Result<bool, XmlError> {
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(XmlError::ParseError(format!("invalid boolean: {s}")))
    }
}

fn parse_num<T>(s: &str) -> Result<T, XmlError>
where
    T: FromStr,
    T::Err: Display,
{
    s.parse::<T>()
        .map_err(|e| XmlError::ParseError(format!("invalid number '{s}': {e}")))
}

/// Parse an ISO 8601 timestamp such as `2010-03-15T12:00:00Z`.
pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, XmlError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
        })
        .map_err(|e| XmlError::ParseError(format!("invalid timestamp '{s}': {e}")))
}

fn parse_assignment_status(s: &str) -> Result<AssignmentStatus, XmlError> {
    AssignmentStatus::from_name(s)
        .ok_or_else(|| XmlError::ParseError(format!("invalid assignment status: {s}")))
}

fn parse_qualification_status(s: &str) -> Result<QualificationStatus, XmlError> {
    QualificationStatus::from_name(s)
        .ok_or_else(|| XmlError::ParseError(format!("invalid qualification status: {s}")))
}

fn parse_qualification_type_status(s: &str) -> Result<QualificationTypeStatus, XmlError> {
    QualificationTypeStatus::from_name(s)
        .ok_or_else(|| XmlError::ParseError(format!("invalid qualification type status: {s}")))
}

fn is_valid(doc: &XmlElement) -> Result<bool, XmlError> {
    required(doc, "IsValid", parse_bool)
}

fn page_info(doc: &XmlElement) -> Result<PageInfo, XmlError> {
    Ok(PageInfo {
        num_results: optional(doc, "NumResults", parse_num)?,
        total_num_results: optional(doc, "TotalNumResults", parse_num)?,
        page_number: optional(doc, "PageNumber", parse_num)?,
    })
}

fn price(el: &XmlElement) -> Result<Price, XmlError> {
    Ok(Price {
        amount: required_text(el, "Amount")?.to_owned(),
        currency_code: optional_text(el, "CurrencyCode"),
        formatted_price: optional_text(el, "FormattedPrice"),
    })
}

fn optional_price(scope: &XmlElement, name: &str) -> Result<Option<Price>, XmlError> {
    scope.find(name).map(price).transpose()
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

impl Record for QualificationType {
    const ELEMENT: &'static str = "QualificationType";

    fn from_element(el: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            qualification_type_id: required_text(el, "QualificationTypeId")?.to_owned(),
            creation_time: optional(el, "CreationTime", parse_timestamp)?,
            name: optional_text(el, "Name"),
            description: optional_text(el, "Description"),
            keywords: optional_text(el, "Keywords"),
            qualification_type_status: optional(
                el,
                "QualificationTypeStatus",
                parse_qualification_type_status,
            )?,
            retry_delay_in_seconds: optional(el, "RetryDelayInSeconds", parse_num)?,
            test_duration_in_seconds: optional(el, "TestDurationInSeconds", parse_num)?,
            is_requestable: optional(el, "IsRequestable", parse_bool)?,
            auto_granted: optional(el, "AutoGranted", parse_bool)?,
            auto_granted_value: optional(el, "AutoGrantedValue", parse_num)?,
        })
    }
}

impl Record for Qualification {
    const ELEMENT: &'static str = "Qualification";

    fn from_element(el: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            qualification_type_id: optional_text(el, "QualificationTypeId"),
            subject_id: optional_text(el, "SubjectId"),
            grant_time: optional(el, "GrantTime", parse_timestamp)?,
            integer_value: optional(el, "IntegerValue", parse_num)?,
            locale_country: el
                .find("LocaleValue")
                .and_then(|locale| locale.text_of("Country"))
                .map(str::to_owned),
            status: optional(el, "Status", parse_qualification_status)?,
        })
    }
}

impl Record for QualificationRequest {
    const ELEMENT: &'static str = "QualificationRequest";

    fn from_element(el: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            qualification_request_id: required_text(el, "QualificationRequestId")?.to_owned(),
            qualification_type_id: optional_text(el, "QualificationTypeId"),
            subject_id: optional_text(el, "SubjectId"),
            test: optional_text(el, "Test"),
            answer: optional_text(el, "Answer"),
            submit_time: optional(el, "SubmitTime", parse_timestamp)?,
        })
    }
}

impl Record for HitSummary {
    const ELEMENT: &'static str = "HIT";

    fn from_element(el: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            hit_id: required_text(el, "HITId")?.to_owned(),
            hit_type_id: optional_text(el, "HITTypeId"),
            title: optional_text(el, "Title"),
            creation_time: optional(el, "CreationTime", parse_timestamp)?,
            expiration: optional(el, "Expiration", parse_timestamp)?,
            max_assignments: optional(el, "MaxAssignments", parse_num)?,
            hit_status: optional_text(el, "HITStatus"),
            hit_review_status: optional_text(el, "HITReviewStatus"),
            reward: optional_price(el, "Reward")?,
        })
    }
}

impl Record for Assignment {
    const ELEMENT: &'static str = "Assignment";

    fn from_element(el: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            assignment_id: required_text(el, "AssignmentId")?.to_owned(),
            worker_id: required_text(el, "WorkerId")?.to_owned(),
            assignment_status: required(el, "AssignmentStatus", parse_assignment_status)?,
            hit_id: optional_text(el, "HITId"),
            accept_time: optional(el, "AcceptTime", parse_timestamp)?,
            submit_time: optional(el, "SubmitTime", parse_timestamp)?,
            auto_approval_time: optional(el, "AutoApprovalTime", parse_timestamp)?,
            approval_time: optional(el, "ApprovalTime", parse_timestamp)?,
            rejection_time: optional(el, "RejectionTime", parse_timestamp)?,
            deadline: optional(el, "Deadline", parse_timestamp)?,
            answer: optional_text(el, "Answer"),
            requester_feedback: optional_text(el, "RequesterFeedback"),
        })
    }
}

impl Record for BonusPayment {
    const ELEMENT: &'static str = "BonusPayment";

    fn from_element(el: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            worker_id: required_text(el, "WorkerId")?.to_owned(),
            assignment_id: optional_text(el, "AssignmentId"),
            bonus_amount: optional_price(el, "BonusAmount")?,
            reason: optional_text(el, "Reason"),
            grant_time: optional(el, "GrantTime", parse_timestamp)?,
        })
    }
}

impl Record for DataPoint {
    const ELEMENT: &'static str = "DataPoint";

    fn from_element(el: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            date: optional(el, "Date", parse_timestamp)?,
            long_value: optional(el, "LongValue", parse_num)?,
            double_value: optional(el, "DoubleValue", parse_num)?,
        })
    }
}

impl MTurkDeserialize for QualificationType {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Self::single(doc)
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

impl MTurkDeserialize for OperationStatus {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            is_valid: is_valid(doc)?,
        })
    }
}

impl MTurkDeserialize for GetAccountBalanceOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        let available = doc
            .find("AvailableBalance")
            .ok_or_else(|| XmlError::MissingElement("AvailableBalance".to_owned()))?;
        Ok(Self {
            available_balance: required_text(available, "FormattedPrice")?.to_owned(),
            available_amount: optional_text(available, "Amount"),
            currency_code: optional_text(available, "CurrencyCode"),
            on_hold_balance: doc
                .find("OnHoldBalance")
                .and_then(|held| held.text_of("FormattedPrice"))
                .map(str::to_owned),
        })
    }
}

impl MTurkDeserialize for UpdateQualificationTypeOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        let qualification_type = if doc.find("QualificationTypeId").is_some() {
            Some(QualificationType::single(doc)?)
        } else {
            None
        };
        Ok(Self {
            is_valid: is_valid(doc)?,
            qualification_type,
        })
    }
}

impl MTurkDeserialize for SearchQualificationTypesOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            is_valid: is_valid(doc)?,
            page: page_info(doc)?,
            qualification_types: QualificationType::list(doc)?,
        })
    }
}

impl MTurkDeserialize for GetQualificationScoreOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        let qualification = doc.find(Qualification::ELEMENT).unwrap_or(doc);
        Ok(Self {
            integer_value: required(qualification, "IntegerValue", parse_num)?,
            qualification: Qualification::from_element(qualification)?,
        })
    }
}

impl MTurkDeserialize for GetQualificationRequestsOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            is_valid: is_valid(doc)?,
            page: page_info(doc)?,
            qualification_requests: QualificationRequest::list(doc)?,
        })
    }
}

impl MTurkDeserialize for GetQualificationsForQualificationTypeOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            is_valid: is_valid(doc)?,
            page: page_info(doc)?,
            qualifications: Qualification::list(doc)?,
        })
    }
}

impl MTurkDeserialize for CreateHitOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        let hit = doc.find("HIT").unwrap_or(doc);
        Ok(Self {
            is_valid: is_valid(doc)?,
            hit_id: required_text(hit, "HITId")?.to_owned(),
            hit_type_id: required_text(hit, "HITTypeId")?.to_owned(),
        })
    }
}

impl MTurkDeserialize for GetHitOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        let hit = doc.find("HIT").unwrap_or(doc);
        let reward = hit
            .find("Reward")
            .ok_or_else(|| XmlError::MissingElement("Reward".to_owned()))?;
        Ok(Self {
            hit_id: optional_text(hit, "HITId"),
            hit_type_id: optional_text(hit, "HITTypeId"),
            title: optional_text(hit, "Title"),
            description: optional_text(hit, "Description"),
            keywords: optional_text(hit, "Keywords"),
            question: optional_text(hit, "Question"),
            creation_time: required(hit, "CreationTime", parse_timestamp)?,
            expiration: optional(hit, "Expiration", parse_timestamp)?,
            hit_status: required_text(hit, "HITStatus")?.to_owned(),
            hit_review_status: required_text(hit, "HITReviewStatus")?.to_owned(),
            max_assignments: optional(hit, "MaxAssignments", parse_num)?,
            reward: price(reward)?,
            assignment_duration_in_seconds: required(
                hit,
                "AssignmentDurationInSeconds",
                parse_num,
            )?,
            auto_approval_delay_in_seconds: optional(hit, "AutoApprovalDelayInSeconds", parse_num)?,
            requester_annotation: optional_text(hit, "RequesterAnnotation"),
            number_of_assignments_pending: optional(hit, "NumberOfAssignmentsPending", parse_num)?,
            number_of_assignments_available: optional(
                hit,
                "NumberOfAssignmentsAvailable",
                parse_num,
            )?,
            number_of_assignments_completed: optional(
                hit,
                "NumberOfAssignmentsCompleted",
                parse_num,
            )?,
        })
    }
}

impl MTurkDeserialize for SearchHitsOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            page: page_info(doc)?,
            hits: HitSummary::list(doc)?,
        })
    }
}

impl MTurkDeserialize for GetReviewableHitsOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            total_num_results: required(doc, "TotalNumResults", parse_num)?,
            num_results: optional(doc, "NumResults", parse_num)?,
            page_number: optional(doc, "PageNumber", parse_num)?,
            hit_ids: doc
                .find_all("HITId")
                .into_iter()
                .map(|el| el.text.clone())
                .collect(),
        })
    }
}

impl MTurkDeserialize for GetHitsForQualificationTypeOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            page: page_info(doc)?,
            hits: HitSummary::list(doc)?,
        })
    }
}

impl MTurkDeserialize for GetAssignmentsForHitOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            page: page_info(doc)?,
            assignments: Assignment::list(doc)?,
        })
    }
}

impl MTurkDeserialize for GetBonusPaymentsOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            page: page_info(doc)?,
            bonus_payments: BonusPayment::list(doc)?,
        })
    }
}

impl MTurkDeserialize for RegisterHitTypeOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            is_valid: is_valid(doc)?,
            hit_type_id: required_text(doc, "HITTypeId")?.to_owned(),
        })
    }
}

impl MTurkDeserialize for GetFileUploadUrlOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            file_upload_url: required_text(doc, "FileUploadURL")?.to_owned(),
        })
    }
}

impl MTurkDeserialize for GetRequesterStatisticOutput {
    fn from_document(doc: &XmlElement) -> Result<Self, XmlError> {
        Ok(Self {
            data_points: DataPoint::list(doc)?,
        })
    }
}

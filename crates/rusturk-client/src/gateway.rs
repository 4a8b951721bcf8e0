//! The request gateway every operation funnels through.
//!
//! A call signs the operation, merges the fixed authentication parameters
//! with the caller's, POSTs the form-encoded result, parses the reply, and
//! fails with [`MTurkError::Api`] if the document carries an `Errors` block.
//! Typed extraction only happens after that check.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusturk_auth::RequestSigner;
use rusturk_core::{SERVICE_NAME, SERVICE_VERSION};
use rusturk_model::{MTurkOperation, OperationInput, Parameters};
use rusturk_xml::{MTurkDeserialize, XmlElement, extract_errors, parse_document};

use crate::error::{MTurkError, MTurkResult};
use crate::transport::{HttpTransport, TransportRequest};

/// Parameters derived from the signature; callers may not set them.
pub const RESERVED_PARAMETERS: [&str; 3] = ["Operation", "Timestamp", "Signature"];

/// Signs, sends and screens requests for one endpoint and credential pair.
#[derive(Clone)]
pub struct RequestGateway {
    endpoint: String,
    signer: RequestSigner,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for RequestGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestGateway")
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.signer.access_key_id())
            .finish_non_exhaustive()
    }
}

impl RequestGateway {
    /// Create a gateway posting to `endpoint`.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        signer: RequestSigner,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            signer,
            transport,
        }
    }

    /// The URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Merge the fixed parameters with the caller's and sign them for `now`.
    ///
    /// Caller values replace the defaults for `Service`, `Version` and
    /// `AWSAccessKeyId`.
    ///
    /// # Errors
    ///
    /// Returns [`MTurkError::ReservedParameter`] if `params` sets a
    /// signature-bound parameter, and [`MTurkError::Signing`] if signing
    /// fails.
    pub fn build_parameters(
        &self,
        operation: MTurkOperation,
        params: &Parameters,
        now: DateTime<Utc>,
    ) -> MTurkResult<Parameters> {
        if let Some(key) = RESERVED_PARAMETERS
            .iter()
            .find(|key| params.contains_key(key))
        {
            return Err(MTurkError::ReservedParameter((*key).to_owned()));
        }

        let signed = self.signer.sign(operation.as_str(), now)?;

        let mut merged = Parameters::new();
        merged
            .insert("Service", SERVICE_NAME)
            .insert("Version", SERVICE_VERSION)
            .insert("AWSAccessKeyId", self.signer.access_key_id())
            .merge(params)
            .insert("Operation", signed.operation)
            .insert("Timestamp", signed.timestamp)
            .insert("Signature", signed.signature);
        Ok(merged)
    }

    /// Send `operation` signed with the current time.
    ///
    /// Returns the parsed document once it is known to carry no `Errors`
    /// block.
    pub async fn call(
        &self,
        operation: MTurkOperation,
        params: &Parameters,
    ) -> MTurkResult<XmlElement> {
        self.call_at(operation, params, Utc::now()).await
    }

    /// Send `operation` signed for `now`.
    pub async fn call_at(
        &self,
        operation: MTurkOperation,
        params: &Parameters,
        now: DateTime<Utc>,
    ) -> MTurkResult<XmlElement> {
        let signed = self.build_parameters(operation, params, now)?;
        let request = TransportRequest {
            url: self.endpoint.clone(),
            body: encode_form(&signed),
        };

        tracing::debug!(
            operation = %operation,
            endpoint = %self.endpoint,
            params = params.len(),
            "sending request"
        );
        let response = self.transport.send(request).await?;
        let status = response.status;
        tracing::debug!(operation = %operation, status = %status, bytes = response.body.len(), "received response");

        let doc = match parse_document(&response.body) {
            Ok(doc) => doc,
            Err(_) if !status.is_success() => {
                return Err(MTurkError::HttpStatus { operation, status });
            }
            Err(source) => return Err(MTurkError::MalformedResponse { operation, source }),
        };

        if let Some(errors) = extract_errors(&doc) {
            for error in &errors {
                tracing::warn!(
                    operation = %operation,
                    code = %error.code,
                    message = %error.message,
                    "service rejected request"
                );
            }
            return Err(MTurkError::Api { operation, errors });
        }

        if !status.is_success() {
            return Err(MTurkError::HttpStatus { operation, status });
        }
        Ok(doc)
    }

    /// Send a typed input and extract its typed output.
    pub async fn execute<I>(&self, input: &I) -> MTurkResult<I::Output>
    where
        I: OperationInput + Sync,
        I::Output: MTurkDeserialize,
    {
        let operation = I::OPERATION;
        let doc = self.call(operation, &input.to_parameters()).await?;
        I::Output::from_document(&doc)
            .map_err(|source| MTurkError::MalformedResponse { operation, source })
    }
}

/// Encode parameters as an `application/x-www-form-urlencoded` body.
#[must_use]
pub fn encode_form(params: &Parameters) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use http::StatusCode;
    use rusturk_core::Credentials;
    use rusturk_model::input::GetAccountBalanceInput;
    use rusturk_model::output::GetAccountBalanceOutput;

    use super::*;
    use crate::testing::{FailingTransport, StubTransport};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2010, 3, 15, 12, 0, 0).unwrap()
    }

    fn gateway(transport: Arc<dyn HttpTransport>) -> RequestGateway {
        RequestGateway::new(
            "https://mturk.test/",
            RequestSigner::new(Credentials::new("AKID", "secret")),
            transport,
        )
    }

    #[test]
    fn test_should_build_fixed_parameters() {
        let gw = gateway(StubTransport::ok("<R/>"));
        let params = gw
            .build_parameters(
                MTurkOperation::GetAccountBalance,
                &Parameters::new(),
                fixed_time(),
            )
            .unwrap();

        assert_eq!(params.get("Service"), Some("AWSMechanicalTurkRequester"));
        assert_eq!(params.get("Version"), Some("2008-08-02"));
        assert_eq!(params.get("AWSAccessKeyId"), Some("AKID"));
        assert_eq!(params.get("Operation"), Some("GetAccountBalance"));
        assert_eq!(params.get("Timestamp"), Some("2010-03-15T12:00:00Z"));
        assert_eq!(params.get("Signature"), Some("0hxEPu6ZgiuadwiexnFaqnW0M6I="));
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn test_should_let_caller_override_service_identity() {
        let gw = gateway(StubTransport::ok("<R/>"));
        let caller: Parameters = [
            ("Service", "Other"),
            ("Version", "2006-10-31"),
            ("AWSAccessKeyId", "ALT"),
            ("HITId", "H1"),
        ]
        .into_iter()
        .collect();
        let params = gw
            .build_parameters(MTurkOperation::GetHIT, &caller, fixed_time())
            .unwrap();

        assert_eq!(params.get("Service"), Some("Other"));
        assert_eq!(params.get("Version"), Some("2006-10-31"));
        assert_eq!(params.get("AWSAccessKeyId"), Some("ALT"));
        assert_eq!(params.get("HITId"), Some("H1"));
        assert_eq!(params.get("Operation"), Some("GetHIT"));
    }

    #[tokio::test]
    async fn test_should_reject_reserved_parameters_without_sending() {
        for key in RESERVED_PARAMETERS {
            let stub = StubTransport::ok("<R/>");
            let gw = gateway(stub.clone());
            let caller: Parameters = [(key, "forged")].into_iter().collect();
            let err = gw
                .call(MTurkOperation::GetAccountBalance, &caller)
                .await
                .unwrap_err();
            assert!(matches!(err, MTurkError::ReservedParameter(ref k) if k == key));
            assert_eq!(stub.request_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_should_post_one_form_encoded_request() {
        let stub = StubTransport::ok("<R><IsValid>True</IsValid></R>");
        let gw = gateway(stub.clone());
        let caller: Parameters = [("Reason", "late & wrong")].into_iter().collect();
        gw.call_at(MTurkOperation::BlockWorker, &caller, fixed_time())
            .await
            .unwrap();

        assert_eq!(stub.request_count(), 1);
        let request = stub.last_request().unwrap();
        assert_eq!(request.url, "https://mturk.test/");
        assert!(request.body.contains("Reason=late+%26+wrong"));
        let sent = stub.last_params();
        assert_eq!(sent.get("Reason").map(String::as_str), Some("late & wrong"));
        assert_eq!(sent.get("Operation").map(String::as_str), Some("BlockWorker"));
        assert_eq!(
            sent.get("Timestamp").map(String::as_str),
            Some("2010-03-15T12:00:00Z")
        );
    }

    #[tokio::test]
    async fn test_should_fail_with_api_error_before_extraction() {
        let stub = StubTransport::ok(
            "<GetAccountBalanceResponse><GetAccountBalanceResult><Request><IsValid>False</IsValid>\
             <Errors><Error><Code>X</Code><Message>Y</Message></Error></Errors></Request>\
             <AvailableBalance><FormattedPrice>$1.00</FormattedPrice></AvailableBalance>\
             </GetAccountBalanceResult></GetAccountBalanceResponse>",
        );
        let gw = gateway(stub);
        let err = gw.execute(&GetAccountBalanceInput).await.unwrap_err();
        match err {
            MTurkError::Api { operation, errors } => {
                assert_eq!(operation, MTurkOperation::GetAccountBalance);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, "X");
                assert_eq!(errors[0].message, "Y");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_extract_typed_output() {
        let gw = gateway(StubTransport::ok(
            "<AvailableBalance><FormattedPrice>$12.34</FormattedPrice></AvailableBalance>",
        ));
        let out: GetAccountBalanceOutput = gw.execute(&GetAccountBalanceInput).await.unwrap();
        assert_eq!(out.available_balance, "$12.34");
    }

    #[tokio::test]
    async fn test_should_report_missing_element_as_malformed() {
        let gw = gateway(StubTransport::ok("<R><IsValid>True</IsValid></R>"));
        let err = gw.execute(&GetAccountBalanceInput).await.unwrap_err();
        assert!(matches!(
            err,
            MTurkError::MalformedResponse {
                operation: MTurkOperation::GetAccountBalance,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_should_classify_non_success_statuses() {
        let gw = gateway(StubTransport::with_status(
            StatusCode::SERVICE_UNAVAILABLE,
            "<html>down</html",
        ));
        let err = gw
            .call(MTurkOperation::GetAccountBalance, &Parameters::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MTurkError::HttpStatus { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE
        ));

        let gw = gateway(StubTransport::with_status(
            StatusCode::BAD_REQUEST,
            "<R><Errors><Error><Code>AWS.BadClaimsSupplied</Code><Message>bad</Message></Error></Errors></R>",
        ));
        let err = gw
            .call(MTurkOperation::GetAccountBalance, &Parameters::new())
            .await
            .unwrap_err();
        assert!(err.has_api_code("AWS.BadClaimsSupplied"));

        let gw = gateway(StubTransport::with_status(StatusCode::BAD_GATEWAY, "<R/>"));
        let err = gw
            .call(MTurkOperation::GetAccountBalance, &Parameters::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MTurkError::HttpStatus { .. }));
    }

    #[tokio::test]
    async fn test_should_report_non_xml_success_as_malformed() {
        let gw = gateway(StubTransport::ok("definitely not xml"));
        let err = gw
            .call(MTurkOperation::GetAccountBalance, &Parameters::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MTurkError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_should_surface_transport_failures() {
        let gw = gateway(Arc::new(FailingTransport));
        let err = gw
            .call(MTurkOperation::GetAccountBalance, &Parameters::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MTurkError::Transport(_)));
    }

    #[test]
    fn test_should_encode_form_in_key_order() {
        let params: Parameters = [("b", "2 3"), ("a", "x=y")].into_iter().collect();
        assert_eq!(encode_form(&params), "a=x%3Dy&b=2+3");
    }

    #[test]
    fn test_should_not_leak_secret_in_debug() {
        let gw = gateway(StubTransport::ok("<R/>"));
        let debug = format!("{gw:?}");
        assert!(debug.contains("AKID"));
        assert!(!debug.contains("secret"));
    }
}

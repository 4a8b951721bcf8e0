//! Full request/response exchanges over a real socket.

#[cfg(test)]
mod tests {
    use hyper::Method;
    use rusturk_client::{FORM_CONTENT_TYPE, MTurkError};

    use crate::{CannedServer, loopback_client};

    #[tokio::test]
    async fn test_should_post_signed_form_and_parse_balance() {
        let server = CannedServer::start(
            200,
            "<GetAccountBalanceResponse><GetAccountBalanceResult>\
             <Request><IsValid>True</IsValid></Request>\
             <AvailableBalance><Amount>12.34</Amount><CurrencyCode>USD</CurrencyCode>\
             <FormattedPrice>$12.34</FormattedPrice></AvailableBalance>\
             </GetAccountBalanceResult></GetAccountBalanceResponse>",
        )
        .await
        .unwrap();

        let client = loopback_client(&server.url);
        let balance = client.get_account_balance().await.unwrap();
        assert_eq!(balance.available_balance, "$12.34");

        let request = server.captured().await.unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.uri, "/");
        assert_eq!(request.header("content-type"), Some(FORM_CONTENT_TYPE));

        let params = request.params();
        assert_eq!(params["Operation"], "GetAccountBalance");
        assert_eq!(params["Service"], "AWSMechanicalTurkRequester");
        assert_eq!(params["Version"], "2008-08-02");
        assert_eq!(params["AWSAccessKeyId"], "AKIDLOOPBACK");
        assert_eq!(params["Timestamp"].len(), 20);
        assert!(params["Timestamp"].ends_with('Z'));
        assert_eq!(params["Signature"].len(), 28);
    }

    #[tokio::test]
    async fn test_should_surface_service_errors_over_http() {
        let server = CannedServer::start(
            200,
            "<GetHITResponse><HIT><Request><IsValid>False</IsValid><Errors><Error>\
             <Code>AWS.MechanicalTurk.HITDoesNotExist</Code>\
             <Message>Hit NOPE does not exist.</Message>\
             </Error></Errors></Request></HIT></GetHITResponse>",
        )
        .await
        .unwrap();

        let err = loopback_client(&server.url).get_hit("NOPE").await.unwrap_err();
        assert!(err.has_api_code("AWS.MechanicalTurk.HITDoesNotExist"));
        assert_eq!(err.api_errors().map(<[_]>::len), Some(1));
        assert!(err.to_string().contains("Hit NOPE does not exist."));

        let request = server.captured().await.unwrap();
        assert_eq!(request.params()["HITId"], "NOPE");
    }

    #[tokio::test]
    async fn test_should_report_http_status_without_xml_body() {
        let server = CannedServer::start(503, "Service Unavailable").await.unwrap();

        let err = loopback_client(&server.url)
            .force_expire_hit("H1")
            .await
            .unwrap_err();
        match err {
            MTurkError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 503),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        server.captured().await.unwrap();
    }

    #[tokio::test]
    async fn test_should_report_transport_error_when_nothing_listens() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let err = loopback_client(&url).get_account_balance().await.unwrap_err();
        assert!(matches!(err, MTurkError::Transport(_)), "got {err:?}");
    }
}

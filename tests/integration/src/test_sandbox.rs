//! Live calls against the requester sandbox.

#[cfg(test)]
mod tests {
    use rusturk_client::input::{GetReviewableHitsInput, SearchHitsInput};

    use crate::sandbox_client;

    #[tokio::test]
    #[ignore = "requires sandbox credentials"]
    async fn test_should_read_sandbox_balance() {
        let client = sandbox_client();
        let balance = client.get_account_balance().await.unwrap();
        assert!(balance.available_balance.starts_with('$'));
    }

    #[tokio::test]
    #[ignore = "requires sandbox credentials"]
    async fn test_should_search_sandbox_hits() {
        let client = sandbox_client();
        let out = client.search_hits(&SearchHitsInput::default()).await.unwrap();
        assert!(out.hits.len() <= 100);

        let reviewable = client
            .get_reviewable_hits(&GetReviewableHitsInput::default())
            .await
            .unwrap();
        assert!(reviewable.hit_ids.len() <= 100);
    }

    #[tokio::test]
    #[ignore = "requires sandbox credentials"]
    async fn test_should_reject_unknown_hit() {
        let client = sandbox_client();
        let err = client.get_hit("NOT_A_REAL_HIT_ID").await.unwrap_err();
        assert!(err.api_errors().is_some(), "got {err:?}");
    }
}

use kbtk_generate::{ProviderConfig, TokenCounter};

fn unreachable_config() -> ProviderConfig {
    ProviderConfig {
        api_key: "test-key".to_string(),
        model: "claude-3-5-sonnet-20241022".to_string(),
        max_tokens: 16,
        // Discard port: connections are refused locally.
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn unreachable_endpoint_falls_back_to_word_estimate() {
    let counter = TokenCounter::new(unreachable_config()).unwrap();

    // 3 words * 1.3, rounded up.
    assert_eq!(counter.count_tokens("satu dua tiga").await, 4);
    assert_eq!(counter.count_tokens("").await, 0);
}

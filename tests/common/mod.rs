use company_brief::BriefClient;
use httpmock::MockServer;
use url::Url;

/// Client wired against a mock server for all three provider bases, with the
/// connectivity probe disabled.
pub fn client_for(server: &MockServer) -> BriefClient {
    BriefClient::builder()
        .base_quote(Url::parse(&format!("{}/quote/", server.base_url())).unwrap())
        .base_statements(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .base_chart(Url::parse(&format!("{}/chart/", server.base_url())).unwrap())
        .api_key("test-key")
        .no_preflight()
        .build()
        .unwrap()
}

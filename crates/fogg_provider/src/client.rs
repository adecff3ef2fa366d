use anyhow::Context as _;
use fogg_config::HttpConfig;

/// Builds the shared HTTP client. Connect and read timeouts here are the only
/// deadlines a generation request is subject to.
pub fn build_http_client(config: &HttpConfig) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(config.connect_duration())
        .read_timeout(config.read_duration())
        .pool_idle_timeout(config.pool_idle_duration())
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .build()
        .context("Failed to build HTTP client")
}

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::UpstreamConfig;

fn apply_timeout(builder: ClientBuilder, timeout_secs: Option<u64>) -> ClientBuilder {
    match timeout_secs {
        Some(secs) if secs > 0 => builder.timeout(Duration::from_secs(secs)),
        _ => builder,
    }
}

/// Shared outbound client. Without a configured timeout the transport
/// defaults apply.
pub fn upstream_client(cfg: &UpstreamConfig) -> Result<reqwest::Client, reqwest::Error> {
    let builder = reqwest::Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    apply_timeout(builder, cfg.timeout_secs).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_and_without_timeout() {
        let mut cfg = UpstreamConfig::default();
        assert!(upstream_client(&cfg).is_ok());

        cfg.timeout_secs = Some(15);
        assert!(upstream_client(&cfg).is_ok());

        cfg.timeout_secs = Some(0);
        assert!(upstream_client(&cfg).is_ok());
    }
}

use crate::utils::error::{ClientError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 端點可以是 `host:port` 或完整的 http(s) URL
pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    if endpoint.trim().is_empty() {
        return Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: endpoint.to_string(),
            reason: "Endpoint cannot be empty".to_string(),
        });
    }

    let url = endpoint_url(endpoint).map_err(|reason| ClientError::InvalidConfigValue {
        field: field_name.to_string(),
        value: endpoint.to_string(),
        reason,
    })?;

    if url.host_str().is_none() {
        return Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: endpoint.to_string(),
            reason: "Endpoint has no host".to_string(),
        });
    }

    // 沒有 scheme 時必須是 host:port；url 會把 :80 這類預設埠去掉，所以直接看原字串
    let has_scheme = endpoint.contains("://");
    if (!has_scheme && !has_explicit_port(endpoint)) || url.port_or_known_default().is_none() {
        return Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: endpoint.to_string(),
            reason: "Endpoint has no port, expected host:port".to_string(),
        });
    }

    Ok(())
}

fn has_explicit_port(endpoint: &str) -> bool {
    endpoint
        .trim()
        .trim_end_matches('/')
        .rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok())
}

/// 把設定中的端點轉成 base URL；沒有 scheme 時補上 `http://`
pub fn endpoint_url(endpoint: &str) -> std::result::Result<Url, String> {
    let endpoint = endpoint.trim().trim_end_matches('/');
    let candidate = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else if endpoint.contains("://") {
        let scheme = endpoint.split("://").next().unwrap_or_default();
        return Err(format!("Unsupported URL scheme: {}", scheme));
    } else {
        format!("http://{}", endpoint)
    };

    Url::parse(&candidate).map_err(|e| format!("Invalid endpoint format: {}", e))
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

use crate::config::CONFIG;

/// Build a full API URL from a resource path like "/pets".
pub fn api_url(path: &str) -> String {
    format!("{}{}", CONFIG.api_base_url(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_prefixes_the_configured_base() {
        let url = api_url("/pets");
        assert!(url.ends_with("/pets"));
        assert!(url.starts_with("http"));
    }
}

//! Настройки подключения к GraphQL API
//!
//! Адрес задаётся при сборке переменной `CATALOG_GRAPHQL_URL`; если она не
//! задана, адрес строится от текущего `window.location` с портом API.

/// Порт GraphQL-сервера по умолчанию
pub const GRAPHQL_PORT: u16 = 4000;

const GRAPHQL_PATH: &str = "/graphql";

/// Адрес GraphQL API
///
/// # Возвращает
/// - `CATALOG_GRAPHQL_URL`, если переменная задана при сборке
/// - адрес вида "http://localhost:4000/graphql", построенный от `window.location`
pub fn graphql_endpoint() -> String {
    if let Some(url) = option_env!("CATALOG_GRAPHQL_URL") {
        return url.to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return endpoint_from("http:", "127.0.0.1", GRAPHQL_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    endpoint_from(&protocol, &hostname, GRAPHQL_PORT)
}

pub fn endpoint_from(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}{}", protocol, hostname, port, GRAPHQL_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from() {
        assert_eq!(
            endpoint_from("https:", "admin.example.com", 4000),
            "https://admin.example.com:4000/graphql"
        );
    }
}

//! URL helpers for the accounting backend.

/// Base URL of the backend: same host as the page, port 3000.
///
/// Returns an empty string outside a browser window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full URL of a backend route such as `"contabilidad/buscar_socios"`.
pub fn api_url(route: &str) -> String {
    join_route(&api_base(), route)
}

fn join_route(base: &str, route: &str) -> String {
    format!("{}/api/{}", base.trim_end_matches('/'), route.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_route() {
        assert_eq!(
            join_route("http://intranet:3000", "facturas/bancos/lista"),
            "http://intranet:3000/api/facturas/bancos/lista"
        );
        assert_eq!(
            join_route("http://intranet:3000/", "/contabilidad/buscar_socios"),
            "http://intranet:3000/api/contabilidad/buscar_socios"
        );
    }
}

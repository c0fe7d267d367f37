//! Mount parameters of the panel, read from the page query string.
//!
//! `?id_orden=1200&origen=2&solo_lectura=true`

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelParams {
    pub id_orden: i64,
    pub origen: i64,
    pub solo_lectura: bool,
}

impl Default for PanelParams {
    fn default() -> Self {
        Self {
            id_orden: 0,
            origen: 1,
            solo_lectura: false,
        }
    }
}

impl PanelParams {
    /// Parses a query string with or without the leading `?`.
    pub fn from_query(query: &str) -> Result<Self, String> {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Ok(Self::default());
        }
        serde_qs::from_str(query).map_err(|e| format!("Invalid panel parameters: {}", e))
    }

    /// Reads the current window location; falls back to defaults.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match Self::from_query(&search) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("{}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PanelParams::from_query("").unwrap();
        assert_eq!(params, PanelParams::default());
        assert_eq!(params.origen, 1);
    }

    #[test]
    fn test_parse_query() {
        let params = PanelParams::from_query("?id_orden=1200&origen=2&solo_lectura=true").unwrap();
        assert_eq!(params.id_orden, 1200);
        assert_eq!(params.origen, 2);
        assert!(params.solo_lectura);
    }

    #[test]
    fn test_partial_query_keeps_defaults() {
        let params = PanelParams::from_query("id_orden=77").unwrap();
        assert_eq!(params.id_orden, 77);
        assert_eq!(params.origen, 1);
        assert!(!params.solo_lectura);
    }

    #[test]
    fn test_invalid_query() {
        assert!(PanelParams::from_query("id_orden=abc").is_err());
    }
}

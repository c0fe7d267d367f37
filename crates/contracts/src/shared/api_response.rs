use crate::shared::format::format_quetzales;
use crate::shared::serde_helpers;
use serde::{Deserialize, Serialize};

/// Value of the `respuesta` field of every backend reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Info,
    Warning,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Envelope used by the accounting backend:
/// `{ "respuesta": "success", "mensaje": "...", "datos": ... }`.
///
/// Limit checks add `total_solicitado` / `monto_disponible` to `info` replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub respuesta: ResponseStatus,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default = "Option::default")]
    pub datos: Option<T>,
    #[serde(default, deserialize_with = "serde_helpers::opt_number")]
    pub total_solicitado: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::opt_number")]
    pub monto_disponible: Option<f64>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.respuesta == ResponseStatus::Success
    }

    /// Server message, or `fallback` when it is missing or blank.
    pub fn message_or(&self, fallback: &str) -> String {
        self.mensaje
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Payload of a successful reply; missing data counts as empty.
    pub fn into_data(self) -> Result<T, String>
    where
        T: Default,
    {
        if self.is_success() {
            Ok(self.datos.unwrap_or_default())
        } else {
            Err(self.message_or("Respuesta inválida del servidor"))
        }
    }

    /// Classifies the reply to a create/update submission.
    pub fn into_outcome(self) -> SubmitOutcome {
        match self.respuesta {
            ResponseStatus::Success => SubmitOutcome::Saved {
                message: self.message_or("Solicitud guardada"),
            },
            ResponseStatus::Info => SubmitOutcome::LimitInfo(LimitInfo {
                message: self.message_or(""),
                totals: self.total_solicitado.zip(self.monto_disponible),
            }),
            _ => SubmitOutcome::Warning {
                message: self.message_or("No se pudo guardar la solicitud"),
            },
        }
    }
}

/// Message shown when a request fails before any reply is parsed.
pub fn transport_error_message(err: &str) -> String {
    let err = err.trim();
    if err.is_empty() {
        "Error inesperado".to_string()
    } else {
        err.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved { message: String },
    LimitInfo(LimitInfo),
    Warning { message: String },
}

/// Limit details returned when a request exceeds what the order allows.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitInfo {
    pub message: String,
    /// (total requested, amount available)
    pub totals: Option<(f64, f64)>,
}

impl LimitInfo {
    pub const TITLE: &'static str = "Información de Límites";

    /// Label/value lines shown under the message.
    pub fn detail_lines(&self) -> Vec<(&'static str, String)> {
        match self.totals {
            Some((requested, available)) => vec![
                ("Total Solicitado", format_quetzales(requested)),
                ("Monto Disponible", format_quetzales(available)),
            ],
            None => Vec::new(),
        }
    }
}

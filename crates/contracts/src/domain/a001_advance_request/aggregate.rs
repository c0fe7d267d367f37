use crate::shared::serde_helpers;
use serde::{Deserialize, Serialize};

// ============================================================================
// Modality
// ============================================================================

/// Modalidad de anticipo: decides which fields a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceKind {
    #[default]
    Efectivo,
    Cheque,
    Transferencia,
    Deposito,
}

impl AdvanceKind {
    /// Wire code (`tipo`)
    pub fn code(&self) -> &'static str {
        match self {
            AdvanceKind::Efectivo => "efectivo",
            AdvanceKind::Cheque => "cheque",
            AdvanceKind::Transferencia => "transferencia",
            AdvanceKind::Deposito => "deposito",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AdvanceKind::Efectivo => "Efectivo",
            AdvanceKind::Cheque => "Cheque",
            AdvanceKind::Transferencia => "Transferencia",
            AdvanceKind::Deposito => "Depósito",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AdvanceKind::Efectivo => "Retiro de efectivo en agencia",
            AdvanceKind::Cheque => "Emisión de cheque bancario",
            AdvanceKind::Transferencia => "Transferencia electrónica",
            AdvanceKind::Deposito => "Depósito a cuenta interna",
        }
    }

    /// Palette name used by badges, cards and the detail header.
    pub fn color(&self) -> &'static str {
        match self {
            AdvanceKind::Efectivo => "blue",
            AdvanceKind::Cheque => "green",
            AdvanceKind::Transferencia => "purple",
            AdvanceKind::Deposito => "sky",
        }
    }

    pub fn all() -> [AdvanceKind; 4] {
        [
            AdvanceKind::Efectivo,
            AdvanceKind::Cheque,
            AdvanceKind::Transferencia,
            AdvanceKind::Deposito,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "efectivo" => Some(AdvanceKind::Efectivo),
            "cheque" => Some(AdvanceKind::Cheque),
            "transferencia" => Some(AdvanceKind::Transferencia),
            "deposito" => Some(AdvanceKind::Deposito),
            _ => None,
        }
    }
}

/// Presentation of a possibly unknown `tipo` code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindPresentation {
    pub color: &'static str,
    pub name: String,
    pub icon: &'static str,
}

/// Unknown codes render gray with the raw code as name.
pub fn kind_presentation(code: &str) -> KindPresentation {
    match AdvanceKind::from_code(code) {
        Some(kind) => KindPresentation {
            color: kind.color(),
            name: kind.display_name().to_string(),
            icon: "",
        },
        None => KindPresentation {
            color: "gray",
            name: code.to_string(),
            icon: "📄",
        },
    }
}

// ============================================================================
// Request payload
// ============================================================================

/// Legacy requester value the backend still expects on every payload.
pub const REQUESTER_PLACEHOLDER: &str = "Usuario actual";

/// Consignment printed on a check.
pub const CONSIGNMENT_NEGOTIABLE: &str = "Negociable";
pub const CONSIGNMENT_NON_NEGOTIABLE: &str = "No Negociable";

/// Payload of a create/update call, also used to seed forms in edit mode.
///
/// Modality-specific fields stay `None` (and are omitted from the JSON)
/// for the other modalities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdvanceRequestDto {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::opt_text"
    )]
    pub id_solicitud: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: AdvanceKind,
    #[serde(rename = "monto", default)]
    pub amount: f64,
    #[serde(rename = "comentario", default)]
    pub comment: String,
    #[serde(rename = "id_orden", default, deserialize_with = "serde_helpers::int")]
    pub order_id: i64,
    #[serde(rename = "tipo_solicitud", default, deserialize_with = "serde_helpers::int")]
    pub origin: i64,

    // Cash
    #[serde(rename = "agencia", default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(rename = "mismo_usuario_recoge", default, skip_serializing_if = "Option::is_none")]
    pub same_user_picks_up: Option<bool>,
    #[serde(rename = "usuario_recoge", default, skip_serializing_if = "Option::is_none")]
    pub pickup_user: Option<String>,
    #[serde(rename = "nombre_usuario_recoge", default, skip_serializing_if = "Option::is_none")]
    pub pickup_user_name: Option<String>,

    // Check
    #[serde(rename = "nombre_beneficiario", default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,
    #[serde(rename = "consignacion", default, skip_serializing_if = "Option::is_none")]
    pub consignment: Option<String>,
    #[serde(rename = "no_negociable", default, skip_serializing_if = "Option::is_none")]
    pub non_negotiable: Option<bool>,

    // Transfer (numero_cuenta/nombre_cuenta are reused by deposits)
    #[serde(rename = "numero_cuenta", default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(rename = "banco", default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(rename = "tipo_cuenta", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(rename = "nombre_cuenta", default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    // Deposit
    #[serde(rename = "id_socio", default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,
    #[serde(rename = "id_cuenta", default, skip_serializing_if = "Option::is_none")]
    pub member_account: Option<String>,
    #[serde(rename = "nombre_socio", default, skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,

    // Legacy mirror fields
    #[serde(rename = "concepto", default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    #[serde(rename = "solicitante", default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
    #[serde(rename = "detalle", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AdvanceRequestDto {
    /// Empty payload of the given modality with the shared legacy fields filled.
    pub fn new(kind: AdvanceKind, amount: f64, comment: &str, order_id: i64, origin: i64) -> Self {
        Self {
            kind,
            amount,
            comment: comment.to_string(),
            order_id,
            origin,
            concept: Some(comment.to_string()),
            requester: Some(REQUESTER_PLACEHOLDER.to_string()),
            detail: Some(comment.to_string()),
            ..Default::default()
        }
    }

    /// Maps a stored request to the data that seeds the edit form.
    ///
    /// Returns `None` for records whose `tipo` is not a known modality.
    pub fn from_record(record: &AdvanceRequestRecord) -> Option<Self> {
        let kind = record.kind()?;
        let comment = record.comentario.clone().unwrap_or_default();

        let mut dto = Self {
            id_solicitud: Some(record.id_solicitud.to_string()).filter(|_| record.id_solicitud != 0),
            kind,
            amount: record.monto.trim().parse().unwrap_or_default(),
            comment,
            agency: Some(record.agencia.clone()).filter(|a| !a.is_empty()),
            beneficiary_name: record.nombre_beneficiario.clone(),
            consignment: record.consignacion.clone(),
            non_negotiable: Some(record.no_negociable),
            account_number: record.numero_cuenta.clone(),
            bank: record.banco.clone(),
            account_type: record.tipo_cuenta.clone(),
            account_name: record.nombre_cuenta.clone(),
            pickup_user_name: record.nombre_usuario_recoge.clone(),
            ..Default::default()
        };

        match kind {
            AdvanceKind::Efectivo => {
                let same = record.mismo_usuario_recoge == Some(true);
                dto.same_user_picks_up = Some(same);
                dto.pickup_user = if record.mismo_usuario_recoge == Some(false) {
                    record.id_usuario_recoge.clone()
                } else {
                    Some(String::new())
                };
            }
            AdvanceKind::Deposito => {
                dto.member_id = record
                    .id_socio
                    .as_deref()
                    .and_then(serde_helpers::parse_int_prefix);
                dto.member_account = record.numero_cuenta_deposito.clone();
            }
            AdvanceKind::Cheque | AdvanceKind::Transferencia => {}
        }

        Some(dto)
    }
}

// ============================================================================
// Stored request (read model)
// ============================================================================

/// A request as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdvanceRequestRecord {
    #[serde(deserialize_with = "serde_helpers::int")]
    pub id_solicitud: i64,
    #[serde(deserialize_with = "serde_helpers::int")]
    pub numero_orden: i64,
    /// Raw modality code; see [`AdvanceRequestRecord::kind`].
    #[serde(deserialize_with = "serde_helpers::text")]
    pub tipo: String,
    #[serde(deserialize_with = "serde_helpers::text")]
    pub fecha_creacion: String,
    #[serde(deserialize_with = "serde_helpers::text")]
    pub agencia: String,
    #[serde(deserialize_with = "serde_helpers::int")]
    pub id_estado: i64,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub nombre_estado: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub nombre_beneficiario: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub consignacion: Option<String>,
    #[serde(deserialize_with = "serde_helpers::flag")]
    pub no_negociable: bool,
    #[serde(deserialize_with = "serde_helpers::text")]
    pub monto: String,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub comentario: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub comentario_liquidacion: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub solicitante: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub numero_cuenta: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub banco: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub tipo_cuenta: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub nombre_cuenta: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub id_socio: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub numero_cuenta_deposito: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub id_usuario_recoge: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub nombre_usuario_recoge: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_flag")]
    pub mismo_usuario_recoge: Option<bool>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub archivo_excepcion_drive_id: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub archivo_excepcion_nombre: Option<String>,
    #[serde(deserialize_with = "serde_helpers::flag")]
    pub tiene_archivo_excepcion: bool,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub comprobante_drive_id: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub comprobante_nombre: Option<String>,
    #[serde(deserialize_with = "serde_helpers::opt_text")]
    pub comprobante_tipo: Option<String>,
    #[serde(deserialize_with = "serde_helpers::flag")]
    pub tiene_comprobante_transferencia: bool,
}

/// A stored file the user can preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef {
    pub drive_id: String,
    pub file_name: String,
}

impl AttachmentRef {
    /// Embeddable preview URL of the stored file.
    pub fn preview_url(&self) -> String {
        format!("https://drive.google.com/file/d/{}/preview", self.drive_id)
    }
}

impl AdvanceRequestRecord {
    pub fn kind(&self) -> Option<AdvanceKind> {
        AdvanceKind::from_code(&self.tipo)
    }

    pub fn has_exception_file(&self) -> bool {
        self.archivo_excepcion_drive_id.is_some() || self.tiene_archivo_excepcion
    }

    pub fn has_transfer_receipt(&self) -> bool {
        self.comprobante_drive_id.is_some() || self.tiene_comprobante_transferencia
    }

    /// Exception file, if its storage id is known.
    pub fn exception_file(&self) -> Option<AttachmentRef> {
        self.archivo_excepcion_drive_id.as_ref().map(|id| AttachmentRef {
            drive_id: id.clone(),
            file_name: self
                .archivo_excepcion_nombre
                .clone()
                .unwrap_or_else(|| "archivo_excepcion.pdf".to_string()),
        })
    }

    /// Transfer receipt, if its storage id is known.
    pub fn transfer_receipt(&self) -> Option<AttachmentRef> {
        self.comprobante_drive_id.as_ref().map(|id| AttachmentRef {
            drive_id: id.clone(),
            file_name: self
                .comprobante_nombre
                .clone()
                .unwrap_or_else(|| "comprobante_transferencia.pdf".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> AdvanceRequestRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_kind_codes() {
        for kind in AdvanceKind::all() {
            assert_eq!(AdvanceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(AdvanceKind::from_code("vale"), None);
        assert_eq!(
            serde_json::to_string(&AdvanceKind::Transferencia).unwrap(),
            "\"transferencia\""
        );
    }

    #[test]
    fn test_unknown_kind_presentation() {
        let p = kind_presentation("vale");
        assert_eq!(p.color, "gray");
        assert_eq!(p.name, "vale");
        assert_eq!(kind_presentation("deposito").name, "Depósito");
    }

    #[test]
    fn test_payload_omits_unused_fields() {
        let mut dto = AdvanceRequestDto::new(AdvanceKind::Cheque, 150.0, "Viáticos", 88, 1);
        dto.beneficiary_name = Some("Juan Pérez".into());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["tipo"], "cheque");
        assert_eq!(json["monto"], 150.0);
        assert_eq!(json["id_orden"], 88);
        assert_eq!(json["tipo_solicitud"], 1);
        assert_eq!(json["concepto"], "Viáticos");
        assert_eq!(json["solicitante"], REQUESTER_PLACEHOLDER);
        assert_eq!(json["nombre_beneficiario"], "Juan Pérez");
        assert!(json.get("agencia").is_none());
        assert!(json.get("id_solicitud").is_none());
    }

    #[test]
    fn test_record_decodes_loose_types() {
        let r = record(
            r#"{"id_solicitud":"41","numero_orden":1200,"tipo":"cheque","monto":"1500.00",
                "no_negociable":1,"mismo_usuario_recoge":null,"agencia":3,
                "tiene_archivo_excepcion":0,"archivo_excepcion_drive_id":null}"#,
        );
        assert_eq!(r.id_solicitud, 41);
        assert_eq!(r.numero_orden, 1200);
        assert_eq!(r.kind(), Some(AdvanceKind::Cheque));
        assert!(r.no_negociable);
        assert_eq!(r.mismo_usuario_recoge, None);
        assert_eq!(r.agencia, "3");
        assert!(!r.has_exception_file());
    }

    #[test]
    fn test_edit_mapping_for_cash() {
        let r = record(
            r#"{"id_solicitud":7,"tipo":"efectivo","monto":"300","comentario":"Caja chica",
                "agencia":4,"mismo_usuario_recoge":0,"id_usuario_recoge":19}"#,
        );
        let dto = AdvanceRequestDto::from_record(&r).unwrap();
        assert_eq!(dto.id_solicitud.as_deref(), Some("7"));
        assert_eq!(dto.amount, 300.0);
        assert_eq!(dto.agency.as_deref(), Some("4"));
        assert_eq!(dto.same_user_picks_up, Some(false));
        assert_eq!(dto.pickup_user.as_deref(), Some("19"));

        let same = record(r#"{"id_solicitud":8,"tipo":"efectivo","mismo_usuario_recoge":1,"id_usuario_recoge":19}"#);
        let dto = AdvanceRequestDto::from_record(&same).unwrap();
        assert_eq!(dto.same_user_picks_up, Some(true));
        assert_eq!(dto.pickup_user.as_deref(), Some(""));
    }

    #[test]
    fn test_edit_mapping_for_deposit() {
        let r = record(
            r#"{"id_solicitud":9,"tipo":"deposito","id_socio":"5521","numero_cuenta_deposito":"1140021"}"#,
        );
        let dto = AdvanceRequestDto::from_record(&r).unwrap();
        assert_eq!(dto.member_id, Some(5521));
        assert_eq!(dto.member_account.as_deref(), Some("1140021"));
    }

    #[test]
    fn test_edit_mapping_rejects_unknown_kind() {
        assert!(AdvanceRequestDto::from_record(&record(r#"{"tipo":"vale"}"#)).is_none());
    }

    #[test]
    fn test_attachment_defaults() {
        let r = record(r#"{"tipo":"transferencia","comprobante_drive_id":"abc","tiene_comprobante_transferencia":1}"#);
        let receipt = r.transfer_receipt().unwrap();
        assert_eq!(receipt.file_name, "comprobante_transferencia.pdf");
        assert_eq!(receipt.preview_url(), "https://drive.google.com/file/d/abc/preview");
        assert!(r.exception_file().is_none());

        let flagged_only = record(r#"{"tipo":"deposito","tiene_archivo_excepcion":1}"#);
        assert!(flagged_only.has_exception_file());
        assert!(flagged_only.exception_file().is_none());
    }
}

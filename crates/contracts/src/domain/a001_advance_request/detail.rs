//! Read-only presentation of a stored request: detail fields and list summary.

use super::aggregate::{AdvanceKind, AdvanceRequestRecord};
use crate::domain::lookups::Catalog;
use crate::shared::format::{format_amount_str, format_long_datetime};

const NOT_SPECIFIED: &str = "No especificado";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFieldKind {
    Text,
    Amount,
    Status,
    /// Rendered as a link that opens the file preview
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    pub kind: DetailFieldKind,
}

impl DetailField {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            kind: DetailFieldKind::Text,
        }
    }

    fn file(label: &'static str) -> Self {
        Self {
            label,
            value: "Disponible".to_string(),
            kind: DetailFieldKind::File,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDetail {
    pub title: &'static str,
    pub color: &'static str,
    pub fields: Vec<DetailField>,
}

/// Name catalogs used to resolve ids stored on a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailCatalogs {
    pub agencies: Catalog,
    pub banks: Catalog,
    pub account_types: Catalog,
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn catalog_name(catalog: &Catalog, id: Option<&str>, prefix: &str) -> String {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => catalog.name_or(id, prefix),
        _ => NOT_SPECIFIED.to_string(),
    }
}

fn pickup_summary(record: &AdvanceRequestRecord) -> String {
    if record.mismo_usuario_recoge == Some(true) {
        "El mismo solicitante".to_string()
    } else {
        or_default(record.nombre_usuario_recoge.as_deref(), NOT_SPECIFIED)
    }
}

/// Title, color and ordered field list shown in the detail modal.
pub fn format_detail(record: &AdvanceRequestRecord, catalogs: &DetailCatalogs) -> RequestDetail {
    let mut fields = vec![
        DetailField::text("Número de Solicitud", record.id_solicitud.to_string()),
        DetailField::text("Fecha de Creación", format_long_datetime(&record.fecha_creacion)),
        DetailField {
            label: "Monto",
            value: format!("Q. {}", format_amount_str(&record.monto)),
            kind: DetailFieldKind::Amount,
        },
        DetailField {
            label: "Estado",
            value: or_default(record.nombre_estado.as_deref(), "Pendiente"),
            kind: DetailFieldKind::Status,
        },
        DetailField::text("Solicitante", record.solicitante.clone().unwrap_or_default()),
        DetailField::text(
            "Motivo",
            or_default(record.comentario.as_deref(), "Sin especificar"),
        ),
    ];

    let Some(kind) = record.kind() else {
        return RequestDetail {
            title: "Solicitud de Anticipo",
            color: "gray",
            fields,
        };
    };

    let title = match kind {
        AdvanceKind::Efectivo => {
            fields.push(DetailField::text(
                "Agencia",
                catalog_name(&catalogs.agencies, Some(record.agencia.as_str()), "Agencia"),
            ));
            fields.push(DetailField::text("Quien Recoge", pickup_summary(record)));
            "Solicitud de Efectivo"
        }
        AdvanceKind::Cheque => {
            fields.push(DetailField::text(
                "Beneficiario",
                or_default(record.nombre_beneficiario.as_deref(), NOT_SPECIFIED),
            ));
            fields.push(DetailField::text(
                "Tipo de Consignación",
                or_default(record.consignacion.as_deref(), NOT_SPECIFIED),
            ));
            fields.push(DetailField::text(
                "Negociable",
                if record.no_negociable { "No" } else { "Sí" },
            ));
            "Solicitud de Cheque"
        }
        AdvanceKind::Transferencia => {
            fields.push(DetailField::text(
                "Titular de la Cuenta",
                or_default(record.nombre_cuenta.as_deref(), NOT_SPECIFIED),
            ));
            fields.push(DetailField::text(
                "Número de Cuenta",
                or_default(record.numero_cuenta.as_deref(), NOT_SPECIFIED),
            ));
            fields.push(DetailField::text(
                "Banco",
                catalog_name(&catalogs.banks, record.banco.as_deref(), "Banco"),
            ));
            fields.push(DetailField::text(
                "Tipo de Cuenta",
                catalog_name(&catalogs.account_types, record.tipo_cuenta.as_deref(), "Tipo"),
            ));
            if record.has_transfer_receipt() {
                fields.push(DetailField::file("Comprobante"));
            }
            "Solicitud de Transferencia"
        }
        AdvanceKind::Deposito => {
            fields.push(DetailField::text(
                "ID del Socio",
                or_default(record.id_socio.as_deref(), NOT_SPECIFIED),
            ));
            fields.push(DetailField::text(
                "Número de Cuenta",
                or_default(record.numero_cuenta_deposito.as_deref(), NOT_SPECIFIED),
            ));
            fields.push(DetailField::text(
                "Nombre del Socio",
                or_default(record.nombre_cuenta.as_deref(), "Consultar en sistema"),
            ));
            if record.has_exception_file() {
                fields.push(DetailField::file("Archivo de Excepción"));
            }
            "Solicitud de Depósito"
        }
    };

    RequestDetail {
        title,
        color: kind.color(),
        fields,
    }
}

/// Who receives the money, as shown in the list row.
pub fn beneficiary_summary(record: &AdvanceRequestRecord) -> String {
    match record.kind() {
        Some(AdvanceKind::Efectivo) => pickup_summary(record),
        Some(AdvanceKind::Cheque) => {
            or_default(record.nombre_beneficiario.as_deref(), "Sin beneficiario")
        }
        Some(AdvanceKind::Transferencia) => {
            or_default(record.nombre_cuenta.as_deref(), "Sin titular")
        }
        Some(AdvanceKind::Deposito) => {
            format!("Socio ID: {}", or_default(record.id_socio.as_deref(), "N/A"))
        }
        None => NOT_SPECIFIED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lookups::{AccountType, Agency, Bank};

    fn record(json: &str) -> AdvanceRequestRecord {
        serde_json::from_str(json).unwrap()
    }

    fn catalogs() -> DetailCatalogs {
        DetailCatalogs {
            agencies: Catalog::from_options(&[Agency {
                id: "1".into(),
                name: "Agencia Central".into(),
                id_agencia: Some("12".into()),
            }]),
            banks: Catalog::from_options(&[Bank {
                id: "2".into(),
                name: "Banco Industrial".into(),
                id_banco: None,
            }]),
            account_types: Catalog::from_options(&[AccountType {
                id: "1".into(),
                name: "Monetaria".into(),
                id_tipo_cuenta: None,
            }]),
        }
    }

    fn value<'a>(detail: &'a RequestDetail, label: &str) -> &'a str {
        detail
            .fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
            .unwrap()
    }

    #[test]
    fn test_common_fields() {
        let detail = format_detail(
            &record(
                r#"{"id_solicitud":41,"tipo":"cheque","fecha_creacion":"2024-03-15 14:02:26",
                    "monto":"1500","solicitante":"mgarcia","nombre_beneficiario":"Juan Pérez",
                    "consignacion":"No Negociable","no_negociable":1}"#,
            ),
            &catalogs(),
        );
        assert_eq!(detail.title, "Solicitud de Cheque");
        assert_eq!(detail.color, "green");
        assert_eq!(value(&detail, "Número de Solicitud"), "41");
        assert_eq!(value(&detail, "Fecha de Creación"), "15 de marzo de 2024, 14:02");
        assert_eq!(value(&detail, "Monto"), "Q. 1,500.00");
        assert_eq!(value(&detail, "Estado"), "Pendiente");
        assert_eq!(value(&detail, "Motivo"), "Sin especificar");
        assert_eq!(value(&detail, "Negociable"), "No");
        assert_eq!(detail.fields[2].kind, DetailFieldKind::Amount);
        assert_eq!(detail.fields[3].kind, DetailFieldKind::Status);
    }

    #[test]
    fn test_cash_uses_agency_catalog() {
        let detail = format_detail(
            &record(r#"{"tipo":"efectivo","agencia":"12","mismo_usuario_recoge":1}"#),
            &catalogs(),
        );
        assert_eq!(value(&detail, "Agencia"), "Agencia Central");
        assert_eq!(value(&detail, "Quien Recoge"), "El mismo solicitante");

        let unknown = format_detail(
            &record(r#"{"tipo":"efectivo","agencia":7,"mismo_usuario_recoge":0,"nombre_usuario_recoge":"Luis"}"#),
            &catalogs(),
        );
        assert_eq!(value(&unknown, "Agencia"), "Agencia 7");
        assert_eq!(value(&unknown, "Quien Recoge"), "Luis");
    }

    #[test]
    fn test_transfer_fields_and_receipt() {
        let detail = format_detail(
            &record(
                r#"{"tipo":"transferencia","nombre_cuenta":"Transportes Rápidos","numero_cuenta":"3010123456",
                    "banco":"2","tipo_cuenta":"9","comprobante_drive_id":"abc"}"#,
            ),
            &catalogs(),
        );
        assert_eq!(detail.color, "purple");
        assert_eq!(value(&detail, "Banco"), "Banco Industrial");
        assert_eq!(value(&detail, "Tipo de Cuenta"), "Tipo 9");
        let last = detail.fields.last().unwrap();
        assert_eq!(last.label, "Comprobante");
        assert_eq!(last.kind, DetailFieldKind::File);
    }

    #[test]
    fn test_deposit_fields() {
        let detail = format_detail(
            &record(r#"{"tipo":"deposito","id_socio":"5521","tiene_archivo_excepcion":1}"#),
            &catalogs(),
        );
        assert_eq!(detail.title, "Solicitud de Depósito");
        assert_eq!(value(&detail, "ID del Socio"), "5521");
        assert_eq!(value(&detail, "Número de Cuenta"), "No especificado");
        assert_eq!(value(&detail, "Nombre del Socio"), "Consultar en sistema");
        assert_eq!(value(&detail, "Archivo de Excepción"), "Disponible");
    }

    #[test]
    fn test_unknown_kind_is_generic() {
        let detail = format_detail(&record(r#"{"tipo":"vale","monto":"abc"}"#), &catalogs());
        assert_eq!(detail.title, "Solicitud de Anticipo");
        assert_eq!(detail.color, "gray");
        assert_eq!(detail.fields.len(), 6);
        assert_eq!(value(&detail, "Monto"), "Q. abc");
    }

    #[test]
    fn test_beneficiary_summary() {
        assert_eq!(
            beneficiary_summary(&record(r#"{"tipo":"efectivo","mismo_usuario_recoge":0}"#)),
            "No especificado"
        );
        assert_eq!(
            beneficiary_summary(&record(r#"{"tipo":"cheque"}"#)),
            "Sin beneficiario"
        );
        assert_eq!(
            beneficiary_summary(&record(r#"{"tipo":"transferencia","nombre_cuenta":"Rosa"}"#)),
            "Rosa"
        );
        assert_eq!(
            beneficiary_summary(&record(r#"{"tipo":"deposito"}"#)),
            "Socio ID: N/A"
        );
        assert_eq!(
            beneficiary_summary(&record(r#"{"tipo":"deposito","id_socio":31}"#)),
            "Socio ID: 31"
        );
    }
}

use crate::shared::query;
use contracts::domain::a001_advance_request::aggregate::AdvanceRequestDto;
use contracts::domain::a001_advance_request::forms::{routes, SearchError};
use contracts::domain::lookups::{Member, MemberAccount};
use contracts::shared::api_response::ApiResponse;
use serde_json::{json, Value};
use web_sys::{File, FormData};

/// Multipart field carrying the attachment.
const FILES_FIELD: &str = "archivos";

/// Flattens the payload into multipart text fields; absent values are skipped.
pub fn payload_fields(payload: &AdvanceRequestDto) -> Result<Vec<(String, String)>, String> {
    let value = serde_json::to_value(payload).map_err(|e| format!("{e}"))?;
    let Value::Object(map) = value else {
        return Err("payload is not an object".to_string());
    };
    Ok(map
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((key, text))
        })
        .collect())
}

fn build_form_data(payload: &AdvanceRequestDto, file: Option<&File>) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (key, value) in payload_fields(payload)? {
        form.append_with_str(&key, &value)
            .map_err(|e| format!("{e:?}"))?;
    }
    if let Some(file) = file {
        form.append_with_blob_and_filename(FILES_FIELD, file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

/// Sends a create/update request with its optional attachment.
pub async fn submit(
    route: &str,
    payload: &AdvanceRequestDto,
    file: Option<File>,
) -> Result<ApiResponse<Value>, String> {
    let form = build_form_data(payload, file.as_ref())?;
    query::post_form(route, form).await
}

pub async fn search_members(term: &str) -> Result<Vec<Member>, SearchError> {
    match query::post::<_, Vec<Member>>(routes::SEARCH_MEMBERS, &json!({ "termino": term })).await {
        Ok(resp) => resp.into_data().map_err(|e| {
            log::warn!("buscar_socios: {}", e);
            SearchError::SearchFailed
        }),
        Err(e) => {
            log::error!("Error al buscar socios: {}", e);
            Err(SearchError::SearchFailed)
        }
    }
}

pub async fn fetch_member_accounts(member_id: i64) -> Result<Vec<MemberAccount>, SearchError> {
    match query::post::<_, Vec<MemberAccount>>(
        routes::MEMBER_ACCOUNTS,
        &json!({ "id_socio": member_id }),
    )
    .await
    {
        Ok(resp) if resp.is_success() => Ok(resp.datos.unwrap_or_default()),
        Ok(resp) => Err(SearchError::AccountsRejected(
            resp.message_or("Error al cargar las cuentas del socio"),
        )),
        Err(e) => {
            log::error!("Error al cargar cuentas: {}", e);
            Err(SearchError::AccountsFailed)
        }
    }
}

pub async fn fetch_member(member_id: i64) -> Result<Member, String> {
    let resp = query::post::<_, Member>(routes::GET_MEMBER, &json!({ "id_socio": member_id })).await?;
    match (resp.is_success(), resp.datos) {
        (true, Some(member)) => Ok(member),
        (_, _) => Err(format!("socio {} no encontrado", member_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_advance_request::aggregate::AdvanceKind;

    #[test]
    fn test_payload_fields_are_text_and_skip_absent() {
        let mut dto = AdvanceRequestDto::new(AdvanceKind::Efectivo, 250.5, "Caja chica", 88, 1);
        dto.agency = Some("12".into());
        dto.same_user_picks_up = Some(true);
        dto.pickup_user = Some(String::new());

        let fields = payload_fields(&dto).unwrap();
        let get = |k: &str| fields.iter().find(|(key, _)| key == k).map(|(_, v)| v.as_str());

        assert_eq!(get("tipo"), Some("efectivo"));
        assert_eq!(get("monto"), Some("250.5"));
        assert_eq!(get("id_orden"), Some("88"));
        assert_eq!(get("mismo_usuario_recoge"), Some("true"));
        assert_eq!(get("usuario_recoge"), Some(""));
        assert_eq!(get("agencia"), Some("12"));
        assert_eq!(get("nombre_beneficiario"), None);
        assert_eq!(get("id_solicitud"), None);
    }

    #[test]
    fn test_update_payload_carries_id() {
        let mut dto = AdvanceRequestDto::new(AdvanceKind::Cheque, 10.0, "x", 1, 1);
        dto.id_solicitud = Some("41".into());
        let fields = payload_fields(&dto).unwrap();
        assert!(fields.contains(&("id_solicitud".to_string(), "41".to_string())));
    }
}

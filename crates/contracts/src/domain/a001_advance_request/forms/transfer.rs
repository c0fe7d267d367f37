use super::{AdvanceForm, CommonFields, FormContext, LookupKind};
use crate::domain::a001_advance_request::aggregate::{AdvanceKind, AdvanceRequestDto};
use crate::domain::a001_advance_request::validation::ValidationErrors;

pub const FIELD_ACCOUNT_NAME: &str = "nombre_cuenta";
pub const FIELD_ACCOUNT_NUMBER: &str = "numero_cuenta";
pub const FIELD_BANK: &str = "banco";
pub const FIELD_ACCOUNT_TYPE: &str = "tipo_cuenta";

/// Electronic transfer to an external bank account.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferForm {
    pub common: CommonFields,
    pub account_name: String,
    pub account_number: String,
    pub bank: String,
    pub account_type: String,
}

impl AdvanceForm for TransferForm {
    const KIND: AdvanceKind = AdvanceKind::Transferencia;

    fn new(ctx: &FormContext) -> Self {
        Self {
            common: CommonFields::new(ctx),
            account_name: String::new(),
            account_number: String::new(),
            bank: String::new(),
            account_type: String::new(),
        }
    }

    fn common(&self) -> &CommonFields {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonFields {
        &mut self.common
    }

    fn reference_data() -> &'static [LookupKind] {
        &[LookupKind::Banks, LookupKind::AccountTypes]
    }

    fn load_specific(&mut self, dto: &AdvanceRequestDto) {
        self.account_name = dto.account_name.clone().unwrap_or_default();
        self.account_number = dto.account_number.clone().unwrap_or_default();
        self.bank = dto.bank.clone().unwrap_or_default();
        self.account_type = dto.account_type.clone().unwrap_or_default();
    }

    fn validate_specific(&self, errors: &mut ValidationErrors) {
        errors.require_min_len(FIELD_ACCOUNT_NAME, &self.account_name, 3);
        errors.require_min_len(FIELD_ACCOUNT_NUMBER, &self.account_number, 8);
        errors.require(FIELD_BANK, &self.bank);
        errors.require(FIELD_ACCOUNT_TYPE, &self.account_type);
    }

    fn fill_payload(&self, dto: &mut AdvanceRequestDto) {
        dto.account_name = Some(self.account_name.trim().to_string());
        dto.account_number = Some(self.account_number.trim().to_string());
        dto.bank = Some(self.bank.clone());
        dto.account_type = Some(self.account_type.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_advance_request::validation::FieldError;

    #[test]
    fn test_validation_lengths() {
        let ctx = FormContext::new(33, 1);
        let mut form = TransferForm::new(&ctx);
        form.common.amount = "3000".into();
        form.common.comment = "Pago de flete".into();
        form.account_name = "Transportes Rápidos".into();
        form.account_number = "1234567".into();
        form.bank = "2".into();

        let errors = form.validate();
        assert_eq!(errors.get(FIELD_ACCOUNT_NUMBER), Some(&FieldError::TooShort(8)));
        assert_eq!(errors.get(FIELD_ACCOUNT_TYPE), Some(&FieldError::Required));
        assert_eq!(errors.len(), 2);

        form.account_number = "12345678".into();
        form.account_type = "1".into();
        assert!(form.is_valid());
    }

    #[test]
    fn test_load_and_payload() {
        let ctx = FormContext::new(33, 1);
        let stored = AdvanceRequestDto {
            id_solicitud: Some("12".into()),
            kind: AdvanceKind::Transferencia,
            amount: 3000.0,
            comment: "Pago de flete".into(),
            account_name: Some("Transportes Rápidos".into()),
            account_number: Some("3010123456".into()),
            bank: Some("2".into()),
            account_type: Some("1".into()),
            ..Default::default()
        };
        let mut form = TransferForm::new(&ctx);
        form.load(&stored, &ctx);
        assert!(form.is_valid());

        let dto = form.to_payload(&ctx);
        assert_eq!(dto.account_number.as_deref(), Some("3010123456"));
        assert_eq!(dto.bank.as_deref(), Some("2"));
        assert_eq!(dto.account_type.as_deref(), Some("1"));
        assert_eq!(dto.order_id, 33);
        assert!(dto.id_solicitud.is_none());
    }
}

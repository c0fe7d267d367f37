use super::{AdvanceForm, CommonFields, FormContext, LookupKind};
use crate::domain::a001_advance_request::aggregate::{AdvanceKind, AdvanceRequestDto};
use crate::domain::a001_advance_request::validation::ValidationErrors;

pub const FIELD_AGENCY: &str = "agencia";
pub const FIELD_PICKUP_USER: &str = "usuario_recoge";

/// Cash withdrawal at an agency.
#[derive(Debug, Clone, PartialEq)]
pub struct CashForm {
    pub common: CommonFields,
    pub agency: String,
    same_user_picks_up: bool,
    pub pickup_user: String,
}

impl CashForm {
    pub fn same_user_picks_up(&self) -> bool {
        self.same_user_picks_up
    }

    /// Switching back to the requester drops the chosen pickup user.
    pub fn set_same_user(&mut self, same: bool) {
        self.same_user_picks_up = same;
        if same {
            self.pickup_user.clear();
        }
    }

    /// The user selector is shown only while someone else picks up.
    pub fn shows_pickup_selector(&self) -> bool {
        !self.same_user_picks_up
    }
}

impl AdvanceForm for CashForm {
    const KIND: AdvanceKind = AdvanceKind::Efectivo;

    fn new(ctx: &FormContext) -> Self {
        Self {
            common: CommonFields::new(ctx),
            agency: String::new(),
            same_user_picks_up: true,
            pickup_user: String::new(),
        }
    }

    fn common(&self) -> &CommonFields {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonFields {
        &mut self.common
    }

    fn reference_data() -> &'static [LookupKind] {
        &[LookupKind::Agencies, LookupKind::Users]
    }

    fn load_specific(&mut self, dto: &AdvanceRequestDto) {
        self.agency = dto.agency.clone().unwrap_or_default();
        self.same_user_picks_up = dto.same_user_picks_up != Some(false);
        self.pickup_user = dto.pickup_user.clone().unwrap_or_default();
    }

    fn validate_specific(&self, errors: &mut ValidationErrors) {
        errors.require(FIELD_AGENCY, &self.agency);
        if !self.same_user_picks_up {
            errors.require(FIELD_PICKUP_USER, &self.pickup_user);
        }
    }

    fn fill_payload(&self, dto: &mut AdvanceRequestDto) {
        dto.agency = Some(self.agency.clone());
        dto.same_user_picks_up = Some(self.same_user_picks_up);
        dto.pickup_user = Some(if self.same_user_picks_up {
            String::new()
        } else {
            self.pickup_user.clone()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_advance_request::forms::{FIELD_AMOUNT, FIELD_COMMENT};
    use crate::domain::a001_advance_request::validation::FieldError;

    fn filled() -> CashForm {
        let mut form = CashForm::new(&FormContext::new(120, 1));
        form.common.amount = "500".into();
        form.common.comment = "Compra de repuestos".into();
        form.agency = "3".into();
        form
    }

    #[test]
    fn test_defaults() {
        let form = CashForm::new(&FormContext::new(120, 1));
        assert!(form.same_user_picks_up());
        assert!(!form.shows_pickup_selector());
        let errors = form.validate();
        assert_eq!(errors.get(FIELD_AMOUNT), Some(&FieldError::Required));
        assert_eq!(errors.get(FIELD_AGENCY), Some(&FieldError::Required));
        assert_eq!(errors.get(FIELD_COMMENT), Some(&FieldError::Required));
        assert!(errors.get(FIELD_PICKUP_USER).is_none());
    }

    #[test]
    fn test_pickup_user_required_only_for_someone_else() {
        let mut form = filled();
        assert!(form.is_valid());

        form.set_same_user(false);
        assert!(form.shows_pickup_selector());
        assert_eq!(form.validate().get(FIELD_PICKUP_USER), Some(&FieldError::Required));

        form.pickup_user = "19".into();
        assert!(form.is_valid());

        form.set_same_user(true);
        assert!(form.pickup_user.is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_payload() {
        let mut form = filled();
        form.set_same_user(false);
        form.pickup_user = "19".into();
        let dto = form.to_payload(&FormContext::new(120, 1));
        assert_eq!(dto.kind, AdvanceKind::Efectivo);
        assert_eq!(dto.amount, 500.0);
        assert_eq!(dto.agency.as_deref(), Some("3"));
        assert_eq!(dto.same_user_picks_up, Some(false));
        assert_eq!(dto.pickup_user.as_deref(), Some("19"));
        assert_eq!(dto.concept.as_deref(), Some("Compra de repuestos"));

        form.set_same_user(true);
        let dto = form.to_payload(&FormContext::new(120, 1));
        assert_eq!(dto.pickup_user.as_deref(), Some(""));
    }

    #[test]
    fn test_edit_load_keeps_flag_unless_false() {
        let ctx = FormContext::new(120, 1);
        let mut form = CashForm::new(&ctx);
        let dto = AdvanceRequestDto {
            kind: AdvanceKind::Efectivo,
            amount: 75.5,
            comment: "Caja chica".into(),
            agency: Some("4".into()),
            ..Default::default()
        };
        form.load(&dto, &ctx);
        assert!(form.same_user_picks_up());
        assert_eq!(form.agency, "4");
        assert_eq!(form.common.amount, "75.50");

        let other = AdvanceRequestDto {
            same_user_picks_up: Some(false),
            pickup_user: Some("22".into()),
            ..dto
        };
        form.load(&other, &ctx);
        assert!(!form.same_user_picks_up());
        assert_eq!(form.pickup_user, "22");
    }
}

use super::{AdvanceForm, CommonFields, FormContext};
use crate::domain::a001_advance_request::aggregate::{
    AdvanceKind, AdvanceRequestDto, CONSIGNMENT_NEGOTIABLE, CONSIGNMENT_NON_NEGOTIABLE,
};
use crate::domain::a001_advance_request::validation::{FieldError, ValidationErrors};

pub const FIELD_BENEFICIARY: &str = "nombre_beneficiario";
pub const FIELD_CONSIGNMENT: &str = "consignacion";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consignment {
    Negotiable,
    NonNegotiable,
}

impl Consignment {
    pub fn label(&self) -> &'static str {
        match self {
            Consignment::Negotiable => CONSIGNMENT_NEGOTIABLE,
            Consignment::NonNegotiable => CONSIGNMENT_NON_NEGOTIABLE,
        }
    }

    /// Ignores case and repeated whitespace: `"no  NEGOCIABLE"` is non-negotiable.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.split_whitespace().collect::<Vec<_>>().join(" ");
        Consignment::all()
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(&normalized))
    }

    pub fn all() -> [Consignment; 2] {
        [Consignment::Negotiable, Consignment::NonNegotiable]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckForm {
    pub common: CommonFields,
    pub beneficiary: String,
    pub consignment: Option<Consignment>,
}

impl AdvanceForm for CheckForm {
    const KIND: AdvanceKind = AdvanceKind::Cheque;

    fn new(ctx: &FormContext) -> Self {
        Self {
            common: CommonFields::new(ctx),
            beneficiary: String::new(),
            consignment: None,
        }
    }

    fn common(&self) -> &CommonFields {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonFields {
        &mut self.common
    }

    fn load_specific(&mut self, dto: &AdvanceRequestDto) {
        self.beneficiary = dto.beneficiary_name.clone().unwrap_or_default();
        let stored = dto.consignment.as_deref().unwrap_or_default();
        self.consignment = if dto.non_negotiable == Some(true) {
            Some(Consignment::NonNegotiable)
        } else {
            // empty or unrecognised stored values read as negotiable
            Some(Consignment::from_label(stored).unwrap_or(Consignment::Negotiable))
        };
    }

    fn validate_specific(&self, errors: &mut ValidationErrors) {
        errors.require_min_len(FIELD_BENEFICIARY, &self.beneficiary, 3);
        if self.consignment.is_none() {
            errors.add(FIELD_CONSIGNMENT, FieldError::Required);
        }
    }

    fn fill_payload(&self, dto: &mut AdvanceRequestDto) {
        let consignment = self.consignment.unwrap_or(Consignment::Negotiable);
        dto.beneficiary_name = Some(self.beneficiary.trim().to_string());
        dto.consignment = Some(consignment.label().to_string());
        dto.non_negotiable = Some(consignment == Consignment::NonNegotiable);
    }
}

//! Form models of the four modalities.
//!
//! Every modality keeps the raw values typed by the user, validates them
//! and turns them into an [`AdvanceRequestDto`]. The shared lifecycle
//! (reset, edit load, submit) is driven by the UI through [`AdvanceForm`].

pub mod cash;
pub mod check;
pub mod deposit;
pub mod transfer;

pub use cash::CashForm;
pub use check::{CheckForm, Consignment};
pub use deposit::{DepositForm, LookupTicket, MemberLookup, SearchError};
pub use transfer::TransferForm;

use super::aggregate::{AdvanceKind, AdvanceRequestDto};
use super::validation::{parse_amount, ValidationErrors};

/// Values the host view passes to every form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormContext {
    /// Purchase order the request belongs to
    pub order_id: i64,
    /// Request origin (`tipo_solicitud`), 1 for regular orders
    pub origin: i64,
}

impl FormContext {
    pub fn new(order_id: i64, origin: i64) -> Self {
        Self { order_id, origin }
    }
}

/// Reference lists a modality needs before it can be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Agencies,
    Banks,
    AccountTypes,
    Users,
}

pub const FIELD_AMOUNT: &str = "monto";
pub const FIELD_COMMENT: &str = "comentario";

/// Fields every modality has.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommonFields {
    /// Amount as typed
    pub amount: String,
    pub comment: String,
    pub order_id: i64,
    pub origin: i64,
}

impl CommonFields {
    pub fn new(ctx: &FormContext) -> Self {
        Self {
            amount: String::new(),
            comment: String::new(),
            order_id: ctx.order_id,
            origin: ctx.origin,
        }
    }

    /// Comment falls back to the legacy `concepto`.
    pub fn load(&mut self, dto: &AdvanceRequestDto, ctx: &FormContext) {
        self.amount = if dto.amount > 0.0 {
            format_amount_input(dto.amount)
        } else {
            String::new()
        };
        self.comment = if !dto.comment.is_empty() {
            dto.comment.clone()
        } else {
            dto.concept.clone().unwrap_or_default()
        };
        self.order_id = if dto.order_id != 0 { dto.order_id } else { ctx.order_id };
        self.origin = if dto.origin != 0 { dto.origin } else { ctx.origin };
    }

    pub fn validate(&self, errors: &mut ValidationErrors) {
        errors.require_amount(FIELD_AMOUNT, &self.amount);
        errors.require(FIELD_COMMENT, &self.comment);
    }

    /// Base payload; order id and origin fall back to the host values when unset.
    pub fn payload(&self, kind: AdvanceKind, ctx: &FormContext) -> AdvanceRequestDto {
        let order_id = if self.order_id != 0 { self.order_id } else { ctx.order_id };
        let origin = if self.origin != 0 { self.origin } else { ctx.origin };
        AdvanceRequestDto::new(
            kind,
            parse_amount(&self.amount).unwrap_or_default(),
            self.comment.trim(),
            order_id,
            origin,
        )
    }
}

/// Amount as it should appear in the input: no trailing `.00`.
fn format_amount_input(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

/// Lifecycle shared by the modality forms.
pub trait AdvanceForm: Clone + PartialEq + Send + Sync + 'static {
    const KIND: AdvanceKind;

    /// Fresh form for the host context.
    fn new(ctx: &FormContext) -> Self;

    fn common(&self) -> &CommonFields;

    fn common_mut(&mut self) -> &mut CommonFields;

    /// Lists to request when the form is initialised.
    fn reference_data() -> &'static [LookupKind] {
        &[]
    }

    /// Patches modality fields from an existing request.
    fn load_specific(&mut self, dto: &AdvanceRequestDto);

    fn validate_specific(&self, errors: &mut ValidationErrors);

    /// Adds modality fields to the base payload.
    fn fill_payload(&self, dto: &mut AdvanceRequestDto);

    fn load(&mut self, dto: &AdvanceRequestDto, ctx: &FormContext) {
        self.common_mut().load(dto, ctx);
        self.load_specific(dto);
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.common().validate(&mut errors);
        self.validate_specific(&mut errors);
        errors
    }

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    fn to_payload(&self, ctx: &FormContext) -> AdvanceRequestDto {
        let mut dto = self.common().payload(Self::KIND, ctx);
        self.fill_payload(&mut dto);
        dto
    }
}

/// Backend routes used by the forms and the list.
/// Allows one submission at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    /// Marks a submission as started; false when one is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

pub mod routes {
    pub const CREATE: &str = "contabilidad/crearSolicitudAnticipoConArchivo";
    pub const UPDATE: &str = "contabilidad/actualizarSolicitudAnticipoConArchivo";
    pub const LIST: &str = "contabilidad/obtenerSolicitudesAnticipo";
    pub const CANCEL: &str = "facturas/anularSolicitudAnticipo";
    pub const AGENCIES: &str = "facturas/usuarios/listaAgencias";
    pub const USERS: &str = "facturas/usuarios/listaUsuarios";
    pub const BANKS: &str = "facturas/bancos/lista";
    pub const ACCOUNT_TYPES: &str = "facturas/tiposCuenta/lista";
    pub const SEARCH_MEMBERS: &str = "contabilidad/buscar_socios";
    pub const MEMBER_ACCOUNTS: &str = "contabilidad/buscar_cuentas";
    pub const GET_MEMBER: &str = "contabilidad/obtener_socio";

    /// Update only when editing a request that already has an id.
    pub fn submit_route(existing_id: Option<&str>) -> &'static str {
        match existing_id {
            Some(id) if !id.is_empty() => UPDATE,
            _ => CREATE,
        }
    }
}

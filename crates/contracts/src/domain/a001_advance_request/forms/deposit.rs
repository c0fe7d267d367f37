//! Deposit into a member account, with the member search that feeds it.

use super::{AdvanceForm, CommonFields, FormContext};
use crate::domain::a001_advance_request::aggregate::{AdvanceKind, AdvanceRequestDto};
use crate::domain::a001_advance_request::validation::{FieldError, ValidationErrors};
use crate::domain::lookups::{Member, MemberAccount};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

pub const FIELD_MEMBER: &str = "id_socio";
pub const FIELD_ACCOUNT: &str = "id_cuenta";

/// Shortest search term sent to the backend.
pub const MIN_SEARCH_LEN: usize = 2;

/// Messages shown under the member search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Debe escribir al menos 2 caracteres para buscar")]
    TermTooShort,
    #[error("No se encontraron socios con ese ID o DPI")]
    NoResults,
    #[error("Error al buscar socios. Inténtelo nuevamente.")]
    SearchFailed,
    #[error("Este socio no tiene cuentas disponibles")]
    NoAccounts,
    /// Backend refused the account list; carries its message.
    #[error("{0}")]
    AccountsRejected(String),
    #[error("Error al cargar las cuentas del socio. Inténtelo nuevamente.")]
    AccountsFailed,
    #[error("Error al cargar los datos del socio")]
    MemberLoadFailed,
}

/// Identifies one pending backend lookup. Replies carrying a ticket that is
/// no longer current are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupTicket(u64);

impl LookupTicket {
    /// Unique for the lifetime of the page, so a reset form never reuses one.
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        LookupTicket(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// State of the member search box, its results and the chosen member.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberLookup {
    pub term: String,
    pub results: Vec<Member>,
    pub selected: Option<Member>,
    pub accounts: Vec<MemberAccount>,
    pub show_results: bool,
    pub show_details: bool,
    pub searching: bool,
    pub loading_accounts: bool,
    pub error: Option<SearchError>,
    /// Search in flight
    search_ticket: Option<LookupTicket>,
    /// Member fetch or account load in flight
    member_ticket: Option<LookupTicket>,
}

impl MemberLookup {
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepositForm {
    pub common: CommonFields,
    pub member_id: Option<i64>,
    /// Selected account number, as text
    pub account_id: String,
    pub lookup: MemberLookup,
    /// Account of the request being edited, restored once accounts arrive.
    pending_account: Option<String>,
}

impl DepositForm {
    /// Typing in the search box drops a search still in flight. An emptied
    /// box also drops results and messages.
    pub fn term_changed(&mut self, term: &str) {
        self.lookup.term = term.to_string();
        if self.lookup.search_ticket.take().is_some() {
            self.lookup.searching = false;
        }
        if term.is_empty() {
            self.lookup.results.clear();
            self.lookup.show_results = false;
            self.lookup.error = None;
        }
    }

    /// Starts a search; returns its ticket and the term to send. `None` when
    /// the term is too short or a search is already running.
    pub fn begin_search(&mut self) -> Option<(LookupTicket, String)> {
        if self.lookup.searching {
            return None;
        }
        let term = self.lookup.term.trim().to_string();
        if term.chars().count() < MIN_SEARCH_LEN {
            self.lookup.error = Some(SearchError::TermTooShort);
            return None;
        }
        let ticket = LookupTicket::next();
        self.lookup.search_ticket = Some(ticket);
        self.lookup.searching = true;
        self.lookup.error = None;
        self.lookup.results.clear();
        self.lookup.show_results = false;
        Some((ticket, term))
    }

    /// Applies a search reply. Returns false when the reply was stale.
    pub fn search_finished(
        &mut self,
        ticket: LookupTicket,
        result: Result<Vec<Member>, SearchError>,
    ) -> bool {
        if self.lookup.search_ticket != Some(ticket) {
            return false;
        }
        self.lookup.search_ticket = None;
        self.lookup.searching = false;
        match result {
            Ok(members) => {
                self.lookup.show_results = !members.is_empty();
                if members.is_empty() {
                    self.lookup.error = Some(SearchError::NoResults);
                }
                self.lookup.results = members;
            }
            Err(_) => {
                self.lookup.error = Some(SearchError::SearchFailed);
                self.lookup.results.clear();
                self.lookup.show_results = false;
            }
        }
        true
    }

    /// Picks a member; returns the ticket and id for fetching its accounts.
    pub fn select_member(&mut self, member: Member) -> (LookupTicket, i64) {
        let id = member.id_socio;
        let ticket = LookupTicket::next();
        self.lookup.term = member.search_label();
        self.lookup.selected = Some(member);
        self.lookup.show_results = false;
        self.lookup.show_details = true;
        self.lookup.error = None;
        self.lookup.accounts.clear();
        self.lookup.loading_accounts = true;
        self.lookup.member_ticket = Some(ticket);
        self.member_id = Some(id);
        self.account_id.clear();
        (ticket, id)
    }

    /// Applies an account list reply. Returns false when the reply was stale.
    pub fn accounts_loaded(
        &mut self,
        ticket: LookupTicket,
        result: Result<Vec<MemberAccount>, SearchError>,
    ) -> bool {
        if self.lookup.member_ticket != Some(ticket) {
            return false;
        }
        self.lookup.member_ticket = None;
        self.lookup.loading_accounts = false;
        match result {
            Ok(accounts) => {
                if accounts.is_empty() {
                    self.lookup.error = Some(SearchError::NoAccounts);
                }
                if let Some(pending) = self.pending_account.take() {
                    if accounts.iter().any(|a| a.number.to_string() == pending) {
                        self.account_id = pending;
                    }
                }
                self.lookup.accounts = accounts;
            }
            Err(e) => {
                self.pending_account = None;
                self.lookup.error = Some(e);
            }
        }
        true
    }

    /// Edit mode: starts fetching the stored member. Returns the ticket and
    /// member id, or `None` when the request has no member.
    pub fn begin_restore(&mut self) -> Option<(LookupTicket, i64)> {
        let id = self.member_id?;
        let ticket = LookupTicket::next();
        self.lookup.member_ticket = Some(ticket);
        Some((ticket, id))
    }

    /// Applies the stored member reply. On success the member is selected
    /// and the accounts request to send is returned. Stale replies, for
    /// instance after the user picked another member, are dropped.
    pub fn restore_finished(
        &mut self,
        ticket: LookupTicket,
        result: Result<Member, SearchError>,
    ) -> Option<(LookupTicket, i64)> {
        if self.lookup.member_ticket != Some(ticket) {
            return None;
        }
        self.lookup.member_ticket = None;
        match result {
            Ok(member) => Some(self.select_member(member)),
            Err(_) => {
                self.pending_account = None;
                self.lookup.error = Some(SearchError::MemberLoadFailed);
                None
            }
        }
    }

    pub fn clear_member(&mut self) {
        self.lookup = MemberLookup::default();
        self.member_id = None;
        self.account_id.clear();
        self.pending_account = None;
    }

    pub fn selected_account(&self) -> Option<&MemberAccount> {
        let wanted = self.account_id.trim();
        self.lookup
            .accounts
            .iter()
            .find(|a| !wanted.is_empty() && a.number.to_string() == wanted)
    }

    fn member_name(&self) -> String {
        self.lookup
            .selected
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_default()
    }
}

impl AdvanceForm for DepositForm {
    const KIND: AdvanceKind = AdvanceKind::Deposito;

    fn new(ctx: &FormContext) -> Self {
        Self {
            common: CommonFields::new(ctx),
            member_id: None,
            account_id: String::new(),
            lookup: MemberLookup::default(),
            pending_account: None,
        }
    }

    fn common(&self) -> &CommonFields {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonFields {
        &mut self.common
    }

    fn load_specific(&mut self, dto: &AdvanceRequestDto) {
        self.member_id = dto.member_id;
        // set once the member's accounts confirm it
        self.account_id.clear();
        self.pending_account = dto.member_account.clone().filter(|a| !a.is_empty());
    }

    fn validate_specific(&self, errors: &mut ValidationErrors) {
        if self.member_id.is_none() {
            errors.add(FIELD_MEMBER, FieldError::Required);
        }
        errors.require(FIELD_ACCOUNT, &self.account_id);
    }

    fn fill_payload(&self, dto: &mut AdvanceRequestDto) {
        let name = self.member_name();
        let account = self.selected_account();
        let number = account.map(|a| a.number.to_string()).unwrap_or_default();
        let product = account.map(|a| a.product.clone()).unwrap_or_default();

        dto.member_id = self.member_id;
        dto.member_account = Some(self.account_id.clone());
        dto.account_number = Some(number.clone());
        dto.account_name = Some(name.clone());
        dto.member_name = Some(name.clone());
        dto.detail = Some(format!(
            "Depósito a cuenta {} ({}) de {}",
            number, product, name
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member {
            id_socio: 5521,
            name: "Ana López".into(),
            ..Default::default()
        }
    }

    fn accounts() -> Vec<MemberAccount> {
        vec![
            MemberAccount {
                number: 1140021,
                product: "114A.AHORRO.DISPONIBLE".into(),
                status: "Activo".into(),
            },
            MemberAccount {
                number: 2010007,
                product: "201.PLAZO FIJO".into(),
                status: "Activo".into(),
            },
        ]
    }

    fn stored_deposit() -> AdvanceRequestDto {
        AdvanceRequestDto {
            kind: AdvanceKind::Deposito,
            amount: 800.0,
            comment: "Depósito de anticipo".into(),
            member_id: Some(5521),
            member_account: Some("2010007".into()),
            ..Default::default()
        }
    }

    fn named(id: i64, name: &str) -> Member {
        Member {
            id_socio: id,
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_requires_two_chars() {
        let mut form = DepositForm::new(&FormContext::new(1, 1));
        form.term_changed(" a ");
        assert_eq!(form.begin_search(), None);
        assert_eq!(
            form.lookup.message().as_deref(),
            Some("Debe escribir al menos 2 caracteres para buscar")
        );

        form.term_changed(" 55 ");
        let (_, term) = form.begin_search().unwrap();
        assert_eq!(term, "55");
        assert!(form.lookup.searching);
        assert!(form.lookup.error.is_none());
    }

    #[test]
    fn test_search_results_and_failures() {
        let mut form = DepositForm::new(&FormContext::new(1, 1));
        form.term_changed("5521");
        let (ticket, _) = form.begin_search().unwrap();
        assert!(form.search_finished(ticket, Ok(vec![member()])));
        assert!(form.lookup.show_results);
        assert!(!form.lookup.searching);

        let (ticket, _) = form.begin_search().unwrap();
        form.search_finished(ticket, Ok(Vec::new()));
        assert!(!form.lookup.show_results);
        assert_eq!(form.lookup.error, Some(SearchError::NoResults));

        let (ticket, _) = form.begin_search().unwrap();
        form.search_finished(ticket, Err(SearchError::SearchFailed));
        assert_eq!(
            form.lookup.message().as_deref(),
            Some("Error al buscar socios. Inténtelo nuevamente.")
        );

        form.term_changed("");
        assert!(form.lookup.error.is_none());
        assert!(form.lookup.results.is_empty());
    }

    #[test]
    fn test_no_second_search_while_running() {
        let mut form = DepositForm::new(&FormContext::new(1, 1));
        form.term_changed("55");
        assert!(form.begin_search().is_some());
        assert_eq!(form.begin_search(), None);
        assert!(form.lookup.searching);
    }

    #[test]
    fn test_overlapping_searches_keep_newest_results() {
        let mut form = DepositForm::new(&FormContext::new(1, 1));
        form.term_changed("55");
        let (first, _) = form.begin_search().unwrap();
        form.term_changed("66");
        assert!(!form.lookup.searching);
        let (second, term) = form.begin_search().unwrap();
        assert_eq!(term, "66");

        assert!(!form.search_finished(first, Ok(vec![named(55, "Stale")])));
        assert!(form.lookup.searching);
        assert!(form.search_finished(second, Ok(vec![named(66, "Fresh")])));

        assert_eq!(form.lookup.term, "66");
        let names: Vec<&str> = form.lookup.results.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Fresh"]);
    }

    #[test]
    fn test_search_reply_after_reset_is_dropped() {
        let ctx = FormContext::new(1, 1);
        let mut form = DepositForm::new(&ctx);
        form.term_changed("55");
        let (stale, _) = form.begin_search().unwrap();

        let mut fresh = DepositForm::new(&ctx);
        fresh.term_changed("77");
        fresh.begin_search().unwrap();
        assert!(!fresh.search_finished(stale, Ok(vec![member()])));
        assert!(fresh.lookup.results.is_empty());
    }

    #[test]
    fn test_select_member_resets_account() {
        let mut form = DepositForm::new(&FormContext::new(1, 1));
        form.account_id = "999".into();
        let (ticket, id) = form.select_member(member());
        assert_eq!(id, 5521);
        assert_eq!(form.lookup.term, "5521 - Ana López");
        assert_eq!(form.member_id, Some(5521));
        assert!(form.account_id.is_empty());
        assert!(form.lookup.show_details);
        assert!(form.lookup.loading_accounts);

        assert!(form.accounts_loaded(ticket, Ok(Vec::new())));
        assert_eq!(
            form.lookup.message().as_deref(),
            Some("Este socio no tiene cuentas disponibles")
        );

        let (ticket, _) = form.select_member(member());
        form.accounts_loaded(ticket, Err(SearchError::AccountsRejected("Socio inactivo".into())));
        assert_eq!(form.lookup.message().as_deref(), Some("Socio inactivo"));
    }

    #[test]
    fn test_accounts_of_previous_member_are_dropped() {
        let mut form = DepositForm::new(&FormContext::new(1, 1));
        let (first, _) = form.select_member(named(10, "Primero"));
        let (second, _) = form.select_member(named(20, "Segundo"));
        assert!(!form.accounts_loaded(first, Ok(accounts())));
        assert!(form.lookup.accounts.is_empty());
        assert!(form.lookup.loading_accounts);
        assert!(form.accounts_loaded(second, Ok(accounts())));
        assert_eq!(form.lookup.accounts.len(), 2);
    }

    #[test]
    fn test_edit_keeps_stored_account() {
        let ctx = FormContext::new(1, 1);
        let mut form = DepositForm::new(&ctx);
        form.load(&stored_deposit(), &ctx);
        assert_eq!(form.member_id, Some(5521));
        assert!(form.account_id.is_empty());

        let (ticket, id) = form.begin_restore().unwrap();
        assert_eq!(id, 5521);
        let (accounts_ticket, _) = form.restore_finished(ticket, Ok(member())).unwrap();
        assert!(form.account_id.is_empty());
        form.accounts_loaded(accounts_ticket, Ok(accounts()));
        assert_eq!(form.account_id, "2010007");
        assert!(form.is_valid());
    }

    #[test]
    fn test_edit_drops_account_missing_from_list() {
        let ctx = FormContext::new(1, 1);
        let mut form = DepositForm::new(&ctx);
        let mut stored = stored_deposit();
        stored.member_account = Some("9999999".into());
        form.load(&stored, &ctx);

        let (ticket, _) = form.begin_restore().unwrap();
        let (accounts_ticket, _) = form.restore_finished(ticket, Ok(member())).unwrap();
        form.accounts_loaded(accounts_ticket, Ok(accounts()));
        assert!(form.account_id.is_empty());
        assert_eq!(form.validate().get(FIELD_ACCOUNT), Some(&FieldError::Required));
    }

    #[test]
    fn test_failed_member_load_blocks_submit() {
        let ctx = FormContext::new(1, 1);
        let mut form = DepositForm::new(&ctx);
        form.load(&stored_deposit(), &ctx);

        let (ticket, _) = form.begin_restore().unwrap();
        assert_eq!(form.restore_finished(ticket, Err(SearchError::MemberLoadFailed)), None);
        assert_eq!(
            form.lookup.message().as_deref(),
            Some("Error al cargar los datos del socio")
        );
        assert!(!form.is_valid());
        assert_eq!(form.validate().get(FIELD_ACCOUNT), Some(&FieldError::Required));
    }

    #[test]
    fn test_late_restore_does_not_replace_user_choice() {
        let ctx = FormContext::new(1, 1);
        let mut form = DepositForm::new(&ctx);
        form.load(&stored_deposit(), &ctx);
        let (restore, _) = form.begin_restore().unwrap();

        form.select_member(named(7788, "Elegido"));
        assert_eq!(form.restore_finished(restore, Ok(member())), None);
        assert_eq!(form.member_id, Some(7788));
        assert_eq!(form.lookup.term, "7788 - Elegido");
    }

    #[test]
    fn test_clear_member() {
        let mut form = DepositForm::new(&FormContext::new(1, 1));
        let (ticket, _) = form.select_member(member());
        form.accounts_loaded(ticket, Ok(accounts()));
        form.account_id = "1140021".into();
        form.clear_member();
        assert_eq!(form.lookup, MemberLookup::default());
        assert_eq!(form.member_id, None);
        assert!(form.account_id.is_empty());
        let errors = form.validate();
        assert_eq!(errors.get(FIELD_MEMBER), Some(&FieldError::Required));
        assert_eq!(errors.get(FIELD_ACCOUNT), Some(&FieldError::Required));
    }

    #[test]
    fn test_payload() {
        let ctx = FormContext::new(64, 1);
        let mut form = DepositForm::new(&ctx);
        form.common.amount = "800".into();
        form.common.comment = "Depósito de anticipo".into();
        let (ticket, _) = form.select_member(member());
        form.accounts_loaded(ticket, Ok(accounts()));
        form.account_id = "1140021".into();

        let dto = form.to_payload(&ctx);
        assert_eq!(dto.kind, AdvanceKind::Deposito);
        assert_eq!(dto.member_id, Some(5521));
        assert_eq!(dto.member_account.as_deref(), Some("1140021"));
        assert_eq!(dto.account_number.as_deref(), Some("1140021"));
        assert_eq!(dto.account_name.as_deref(), Some("Ana López"));
        assert_eq!(dto.member_name.as_deref(), Some("Ana López"));
        assert_eq!(
            dto.detail.as_deref(),
            Some("Depósito a cuenta 1140021 (114A.AHORRO.DISPONIBLE) de Ana López")
        );
        assert_eq!(dto.concept.as_deref(), Some("Depósito de anticipo"));
    }
}

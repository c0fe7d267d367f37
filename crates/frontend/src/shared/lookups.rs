//! Reference lists shared by the forms and the detail view.
//!
//! Each list is fetched at most once per page; later callers reuse it.

use crate::shared::notifications::NotificationService;
use crate::shared::query;
use contracts::domain::a001_advance_request::forms::{routes, LookupKind};
use contracts::domain::lookups::{AccountType, Agency, Bank, User};
use contracts::shared::api_response::ApiResponse;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Idle,
    Loading,
    Loaded,
}

pub struct LookupList<T: Send + Sync + 'static> {
    route: &'static str,
    /// Shown when loading fails
    error_message: &'static str,
    items: RwSignal<Vec<T>>,
    state: RwSignal<LoadState>,
}

impl<T: Send + Sync + 'static> Clone for LookupList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for LookupList<T> {}

impl<T> LookupList<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    fn new(route: &'static str, error_message: &'static str) -> Self {
        Self {
            route,
            error_message,
            items: RwSignal::new(Vec::new()),
            state: RwSignal::new(LoadState::Idle),
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.items.get()
    }

    pub fn is_loading(&self) -> bool {
        self.state.get() == LoadState::Loading
    }

    /// Fetches the list unless it is loaded or in flight. Failures are
    /// reported through `notifications` when given, otherwise only logged.
    pub fn ensure_loaded(&self, notifications: Option<NotificationService>) {
        if self.state.get_untracked() != LoadState::Idle {
            return;
        }
        self.state.set(LoadState::Loading);

        let this = *self;
        spawn_local(async move {
            let reply = query::get::<Vec<T>>(this.route).await;
            let next = settled_state(&reply);
            match reply {
                Ok(resp) if resp.is_success() => {
                    this.items.set(resp.datos.unwrap_or_default());
                }
                Ok(resp) => {
                    log::warn!("{}: {}", this.route, resp.message_or("respuesta sin datos"));
                }
                Err(e) => {
                    log::warn!("{}: {}", this.error_message, e);
                    if let Some(n) = notifications {
                        n.error(this.error_message);
                    }
                }
            }
            this.state.set(next);
        });
    }
}

/// A list counts as loaded only once it arrived with items; anything else
/// allows a retry on the next form.
fn settled_state<T>(reply: &Result<ApiResponse<Vec<T>>, String>) -> LoadState {
    match reply {
        Ok(resp) if resp.is_success() && resp.datos.as_ref().is_some_and(|d| !d.is_empty()) => {
            LoadState::Loaded
        }
        _ => LoadState::Idle,
    }
}

/// Context holding every reference list.
#[derive(Clone, Copy)]
pub struct LookupCache {
    pub agencies: LookupList<Agency>,
    pub users: LookupList<User>,
    pub banks: LookupList<Bank>,
    pub account_types: LookupList<AccountType>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self {
            agencies: LookupList::new(routes::AGENCIES, "Error al cargar agencias"),
            users: LookupList::new(routes::USERS, "Error al cargar usuarios"),
            banks: LookupList::new(routes::BANKS, "Error al cargar bancos"),
            account_types: LookupList::new(routes::ACCOUNT_TYPES, "Error al cargar tipos de cuenta"),
        }
    }

    pub fn load(&self, kinds: &[LookupKind], notifications: Option<NotificationService>) {
        for kind in kinds {
            match kind {
                LookupKind::Agencies => self.agencies.ensure_loaded(notifications),
                LookupKind::Users => self.users.ensure_loaded(notifications),
                LookupKind::Banks => self.banks.ensure_loaded(notifications),
                LookupKind::AccountTypes => self.account_types.ensure_loaded(notifications),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::lookups::Bank;

    fn reply(json: &str) -> Result<ApiResponse<Vec<Bank>>, String> {
        Ok(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_only_filled_success_settles_as_loaded() {
        assert_eq!(
            settled_state(&reply(r#"{"respuesta":"success","datos":[{"id":1,"nombre":"BI"}]}"#)),
            LoadState::Loaded
        );
        assert_eq!(
            settled_state(&reply(r#"{"respuesta":"error","mensaje":"Sesión expirada"}"#)),
            LoadState::Idle
        );
        assert_eq!(
            settled_state(&reply(r#"{"respuesta":"success","datos":[]}"#)),
            LoadState::Idle
        );
        assert_eq!(settled_state::<Bank>(&Err("HTTP 500".into())), LoadState::Idle);
    }
}

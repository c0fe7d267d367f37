use crate::domain::a001_advance_request::ui::list::AdvanceRequestsPanel;
use crate::shared::config::PanelParams;
use crate::shared::lookups::LookupCache;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Services shared by the panel, its dialogs and the forms.
    provide_context(ModalStackService::new());
    provide_context(NotificationService::new());
    provide_context(LookupCache::new());

    let params = PanelParams::from_location();
    log::debug!(
        "Panel de anticipos: orden {} origen {} solo_lectura {}",
        params.id_orden,
        params.origen,
        params.solo_lectura
    );

    view! {
        <ConfigProvider>
            <AdvanceRequestsPanel
                order_id=params.id_orden
                origin=params.origen
                read_only=params.solo_lectura
            />
            <ModalHost />
            <NotificationHost />
        </ConfigProvider>
    }
}

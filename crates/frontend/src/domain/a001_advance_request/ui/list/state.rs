use contracts::domain::a001_advance_request::aggregate::AdvanceRequestRecord;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct AdvanceRequestsState {
    pub items: Vec<AdvanceRequestRecord>,
    pub is_loaded: bool,
}

impl AdvanceRequestsState {
    /// Drops the cancelled request from the table.
    pub fn remove(&mut self, id_solicitud: i64) {
        self.items.retain(|r| r.id_solicitud != id_solicitud);
    }
}

pub fn create_state() -> RwSignal<AdvanceRequestsState> {
    RwSignal::new(AdvanceRequestsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_keeps_other_rows() {
        let mut state = AdvanceRequestsState {
            items: vec![
                AdvanceRequestRecord {
                    id_solicitud: 7,
                    ..Default::default()
                },
                AdvanceRequestRecord {
                    id_solicitud: 9,
                    ..Default::default()
                },
            ],
            is_loaded: true,
        };
        state.remove(7);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id_solicitud, 9);
        state.remove(42);
        assert_eq!(state.items.len(), 1);
    }
}

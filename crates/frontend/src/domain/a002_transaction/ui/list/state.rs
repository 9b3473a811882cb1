use contracts::domain::a001_customer::CustomerId;
use leptos::prelude::*;

/// Local, ephemeral state of the transactions view.
///
/// `selected_customer` is a true optional: `Some(CustomerId(0))` selects
/// customer 0, which is not the same as no selection.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionListState {
    pub filter_name: String,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub selected_customer: Option<CustomerId>,
    pub query_version: u32,
}

impl Default for TransactionListState {
    fn default() -> Self {
        Self {
            filter_name: String::new(),
            min_amount: None,
            max_amount: None,
            selected_customer: None,
            query_version: 1,
        }
    }
}

pub fn create_state() -> RwSignal<TransactionListState> {
    RwSignal::new(TransactionListState::default())
}

/// Bump the shared version token, forcing both list queries to re-fetch.
///
/// No control in this view calls it; a surrounding application can wire it
/// to a refresh or retry action.
pub fn bump_query_version(state: RwSignal<TransactionListState>) {
    state.update(|s| s.query_version += 1);
}

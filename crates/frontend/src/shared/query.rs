//! Signal-backed list queries against the data service.
//!
//! Each query owns its loading/data/error state and re-runs whenever the
//! caller's version token changes. Queries are fully independent: two hooks
//! never share state and may settle in any order.

use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

/// Observable state of one list fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub is_loading: bool,
    pub data: Vec<T>,
    pub error: Option<String>,
}

impl<T> QueryState<T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            data: Vec::new(),
            error: None,
        }
    }

    pub fn ready(data: Vec<T>) -> Self {
        Self {
            is_loading: false,
            data,
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            is_loading: false,
            data: Vec::new(),
            error: Some(error),
        }
    }
}

/// Run `fetch` once on mount and again every time `version` changes.
///
/// The returned signal starts in the loading state and is overwritten with
/// the fetch outcome when the spawned future settles. An in-flight fetch is
/// not cancelled; a pending one simply leaves the state as loading.
pub fn use_list_query<T, F, Fut>(fetch: F, version: Signal<u32>) -> ReadSignal<QueryState<T>>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let (state, set_state) = signal(QueryState::loading());

    Effect::new(move |_| {
        version.track();
        set_state.set(QueryState::loading());

        spawn_local(async move {
            match fetch().await {
                Ok(data) => set_state.set(QueryState::ready(data)),
                Err(error) => {
                    log::error!("List query failed: {}", error);
                    set_state.set(QueryState::failed(error));
                }
            }
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_state_has_no_data_and_no_error() {
        let state = QueryState::<i32>::loading();
        assert!(state.is_loading);
        assert!(state.data.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn ready_state_carries_data() {
        let state = QueryState::ready(vec![1, 2, 3]);
        assert!(!state.is_loading);
        assert_eq!(state.data, vec![1, 2, 3]);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_state_defaults_to_empty_data() {
        let state = QueryState::<i32>::failed("HTTP error: 500".to_string());
        assert!(!state.is_loading);
        assert!(state.data.is_empty());
        assert_eq!(state.error.as_deref(), Some("HTTP error: 500"));
    }
}

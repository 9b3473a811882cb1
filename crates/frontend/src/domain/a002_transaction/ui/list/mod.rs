use crate::domain::a002_transaction::ui::chart::LineChart;
use crate::domain::a002_transaction::{api, chart, rows};
use crate::shared::format::format_amount;
use crate::shared::icons::icon;
use crate::shared::query::{use_list_query, QueryState};
use contracts::domain::a001_customer::{Customer, CustomerId};
use contracts::domain::a002_transaction::Transaction;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub mod state;

use state::TransactionListState;

/// Fixed number of skeleton rows shown while either fetch is in flight.
const PLACEHOLDER_ROWS: usize = 3;

#[derive(Clone, Copy, PartialEq)]
enum Gate {
    Loading,
    Error,
    Ready,
}

/// Customers-and-transactions view: overview chart, filterable joined table,
/// and a per-customer chart once a customer is selected.
#[component]
pub fn CustomerTransactionsList() -> impl IntoView {
    let state = state::create_state();
    let version = Signal::derive(move || state.get().query_version);

    // Two independent fetches; either may settle first or fail alone.
    let customers = use_list_query(api::fetch_customers, version);
    let transactions = use_list_query(api::fetch_transactions, version);

    let gate = Memo::new(move |_| {
        let customers = customers.get();
        let transactions = transactions.get();
        if customers.is_loading || transactions.is_loading {
            Gate::Loading
        } else if customers.error.is_some() || transactions.error.is_some() {
            Gate::Error
        } else {
            Gate::Ready
        }
    });

    view! {
        <div class="content">
            {move || match gate.get() {
                Gate::Loading => loading_skeleton(),
                Gate::Error => view! {
                    <div class="error">"Error loading data"</div>
                }.into_any(),
                Gate::Ready => view! {
                    <ReadySection customers=customers transactions=transactions state=state />
                }.into_any(),
            }}
        </div>
    }
}

fn loading_skeleton() -> AnyView {
    view! {
        <div class="skeleton-list">
            {(0..PLACEHOLDER_ROWS)
                .map(|_| view! { <div class="skeleton-row"></div> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn ReadySection(
    customers: ReadSignal<QueryState<Customer>>,
    transactions: ReadSignal<QueryState<Transaction>>,
    state: RwSignal<TransactionListState>,
) -> impl IntoView {
    // Recomputed from scratch on every change to the data or the filters.
    let table_rows = move || {
        let filter = state.get();
        rows::join_rows(
            &customers.get().data,
            &transactions.get().data,
            &filter.filter_name,
            filter.min_amount,
            filter.max_amount,
        )
    };

    // The overview chart aggregates the raw fetched collection; the name and
    // amount filters never touch it.
    let all_customers_series = Memo::new(move |_| {
        chart::amount_by_date(&transactions.get().data, chart::ALL_CUSTOMERS_LABEL)
    });

    let selected_series = Memo::new(move |_| {
        let selected = state.get().selected_customer?;
        let name = customers
            .get()
            .data
            .iter()
            .find(|customer| customer.id == selected)
            .map(|customer| customer.name.clone())
            .unwrap_or_else(|| "Selected Customer".to_string());
        let transactions = transactions.get();
        let owned = rows::customer_transactions(&transactions.data, selected);
        Some(chart::amount_by_date(
            owned,
            &chart::customer_label(&name),
        ))
    });

    view! {
        <LineChart container_id="all-customers-chart" series=all_customers_series />

        <input
            type="text"
            class="filter-input"
            placeholder="Filter by customer name"
            prop:value=move || state.get().filter_name.clone()
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| s.filter_name = value);
            }
        />

        <div class="filter-row">
            <input
                type="number"
                placeholder="Min transaction amount"
                on:input=move |ev| {
                    let bound = event_target_value(&ev).parse::<f64>().ok();
                    state.update(|s| s.min_amount = bound);
                }
            />
            <input
                type="number"
                placeholder="Max transaction amount"
                on:input=move |ev| {
                    let bound = event_target_value(&ev).parse::<f64>().ok();
                    state.update(|s| s.max_amount = bound);
                }
            />
        </div>

        <div class="table-container">
            <table>
                <thead>
                    <tr>
                        <th>"Customer Name"</th>
                        <th>"Transaction Date"</th>
                        <th>"Transaction Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        table_rows()
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.name}</td>
                                    <td>{row.date}</td>
                                    <td>{format_amount(row.amount)}</td>
                                    <td class="status-ok" title=row.status>
                                        {icon("check-circle")}
                                    </td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>

        <select
            class="customer-select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                if let Ok(id) = CustomerId::from_string(&value) {
                    state.update(|s| s.selected_customer = Some(id));
                }
            }
        >
            <option value="" disabled=true selected=true>"Select a customer"</option>
            {move || {
                customers
                    .get()
                    .data
                    .into_iter()
                    .map(|customer| view! {
                        <option value=customer.id.as_string()>{customer.name}</option>
                    })
                    .collect_view()
            }}
        </select>

        {move || {
            selected_series.get().map(|series| view! {
                <LineChart
                    container_id="selected-customer-chart"
                    series=Signal::derive(move || series.clone())
                />
            })
        }}
    }
}

//! Filtering and joining of customers and transactions for table display.
//!
//! Everything here is a pure function of its inputs and is recomputed in
//! full on every render; there is no caching or incremental update.

use contracts::domain::a001_customer::{Customer, CustomerId};
use contracts::domain::a002_transaction::{Transaction, TransactionId};

pub const ROW_STATUS_VALID: &str = "valid";

/// One display row: a customer joined with one of their transactions.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub key: TransactionId,
    pub name: String,
    pub date: String,
    pub amount: f64,
    pub status: &'static str,
}

/// Customers whose name contains `filter_name`, case-insensitively.
/// An empty filter passes every customer.
pub fn filter_customers<'a>(customers: &'a [Customer], filter_name: &str) -> Vec<&'a Customer> {
    let needle = filter_name.to_lowercase();
    customers
        .iter()
        .filter(|customer| customer.name.to_lowercase().contains(&needle))
        .collect()
}

/// Transactions whose amount lies within the inclusive `[min, max]` bounds.
/// An unset bound imposes no constraint on that side.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    min_amount: Option<f64>,
    max_amount: Option<f64>,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| {
            min_amount.is_none_or(|min| transaction.amount >= min)
                && max_amount.is_none_or(|max| transaction.amount <= max)
        })
        .collect()
}

/// Transactions belonging to one customer, in input order.
pub fn customer_transactions<'a>(
    transactions: &'a [Transaction],
    customer_id: CustomerId,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.customer_id == customer_id)
        .collect()
}

/// Join filtered customers with filtered transactions into display rows.
///
/// Output order is customers order crossed with each customer's matching
/// transactions order, both following input order. A transaction whose
/// `customer_id` matches no customer is silently excluded.
pub fn join_rows(
    customers: &[Customer],
    transactions: &[Transaction],
    filter_name: &str,
    min_amount: Option<f64>,
    max_amount: Option<f64>,
) -> Vec<TransactionRow> {
    let filtered_transactions = filter_transactions(transactions, min_amount, max_amount);

    filter_customers(customers, filter_name)
        .into_iter()
        .flat_map(|customer| {
            filtered_transactions
                .iter()
                .filter(|transaction| transaction.customer_id == customer.id)
                .map(|transaction| TransactionRow {
                    key: transaction.id,
                    name: customer.name.clone(),
                    date: transaction.date.clone(),
                    amount: transaction.amount,
                    status: ROW_STATUS_VALID,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

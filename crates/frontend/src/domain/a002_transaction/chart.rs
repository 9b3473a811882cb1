//! Per-date amount aggregation for the line charts.

use contracts::domain::a002_transaction::Transaction;
use std::collections::HashMap;

pub const ALL_CUSTOMERS_LABEL: &str = "Total amount per day for all customers";

/// Series title for the per-customer chart.
pub fn customer_label(name: &str) -> String {
    format!("Total amount per day for {}", name)
}

/// A labeled line-chart series: one x-axis entry per distinct date, with the
/// summed amount for that date. Dates keep first-occurrence order.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Group transaction amounts by date in a single pass.
///
/// Empty input yields an empty series, rendered as an empty chart.
pub fn amount_by_date<'a, I>(transactions: I, label: &str) -> ChartSeries
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut labels: Vec<String> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    let mut index_by_date: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        match index_by_date.get(transaction.date.as_str()) {
            Some(&i) => values[i] += transaction.amount,
            None => {
                index_by_date.insert(transaction.date.clone(), labels.len());
                labels.push(transaction.date.clone());
                values.push(transaction.amount);
            }
        }
    }

    ChartSeries {
        label: label.to_string(),
        labels,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::CustomerId;
    use contracts::domain::a002_transaction::TransactionId;

    fn transaction(id: i64, customer_id: i64, date: &str, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId(id),
            customer_id: CustomerId(customer_id),
            date: date.to_string(),
            amount,
        }
    }

    #[test]
    fn sums_amounts_per_distinct_date() {
        let transactions = vec![
            transaction(10, 1, "2024-01-01", 50.0),
            transaction(11, 1, "2024-01-01", 25.0),
            transaction(12, 2, "2024-01-02", 100.0),
        ];

        let series = amount_by_date(&transactions, ALL_CUSTOMERS_LABEL);

        assert_eq!(series.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(series.values, vec![75.0, 100.0]);
        assert_eq!(series.label, ALL_CUSTOMERS_LABEL);
    }

    #[test]
    fn dates_keep_first_occurrence_order() {
        // Out of calendar order on purpose: the axis is not sorted.
        let transactions = vec![
            transaction(1, 1, "2024-03-05", 1.0),
            transaction(2, 1, "2024-01-20", 2.0),
            transaction(3, 1, "2024-03-05", 3.0),
            transaction(4, 1, "2024-02-11", 4.0),
        ];

        let series = amount_by_date(&transactions, "test");

        assert_eq!(series.labels, vec!["2024-03-05", "2024-01-20", "2024-02-11"]);
        assert_eq!(series.values, vec![4.0, 2.0, 4.0]);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = amount_by_date(&[], "test");
        assert!(series.is_empty());
        assert!(series.labels.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn negative_amounts_sum_into_the_same_date() {
        let transactions = vec![
            transaction(1, 1, "2024-01-01", 50.0),
            transaction(2, 1, "2024-01-01", -20.0),
        ];

        let series = amount_by_date(&transactions, "test");
        assert_eq!(series.values, vec![30.0]);
    }

    #[test]
    fn selected_customer_series_covers_only_their_transactions() {
        use crate::domain::a002_transaction::rows::customer_transactions;

        let transactions = vec![
            transaction(10, 1, "2024-01-01", 50.0),
            transaction(11, 1, "2024-01-01", 25.0),
            transaction(12, 2, "2024-01-02", 100.0),
        ];

        let series = amount_by_date(
            customer_transactions(&transactions, CustomerId(1)),
            &customer_label("Alice"),
        );

        assert_eq!(series.labels, vec!["2024-01-01"]);
        assert_eq!(series.values, vec![75.0]);
        assert_eq!(series.label, "Total amount per day for Alice");
    }

    #[test]
    fn customer_label_embeds_the_name() {
        assert_eq!(
            customer_label("Alice"),
            "Total amount per day for Alice"
        );
    }
}

use crate::shared::api_utils::api_url;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_transaction::Transaction;
use gloo_net::http::Request;

/// Fetch the full customer list
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let response = Request::get(&api_url("/customers"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Customer> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch the full transaction list
pub async fn fetch_transactions() -> Result<Vec<Transaction>, String> {
    let response = Request::get(&api_url("/transactions"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Transaction> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

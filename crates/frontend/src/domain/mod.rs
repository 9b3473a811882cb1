pub mod a002_transaction;

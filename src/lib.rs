//! fintrack - personal finance tracker
//!
//! A single in-memory store of transactions, saving goals, budgets and
//! preferences, with pure view builders that derive what each dashboard tab
//! shows.
//!
//! # Architecture
//!
//! - `models`: transactions, saving goals, budgets, preferences and the value
//!   types they use
//! - `store`: the state store; the only place entities are mutated
//! - `views`: read-only derivations per tab (overview, transactions,
//!   analytics, goals, settings) and the dashboard shell
//! - `session`: identity provider abstraction and session gate
//! - `export`: CSV, JSON and YAML export of the transaction list
//! - `notify`: toast notifications
//! - `config`, `storage`, `audit`: paths and settings, snapshot persistence,
//!   and the append-only audit log used by the command line
//! - `cli`, `display`: command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fintrack::models::{Money, Transaction};
//! use fintrack::store::FinanceStore;
//! use fintrack::views::OverviewView;
//!
//! let mut store = FinanceStore::new();
//! let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! store.add_transaction(Transaction::income(Money::from_cents(100_000), "Salary", day))?;
//! store.add_transaction(Transaction::expense(Money::from_cents(5_000), "Food", day))?;
//!
//! let overview = OverviewView::build(&store);
//! assert_eq!(overview.total_balance, Money::from_cents(95_000));
//! # Ok::<(), fintrack::FinanceError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod session;
pub mod storage;
pub mod store;
pub mod views;

pub use error::{FinanceError, FinanceResult};
pub use store::FinanceStore;

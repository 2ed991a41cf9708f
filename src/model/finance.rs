use serde::{Deserialize, Serialize};

use crate::util::{new_id, now_ts};

pub type AccountId = String;

/// `current_balance` is denormalized: it is adjusted incrementally by
/// every transaction-creating or -reversing transition, never recomputed
/// on read. Keeping the adjustments symmetric is the reducer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub initial_balance: f64,
    pub current_balance: f64,
    pub created_at: String,
}

impl Account {
    pub fn new(name: String, initial_balance: f64) -> Self {
        Account {
            id: new_id(),
            name,
            initial_balance,
            current_balance: initial_balance,
            created_at: now_ts(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: AccountId,
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

/// Whether the money went out (`Lent`) or came in (`Borrowed`). A payment
/// on lent money credits the receiving account; a payment on borrowed
/// money debits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanKind {
    Lent,
    Borrowed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub counterparty: String,
    pub kind: LoanKind,
    pub initial_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub payments: Vec<LoanPayment>,
    pub created_at: String,
}

impl Loan {
    pub fn new(counterparty: String, kind: LoanKind, initial_amount: f64) -> Self {
        Loan {
            id: new_id(),
            counterparty,
            kind,
            initial_amount,
            paid_amount: 0.0,
            payments: Vec::new(),
            created_at: now_ts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayment {
    pub id: String,
    pub amount: f64,
    pub date: String,
    pub account_id: AccountId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    pub invested_amount: f64,
    #[serde(default)]
    pub profits: Vec<ProfitRecord>,
    pub created_at: String,
}

impl Investment {
    pub fn new(name: String, invested_amount: f64) -> Self {
        Investment {
            id: new_id(),
            name,
            invested_amount,
            profits: Vec::new(),
            created_at: now_ts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitRecord {
    pub id: String,
    pub amount: f64,
    pub date: String,
    pub account_id: AccountId,
}

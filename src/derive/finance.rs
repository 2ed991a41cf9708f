use crate::model::{Investment, Loan, State, TransactionKind};

/// Balance recomputed from the ledger: initial plus the signed sum of
/// every transaction against the account. Must agree with the account's
/// denormalized `current_balance` at all times; used by invariant checks
/// and reconciliation views. None for an unknown account.
pub fn computed_balance(state: &State, account_id: &str) -> Option<f64> {
    let account = state.accounts.iter().find(|a| a.id == account_id)?;
    let balance = state
        .transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .fold(account.initial_balance, |acc, t| match t.kind {
            TransactionKind::Income => acc + t.amount,
            TransactionKind::Expense => acc - t.amount,
        });
    Some(balance)
}

/// Sum of all denormalized account balances.
pub fn net_worth(state: &State) -> f64 {
    state.accounts.iter().map(|a| a.current_balance).sum()
}

pub fn loan_outstanding(loan: &Loan) -> f64 {
    loan.initial_amount - loan.paid_amount
}

pub fn investment_profit_total(investment: &Investment) -> f64 {
    investment.profits.iter().map(|p| p.amount).sum()
}

use crate::io::StorageKey;
use crate::model::{
    Account, Investment, Loan, LoanKind, LoanPayment, ProfitRecord, State, Transaction,
    TransactionKind,
};
use crate::util::new_id;

use super::Touched;

/// The one place transaction arithmetic touches a balance. Every path
/// that creates or reverses a transaction goes through here, so create
/// and reverse are exact inverses by construction. Returns false when
/// the account does not exist, in which case nothing changed.
fn apply_transaction_effect(
    accounts: &mut [Account],
    account_id: &str,
    kind: TransactionKind,
    amount: f64,
    reverse: bool,
) -> bool {
    let Some(account) = accounts.iter_mut().find(|a| a.id == account_id) else {
        return false;
    };
    let signed = match kind {
        TransactionKind::Income => amount,
        TransactionKind::Expense => -amount,
    };
    if reverse {
        account.current_balance -= signed;
    } else {
        account.current_balance += signed;
    }
    true
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

pub(super) fn add_account(state: &mut State, name: String, initial_balance: f64) -> Touched {
    state.accounts.push(Account::new(name, initial_balance));
    Touched::one(StorageKey::Accounts)
}

pub(super) fn update_account(state: &mut State, account_id: &str, name: String) -> Touched {
    let Some(account) = state.accounts.iter_mut().find(|a| a.id == account_id) else {
        return Touched::none();
    };
    account.name = name;
    Touched::one(StorageKey::Accounts)
}

/// Deleting an account also drops its transactions; dangling ledger
/// entries would otherwise poison the balance invariant for good.
pub(super) fn delete_account(state: &mut State, account_id: &str) -> Touched {
    let before = state.accounts.len();
    state.accounts.retain(|a| a.id != account_id);
    if state.accounts.len() == before {
        return Touched::none();
    }
    let had_transactions = state.transactions.iter().any(|t| t.account_id == account_id);
    state.transactions.retain(|t| t.account_id != account_id);
    if had_transactions {
        return Touched::keys([StorageKey::Accounts, StorageKey::Transactions]);
    }
    Touched::one(StorageKey::Accounts)
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

pub(super) fn add_transaction(
    state: &mut State,
    account_id: &str,
    kind: TransactionKind,
    amount: f64,
    category: String,
    description: String,
    date: String,
) -> Touched {
    if !apply_transaction_effect(&mut state.accounts, account_id, kind, amount, false) {
        return Touched::none();
    }
    state.transactions.push(Transaction {
        id: new_id(),
        account_id: account_id.to_string(),
        kind,
        amount,
        category,
        description,
        date,
    });
    Touched::keys([StorageKey::Transactions, StorageKey::Accounts])
}

pub(super) fn delete_transaction(state: &mut State, transaction_id: &str) -> Touched {
    let Some(pos) = state.transactions.iter().position(|t| t.id == transaction_id) else {
        return Touched::none();
    };
    let tx = state.transactions.remove(pos);
    // The account may have been deleted since; the ledger entry still goes.
    apply_transaction_effect(&mut state.accounts, &tx.account_id, tx.kind, tx.amount, true);
    Touched::keys([StorageKey::Transactions, StorageKey::Accounts])
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

pub(super) fn add_loan(
    state: &mut State,
    counterparty: String,
    kind: LoanKind,
    initial_amount: f64,
) -> Touched {
    state.loans.push(Loan::new(counterparty, kind, initial_amount));
    Touched::one(StorageKey::Loans)
}

pub(super) fn delete_loan(state: &mut State, loan_id: &str) -> Touched {
    let before = state.loans.len();
    state.loans.retain(|l| l.id != loan_id);
    if state.loans.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::Loans)
}

/// One dispatch, four effects: the payment log entry, the loan's
/// `paid_amount`, a synthesized transaction, and the account balance.
/// Both parties are checked up front so a stale id leaves all four
/// untouched.
pub(super) fn record_loan_payment(
    state: &mut State,
    loan_id: &str,
    account_id: &str,
    amount: f64,
    date: String,
) -> Touched {
    if !state.accounts.iter().any(|a| a.id == account_id) {
        return Touched::none();
    }
    let Some(loan) = state.loans.iter_mut().find(|l| l.id == loan_id) else {
        return Touched::none();
    };

    // Repayment of lent money comes in; paying back borrowed money goes out.
    let kind = match loan.kind {
        LoanKind::Lent => TransactionKind::Income,
        LoanKind::Borrowed => TransactionKind::Expense,
    };
    let description = match loan.kind {
        LoanKind::Lent => format!("Loan payment from {}", loan.counterparty),
        LoanKind::Borrowed => format!("Loan payment to {}", loan.counterparty),
    };

    loan.paid_amount += amount;
    loan.payments.push(LoanPayment {
        id: new_id(),
        amount,
        date: date.clone(),
        account_id: account_id.to_string(),
    });

    apply_transaction_effect(&mut state.accounts, account_id, kind, amount, false);
    state.transactions.push(Transaction {
        id: new_id(),
        account_id: account_id.to_string(),
        kind,
        amount,
        category: "Loan".into(),
        description,
        date,
    });

    Touched::keys([
        StorageKey::Loans,
        StorageKey::Transactions,
        StorageKey::Accounts,
    ])
}

// ---------------------------------------------------------------------------
// Investments
// ---------------------------------------------------------------------------

pub(super) fn add_investment(state: &mut State, name: String, invested_amount: f64) -> Touched {
    state.investments.push(Investment::new(name, invested_amount));
    Touched::one(StorageKey::Investments)
}

pub(super) fn delete_investment(state: &mut State, investment_id: &str) -> Touched {
    let before = state.investments.len();
    state.investments.retain(|i| i.id != investment_id);
    if state.investments.len() == before {
        return Touched::none();
    }
    Touched::one(StorageKey::Investments)
}

/// Same composite shape as a loan payment; profit always credits.
pub(super) fn record_profit(
    state: &mut State,
    investment_id: &str,
    account_id: &str,
    amount: f64,
    date: String,
) -> Touched {
    if !state.accounts.iter().any(|a| a.id == account_id) {
        return Touched::none();
    }
    let Some(investment) = state
        .investments
        .iter_mut()
        .find(|i| i.id == investment_id)
    else {
        return Touched::none();
    };

    let description = format!("Profit from {}", investment.name);
    investment.profits.push(ProfitRecord {
        id: new_id(),
        amount,
        date: date.clone(),
        account_id: account_id.to_string(),
    });

    apply_transaction_effect(
        &mut state.accounts,
        account_id,
        TransactionKind::Income,
        amount,
        false,
    );
    state.transactions.push(Transaction {
        id: new_id(),
        account_id: account_id.to_string(),
        kind: TransactionKind::Income,
        amount,
        category: "Investment".into(),
        description,
        date,
    });

    Touched::keys([
        StorageKey::Investments,
        StorageKey::Transactions,
        StorageKey::Accounts,
    ])
}

//! Debt balance, interest and payoff projections.
//!
//! Interest is simple interest on the outstanding balance for every whole
//! month elapsed since it was last charged. It is not compounded.

use chrono::NaiveDate;
use finsight_shared::calendar::{add_months, months_elapsed};
use finsight_shared::types::money::{percentage, round_money};
use rust_decimal::Decimal;

use super::types::{DebtSummary, PayoffEstimate, ProjectionOptions, ScheduleEntry};
use crate::ledger::{Debt, DebtPayment, InstallmentFrequency};

const MONTHS_PER_YEAR: u32 = 12;

/// Projects balances, interest and payoff schedules for debts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebtProjector {
    options: ProjectionOptions,
}

impl DebtProjector {
    /// Creates a projector with the given options.
    #[must_use]
    pub const fn new(options: ProjectionOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[must_use]
    pub const fn options(&self) -> ProjectionOptions {
        self.options
    }

    /// Sum of the payments recorded against `debt`.
    ///
    /// Payments for other debts are ignored, so the owner's full payment list can be passed.
    #[must_use]
    pub fn total_paid(debt: &Debt, payments: &[DebtPayment]) -> Decimal {
        payments
            .iter()
            .filter(|p| p.debt_id == debt.id)
            .map(|p| p.amount)
            .sum()
    }

    /// `max(0, principal - sum(payments))`.
    ///
    /// Over-payment clamps to zero.
    #[must_use]
    pub fn remaining_balance(debt: &Debt, payments: &[DebtPayment]) -> Decimal {
        (debt.principal_amount - Self::total_paid(debt, payments)).max(Decimal::ZERO)
    }

    /// Simple interest accrued on the remaining balance from the start date to `as_of`.
    ///
    /// Zero when nothing is owed or the debt carries no rate.
    #[must_use]
    pub fn accrued_interest(debt: &Debt, payments: &[DebtPayment], as_of: NaiveDate) -> Decimal {
        interest_on(Self::remaining_balance(debt, payments), debt, as_of)
    }

    /// Month-by-month payoff schedule starting at `from`.
    ///
    /// The first step charges the interest accrued since the debt started;
    /// every later step charges one month on the running balance. Stops when
    /// the balance reaches zero, after `max_months` steps, or as soon as a
    /// payment no longer covers the step's interest. The returned iterator is
    /// a pure function of its inputs; clone it to replay.
    #[must_use]
    pub fn payoff_schedule(
        &self,
        debt: &Debt,
        payments: &[DebtPayment],
        monthly_payment: Decimal,
        from: NaiveDate,
    ) -> PayoffSchedule {
        PayoffSchedule {
            accrued_through: debt.start_date,
            rate: debt.rate(),
            from,
            monthly_payment,
            balance: Self::remaining_balance(debt, payments),
            step: 0,
            max_months: self.options.max_months,
            halted: false,
        }
    }

    /// Installment normalized to a monthly amount.
    #[must_use]
    pub fn monthly_equivalent(installment: Decimal, frequency: InstallmentFrequency) -> Decimal {
        round_money(installment / Decimal::from(frequency.months()))
    }

    /// First installment date on or after `as_of`.
    ///
    /// Installments fall on `start_date + k * period`. Closed debts have none.
    #[must_use]
    pub fn next_installment_date(debt: &Debt, as_of: NaiveDate) -> Option<NaiveDate> {
        if !debt.is_active() {
            return None;
        }
        if as_of <= debt.start_date {
            return Some(debt.start_date);
        }

        let period = debt.installment_frequency.months();
        let periods = months_elapsed(debt.start_date, as_of) / period;
        let candidate = add_months(debt.start_date, periods * period);
        if candidate >= as_of {
            Some(candidate)
        } else {
            Some(add_months(debt.start_date, (periods + 1) * period))
        }
    }

    /// Summary of a debt as of a date.
    #[must_use]
    pub fn summarize(debt: &Debt, payments: &[DebtPayment], as_of: NaiveDate) -> DebtSummary {
        let total_paid = Self::total_paid(debt, payments);
        let remaining_balance = Self::remaining_balance(debt, payments);
        let is_paid_off = remaining_balance.is_zero();

        DebtSummary {
            debt_id: debt.id,
            total_paid,
            remaining_balance,
            progress_percentage: round_money(percentage(
                debt.principal_amount - remaining_balance,
                debt.principal_amount,
            )),
            accrued_interest: Self::accrued_interest(debt, payments, as_of),
            monthly_installment: Self::monthly_equivalent(
                debt.installment_amount,
                debt.installment_frequency,
            ),
            next_installment_date: if is_paid_off {
                None
            } else {
                Self::next_installment_date(debt, as_of)
            },
            is_paid_off,
        }
    }

    /// Projects the debt's regular installment forward from `from`.
    #[must_use]
    pub fn estimate_payoff(
        &self,
        debt: &Debt,
        payments: &[DebtPayment],
        from: NaiveDate,
    ) -> PayoffEstimate {
        let monthly_payment =
            Self::monthly_equivalent(debt.installment_amount, debt.installment_frequency);
        let starting_balance = Self::remaining_balance(debt, payments);

        let mut months = 0;
        let mut payoff_date = None;
        let mut total_interest = Decimal::ZERO;
        let mut total_paid = Decimal::ZERO;
        let mut final_balance = starting_balance;

        for entry in self.payoff_schedule(debt, payments, monthly_payment, from) {
            months = entry.month;
            payoff_date = Some(entry.date);
            total_interest += entry.interest_portion;
            total_paid += entry.payment;
            final_balance = entry.remaining_balance;
        }

        PayoffEstimate {
            debt_id: debt.id,
            monthly_payment,
            months,
            payoff_date,
            total_interest,
            total_paid,
            converges: final_balance.is_zero(),
        }
    }

    /// Sum of remaining balances across active debts.
    #[must_use]
    pub fn total_active_remaining(debts: &[Debt], payments: &[DebtPayment]) -> Decimal {
        debts
            .iter()
            .filter(|debt| debt.is_active())
            .map(|debt| Self::remaining_balance(debt, payments))
            .sum()
    }
}

/// Simple interest on `balance` for the whole months between the debt start and `as_of`.
fn interest_on(balance: Decimal, debt: &Debt, as_of: NaiveDate) -> Decimal {
    match debt.rate() {
        Some(rate) if balance > Decimal::ZERO => {
            monthly_interest(balance, rate, months_elapsed(debt.start_date, as_of))
        }
        _ => Decimal::ZERO,
    }
}

fn monthly_interest(balance: Decimal, annual_rate: Decimal, months: u32) -> Decimal {
    let monthly_rate = annual_rate / Decimal::from(MONTHS_PER_YEAR) / Decimal::ONE_HUNDRED;
    round_money(balance * monthly_rate * Decimal::from(months))
}

/// Lazily evaluated payoff schedule. See [`DebtProjector::payoff_schedule`].
#[derive(Debug, Clone)]
pub struct PayoffSchedule {
    accrued_through: NaiveDate,
    rate: Option<Decimal>,
    from: NaiveDate,
    monthly_payment: Decimal,
    balance: Decimal,
    step: u32,
    max_months: u32,
    halted: bool,
}

impl Iterator for PayoffSchedule {
    type Item = ScheduleEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted || self.balance <= Decimal::ZERO || self.step >= self.max_months {
            return None;
        }

        let date = add_months(self.from, self.step);
        let interest = match self.rate {
            Some(rate) => monthly_interest(
                self.balance,
                rate,
                months_elapsed(self.accrued_through, date),
            ),
            None => Decimal::ZERO,
        };
        self.accrued_through = self.accrued_through.max(date);

        let principal = (self.monthly_payment - interest).min(self.balance);
        if principal <= Decimal::ZERO {
            // Payment does not cover interest; the balance would never shrink.
            self.halted = true;
            return None;
        }

        self.balance -= principal;
        self.step += 1;

        Some(ScheduleEntry {
            month: self.step,
            date,
            payment: principal + interest,
            principal_portion: principal,
            interest_portion: interest,
            remaining_balance: self.balance,
        })
    }
}

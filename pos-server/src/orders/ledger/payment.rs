//! Payment settlement (结账)

use rust_decimal::Decimal;
use shared::order::{
    Discount, EventPayload, Order, OrderStatus, OrderTotals, PaymentInput, PaymentRecord, Quote,
    StatusDisplay,
};
use shared::util::now_millis;

use super::{LedgerState, OrderLedger};
use crate::orders::error::{LedgerError, LedgerResult, Machine};
use crate::orders::validation::{validate_discount, validate_payment, validate_split, validate_tip};
use crate::pricing::{compute_totals, is_payment_sufficient, split_bill, to_decimal, to_f64};

/// Exclusive claim on an order while an external payment is in flight
///
/// Dropping the reservation without [`commit`](Self::commit) releases the
/// order untouched.
pub struct PaymentReservation<'a> {
    ledger: &'a OrderLedger,
    order_id: String,
    committed: bool,
}

impl PaymentReservation<'_> {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Record the payment and release the claim
    pub fn commit(
        mut self,
        input: PaymentInput,
        transaction_id: Option<String>,
    ) -> LedgerResult<Order> {
        self.committed = true;
        let mut state = self.ledger.state.lock();
        state.payments_in_flight.remove(&self.order_id);
        self.ledger
            .apply_payment(&mut state, &self.order_id, input, transaction_id, now_millis())
    }
}

impl Drop for PaymentReservation<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.ledger
                .state
                .lock()
                .payments_in_flight
                .remove(&self.order_id);
            tracing::debug!(order_id = %self.order_id, "Payment reservation released");
        }
    }
}

/// Ready and served orders can be paid
fn check_payable(order: &Order) -> LedgerResult<()> {
    match order.status {
        OrderStatus::Ready | OrderStatus::Served => Ok(()),
        OrderStatus::Paid => Err(LedgerError::AlreadyPaid(order.id.clone())),
        other => Err(LedgerError::transition(
            Machine::Order,
            other.as_str(),
            OrderStatus::Paid.as_str(),
        )),
    }
}

impl OrderLedger {
    /// Totals with payment-time overrides, plus the amount to collect
    ///
    /// Without an override the creation-time discount amount and tip are kept.
    fn settlement(
        &self,
        order: &Order,
        discount: Option<Discount>,
        tip: Option<f64>,
    ) -> (OrderTotals, f64) {
        let discount =
            discount.or_else(|| (order.discount > 0.0).then(|| Discount::fixed(order.discount)));
        let totals = compute_totals(
            &order.items,
            discount,
            self.settings.tax_rate,
            tip.unwrap_or(order.tip),
        );
        let amount_due = to_f64(to_decimal(totals.total) + to_decimal(order.delivery_fee()));
        (totals, amount_due)
    }

    /// Cashier preview; changes nothing
    pub fn quote(
        &self,
        order_id: &str,
        discount: Option<Discount>,
        tip: Option<f64>,
        split_count: Option<u32>,
    ) -> LedgerResult<Quote> {
        if let Some(d) = &discount {
            validate_discount(d)?;
        }
        if let Some(t) = tip {
            validate_tip(t)?;
        }
        let split_count = split_count.unwrap_or(1);
        validate_split(split_count)?;

        let state = self.state.lock();
        let order = state.order(order_id)?;
        let (totals, amount_due) = self.settlement(order, discount, tip);

        Ok(Quote {
            totals,
            amount_due,
            split_count,
            per_person: split_bill(amount_due, split_count),
        })
    }

    /// Record a payment collected outside the gateway (e.g. cash at the counter)
    ///
    /// Fails with `PaymentInProgress` while a [`PaymentReservation`] holds the order.
    pub fn record_payment(&self, order_id: &str, input: PaymentInput) -> LedgerResult<Order> {
        let mut state = self.state.lock();
        if state.payments_in_flight.contains(order_id) {
            return Err(LedgerError::PaymentInProgress(order_id.to_string()));
        }
        self.apply_payment(&mut state, order_id, input, None, now_millis())
    }

    /// Claim an order for an external payment call
    pub fn reserve_payment(&self, order_id: &str) -> LedgerResult<PaymentReservation<'_>> {
        let mut state = self.state.lock();
        check_payable(state.order(order_id)?)?;
        if !state.payments_in_flight.insert(order_id.to_string()) {
            return Err(LedgerError::PaymentInProgress(order_id.to_string()));
        }
        tracing::debug!(order_id = %order_id, "Payment reserved");
        Ok(PaymentReservation {
            ledger: self,
            order_id: order_id.to_string(),
            committed: false,
        })
    }

    fn apply_payment(
        &self,
        state: &mut LedgerState,
        order_id: &str,
        input: PaymentInput,
        transaction_id: Option<String>,
        now: i64,
    ) -> LedgerResult<Order> {
        let result = self.try_apply_payment(state, order_id, input, transaction_id, now);
        if let Err(e) = &result {
            tracing::warn!(order_id = %order_id, error = %e, "Payment rejected");
        }
        result
    }

    fn try_apply_payment(
        &self,
        state: &mut LedgerState,
        order_id: &str,
        input: PaymentInput,
        transaction_id: Option<String>,
        now: i64,
    ) -> LedgerResult<Order> {
        let order = state.order(order_id)?;
        // AlreadyPaid wins over input problems
        check_payable(order)?;
        validate_payment(&input)?;

        let (totals, amount_due) = self.settlement(order, input.discount, input.tip);
        if !is_payment_sufficient(input.amount, amount_due) {
            return Err(LedgerError::PaymentInsufficient {
                due: amount_due,
                tendered: input.amount,
            });
        }
        let change = to_f64((to_decimal(input.amount) - to_decimal(amount_due)).max(Decimal::ZERO));

        let record = PaymentRecord {
            payment_id: uuid::Uuid::new_v4().to_string(),
            method: input.method,
            amount: amount_due,
            tendered: input.amount,
            change,
            transaction_id,
            timestamp: now,
        };

        // ---- commit ----
        let order = state.order_mut(order_id)?;
        let from = order.status;
        order.apply_totals(totals);
        order.payment = Some(record.clone());
        order.status = OrderStatus::Paid;
        order.updated_at = now;
        let order = order.clone();

        self.emit(
            state,
            Some(order_id),
            now,
            EventPayload::PaymentRecorded {
                payment_id: record.payment_id.clone(),
                method: record.method,
                amount: record.amount,
                tendered: record.tendered,
                change: record.change,
            },
        );
        self.emit(
            state,
            Some(order_id),
            now,
            EventPayload::OrderStatusChanged {
                from,
                to: OrderStatus::Paid,
            },
        );
        if let Some(payload) = state.release_table(&order, now) {
            self.emit(state, Some(order_id), now, payload);
        }

        tracing::info!(
            order_id = %order_id,
            method = record.method.as_str(),
            amount = record.amount,
            change = record.change,
            "Payment recorded"
        );
        Ok(order)
    }
}

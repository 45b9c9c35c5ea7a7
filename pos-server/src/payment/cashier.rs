//! Checkout: reserve → charge → record

use shared::order::{Order, PaymentInput};
use std::sync::Arc;
use std::time::Duration;

use super::gateway::{PaymentGateway, PaymentRequest};
use crate::orders::validation::validate_payment;
use crate::orders::{LedgerError, LedgerResult, OrderLedger};
use crate::pricing::is_payment_sufficient;

#[derive(Clone)]
pub struct Cashier {
    ledger: Arc<OrderLedger>,
    gateway: Arc<dyn PaymentGateway>,
    timeout: Duration,
}

impl std::fmt::Debug for Cashier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cashier")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Cashier {
    pub fn new(ledger: Arc<OrderLedger>, gateway: Arc<dyn PaymentGateway>, timeout: Duration) -> Self {
        Self {
            ledger,
            gateway,
            timeout,
        }
    }

    /// Charge the order through the gateway and mark it paid
    ///
    /// The order is reserved for the whole call; a concurrent checkout of the
    /// same order gets `PaymentInProgress`. Gateway failure or timeout leaves
    /// the order unpaid so the cashier can retry.
    pub async fn checkout(&self, order_id: &str, input: PaymentInput) -> LedgerResult<Order> {
        let reservation = self.ledger.reserve_payment(order_id)?;
        validate_payment(&input)?;

        let quote = self
            .ledger
            .quote(order_id, input.discount, input.tip, input.split_count)?;
        if !is_payment_sufficient(input.amount, quote.amount_due) {
            return Err(LedgerError::PaymentInsufficient {
                due: quote.amount_due,
                tendered: input.amount,
            });
        }

        if quote.amount_due <= 0.0 {
            // 全额折扣：无需经过支付网关
            tracing::info!(order_id = %order_id, "Nothing due, settling without gateway");
            return reservation.commit(input, None);
        }

        let request = PaymentRequest {
            order_id: order_id.to_string(),
            method: input.method,
            amount: quote.amount_due,
        };
        let receipt =
            match tokio::time::timeout(self.timeout, self.gateway.process_payment(&request)).await {
                Ok(Ok(receipt)) => receipt,
                Ok(Err(e)) => {
                    tracing::warn!(order_id = %order_id, error = %e, "Payment gateway failed");
                    return Err(LedgerError::PaymentFailed(e.to_string()));
                }
                Err(_) => {
                    tracing::warn!(
                        order_id = %order_id,
                        timeout_ms = self.timeout.as_millis() as u64,
                        "Payment gateway timed out"
                    );
                    return Err(LedgerError::PaymentFailed(format!(
                        "gateway timed out after {} ms",
                        self.timeout.as_millis()
                    )));
                }
            };

        reservation.commit(input, Some(receipt.transaction_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed::seed_catalog, CatalogService};
    use crate::orders::LedgerSettings;
    use crate::payment::{GatewayError, PaymentReceipt, SimulatedGateway};
    use async_trait::async_trait;
    use shared::order::{
        Discount, LineItemInput, OrderDraft, OrderStatus, OrderType, PaymentMethod,
    };

    struct DecliningGateway;

    #[async_trait]
    impl PaymentGateway for DecliningGateway {
        async fn process_payment(&self, _: &PaymentRequest) -> Result<PaymentReceipt, GatewayError> {
            Err(GatewayError::Declined("card blocked".to_string()))
        }
    }

    fn ledger_with_served_order() -> (Arc<OrderLedger>, String) {
        let catalog = CatalogService::new();
        seed_catalog(&catalog).unwrap();
        let ledger = Arc::new(OrderLedger::new(catalog, LedgerSettings::default()));

        let order = ledger
            .create_order(OrderDraft {
                order_type: OrderType::Takeaway,
                table_id: None,
                customer_id: None,
                items: vec![
                    LineItemInput {
                        menu_item_id: 1,
                        quantity: 2,
                        notes: None,
                        modifications: vec![],
                    },
                    LineItemInput {
                        menu_item_id: 4,
                        quantity: 1,
                        notes: None,
                        modifications: vec![],
                    },
                ],
                notes: None,
                discount: None,
                tip: None,
                delivery: None,
            })
            .unwrap();
        for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Served] {
            ledger.update_order_status(&order.id, status).unwrap();
        }
        (ledger, order.id)
    }

    fn card(amount: f64) -> PaymentInput {
        PaymentInput {
            method: PaymentMethod::Credit,
            amount,
            discount: None,
            tip: None,
            split_count: None,
        }
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let (ledger, order_id) = ledger_with_served_order();
        let cashier = Cashier::new(
            ledger.clone(),
            Arc::new(SimulatedGateway::default()),
            Duration::from_secs(1),
        );

        let order = cashier.checkout(&order_id, card(84.48)).await.unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
        let payment = order.payment.unwrap();
        assert!(payment.transaction_id.unwrap().starts_with("sim-"));

        assert!(matches!(
            cashier.checkout(&order_id, card(84.48)).await,
            Err(LedgerError::AlreadyPaid(_))
        ));
    }

    #[tokio::test]
    async fn test_declined_payment_leaves_order_unpaid() {
        let (ledger, order_id) = ledger_with_served_order();
        let cashier = Cashier::new(ledger.clone(), Arc::new(DecliningGateway), Duration::from_secs(1));

        assert!(matches!(
            cashier.checkout(&order_id, card(84.48)).await,
            Err(LedgerError::PaymentFailed(_))
        ));
        let order = ledger.get_order(&order_id).unwrap();
        assert_eq!(order.status, OrderStatus::Served);
        assert!(order.payment.is_none());

        // Reservation released: a direct payment now succeeds
        assert!(ledger.record_payment(&order_id, card(84.48)).is_ok());
    }

    #[tokio::test]
    async fn test_gateway_timeout() {
        let (ledger, order_id) = ledger_with_served_order();
        let cashier = Cashier::new(
            ledger.clone(),
            Arc::new(SimulatedGateway::new(Duration::from_millis(500))),
            Duration::from_millis(20),
        );

        assert!(matches!(
            cashier.checkout(&order_id, card(84.48)).await,
            Err(LedgerError::PaymentFailed(_))
        ));
        assert_eq!(ledger.get_order(&order_id).unwrap().status, OrderStatus::Served);
    }

    #[tokio::test]
    async fn test_concurrent_checkout_is_rejected() {
        let (ledger, order_id) = ledger_with_served_order();
        let cashier = Cashier::new(
            ledger.clone(),
            Arc::new(SimulatedGateway::new(Duration::from_millis(100))),
            Duration::from_secs(2),
        );

        let (first, second) = tokio::join!(
            cashier.checkout(&order_id, card(84.48)),
            cashier.checkout(&order_id, card(84.48))
        );
        assert!(first.is_ok());
        assert!(matches!(second, Err(LedgerError::PaymentInProgress(_))));
    }

    #[tokio::test]
    async fn test_insufficient_amount_skips_gateway() {
        let (ledger, order_id) = ledger_with_served_order();
        let cashier = Cashier::new(ledger.clone(), Arc::new(DecliningGateway), Duration::from_secs(1));

        assert!(matches!(
            cashier.checkout(&order_id, card(10.0)).await,
            Err(LedgerError::PaymentInsufficient { .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_during_gateway_call_is_rejected() {
        let (ledger, order_id) = ledger_with_served_order();
        let cashier = Cashier::new(
            ledger.clone(),
            Arc::new(SimulatedGateway::new(Duration::from_millis(200))),
            Duration::from_secs(2),
        );

        let cancel = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            ledger.update_order_status(&order_id, OrderStatus::Cancelled)
        };
        let (paid, cancelled) = tokio::join!(cashier.checkout(&order_id, card(84.48)), cancel);

        assert!(matches!(cancelled, Err(LedgerError::PaymentInProgress(_))));
        let paid = paid.unwrap();
        assert_eq!(paid.status, OrderStatus::Paid);
        assert!(paid.payment.unwrap().transaction_id.is_some());
        assert_eq!(ledger.get_order(&order_id).unwrap().status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn test_nothing_due_skips_gateway() {
        let (ledger, order_id) = ledger_with_served_order();
        let cashier = Cashier::new(ledger.clone(), Arc::new(DecliningGateway), Duration::from_secs(1));

        let input = PaymentInput {
            discount: Some(Discount::percentage(100.0)),
            ..card(0.0)
        };
        let order = cashier.checkout(&order_id, input).await.unwrap();

        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.total, 0.0);
        let payment = order.payment.unwrap();
        assert_eq!(payment.amount, 0.0);
        assert!(payment.transaction_id.is_none());
    }
}

use async_trait::async_trait;
use shared::order::PaymentMethod;
use std::time::Duration;
use thiserror::Error;

/// Charge request sent to the processor
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub order_id: String,
    pub method: PaymentMethod,
    /// Amount to capture (what is due, not what was tendered)
    pub amount: f64,
}

/// Processor acknowledgement
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Payment processor unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process_payment(&self, request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError>;
}

/// Always-approving processor used when no real acquirer is configured
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn process_payment(&self, request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(GatewayError::Declined(format!(
                "invalid amount {}",
                request.amount
            )));
        }
        let transaction_id = format!("sim-{}", uuid::Uuid::new_v4());
        tracing::debug!(
            order_id = %request.order_id,
            method = request.method.as_str(),
            amount = request.amount,
            transaction_id = %transaction_id,
            "Simulated payment approved"
        );
        Ok(PaymentReceipt { transaction_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: f64) -> PaymentRequest {
        PaymentRequest {
            order_id: "order-1".to_string(),
            method: PaymentMethod::Credit,
            amount,
        }
    }

    #[tokio::test]
    async fn test_simulated_gateway_approves() {
        let gateway = SimulatedGateway::default();
        let receipt = gateway.process_payment(&request(84.48)).await.unwrap();
        assert!(receipt.transaction_id.starts_with("sim-"));
    }

    #[tokio::test]
    async fn test_simulated_gateway_rejects_non_positive() {
        let gateway = SimulatedGateway::default();
        assert!(matches!(
            gateway.process_payment(&request(0.0)).await,
            Err(GatewayError::Declined(_))
        ));
    }
}

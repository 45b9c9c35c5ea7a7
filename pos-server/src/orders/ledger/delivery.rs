//! Delivery tracking
//!
//! The delivery status is its own state machine and is never derived from
//! the order status.

use shared::order::{
    Courier, DeliveryStatus, EventPayload, Order, StatusDisplay, StatusFlow,
};
use shared::util::now_millis;

use super::OrderLedger;
use crate::orders::error::{LedgerError, LedgerResult, Machine, Resource, ValidationError};

impl OrderLedger {
    /// Delivery orders, newest first, optionally filtered by delivery status
    pub fn list_deliveries(&self, status: Option<DeliveryStatus>) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .state
            .lock()
            .orders
            .values()
            .filter(|o| {
                o.delivery
                    .as_ref()
                    .is_some_and(|d| status.is_none_or(|s| d.delivery_status == s))
            })
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        orders
    }

    pub fn update_delivery_status(&self, order_id: &str, status: DeliveryStatus) -> LedgerResult<Order> {
        let now = now_millis();
        let mut state = self.state.lock();

        let order = state.order_mut(order_id)?;
        let delivery = order
            .delivery
            .as_mut()
            .ok_or_else(|| LedgerError::not_found(Resource::Delivery, order_id))?;

        let from = delivery.delivery_status;
        if !from.can_transition_to(status) {
            let err = LedgerError::transition(Machine::Delivery, from.as_str(), status.as_str());
            tracing::warn!(order_id = %order_id, error = %err, "Delivery status change rejected");
            return Err(err);
        }

        delivery.delivery_status = status;
        let tracking_code = delivery.tracking_code.clone();
        order.updated_at = now;
        let order = order.clone();

        self.emit(
            &mut state,
            Some(order_id),
            now,
            EventPayload::DeliveryStatusChanged {
                tracking_code: tracking_code.clone(),
                from,
                to: status,
            },
        );
        tracing::info!(
            order_id = %order_id,
            tracking_code = %tracking_code,
            from = from.as_str(),
            to = status.as_str(),
            "Delivery status changed"
        );
        Ok(order)
    }

    /// Assign (or reassign) the courier of an open delivery
    pub fn assign_courier(&self, order_id: &str, courier: Courier) -> LedgerResult<Order> {
        if courier.name.trim().is_empty() {
            return Err(ValidationError::Invalid("Courier name must not be empty".to_string()).into());
        }

        let now = now_millis();
        let mut state = self.state.lock();

        let order = state.order_mut(order_id)?;
        let delivery = order
            .delivery
            .as_mut()
            .ok_or_else(|| LedgerError::not_found(Resource::Delivery, order_id))?;
        if delivery.delivery_status.is_terminal() {
            let current = delivery.delivery_status.as_str();
            return Err(LedgerError::transition(Machine::Delivery, current, current));
        }

        delivery.courier = Some(courier.clone());
        let tracking_code = delivery.tracking_code.clone();
        order.updated_at = now;
        let order = order.clone();

        self.emit(
            &mut state,
            Some(order_id),
            now,
            EventPayload::CourierAssigned {
                tracking_code: tracking_code.clone(),
                courier: courier.clone(),
            },
        );
        tracing::info!(
            order_id = %order_id,
            tracking_code = %tracking_code,
            courier = %courier.name,
            "Courier assigned"
        );
        Ok(order)
    }

    /// Look up a delivery by tracking code
    pub fn find_by_tracking_code(&self, tracking_code: &str) -> LedgerResult<Order> {
        self.state
            .lock()
            .orders
            .values()
            .find(|o| {
                o.delivery
                    .as_ref()
                    .is_some_and(|d| d.tracking_code.eq_ignore_ascii_case(tracking_code))
            })
            .cloned()
            .ok_or_else(|| LedgerError::not_found(Resource::Delivery, tracking_code))
    }
}

//! Kitchen display queries and item progress
//!
//! Ticket items progress independently of the order. Completing a ticket
//! emits `KitchenTicketCompleted` and leaves the order status alone.

use serde::Deserialize;
use shared::order::{
    EventPayload, KitchenItemStatus, KitchenTicket, KitchenTicketView, OrderStatus, Station,
    StatusDisplay, StatusFlow,
};
use shared::util::now_millis;

use super::OrderLedger;
use crate::orders::error::{LedgerError, LedgerResult, Machine, Resource};

/// Kitchen display query (`GET /api/kitchen-tickets?station=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KitchenQuery {
    /// Only tickets with at least one item at this station
    pub station: Option<Station>,
    /// Also return completed tickets and tickets of cancelled orders
    #[serde(default)]
    pub include_completed: bool,
}

impl OrderLedger {
    pub fn list_kitchen_tickets(&self, query: &KitchenQuery) -> Vec<KitchenTicketView> {
        self.list_kitchen_tickets_at(query, now_millis())
    }

    /// Tickets ordered by priority (urgent first), then oldest first
    pub fn list_kitchen_tickets_at(&self, query: &KitchenQuery, now: i64) -> Vec<KitchenTicketView> {
        let state = self.state.lock();
        let mut views: Vec<KitchenTicketView> = state
            .tickets
            .values()
            .filter(|t| query.station.is_none_or(|s| t.has_station(s)))
            .filter(|t| {
                if query.include_completed {
                    return true;
                }
                let cancelled = state
                    .orders
                    .get(&t.order_id)
                    .is_some_and(|o| o.status == OrderStatus::Cancelled);
                !t.is_complete() && !cancelled
            })
            .map(|t| KitchenTicketView::at(t.clone(), now))
            .collect();

        views.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.ticket.created_at.cmp(&b.ticket.created_at))
                .then_with(|| a.ticket.id.cmp(&b.ticket.id))
        });
        views
    }

    pub fn get_kitchen_ticket(&self, ticket_id: &str) -> LedgerResult<KitchenTicketView> {
        let ticket = self
            .state
            .lock()
            .tickets
            .get(ticket_id)
            .cloned()
            .ok_or_else(|| LedgerError::not_found(Resource::KitchenTicket, ticket_id))?;
        Ok(KitchenTicketView::at(ticket, now_millis()))
    }

    /// Kitchen ticket for an order, if one was derived
    pub fn ticket_for_order(&self, order_id: &str) -> Option<KitchenTicket> {
        self.state
            .lock()
            .tickets
            .get(&KitchenTicket::ticket_id_for(order_id))
            .cloned()
    }

    /// Advance one ticket item (`pending → preparing → ready`, no skips)
    ///
    /// Tickets of paid or cancelled orders are closed, same as their line items.
    pub fn update_kitchen_item_status(
        &self,
        ticket_id: &str,
        item_id: &str,
        status: KitchenItemStatus,
    ) -> LedgerResult<KitchenTicket> {
        let now = now_millis();
        let mut state = self.state.lock();

        let order_id = state
            .tickets
            .get(ticket_id)
            .map(|t| t.order_id.clone())
            .ok_or_else(|| LedgerError::not_found(Resource::KitchenTicket, ticket_id))?;
        match state.orders.get(&order_id).map(|o| o.status) {
            Some(OrderStatus::Paid) => return Err(LedgerError::AlreadyPaid(order_id)),
            Some(OrderStatus::Cancelled) => return Err(LedgerError::Cancelled(order_id)),
            _ => {}
        }

        let ticket = state
            .tickets
            .get_mut(ticket_id)
            .ok_or_else(|| LedgerError::not_found(Resource::KitchenTicket, ticket_id))?;
        let item = ticket
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| LedgerError::not_found(Resource::KitchenItem, item_id))?;

        let from = item.status;
        if !from.can_transition_to(status) {
            let err = LedgerError::transition(Machine::KitchenItem, from.as_str(), status.as_str());
            tracing::warn!(ticket_id = %ticket_id, item_id = %item_id, error = %err, "Kitchen item change rejected");
            return Err(err);
        }

        item.status = status;
        if ticket.started_at.is_none() {
            ticket.started_at = Some(now);
        }
        let completed = ticket.completed_at.is_none() && ticket.is_complete();
        if completed {
            ticket.completed_at = Some(now);
        }
        let ticket = ticket.clone();

        self.emit(
            &mut state,
            Some(&ticket.order_id),
            now,
            EventPayload::KitchenItemStatusChanged {
                ticket_id: ticket_id.to_string(),
                item_id: item_id.to_string(),
                from,
                to: status,
            },
        );
        if completed {
            self.emit(
                &mut state,
                Some(&ticket.order_id),
                now,
                EventPayload::KitchenTicketCompleted {
                    ticket_id: ticket_id.to_string(),
                },
            );
            tracing::info!(ticket_id = %ticket_id, order_id = %ticket.order_id, "Kitchen ticket completed");
        }

        tracing::info!(
            ticket_id = %ticket_id,
            item_id = %item_id,
            to = status.as_str(),
            "Kitchen item status changed"
        );
        Ok(ticket)
    }

    /// Tickets still being prepared (dashboard counter)
    pub fn pending_ticket_count(&self) -> usize {
        self.list_kitchen_tickets(&KitchenQuery::default()).len()
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DentalMall

//! Checkout and order queries.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{CreateOrderRequest, Order, OrderItem, OrderStatus};

use super::{Store, StoreError, StoreResult};

impl Store {
    /// Checkout: price each requested line against the active catalog
    /// and record the order for the given user.
    ///
    /// Lines referencing unknown or inactive products fail the whole
    /// order; prices are always taken from the store, never the client.
    pub fn create_order(
        &mut self,
        user_id: Uuid,
        request: CreateOrderRequest,
    ) -> StoreResult<Order> {
        if request.items.is_empty() {
            return Err(StoreError::Invalid(
                "order must contain at least one item".to_string(),
            ));
        }

        let mut items = Vec::with_capacity(request.items.len());
        let mut total_cents: i64 = 0;

        for line in &request.items {
            if line.quantity == 0 {
                return Err(StoreError::Invalid(
                    "item quantity must be at least 1".to_string(),
                ));
            }

            let product = self.get_active_product(line.product_id).map_err(|_| {
                StoreError::Invalid(format!(
                    "product {} is unknown or not orderable",
                    line.product_id
                ))
            })?;

            total_cents += product.price_cents * i64::from(line.quantity);
            items.push(OrderItem {
                product_id: product.id,
                quantity: line.quantity,
                unit_price_cents: product.price_cents,
            });
        }

        let order = Order {
            id: Uuid::new_v4(),
            user_id,
            items,
            total_cents,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    /// Ownership-scoped listing: the user's own orders, newest first.
    pub fn list_orders_for_user(&self, user_id: Uuid) -> Vec<Order> {
        let mut orders: Vec<_> = self
            .orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        orders
    }

    /// Fetch an order by id. Ownership is verified by the caller.
    pub fn get_order(&self, id: Uuid) -> StoreResult<Order> {
        self.orders
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { resource: "order" })
    }

    /// All orders, newest first. Admin view.
    pub fn list_all_orders(&self) -> Vec<Order> {
        let mut orders: Vec<_> = self.orders.values().cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        orders
    }
}

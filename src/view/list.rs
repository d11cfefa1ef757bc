use chrono::NaiveDate;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::card::OrderCard;
use super::state::OrderFilter;
use crate::models::{Order, OrderStatus};

/// Per-status tally shown on the stats bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub by_status: Vec<StatusCount>,
    pub active: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn tally(orders: &[Order]) -> Self {
        let by_status: Vec<StatusCount> = OrderStatus::iter()
            .map(|status| StatusCount {
                status,
                label: status.short_label(),
                count: orders.iter().filter(|o| o.status() == status).count(),
            })
            .collect();
        let active = by_status
            .iter()
            .filter(|c| !c.status.is_complete())
            .map(|c| c.count)
            .sum();
        Self {
            by_status,
            active,
            total: orders.len(),
        }
    }

    pub fn get(&self, status: OrderStatus) -> usize {
        self.by_status
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn archived(&self) -> usize {
        self.get(OrderStatus::Complete)
    }
}

/// Orders that pass `filter`, in server order.
pub fn filter_orders(orders: &[Order], filter: OrderFilter) -> Vec<&Order> {
    orders.iter().filter(|order| filter.matches(order)).collect()
}

/// The rendered order list for one filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderListView {
    pub filter: OrderFilter,
    pub title: String,
    pub counts: StatusCounts,
    pub cards: Vec<OrderCard>,
}

impl OrderListView {
    pub fn build(orders: &[Order], filter: OrderFilter, today: NaiveDate) -> Self {
        Self {
            filter,
            title: filter.title(),
            counts: StatusCounts::tally(orders),
            cards: filter_orders(orders, filter)
                .into_iter()
                .map(|order| OrderCard::new(order, today))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            order_id: id.into(),
            current_status: Some(status),
            is_complete: status.is_complete(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("1", OrderStatus::NeedsPaymentLink),
            order("2", OrderStatus::NeedsPaymentLink),
            order("3", OrderStatus::NeedsBol),
            order("4", OrderStatus::Complete),
            Order {
                order_id: "5".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn counts_include_unknown_status_as_first_step() {
        let counts = StatusCounts::tally(&sample());
        assert_eq!(counts.get(OrderStatus::NeedsPaymentLink), 3);
        assert_eq!(counts.get(OrderStatus::NeedsBol), 1);
        assert_eq!(counts.archived(), 1);
        assert_eq!(counts.active, 4);
        assert_eq!(counts.total, 5);
    }

    #[test]
    fn archive_view_lists_exactly_complete_orders() {
        let orders = sample();
        let ids: Vec<&str> = filter_orders(&orders, OrderFilter::Archived)
            .iter()
            .map(|o| o.order_id.as_str())
            .collect();
        assert_eq!(ids, vec!["4"]);

        let active = filter_orders(&orders, OrderFilter::AllActive);
        assert_eq!(active.len(), 4);
        assert!(active.iter().all(|o| !o.status().is_complete()));
    }

    #[test]
    fn list_view_uses_filter_title() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let view = OrderListView::build(
            &sample(),
            OrderFilter::Status(OrderStatus::NeedsBol),
            today,
        );
        assert_eq!(view.title, "5-Need BOL");
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].order_id, "3");
    }

    fn any_status() -> impl Strategy<Value = OrderStatus> {
        (0usize..7).prop_map(|i| OrderStatus::iter().nth(i).unwrap_or_default())
    }

    proptest! {
        #[test]
        fn counts_sum_to_total(statuses in prop::collection::vec(any_status(), 0..200)) {
            let orders: Vec<Order> = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| order(&i.to_string(), *s))
                .collect();
            let counts = StatusCounts::tally(&orders);
            let sum: usize = counts.by_status.iter().map(|c| c.count).sum();
            prop_assert_eq!(sum, orders.len());
            prop_assert_eq!(counts.active + counts.archived(), counts.total);
        }
    }
}

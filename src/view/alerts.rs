use serde::Serialize;

use crate::models::Alert;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertRow {
    pub id: String,
    pub order_id: Option<String>,
    pub type_label: String,
    pub message: String,
}

impl From<&Alert> for AlertRow {
    fn from(alert: &Alert) -> Self {
        Self {
            id: alert.id.clone(),
            order_id: alert.order_id.clone(),
            type_label: alert.type_label(),
            message: alert.alert_message.clone(),
        }
    }
}

/// Unresolved alerts, loaded separately from orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlertsPanel {
    pub rows: Vec<AlertRow>,
}

impl AlertsPanel {
    pub fn new(alerts: &[Alert]) -> Self {
        Self {
            rows: alerts
                .iter()
                .filter(|alert| !alert.is_resolved)
                .map(AlertRow::from)
                .collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn for_order<'a>(&'a self, order_id: &'a str) -> impl Iterator<Item = &'a AlertRow> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.order_id.as_deref() == Some(order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, order: &str, resolved: bool) -> Alert {
        Alert {
            id: id.into(),
            order_id: Some(order.into()),
            alert_type: "stale_order".into(),
            alert_message: "No movement in 5 days".into(),
            is_resolved: resolved,
        }
    }

    #[test]
    fn resolved_alerts_are_hidden() {
        let panel = AlertsPanel::new(&[alert("1", "5124", false), alert("2", "5124", true)]);
        assert_eq!(panel.count(), 1);
        assert_eq!(panel.rows[0].type_label, "stale order");
    }

    #[test]
    fn rows_filter_by_order() {
        let panel = AlertsPanel::new(&[alert("1", "5124", false), alert("3", "5200", false)]);
        let ids: Vec<&str> = panel.for_order("5200").map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }
}

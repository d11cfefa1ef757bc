use serde::{Deserialize, Serialize};

use super::{id_string, lenient_bool, opt_id_string};

/// Operational alert raised by the backend against an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub alert_type: String,
    #[serde(default)]
    pub alert_message: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_resolved: bool,
}

impl Alert {
    /// Type tag for display; the first underscore becomes a space.
    pub fn type_label(&self) -> String {
        self.alert_type.replacen('_', " ", 1)
    }
}

use serde::Serialize;

use crate::models::order::non_blank;
use crate::models::{Destination, Order};

pub const COMPANY_EMAIL: &str = "cabinetsforcontractors@gmail.com";

/// Fixed bill-to block entered on every freight BOL.
pub mod bill_to {
    pub const COMPANY: &str = "Cabinets For Contactors-Cust Number C00VP1";
    pub const STREET: &str = "185 Stevenson Point";
    pub const CITY: &str = "DALLAS";
    pub const STATE: &str = "GA";
    pub const ZIP: &str = "30132";
    pub const EMAIL: &str = super::COMPANY_EMAIL;
    pub const PHONE: &str = "(770) 990-4885";
}

/// A labelled value the operator copies into a carrier form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyField {
    pub label: &'static str,
    pub value: String,
}

impl CopyField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

fn push_present(fields: &mut Vec<CopyField>, label: &'static str, value: &Option<String>) {
    if let Some(value) = non_blank(value) {
        fields.push(CopyField::new(label, value));
    }
}

/// Ship-to fields, skipping blanks.
pub fn destination_fields(destination: &Destination) -> Vec<CopyField> {
    let mut fields = Vec::with_capacity(7);
    push_present(&mut fields, "Company/Name", &destination.name);
    push_present(&mut fields, "Street", &destination.street);
    push_present(&mut fields, "City", &destination.city);
    push_present(&mut fields, "State", &destination.state);
    push_present(&mut fields, "ZIP", &destination.zip);
    push_present(&mut fields, "Phone", &destination.phone);
    push_present(&mut fields, "Email", &destination.email);
    fields
}

pub fn bill_to_fields() -> Vec<CopyField> {
    vec![
        CopyField::new("Company", bill_to::COMPANY),
        CopyField::new("Street", bill_to::STREET),
        CopyField::new("City", bill_to::CITY),
        CopyField::new("State", bill_to::STATE),
        CopyField::new("ZIP", bill_to::ZIP),
        CopyField::new("Email", bill_to::EMAIL),
        CopyField::new("Phone", bill_to::PHONE),
    ]
}

/// Carrier notification list: the customer (when known) plus the company inbox.
pub fn notification_emails(customer_email: Option<&str>) -> String {
    match customer_email.map(str::trim).filter(|e| !e.is_empty()) {
        Some(email) => format!("{}, {}", email, COMPANY_EMAIL),
        None => COMPANY_EMAIL.to_string(),
    }
}

/// Who a shipment belongs to; enough to address the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderContact {
    pub order_id: String,
    pub email: Option<String>,
    pub customer_name: Option<String>,
    pub company_name: Option<String>,
    pub ship_to: Destination,
}

impl OrderContact {
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            email: order.email.clone(),
            customer_name: order.customer_name.clone(),
            company_name: order.company_name.clone(),
            ship_to: order.ship_to(),
        }
    }

    pub fn first_name(&self) -> &str {
        non_blank(&self.customer_name)
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("Valued")
    }

    /// Company, falling back to the contact name.
    pub fn addressee(&self) -> &str {
        non_blank(&self.company_name)
            .or_else(|| non_blank(&self.customer_name))
            .unwrap_or("Valued Customer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_fields_skip_blanks() {
        let destination = Destination {
            name: Some("Rivera Builders".into()),
            street: Some("12 Oak St".into()),
            city: Some("Macon".into()),
            state: Some("GA".into()),
            zip: Some("31201".into()),
            phone: Some("".into()),
            email: None,
        };
        let labels: Vec<_> = destination_fields(&destination)
            .into_iter()
            .map(|f| f.label)
            .collect();
        assert_eq!(labels, vec!["Company/Name", "Street", "City", "State", "ZIP"]);
    }

    #[test]
    fn notification_list_includes_company_inbox() {
        assert_eq!(
            notification_emails(Some("pat@rivera.test")),
            "pat@rivera.test, cabinetsforcontractors@gmail.com"
        );
        assert_eq!(notification_emails(Some("  ")), COMPANY_EMAIL);
        assert_eq!(notification_emails(None), COMPANY_EMAIL);
    }

    #[test]
    fn contact_falls_back_to_generic_greeting() {
        let contact = OrderContact::default();
        assert_eq!(contact.first_name(), "Valued");
        assert_eq!(contact.addressee(), "Valued Customer");
    }
}

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

use super::address::OrderContact;
use super::li_delivery::LiDeliveryPricing;
use super::ltl::LtlQuoteHelper;
use super::pirateship::PirateshipHelper;
use super::tracking::{TrackingEmail, TrackingPanel};
use crate::client::{OrdersApi, ShipmentPatch};
use crate::errors::{ApiError, MethodChoiceError};
use crate::links::WindowGeometry;
use crate::models::order::non_blank;
use crate::models::{Order, ShipMethod, Shipment, ShipmentStatus};

/// Which panel the shipping manager shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagerView {
    Select,
    Rl,
    Pirateship,
    LiDelivery,
    Tracking,
}

impl ManagerView {
    pub fn for_method(method: Option<ShipMethod>) -> Self {
        match method {
            None => ManagerView::Select,
            Some(ShipMethod::Ltl) => ManagerView::Rl,
            Some(ShipMethod::Pirateship) => ManagerView::Pirateship,
            Some(ShipMethod::LiDelivery) => ManagerView::LiDelivery,
            Some(ShipMethod::Pickup) | Some(ShipMethod::BoxTruck) => ManagerView::Tracking,
        }
    }
}

/// Helper backing the current view.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelHelper {
    None,
    Ltl(LtlQuoteHelper),
    Pirateship(PirateshipHelper),
    LiDelivery(LiDeliveryPricing),
    Tracking(TrackingPanel),
}

/// What a save sent to the server, and the customer notification to
/// send when it recorded a tracking number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveOutcome {
    pub patch: Option<ShipmentPatch>,
    pub email: Option<TrackingEmail>,
}

/// Method choice offered in the select view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodOption {
    pub method: ShipMethod,
    pub label: &'static str,
    pub description: &'static str,
    pub active: bool,
}

/// Shipping manager for one shipment.
///
/// The view follows the persisted method: a shipment that already has one
/// skips the select view. Picking a method persists it with a single
/// update and always moves to that method's view, whether or not the
/// update succeeded.
#[derive(Debug, Clone)]
pub struct ShipmentMethodRouter {
    contact: OrderContact,
    shipment: Shipment,
    method: Option<ShipMethod>,
    view: ManagerView,
    helper: PanelHelper,
    window: WindowGeometry,
    open: bool,
}

impl ShipmentMethodRouter {
    pub fn new(contact: OrderContact, shipment: Shipment, window: WindowGeometry) -> Self {
        let method = shipment.ship_method;
        Self {
            contact,
            shipment,
            method,
            view: ManagerView::for_method(method),
            helper: PanelHelper::None,
            window,
            open: true,
        }
    }

    pub fn for_order(order: &Order, shipment_id: &str, window: WindowGeometry) -> Option<Self> {
        let shipment = order.shipment(shipment_id)?.clone();
        Some(Self::new(OrderContact::from_order(order), shipment, window))
    }

    /// Builds the helper for the initial view.
    pub async fn mount(&mut self, api: &dyn OrdersApi) -> Result<(), ApiError> {
        self.enter_view(api).await
    }

    pub fn view(&self) -> ManagerView {
        self.view
    }

    pub fn method(&self) -> Option<ShipMethod> {
        self.method
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn shipment(&self) -> &Shipment {
        &self.shipment
    }

    pub fn contact(&self) -> &OrderContact {
        &self.contact
    }

    pub fn helper(&self) -> &PanelHelper {
        &self.helper
    }

    pub fn method_options(&self) -> Vec<MethodOption> {
        ShipMethod::iter()
            .map(|method| MethodOption {
                method,
                label: method.label(),
                description: method.description(),
                active: self.method == Some(method),
            })
            .collect()
    }

    pub fn ltl_mut(&mut self) -> Option<&mut LtlQuoteHelper> {
        match &mut self.helper {
            PanelHelper::Ltl(helper) => Some(helper),
            _ => None,
        }
    }

    pub fn pirateship_mut(&mut self) -> Option<&mut PirateshipHelper> {
        match &mut self.helper {
            PanelHelper::Pirateship(helper) => Some(helper),
            _ => None,
        }
    }

    pub fn li_delivery_mut(&mut self) -> Option<&mut LiDeliveryPricing> {
        match &mut self.helper {
            PanelHelper::LiDelivery(pricing) => Some(pricing),
            _ => None,
        }
    }

    pub fn tracking_mut(&mut self) -> Option<&mut TrackingPanel> {
        match &mut self.helper {
            PanelHelper::Tracking(panel) => Some(panel),
            _ => None,
        }
    }

    async fn enter_view(&mut self, api: &dyn OrdersApi) -> Result<(), ApiError> {
        let (helper, loaded) = match self.view {
            ManagerView::Select => (PanelHelper::None, Ok(())),
            ManagerView::Rl => {
                let mut helper = LtlQuoteHelper::new(self.shipment.shipment_id.clone(), self.window);
                let loaded = helper.load(api).await;
                (PanelHelper::Ltl(helper), loaded)
            }
            ManagerView::Pirateship => (
                PanelHelper::Pirateship(PirateshipHelper::new(
                    &self.shipment,
                    self.contact.ship_to.clone(),
                )),
                Ok(()),
            ),
            ManagerView::LiDelivery => (
                PanelHelper::LiDelivery(LiDeliveryPricing::for_shipment(&self.shipment)),
                Ok(()),
            ),
            ManagerView::Tracking => (
                PanelHelper::Tracking(TrackingPanel::new(&self.shipment)),
                Ok(()),
            ),
        };
        self.helper = helper;
        loaded
    }

    /// Persists `method` and routes to its view. The view changes even when
    /// the update fails; a persist failure takes precedence over a failure
    /// to load the new view's data.
    #[instrument(skip(self, api), fields(shipment_id = %self.shipment.shipment_id))]
    pub async fn select_method(
        &mut self,
        api: &dyn OrdersApi,
        method: ShipMethod,
    ) -> Result<(), MethodChoiceError> {
        let patch = ShipmentPatch::new().ship_method(Some(method));
        let persisted = api.update_shipment(&self.shipment.shipment_id, &patch).await;
        match &persisted {
            Ok(()) => info!(method = %method, "Shipping method saved"),
            Err(err) => warn!(method = %method, error = %err, "Failed to save shipping method"),
        }

        self.method = Some(method);
        self.shipment.ship_method = Some(method);
        self.view = ManagerView::for_method(Some(method));
        let entered = self.enter_view(api).await;

        persisted.map_err(MethodChoiceError::Persist)?;
        entered.map_err(MethodChoiceError::Load)
    }

    /// Shows `method`'s view without persisting the choice.
    pub async fn preview_method(
        &mut self,
        api: &dyn OrdersApi,
        method: ShipMethod,
    ) -> Result<(), ApiError> {
        self.view = ManagerView::for_method(Some(method));
        self.enter_view(api).await
    }

    /// Back to the method list.
    pub fn change_method(&mut self) {
        self.view = ManagerView::Select;
        self.helper = PanelHelper::None;
    }

    /// Terminal "Save"/"Done": persists whatever the helper collected and
    /// closes the panel. The panel closes even when the update fails.
    #[instrument(skip(self, api), fields(shipment_id = %self.shipment.shipment_id))]
    pub async fn save(&mut self, api: &dyn OrdersApi) -> Result<SaveOutcome, ApiError> {
        let result = self.persist_helper(api).await;
        self.open = false;
        result
    }

    async fn persist_helper(&mut self, api: &dyn OrdersApi) -> Result<SaveOutcome, ApiError> {
        let (patch, tracking) = match self.pending_patch() {
            Some(pending) => pending,
            None => return Ok(SaveOutcome::default()),
        };

        api.update_shipment(&self.shipment.shipment_id, &patch).await?;
        info!(fields = patch.pairs().len(), "Shipment helper values saved");

        let email = tracking.map(|tracking| {
            self.shipment.tracking_number = Some(tracking.clone());
            self.shipment.status = Some(ShipmentStatus::Shipped);
            TrackingEmail::compose(&self.contact, &tracking, self.method)
        });
        Ok(SaveOutcome {
            patch: Some(patch),
            email,
        })
    }

    /// Patch for the current helper, plus the tracking number it records.
    fn pending_patch(&self) -> Option<(ShipmentPatch, Option<String>)> {
        let tracking = match &self.helper {
            PanelHelper::None => return None,
            PanelHelper::Ltl(helper) => {
                let patch = helper.to_patch();
                return (helper.is_dirty() && !patch.is_empty()).then(|| (patch, None));
            }
            PanelHelper::LiDelivery(pricing) => return pricing.to_patch().map(|patch| (patch, None)),
            PanelHelper::Pirateship(helper) => helper.entered_tracking(),
            PanelHelper::Tracking(panel) => panel.entered_tracking(),
        };

        let stored = non_blank(&self.shipment.tracking_number);
        tracking
            .filter(|t| Some(*t) != stored)
            .map(|t| (tracking_patch(t), Some(t.to_string())))
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Recording a tracking number also marks the shipment shipped.
pub fn tracking_patch(tracking: &str) -> ShipmentPatch {
    ShipmentPatch::new()
        .tracking_number(tracking.trim())
        .status(ShipmentStatus::Shipped)
}

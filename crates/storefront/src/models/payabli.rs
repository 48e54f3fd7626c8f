//! Payabli embedded-component configuration.
//!
//! These structs reproduce the contract the Payabli `expressCheckout`
//! component expects when it is instantiated in the browser. Only the public
//! token ever appears here; the server-side API key stays in the process.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::PayabliConfig;
use crate::models::order::Order;

/// Top-level component configuration returned by the checkout config route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayabliWidgetConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub root_container: &'static str,
    pub token: String,
    pub entry_point: String,
    pub express_checkout: ExpressCheckoutOptions,
    pub customer_data: CustomerData,
}

/// Express-checkout block: amounts plus wallet button options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressCheckoutOptions {
    pub amount: Decimal,
    pub fee: Decimal,
    pub currency: &'static str,
    pub supported_networks: Vec<&'static str>,
    pub columns: u32,
    pub required_shipping_contact_fields: bool,
    pub apple_pay: WalletButton,
    pub google_pay: WalletButton,
    pub appearance: Appearance,
}

/// A digital wallet button (Apple Pay / Google Pay).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletButton {
    pub enabled: bool,
    pub button_style: &'static str,
    pub button_type: &'static str,
    pub language: &'static str,
}

/// Component appearance settings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub button_height: u32,
    pub button_border_radius: u32,
    pub padding: Padding,
}

#[derive(Debug, Serialize)]
pub struct Padding {
    pub x: u32,
    pub y: u32,
}

/// Customer fields prefilled into the payment sheet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    pub first_name: String,
    pub last_name: String,
    pub billing_email: String,
}

impl PayabliWidgetConfig {
    /// Build the component configuration for an order.
    #[must_use]
    pub fn for_order(config: &PayabliConfig, order: &Order) -> Self {
        Self {
            kind: "expressCheckout",
            root_container: "express-checkout-container",
            token: config.public_token.clone(),
            entry_point: config.entry_point.clone(),
            express_checkout: ExpressCheckoutOptions {
                amount: order.total,
                fee: order.service_fee,
                currency: "USD",
                supported_networks: vec!["visa", "masterCard", "amex", "discover"],
                columns: 1,
                required_shipping_contact_fields: true,
                apple_pay: WalletButton {
                    enabled: true,
                    button_style: "black",
                    button_type: "buy",
                    language: "en-US",
                },
                google_pay: WalletButton {
                    enabled: true,
                    button_style: "black",
                    button_type: "buy",
                    language: "en",
                },
                appearance: Appearance {
                    button_height: 54,
                    button_border_radius: 0,
                    padding: Padding { x: 0, y: 0 },
                },
            },
            customer_data: CustomerData {
                first_name: order.customer.first_name.clone().unwrap_or_default(),
                last_name: order.customer.last_name.clone().unwrap_or_default(),
                billing_email: order.customer.email.clone().unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::PayabliEnvironment;
    use chrono::Utc;
    use secrecy::SecretString;
    use suit_yourself_core::types::{OrderId, OrderStatus};

    #[test]
    fn test_widget_config_uses_public_token_only() {
        let config = PayabliConfig {
            public_token: "public-token".to_string(),
            api_key: SecretString::from("server-side-key"),
            entry_point: "mystore".to_string(),
            environment: PayabliEnvironment::Sandbox,
        };
        let order = Order {
            id: OrderId::new("ORD-test"),
            status: OrderStatus::PendingPayment,
            items: vec![],
            subtotal: Decimal::new(59900, 2),
            service_fee: Decimal::ZERO,
            total: Decimal::new(59900, 2),
            customer: crate::models::order::CustomerInfo {
                first_name: Some("Ada".to_string()),
                last_name: None,
                email: Some("ada@example.com".to_string()),
            },
            created_at: Utc::now(),
            payment_reference_id: None,
            payment_method: None,
            paid_at: None,
        };

        let widget = PayabliWidgetConfig::for_order(&config, &order);
        let json = serde_json::to_value(&widget).unwrap();

        assert_eq!(json["type"], "expressCheckout");
        assert_eq!(json["token"], "public-token");
        assert_eq!(json["expressCheckout"]["amount"], "599.00");
        assert_eq!(json["customerData"]["firstName"], "Ada");
        assert_eq!(json["customerData"]["lastName"], "");
        assert!(!json.to_string().contains("server-side-key"));
    }
}

//! Billing details and checkout validation

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    #[default]
    #[serde(rename = "cod")]
    CashOnDelivery,

    /// `bKash` "send money"; needs a transaction reference.
    #[serde(rename = "bkash")]
    MobileWallet,
}

impl PaymentMethod {
    /// Stored code of the payment method.
    pub const fn code(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cod",
            Self::MobileWallet => "bkash",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
            Self::MobileWallet => "bKash",
        }
    }

    /// Whether a transaction reference must accompany the order.
    pub const fn requires_transaction_reference(self) -> bool {
        matches!(self, Self::MobileWallet)
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown payment method.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cod" | "cash-on-delivery" => Ok(Self::CashOnDelivery),
            "bkash" | "mobile-wallet" => Ok(Self::MobileWallet),
            _ => Err(UnknownPaymentMethod(value.to_string())),
        }
    }
}

/// Customer details entered on the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    /// Customer name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Free-text delivery address
    pub address: String,

    /// Chosen payment method
    pub payment_method: PaymentMethod,

    /// Wallet transaction reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Required billing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingField {
    /// Customer name
    Name,

    /// Phone number
    Phone,

    /// Delivery address
    Address,
}

impl Display for BillingField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Address => "address",
        })
    }
}

/// Reasons a checkout submission is rejected before anything is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// A required billing field is blank.
    #[error("missing required field: {0}")]
    MissingField(BillingField),

    /// Mobile-wallet payment without a transaction reference.
    #[error("transaction reference is required for {0} payments")]
    MissingTransactionReference(PaymentMethod),
}

impl BillingDetails {
    /// Check that every required field is present.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`]: name, phone or address is blank.
    /// - [`ValidationError::MissingTransactionReference`]: mobile-wallet payment
    ///   without a reference.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (BillingField::Name, &self.name),
            (BillingField::Phone, &self.phone),
            (BillingField::Address, &self.address),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }

        let has_reference = self
            .transaction_id
            .as_deref()
            .is_some_and(|reference| !reference.trim().is_empty());

        if self.payment_method.requires_transaction_reference() && !has_reference {
            return Err(ValidationError::MissingTransactionReference(
                self.payment_method,
            ));
        }

        Ok(())
    }
}

/// Validate a cart and billing details ahead of submission.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyCart`] for an empty cart, otherwise any
/// error from [`BillingDetails::validate`].
pub fn validate_checkout(cart: &Cart, billing: &BillingDetails) -> Result<(), ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    billing.validate()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::items::{ItemId, NewCartItem};

    use super::*;

    fn billing() -> BillingDetails {
        BillingDetails {
            name: "Nusrat Jahan".to_string(),
            phone: "01700000000".to_string(),
            address: "House 12, Road 5, Dhanmondi, Dhaka".to_string(),
            payment_method: PaymentMethod::CashOnDelivery,
            transaction_id: None,
        }
    }

    fn cart_with_one_item() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(NewCartItem {
            id: ItemId::from(1),
            name: "Lipstick".to_string(),
            price: Decimal::from(450),
            category: "Makeup".to_string(),
            image: String::new(),
        });
        cart
    }

    #[test]
    fn complete_cash_on_delivery_details_are_valid() {
        assert_eq!(validate_checkout(&cart_with_one_item(), &billing()), Ok(()));
    }

    #[test]
    fn empty_cart_is_rejected_first() {
        let details = BillingDetails::default();

        assert_eq!(
            validate_checkout(&Cart::new(), &details),
            Err(ValidationError::EmptyCart)
        );
    }

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let mut details = billing();
        details.phone = "   ".to_string();
        details.address = String::new();

        assert_eq!(
            details.validate(),
            Err(ValidationError::MissingField(BillingField::Phone))
        );
    }

    #[test]
    fn mobile_wallet_requires_reference() {
        let mut details = billing();
        details.payment_method = PaymentMethod::MobileWallet;
        details.transaction_id = Some(String::new());

        assert_eq!(
            details.validate(),
            Err(ValidationError::MissingTransactionReference(
                PaymentMethod::MobileWallet
            ))
        );
    }

    #[test]
    fn mobile_wallet_with_reference_is_valid() {
        let mut details = billing();
        details.payment_method = PaymentMethod::MobileWallet;
        details.transaction_id = Some("8N7A6B5C4D".to_string());

        assert_eq!(details.validate(), Ok(()));
    }

    #[test]
    fn payment_method_parses_codes_and_aliases() -> TestResult {
        assert_eq!("cod".parse::<PaymentMethod>()?, PaymentMethod::CashOnDelivery);
        assert_eq!("bKash".parse::<PaymentMethod>()?, PaymentMethod::MobileWallet);
        assert_eq!(
            "mobile-wallet".parse::<PaymentMethod>()?,
            PaymentMethod::MobileWallet
        );
        assert!("card".parse::<PaymentMethod>().is_err());

        Ok(())
    }

    #[test]
    fn billing_serializes_with_stored_field_names() -> TestResult {
        let mut details = billing();
        details.payment_method = PaymentMethod::MobileWallet;
        details.transaction_id = Some("TX1".to_string());

        let value = serde_json::to_value(&details)?;

        assert_eq!(value["paymentMethod"], "bkash");
        assert_eq!(value["transactionId"], "TX1");

        Ok(())
    }
}

//! User records and their stored payment credentials.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, PaymentField};
use crate::value_objects::UserId;

/// Card details stored on a user record.
///
/// All three fields are opaque strings; the only validation is that none of
/// them is empty. `Debug` output masks the card number and CVV.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PaymentInfo {
    card_number: String,
    expiry_date: String,
    cvv: String,
}

impl PaymentInfo {
    pub fn new(
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            cvv: cvv.into(),
        }
    }

    /// Checks that every credential field is present.
    ///
    /// Fields are checked in the order card number, expiry date, CVV and the
    /// first empty one is reported.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            (PaymentField::CardNumber, &self.card_number),
            (PaymentField::ExpiryDate, &self.expiry_date),
            (PaymentField::Cvv, &self.cvv),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(DomainError::InvalidPaymentInfo(field)),
            None => Ok(()),
        }
    }

    /// Returns the final four characters of the card number, or an empty
    /// string when the card number is shorter than that.
    pub fn last_four_digits(&self) -> String {
        let len = self.card_number.chars().count();
        if len < 4 {
            return String::new();
        }
        self.card_number.chars().skip(len - 4).collect()
    }
}

impl std::fmt::Debug for PaymentInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentInfo")
            .field("card_number", &format_args!("****{}", self.last_four_digits()))
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &format_args!("***"))
            .finish()
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: String,

    /// Never serialized.
    #[serde(skip_serializing, default)]
    pub payment_info: PaymentInfo,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        payment_info: PaymentInfo,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            address: address.into(),
            payment_info,
        }
    }
}

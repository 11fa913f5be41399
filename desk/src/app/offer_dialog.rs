//! # Offer Dialog
//!
//! State machine of the "Faire une offre" dialog:
//!
//! ```text
//! Closed ──open──▶ Open ──submit──▶ Submitting ──ok──▶ Closed
//!                   │ ▲                  │
//!             cancel│ └──edit price──┐   │err
//!                   ▼                │   ▼
//!                Closed            Error(message) ──submit──▶ Submitting
//! ```
//!
//! Submission needs a numeric, positive price.

use shared::dto::CreateOfferRequest;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum OfferDialog {
    #[default]
    Closed,
    Open {
        request_id: i64,
        price: String,
    },
    Submitting {
        request_id: i64,
        price: String,
    },
    Error {
        request_id: i64,
        price: String,
        message: String,
    },
}

impl OfferDialog {
    pub fn open(request_id: i64) -> Self {
        OfferDialog::Open {
            request_id,
            price: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, OfferDialog::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, OfferDialog::Submitting { .. })
    }

    pub fn request_id(&self) -> Option<i64> {
        match self {
            OfferDialog::Closed => None,
            OfferDialog::Open { request_id, .. }
            | OfferDialog::Submitting { request_id, .. }
            | OfferDialog::Error { request_id, .. } => Some(*request_id),
        }
    }

    pub fn price(&self) -> &str {
        match self {
            OfferDialog::Closed => "",
            OfferDialog::Open { price, .. }
            | OfferDialog::Submitting { price, .. }
            | OfferDialog::Error { price, .. } => price,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            OfferDialog::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Edit the price; ignored unless the dialog accepts input.
    pub fn set_price(&mut self, text: &str) {
        match self {
            OfferDialog::Open { price, .. } | OfferDialog::Error { price, .. } => {
                *price = text.to_string();
            }
            OfferDialog::Closed | OfferDialog::Submitting { .. } => {}
        }
    }

    /// Price per kg, when the typed value is a positive number.
    pub fn parsed_price(&self) -> Option<f64> {
        self.price()
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, OfferDialog::Open { .. } | OfferDialog::Error { .. })
            && self.parsed_price().is_some()
    }

    /// Move to `Submitting` and return the payload to send.
    pub fn begin_submit(&mut self) -> Option<CreateOfferRequest> {
        if !self.can_submit() {
            return None;
        }
        let request_id = self.request_id()?;
        let price_per_kg = self.parsed_price()?;
        let price = self.price().to_string();
        *self = OfferDialog::Submitting { request_id, price };
        Some(CreateOfferRequest::new(request_id, price_per_kg))
    }

    pub fn succeed(&mut self) {
        *self = OfferDialog::Closed;
    }

    /// Stay open with an error; the user may retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        let next = match self {
            OfferDialog::Submitting { request_id, price } => OfferDialog::Error {
                request_id: *request_id,
                price: std::mem::take(price),
                message: message.into(),
            },
            _ => return,
        };
        *self = next;
    }

    /// Close without submitting. An in-flight submission cannot be cancelled.
    pub fn cancel(&mut self) {
        if !self.is_submitting() {
            *self = OfferDialog::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_requires_numeric_price() {
        let mut dialog = OfferDialog::open(7);
        assert!(!dialog.can_submit());
        assert!(dialog.begin_submit().is_none());

        dialog.set_price("abc");
        assert!(!dialog.can_submit());

        dialog.set_price("0");
        assert!(!dialog.can_submit());

        dialog.set_price("2,5");
        let payload = dialog.begin_submit().unwrap();
        assert_eq!(payload.shipment_request_id, 7);
        assert_eq!(payload.price_per_kg, 2.5);
        assert!(dialog.is_submitting());
    }

    #[test]
    fn test_failure_keeps_dialog_open_for_retry() {
        let mut dialog = OfferDialog::open(3);
        dialog.set_price("4");
        dialog.begin_submit().unwrap();

        dialog.fail("Erreur lors de la soumission de l'offre.");
        assert!(dialog.is_open());
        assert_eq!(dialog.error(), Some("Erreur lors de la soumission de l'offre."));
        assert_eq!(dialog.price(), "4");

        assert!(dialog.begin_submit().is_some());
        dialog.succeed();
        assert_eq!(dialog, OfferDialog::Closed);
    }

    #[test]
    fn test_cancel_ignored_while_submitting() {
        let mut dialog = OfferDialog::open(1);
        dialog.set_price("1.2");
        dialog.begin_submit().unwrap();
        dialog.cancel();
        assert!(dialog.is_submitting());
        dialog.set_price("9");
        assert_eq!(dialog.price(), "1.2");
    }
}

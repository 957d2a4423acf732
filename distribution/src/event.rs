//! Caller-supplied inputs: the service event and its confirmations.

use psp_types::UsdAmount;
use serde::{Deserialize, Serialize};

/// dApp tag used when the caller does not name one.
pub const DEFAULT_DAPP_ORIGIN: &str = "generic";

/// A completed service, as reported by the calling application.
///
/// Identifiers are opaque to the protocol. `service_value_usd` is carried
/// through for the caller's records and never affects the emission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEvent {
    pub worker_id: u64,
    pub client_id: u64,
    #[serde(default)]
    pub property_id: Option<u64>,
    #[serde(default)]
    pub certificate_id: Option<u64>,
    /// Decimal string such as `"150.00"`, or whole dollars as an integer.
    #[serde(default)]
    pub service_value_usd: UsdAmount,
    #[serde(default = "default_dapp_origin")]
    pub dapp_origin: String,
}

fn default_dapp_origin() -> String {
    DEFAULT_DAPP_ORIGIN.to_string()
}

impl ServiceEvent {
    pub fn new(worker_id: u64, client_id: u64) -> Self {
        Self {
            worker_id,
            client_id,
            property_id: None,
            certificate_id: None,
            service_value_usd: UsdAmount::ZERO,
            dapp_origin: default_dapp_origin(),
        }
    }

    pub fn with_property(mut self, property_id: u64) -> Self {
        self.property_id = Some(property_id);
        self
    }

    pub fn with_certificate(mut self, certificate_id: u64) -> Self {
        self.certificate_id = Some(certificate_id);
        self
    }

    pub fn with_service_value(mut self, value: UsdAmount) -> Self {
        self.service_value_usd = value;
        self
    }

    pub fn with_dapp_origin(mut self, origin: impl Into<String>) -> Self {
        self.dapp_origin = origin.into();
        self
    }
}

/// The three confirmations a service needs before its emission is honoured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Confirmations {
    pub performed_by_verified_worker: bool,
    pub received_by_verified_client: bool,
    pub bilaterally_confirmed: bool,
}

impl Confirmations {
    pub const fn all() -> Self {
        Self {
            performed_by_verified_worker: true,
            received_by_verified_client: true,
            bilaterally_confirmed: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            performed_by_verified_worker: false,
            received_by_verified_client: false,
            bilaterally_confirmed: false,
        }
    }

    /// Without verified physical work, there is no emission.
    pub fn is_complete(&self) -> bool {
        self.performed_by_verified_worker
            && self.received_by_verified_client
            && self.bilaterally_confirmed
    }

    /// Names of the confirmations that are still missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.performed_by_verified_worker {
            missing.push("performed_by_verified_worker");
        }
        if !self.received_by_verified_client {
            missing.push("received_by_verified_client");
        }
        if !self.bilaterally_confirmed {
            missing.push("bilaterally_confirmed");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let event = ServiceEvent::new(1, 2)
            .with_property(3)
            .with_certificate(4)
            .with_service_value(UsdAmount::from_dollars(150))
            .with_dapp_origin("handyplan");
        assert_eq!(event.property_id, Some(3));
        assert_eq!(event.certificate_id, Some(4));
        assert_eq!(event.service_value_usd.cents(), 15_000);
        assert_eq!(event.dapp_origin, "handyplan");
    }

    #[test]
    fn defaults_apply_when_deserializing() {
        let event: ServiceEvent =
            serde_json::from_str(r#"{"worker_id": 7, "client_id": 8}"#).unwrap();
        assert_eq!(event, ServiceEvent::new(7, 8));
        assert_eq!(event.dapp_origin, "generic");
    }

    #[test]
    fn service_value_reads_as_decimal_text() {
        let event: ServiceEvent = serde_json::from_str(
            r#"{"worker_id": 1, "client_id": 2, "service_value_usd": "0.01"}"#,
        )
        .unwrap();
        assert_eq!(event.service_value_usd, UsdAmount::from_cents(1));
    }

    #[test]
    fn fractional_service_value_as_number_is_rejected() {
        let err = serde_json::from_str::<ServiceEvent>(
            r#"{"worker_id": 1, "client_id": 2, "service_value_usd": 0.01}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must be a decimal string"), "{err}");

        let whole: ServiceEvent = serde_json::from_str(
            r#"{"worker_id": 1, "client_id": 2, "service_value_usd": 1000000}"#,
        )
        .unwrap();
        assert_eq!(whole.service_value_usd, UsdAmount::from_dollars(1_000_000));
    }

    #[test]
    fn missing_confirmations_are_named() {
        let partial = Confirmations {
            bilaterally_confirmed: false,
            ..Confirmations::all()
        };
        assert!(!partial.is_complete());
        assert_eq!(partial.missing(), vec!["bilaterally_confirmed"]);
        assert!(Confirmations::all().is_complete());
        assert!(Confirmations::all().missing().is_empty());
        assert_eq!(Confirmations::none().missing().len(), 3);
        assert_eq!(Confirmations::default(), Confirmations::none());
    }
}

use crate::event::{ClientId, Event};
use chrono::NaiveDateTime;

/// Filter for [`EventStore::scan`](crate::store::EventStore::scan).
///
/// Every field left as `None` matches everything. Time bounds are half open:
/// `from <= timestamp < until`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanQuery {
    pub client_id: Option<ClientId>,
    pub status_codes: Option<Vec<u16>>,
    pub endpoint: Option<String>,
    pub ip_address: Option<String>,
    pub from: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
}

impl ScanQuery {
    /// Every event of every client.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_client(client_id: &ClientId) -> Self {
        Self {
            client_id: Some(client_id.clone()),
            ..Self::default()
        }
    }

    pub fn with_status_codes(mut self, codes: &[u16]) -> Self {
        self.status_codes = Some(codes.to_vec());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    pub fn between(mut self, from: NaiveDateTime, until: NaiveDateTime) -> Self {
        self.from = Some(from);
        self.until = Some(until);
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.client_id
            .as_ref()
            .map_or(true, |c| event.client_id() == c)
            && self
                .status_codes
                .as_ref()
                .map_or(true, |codes| codes.contains(&event.status_code()))
            && self
                .endpoint
                .as_ref()
                .map_or(true, |endpoint| event.endpoint() == endpoint)
            && self
                .ip_address
                .as_ref()
                .map_or(true, |ip| event.ip_address() == ip)
            && self.from.map_or(true, |from| event.timestamp() >= from)
            && self.until.map_or(true, |until| event.timestamp() < until)
    }
}

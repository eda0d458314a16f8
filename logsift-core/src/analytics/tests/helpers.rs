use crate::event::{ClientId, Event};
use chrono::{NaiveDate, NaiveDateTime};

pub fn hour(h: u32) -> NaiveDateTime {
    at(h, 0)
}

pub fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 19)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

pub struct EventBuilder {
    client: &'static str,
    ip: &'static str,
    endpoint: &'static str,
    status: u16,
    ts: NaiveDateTime,
}

pub fn ev() -> EventBuilder {
    EventBuilder {
        client: "c1",
        ip: "10.0.0.1",
        endpoint: "/",
        status: 200,
        ts: at(12, 0),
    }
}

impl EventBuilder {
    pub fn client(mut self, client: &'static str) -> Self {
        self.client = client;
        self
    }

    pub fn ip(mut self, ip: &'static str) -> Self {
        self.ip = ip;
        self
    }

    pub fn endpoint(mut self, endpoint: &'static str) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn at(mut self, ts: NaiveDateTime) -> Self {
        self.ts = ts;
        self
    }

    pub fn build(self) -> Event {
        Event::new(
            ClientId::from(self.client),
            self.ip,
            "GET",
            self.endpoint,
            self.status,
            100,
            self.ts,
        )
    }

    pub fn times(self, n: usize) -> Vec<Event> {
        let event = self.build();
        vec![event; n]
    }
}

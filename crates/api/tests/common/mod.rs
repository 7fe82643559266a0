#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use fake::{faker::lorem::en::Sentence, Fake};
use hangout_api::{app, ApiState};
use hangout_core::models::calendar::{CreateCalendarRequest, TimeSlotPayload};

pub fn test_server() -> TestServer {
    let state = Arc::new(ApiState::default());
    TestServer::new(app(state)).unwrap()
}

pub fn calendar_request() -> CreateCalendarRequest {
    CreateCalendarRequest {
        title: Sentence(2..5).fake(),
        description: None,
        location: None,
        password: None,
        accept_responses_until: None,
    }
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn payload(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeSlotPayload {
    TimeSlotPayload {
        start_date: start,
        end_date: end,
    }
}

//! Tests for the HTTP handlers: status codes, response envelopes and role checks.

mod auth;
mod booth;
mod hierarchy;
mod polygon;
mod router;
mod state;
mod status;

use constituency_test_utils::prelude::*;

use crate::util::{app_state, bearer_user, body_json, extract_user, respond};

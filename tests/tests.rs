//! Integration tests calling the HTTP handlers directly against an in-memory database.

mod controller;
mod util;

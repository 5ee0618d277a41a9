//! Tests for the login service

mod mocks;

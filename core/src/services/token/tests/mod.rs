//! Tests for the token authority

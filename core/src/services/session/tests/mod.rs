//! Tests for the session token service

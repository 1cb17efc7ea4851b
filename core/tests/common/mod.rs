// SPDX-FileCopyrightText: 2025-2026 Takwim Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Day record factories (fixtures)
//! - An in-memory conversion source that counts its calls

mod fake_source;
mod fixtures;

#[allow(unused_imports)]
pub use fake_source::FakeSource;
#[allow(unused_imports)]
pub use fixtures::{RAMADAN_1447_START, SHAWWAL_1447_START, day_record, month_records};

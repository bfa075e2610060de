//! Core types and CSV normalization for school district finance data.
//!
//! Each row of the upstream dataset reports one district (an LEA, or
//! "local education agency") for one fiscal year, with an open set of
//! numeric attribute columns (revenue, expenditure, enrollment, ...).
//! This crate parses those rows into typed [`record::NormalizedRecord`]s,
//! coercing invalid or non-positive values to an explicit
//! [`record::AttributeValue::Missing`] marker.

pub mod normalize;
pub mod record;
pub mod terminology;

/// Embedded sample of the district finance CSV, used by tests and demos.
pub static SAMPLE_DISTRICTS_CSV: &str = include_str!("../../fixtures/districts.csv");

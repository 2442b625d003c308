//! Property-based tests

pub mod stomp_proptest;

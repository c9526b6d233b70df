//! Test suite for Lager Blogs
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;

//! Test suite for authgate
//!
//! This module organizes all tests

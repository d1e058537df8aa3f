//! # Common Test Infrastructure

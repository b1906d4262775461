//! Graph construction and representation
//!
//! This module builds the sentence similarity graph and stores it as a
//! flat, fixed-size weight matrix.

pub mod builder;
pub mod matrix;

//! Estimates page ranks from link information.
//!
//! Two independent strategies are provided: a Monte-Carlo random-walk
//! simulation ([`rank::stochastic`]) and an iterative probability-mass
//! propagation ([`rank::distribution`]). Both consume an immutable
//! [`graph::LinkGraph`] and produce a node-to-score mapping that
//! [`rank::aggregate`] turns into an ordered top-N report.

pub mod error;
pub mod graph;
pub mod loader;
pub mod rank;
pub mod reporting;

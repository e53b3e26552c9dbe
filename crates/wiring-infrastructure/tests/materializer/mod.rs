//! Argument materialization tests
//!
//! End-to-end: bind, resolve, then materialize against real collaborators.

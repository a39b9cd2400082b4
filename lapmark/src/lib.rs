//! The lapmark workload library
//!
//! The workloads are deliberately small: a lazy counting sequence and an
//! in-memory sort of a randomly generated integer collection. The
//! `lapmark-runner` harness runs them repeatedly and summarizes the
//! measured wall-clock times.

pub mod collection;
pub mod counting;

//! dtcq: DTC lookup toolkit
//!
//! Loads static diagnostic trouble code reference datasets, joins the
//! code table against its dimension tables, and answers filter and
//! lookup queries from the command line.

pub mod cli;
pub mod core;
pub mod model;

//! RegioJet station delay monitor.
//!
//! Queries the RegioJet public API for real-time arrival/departure
//! delays at configured stations and reports them as text, JSON or HTML.

pub mod cache;
pub mod config;
pub mod domain;
pub mod regiojet;
pub mod report;
pub mod web;

//! Command line support for the beat map generator

pub mod output;

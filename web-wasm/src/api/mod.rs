//! リモートAPI連携

pub mod sites;

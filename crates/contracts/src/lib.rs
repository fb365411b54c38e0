//! Types and behavior shared by the platform directory frontend and its host.

pub mod domain;
pub mod shared;

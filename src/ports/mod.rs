//! Port traits defining external boundaries.
//!
//! The only boundary is the randomness source. Implementations live in
//! `src/adapters/`.

pub mod id_gen;

pub use id_gen::IdGenerator;

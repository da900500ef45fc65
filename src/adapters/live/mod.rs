//! Live adapters backed by the operating system.

pub mod id_gen;

pub use id_gen::LiveIdGenerator;

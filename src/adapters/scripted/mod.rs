//! Scripted adapters that yield a fixed sequence of values.

pub mod id_gen;

pub use id_gen::ScriptedIdGenerator;

//! Cart domain, storage, and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod operation;

#[cfg(test)]
mod test;

//! Extension traits

mod depot;
mod ids;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use ids::PathIdExt as _;
pub(crate) use result::ResultExt as _;

//! Feature logic. Each session mirrors one screen: it is populated from the
//! record store on entry and flushed back after every mutation.

pub mod activity;
pub mod goal;
pub mod plan;
pub mod rewards;

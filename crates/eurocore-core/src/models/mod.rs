//! Wire DTOs mirroring eurocore's JSON payloads.

pub mod dispatches;
pub mod rmbposts;
pub mod telegrams;
pub mod templates;

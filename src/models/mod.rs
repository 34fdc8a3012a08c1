//! Data models for the Auto Scaling API.
//!
//! - [`primitives`] - Identifier newtypes such as `GroupId` and `Region`
//! - [`enums`] - Group status and action discriminators
//! - [`group`] - Scaling group records returned by the API
//! - [`options`] - Request options and the builder traits that serialize them

pub mod primitives;
pub mod enums;
pub mod group;
pub mod options;

pub use primitives::*;
pub use enums::*;
pub use group::*;
pub use options::*;

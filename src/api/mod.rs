//! API service modules for Auto Scaling endpoints.

mod groups;
mod results;

pub use groups::{GroupsService, ListOpts, ListOptsBuilder};
pub use results::{
    ActionResult, CreateResult, DeleteResult, GetResult, GroupPage, ResultBase, UpdateResult,
};

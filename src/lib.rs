//! # autoscaling-rs
//!
//! An async Rust client for the Auto Scaling scaling-group REST API.
//!
//! The crate covers the scaling group resource: create, get, list, update,
//! delete, and enable/disable through the group action endpoint.
//!
//! ## Design
//!
//! - **Options** are plain structs ([`models::CreateOpts`],
//!   [`models::UpdateOpts`], [`api::ListOpts`]) serialized by narrow builder
//!   traits that check required fields and drop unset optional ones.
//! - **Dispatch** goes through the [`Transport`] trait. The default
//!   [`ReqwestTransport`] sends the `X-Auth-Token` header; any other
//!   implementation can be injected with [`ServiceClient::with_transport`].
//! - **Results** capture either the decoded body or the error. Nothing is
//!   retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use autoscaling_rs::models::CreateOpts;
//! use autoscaling_rs::{GroupId, ServiceClient};
//!
//! #[tokio::main]
//! async fn main() -> autoscaling_rs::Result<()> {
//!     let client = ServiceClient::builder()
//!         .region("eu-west-0")
//!         .project_id("0549b4a43100d4f32f51c01c2fe4acdb")
//!         .token(std::env::var("OS_AUTH_TOKEN").unwrap_or_default())
//!         .build()?;
//!
//!     let opts = CreateOpts::new("as-group-web", "vpc-id")
//!         .network("subnet-id")
//!         .security_group("security-group-id")
//!         .instances(0, 1, 5);
//!
//!     let id = GroupId::new(client.groups().create(&opts).await.extract()?);
//!     let group = client.groups().get(&id).await.extract()?;
//!     println!("{} is {}", group.name, group.status);
//!
//!     client.groups().delete(&id).await.extract_err()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::AuthToken;
pub use client::{ClientConfig, ReqwestTransport, ServiceClient, Transport};
pub use error::{Error, Result};
pub use models::{GroupId, ProjectId, Region};

/// Prelude module for convenient imports.
///
/// ```rust
/// use autoscaling_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ActionResult, CreateResult, DeleteResult, GetResult, GroupPage, GroupsService,
        ListOpts, ListOptsBuilder, UpdateResult,
    };
    pub use crate::auth::AuthToken;
    pub use crate::client::{ClientConfig, Page, Pager, ServiceClient, Transport};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        ActionOptsBuilder, CreateOpts, CreateOptsBuilder, Group, GroupAction, GroupId,
        GroupStatus, NetworkOpts, ProjectId, Region, SecurityGroupOpts, UpdateOpts,
        UpdateOptsBuilder,
    };
}

//! HTTP client, dispatcher and pagination for the Auto Scaling API.
//!
//! [`ServiceClient`] is the entry point. It owns a [`Transport`], which
//! performs the actual HTTP exchange, and resolves project-scoped URLs.
//!
//! # Example
//!
//! ```no_run
//! use autoscaling_rs::{ClientConfig, ServiceClient};
//! use std::time::Duration;
//!
//! # fn example() -> autoscaling_rs::Result<()> {
//! let client = ServiceClient::builder()
//!     .endpoint("https://as.eu-west-0.myhuaweicloud.com/autoscaling-api/v1/")
//!     .project_id("0549b4a43100d4f32f51c01c2fe4acdb")
//!     .token("token")
//!     .config(ClientConfig::default().with_timeout(Duration::from_secs(10)))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use http::{ServiceClient, ServiceClientBuilder};
pub use paginated::{Page, PageStream, Pager};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, AUTH_TOKEN_HEADER};
pub(crate) use http::ClientInner;

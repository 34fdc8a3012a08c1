//! Authentication for the Auto Scaling API.
//!
//! Requests are authenticated with a token issued by the identity service,
//! carried in the `X-Auth-Token` header. Obtaining the token is outside the
//! scope of this crate.
//!
//! ```
//! use autoscaling_rs::AuthToken;
//!
//! let token = AuthToken::new(std::env::var("OS_AUTH_TOKEN").unwrap_or_default());
//! ```

mod token;

pub use token::AuthToken;

//! Users Module
//!
//! Protected endpoints for the caller's own profile:
//!
//! - `GET /users/me` - return the resolved identity's profile
//! - `PATCH /users` - edit email / first name / last name
//!
//! Both consume the identity placed in the request by the auth middleware;
//! there is no way to address another user's profile.

pub mod handlers;

pub use handlers::{edit_user, get_me, EditUserRequest, UserResponse};

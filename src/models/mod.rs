pub mod auth;
pub mod ping;
mod lenient;

pub use auth::{LoginForm, LoginResponse, FORM_CONTENT_TYPE};
pub use ping::PingPayload;

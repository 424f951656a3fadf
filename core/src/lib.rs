pub mod config;
pub mod error;
pub mod session;
pub mod util;

pub use config::AwsReconConfig;
pub use error::SessionError;
pub use session::{ProfileSession, open_profile_session};

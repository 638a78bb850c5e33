//! Authentication system
//!
//! Login attempts, the pre-submission gate and the session validator.
//! Nothing here depends on the presentation shell.

pub mod attempt;
pub mod gate;
pub mod results;
pub mod validator;

pub use attempt::LoginAttempt;
pub use gate::{MIN_CREDENTIAL_LENGTH, is_submittable};
pub use results::{DenialReason, RoleMismatch, SessionOutcome};
pub use validator::validate;

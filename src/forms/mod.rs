//! Form validation for the authentication pages.
//!
//! The auth provider does the actual sign-in and sign-up; these types only
//! check what the user typed before it is forwarded.

pub mod signup;

pub use signup::{provider_error_message, LoginForm, FormError, SignupForm, ValidSignup};

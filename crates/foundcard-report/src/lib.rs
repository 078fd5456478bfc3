//! Foundcard report flow
//!
//! Headless implementation of the "report a found identification document"
//! form: a photo picker, a form controller and the submission workflow that
//! uploads the optional photo and stores the report.
//!
//! The host drives a [`ReportForm`] from its view layer and receives toasts
//! through a [`Notifier`] and route changes through a [`Navigator`].

pub mod error;
pub mod form;
pub mod identity;
pub mod messages;
pub mod navigation;
pub mod notify;
pub mod picker;
pub mod setup;
pub mod workflow;

// Test helpers (only available in test mode)
#[cfg(test)]
pub mod test_helpers;

pub use error::{SubmissionError, SubmitError};
pub use form::ReportForm;
pub use identity::{IdentityProvider, JwtSessionIdentity, SessionClaims};
pub use navigation::{Navigator, Route, WatchNavigator};
pub use notify::{ChannelNotifier, Notifier, Toast, ToastVariant, TracingNotifier};
pub use picker::{PhotoPicker, PickOutcome, PickerState};
pub use setup::{initialize, initialize_from_env, ReportServices};
pub use workflow::{SubmissionReceipt, SubmissionWorkflow};

pub mod error;
pub mod form;
pub mod options;
pub mod ui;

pub use credentials::{Credential, CredentialTable, Verdict};

/// Modal dialogs shown after a submission
pub mod dialog;
/// The login window
pub mod login;

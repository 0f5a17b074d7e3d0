// Errors that stop the application from running
// Failed logins aren't errors, they are reported through form::Outcome

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not open the login window: {0}")]
    Window(#[from] eframe::Error),
}

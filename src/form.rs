// Submit logic for the login form, independent of how it is drawn

use credentials::{CredentialTable, Verdict};
use log::{debug, info};

/// The result of a single submission of the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Either field was left empty
    MissingField,
    /// The user is unknown or the password didn't match
    InvalidCredentials,
    Success { username: String },
}

impl Outcome {
    /// Builds the dialog contents shown to the user for this outcome
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingField => Notice::error("Please enter both username and password"),
            Self::InvalidCredentials => Notice::error("Invalid username or password"),
            Self::Success { username } => Notice {
                level: Level::Info,
                title: "Success",
                message: format!("Welcome, {username}!"),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Severity of a [Notice], used to pick the dialog icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Title & message for a modal dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    fn error(message: &str) -> Self {
        Self {
            level: Level::Error,
            title: "Error",
            message: message.to_owned(),
        }
    }
}

/// Checks a username and password against a credential table
/// Both fields must be non-empty, and are compared exactly with no trimming
pub fn submit(table: &CredentialTable, username: &str, password: &str) -> Outcome {
    if username.is_empty() || password.is_empty() {
        return Outcome::MissingField;
    }

    match table.verify(username, password) {
        Verdict::Accepted => Outcome::Success {
            username: username.to_owned(),
        },
        Verdict::Rejected => Outcome::InvalidCredentials,
    }
}

/// Whether the form is accepting input, or waiting for a dialog to be closed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    AwaitingDismissal(Notice),
}

/// Field values & state of the login form
/// No history is kept between attempts, so there is no lockout or attempt counter
#[derive(Debug)]
pub struct LoginForm {
    table: CredentialTable,
    pub username: String,
    pub password: String,
    state: FormState,
}

impl LoginForm {
    pub fn new(table: CredentialTable) -> Self {
        Self {
            table,
            username: String::new(),
            password: String::new(),
            state: FormState::Idle,
        }
    }

    /// Creates a form with the username field already filled in
    pub fn with_username(table: CredentialTable, username: String) -> Self {
        Self {
            username,
            ..Self::new(table)
        }
    }

    pub fn table(&self) -> &CredentialTable {
        &self.table
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == FormState::Idle
    }

    /// The notice currently waiting to be dismissed, if any
    pub fn pending(&self) -> Option<&Notice> {
        match &self.state {
            FormState::AwaitingDismissal(n) => Some(n),
            FormState::Idle => None,
        }
    }

    /// Submits the current field values
    /// Returns None without checking anything if a previous dialog hasn't been dismissed yet
    pub fn submit(&mut self) -> Option<Outcome> {
        if !self.is_idle() {
            debug!("Ignoring submit while a dialog is open");
            return None;
        }

        // The password is never logged
        let outcome = submit(&self.table, &self.username, &self.password);
        match &outcome {
            Outcome::Success { username } => info!("Login succeeded for {username}"),
            Outcome::InvalidCredentials => info!("Login failed for {}", self.username),
            Outcome::MissingField => debug!("Login attempted with an empty field"),
        }

        self.state = FormState::AwaitingDismissal(outcome.notice());
        Some(outcome)
    }

    /// Closes the pending dialog, returning the form to idle
    /// Field values are left as they were
    pub fn dismiss(&mut self) {
        self.state = FormState::Idle;
    }
}

impl std::default::Default for LoginForm {
    fn default() -> Self {
        Self::new(CredentialTable::mock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(username: &str, password: &str) -> Outcome {
        submit(&CredentialTable::mock(), username, password)
    }

    #[test]
    fn empty_username() {
        assert_eq!(check("", "admin123"), Outcome::MissingField);
        assert_eq!(check("", "anything"), Outcome::MissingField);
    }

    #[test]
    fn empty_password() {
        assert_eq!(check("admin", ""), Outcome::MissingField);
        assert_eq!(check("nobody", ""), Outcome::MissingField);
    }

    #[test]
    fn both_empty() {
        assert_eq!(check("", ""), Outcome::MissingField);
        assert_eq!(
            Outcome::MissingField.notice().message,
            "Please enter both username and password"
        );
    }

    #[test]
    fn mock_users_succeed() {
        for (u, p) in [
            ("admin", "admin123"),
            ("operator", "operator123"),
            ("viewer", "viewer123"),
        ] {
            assert_eq!(
                check(u, p),
                Outcome::Success {
                    username: String::from(u)
                }
            );
        }
    }

    #[test]
    fn invalid_credentials() {
        assert_eq!(check("admin", "wrong"), Outcome::InvalidCredentials);
        assert_eq!(check("admin", "ADMIN123"), Outcome::InvalidCredentials);
        assert_eq!(check("root", "admin123"), Outcome::InvalidCredentials);
        assert_eq!(check("viewer", "operator123"), Outcome::InvalidCredentials);
    }

    #[test]
    fn unknown_user_matches_wrong_password() {
        // Both failures must look identical to the user
        assert_eq!(
            check("ghost", "x").notice(),
            check("admin", "x").notice()
        );
    }

    #[test]
    fn repeated_submissions() {
        for _ in 0..10 {
            assert_eq!(check("admin", "wrong"), Outcome::InvalidCredentials);
        }
        assert!(check("admin", "admin123").is_success());
    }

    #[test]
    fn success_notice() {
        let notice = check("admin", "admin123").notice();
        assert_eq!(notice.level, Level::Info);
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.message, "Welcome, admin!");

        assert_eq!(check("viewer", "viewer123").notice().message, "Welcome, viewer!");
    }

    #[test]
    fn error_notice() {
        let notice = Outcome::InvalidCredentials.notice();
        assert_eq!(notice.level, Level::Error);
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "Invalid username or password");
    }

    #[test]
    fn scenario() {
        let mut form = LoginForm::default();

        form.username = String::from("admin");
        form.password = String::from("admin123");
        assert_eq!(
            form.submit(),
            Some(Outcome::Success {
                username: String::from("admin")
            })
        );
        assert_eq!(form.pending().unwrap().message, "Welcome, admin!");
        form.dismiss();

        form.password = String::from("wrong");
        assert_eq!(form.submit(), Some(Outcome::InvalidCredentials));
        form.dismiss();

        form.username.clear();
        form.password.clear();
        assert_eq!(form.submit(), Some(Outcome::MissingField));
        form.dismiss();

        form.username = String::from("viewer");
        form.password = String::from("viewer123");
        assert_eq!(form.submit().unwrap().notice().message, "Welcome, viewer!");
    }

    #[test]
    fn awaiting_dismissal() {
        let mut form = LoginForm::default();
        assert!(form.is_idle());

        assert_eq!(form.submit(), Some(Outcome::MissingField));
        assert!(!form.is_idle());
        assert_eq!(
            form.state(),
            &FormState::AwaitingDismissal(Outcome::MissingField.notice())
        );

        // Ignored until the dialog is closed
        form.username = String::from("admin");
        form.password = String::from("admin123");
        assert_eq!(form.submit(), None);
        assert_eq!(form.pending(), Some(&Outcome::MissingField.notice()));

        form.dismiss();
        assert_eq!(form.state(), &FormState::Idle);
        assert!(form.submit().unwrap().is_success());
    }

    #[test]
    fn fields_kept_after_dismiss() {
        let mut form = LoginForm::with_username(CredentialTable::mock(), String::from("operator"));
        form.password = String::from("nope");
        let _ = form.submit();
        form.dismiss();
        assert_eq!(form.username, "operator");
        assert_eq!(form.password, "nope");
    }
}

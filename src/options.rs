// Startup configuration, read from the command line or environment

use clap::{Parser, ValueEnum};

/// How a notice is shown to the user after submitting
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DialogStyle {
    /// A native message box from the operating system
    #[default]
    Native,
    /// A window drawn inside the login form
    Embedded,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Fill in the username field when the window opens.
    #[arg(long, env = "SENSOR_LOGIN_USERNAME")]
    pub username: Option<String>,

    /// How the result of a login attempt is shown.
    #[arg(long, value_enum, env = "SENSOR_LOGIN_DIALOGS", default_value_t = DialogStyle::Native)]
    pub dialogs: DialogStyle,

    /// Don't list the mock users underneath the form.
    #[arg(long, env = "SENSOR_LOGIN_HIDE_HINT")]
    pub hide_hint: bool,
}

/// Options used by the login window
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub username: Option<String>,
    pub dialogs: DialogStyle,
    pub show_hint: bool,
}

impl std::default::Default for AppOptions {
    fn default() -> Self {
        Self {
            username: None,
            dialogs: DialogStyle::default(),
            show_hint: true,
        }
    }
}

impl From<Args> for AppOptions {
    fn from(args: Args) -> Self {
        Self {
            // An empty value is the same as not pre-filling at all
            username: args.username.filter(|u| !u.is_empty()),
            dialogs: args.dialogs,
            show_hint: !args.hide_hint,
        }
    }
}

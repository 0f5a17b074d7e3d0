// Fixed table of mock users, checked in place of a real identity provider
// Passwords are plaintext and compiled into the binary, so this is only suitable for demonstrations

use subtle::ConstantTimeEq;

/// A single username/password pair stored in a [CredentialTable]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credential {
    pub username: &'static str,
    pub password: &'static str,
}

impl Credential {
    /// Constructor for a [Credential]
    pub const fn new(username: &'static str, password: &'static str) -> Self {
        Self { username, password }
    }
}

/// The three users accepted by the login form
const MOCK_USERS: &[Credential] = &[
    Credential::new("admin", "admin123"),
    Credential::new("operator", "operator123"),
    Credential::new("viewer", "viewer123"),
];

/// Whether a username/password pair was accepted by a table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    // Used for both an unknown user and a wrong password, so the caller can't tell which failed
    Rejected,
}

/// An immutable lookup table from username to password
/// Entries live for the whole process, so the table is [Copy] and needs no synchronisation
#[derive(Clone, Copy, Debug)]
pub struct CredentialTable {
    entries: &'static [Credential],
}

impl CredentialTable {
    /// Creates a table from a list of entries
    /// Usernames are expected to be unique, with the first match winning otherwise
    pub const fn new(entries: &'static [Credential]) -> Self {
        Self { entries }
    }

    /// The built in table of mock users
    pub const fn mock() -> Self {
        Self::new(MOCK_USERS)
    }

    /// Iterates through entries in the order they were declared
    pub fn iter(&self) -> std::slice::Iter<'static, Credential> {
        self.entries.iter()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry for a username
    /// Matching is exact, so no trimming or case folding is performed
    pub fn get(&self, username: &str) -> Option<&'static Credential> {
        self.entries.iter().find(|c| c.username == username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    /// Checks a password against the one stored for a username
    pub fn verify(&self, username: &str, password: &str) -> Verdict {
        match self.get(username) {
            // Byte comparison runs in constant time for equal length inputs
            Some(c) if bool::from(c.password.as_bytes().ct_eq(password.as_bytes())) => {
                Verdict::Accepted
            }
            _ => Verdict::Rejected,
        }
    }
}

impl std::default::Default for CredentialTable {
    fn default() -> Self {
        Self::mock()
    }
}

impl IntoIterator for CredentialTable {
    type Item = &'static Credential;
    type IntoIter = std::slice::Iter<'static, Credential>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Console input parsing.

/// One line typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    /// Go to a path (`/fees`, `/admin/login`, ...).
    Navigate(String),
    /// Close the visible toast.
    Dismiss,
    /// Reset the unseen badge.
    Read,
    /// Log out and return to the login screen.
    Logout,
    /// Show the command list.
    Help,
    /// Leave the console.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl ShellInput {
    /// Parse a line of input.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.starts_with('/') {
            return Self::Navigate(line.to_string());
        }
        match line.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "dismiss" | "d" => Self::Dismiss,
            "read" | "r" => Self::Read,
            "logout" => Self::Logout,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            ShellInput::parse("  /exchange-rates \n"),
            ShellInput::Navigate("/exchange-rates".to_string())
        );
        assert_eq!(ShellInput::parse("DISMISS"), ShellInput::Dismiss);
        assert_eq!(ShellInput::parse("read"), ShellInput::Read);
        assert_eq!(ShellInput::parse("exit"), ShellInput::Quit);
        assert_eq!(ShellInput::parse("   "), ShellInput::Empty);
        assert_eq!(
            ShellInput::parse("fees"),
            ShellInput::Unknown("fees".to_string())
        );
    }
}

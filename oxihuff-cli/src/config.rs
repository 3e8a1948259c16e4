//! Session configuration.

/// Controls what the session prints around its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the numbered menu before each choice.
    pub show_menu: bool,
    /// Print the `Enter your ...:` prompts.
    pub show_prompts: bool,
}

impl SessionConfig {
    /// Full interactive output.
    pub const INTERACTIVE: Self = Self {
        show_menu: true,
        show_prompts: true,
    };

    /// Prompts only, no menu listing.
    pub const QUIET: Self = Self {
        show_menu: false,
        show_prompts: true,
    };

    /// Results only, for `--action` runs.
    pub const SCRIPTED: Self = Self {
        show_menu: false,
        show_prompts: false,
    };

    /// Pick a preset from the command-line flags.
    pub fn from_flags(quiet: bool, scripted: bool) -> Self {
        if scripted {
            Self::SCRIPTED
        } else if quiet {
            Self::QUIET
        } else {
            Self::INTERACTIVE
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::INTERACTIVE
    }
}

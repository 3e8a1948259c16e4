//! Menu actions of the interactive session.

use std::fmt;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Print the compressed bit string.
    Compress,
    /// Print the Huffman tree.
    ShowTree,
    /// Print the uncompressed size in bits.
    OriginalSize,
    /// Print the fixed-width bit table.
    OriginalTable,
    /// Print the compressed size in bits.
    CompressedSize,
    /// Print the Huffman code table.
    CodeTable,
    /// Leave the session.
    Exit,
}

impl MenuAction {
    /// Actions in the order they are listed.
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Compress,
        MenuAction::ShowTree,
        MenuAction::OriginalSize,
        MenuAction::OriginalTable,
        MenuAction::CompressedSize,
        MenuAction::CodeTable,
        MenuAction::Exit,
    ];

    /// Map a menu number to its action.
    pub fn from_choice(choice: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|a| i64::from(a.number()) == choice)
    }

    /// Parse a line typed by the user. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Option<Self> {
        line.trim().parse::<i64>().ok().and_then(Self::from_choice)
    }

    /// Number shown in the menu.
    pub fn number(self) -> u8 {
        match self {
            MenuAction::Compress => 1,
            MenuAction::ShowTree => 2,
            MenuAction::OriginalSize => 3,
            MenuAction::OriginalTable => 4,
            MenuAction::CompressedSize => 5,
            MenuAction::CodeTable => 6,
            MenuAction::Exit => 0,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Compress => "Reduce (Compress)",
            MenuAction::ShowTree => "See the Huffman Tree",
            MenuAction::OriginalSize => "See the Original Bit Size",
            MenuAction::OriginalTable => "See the Original Bit Table",
            MenuAction::CompressedSize => "See the New Bit Size",
            MenuAction::CodeTable => "See the New Bit Table",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

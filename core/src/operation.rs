//! Operation tags delivered to triggers.

use std::fmt;

/// The net effect a trigger is notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A row whose primary key did not exist before the commit.
    Insert,
    /// A row whose primary key existed and whose fields changed.
    Update,
    /// A row whose primary key no longer exists after the commit.
    Delete,
}

impl Operation {
    /// Stable integer code for the operation.
    pub fn code(self) -> u8 {
        match self {
            Operation::Insert => 0,
            Operation::Update => 1,
            Operation::Delete => 2,
        }
    }

    /// Get the operation name.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

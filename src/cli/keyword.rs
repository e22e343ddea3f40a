// Action keywords recognised at the start of an input line

/// The closed set of actions a line can start with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    List,
    Mark,
    Unmark,
    Delete,
    Todo,
    Deadline,
    Event,
    Find,
    Bye,
}

impl CommandName {
    pub const ALL: [CommandName; 9] = [
        CommandName::List,
        CommandName::Mark,
        CommandName::Unmark,
        CommandName::Delete,
        CommandName::Todo,
        CommandName::Deadline,
        CommandName::Event,
        CommandName::Find,
        CommandName::Bye,
    ];

    /// The word the user types for this action
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandName::List => "list",
            CommandName::Mark => "mark",
            CommandName::Unmark => "unmark",
            CommandName::Delete => "delete",
            CommandName::Todo => "todo",
            CommandName::Deadline => "deadline",
            CommandName::Event => "event",
            CommandName::Find => "find",
            CommandName::Bye => "bye",
        }
    }

    /// Exact, case-sensitive lookup; no abbreviations
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|name| name.keyword() == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_round_trips() {
        for name in CommandName::ALL {
            assert_eq!(CommandName::from_keyword(name.keyword()), Some(name));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(CommandName::from_keyword("bye"), Some(CommandName::Bye));
        assert_eq!(CommandName::from_keyword("exit"), None);
        assert_eq!(CommandName::from_keyword("List"), None);
        assert_eq!(CommandName::from_keyword("lis"), None);
        assert_eq!(CommandName::from_keyword(""), None);
    }
}

//! Parsing of reserved command words typed at the prompt.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line.
    Empty,
    Quit,
    /// Export the transcript, optionally to the given file.
    Save(Option<String>),
    Clear,
    /// Anything else is sent to the model.
    Chat(String),
}

impl Command {
    /// Classify a line. Command words are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let word = word.to_lowercase();

        match (word.as_str(), rest.is_empty()) {
            ("quit" | "exit" | "q" | "bye", true) => Command::Quit,
            ("clear", true) => Command::Clear,
            ("save", true) => Command::Save(None),
            ("save", false) if !rest.contains(char::is_whitespace) => {
                Command::Save(Some(rest.to_string()))
            }
            _ => Command::Chat(line.to_string()),
        }
    }
}

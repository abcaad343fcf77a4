//! Everything the loop prints.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use parley_ai::AiError;
use parley_common::ParleyError;

pub(crate) const SAVE_ON_EXIT_PROMPT: &str = "\n💾 Save this conversation before leaving? (y/n): ";

pub(crate) fn banner(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "    🏰  Welcome to {}!  🏰", "Parley".bold())?;
    writeln!(out)?;
    writeln!(out, "    You're chatting with {}.", name.green().bold())?;
    writeln!(out, "    Ask anything, and you'll get an honest opinion.")?;
    writeln!(out)?;
    writeln!(out, "    Commands:")?;
    writeln!(out, "    • Type 'save [file]' to save this conversation")?;
    writeln!(out, "    • Type 'clear' to clear chat history")?;
    writeln!(out, "    • Type 'quit', 'exit', 'q' or 'bye' to leave")?;
    writeln!(out)?;
    writeln!(out, "🗣️  {name} is ready to chat!")?;
    writeln!(out)
}

pub(crate) fn reply(out: &mut impl Write, name: &str, text: &str) -> io::Result<()> {
    writeln!(out, "\n🟢 {}: {text}\n", name.green().bold())
}

pub(crate) fn failure(out: &mut impl Write, error: &AiError) -> io::Result<()> {
    writeln!(out, "\n{}\n", error.to_string().red())
}

pub(crate) fn cleared(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🧹 Conversation history cleared!")
}

pub(crate) fn saved(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "💾 Conversation saved to {}", path.display())
}

pub(crate) fn save_failed(out: &mut impl Write, error: &ParleyError) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("❌ Could not save conversation: {error}").red()
    )
}

pub(crate) fn farewell(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(
        out,
        "\n👋 {name}: Farewell, traveler! Don't forget to visit the swamp again!"
    )
}

pub(crate) fn interrupted(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "\n\n👋 {name}: Oi! No need to be rude! See ya later!")
}

pub(crate) fn end_of_input(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(
        out,
        "\n\n👋 {name}: Looks like you left without sayin' goodbye!"
    )
}

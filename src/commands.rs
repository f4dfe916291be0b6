//! Directly invocable ghost text commands
//!
//! The command surface a host integration can drive without going through
//! the controller's event methods. Each command is a plain struct
//! implementing the `Executable` capability trait over a command context
//! (suggestion state + host document).

use crate::document::HostDocument;
use crate::state::SuggestionState;

/// Mutable view a command executes against
pub struct CommandContext<'a, D: HostDocument> {
    pub state: &'a mut SuggestionState,
    pub document: &'a mut D,
}

/// Capability interface for invocable commands
pub trait Executable<D: HostDocument> {
    type Input;
    type Output;

    fn execute(&self, cx: CommandContext<'_, D>, input: Self::Input) -> Self::Output;
}

/// Store text as the shown (uncommitted) suggestion
pub struct SetValueCommand;

impl<D: HostDocument> Executable<D> for SetValueCommand {
    type Input = String;
    type Output = ();

    fn execute(&self, cx: CommandContext<'_, D>, value: String) {
        cx.state.set_value(value);
    }
}

/// Enter or leave the loading display
///
/// Entering loading clears any shown suggestion; leaving it only drops the
/// flag so streamed text already shown stays visible.
pub struct SetLoadingCommand;

impl<D: HostDocument> Executable<D> for SetLoadingCommand {
    type Input = bool;
    type Output = ();

    fn execute(&self, cx: CommandContext<'_, D>, loading: bool) {
        cx.state.set_loading(loading);
    }
}

/// Commit text into the document at the cursor
///
/// The text is inserted as regular document content carrying the formatting
/// marks active at the cursor; suggestion state is not touched.
pub struct InsertCommand;

impl<D: HostDocument> Executable<D> for InsertCommand {
    type Input = String;
    type Output = ();

    fn execute(&self, cx: CommandContext<'_, D>, value: String) {
        let marks = cx.document.cursor_marks();
        cx.document.insert_at_cursor(&value, marks);
    }
}

/// Clear the shown suggestion without touching the loading flag
pub struct RemoveCommand;

impl<D: HostDocument> Executable<D> for RemoveCommand {
    type Input = ();
    type Output = ();

    fn execute(&self, cx: CommandContext<'_, D>, _input: ()) {
        cx.state.clear_value();
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;

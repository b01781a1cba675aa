use super::{join_args, usage, CmdMessage, CmdResult};
use crate::error::Result;
use crate::note::Note;
use crate::note_book::{NoteBook, NoteSearch};
use crate::table;

pub const ADD_USAGE: &str = "No note text provided. Usage: add-note <note text>";
pub const CHANGE_NO_ID: &str = "No note ID provided. Usage: change-note <id> <new_text>";
pub const CHANGE_NO_TEXT: &str = "No text provided. Usage: change-note <id> <new_text>";
pub const DELETE_NO_ID: &str = "No note ID provided. Usage: delete-note <id>";
pub const DELETE_MANY_IDS: &str = "More than one note ID provided. Usage: delete-note <id>";
pub const ADD_TAG_NO_ARGS: &str =
    "No note ID and tag provided. Usage: add-note-tag <id> <tag1> [<tag2> ... <tagN>]";
pub const ADD_TAG_NO_TAG: &str = "No tag provided. Usage: add-note-tag <id> <tag1> [<tag2> ... <tagN>]";
pub const DELETE_TAG_NO_ARGS: &str =
    "No note ID and tag provided. Usage: delete-note-tag <id> <tag1> [<tag2> ... <tagN>]";
pub const DELETE_TAG_NO_TAG: &str =
    "No tag provided. Usage: delete-note-tag <id> <tag1> [<tag2> ... <tagN>]";

const NO_NOTES_FOUND: &str = "No notes found.";

pub fn add(book: &mut NoteBook, args: &[String]) -> Result<CmdResult> {
    if args.is_empty() {
        return Err(usage(ADD_USAGE));
    }
    let note = Note::new(join_args(args));
    let id = note.id.clone();
    book.add_note(note);
    Ok(CmdResult::message(CmdMessage::success("Note added."))
        .with_message(CmdMessage::info(format!("Note id: {}", id))))
}

pub fn change(book: &mut NoteBook, args: &[String]) -> Result<CmdResult> {
    let (id, text) = match args {
        [] => return Err(usage(CHANGE_NO_ID)),
        [_] => return Err(usage(CHANGE_NO_TEXT)),
        [id, text @ ..] => (id, join_args(text)),
    };
    book.change_note(id, text)?;
    Ok(CmdResult::message(CmdMessage::success("Note changed.")))
}

pub fn delete(book: &mut NoteBook, args: &[String]) -> Result<CmdResult> {
    let id = match args {
        [] => return Err(usage(DELETE_NO_ID)),
        [id] => id,
        _ => return Err(usage(DELETE_MANY_IDS)),
    };
    book.delete_note(id)?;
    Ok(CmdResult::message(CmdMessage::success("Note deleted.")))
}

pub fn all(book: &NoteBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::message(CmdMessage::info("No notes."));
    }
    CmdResult::default().with_output(table::notes_table("All Notes", book.notes()).render())
}

pub fn search(book: &NoteBook, args: &[String]) -> Result<CmdResult> {
    let query = join_args(args);
    Ok(match book.search_notes(&query)? {
        NoteSearch::NoNotes | NoteSearch::NoneFound => {
            CmdResult::message(CmdMessage::info(NO_NOTES_FOUND))
        }
        NoteSearch::Found { title, notes } => {
            CmdResult::default().with_output(table::notes_table(&title, notes).render())
        }
    })
}

pub fn add_tag(book: &mut NoteBook, args: &[String]) -> Result<CmdResult> {
    let (id, tags) = split_id_and_tags(args, ADD_TAG_NO_ARGS, ADD_TAG_NO_TAG)?;
    book.add_tag(id, tags)?;
    Ok(CmdResult::message(CmdMessage::success("Tag added.")))
}

pub fn delete_tag(book: &mut NoteBook, args: &[String]) -> Result<CmdResult> {
    let (id, tags) = split_id_and_tags(args, DELETE_TAG_NO_ARGS, DELETE_TAG_NO_TAG)?;
    book.delete_tag(id, tags)?;
    Ok(CmdResult::message(CmdMessage::success("Tag deleted.")))
}

fn split_id_and_tags<'a>(
    args: &'a [String],
    no_args: &str,
    no_tag: &str,
) -> Result<(&'a str, &'a [String])> {
    match args {
        [] => Err(usage(no_args)),
        [_] => Err(usage(no_tag)),
        [id, tags @ ..] => Ok((id.as_str(), tags)),
    }
}

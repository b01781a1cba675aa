use super::{CmdMessage, CmdResult};

/// Every REPL verb with its help lines, in the order `help` lists them.
pub const COMMANDS: &[(&str, &[&str])] = &[
    ("close", &["Exit the program (same as 'exit')."]),
    ("exit", &["Exit the program."]),
    ("hello", &["Greet the user."]),
    (
        "add-contact",
        &[
            "Add a new contact. Guided by user input flow.",
            "Usage: add-contact <name>",
        ],
    ),
    (
        "change-contact",
        &[
            "Update an existing contact. Guided by user input flow.",
            "Usage: change-contact <name>",
        ],
    ),
    (
        "delete-contact",
        &["Remove a contact by name.", "Usage: delete-contact <name>"],
    ),
    ("all-contacts", &["Display all contacts."]),
    (
        "search-contact",
        &[
            "Display contacts that match the entered input.",
            "Usage: search-contact <input>",
        ],
    ),
    (
        "show-phones",
        &[
            "Display a contact's phone number/numbers.",
            "Usage: show-phones <name>",
        ],
    ),
    (
        "show-birthday",
        &["Display a contact's birthday.", "Usage: show-birthday <name>"],
    ),
    (
        "birthdays",
        &[
            "List upcoming birthdays. By default, lists birthdays within 7 days.",
            "Usage: birthdays [<number_of_days>]",
        ],
    ),
    ("add-note", &["Add a new note.", "Usage: add-note <note text>"]),
    (
        "change-note",
        &[
            "Update an existing note with new text.",
            "Usage: change-note <id> <new_text>",
        ],
    ),
    ("delete-note", &["Remove a note by ID.", "Usage: delete-note <id>"]),
    ("all-notes", &["Display all notes."]),
    (
        "search-note",
        &[
            "Search for notes.",
            "Usage by text: search-note <input>",
            "Usage by tags: search-note #<tag> [#<tag2> ... #<tagN>]",
        ],
    ),
    (
        "add-note-tag",
        &[
            "Add a tag to a note.",
            "Usage: add-note-tag <id> <tag1> [<tag2> ... <tagN>]",
        ],
    ),
    (
        "delete-note-tag",
        &[
            "Remove a tag from a note.",
            "Usage: delete-note-tag <id> <tag1> [<tag2> ... <tagN>]",
        ],
    ),
    ("help", &["Display this help message."]),
];

const NAME_COLUMN: usize = 21;

pub fn render() -> String {
    let mut out = String::from("Available commands:\n");
    for (name, lines) in COMMANDS {
        let label = format!("- '{}':", name);
        for (i, line) in lines.iter().enumerate() {
            let prefix = if i == 0 { label.as_str() } else { "" };
            out.push_str(&format!("{:<width$}{}\n", prefix, line, width = NAME_COLUMN));
        }
    }
    out
}

pub fn run() -> CmdResult {
    CmdResult::default().with_output(render())
}

pub fn hello() -> CmdResult {
    CmdResult::message(CmdMessage::info("How can I help you?"))
}

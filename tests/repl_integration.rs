use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn bot(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("assistant-bot").unwrap();
    cmd.env("ASSISTANT_BOT_HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn greets_and_exits() {
    let temp_dir = tempfile::tempdir().unwrap();
    bot(temp_dir.path())
        .write_stdin("hello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn contacts_persist_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    bot(temp_dir.path())
        .write_stdin("add-contact Ann Lee\n0501234567\nn\nann@example.com\nn\nn\n12.06.1990\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully."));

    assert!(temp_dir.path().join("addressbook.json").exists());

    bot(temp_dir.path())
        .write_stdin("show-phones Ann Lee\nshow-birthday Ann Lee\nall-contacts\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee: 0501234567"))
        .stdout(predicate::str::contains(
            "Ann Lee's birthday is on 12.06.1990",
        ))
        .stdout(predicate::str::contains("ann@example.com"));
}

#[test]
fn notes_persist_on_end_of_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    bot(temp_dir.path())
        .write_stdin("add-note buy milk\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added."));

    bot(temp_dir.path())
        .write_stdin("search-note milk\nsearch-note #none\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found Notes by Keyword 'milk'"))
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn data_dir_flag_takes_precedence() {
    let env_dir = tempfile::tempdir().unwrap();
    let flag_dir = tempfile::tempdir().unwrap();

    bot(env_dir.path())
        .arg("--data-dir")
        .arg(flag_dir.path())
        .write_stdin("add-note flagged\nexit\n")
        .assert()
        .success();

    assert!(flag_dir.path().join("notebook.json").exists());
    assert!(!env_dir.path().join("notebook.json").exists());
}

#[test]
fn invalid_input_keeps_the_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();
    bot(temp_dir.path())
        .write_stdin("fly away\nbirthdays a b\nsearch-contact\nall-contacts\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains(
            "Too many arguments. Usage: birthdays [<days>]",
        ))
        .stdout(predicate::str::contains("No search input provided."))
        .stdout(predicate::str::contains("No contacts."));
}

#[test]
fn corrupt_address_book_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("addressbook.json"), "not json").unwrap();

    bot(temp_dir.path())
        .write_stdin("all-contacts\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load contacts"))
        .stdout(predicate::str::contains("No contacts."));

    assert!(temp_dir.path().join("addressbook.json.bak").exists());
}

#[test]
fn help_lists_commands() {
    let temp_dir = tempfile::tempdir().unwrap();
    bot(temp_dir.path())
        .write_stdin("HELP\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("delete-note-tag"));
}

#[cfg(unix)]
#[test]
fn interrupt_saves_before_exiting() {
    use std::io::{BufRead, BufReader, Write};
    use std::process::{Command as Process, Stdio};

    let temp_dir = tempfile::tempdir().unwrap();
    let mut child = Process::new(assert_cmd::cargo::cargo_bin("assistant-bot"))
        .env("ASSISTANT_BOT_HOME", temp_dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    // Stdin stays open, so only the signal can end the session.
    let mut stdin = child.stdin.take().unwrap();
    writeln!(stdin, "add-note kept after interrupt").unwrap();
    stdin.flush().unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut seen = String::new();
    while !seen.contains("Note added.") {
        let mut line = String::new();
        assert!(stdout.read_line(&mut line).unwrap() > 0, "output ended early: {}", seen);
        seen.push_str(&line);
    }

    let killed = Process::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let mut rest = String::new();
    std::io::Read::read_to_string(&mut stdout, &mut rest).unwrap();
    let status = child.wait().unwrap();
    drop(stdin);

    assert!(status.success());
    assert!(rest.contains("Good bye!"));
    let saved = std::fs::read_to_string(temp_dir.path().join("notebook.json")).unwrap();
    assert!(saved.contains("kept after interrupt"));
}

#[test]
fn unreadable_encoding_is_kept_as_backup() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("addressbook.json"), [0xffu8, 0xfe]).unwrap();

    bot(temp_dir.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load contacts"));

    let backup = std::fs::read(temp_dir.path().join("addressbook.json.bak")).unwrap();
    assert_eq!(backup, vec![0xff, 0xfe]);
}

#[test]
fn huge_birthday_window_lists_every_birthday() {
    let temp_dir = tempfile::tempdir().unwrap();
    bot(temp_dir.path())
        .write_stdin("add-contact Ann\nn\nn\nn\n12.06.1990\nbirthdays 99999999999999\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully."))
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("There are no upcoming birthdays").not());
}

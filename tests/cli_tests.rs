use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("folio"))
}

// =============================================================================
// Listings
// =============================================================================

#[test]
fn test_authors_lists_seeded_library() {
    folio_cmd()
        .arg("authors")
        .assert()
        .success()
        .stdout(predicate::str::contains("J. R. R. Tolkien"))
        .stdout(predicate::str::contains("Ursula K. Le Guin"));
}

#[test]
fn test_books_lists_seeded_library() {
    folio_cmd()
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("The Fellowship of the Ring"))
        .stdout(predicate::str::contains("A Wizard of Earthsea"));
}

#[test]
fn test_books_json_output() {
    folio_cmd()
        .arg("books")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"101\""))
        .stdout(predicate::str::contains("\"published_year\": 1937"));
}

// =============================================================================
// Adding books
// =============================================================================

#[test]
fn test_add_book() {
    folio_cmd()
        .arg("add-book")
        .arg("New Book")
        .arg("--author-id")
        .arg("1")
        .arg("--year")
        .arg("2025")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 104 New Book"));
}

#[test]
fn test_add_book_with_unknown_author_warns() {
    folio_cmd()
        .arg("add-book")
        .arg("X")
        .arg("--author-id")
        .arg("does-not-exist")
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("unlinked"));
}

#[test]
fn test_add_book_rejects_empty_title() {
    folio_cmd()
        .arg("add-book")
        .arg("   ")
        .arg("--author-id")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title cannot be empty"));
}

// =============================================================================
// GraphQL from the CLI
// =============================================================================

#[test]
fn test_query_command() {
    folio_cmd()
        .arg("query")
        .arg("{ authors { name books { title } } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("J. R. R. Tolkien"))
        .stdout(predicate::str::contains("The Hobbit"));
}

#[test]
fn test_query_command_accepts_bare_selection() {
    folio_cmd()
        .arg("query")
        .arg("books { title }")
        .assert()
        .success()
        .stdout(predicate::str::contains("A Wizard of Earthsea"));
}

#[test]
fn test_mutate_command() {
    folio_cmd()
        .arg("mutate")
        .arg(r#"addBook(title: "New Book", publishedYear: 2025, authorId: "1") { id title }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"104\""))
        .stdout(predicate::str::contains("New Book"));
}

#[test]
fn test_sdl_command_prints_schema() {
    folio_cmd()
        .arg("sdl")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("addBook"));
}

// =============================================================================
// Init and config
// =============================================================================

#[test]
fn test_init_writes_config() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".folio.yml").exists());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    folio_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_runs_without_config_file() {
    let temp_dir = TempDir::new().unwrap();

    // No .folio.yml anywhere up the tree of a temp dir; defaults apply.
    folio_cmd()
        .arg("authors")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("J. R. R. Tolkien"));
}

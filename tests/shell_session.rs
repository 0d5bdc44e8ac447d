//! End-to-end tests driving a whole session through the text contracts.

use treesh::core::{Effect, FileTree, NodeKind};
use treesh::models::OutputLine;
use treesh::session::ShellSession;

/// The body of a reply: every line's text, prompt excluded.
fn body(session: &mut ShellSession, line: &str) -> Vec<String> {
    let result = session.handle_line(line);
    let mut lines = result.output;
    assert!(
        matches!(lines.last(), Some(OutputLine::Prompt(_))),
        "reply to {line:?} did not end with a prompt"
    );
    lines.pop();
    lines.iter().map(|l| l.as_str().to_string()).collect()
}

fn demo_session() -> ShellSession {
    ShellSession::demo()
}

#[test]
fn walks_into_blog_and_lists_it() {
    let mut session = demo_session();

    assert!(body(&mut session, "cd blog").is_empty());
    assert_eq!(session.prompt(), "root/blog~$ ");

    assert_eq!(
        body(&mut session, "dir"),
        vec!["Directory of root/blog:", "test.blog"]
    );

    // Failed navigation reports and stays put.
    assert_eq!(
        body(&mut session, "cd nonexistent"),
        vec!["The system cannot find the path specified."]
    );
    assert_eq!(session.prompt(), "root/blog~$ ");

    assert_eq!(
        body(&mut session, "cd test.blog"),
        vec!["test.blog is not a directory."]
    );
    assert_eq!(session.prompt(), "root/blog~$ ");
}

#[test]
fn partial_path_failure_leaves_cursor_unchanged() {
    let mut session = demo_session();
    assert_eq!(
        body(&mut session, "cd blog/missing"),
        vec!["The system cannot find the path specified."]
    );
    assert_eq!(session.prompt(), "root~$ ");
}

#[test]
fn play_suggests_the_only_game() {
    let mut session = demo_session();
    body(&mut session, "cd games");
    assert_eq!(
        body(&mut session, "play unknowngame"),
        vec![
            "unknowngame is not a game in this directory.",
            "Did you mean test.game?"
        ]
    );
}

#[test]
fn play_with_no_games_skips_matching() {
    let mut session = demo_session();
    // Root has directories only.
    assert_eq!(
        body(&mut session, "play unknowngame"),
        vec![
            "unknowngame is not a game in this directory.",
            "This directory has no games."
        ]
    );
}

#[test]
fn mixed_case_input_is_case_folded() {
    let mut session = demo_session();
    let upper = body(&mut session, "HELP");
    let lower = body(&mut session, "help");
    assert_eq!(upper, lower);
    assert!(upper.concat().contains("Available commands:"));

    body(&mut session, "CD BLOG");
    assert_eq!(session.prompt(), "root/blog~$ ");
}

#[test]
fn empty_input_redisplays_prompt_and_skips_history() {
    let mut session = demo_session();
    body(&mut session, "dir");

    let result = session.handle_line("");
    assert_eq!(result.output, vec![OutputLine::prompt("root~$ ")]);

    // The empty line was not recorded.
    assert_eq!(session.history_previous(), Some("dir"));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let mut session = demo_session();
    assert_eq!(
        body(&mut session, "hlep"),
        vec![
            "Sorry, command not recognized. Did you mean HELP?",
            "Type \"help\" for available commands."
        ]
    );
}

#[test]
fn cls_and_reset_surface_as_effects() {
    let mut session = demo_session();
    assert_eq!(session.handle_line("cls").effect, Some(Effect::ClearScreen));
    assert_eq!(session.handle_line("reset").effect, Some(Effect::Reset));
    assert_eq!(session.handle_line("dir").effect, None);
}

#[test]
fn session_over_hand_built_tree() {
    let mut tree = FileTree::new("root");
    tree.add_child("projects", NodeKind::Directory).unwrap();
    tree.add_child("blog", NodeKind::Directory).unwrap();
    tree.navigate_to("blog").unwrap();
    tree.add_child("test.blog", NodeKind::Document).unwrap();
    tree.navigate_to("..").unwrap();

    let mut session = ShellSession::new(tree);
    assert_eq!(
        body(&mut session, "dir"),
        vec!["Directory of root:", "projects\tblog"]
    );
    assert_eq!(
        body(&mut session, "read test.blg"),
        vec![
            "test.blg is not a document in this directory.",
            "This directory has no documents."
        ]
    );
    body(&mut session, "cd blog");
    assert_eq!(body(&mut session, "read test.blog"), vec!["To be implemented!!"]);
}

#[test]
fn mute_state_flows_into_help() {
    let mut session = demo_session();
    assert_eq!(body(&mut session, "mute"), vec!["Turned sounds OFF"]);
    assert!(session.is_muted());
    let help = body(&mut session, "help").concat();
    assert!(help.contains("Sounds are currently OFF."));
}

use gridcalc_cli::{Config, GridCalcApp, LogLevel};
use pretty_assertions::assert_eq;

fn run_session(script: &str, config: Config) -> String {
    let mut app = GridCalcApp::new(script.as_bytes(), Vec::new(), config);
    app.run().unwrap();
    String::from_utf8(app.into_output()).unwrap()
}

fn run(script: &str) -> String {
    run_session(script, Config::default())
}

/// Creates a 2x2 grid `[[1, 2], [3, 4]]` in the first slot
const FIRST: &str = "1\n2\n2\n1 2 3 4\n";

#[test]
fn add_two_grids() {
    let script = format!("{FIRST}1\n2 2\n10 20\n30 40\n5\n0\n");
    let out = run(&script);
    assert!(out.contains("Creating the first image:"));
    assert!(out.contains("Creating the second image:"));
    assert!(out.contains("Enter 4 values:"));
    assert!(
        out.contains("Addition result:\n  11  22\n  33  44\n"),
        "{out}"
    );
    assert!(out.ends_with("Exiting.\n"));
}

#[test]
fn display_both_slots() {
    let out = run("2\n");
    assert!(out.contains("Image 1 not created.\nImage 2 not created.\n"));

    let out = run(&format!("{FIRST}2\n"));
    assert!(out.contains("Image 1:\n   1   2\n   3   4\nImage 2 not created.\n"));
}

#[test]
fn merges_check_shapes() {
    // Second grid is one row of two
    let script = format!("{FIRST}1\n2\n1\n5 6\n3\n4\n");
    let out = run(&script);
    assert!(out.contains(
        "Error: grids must have compatible shapes for horizontal concatenation (left is 2x2, right is 1x2)"
    ));
    assert!(out.contains("Vertical merge result:\n   1   2\n   3   4\n   5   6\n"));
}

#[test]
fn divide_by_grid_with_zero() {
    let script = format!("{FIRST}1\n2\n2\n1 0 1 1\n9\n8\n");
    let out = run(&script);
    assert!(out.contains("Error: division by zero"));
    assert!(out.contains("Subtraction result:\n   0   2\n   2   3\n"));
}

#[test]
fn actions_need_grids() {
    let out = run("5\n6\n7\n10\n11\n1\n2\n2\n1 2 3 4\n9\n");
    assert_eq!(out.matches("Create both images first.").count(), 2);
    assert_eq!(out.matches("Image not created.").count(), 4);
}

#[test]
fn scalar_operations() {
    let script = format!("{FIRST}6\n0.5\n11\n0\n11\n2\n10\n1\n");
    let out = run(&script);
    assert_eq!(out.matches("Result:\n 0.5   1\n 1.5   2\n").count(), 2);
    assert!(out.contains("Cannot divide by zero."));
    assert!(out.contains("Result:\n   0   1\n   2   3\n"));
}

#[test]
fn crop_first_grid() {
    let script = format!("{FIRST}7\n0 1 1 1\n7\n1 0 0 0\n7\n-1 0 0 0\n");
    let out = run(&script);
    assert!(out.contains("Cropped:\n   2\n   4\n"));
    assert_eq!(out.matches("Error: invalid crop coordinates").count(), 2);
}

#[test]
fn third_grid_is_refused() {
    let script = format!("{FIRST}{FIRST}1\n");
    let out = run(&script);
    assert!(out.contains("Both images already created."));
}

#[test]
fn bad_choices_keep_the_loop_alive() {
    let out = run("abc def\n42\n0\n");
    assert_eq!(out.matches("Invalid input. Try again.").count(), 1);
    assert!(out.contains("Unknown option."));
    assert!(out.ends_with("Exiting.\n"));
}

#[test]
fn end_of_input_stops_quietly() {
    let out = run("1\n3\n");
    assert!(out.contains("Height: "));
    assert!(!out.contains("Exiting."));
}

#[test]
fn menu_lists_every_option() {
    let out = run("0\n");
    let menu: Vec<&str> = out.lines().take(12).collect();
    assert_eq!(menu[0], "1. Create image");
    assert_eq!(menu[10], "11. Divide the image by a scalar");
    assert_eq!(menu[11], "0. Exit");
}

#[test]
fn configured_cell_width() {
    let config = Config {
        cell_width: 2,
        log_level: LogLevel::Off,
    };
    let out = run_session(&format!("{FIRST}2\n"), config);
    assert!(out.contains("Image 1:\n 1 2\n 3 4\n"));
}

//! Black-box CLI tests for the `ssharpc` binary: all input arrives on
//! stdin, all successful output arrives on stdout, and no flags or
//! subcommands are accepted.

use assert_cmd::Command;
use predicates::prelude::*;

fn ssharpc() -> Command {
    Command::cargo_bin("ssharpc").unwrap()
}

#[test]
fn minimal_program_compiles() {
    ssharpc()
        .write_stdin("main(){42}")
        .assert()
        .success()
        .stdout(predicate::str::contains("int main() {\n\t return (42);\n}"));
}

#[test]
fn arithmetic_precedence_nests_correctly() {
    ssharpc()
        .write_stdin("main(){1+2*3}")
        .assert()
        .success()
        .stdout(predicate::str::contains("(1+(2*3))"));
}

#[test]
fn left_associative_subtraction() {
    ssharpc()
        .write_stdin("main(){10-4-3}")
        .assert()
        .success()
        .stdout(predicate::str::contains("((10-4)-3)"));
}

#[test]
fn conditional_expression() {
    ssharpc()
        .write_stdin("main(){if(1){2}{3}}")
        .assert()
        .success()
        .stdout(predicate::str::contains("(((1) ? \n\t(2)\n\t : (3)))"));
}

#[test]
fn io_round_trip() {
    ssharpc()
        .write_stdin("main(){write(read())}")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(_ssharp_write(_ssharp_read()))",
        ));
}

#[test]
fn scope_error_names_the_offending_variable() {
    ssharpc()
        .write_stdin("f(){x} main(){f()}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("x"));
}

#[test]
fn arity_error_on_call() {
    ssharpc()
        .write_stdin("f(a){a} main(){f(1,2)}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("f"));
}

#[test]
fn duplicate_function_definition() {
    ssharpc()
        .write_stdin("f(){1} f(){2} main(){0}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn empty_argument_list_has_no_trailing_comma() {
    ssharpc()
        .write_stdin("main(){read()}")
        .assert()
        .success()
        .stdout(predicate::str::contains("_ssharp_read()"));
}

#[test]
fn bare_braced_sequence_has_no_trailing_comma() {
    ssharpc()
        .write_stdin("main(){1;2;3}")
        .assert()
        .success()
        .stdout(predicate::str::contains("(1,2,3)"));
}

#[test]
fn trailing_comma_in_call_is_rejected() {
    ssharpc()
        .write_stdin("main(){write(1,)}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn if_as_a_function_name_is_rejected() {
    ssharpc()
        .write_stdin("if(){1} main(){0}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn success_writes_nothing_to_stderr() {
    ssharpc()
        .write_stdin("main(){1}")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn output_starts_with_the_prelude() {
    ssharpc()
        .write_stdin("main(){0}")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#include <stdio.h>"));
}

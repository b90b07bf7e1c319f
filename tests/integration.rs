//! Integration tests for rstlit.
//!
//! These tests convert complete literate sources in both directions and
//! drive the `rstlit` binary end to end on temporary files.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use rstlit_config::{Config, ConverterOptions, ResolvedOptions};
use rstlit_core::{RstlitError, WarningKind};
use rstlit_parser::{code_to_text, text_to_code, Conversion};
use tempfile::TempDir;

/// A Python module written as text, with a header block.
const ITERQUEUE_TXT: &str = r#"..  #!/usr/bin/env python
  # -*- coding: utf-8 -*-

=========
iterqueue
=========

Extensions to the iterator protocol.

Imports::

  import itertools

A queue class
-------------

`PeekIter` wraps an iterator and supports look-ahead::

  class PeekIter(object):
      """Iterator with peek support"""

      def __init__(self, iterable):
          self.it = iter(iterable)

      def peek(self):
          value = next(self.it)
          self.it = itertools.chain([value], self.it)
          return value

Usage example:

>>> q = PeekIter([1, 2])
>>> q.peek()
1

.. note:: Doctest blocks stay documentation.
"#;

/// The same module as code.
const ITERQUEUE_PY: &str = r#"#!/usr/bin/env python
# -*- coding: utf-8 -*-

# =========
# iterqueue
# =========
#
# Extensions to the iterator protocol.
#
# Imports::

import itertools

# A queue class
# -------------
#
# `PeekIter` wraps an iterator and supports look-ahead::

class PeekIter(object):
    """Iterator with peek support"""

    def __init__(self, iterable):
        self.it = iter(iterable)

    def peek(self):
        value = next(self.it)
        self.it = itertools.chain([value], self.it)
        return value

# Usage example:
#
# >>> q = PeekIter([1, 2])
# >>> q.peek()
# 1
#
# .. note:: Doctest blocks stay documentation.
"#;

/// A C program written as code.
const HELLO_C: &str = r#"// Hello world in C
// ==================
//
// The entry point::

#include <stdio.h>

int main(void)
{
    printf("hello\n");
    return 0;
}

// Nothing else to see here.
"#;

/// The same program as text.
const HELLO_C_TXT: &str = r#"Hello world in C
==================

The entry point::

  #include <stdio.h>

  int main(void)
  {
      printf("hello\n");
      return 0;
  }

Nothing else to see here.
"#;

fn options_for(language: &str) -> ResolvedOptions {
    ConverterOptions::new(language).resolve().unwrap()
}

fn strip_options_for(language: &str) -> ResolvedOptions {
    ConverterOptions::new(language).with_strip(true).resolve().unwrap()
}

// =============================================================================
// Library conversions
// =============================================================================

#[test]
fn test_python_text_to_code() {
    let Conversion { output, warnings } = text_to_code(ITERQUEUE_TXT, &options_for("python")).unwrap();
    assert_eq!(output, ITERQUEUE_PY);
    assert!(warnings.is_empty());
}

#[test]
fn test_python_code_to_text() {
    let Conversion { output, warnings } = code_to_text(ITERQUEUE_PY, &options_for("python")).unwrap();
    assert_eq!(output, ITERQUEUE_TXT);
    assert!(warnings.is_empty());
}

#[test]
fn test_c_code_to_text() {
    let text = code_to_text(HELLO_C, &options_for("c")).unwrap();
    assert_eq!(text.output, HELLO_C_TXT);
}

#[test]
fn test_c_text_to_code() {
    let code = text_to_code(HELLO_C_TXT, &options_for("c")).unwrap();
    assert_eq!(code.output, HELLO_C);
}

#[test]
fn test_elisp_marker_paragraph() {
    let code = ";; Counting words\n;; --------------\n\n(defun count (start end)\n  (how-many \"x\" start end))\n";
    let text = code_to_text(code, &options_for("elisp")).unwrap();
    assert_eq!(
        text.output,
        "Counting words\n--------------\n\n::\n\n  (defun count (start end)\n    (how-many \"x\" start end))\n"
    );

    // the inserted marker paragraph becomes a comment of its own
    let back = text_to_code(&text.output, &options_for("elisp")).unwrap();
    assert_eq!(
        back.output,
        ";; Counting words\n;; --------------\n;;\n;; ::\n\n(defun count (start end)\n  (how-many \"x\" start end))\n"
    );
}

#[test]
fn test_strip_python_text() {
    let code = text_to_code(ITERQUEUE_TXT, &strip_options_for("python")).unwrap();
    assert!(code.output.starts_with("#!/usr/bin/env python\n# -*- coding: utf-8 -*-\n\nimport itertools\n"));
    assert!(!code.output.contains("iterqueue"));
    assert!(code.output.ends_with("        return value\n\n"));
}

#[test]
fn test_strip_c_code() {
    let text = code_to_text(HELLO_C, &strip_options_for("c")).unwrap();
    assert_eq!(
        text.output,
        "Hello world in C\n==================\n\nThe entry point:\n\nNothing else to see here.\n"
    );
}

#[test]
fn test_repairs_are_reported() {
    let text = "Intro::\n  x = 1\nOutro\n";
    let code = text_to_code(text, &options_for("python")).unwrap();
    assert_eq!(code.output, "# Intro::\n\nx = 1\n\n# Outro\n");

    let kinds: Vec<(usize, WarningKind)> = code.warnings.iter().map(|w| (w.line, w.kind)).collect();
    assert_eq!(
        kinds,
        vec![(2, WarningKind::MissingBlankLine), (3, WarningKind::MissingBlankLine)]
    );
}

#[test]
fn test_dangling_marker_reported() {
    let code = "# Look at this::\n\n# but no code follows\n";
    let text = code_to_text(code, &options_for("python")).unwrap();
    assert_eq!(text.warnings.len(), 1);
    assert_eq!(text.warnings[0].kind, WarningKind::DanglingLiteralMarker);
}

#[test]
fn test_indentation_error_names_block() {
    let text = "Code::\n\n      deep = 1\n    shallow = 2\n";
    let err = text_to_code(text, &options_for("python")).unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, RstlitError::Indentation { line: 4, expected: 6, found: 4, .. }));
    assert!(message.contains("shallow = 2"));
}

#[test]
fn test_crlf_line_endings() {
    let text = "Text::\r\n\r\n  x = 1\r\n";
    let code = text_to_code(text, &options_for("python")).unwrap();
    assert_eq!(code.output, "# Text::\r\n\r\nx = 1\r\n");
    let back = code_to_text(&code.output, &options_for("python")).unwrap();
    assert_eq!(back.output, text);
}

#[test]
fn test_custom_header_string() {
    let options = ConverterOptions::new("python")
        .with_header_string("..!")
        .resolve()
        .unwrap();
    let text = code_to_text("#!/bin/sh\n\n# Text\n", &options).unwrap();
    assert_eq!(text.output, "..!  #!/bin/sh\n\nText\n");
    let code = text_to_code(&text.output, &options).unwrap();
    assert_eq!(code.output, "#!/bin/sh\n\n# Text\n");
}

#[test]
fn test_config_language_table() {
    let config: Config = toml::from_str("[languages]\nfortran = \"! \"").unwrap();
    let options = ConverterOptions::new("fortran").resolve_with(&config).unwrap();
    let text = code_to_text("! Solver::\n\nx = 1\n", &options).unwrap();
    assert_eq!(text.output, "Solver::\n\n  x = 1\n");
}

// =============================================================================
// Command line
// =============================================================================

fn rstlit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rstlit"))
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = rstlit()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_cli_converts_file() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("iterqueue.py.txt");
    fs::write(&infile, ITERQUEUE_TXT).unwrap();

    let output = rstlit().arg(&infile).output().unwrap();
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("iterqueue.py")).unwrap(), ITERQUEUE_PY);
}

#[test]
fn test_cli_code_file_to_text() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("hello.c");
    fs::write(&infile, HELLO_C).unwrap();

    let output = rstlit().arg(&infile).output().unwrap();
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("hello.c.txt")).unwrap(), HELLO_C_TXT);
}

#[test]
fn test_cli_stdin_to_stdout() {
    let output = run_with_stdin(&["-c", "--language", "c", "-", "-"], HELLO_C);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), HELLO_C_TXT);
}

#[test]
fn test_cli_piped_stdin_without_infile() {
    let output = run_with_stdin(&[], "Text::\n\n  x = 1\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "# Text::\n\nx = 1\n");
}

#[test]
fn test_cli_strip_to_stdout() {
    let output = run_with_stdin(&["-c", "-s", "--language", "c", "-"], HELLO_C);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(!text.contains("printf"));
}

#[test]
fn test_cli_diff_clean() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("iterqueue.py.txt");
    fs::write(&infile, ITERQUEUE_TXT).unwrap();

    let output = rstlit().arg("--diff").arg(&infile).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("no differences found"));
    assert!(!dir.path().join("iterqueue.py").exists());
}

#[test]
fn test_cli_diff_reports_repairs() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("sloppy.py.txt");
    fs::write(&infile, "Intro::\n  x = 1\n").unwrap();

    let output = rstlit().arg("-d").arg(&infile).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let report = String::from_utf8(output.stdout).unwrap();
    assert!(report.contains("+++"));
    assert!(report.contains("@@"));
}

#[test]
fn test_cli_overwrite_no() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("a.py.txt");
    let outfile = dir.path().join("a.py");
    fs::write(&infile, "Text\n").unwrap();
    fs::write(&outfile, "precious\n").unwrap();

    let output = rstlit().args(["--overwrite", "no"]).arg(&infile).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Output file exists"));
    assert_eq!(fs::read_to_string(&outfile).unwrap(), "precious\n");
}

#[test]
fn test_cli_explicit_outfile_and_replace() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("notes.txt");
    let outfile = dir.path().join("notes.sh");
    fs::write(&infile, "Run it::\n\n  echo hi\n").unwrap();

    let output = rstlit()
        .arg("--replace")
        .arg(&infile)
        .arg("-o")
        .arg(&outfile)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&outfile).unwrap(), "# Run it::\n\necho hi\n");
    assert!(!infile.exists());
    assert!(dir.path().join("notes.txt~").exists());
}

#[test]
fn test_cli_indentation_error_exit_status() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("bad.py.txt");
    fs::write(&infile, "Code::\n\n    a = 1\n  b = 2\n").unwrap();

    let output = rstlit().arg(&infile).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Indentation error at line 4"));
    assert!(!dir.path().join("bad.py").exists());
}

#[test]
fn test_cli_paths() {
    let output = rstlit().arg("--paths").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("config"));
}

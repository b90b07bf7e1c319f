//! Command-line interface for rstlit.
//!
//! Provides argument parsing and the completion of converter options from
//! file names and the config file.

use clap::Parser;
use rstlit_config::languages::is_text_extension;
use rstlit_config::{Config, ConverterOptions, OverwriteMode};
use rstlit_core::Direction;

use crate::streams::{extension_of, outfile_name, STDIO};

/// rstlit - Literate programming with reStructuredText.
///
/// Converts between reStructuredText documentation with literal code
/// blocks and source code with the documentation in comments.
#[derive(Parser, Debug)]
#[command(
    name = "rstlit",
    author = "rstlit Contributors",
    version,
    about = "Bidirectional text <-> code converter for literate programming",
    after_help = "Examples:\n  \
                  rstlit module.py.txt          (writes module.py)\n  \
                  rstlit module.py              (writes module.py.txt)\n  \
                  rstlit -c -s module.py -      (documentation only, to stdout)\n  \
                  rstlit --diff module.py.txt   (check the round trip)"
)]
pub struct Cli {
    /// Input file ('-' for stdin)
    #[arg(value_name = "INFILE")]
    pub infile: Option<String>,

    /// Output file ('-' for stdout, default derived from INFILE)
    #[arg(value_name = "OUTFILE")]
    pub outfile: Option<String>,

    /// Output file, same as the OUTFILE argument
    #[arg(short = 'o', long = "outfile", value_name = "FILE", conflicts_with = "outfile")]
    pub outfile_opt: Option<String>,

    /// Convert text to code
    #[arg(short = 't', long = "txt2code", conflicts_with = "code2txt")]
    pub txt2code: bool,

    /// Convert code to text
    #[arg(short = 'c', long = "code2txt")]
    pub code2txt: bool,

    /// Programming language of the code source (default from extension)
    #[arg(long = "language")]
    pub language: Option<String>,

    /// Comment string marking documentation in the code source
    #[arg(long = "comment-string", value_name = "STRING")]
    pub comment_string: Option<String>,

    /// Spaces to indent code blocks in the text source
    #[arg(long = "codeindent", value_name = "N")]
    pub codeindent: Option<usize>,

    /// Marker for a leading code block in the text source
    #[arg(long = "header-string", value_name = "STRING")]
    pub header_string: Option<String>,

    /// Drop documentation (txt2code) or code (code2txt)
    #[arg(short = 's', long = "strip")]
    pub strip: bool,

    /// Overwrite policy for an existing output file: yes, update, no
    #[arg(long = "overwrite", value_name = "MODE")]
    pub overwrite: Option<OverwriteMode>,

    /// Rename the input file to INFILE~ after a successful conversion
    #[arg(long = "replace")]
    pub replace: bool,

    /// Convert back and report differences to the input
    #[arg(short = 'd', long = "diff")]
    pub diff: bool,

    /// Use a custom config file or inline TOML
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Output file given on the command line, either way.
    pub fn outfile_arg(&self) -> Option<&str> {
        self.outfile_opt.as_deref().or(self.outfile.as_deref())
    }

    /// Conversion direction: explicit flag, else guessed from the file
    /// names.
    pub fn direction(&self, infile: &str, config: &Config) -> Direction {
        if self.txt2code {
            return Direction::TextToCode;
        }
        if self.code2txt {
            return Direction::CodeToText;
        }

        if let Some(ext) = extension_of(infile) {
            if is_text_extension(&ext) {
                return Direction::TextToCode;
            }
            if config.is_code_extension(&ext) {
                return Direction::CodeToText;
            }
        }
        let outfile_ext = self.outfile_arg().and_then(extension_of);
        if outfile_ext.is_some_and(|ext| is_text_extension(&ext)) {
            return Direction::CodeToText;
        }
        Direction::TextToCode
    }

    /// Output file name: explicit, else derived from the input name.
    pub fn outfile(&self, infile: &str, direction: Direction, config: &Config) -> String {
        match self.outfile_arg() {
            Some(outfile) => outfile.to_string(),
            None => outfile_name(infile, direction, config),
        }
    }

    /// Language of the code side: explicit, else from the code file's
    /// extension, else the configured default.
    pub fn language(&self, infile: &str, outfile: &str, direction: Direction, config: &Config) -> String {
        if let Some(language) = &self.language {
            return language.clone();
        }
        let code_file = match direction {
            Direction::TextToCode => outfile,
            Direction::CodeToText => infile,
        };
        if code_file != STDIO {
            if let Some(language) = extension_of(code_file).and_then(|ext| config.language_for_extension(&ext)) {
                return language;
            }
        }
        config.converter.language.clone()
    }

    /// Converter options: command line over config file over defaults.
    pub fn converter_options(&self, language: &str, config: &Config) -> ConverterOptions {
        let mut options = ConverterOptions::from_config(config);
        options.language = language.to_string();
        options.strip = options.strip || self.strip;
        if let Some(comment_string) = &self.comment_string {
            options = options.with_comment_string(comment_string);
        }
        if let Some(codeindent) = self.codeindent {
            options = options.with_codeindent(codeindent);
        }
        if let Some(header_string) = &self.header_string {
            options = options.with_header_string(header_string);
        }
        options
    }

    pub fn overwrite_mode(&self, config: &Config) -> OverwriteMode {
        self.overwrite.unwrap_or(config.converter.overwrite)
    }
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["rstlit"]);
        assert!(cli.infile.is_none());
        assert!(cli.outfile_arg().is_none());
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.strip);
        assert!(cli.overwrite.is_none());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "rstlit",
            "-c",
            "-s",
            "--codeindent", "4",
            "--comment-string", "## ",
            "--overwrite", "yes",
            "-l", "debug",
            "module.py",
            "-",
        ]);
        assert!(cli.code2txt);
        assert!(cli.strip);
        assert_eq!(cli.codeindent, Some(4));
        assert_eq!(cli.comment_string.as_deref(), Some("## "));
        assert_eq!(cli.overwrite, Some(OverwriteMode::Yes));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.infile.as_deref(), Some("module.py"));
        assert_eq!(cli.outfile_arg(), Some("-"));
    }

    #[test]
    fn test_direction_flags_conflict() {
        assert!(Cli::try_parse_from(["rstlit", "-t", "-c"]).is_err());
    }

    #[test]
    fn test_invalid_overwrite_mode() {
        assert!(Cli::try_parse_from(["rstlit", "--overwrite", "maybe"]).is_err());
    }

    #[test]
    fn test_direction_inference() {
        let config = Config::default();
        let cli = Cli::parse_from(["rstlit"]);
        assert_eq!(cli.direction("module.py.txt", &config), Direction::TextToCode);
        assert_eq!(cli.direction("module.py", &config), Direction::CodeToText);
        assert_eq!(cli.direction("notes", &config), Direction::TextToCode);
        assert_eq!(cli.direction("-", &config), Direction::TextToCode);

        let cli = Cli::parse_from(["rstlit", "-", "out.txt"]);
        assert_eq!(cli.direction("-", &config), Direction::CodeToText);

        let cli = Cli::parse_from(["rstlit", "-c", "module.py.txt"]);
        assert_eq!(cli.direction("module.py.txt", &config), Direction::CodeToText);
    }

    #[test]
    fn test_direction_from_config_extension() {
        let config: Config = toml::from_str("[extensions]\n\".f90\" = \"fortran\"").unwrap();
        let cli = Cli::parse_from(["rstlit"]);
        assert_eq!(cli.direction("solver.f90", &config), Direction::CodeToText);
    }

    #[test]
    fn test_outfile() {
        let config = Config::default();
        let cli = Cli::parse_from(["rstlit"]);
        assert_eq!(cli.outfile("a.py.txt", Direction::TextToCode, &config), "a.py");

        let cli = Cli::parse_from(["rstlit", "-o", "b.py"]);
        assert_eq!(cli.outfile("a.py.txt", Direction::TextToCode, &config), "b.py");
    }

    #[test]
    fn test_language_from_code_side() {
        let config = Config::default();
        let cli = Cli::parse_from(["rstlit"]);
        assert_eq!(cli.language("a.c.txt", "a.c", Direction::TextToCode, &config), "c");
        assert_eq!(cli.language("a.rs", "a.rs.txt", Direction::CodeToText, &config), "rust");
        assert_eq!(cli.language("-", "-", Direction::TextToCode, &config), "python");

        let cli = Cli::parse_from(["rstlit", "--language", "elisp"]);
        assert_eq!(cli.language("a.c.txt", "a.c", Direction::TextToCode, &config), "elisp");
    }

    #[test]
    fn test_converter_options_precedence() {
        let config: Config =
            toml::from_str("[converter]\nCodeIndent = 4\nHeaderString = \"..\"").unwrap();
        let cli = Cli::parse_from(["rstlit", "--codeindent", "3", "-s"]);
        let options = cli.converter_options("c", &config);
        assert_eq!(options.language, "c");
        assert_eq!(options.codeindent, 3);
        assert!(options.strip);

        let cli = Cli::parse_from(["rstlit"]);
        assert_eq!(cli.converter_options("c", &config).codeindent, 4);
    }

    #[test]
    fn test_overwrite_mode_falls_back_to_config() {
        let config: Config = toml::from_str("[converter]\nOverwrite = \"no\"").unwrap();
        let cli = Cli::parse_from(["rstlit"]);
        assert_eq!(cli.overwrite_mode(&config), OverwriteMode::No);

        let cli = Cli::parse_from(["rstlit", "--overwrite", "update"]);
        assert_eq!(cli.overwrite_mode(&config), OverwriteMode::Update);
    }
}

//! Language tables.
//!
//! Maps language names to the comment string that marks documentation in
//! the code source, and file extensions to language names.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Extensions of the text (reStructuredText) source.
pub const TEXT_EXTENSIONS: &[&str] = &[".txt"];

/// Comment string for each canonical language name.
pub static COMMENT_STRINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Hash comments
    m.insert("python", "# ");
    m.insert("shell", "# ");
    m.insert("ruby", "# ");
    m.insert("perl", "# ");
    m.insert("r", "# ");
    m.insert("make", "# ");
    m.insert("yaml", "# ");
    m.insert("toml", "# ");

    // Percent comments
    m.insert("slang", "% ");
    m.insert("latex", "% ");
    m.insert("matlab", "% ");
    m.insert("erlang", "% ");

    // C-family line comments
    m.insert("c", "// ");
    m.insert("c++", "// ");
    m.insert("java", "// ");
    m.insert("javascript", "// ");
    m.insert("typescript", "// ");
    m.insert("rust", "// ");
    m.insert("go", "// ");
    m.insert("css", "// ");
    m.insert("scala", "// ");
    m.insert("swift", "// ");
    m.insert("kotlin", "// ");

    // Lisp family
    m.insert("lisp", ";; ");
    m.insert("elisp", ";; ");
    m.insert("scheme", ";; ");
    m.insert("clojure", ";; ");

    // Double dash
    m.insert("haskell", "-- ");
    m.insert("lua", "-- ");
    m.insert("sql", "-- ");
    m.insert("ada", "-- ");

    m
});

/// Aliases resolved to canonical language names.
pub static LANGUAGE_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("py", "python");
    m.insert("python3", "python");
    m.insert("sh", "shell");
    m.insert("bash", "shell");
    m.insert("zsh", "shell");
    m.insert("rb", "ruby");
    m.insert("pl", "perl");
    m.insert("tex", "latex");
    m.insert("cpp", "c++");
    m.insert("cxx", "c++");
    m.insert("js", "javascript");
    m.insert("ts", "typescript");
    m.insert("rs", "rust");
    m.insert("golang", "go");
    m.insert("el", "elisp");
    m.insert("emacs-lisp", "elisp");
    m.insert("scm", "scheme");
    m.insert("clj", "clojure");
    m.insert("hs", "haskell");
    m
});

/// Language for each recognised code file extension.
pub static CODE_EXTENSIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(".py", "python");
    m.insert(".sh", "shell");
    m.insert(".rb", "ruby");
    m.insert(".pl", "perl");
    m.insert(".r", "r");
    m.insert(".sl", "slang");
    m.insert(".tex", "latex");
    m.insert(".m", "matlab");
    m.insert(".erl", "erlang");
    m.insert(".c", "c");
    m.insert(".h", "c");
    m.insert(".cpp", "c++");
    m.insert(".cc", "c++");
    m.insert(".cxx", "c++");
    m.insert(".hpp", "c++");
    m.insert(".java", "java");
    m.insert(".js", "javascript");
    m.insert(".ts", "typescript");
    m.insert(".rs", "rust");
    m.insert(".go", "go");
    m.insert(".css", "css");
    m.insert(".scala", "scala");
    m.insert(".swift", "swift");
    m.insert(".kt", "kotlin");
    m.insert(".lisp", "lisp");
    m.insert(".el", "elisp");
    m.insert(".scm", "scheme");
    m.insert(".clj", "clojure");
    m.insert(".hs", "haskell");
    m.insert(".lua", "lua");
    m.insert(".sql", "sql");
    m.insert(".adb", "ada");
    m
});

/// Lower-case a language name and resolve aliases.
///
/// # Example
///
/// ```
/// use rstlit_config::languages::normalize_language;
/// assert_eq!(normalize_language("Py"), "python");
/// assert_eq!(normalize_language("C++"), "c++");
/// ```
pub fn normalize_language(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    LANGUAGE_ALIASES
        .get(lower.as_str())
        .map(|canonical| canonical.to_string())
        .unwrap_or(lower)
}

/// Built-in comment string for a language (aliases allowed).
pub fn comment_string(language: &str) -> Option<&'static str> {
    let language = normalize_language(language);
    COMMENT_STRINGS.get(language.as_str()).copied()
}

/// Built-in language for a code file extension such as `".py"`.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    CODE_EXTENSIONS
        .get(extension.to_lowercase().as_str())
        .copied()
}

/// Is `extension` (with leading dot) a text source extension?
pub fn is_text_extension(extension: &str) -> bool {
    TEXT_EXTENSIONS.contains(&extension)
}

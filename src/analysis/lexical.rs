//! Lexical predicates over Python lesson source
//!
//! Trigger detection works on a stripped copy of the source where string
//! literals and `#` comments are blanked out, so a keyword inside a string
//! never fires a trigger. The output predictor keeps working on the raw
//! text because it needs the literal contents.

use once_cell::sync::Lazy;
use regex::Regex;

static PRINT_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bprint\s*\(").expect("valid print-call pattern"));
static FUNCTION_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bdef\b").expect("valid def pattern"));
static FOR_LOOP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfor\b").expect("valid for pattern"));
static WHILE_LOOP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bwhile\b").expect("valid while pattern"));
static CONDITIONAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bif\b").expect("valid if pattern"));
static IMPORT_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bimport\b").expect("valid import pattern"));
static BARE_EXCEPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bexcept\s*:").expect("valid bare-except pattern"));
static GLOBAL_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bglobal\b").expect("valid global pattern"));
static ERROR_HANDLING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:try\s*:|except\b)").expect("valid try/except pattern"));

pub fn has_print_call(stripped: &str) -> bool {
    PRINT_CALL.is_match(stripped)
}

pub fn has_function_def(stripped: &str) -> bool {
    FUNCTION_DEF.is_match(stripped)
}

pub fn has_for_loop(stripped: &str) -> bool {
    FOR_LOOP.is_match(stripped)
}

pub fn has_while_loop(stripped: &str) -> bool {
    WHILE_LOOP.is_match(stripped)
}

pub fn has_conditional(stripped: &str) -> bool {
    CONDITIONAL.is_match(stripped)
}

pub fn has_import(stripped: &str) -> bool {
    IMPORT_STMT.is_match(stripped)
}

/// Matches `except:` with nothing between the keyword and the colon.
/// A qualified clause like `except ValueError:` does not match.
pub fn has_bare_except(stripped: &str) -> bool {
    BARE_EXCEPT.is_match(stripped)
}

pub fn has_global(stripped: &str) -> bool {
    GLOBAL_STMT.is_match(stripped)
}

pub fn has_error_handling(stripped: &str) -> bool {
    ERROR_HANDLING.is_match(stripped)
}

#[derive(Clone, Copy, PartialEq)]
enum State {
    Code,
    Comment,
    Str { delim: char, triple: bool, escaped: bool },
}

/// Blank out string literal bodies and `#` comments, preserving the
/// character count and all newlines so positions stay comparable.
/// Quote delimiters themselves are kept; everything inside becomes a space.
pub fn strip_nonsemantic(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let chars: Vec<char> = source.chars().collect();
    let mut state = State::Code;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match state {
            State::Code => {
                if c == '#' {
                    state = State::Comment;
                    out.push(' ');
                } else if c == '"' || c == '\'' {
                    let triple = chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c);
                    if triple {
                        out.push(c);
                        out.push(c);
                        out.push(c);
                        i += 3;
                        state = State::Str { delim: c, triple: true, escaped: false };
                        continue;
                    }
                    out.push(c);
                    state = State::Str { delim: c, triple: false, escaped: false };
                } else {
                    out.push(c);
                }
            }
            State::Comment => {
                if c == '\n' {
                    state = State::Code;
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            State::Str { delim, triple, escaped } => {
                if escaped {
                    out.push(' ');
                    state = State::Str { delim, triple, escaped: false };
                } else if c == '\\' {
                    out.push(' ');
                    state = State::Str { delim, triple, escaped: true };
                } else if c == delim {
                    if triple {
                        if chars.get(i + 1) == Some(&delim) && chars.get(i + 2) == Some(&delim) {
                            out.push(delim);
                            out.push(delim);
                            out.push(delim);
                            i += 3;
                            state = State::Code;
                            continue;
                        }
                        out.push(' ');
                    } else {
                        out.push(delim);
                        state = State::Code;
                    }
                } else if c == '\n' {
                    // Unterminated single-quoted strings end at the line break
                    out.push('\n');
                    if !triple {
                        state = State::Code;
                    }
                } else {
                    out.push(' ');
                }
            }
        }
        i += 1;
    }

    out
}

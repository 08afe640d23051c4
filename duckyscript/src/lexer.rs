use logos::Logos;

/// Commands with dedicated handling. Any other first word is read as a key
/// combo.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    #[token("delay", ignore(ascii_case))]
    Delay,
    #[token("string", ignore(ascii_case))]
    Str,
    #[token("enter", ignore(ascii_case))]
    Enter,
    #[token("tab", ignore(ascii_case))]
    Tab,
    #[token("esc", ignore(ascii_case))]
    Esc,
    #[token("backspace", ignore(ascii_case))]
    Backspace,
}

impl Command {
    /// Classifies a command word. The token has to cover the whole word, so
    /// `DELAYED` stays a key-combo word.
    pub fn classify(word: &str) -> Option<Command> {
        let mut lexer = Command::lexer(word);
        match lexer.next() {
            Some(Ok(command)) if lexer.span().end == word.len() => Some(command),
            _ => None,
        }
    }

    /// Key typed by the single-key shortcut commands.
    pub const fn key_name(self) -> Option<&'static str> {
        match self {
            Command::Enter => Some("enter"),
            Command::Tab => Some("tab"),
            Command::Esc => Some("esc"),
            Command::Backspace => Some("backspace"),
            Command::Delay | Command::Str => None,
        }
    }
}

/// A non-blank, non-comment script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The trimmed line.
    pub text: &'a str,
    pub word: &'a str,
    /// Everything after the first word, trimmed. Empty when absent.
    pub argument: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Returns `None` for blank and comment lines.
    pub fn parse(number: usize, raw: &'a str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() || is_comment(text) {
            return None;
        }

        let (word, argument) = match text.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (text, ""),
        };

        Some(Self {
            number,
            text,
            word,
            argument,
        })
    }
}

/// `REM`, `//` and `#` start a comment line. `REM` is case-sensitive, so a
/// line such as `rem a` still presses `a`.
pub fn is_comment(line: &str) -> bool {
    line.starts_with("REM") || line.starts_with("//") || line.starts_with('#')
}

/// Characters that end a script line. `\r\n` counts as a single break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits a script into lines on LF, CRLF, lone CR and the other Unicode line
/// separators. A trailing break does not start an extra line.
pub fn split_lines(script: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(script).filter(|s| !s.is_empty());
    std::iter::from_fn(move || {
        let text = rest?;
        match text.char_indices().find(|(_, c)| LINE_BREAKS.contains(c)) {
            Some((at, c)) => {
                let width = if text[at..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = Some(&text[at + width..]).filter(|s| !s.is_empty());
                Some(&text[..at])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

use crate::{
    codegen::{
        combo::KeyCombo,
        compiler::CompileOptions,
        report::{CompiledStream, MAX_KEYS, delay_frames},
        symbols::{Modifiers, lookup_key},
        typing::keystroke,
    },
    error::{Diagnostic, LineError, LineResult},
    invalid_delay,
    lexer::{Command, SourceLine, split_lines},
};
use log::{debug, warn};

/// Compiles scripts into HID report streams.
///
/// Holds no state between runs; one `Compiler` can serve any number of
/// scripts, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub const fn new() -> Self {
        Self::with_options(CompileOptions::new())
    }

    pub const fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Compiles `script` top to bottom.
    ///
    /// A line that fails contributes no bytes and one [`Diagnostic`]; every
    /// other line is still compiled and appended in order.
    pub fn compile(&self, script: &str) -> (CompiledStream, Vec<Diagnostic>) {
        let mut stream = CompiledStream::new();
        let mut diagnostics = Vec::new();

        for (index, raw) in split_lines(script).enumerate() {
            let Some(line) = SourceLine::parse(index + 1, raw) else {
                continue;
            };

            match self.compile_line(&line) {
                Ok(bytes) => stream.append(bytes),
                Err(error) => {
                    warn!("line {}: {}: {error}", line.number, line.text);
                    diagnostics.push(Diagnostic {
                        line: line.number,
                        text: line.text.to_string(),
                        error,
                    });
                }
            }
        }

        debug!(
            "compiled {} reports, {} failed lines",
            stream.report_count(),
            diagnostics.len()
        );
        (stream, diagnostics)
    }

    fn compile_line(&self, line: &SourceLine) -> LineResult<CompiledStream> {
        let command = Command::classify(line.word);
        debug!("line {}: {:?} {:?}", line.number, command, line.argument);

        match command {
            Some(Command::Delay) => self.compile_delay(line.argument),
            Some(Command::Str) => self.compile_string(line.argument),
            Some(shortcut) => Ok(self.compile_shortcut(shortcut)),
            None => self.compile_combo(line.word, line.argument),
        }
    }

    fn compile_delay(&self, argument: &str) -> LineResult<CompiledStream> {
        let ms: u32 = argument
            .parse()
            .map_err(|e| invalid_delay!(argument, e))?;

        if ms > self.options.max_delay_ms {
            return Err(LineError::DelayTooLong(ms));
        }

        let mut stream = CompiledStream::new();
        stream
            .idle(delay_frames(ms))
            .map_err(|_| LineError::DelayTooLong(ms))?;
        Ok(stream)
    }

    fn compile_string(&self, text: &str) -> LineResult<CompiledStream> {
        let mut stream = CompiledStream::new();

        for c in text.chars() {
            match keystroke(c) {
                Some((modifiers, key)) => stream.press(modifiers, &[key]),
                None if self.options.strict => return Err(LineError::UnmappedCharacter(c)),
                None => debug!("no key types {c:?}, skipped"),
            }
        }

        Ok(stream)
    }

    fn compile_shortcut(&self, command: Command) -> CompiledStream {
        let mut stream = CompiledStream::new();
        if let Some(key) = command.key_name().and_then(lookup_key) {
            stream.press(Modifiers::empty(), &[key]);
        }
        stream
    }

    fn compile_combo(&self, word: &str, argument: &str) -> LineResult<CompiledStream> {
        let mut combo = KeyCombo::resolve(word);
        if !argument.is_empty() {
            combo = combo.merge(KeyCombo::resolve(argument));
        }

        if self.options.strict {
            if let Some(token) = combo.unresolved.first() {
                return Err(LineError::UnknownToken(token.clone()));
            }
            if combo.keys.len() > MAX_KEYS {
                return Err(LineError::TooManyKeys(combo.keys.len()));
            }
        }

        let mut stream = CompiledStream::new();
        if combo.has_keys() {
            stream.press(combo.modifiers, &combo.keys);
        }
        Ok(stream)
    }
}

/// Compiles `script` with the default, permissive options.
pub fn compile(script: &str) -> (CompiledStream, Vec<Diagnostic>) {
    Compiler::new().compile(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> Compiler {
        Compiler::with_options(CompileOptions::new().strict(true))
    }

    #[test]
    fn delay_emits_idle_reports() {
        let (stream, diagnostics) = compile("DELAY 14");
        assert!(diagnostics.is_empty());
        assert_eq!(stream.as_bytes(), &[0; 16]);
    }

    #[test]
    fn delay_rejects_negative_and_missing_values() {
        for script in ["DELAY -5", "DELAY", "DELAY 1.5", "DELAY 99999999999"] {
            let (stream, diagnostics) = compile(script);
            assert!(stream.is_empty(), "{script}");
            assert!(
                matches!(diagnostics[0].error, LineError::InvalidDelay { .. }),
                "{script}"
            );
        }
    }

    #[test]
    fn overlong_delay_is_contained_to_its_line() {
        let (stream, diagnostics) = compile("DELAY 4294967295\nENTER");
        assert_eq!(stream.report_count(), 3);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].error, LineError::DelayTooLong(u32::MAX));
    }

    #[test]
    fn delay_limit_is_configurable() {
        let compiler = Compiler::with_options(CompileOptions::new().max_delay_ms(1000));
        let (stream, diagnostics) = compiler.compile("DELAY 1000\nDELAY 1001");
        assert_eq!(stream.report_count(), delay_frames(1000));
        assert_eq!(diagnostics[0].line, 2);
        assert_eq!(diagnostics[0].error, LineError::DelayTooLong(1001));
    }

    #[test]
    fn shortcuts_ignore_case_and_arguments() {
        let (stream, _) = compile("tab\nEsc now");
        let reports: Vec<_> = stream.reports().collect();
        assert_eq!(reports.len(), 6);
        assert_eq!(reports[0].keys()[0], 0x2B);
        assert_eq!(reports[3].keys()[0], 0x29);
    }

    #[test]
    fn combo_merges_command_word_and_argument() {
        let (stream, _) = compile("CTRL-ALT t");
        assert_eq!(&stream.as_bytes()[..8], &[0x05, 0, 0x17, 0, 0, 0, 0, 0]);
        assert_eq!(stream.len(), 24);
    }

    #[test]
    fn modifier_only_line_is_silent() {
        let (stream, diagnostics) = compile("SHIFT");
        assert!(stream.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn string_skips_characters_without_keys() {
        let (stream, diagnostics) = compile("STRING a\tb!");
        assert!(diagnostics.is_empty());
        assert_eq!(stream.report_count(), 6);
    }

    #[test]
    fn strict_mode_rejects_unmapped_characters() {
        let (stream, diagnostics) = strict().compile("STRING ab!\nSTRING c");
        assert_eq!(stream.report_count(), 3);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(diagnostics[0].error, LineError::UnmappedCharacter('!'));
    }

    #[test]
    fn strict_mode_rejects_unknown_tokens() {
        let (stream, diagnostics) = strict().compile("CTRL-ALT delete");
        assert!(stream.is_empty());
        assert_eq!(
            diagnostics[0].error,
            LineError::UnknownToken("delete".to_string())
        );
    }

    #[test]
    fn strict_mode_rejects_more_than_six_keys() {
        let (stream, diagnostics) = strict().compile("a-b-c-d-e-f-g");
        assert!(stream.is_empty());
        assert_eq!(diagnostics[0].error, LineError::TooManyKeys(7));
    }

    #[test]
    fn strict_mode_accepts_valid_scripts() {
        let script = "GUI r\nSTRING cmd\nENTER\nDELAY 100";
        assert_eq!(strict().compile(script), compile(script));
    }

    #[test]
    fn diagnostic_display() {
        let (_, diagnostics) = compile("\nDELAY soon");
        assert_eq!(
            diagnostics[0].to_string(),
            "line 2: DELAY soon: invalid delay `soon`: invalid digit found in string"
        );
    }
}

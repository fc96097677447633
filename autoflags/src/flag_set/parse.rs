//! Command-line parsing for [`FlagSet`].

use std::collections::VecDeque;

use super::{ErrorHandling, FlagSet};
use crate::FlagError;

impl FlagSet<'_> {
    /// Parses flags from `arguments`, which must not include the program
    /// name.
    ///
    /// Parsing stops before the first non-flag argument (`-` alone counts as
    /// a non-flag) or after the terminator `--`. The remaining arguments are
    /// available through [`FlagSet::args`].
    ///
    /// # Errors
    ///
    /// In [`ErrorHandling::ContinueOnError`] mode, returns the first parse
    /// failure after printing it and the usage message. Undeclared `-h` and
    /// `-help` produce [`FlagError::Help`].
    ///
    /// # Panics
    ///
    /// Panics on failure in [`ErrorHandling::PanicOnError`] mode.
    pub fn parse<I>(&mut self, arguments: I) -> Result<(), FlagError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.parsed = true;
        let mut args: VecDeque<String> = arguments.into_iter().map(Into::into).collect();
        let outcome = loop {
            match self.parse_one(&mut args) {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(err) => break Err(err),
            }
        };
        self.args = args.into();
        outcome.or_else(|err| self.handle_failure(err))
    }

    /// Parses the arguments of the running process, skipping `argv[0]`.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::parse`].
    ///
    /// # Panics
    ///
    /// See [`FlagSet::parse`].
    pub fn parse_command_line(&mut self) -> Result<(), FlagError> {
        self.parse(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Consumes one flag and its value; returns `false` when flags end.
    fn parse_one(&mut self, args: &mut VecDeque<String>) -> Result<bool, FlagError> {
        let starts_flag = args
            .front()
            .is_some_and(|arg| arg.len() >= 2 && arg.starts_with('-'));
        if !starts_flag {
            return Ok(false);
        }
        let Some(arg) = args.pop_front() else {
            return Ok(false);
        };
        let body = match arg.strip_prefix("--") {
            Some("") => return Ok(false),
            Some(rest) => rest,
            None => arg.strip_prefix('-').unwrap_or(&arg),
        };
        if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
            return Err(self.fail(FlagError::BadSyntax(arg.clone())));
        }
        let (name, inline) = body
            .split_once('=')
            .map_or((body, None), |(key, value)| (key, Some(value.to_owned())));

        let Some(flag) = self.formal.get_mut(name) else {
            if name == "help" || name == "h" {
                self.usage();
                return Err(FlagError::Help);
            }
            return Err(self.fail(FlagError::NotDefined(name.to_owned())));
        };

        let outcome = if flag.value.is_bool_flag() {
            match inline {
                Some(value) => flag.value.set(&value).map_err(|source| FlagError::InvalidBool {
                    name: name.to_owned(),
                    value,
                    source,
                }),
                None => flag
                    .value
                    .set("true")
                    .map_err(|source| FlagError::InvalidBoolFlag {
                        name: name.to_owned(),
                        source,
                    }),
            }
        } else {
            inline
                .or_else(|| args.pop_front())
                .ok_or_else(|| FlagError::MissingArgument(name.to_owned()))
                .and_then(|value| {
                    flag.value.set(&value).map_err(|source| FlagError::InvalidValue {
                        name: name.to_owned(),
                        value,
                        source,
                    })
                })
        };
        if let Err(err) = outcome {
            return Err(self.fail(err));
        }
        self.actual.insert(name.to_owned());
        Ok(true)
    }

    /// Reports `err` on the output followed by the usage message.
    fn fail(&mut self, err: FlagError) -> FlagError {
        self.write_output(&format!("{err}\n"));
        self.usage();
        err
    }

    fn handle_failure(&self, err: FlagError) -> Result<(), FlagError> {
        match self.error_handling {
            ErrorHandling::ContinueOnError => Err(err),
            ErrorHandling::ExitOnError => {
                let code = if matches!(err, FlagError::Help) { 0 } else { 2 };
                std::process::exit(code)
            }
            ErrorHandling::PanicOnError => raise(&err),
        }
    }
}

/// Unwinds with the failure's message.
fn raise(err: &FlagError) -> ! {
    panic!("{err}")
}

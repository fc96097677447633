//! The flag registry that owns flag definitions and parses arguments.
//!
//! [`FlagSet`] follows the classic single-dash convention: `-name value`,
//! `-name=value`, and a bare `-name` for boolean flags. Two leading dashes are
//! accepted as a synonym. Each flag writes through a borrowed target, so the
//! set cannot outlive the variables it populates.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use crate::value::{FuncValue, Scalar, ScalarValue, TextValue};
use crate::{FlagError, Value, ValueError};

mod parse;
mod usage;


/// How [`FlagSet::parse`] reacts to a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorHandling {
    /// Return the error to the caller.
    #[default]
    ContinueOnError,
    /// Exit the process: status 0 for a help request, 2 otherwise.
    ExitOnError,
    /// Panic with the error message.
    PanicOnError,
}

/// A single registered flag.
pub struct Flag<'a> {
    name: String,
    usage: String,
    default_value: String,
    value: Box<dyn Value + 'a>,
}

impl<'a> Flag<'a> {
    /// Name as it appears after the dash.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text supplied at registration.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Textual form of the value at registration time.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// The bound value.
    #[must_use]
    pub fn value(&self) -> &(dyn Value + 'a) {
        self.value.as_ref()
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("default_value", &self.default_value)
            .field("value", &self.value.to_string())
            .finish()
    }
}

type UsageFn<'a> = Box<dyn Fn(&FlagSet<'a>) -> String + Send + 'a>;

/// A set of defined flags bound to caller-owned storage.
///
/// # Examples
///
/// ```
/// use autoflags::{ErrorHandling, FlagSet};
///
/// let mut verbose = false;
/// let mut jobs = 0_isize;
/// {
///     let mut flags = FlagSet::new("build", ErrorHandling::ContinueOnError);
///     flags.bool_var(&mut verbose, "v", false, "verbose output").unwrap();
///     flags.int_var(&mut jobs, "jobs", 1, "parallel jobs").unwrap();
///     flags.parse(["-v", "-jobs=4", "target"]).unwrap();
///     assert_eq!(flags.args(), ["target"]);
/// }
/// assert!(verbose);
/// assert_eq!(jobs, 4);
/// ```
pub struct FlagSet<'a> {
    name: String,
    error_handling: ErrorHandling,
    parsed: bool,
    formal: BTreeMap<String, Flag<'a>>,
    actual: BTreeSet<String>,
    args: Vec<String>,
    output: Option<Box<dyn Write + Send + 'a>>,
    usage: Option<UsageFn<'a>>,
}

impl<'a> FlagSet<'a> {
    /// Creates an empty set. `name` appears in usage and error output.
    #[must_use]
    pub fn new(name: impl Into<String>, error_handling: ErrorHandling) -> Self {
        Self {
            name: name.into(),
            error_handling,
            parsed: false,
            formal: BTreeMap::new(),
            actual: BTreeSet::new(),
            args: Vec::new(),
            output: None,
            usage: None,
        }
    }

    /// Creates the default set for the running program.
    ///
    /// The set is named after `argv[0]` and exits the process on parse
    /// failures.
    #[must_use]
    pub fn command_line() -> Self {
        let program = std::env::args_os()
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(program, ErrorHandling::ExitOnError)
    }

    /// Name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured error handling mode.
    #[must_use]
    pub const fn error_handling(&self) -> ErrorHandling {
        self.error_handling
    }

    /// Redirects usage and error messages; the default is standard error.
    pub fn set_output<W>(&mut self, output: W)
    where
        W: Write + Send + 'a,
    {
        self.output = Some(Box::new(output));
    }

    /// Replaces the usage message printed on `-help` and on parse failures.
    pub fn set_usage<F>(&mut self, usage: F)
    where
        F: Fn(&Self) -> String + Send + 'a,
    {
        self.usage = Some(Box::new(usage));
    }

    /// Defines a flag backed by an arbitrary [`Value`].
    ///
    /// The value's current rendering becomes the flag's default.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::Redefined`] if `name` is taken, or
    /// [`FlagError::InvalidName`] if `name` starts with `-` or contains `=`.
    pub fn var<V>(&mut self, value: V, name: &str, usage: &str) -> Result<(), FlagError>
    where
        V: Value + 'a,
    {
        self.check_definition(name)?;
        self.insert(Box::new(value), name, usage);
        Ok(())
    }

    /// Defines a flag for a built-in scalar, assigning `value` to `target`.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn scalar_var<T>(
        &mut self,
        target: &'a mut T,
        name: &str,
        value: T,
        usage: &str,
    ) -> Result<(), FlagError>
    where
        T: Scalar + 'a,
    {
        self.check_definition(name)?;
        *target = value;
        self.insert(Box::new(ScalarValue::new(target)), name, usage);
        Ok(())
    }

    /// Defines a machine-word integer flag.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn int_var(
        &mut self,
        target: &'a mut isize,
        name: &str,
        value: isize,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.scalar_var(target, name, value, usage)
    }

    /// Defines a 64-bit integer flag.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn int64_var(
        &mut self,
        target: &'a mut i64,
        name: &str,
        value: i64,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.scalar_var(target, name, value, usage)
    }

    /// Defines a machine-word unsigned integer flag.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn uint_var(
        &mut self,
        target: &'a mut usize,
        name: &str,
        value: usize,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.scalar_var(target, name, value, usage)
    }

    /// Defines a 64-bit unsigned integer flag.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn uint64_var(
        &mut self,
        target: &'a mut u64,
        name: &str,
        value: u64,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.scalar_var(target, name, value, usage)
    }

    /// Defines a 64-bit float flag.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn float64_var(
        &mut self,
        target: &'a mut f64,
        name: &str,
        value: f64,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.scalar_var(target, name, value, usage)
    }

    /// Defines a boolean flag.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn bool_var(
        &mut self,
        target: &'a mut bool,
        name: &str,
        value: bool,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.scalar_var(target, name, value, usage)
    }

    /// Defines a string flag.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn string_var(
        &mut self,
        target: &'a mut String,
        name: &str,
        value: impl Into<String>,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.scalar_var(target, name, value.into(), usage)
    }

    /// Defines a duration flag accepting forms such as `15m` or `1500ms`.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn duration_var(
        &mut self,
        target: &'a mut Duration,
        name: &str,
        value: Duration,
        usage: &str,
    ) -> Result<(), FlagError> {
        self.scalar_var(target, name, value, usage)
    }

    /// Defines a flag for any type with `FromStr` and `Display`.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn text_var<T>(
        &mut self,
        target: &'a mut T,
        name: &str,
        value: T,
        usage: &str,
    ) -> Result<(), FlagError>
    where
        T: FromStr + fmt::Display + Send + 'a,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.check_definition(name)?;
        *target = value;
        self.insert(Box::new(TextValue::new(target)), name, usage);
        Ok(())
    }

    /// Defines a flag that calls `callback` with each argument it receives.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn func<F>(&mut self, name: &str, usage: &str, callback: F) -> Result<(), FlagError>
    where
        F: FnMut(&str) -> Result<(), ValueError> + Send + 'a,
    {
        self.var(FuncValue::new(callback), name, usage)
    }

    /// Defines a flag that may appear bare; `callback` then receives `"true"`.
    ///
    /// # Errors
    ///
    /// See [`FlagSet::var`].
    pub fn bool_func<F>(&mut self, name: &str, usage: &str, callback: F) -> Result<(), FlagError>
    where
        F: FnMut(&str) -> Result<(), ValueError> + Send + 'a,
    {
        self.var(FuncValue::boolean(callback), name, usage)
    }

    /// Looks up a defined flag.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.formal.get(name)
    }

    /// Sets a defined flag as if it appeared on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::NoSuchFlag`] for unknown names and
    /// [`FlagError::Value`] when the value rejects `value`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError> {
        let flag = self
            .formal
            .get_mut(name)
            .ok_or_else(|| FlagError::NoSuchFlag(name.to_owned()))?;
        flag.value.set(value)?;
        self.actual.insert(name.to_owned());
        Ok(())
    }

    /// All defined flags in lexicographical order.
    pub fn flags(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.formal.values()
    }

    /// Calls `visitor` for every defined flag in lexicographical order.
    pub fn visit_all<F>(&self, visitor: F)
    where
        F: FnMut(&Flag<'a>),
    {
        self.flags().for_each(visitor);
    }

    /// Calls `visitor` for every flag that has been set, in lexicographical
    /// order.
    pub fn visit<F>(&self, visitor: F)
    where
        F: FnMut(&Flag<'a>),
    {
        self.actual
            .iter()
            .filter_map(|name| self.formal.get(name))
            .for_each(visitor);
    }

    /// Number of flags that have been set.
    #[must_use]
    pub fn n_flag(&self) -> usize {
        self.actual.len()
    }

    /// Reports whether [`FlagSet::parse`] has been called.
    #[must_use]
    pub const fn parsed(&self) -> bool {
        self.parsed
    }

    /// Arguments remaining after flag processing.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The `index`-th remaining argument.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Number of arguments remaining after flag processing.
    #[must_use]
    pub const fn narg(&self) -> usize {
        self.args.len()
    }

    fn check_definition(&mut self, name: &str) -> Result<(), FlagError> {
        let rejection = if name.starts_with('-') {
            Some("begins with -")
        } else if name.contains('=') {
            Some("contains =")
        } else {
            None
        };
        if let Some(reason) = rejection {
            return Err(FlagError::InvalidName {
                name: name.to_owned(),
                reason,
            });
        }
        if self.formal.contains_key(name) {
            let err = FlagError::Redefined {
                set: self.name.clone(),
                name: name.to_owned(),
            };
            self.write_output(&format!("{err}\n"));
            return Err(err);
        }
        Ok(())
    }

    fn insert(&mut self, value: Box<dyn Value + 'a>, name: &str, usage: &str) {
        let flag = Flag {
            name: name.to_owned(),
            usage: usage.to_owned(),
            default_value: value.to_string(),
            value,
        };
        self.formal.insert(name.to_owned(), flag);
    }
}

impl fmt::Debug for FlagSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("error_handling", &self.error_handling)
            .field("parsed", &self.parsed)
            .field("formal", &self.formal.values().collect::<Vec<_>>())
            .field("actual", &self.actual)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

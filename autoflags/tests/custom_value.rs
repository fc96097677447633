//! Field types implementing `Value` bind through their own parsing.

use std::fmt;

use anyhow::{Result, ensure};
use autoflags::{ErrorHandling, FlagError, FlagSet, Flags, Value, ValueError, define_with_registry};
use rstest::rstest;

/// Comma-separated host list accumulating over repeated flags.
#[derive(Debug, Default, Clone, PartialEq)]
struct Hosts(Vec<String>);

impl fmt::Display for Hosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl Value for Hosts {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        self.0.extend(text.split(',').map(str::to_owned));
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        "hosts"
    }
}

/// Switch counting how often it was given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Verbosity(u8);

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Value for Verbosity {
    fn set(&mut self, text: &str) -> Result<(), ValueError> {
        match text {
            "true" => self.0 = self.0.saturating_add(1),
            "false" => self.0 = 0,
            other => return Err(ValueError::Invalid(format!("not a switch: {other}"))),
        }
        Ok(())
    }

    fn is_bool_flag(&self) -> bool {
        true
    }

    fn is_zero_text(&self, text: &str) -> bool {
        text == "0"
    }
}

#[derive(Debug, Default, Flags)]
struct Config {
    #[flag = "host,hosts to contact"]
    hosts: Hosts,
    #[flag = "v,verbosity"]
    verbosity: Verbosity,
    #[flag = "port"]
    port: u64,
}

#[rstest]
fn value_types_parse_their_own_arguments() -> Result<()> {
    let mut config = Config {
        hosts: Hosts(vec!["localhost".to_owned()]),
        ..Config::default()
    };
    {
        let mut flags = FlagSet::new("test", ErrorHandling::ContinueOnError);
        define_with_registry(&mut flags, &mut config)?;
        flags.parse(["-host", "a,b", "-v", "-v", "--host=c", "-port=80"])?;
    }
    ensure!(config.hosts.0 == ["localhost", "a", "b", "c"]);
    ensure!(config.verbosity == Verbosity(2));
    ensure!(config.port == 80);
    Ok(())
}

#[rstest]
fn value_defaults_are_rendered_at_registration() -> Result<()> {
    let mut config = Config {
        hosts: Hosts(vec!["a".to_owned(), "b".to_owned()]),
        ..Config::default()
    };
    let mut flags = FlagSet::new("test", ErrorHandling::ContinueOnError);
    define_with_registry(&mut flags, &mut config)?;
    ensure!(flags.lookup("host").map(|flag| flag.default_value()) == Some("a,b"));
    ensure!(flags.lookup("v").map(|flag| flag.default_value()) == Some("0"));
    Ok(())
}

#[rstest]
fn value_errors_name_the_flag() -> Result<()> {
    let mut config = Config::default();
    let mut flags = FlagSet::new("test", ErrorHandling::ContinueOnError);
    flags.set_output(std::io::sink());
    define_with_registry(&mut flags, &mut config)?;
    let Err(err) = flags.parse(["-v=maybe"]) else {
        return Err(anyhow::anyhow!("invalid switch accepted"));
    };
    ensure!(matches!(err, FlagError::InvalidBool { .. }), "got {err:?}");
    ensure!(err.to_string().contains("not a switch: maybe"), "got {err}");
    Ok(())
}

#[derive(Flags)]
struct Dynamic {
    #[flag = "level"]
    level: Box<dyn Value>,
}

#[rstest]
fn boxed_trait_objects_bind_as_values() -> Result<()> {
    let mut config = Dynamic {
        level: Box::new(Verbosity::default()),
    };
    {
        let mut flags = FlagSet::new("test", ErrorHandling::ContinueOnError);
        define_with_registry(&mut flags, &mut config)?;
        flags.parse(["-level"])?;
    }
    ensure!(config.level.to_string() == "1");
    Ok(())
}

//! User example: expose a configuration struct as flags, parse the process
//! arguments into it and print the result.
//!
//! ```text
//! cargo run --example user -- -name "Jane Roe" -age 29 -timeout 2m
//! ```
//!
//! Set `RUST_LOG=autoflags=debug` to see each field as it is bound.

use std::io::{self, Write as _};
use std::time::Duration;

use autoflags::Flags;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Flags)]
struct UserConfig {
    #[flag = "name,name of `user`"]
    name: String,
    #[flag = "age,age in years"]
    age: usize,
    #[flag = "timeout,how long to wait for a reply"]
    timeout: Duration,
    married: bool, // not exposed
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut config = UserConfig {
        name: "John Doe".to_owned(),
        age: 34,
        timeout: Duration::from_secs(30),
        married: false,
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "before: {config:?}")?;
    {
        let mut flags = autoflags::define(&mut config)?;
        flags.parse_command_line()?;
        if flags.narg() > 0 {
            writeln!(stdout, "positional: {:?}", flags.args())?;
        }
    }
    writeln!(stdout, "after:  {config:?}")?;
    Ok(())
}

//! Entry validation of `define` and `define_with_registry`.

use anyhow::{Result, anyhow, ensure};
use autoflags::{BindError, ErrorHandling, FlagSet, Flags, define, define_with_registry};
use rstest::rstest;

#[derive(Debug, Default, Flags)]
struct Config {
    #[flag = "name"]
    name: String,
}

#[derive(Debug, Flags)]
enum Mode {
    Fast,
}

fn define_err<'a, T>(config: T) -> Result<BindError>
where
    T: autoflags::Bindable<'a>,
{
    let mut flags = FlagSet::new("test", ErrorHandling::ContinueOnError);
    match define_with_registry(&mut flags, config) {
        Ok(()) => Err(anyhow!("binding should fail")),
        Err(err) => {
            ensure!(flags.flags().count() == 0, "flags were registered");
            Ok(err)
        }
    }
}

#[rstest]
fn values_passed_by_value_need_a_reference() -> Result<()> {
    ensure!(matches!(define_err(1_i64)?, BindError::PointerExpected));
    ensure!(matches!(define_err(2.5_f64)?, BindError::PointerExpected));
    ensure!(matches!(define_err("text")?, BindError::PointerExpected));
    ensure!(matches!(define_err(String::new())?, BindError::PointerExpected));
    ensure!(matches!(define_err(Config::default())?, BindError::PointerExpected));
    Ok(())
}

#[rstest]
fn absent_references_are_invalid() -> Result<()> {
    let err = define_err(None::<&mut Config>)?;
    ensure!(matches!(err, BindError::InvalidArgument));
    ensure!(err.to_string() == "mutable reference to a struct expected");
    Ok(())
}

#[rstest]
fn references_to_non_structs_are_invalid() -> Result<()> {
    let mut count = 7_u64;
    let mut names = vec!["a".to_owned()];
    let mut mode = Mode::Fast;
    let mut boxed = Box::new(Config::default());
    ensure!(matches!(define_err(&mut count)?, BindError::InvalidArgument));
    ensure!(matches!(define_err(&mut names)?, BindError::InvalidArgument));
    ensure!(matches!(define_err(&mut mode)?, BindError::InvalidArgument));
    ensure!(matches!(define_err(&mut boxed)?, BindError::InvalidArgument));
    Ok(())
}

#[rstest]
fn absent_registry_is_reported() {
    let mut config = Config::default();
    let result = define_with_registry(None, &mut config);
    assert!(matches!(result, Err(BindError::InvalidRegistry)));
    assert_eq!(
        result.map_err(|err| err.to_string()),
        Err("flag set expected".to_owned())
    );
}

#[rstest]
fn input_is_checked_before_the_registry() {
    assert!(matches!(
        define_with_registry(None, 5_u8),
        Err(BindError::PointerExpected)
    ));
    assert!(matches!(
        define_with_registry(None, None::<&mut Config>),
        Err(BindError::InvalidArgument)
    ));
}

#[rstest]
fn empty_structs_bind_without_flags() -> Result<()> {
    #[derive(Debug, Default, PartialEq, Flags)]
    struct Empty {}

    let mut config = Empty {};
    let flags = define(&mut config)?;
    ensure!(flags.flags().count() == 0);
    drop(flags);
    ensure!(config == Empty {});
    Ok(())
}

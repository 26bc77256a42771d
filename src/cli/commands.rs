//! CLI command implementations
//!
//! Commands are thin: build the profile form, apply the document, read the
//! result. All validation semantics live in the form and validation
//! modules.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::form::{Field, FieldArray, FieldGroup, FormResult};
use crate::observability::Logger;
use crate::validation::{collect, collect_qualified, Rule, ValidationFailure};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Builds the demo profile form: name fields, a nested address group, and
/// a dynamic alias list seeded with one blank entry.
pub fn profile_form() -> FormResult<FieldGroup> {
    let mut address = FieldGroup::new();
    address.insert_field("street", Field::with_rules(json!(""), vec![Rule::Required]))?;
    address.insert_field("city", Field::new(json!("")))?;
    address.insert_field("state", Field::new(json!("")))?;
    address.insert_field("zip", Field::with_rules(json!(""), vec![Rule::pattern(r"^\d{5}$")?]))?;

    let mut aliases = FieldArray::with_rules(vec![Rule::Required]);
    aliases.push_field(Field::with_rules(json!(""), vec![Rule::Required]));

    let mut form = FieldGroup::new();
    form.insert_field(
        "firstName",
        Field::with_rules(json!(""), vec![Rule::Required, Rule::MinLength(2)]),
    )?;
    form.insert_field("lastName", Field::new(json!("")))?;
    form.insert_group("address", address)?;
    form.insert_array("aliases", aliases)?;
    Ok(form)
}

/// Parses arguments and dispatches to the matching command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Executes a single parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Check { input, qualified } => check(&input, qualified),
        Command::Show => show(),
    }
}

fn check(input: &Path, qualified: bool) -> CliResult<()> {
    let content = fs::read_to_string(input)?;
    let document: Value = serde_json::from_str(&content)?;

    let mut form = profile_form()?;
    form.patch_value(&document)?;

    let failures = if qualified {
        collect_qualified(&form)
    } else {
        collect(&form)
    };
    report(&failures);

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::Invalid(failures.len()))
    }
}

fn show() -> CliResult<()> {
    let form = profile_form()?;
    println!("{}", serde_json::to_string_pretty(&form.value())?);
    Ok(())
}

/// Diagnostic trace of the collected failures; instrumentation only, the
/// exit status carries the actual verdict
fn report(failures: &[ValidationFailure]) {
    for failure in failures {
        Logger::warn(
            "VALIDATION_FAILURE",
            &[
                ("path", &failure.field_path.join(".")),
                ("kind", &failure.kind),
                ("detail", &failure.detail.to_string()),
            ],
        );
    }
    Logger::info("CHECK_COMPLETE", &[("failures", &failures.len().to_string())]);
}

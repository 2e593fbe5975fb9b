//! # formkit Builder Example
//!
//! A working form-builder session demonstrating the engine pipeline:
//!
//! - **Structure**: typed fields, a section with nested fields
//! - **Options**: comma-separated option editing on choice fields
//! - **Visibility**: a radio-driven show/hide condition
//! - **Values**: kind-checked edits with a live `watch_all()` echo
//! - **Submission**: validation gate, then the committed payload
//!
//! ## Running
//!
//! ```bash
//! cargo run --package builder-demo
//! ```

use anyhow::{anyhow, Context as _};

use formkit_core::logging::setup_logging;
use formkit_core::{EngineSettings, FieldId, FileRef, Value};
use formkit_engine::{FormController, SignalEquals};
use formkit_model::{FieldType, FIELD_TYPES};

fn main() -> anyhow::Result<()> {
    // Initialize logging - try a settings file first, fall back to defaults
    let settings = if std::path::Path::new("builder.toml").exists() {
        EngineSettings::from_toml_file("builder.toml").context("loading builder.toml")?
    } else {
        EngineSettings::default()
    };
    setup_logging(&settings);

    let mut form = FormController::with_settings(&settings);
    tracing::info!(form = %form.id(), "builder session started");

    // The add-field menu: one field of every supported type
    for (field_type, spec) in FIELD_TYPES.iter() {
        let id = form.add_field(*field_type);
        tracing::info!(%id, "added {}", spec.display);
    }

    let fields: Vec<_> = form.model().fields().iter().map(|f| f.id).collect();
    let ids: [FieldId; 8] = fields
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("unexpected field count"))?;
    let [text, dropdown, radio, file, checkbox, _country, date, phone] = ids;

    // Edit options on the choice fields
    form.update_field_options(dropdown, "Red,Green,Blue")?;
    form.update_field_options(radio, "show,hide")?;

    // A section with two nested fields
    let section = form.add_section();
    let nested = form.add_nested_field(section)?;
    form.add_nested_field(section)?;

    // The dropdown stays visible only while the radio says "show"
    form.bind_condition(dropdown, Box::new(SignalEquals::show_signal("field-2")));

    // Fill the form in
    form.set_value(text, Value::from("hello"))?;
    form.set_value(dropdown, Value::from("Green"))?;
    form.set_value(radio, Value::from("show"))?;
    form.set_value(checkbox, Value::from(true))?;
    form.set_value(file, Value::from(FileRef::new("resume.pdf")))?;
    form.set_value(
        date,
        chrono::NaiveDate::from_ymd_opt(2026, 8, 6)
            .map(Value::from)
            .ok_or_else(|| anyhow!("bad date"))?,
    )?;
    form.set_value(phone, Value::Phone("+1 555 0100".into()))?;
    form.set_value(nested, Value::from("nested text"))?;
    form.refresh_visibility()?;

    println!("Live form data:");
    println!("{}", serde_json::to_string_pretty(&form.watch_all())?);

    // First submit fails: the required slot is still empty
    match form.submit() {
        Ok(_) => return Err(anyhow!("submission unexpectedly passed validation")),
        Err(report) => {
            for failure in report.failures() {
                println!("validation: {failure}");
            }
        }
    }

    // Fix it and submit again
    form.set_named("requiredField", Value::from("I am here"));
    let payload = form.submit().map_err(|report| anyhow!("{report}"))?;

    println!("Committed payload:");
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}

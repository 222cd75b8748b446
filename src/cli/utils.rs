use std::io::Read;

use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(extra)) = data {
                response.as_object_mut().unwrap().extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output a row collection: pretty JSON, or one formatted line per row.
pub fn output_rows<T, F>(
    output_format: &OutputFormat,
    collection_name: &str,
    rows: &[T],
    format_row: F,
) -> anyhow::Result<()>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ collection_name: rows }))?
            );
        }
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("No {} found", collection_name);
            } else {
                for row in rows {
                    println!("{}", format_row(row));
                }
            }
        }
    }
    Ok(())
}

/// Read one JSON object from stdin, the input convention for create/update
/// commands.
pub fn read_json_stdin() -> anyhow::Result<Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let value: Value = serde_json::from_str(buffer.trim())?;
    anyhow::ensure!(value.is_object(), "expected a JSON object on stdin");
    Ok(value)
}

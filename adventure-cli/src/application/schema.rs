use crate::cli::SchemaTarget;
use crate::infrastructure::Result;
use adventure_core::{ActivityResult, Catalog};
use schemars::schema_for;
use std::io::Write;

pub fn print_schema<W: Write>(target: SchemaTarget, out: &mut W) -> Result<()> {
    let schema = match target {
        SchemaTarget::Result => schema_for!(ActivityResult),
        SchemaTarget::Catalog => schema_for!(Catalog),
    };

    serde_json::to_writer_pretty(&mut *out, &schema)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(target: SchemaTarget) -> serde_json::Value {
        let mut out = Vec::new();
        print_schema(target, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_result_schema() {
        let schema = schema(SchemaTarget::Result);

        assert_eq!(schema["title"], "ActivityResult");
        let required = schema["required"].as_array().unwrap();
        for field in ["name", "description", "address"] {
            assert!(required.iter().any(|r| r == field), "{} not required", field);
        }
        assert!(schema["properties"]["website"].is_object());
    }

    #[test]
    fn test_catalog_schema() {
        let schema = schema(SchemaTarget::Catalog);
        assert_eq!(schema["type"], "object");
    }
}

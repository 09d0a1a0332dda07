use crate::infrastructure::Result;
use adventure_core::Catalog;
use std::io::Write;

/// Write every category with its activity names
pub fn list_categories<W: Write>(catalog: &Catalog, json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, catalog)?;
        writeln!(out)?;
        return Ok(());
    }

    for (category, templates) in catalog.iter() {
        writeln!(out, "{} ({})", category, templates.len())?;
        for template in templates {
            writeln!(out, "  - {}", template.name)?;
        }
    }
    Ok(())
}

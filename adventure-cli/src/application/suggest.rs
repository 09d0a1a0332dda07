use crate::infrastructure::Result;
use adventure_core::{ActivityResult, ActivitySelector, Catalog};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Input of the `suggest` command
#[derive(Debug, Clone, Default)]
pub struct SuggestOptions {
    pub location: String,
    pub time: String,
    pub interests: Vec<String>,
    pub seed: Option<u64>,
    pub json: bool,
}

/// Pick an activity and write it to `out`
pub fn suggest<W: Write>(catalog: &Catalog, options: &SuggestOptions, out: &mut W) -> Result<ActivityResult> {
    let selector = ActivitySelector::new(catalog);

    let mut rng = options
        .seed
        .map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_entropy);

    let adventure = selector.select_with_rng(
        &options.location,
        &options.time,
        &options.interests,
        &mut rng,
    )?;

    tracing::info!("Suggested '{}' for {}", adventure.name, options.location);

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &adventure)?;
        writeln!(out)?;
    } else {
        write_text(&adventure, out)?;
    }

    Ok(adventure)
}

fn write_text<W: Write>(adventure: &ActivityResult, out: &mut W) -> Result<()> {
    writeln!(out, "{}", adventure.name)?;
    writeln!(out)?;
    writeln!(out, "{}", adventure.description)?;
    writeln!(out)?;
    writeln!(out, "📍 Address: {}", adventure.address)?;
    if let Some(website) = &adventure.website {
        writeln!(out, "🔗 Website: {}", website)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::CliError;
    use adventure_core::SelectionError;

    fn options(interests: &[&str]) -> SuggestOptions {
        SuggestOptions {
            location: "Springfield".to_string(),
            time: "evening".to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            seed: Some(3),
            json: false,
        }
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        let adventure = suggest(Catalog::builtin(), &options(&["Foodie"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(&adventure.name));
        assert!(text.contains("📍 Address: "));
        assert!(text.contains(", Springfield"));
        assert!(text.contains("This activity is perfect for a evening outing!"));
        assert!(text.contains("🔗 Website: https://"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        let mut opts = options(&[]);
        opts.json = true;

        let adventure = suggest(Catalog::builtin(), &opts, &mut out).unwrap();
        let parsed: ActivityResult = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed, adventure);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let first = suggest(Catalog::builtin(), &options(&[]), &mut Vec::new()).unwrap();
        let second = suggest(Catalog::builtin(), &options(&[]), &mut Vec::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_interest() {
        let result = suggest(Catalog::builtin(), &options(&["Nightlife"]), &mut Vec::new());

        assert!(matches!(
            result,
            Err(CliError::Selection(SelectionError::UnknownCategory(label))) if label == "Nightlife"
        ));
    }
}

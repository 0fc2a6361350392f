use super::{Outcome, usage};
use anyhow::Result;
use skillkit_core::landing;

pub const USAGE: &str = "Usage: generate_structure <ProductName> <Transformation> <Mechanism>";

/// Prints the landing-page JSON, or the usage line unless all three inputs
/// are present.
pub fn run(
    product_name: Option<&str>,
    transformation: Option<&str>,
    mechanism: Option<&str>,
) -> Result<Outcome<String>> {
    let (Some(product_name), Some(transformation), Some(mechanism)) =
        (product_name, transformation, mechanism)
    else {
        return Ok(usage(USAGE));
    };

    let json = landing::generate_structure(product_name, transformation, mechanism).to_json()?;
    println!("{}", json);

    Ok(Outcome::Done(json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_all_three_inputs() {
        let expected =
            Outcome::Usage("Usage: generate_structure <ProductName> <Transformation> <Mechanism>");

        assert_eq!(run(Some("P"), Some("T"), None).unwrap(), expected);
        assert_eq!(run(None, None, None).unwrap(), expected);
    }

    #[test]
    fn renders_json() {
        let Outcome::Done(json) = run(Some("Acme"), Some("Ship Faster"), Some("CI bots")).unwrap()
        else {
            panic!("expected JSON output");
        };
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["hero"]["header"], "Ship Faster with Acme");
        assert_eq!(parsed["footer_cta"], "Ready to transform your workflow?");
    }
}

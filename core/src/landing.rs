use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub header: String,
    pub subheader: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueProp {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Objection {
    pub q: String,
    pub a: String,
}

/// Fixed-shape landing page. Field order is the serialised order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPage {
    pub hero: Hero,
    pub social_proof: Vec<String>,
    pub value_props: Vec<ValueProp>,
    pub objection_handling: Objection,
    pub footer_cta: String,
}

pub fn generate_structure(
    product_name: &str,
    transformation: &str,
    mechanism: &str,
) -> LandingPage {
    LandingPage {
        hero: Hero {
            header: format!("{} with {}", transformation, product_name),
            subheader: format!(
                "The easiest way to {} using {}. No fluff, just results.",
                transformation.to_lowercase(),
                mechanism
            ),
            cta: "Start Now - It's Free".to_string(),
        },
        social_proof: vec![
            "Join 1,000+ experts using our tool.".to_string(),
            "As seen on TechCrunch & Product Hunt.".to_string(),
        ],
        value_props: vec![
            ValueProp {
                title: format!("Effortless {}", transformation),
                description: format!(
                    "We use {} to automate the hard parts of your workflow.",
                    mechanism
                ),
            },
            ValueProp {
                title: "Save Hours Every Week".to_string(),
                description: "Stop doing manual labor and focus on what matters.".to_string(),
            },
        ],
        objection_handling: Objection {
            q: "How long does setup take?".to_string(),
            a: "Less than 2 minutes. We've optimized every step.".to_string(),
        },
        footer_cta: "Ready to transform your workflow?".to_string(),
    }
}

impl LandingPage {
    /// Two-space indented JSON with every character outside printable ASCII
    /// written as a `\uXXXX` escape.
    pub fn to_json(&self) -> Result<String> {
        let pretty =
            serde_json::to_string_pretty(self).context("Failed to serialize landing page")?;
        Ok(escape_for_ascii(&pretty))
    }
}

// Characters needing escapes only occur inside string literals, so escaping
// the whole document is equivalent to escaping each string.
fn escape_for_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        // serde_json already escapes the C0 controls; DEL is left raw.
        if c.is_ascii() && c != '\u{7f}' {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

//! Placeholder substitution for templated files.

use crate::config::{ProjectConfig, PROTOCOL};

/// The named variables available to every templated file.
#[derive(Clone, Debug)]
pub struct TemplateVars {
    vars: Vec<(&'static str, String)>,
}

impl TemplateVars {
    /// Builds the variable set from the project configuration.
    ///
    /// Boolean feature toggles render as `true`/`false`; a missing git
    /// identity renders as the empty string.
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            vars: vec![
                ("projectName", config.slug.clone()),
                ("title", config.title.clone()),
                ("domain", config.domain.clone()),
                ("protocol", PROTOCOL.to_string()),
                ("author", config.author.clone().unwrap_or_default()),
                ("email", config.email.clone().unwrap_or_default()),
                ("source", config.source.clone()),
                ("destination", config.build.clone()),
                ("boneless", config.features.boneless.to_string()),
                ("jquery", config.features.jquery.to_string()),
            ],
        }
    }

    /// Looks up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Substitutes `{{name}}` placeholders in a template.
///
/// Substitution is exact string interpolation: there is no conditional
/// logic, and placeholders naming an unknown variable are left untouched so
/// that template-engine syntax inside copied assets survives rendering.
pub fn render(template: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                match vars.get(after[..end].trim()) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + end + 4]),
                }

                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Features;

    fn vars() -> TemplateVars {
        TemplateVars::from_config(&ProjectConfig::new(
            "Test Site",
            "test.com",
            None,
            None,
            Some("Jo Bloggs".to_string()),
            Some("jo@test.com".to_string()),
            Features {
                boneless: true,
                jquery: false,
            },
        ))
    }

    #[test]
    fn substitutes_variables() {
        assert_eq!(
            render("{{protocol}}://{{domain}} by {{author}} <{{email}}>", &vars()),
            "http://test.com by Jo Bloggs <jo@test.com>"
        );
    }

    #[test]
    fn substitutes_booleans_and_whitespace_padded_names() {
        assert_eq!(
            render("boneless: {{ boneless }}, jquery: {{jquery}}", &vars()),
            "boneless: true, jquery: false"
        );
    }

    #[test]
    fn leaves_unknown_placeholders_untouched() {
        assert_eq!(
            render("{{projectName}} keeps {{ unknown.var }}", &vars()),
            "test-site keeps {{ unknown.var }}"
        );
    }

    #[test]
    fn handles_unterminated_placeholder() {
        assert_eq!(render("tail {{oops", &vars()), "tail {{oops");
    }
}

use fogg_domain::Template;
use handlebars::{Handlebars, no_escape};
use include_dir::{Dir, include_dir};
use lazy_static::lazy_static;
use serde::Serialize;

use crate::{Error, Result};

static TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Builds the Handlebars registry used for every prompt: strict mode, no HTML
/// escaping, and every file at the top of `templates/` registered by its
/// file name. Panics if an embedded template does not parse.
fn create_handlebar() -> Handlebars<'static> {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);
    hb.register_escape_fn(no_escape);

    for file in TEMPLATES.files() {
        let name = file.path().to_string_lossy();
        let content = file
            .contents_utf8()
            .unwrap_or_else(|| panic!("embedded template '{}' is not valid UTF-8", name));
        hb.register_template_string(&name, content)
            .unwrap_or_else(|e| panic!("failed to register template '{}': {}", name, e));
    }

    hb
}

lazy_static! {
    static ref HANDLEBARS: Handlebars<'static> = create_handlebar();
}

/// Renders the embedded prompt templates.
#[derive(Clone, Copy)]
pub struct TemplateEngine {
    handlebar: &'static Handlebars<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self { handlebar: &HANDLEBARS }
    }
}

impl TemplateEngine {
    pub fn render<V: Serialize>(&self, template: Template<V>, data: &V) -> Result<String> {
        self.handlebar
            .render(template.name, data)
            .map_err(|source| Error::Template { name: template.name, source })
    }
}

//! Page templates
//!
//! Templates are compiled into the binary and rendered with minijinja.
//! Handlers hand over fully prepared data; templates hold no logic beyond
//! loops and conditionals.

use crate::error::AppError;
use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("stories.html", include_str!("../templates/stories.html")),
    ("story.html", include_str!("../templates/story.html")),
    ("donate.html", include_str!("../templates/donate.html")),
    ("contacts.html", include_str!("../templates/contacts.html")),
    ("documents.html", include_str!("../templates/documents.html")),
    ("policy.html", include_str!("../templates/policy.html")),
    ("offer.html", include_str!("../templates/offer.html")),
    ("404.html", include_str!("../templates/404.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, AppError> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}

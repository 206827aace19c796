//! Template adapters backed by `minijinja`.
//!
//! Loading and rendering are separate steps so that each can fail on its
//! own and be tested on its own. [`render_from_file`] chains both.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use stepwise::effect::{ResultState, template::{self, Template}};
//! use stepwise::typeclass::{Composable, Monad};
//!
//! let greeting = Template::from_source("greeting", "Happy {{ holiday }}, {{ to }}!").unwrap();
//! let data = BTreeMap::from([("holiday", "Birthday"), ("to", "Mum")]);
//!
//! let rendered = Monad::unit(ResultState::ok(greeting))
//!     .flat_map(|state| template::render(state, &data))
//!     .into_inner();
//!
//! assert_eq!(rendered.payload().map(String::as_str), Some("Happy Birthday, Mum!"));
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use minijinja::value::ValueKind;
use minijinja::{Environment, Value};
use serde::Serialize;

use super::guard::{attempt, guard};
use super::result_state::ResultState;
use crate::typeclass::{Composable, Monad};

/// A parsed template: its name, its source text and the directory that
/// `{% extends %}` and `{% include %}` resolve against.
///
/// The source is checked for syntax errors when the value is built, so a
/// `Template` is always renderable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    name: String,
    source: String,
    directory: Option<PathBuf>,
}

impl Template {
    /// Parses `source` under `name`, with no directory to load other
    /// templates from.
    ///
    /// # Errors
    ///
    /// Returns the `minijinja` syntax error when `source` does not parse.
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Result<Self, minijinja::Error> {
        Self::build(name.into(), source.into(), None)
    }

    /// Parses `source` under `name`, resolving referenced templates inside
    /// `directory`.
    ///
    /// # Errors
    ///
    /// Returns the `minijinja` syntax error when `source` does not parse.
    pub fn from_source_in(
        directory: impl Into<PathBuf>,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, minijinja::Error> {
        Self::build(name.into(), source.into(), Some(directory.into()))
    }

    fn build(name: String, source: String, directory: Option<PathBuf>) -> Result<Self, minijinja::Error> {
        let template = Self {
            name,
            source,
            directory,
        };
        template.environment().template_from_str(&template.source)?;
        Ok(template)
    }

    fn environment(&self) -> Environment<'_> {
        let mut environment = Environment::new();
        if let Some(directory) = &self.directory {
            environment.set_loader(minijinja::path_loader(directory));
        }
        environment
    }

    /// The template's name, usually its file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template's source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The directory referenced templates are loaded from, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Renders the template against `context`.
    ///
    /// # Errors
    ///
    /// Returns the `minijinja` error raised while rendering, including a
    /// referenced template that cannot be found.
    pub fn render<S: Serialize>(&self, context: S) -> Result<String, minijinja::Error> {
        self.environment().render_str(&self.source, context)
    }
}

/// Loads and parses the template stored at `path`.
///
/// A missing file is recorded as `"template not found: <file name>"`.
pub fn load_template<P>(state: ResultState<P>, path: impl AsRef<Path>) -> Monad<ResultState<Template>> {
    let path = path.as_ref();
    guard(|_| {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        tracing::debug!(path = %path.display(), %name, "loading template");
        Monad::unit(attempt(
            || {
                let source = fs::read_to_string(path).map_err(|error| match error.kind() {
                    ErrorKind::NotFound => format!("template not found: {name}"),
                    _ => format!("{}: {error}", path.display()),
                })?;
                Template::from_source_in(directory, name, source).map_err(|error| error.to_string())
            },
            |message| message,
        ))
    })(state)
}

/// Renders the payload template with `data`.
///
/// `data` must serialize to a map (a struct, a `HashMap`, a JSON object);
/// anything else is recorded as `"data invalid type <kind>"`.
pub fn render<S: Serialize + ?Sized>(state: ResultState<Template>, data: &S) -> Monad<ResultState<String>> {
    guard(|state: ResultState<Template>| {
        let Some(template) = state.into_payload() else {
            return Monad::unit(ResultState::failed("no template to render"));
        };
        let context = Value::from_serialize(data);
        if context.kind() != ValueKind::Map {
            return Monad::unit(ResultState::failed(format!(
                "data invalid type {:?}",
                context.kind()
            )));
        }
        tracing::debug!(template = template.name(), "rendering template");
        Monad::unit(attempt(
            || template.render(context),
            |error| format!("{}: {error}", template.name()),
        ))
    })(state)
}

/// Loads the template at `path` and renders it with `data`.
///
/// Returns the rendered text only when every step succeeded, `None`
/// otherwise.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use stepwise::effect::{ResultState, template};
/// use stepwise::typeclass::Monad;
///
/// let upstream = Monad::new(ResultState::<()>::failed("unit test"));
/// let data = HashMap::from([("foo", "bar")]);
/// assert_eq!(template::render_from_file(upstream, "filepath.j2", &data), None);
/// ```
pub fn render_from_file<P, S>(monad: Monad<ResultState<P>>, path: impl AsRef<Path>, data: &S) -> Option<String>
where
    S: Serialize + ?Sized,
{
    let result = monad
        .flat_map(|state| load_template(state, path))
        .flat_map(|state| render(state, data))
        .into_inner();
    if result.is_ok() { result.into_payload() } else { None }
}

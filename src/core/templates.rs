//! # Init Templates
//!
//! Starter `shemul.json` documents for common project layouts, used by `shemul init`.
//! A template can be named by its key, its title or any alias; names are compared
//! after normalization so `Next.js Frontend`, `nextjs-frontend` and `nextjs` all match.

use crate::constants::SCHEMA_URL;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const NONE_TEMPLATE: &str = "none";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("'{0}' already exists")]
    AlreadyExists(PathBuf),
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to render template: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub aliases: &'static [&'static str],
    pub desc: &'static str,
}

const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        key: "docker-fastapi-backend",
        title: "Docker FastAPI Backend",
        aliases: &["docker fastapi backend", "docker-fastapi", "fastapi-docker"],
        desc: "FastAPI backend using docker compose for local/prod workflows.",
    },
    TemplateInfo {
        key: "fastapi-backend",
        title: "FastAPI Backend",
        aliases: &["fastapi backend", "fastapi"],
        desc: "Local FastAPI backend workflow without docker.",
    },
    TemplateInfo {
        key: "django-drf-backend",
        title: "Django DRF Backend",
        aliases: &["django drf backend", "drf backend", "django-backend"],
        desc: "Django + DRF backend workflow.",
    },
    TemplateInfo {
        key: "expressjs-backend",
        title: "Express.js Backend",
        aliases: &["express.js backend", "express backend", "expressjs", "express"],
        desc: "Express.js backend workflow.",
    },
    TemplateInfo {
        key: "nestjs-backend",
        title: "Nest.js Backend",
        aliases: &["nest.js backend", "nest backend", "nestjs", "nest"],
        desc: "Nest.js backend workflow.",
    },
    TemplateInfo {
        key: "react-native-expo-app",
        title: "React Native Expo App",
        aliases: &["react native expo app", "expo app", "react-native", "expo"],
        desc: "React Native app workflow using Expo.",
    },
    TemplateInfo {
        key: "nextjs-frontend",
        title: "Next.js Frontend",
        aliases: &["next.js frontend", "next frontend", "nextjs"],
        desc: "Next.js frontend workflow.",
    },
    TemplateInfo {
        key: NONE_TEMPLATE,
        title: "None (Starter Schema)",
        aliases: &["blank", "starter", "minimal"],
        desc: "Minimal valid shemul.json to get started quickly.",
    },
];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid whitespace regex");
}

/// Lowercases, drops dots, treats `_` and `-` as spaces and collapses whitespace.
fn normalize(text: &str) -> String {
    let lowered = text
        .trim()
        .to_lowercase()
        .replace('.', "")
        .replace(['_', '-'], " ");
    WHITESPACE.replace_all(&lowered, " ").into_owned()
}

/// All templates in display order.
pub fn list_templates() -> &'static [TemplateInfo] {
    TEMPLATES
}

/// Finds the template whose key, title or alias matches `input`.
pub fn resolve_template_key(input: &str) -> Option<&'static str> {
    let query = normalize(input);
    if query.is_empty() {
        return None;
    }

    TEMPLATES
        .iter()
        .find(|t| {
            normalize(t.key) == query
                || normalize(t.title) == query
                || t.aliases.iter().any(|alias| normalize(alias) == query)
        })
        .map(|t| t.key)
}

pub fn template_aliases(key: &str) -> &'static [&'static str] {
    TEMPLATES
        .iter()
        .find(|t| t.key == key)
        .map(|t| t.aliases)
        .unwrap_or_default()
}

/// Builds the document for `key`. Unknown keys produce the starter document.
pub fn build_template_config(key: &str, project_name: &str) -> Value {
    let mut document = json!({
        "$schema": SCHEMA_URL,
        "name": project_name,
        "version": "1.0",
    });

    let (runtime, commands, extra) = match key {
        "docker-fastapi-backend" => (
            "docker",
            json!({
                "up": {"run": "docker compose up --build", "env": "local", "desc": "Start local stack"},
                "up:bg": {"run": "docker compose up -d --build", "env": "local", "desc": "Start local stack in background"},
                "down": {"run": "docker compose down --remove-orphans", "env": "local", "desc": "Stop local stack"},
                "logs": {"run": "docker compose logs -f {{API}}", "env": "local", "desc": "Tail API logs"},
                "migrate:up": {"run": "docker compose exec {{API}} alembic upgrade head", "confirm": true, "desc": "Run DB migrations"},
                "test": {"run": "docker compose exec {{API}} pytest -q", "group": "quality", "desc": "Run tests"},
                "prod:up": {"run": "docker compose -f {{env.compose}} up -d", "env": "prod", "danger": true, "desc": "Start production stack"},
            }),
            Some(json!({
                "vars": {"API": "api"},
                "env": {
                    "local": {"compose": "docker-compose.yml"},
                    "prod": {"compose": "docker-compose.prod.yml"},
                },
            })),
        ),
        "fastapi-backend" => (
            "python",
            json!({
                "dev": {"run": "uvicorn app.main:app --reload --host 0.0.0.0 --port 8000", "desc": "Run dev server"},
                "start": {"run": "python -m app.main", "desc": "Run app entrypoint"},
                "test": {"run": "pytest -q", "group": "quality", "desc": "Run tests"},
                "lint": {"run": "ruff check .", "group": "quality", "desc": "Run linter"},
                "format": {"run": "ruff format .", "group": "quality", "desc": "Format source"},
            }),
            None,
        ),
        "django-drf-backend" => (
            "python",
            json!({
                "dev": {"run": "python manage.py runserver 0.0.0.0:8000", "desc": "Run dev server"},
                "migrate:make": {"run": "python manage.py makemigrations", "group": "db", "desc": "Create migrations"},
                "migrate:up": {"run": "python manage.py migrate", "group": "db", "desc": "Apply migrations"},
                "superuser": {"run": "python manage.py createsuperuser", "confirm": true, "desc": "Create admin user"},
                "test": {"run": "python manage.py test", "group": "quality", "desc": "Run tests"},
                "lint": {"run": "ruff check .", "group": "quality", "desc": "Run linter"},
            }),
            None,
        ),
        "expressjs-backend" => (
            "node",
            json!({
                "install": {"run": "npm install", "group": "setup", "desc": "Install dependencies"},
                "dev": {"run": "npm run dev", "desc": "Run dev server"},
                "start": {"run": "npm start", "desc": "Run production server"},
                "test": {"run": "npm test", "group": "quality", "desc": "Run tests"},
                "lint": {"run": "npm run lint", "group": "quality", "desc": "Run linter"},
            }),
            None,
        ),
        "nestjs-backend" => (
            "node",
            json!({
                "install": {"run": "npm install", "group": "setup", "desc": "Install dependencies"},
                "dev": {"run": "npm run start:dev", "desc": "Run dev server"},
                "build": {"run": "npm run build", "group": "build", "desc": "Build application"},
                "start": {"run": "npm run start:prod", "desc": "Run production server"},
                "test": {"run": "npm run test", "group": "quality", "desc": "Run tests"},
                "lint": {"run": "npm run lint", "group": "quality", "desc": "Run linter"},
            }),
            None,
        ),
        "react-native-expo-app" => (
            "node",
            json!({
                "install": {"run": "npm install", "group": "setup", "desc": "Install dependencies"},
                "dev": {"run": "npx expo start", "desc": "Start Expo dev server"},
                "android": {"run": "npx expo run:android", "desc": "Run Android build"},
                "ios": {"run": "npx expo run:ios", "desc": "Run iOS build"},
                "web": {"run": "npx expo start --web", "desc": "Run web preview"},
                "test": {"run": "npm test", "group": "quality", "desc": "Run tests"},
            }),
            None,
        ),
        "nextjs-frontend" => (
            "node",
            json!({
                "install": {"run": "npm install", "group": "setup", "desc": "Install dependencies"},
                "dev": {"run": "npm run dev", "desc": "Run dev server"},
                "build": {"run": "npm run build", "group": "build", "desc": "Build frontend"},
                "start": {"run": "npm run start", "desc": "Run production server"},
                "lint": {"run": "npm run lint", "group": "quality", "desc": "Run linter"},
                "test": {"run": "npm test", "group": "quality", "desc": "Run tests"},
            }),
            None,
        ),
        _ => (
            "generic",
            json!({
                "example": {
                    "run": "echo \"Edit shemul.json and replace this command\"",
                    "desc": "Starter command",
                },
            }),
            None,
        ),
    };

    if let Some(object) = document.as_object_mut() {
        object.insert("runtime".to_string(), Value::from(runtime));
        object.insert("commands".to_string(), commands);
        if let Some(Value::Object(extra)) = extra {
            object.extend(extra);
        }
    }

    document
}

/// Writes the rendered template to `target`, pretty-printed with a trailing newline.
///
/// # Errors
/// [`TemplateError::AlreadyExists`] if `target` exists and `force` is false.
pub fn write_template_file(
    key: &str,
    target: &Path,
    project_name: &str,
    force: bool,
) -> Result<PathBuf, TemplateError> {
    if target.exists() && !force {
        return Err(TemplateError::AlreadyExists(target.to_path_buf()));
    }

    let document = build_template_config(key, project_name);
    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');

    fs::write(target, text).map_err(|source| TemplateError::Write {
        path: target.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote template '{}' to '{}'", key, target.display());

    Ok(target.to_path_buf())
}

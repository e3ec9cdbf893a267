//! Tween engine and per-view motion effects.
//!
//! Views own a [`MotionScope`](scope::MotionScope) for their lifetime; every
//! tween, frame request and listener an effect creates is registered with it
//! and goes away when the view unmounts.

pub mod ease;
pub mod effects;
pub mod engine;
pub mod hooks;
pub mod parallax;
pub mod path;
pub mod scope;
pub mod target;
pub mod ticker;
pub mod tween;

use std::sync::OnceLock;

use log::info;
use thiserror::Error;

use self::path::{MotionPath, PathError};

pub const ORBIT_PATH: &str = "orbit-path";
/// Side of the square view box the orbit path is drawn in.
pub const ORBIT_VIEW_BOX: f64 = 600.0;
/// `viewBox` of the svg the orbit track is drawn in. Orbiting icons are
/// placed by percentage of their container, so the svg must stretch to the
/// container exactly (`preserveAspectRatio="none"` on a square box).
pub fn orbit_view_box() -> String {
    format!("0 0 {ORBIT_VIEW_BOX} {ORBIT_VIEW_BOX}")
}

pub const ORBIT_PATH_DATA: &str = "M 300 50 C 450 50 550 150 550 300 C 550 450 450 550 300 550 \
                                   C 150 550 50 450 50 300 C 50 150 150 50 300 50 Z";

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("motion engine used before motion::init()")]
    NotInitialized,
    #[error("no motion path registered as `{0}`")]
    UnknownPath(String),
    #[error("built-in motion path `{name}` is invalid: {source}")]
    InvalidPath {
        name: &'static str,
        #[source]
        source: PathError,
    },
}

pub struct RegisteredPath {
    pub name: &'static str,
    pub path: MotionPath,
    pub view_box: f64,
}

/// Named motion paths shared by every view.
pub struct Registry {
    paths: Vec<RegisteredPath>,
}

impl Registry {
    fn builtin() -> Result<Self, MotionError> {
        let orbit = MotionPath::parse(ORBIT_PATH_DATA).map_err(|source| MotionError::InvalidPath {
            name: ORBIT_PATH,
            source,
        })?;
        Ok(Self {
            paths: vec![RegisteredPath {
                name: ORBIT_PATH,
                path: orbit,
                view_box: ORBIT_VIEW_BOX,
            }],
        })
    }

    pub fn path(&self, name: &str) -> Result<&RegisteredPath, MotionError> {
        self.paths
            .iter()
            .find(|registered| registered.name == name)
            .ok_or_else(|| MotionError::UnknownPath(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Registers the built-in motion paths. Safe to call repeatedly; only the
/// first call does any work.
pub fn init() -> Result<&'static Registry, MotionError> {
    if REGISTRY.get().is_none() {
        let registry = Registry::builtin()?;
        let count = registry.len();
        if REGISTRY.set(registry).is_ok() {
            info!("Motion engine registered {} path(s)", count);
        }
    }
    registry()
}

pub fn registry() -> Result<&'static Registry, MotionError> {
    REGISTRY.get().ok_or(MotionError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let first = init().unwrap();
        let second = init().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(registry().unwrap(), first));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn orbit_path_is_registered() {
        let registry = Registry::builtin().unwrap();
        let orbit = registry.path(ORBIT_PATH).unwrap();
        assert_eq!(orbit.view_box, ORBIT_VIEW_BOX);
        assert!(orbit.path.length() > 0.0);
    }

    #[test]
    fn orbit_view_box_is_square() {
        assert_eq!(orbit_view_box(), "0 0 600 600");
    }

    #[test]
    fn unknown_path_is_an_error() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry.path("spiral").err(),
            Some(MotionError::UnknownPath("spiral".to_string()))
        );
    }
}

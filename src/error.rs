//! Error types.
//!
//! Every failure the program can hit during startup ends up as an [`AppError`], which `main`
//! reports before exiting with a failure status.

use thiserror::Error;

/// Errors raised while creating or using OpenGL objects.
#[derive(Error, Debug)]
pub enum GlError {
    /// The driver refused to create an object.
    #[error("failed to create {what}: {reason}")]
    Create { what: &'static str, reason: String },

    /// A shader failed to compile. `log` holds the driver's info log.
    #[error("{kind} shader failed to compile: {log}")]
    Compile { kind: &'static str, log: String },

    /// A program failed to link.
    #[error("shader program failed to link: {0}")]
    Link(String),
}

/// Errors raised while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top level error.
#[derive(Error, Debug)]
pub enum AppError {
    /// SDL reported a failure while creating the window or the context.
    #[error("SDL: {0}")]
    Sdl(String),

    #[error(transparent)]
    Gl(#[from] GlError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

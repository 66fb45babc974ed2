#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod db;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod auth;

#[cfg(feature = "server")]
pub mod export;

#[cfg(feature = "server")]
pub mod recommender;

#[cfg(feature = "server")]
pub mod sentiment;

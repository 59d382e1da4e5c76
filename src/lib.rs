//! # Summa View
//!
//! A TUI front-end for a summarisation endpoint.
//!
//! ## Features
//!
//! - **Summarize and display**: posts article text and URL as JSON, shows the
//!   returned summary in a modal
//! - **Testable handles**: the controller drives a [`Surface`] and a
//!   [`Diagnostics`] channel, so it runs against mocks as well as the terminal
//! - **Dismiss region**: clicks on the modal backdrop or its close control
//!   hide it, clicks on the content do not

pub mod client;
pub mod config;
pub mod controller;
pub mod logging;
pub mod modal;
pub mod oneshot;
pub mod summary;
pub mod surface;
pub mod ui;

pub use client::{ClientError, HttpSummaryService, SummaryService};
pub use config::Config;
pub use controller::{Completion, Controller};
pub use summary::{Outcome, SummarizeRequest, SummarizeResponse};
pub use surface::{Diagnostics, Surface, TracingDiagnostics, Visibility};

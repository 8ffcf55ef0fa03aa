//! Client data layer for the institutions registry.
//!
//! Mirrors the server's institution list locally and keeps it consistent
//! after each mutation without re-fetching:
//! - [`InstitutionForm`] shapes keystrokes and validates before any request
//! - [`InstitutionList`] is a reducer over [`ListEvent`]s keeping the list ordered
//! - [`ChartState`] holds the per-state totals for the chart
//! - [`InstitutionsApi`] is the transport seam, with [`HttpInstitutionsApi`] over `reqwest`
//! - [`Dashboard`] ties them together the way the page does

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod list;
pub mod model;

pub use api::{HttpInstitutionsApi, InstitutionsApi};
pub use chart::{ChartPoint, ChartState};
pub use config::ClientConfig;
pub use dashboard::Dashboard;
pub use error::{Action, ClientError, Result, user_message};
pub use form::{FieldHint, FormErrors, InstitutionForm, format_qtd_alunos};
pub use list::{InstitutionList, ListEvent};
pub use model::{Institution, InstitutionPayload, StateTotal};

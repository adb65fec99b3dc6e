//! Routing engine over a labeled, multi-floor building graph.
//!
//! A request flows through [`selection::resolve`] →
//! [`view::accessibility_view`] → [`view::GraphView::restrict_to_floor`] →
//! [`path::PathFinder`] → [`estimate::estimate`]. [`service::NavService`]
//! owns the cached [`graph::NavGraph`] and strings the steps together.

pub mod error;
pub mod estimate;
pub mod graph;
pub mod path;
pub mod selection;
pub mod service;
pub mod view;

pub use error::{GraphError, Result};
pub use estimate::Estimate;
pub use graph::{NavGraph, NavNode};
pub use path::{PathFinder, Route};
pub use selection::Selection;
pub use service::{NavService, RouteOutcome, RouteSummary};
pub use view::GraphView;

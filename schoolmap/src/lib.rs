//! SchoolMap - pagination-synchronized map state for school records
//!
//! This library keeps a map display synchronized with a paginated feed of
//! geolocated school records. Each page fetch replaces the rendered marker
//! set wholesale, refits the view to the new extent, and reconciles the
//! selected-record overlay. Rendering itself is delegated to a [`engine::MapEngine`]
//! implementation; everything in here is engine-agnostic state.
//!
//! The main entry point is [`session::MapSession`], which wires a schools
//! source ([`api::SchoolsApi`]) and an engine handle to the pagination and
//! selection controllers.

pub mod api;
pub mod coord;
pub mod engine;
pub mod feature;
pub mod geojson;
pub mod logging;
pub mod school;
pub mod selection;
pub mod session;
pub mod sync;

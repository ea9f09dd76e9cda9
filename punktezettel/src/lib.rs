//! Engine for generating exam grading sheets ("Punktezettel"): validates a
//! student roster, partitions it into Mappen of a fixed size, and lays out one
//! worksheet per Mappe with live subtotal and grand-total formulas.
//!
//! The web form that collects the exam configuration, the upload handler, and
//! the download trigger are external collaborators; they call
//! [`roster::Roster::validate`], then [`batch::partition`] and
//! [`sheet::build`], and serialize the returned workbook.

pub mod batch;
pub mod error;
pub mod exam;
pub mod import;
pub mod roster;
pub mod sheet;
pub mod template;
pub mod types;

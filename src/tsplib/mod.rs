//! TSPLIB benchmark file support.
//!
//! Parses the symmetric EUC_2D subset of the TSPLIB95 format plus the
//! accompanying `.opt.tour` reference tour files.
//!
//! # Reference
//!
//! Reinelt, G. (1991). "TSPLIB — A Traveling Salesman Problem Library",
//! *ORSA Journal on Computing* 3(4), 376-384.
//! <http://comopt.ifi.uni-heidelberg.de/software/TSPLIB95/>

mod instance;
mod tour;

pub use instance::TsplibInstance;
pub use tour::{load_tour, parse_tour};

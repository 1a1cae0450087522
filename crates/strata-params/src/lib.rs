//! Hierarchical parameter tree for Strata material models.
//!
//! Models declare their entries (name, default, [`Pattern`], documentation)
//! into named subsections of a [`ParameterHandler`]. The host then reads a
//! parameter file with [`ParameterHandler::parse_input`] and models pull
//! typed values back out when they are configured.
//!
//! ```
//! use strata_params::{ParameterHandler, Pattern};
//!
//! let mut prm = ParameterHandler::new();
//! prm.enter_subsection("Material model");
//! prm.declare_entry("Jump height", "100000", Pattern::non_negative_double(), "Units: m.")
//!     .unwrap();
//! prm.leave_subsection().unwrap();
//!
//! prm.parse_input("subsection Material model\n  set Jump height = 5e4\nend\n").unwrap();
//!
//! prm.enter_subsection("Material model");
//! assert_eq!(prm.get_double("Jump height").unwrap(), 5e4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handler;
pub mod pattern;

pub use handler::{EntryInfo, ParameterHandler};
pub use pattern::Pattern;

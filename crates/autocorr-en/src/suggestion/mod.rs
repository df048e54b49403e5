// Suggestion generation
//
// Produces a correction for a misspelled word by enumerating every string
// one edit away (deletion, transposition, substitution, insertion) and keeping
// the one with the highest corpus frequency.
//
// Architecture:
//   - `generators`: one CandidateGenerator per edit family
//   - `status`: best-candidate tracking and probe counting for one pass
//   - `strategy`: the Corrector that runs the generators in family order

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::CandidateGenerator;
pub use status::{Correction, CorrectionStatus, EditKind};
pub use strategy::{Corrector, correct};

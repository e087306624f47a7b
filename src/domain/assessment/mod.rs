//! Assessment - responses, participant, module selection and the stage sequencer.

mod errors;
mod participant;
mod progress;
mod responses;
mod selector;
mod session;
mod stage;

pub use errors::AssessmentError;
pub use participant::{OnboardingForm, Participant, MAX_AGE, MAX_NAME_LENGTH, MIN_AGE};
pub use progress::Progress;
pub use responses::{Response, ResponseSet};
pub use selector::{ModuleSelection, ModuleSelector, ACTIVATION_THRESHOLD, CORE_SCORE_GATE};
pub use session::AssessmentSession;
pub use stage::Stage;

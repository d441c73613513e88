// Core domain model: experience records, session state, logging setup.

pub mod logging;
pub mod record;
pub mod session;

pub use record::{
    build_record, ExperienceForm, FieldValue, HandbookRatings, Record, CODE_OF_CONDUCT_ITEMS,
    HANDBOOK_CRITERIA, STAFF_NAMES,
};
pub use session::SessionState;

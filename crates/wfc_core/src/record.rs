//! Experience records: the ordered field mapping for one feedback submission.
//!
//! A [`Record`] is assembled fresh on every render cycle by [`build_record`]
//! and lives only long enough for the serializers in `wfc_docs` to turn it
//! into the two download streams. Values are tagged variants so the
//! serializers can match exhaustively instead of guessing at shape.

use chrono::{NaiveDate, NaiveTime};

use crate::session::SessionState;

/// The 16 employee-handbook performance criteria, in evaluation order.
pub const HANDBOOK_CRITERIA: [&str; 16] = [
    "Act Professional and with Integrity",
    "Treat all people with respect",
    "Develop and maintain positive relationships",
    "Handle situations with integrity",
    "Maintain confidences and share credit",
    "Provide Customer Service",
    "Greet customers positively",
    "Provide timely and courteous assistance",
    "Communicate clearly",
    "Actively listen and respond with empathy",
    "Ensure customer satisfaction",
    "Ask for feedback from customers",
    "Contribute to Organizational Goals",
    "Adjust positively to changes",
    "Support organizational goals",
    "Identify self-development areas",
];

/// The code-of-conduct items offered by the acknowledgment checklist.
pub const CODE_OF_CONDUCT_ITEMS: [&str; 13] = [
    "The Customer Code of Conduct and Employee Code of Conduct documents must be clearly posted in various, easy-to-view locations in all Resource Areas.",
    "All resource area staff will read the employee pledge found on the Employee Code of Conduct and will strive each day to provide service in accordance with the Employee Code of Conduct.",
    "The Customer Code of Conduct and Employee Code of Conduct may not be changed or modified by WFC staff or managers or by partner employees.",
    "The Customer Code of Conduct and Employee Code of Conduct are accessible to customers using a screen reader.",
    "WFCs that previously used the Policy Acknowledgment Form may ask customers to sign the Customer Code of Conduct. It is optional.",
    "If staff observe a customer on an inappropriate website that was not caught by the web-blocking software, submit a Web Blocking Request.",
    "All WorkForce Center managers, reception staff, and Resource Area staff must be familiar with the Violations Table and Corrective Actions document.",
    "The Notice of Suspension from Resource Area document must be used for all suspensions greater than one day and less than six months.",
    "For all suspensions greater than six months, a letter will be mailed to the customer from the WorkForce Development Division Director.",
    "If law enforcement are contacted during an incident at the WorkForce Center, a Violence/Threat Report Form must be completed and submitted to the DEED HR Safety Officer.",
    "The Violence/Threat Report Form is required for all incidents involving theft, property damage, or violence.",
    "An Incident Log must be kept up to date and submitted to the WorkForce Development Division Equal Opportunity Officer at the close of each state fiscal year or upon request.",
    "Mandatory training on various policies and forms will be provided to all resource area staff and managers.",
];

/// Staff names offered by the reviewer dropdown.
pub const STAFF_NAMES: [&str; 3] = ["LeRoy", "Danielle", "Sarah"];

/// Column names shared by the CSV header and the PDF section titles.
pub mod fields {
    pub const NAME: &str = "Name";
    pub const CUSTOMER_SERVICE_RATING: &str = "Customer Service Rating";
    pub const CUSTOMER_SERVICE_FEEDBACK: &str = "Customer Service Feedback";
    pub const EXPERIENCE_DATE: &str = "Experience Date";
    pub const EXPERIENCE_TIME: &str = "Experience Time";
    pub const EMPLOYEE_ACTIVITIES: &str = "Employee Activities";
    pub const ACTUAL_EXPERIENCE: &str = "Actual Experience";
    pub const PRESCRIBED_ACTIVITIES: &str = "Prescribed Activities";
    pub const PRESCRIBED_NOTES: &str = "Prescribed Notes";
    pub const EXPERIENCE_NOTES: &str = "Experience Notes";
    pub const SELECTED_CODE_OF_CONDUCT: &str = "Selected Code of Conduct Items";
    pub const EMPLOYEE_NAMES: &str = "Employee Names";
    pub const EMPLOYEE_PERFORMANCE_RATINGS: &str = "Employee Performance Ratings";
}

// ---------------------------------------------------------------------------
// HandbookRatings
// ---------------------------------------------------------------------------

/// Ratings for the 16 handbook criteria.
///
/// Always complete and in [`HANDBOOK_CRITERIA`] order; the constructors make
/// a partial or reordered set unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandbookRatings {
    scores: Vec<(String, u8)>,
}

impl HandbookRatings {
    /// Pair one score per criterion, in [`HANDBOOK_CRITERIA`] order.
    pub fn from_scores(scores: [u8; 16]) -> Self {
        let scores = HANDBOOK_CRITERIA
            .iter()
            .zip(scores)
            .map(|(criterion, score)| ((*criterion).to_string(), score))
            .collect();
        Self { scores }
    }

    /// The same score for every criterion.
    pub fn uniform(score: u8) -> Self {
        Self::from_scores([score; 16])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.scores.iter().map(|(c, s)| (c.as_str(), *s))
    }

    /// One `"<criterion>: <rating>/10"` line per criterion.
    pub fn lines(&self) -> Vec<String> {
        self.scores
            .iter()
            .map(|(criterion, score)| format!("{criterion}: {score}/10"))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A single field's value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Selected code-of-conduct items, in selection order. May be empty.
    ConductSelection(Vec<String>),
    /// Employee names accumulated over the session. Duplicates allowed.
    NameSequence(Vec<String>),
    /// Exactly the 16 handbook criteria, each rated once.
    CriterionRatings(HandbookRatings),
}

impl FieldValue {
    /// Canonical textual form, shared by the CSV cell and the PDF body.
    ///
    /// Collection fields each have one documented encoding: conduct items are
    /// bracketed and semicolon-joined (`[]` when empty), name sequences are
    /// comma-joined with a `None` sentinel when empty, and criterion ratings
    /// are semicolon-joined `"<criterion>: <rating>/10"` entries.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Time(t) => t.format("%H:%M:%S").to_string(),
            Self::ConductSelection(items) => format!("[{}]", items.join("; ")),
            Self::NameSequence(names) => {
                if names.is_empty() {
                    "None".to_string()
                } else {
                    names.join(", ")
                }
            }
            Self::CriterionRatings(ratings) => ratings.lines().join("; "),
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Ordered field-name → value mapping for one submission.
///
/// Insertion order is the export order for both serializers. Field names are
/// unique; pushing a duplicate is a programming error and panics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Panics if `name` is already present.
    pub fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        assert!(self.get(&name).is_none(), "duplicate record field: {name}");
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ExperienceForm and build_record
// ---------------------------------------------------------------------------

/// Typed form values for one submission, as handed over by the form layer.
///
/// The optional parts cover the shape variations between deployments: the
/// reviewer dropdown, the code-of-conduct checklist, the handbook rating
/// sliders, and the growable employee-name list. The form layer is trusted
/// to enforce widget-level bounds (rating 1–5, criterion scores 0–10).
#[derive(Debug, Clone, Default)]
pub struct ExperienceForm {
    pub staff_name: Option<String>,
    pub customer_service_rating: i64,
    pub customer_service_feedback: String,
    pub experience_date: NaiveDate,
    pub experience_time: NaiveTime,
    pub employee_activities: String,
    pub actual_experience: String,
    pub prescribed_activities: String,
    pub prescribed_notes: String,
    pub experience_notes: String,
    pub conduct_selection: Option<Vec<String>>,
    pub handbook_ratings: Option<HandbookRatings>,
    pub include_employee_names: bool,
}

/// Assemble the ordered record for the current submission.
///
/// Pure function of the form values and the session state: optional form
/// parts appear only when present, and the employee-name list is taken from
/// `session` when enabled (rendering as the `None` sentinel when empty).
pub fn build_record(form: &ExperienceForm, session: &SessionState) -> Record {
    let mut record = Record::new();

    if let Some(name) = &form.staff_name {
        record.push(fields::NAME, FieldValue::Text(name.clone()));
    }

    record.push(
        fields::CUSTOMER_SERVICE_RATING,
        FieldValue::Number(form.customer_service_rating),
    );
    record.push(
        fields::CUSTOMER_SERVICE_FEEDBACK,
        FieldValue::Text(form.customer_service_feedback.clone()),
    );
    record.push(fields::EXPERIENCE_DATE, FieldValue::Date(form.experience_date));
    record.push(fields::EXPERIENCE_TIME, FieldValue::Time(form.experience_time));
    record.push(
        fields::EMPLOYEE_ACTIVITIES,
        FieldValue::Text(form.employee_activities.clone()),
    );
    record.push(
        fields::ACTUAL_EXPERIENCE,
        FieldValue::Text(form.actual_experience.clone()),
    );
    record.push(
        fields::PRESCRIBED_ACTIVITIES,
        FieldValue::Text(form.prescribed_activities.clone()),
    );
    record.push(
        fields::PRESCRIBED_NOTES,
        FieldValue::Text(form.prescribed_notes.clone()),
    );
    record.push(
        fields::EXPERIENCE_NOTES,
        FieldValue::Text(form.experience_notes.clone()),
    );

    if let Some(selection) = &form.conduct_selection {
        record.push(
            fields::SELECTED_CODE_OF_CONDUCT,
            FieldValue::ConductSelection(selection.clone()),
        );
    }
    if form.include_employee_names {
        record.push(
            fields::EMPLOYEE_NAMES,
            FieldValue::NameSequence(session.employee_names.clone()),
        );
    }
    if let Some(ratings) = &form.handbook_ratings {
        record.push(
            fields::EMPLOYEE_PERFORMANCE_RATINGS,
            FieldValue::CriterionRatings(ratings.clone()),
        );
    }

    record
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

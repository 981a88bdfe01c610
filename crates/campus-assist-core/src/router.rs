//! Intent routing.
//!
//! A fixed-priority decision chain over the extracted slots and plain
//! substring tests on the lower-cased question. The first matching branch
//! wins and exactly one lookup runs.
//!
//! 1. Roll number present: `sgpa`, `attendance`, `result`/`marks`,
//!    `student`, `parent`, `cgpa`/`arrear`, otherwise guidance.
//! 2. `syllabus` with a subject code: syllabus image.
//! 3. `syllabus`: syllabus by semester.
//! 4. `timetable`: timetable by section.
//! 5. Otherwise: not understood.
//!
//! Keyword tests are deliberately naive; `marks` inside an unrelated word
//! still matches.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::extract::Slots;
use crate::lookup;
use crate::models::Answer;

pub const SGPA_NEEDS_SEMESTER: &str = "Please specify semester number for SGPA.";
pub const PERSONAL_GUIDANCE: &str =
    "Please ask about SGPA, CGPA, attendance, result, or parent info.";
pub const SYLLABUS_NEEDS_SEMESTER: &str = "Please specify a semester number.";
pub const TIMETABLE_NEEDS_SECTION: &str = "Please specify section A or B.";
pub const NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand your question.";

/// Router switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    /// Extract subject codes (attendance narrowing and syllabus images).
    pub subject_code_slot: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            subject_code_slot: true,
        }
    }
}

/// Which branch of the chain answered a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Sgpa,
    Attendance,
    Result,
    StudentInfo,
    ParentInfo,
    CgpaArrears,
    PersonalGuidance,
    SyllabusImage,
    SyllabusBySemester,
    Timetable,
    Unrecognized,
}

/// Pick the intent for a lower-cased question.
pub fn resolve(question: &str, slots: &Slots) -> Intent {
    if slots.rrn.is_some() {
        if question.contains("sgpa") {
            Intent::Sgpa
        } else if question.contains("attendance") {
            Intent::Attendance
        } else if question.contains("result") || question.contains("marks") {
            Intent::Result
        } else if question.contains("student") {
            Intent::StudentInfo
        } else if question.contains("parent") {
            Intent::ParentInfo
        } else if question.contains("cgpa") || question.contains("arrear") {
            Intent::CgpaArrears
        } else {
            Intent::PersonalGuidance
        }
    } else if question.contains("syllabus") && slots.subject_code.is_some() {
        Intent::SyllabusImage
    } else if question.contains("syllabus") {
        Intent::SyllabusBySemester
    } else if question.contains("timetable") {
        Intent::Timetable
    } else {
        Intent::Unrecognized
    }
}

/// Answers questions against a shared, read-only catalog.
#[derive(Clone)]
pub struct Router {
    catalog: Arc<Catalog>,
    options: RouterOptions,
}

impl Router {
    pub fn new(catalog: Arc<Catalog>, options: RouterOptions) -> Self {
        Self { catalog, options }
    }

    /// Lower-case the question, extract slots and resolve the intent.
    pub fn classify(&self, question: &str) -> (Intent, Slots) {
        let question = question.to_lowercase();
        let slots = Slots::extract(&question, self.options.subject_code_slot);
        (resolve(&question, &slots), slots)
    }

    pub fn answer(&self, question: &str) -> Answer {
        let (intent, slots) = self.classify(question);
        self.dispatch(intent, &slots)
    }

    /// Run the lookup for an already resolved intent.
    pub fn dispatch(&self, intent: Intent, slots: &Slots) -> Answer {
        let cat = self.catalog.as_ref();
        let rrn = slots.rrn.as_deref().unwrap_or_default();
        // semester 0 counts as not given
        match intent {
            Intent::Sgpa => match slots.semester {
                Some(sem) if sem > 0 => lookup::sgpa(cat, rrn, sem),
                _ => Answer::missing_slot(SGPA_NEEDS_SEMESTER),
            },
            Intent::Attendance => lookup::attendance(cat, rrn, slots.subject_code.as_deref()),
            Intent::Result => lookup::result(cat, rrn, slots.semester),
            Intent::StudentInfo => lookup::student_info(cat, rrn),
            Intent::ParentInfo => lookup::parent_info(cat, rrn),
            Intent::CgpaArrears => lookup::cgpa_arrears(cat, rrn),
            Intent::PersonalGuidance => Answer::unrecognized(PERSONAL_GUIDANCE),
            Intent::SyllabusImage => match slots.subject_code.as_deref() {
                Some(code) => lookup::syllabus_image(cat, code),
                None => Answer::missing_slot(SYLLABUS_NEEDS_SEMESTER),
            },
            Intent::SyllabusBySemester => match slots.semester {
                Some(sem) if sem > 0 => lookup::syllabus_for_semester(cat, sem),
                _ => Answer::missing_slot(SYLLABUS_NEEDS_SEMESTER),
            },
            Intent::Timetable => match slots.section {
                Some(section) => lookup::timetable(cat, section),
                None => Answer::missing_slot(TIMETABLE_NEEDS_SECTION),
            },
            Intent::Unrecognized => Answer::unrecognized(NOT_UNDERSTOOD),
        }
    }
}

// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory entity store.
//!
//! Four relational tables (jobs, candidates, timeline entries, assessments)
//! keyed by entity id, with insertion order preserved so listings and
//! snapshots are stable. Relationships are foreign-key style: candidates and
//! assessments carry a `job_id`, timeline entries a `candidate_id`.

use chrono::Utc;
use indexmap::IndexMap;
use uuid::Uuid;

use talentflow_core::payload::{AssessmentFields, CandidateFields, JobFields};
use talentflow_core::types::{
    Assessment, Candidate, Job, Question, Stage, StoreSnapshot, TableCounts, TimelineEntry,
};

/// The whole mock-API dataset, owned by value.
///
/// The store itself is synchronous and single-threaded; the service layer
/// wraps it in a lock and treats each operation as one run-to-completion
/// critical section.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    jobs: IndexMap<String, Job>,
    candidates: IndexMap<String, Candidate>,
    assessments: IndexMap<String, Assessment>,
    timeline_entries: IndexMap<String, TimelineEntry>,
}

fn next_id() -> String {
    Uuid::new_v4().to_string()
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Jobs ---

    /// Inserts a new job from validated fields, assigning a fresh id.
    pub fn create_job(&mut self, fields: JobFields) -> Job {
        let job = Job {
            id: next_id(),
            title: fields.title,
            department: fields.department,
            location: fields.location,
            employment_type: fields.employment_type,
            slug: fields.slug,
            salary: fields.salary,
            applicants: fields.applicants,
            status: fields.status,
            tags: fields.tags,
            order_id: fields.order_id,
        };
        self.jobs.insert(job.id.clone(), job.clone());
        job
    }

    /// Inserts a fully-formed job, keeping its id. Seed and restore path.
    pub fn insert_job(&mut self, job: Job) {
        self.jobs.insert(job.id.clone(), job);
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    pub fn job_mut(&mut self, id: &str) -> Option<&mut Job> {
        self.jobs.get_mut(id)
    }

    /// All jobs in table insertion order.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    // --- Candidates ---

    /// Inserts a new candidate from validated fields, assigning a fresh id.
    pub fn create_candidate(&mut self, fields: CandidateFields) -> Candidate {
        let candidate = Candidate {
            id: next_id(),
            name: fields.name,
            email: fields.email,
            stage: fields.stage,
            job_id: fields.job_id,
        };
        self.candidates
            .insert(candidate.id.clone(), candidate.clone());
        candidate
    }

    /// Inserts a fully-formed candidate, keeping its id.
    pub fn insert_candidate(&mut self, candidate: Candidate) {
        self.candidates.insert(candidate.id.clone(), candidate);
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.get(id)
    }

    pub fn candidate_mut(&mut self, id: &str) -> Option<&mut Candidate> {
        self.candidates.get_mut(id)
    }

    /// All candidates in table insertion order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.values()
    }

    /// Candidates attached to the given job, in table insertion order.
    pub fn candidates_for_job<'a>(
        &'a self,
        job_id: &'a str,
    ) -> impl Iterator<Item = &'a Candidate> {
        self.candidates
            .values()
            .filter(move |c| c.job_id.as_deref() == Some(job_id))
    }

    // --- Assessments ---

    /// Inserts a new assessment from validated fields, assigning a fresh id.
    pub fn create_assessment(&mut self, fields: AssessmentFields) -> Assessment {
        let assessment = Assessment {
            id: next_id(),
            job_id: fields.job_id,
            title: fields.title,
            questions: fields.questions,
        };
        self.assessments
            .insert(assessment.id.clone(), assessment.clone());
        assessment
    }

    /// Inserts a fully-formed assessment, keeping its id.
    pub fn insert_assessment(&mut self, assessment: Assessment) {
        self.assessments.insert(assessment.id.clone(), assessment);
    }

    pub fn assessment(&self, id: &str) -> Option<&Assessment> {
        self.assessments.get(id)
    }

    /// Replaces the question list of an assessment wholesale. Returns the
    /// updated assessment, or `None` when the id is unknown.
    pub fn replace_questions(&mut self, id: &str, questions: Vec<Question>) -> Option<Assessment> {
        let assessment = self.assessments.get_mut(id)?;
        assessment.questions = questions;
        Some(assessment.clone())
    }

    /// Assessments attached to the given job, in table insertion order.
    pub fn assessments_for_job<'a>(
        &'a self,
        job_id: &'a str,
    ) -> impl Iterator<Item = &'a Assessment> {
        self.assessments
            .values()
            .filter(move |a| a.job_id == job_id)
    }

    // --- Timeline entries ---

    /// Appends a stage-transition entry for a candidate, stamped now.
    ///
    /// The caller is responsible for only appending on an actual stage
    /// change; the store does not compare against the candidate's current
    /// stage.
    pub fn append_timeline(
        &mut self,
        candidate_id: &str,
        stage: Stage,
        notes: Option<String>,
    ) -> TimelineEntry {
        let entry = TimelineEntry {
            id: next_id(),
            candidate_id: candidate_id.to_string(),
            stage,
            changed_at: Utc::now(),
            notes,
        };
        self.timeline_entries.insert(entry.id.clone(), entry.clone());
        entry
    }

    /// Inserts a fully-formed timeline entry, keeping its id.
    pub fn insert_timeline_entry(&mut self, entry: TimelineEntry) {
        self.timeline_entries.insert(entry.id.clone(), entry);
    }

    /// A candidate's history, newest first.
    pub fn timeline_for_candidate(&self, candidate_id: &str) -> Vec<TimelineEntry> {
        let mut entries: Vec<TimelineEntry> = self
            .timeline_entries
            .values()
            .filter(|e| e.candidate_id == candidate_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.changed_at.cmp(&a.changed_at));
        entries
    }

    // --- Snapshots ---

    /// Dumps every table, rows in insertion order.
    pub fn dump(&self) -> StoreSnapshot {
        StoreSnapshot {
            jobs: self.jobs.values().cloned().collect(),
            candidates: self.candidates.values().cloned().collect(),
            assessments: self.assessments.values().cloned().collect(),
            timeline_entries: self.timeline_entries.values().cloned().collect(),
        }
    }

    /// Replaces the whole store contents with a snapshot.
    pub fn load(&mut self, snapshot: StoreSnapshot) {
        self.jobs = snapshot
            .jobs
            .into_iter()
            .map(|j| (j.id.clone(), j))
            .collect();
        self.candidates = snapshot
            .candidates
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();
        self.assessments = snapshot
            .assessments
            .into_iter()
            .map(|a| (a.id.clone(), a))
            .collect();
        self.timeline_entries = snapshot
            .timeline_entries
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            jobs: self.jobs.len(),
            candidates: self.candidates.len(),
            assessments: self.assessments.len(),
            timeline_entries: self.timeline_entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use talentflow_core::types::JobStatus;

    fn job_fields(title: &str, order_id: u32) -> JobFields {
        JobFields {
            title: title.to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            employment_type: "Full-time".to_string(),
            slug: talentflow_core::slug::slugify(title),
            salary: "$100,000 - $130,000".to_string(),
            applicants: 4,
            status: JobStatus::Active,
            tags: vec!["Rust".to_string()],
            order_id,
        }
    }

    fn candidate_fields(name: &str, job_id: Option<&str>) -> CandidateFields {
        CandidateFields {
            name: name.to_string(),
            email: format!(
                "{}@google.com",
                name.to_lowercase().replace(' ', ".")
            ),
            stage: Stage::Applied,
            job_id: job_id.map(str::to_string),
        }
    }

    #[test]
    fn create_and_get_job_roundtrips() {
        let mut store = EntityStore::new();
        let created = store.create_job(job_fields("Backend Engineer", 1));
        let fetched = store.job(&created.id).expect("job exists");
        assert_eq!(fetched, &created);
        assert_eq!(store.counts().jobs, 1);
    }

    #[test]
    fn jobs_iterate_in_insertion_order() {
        let mut store = EntityStore::new();
        for i in 1..=5 {
            store.create_job(job_fields(&format!("Role {i}"), i));
        }
        let titles: Vec<&str> = store.jobs().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["Role 1", "Role 2", "Role 3", "Role 4", "Role 5"]);
    }

    #[test]
    fn candidates_for_job_filters_by_attachment() {
        let mut store = EntityStore::new();
        let job_a = store.create_job(job_fields("Role A", 1));
        let job_b = store.create_job(job_fields("Role B", 2));
        store.create_candidate(candidate_fields("Ada Alvarez", Some(&job_a.id)));
        store.create_candidate(candidate_fields("Bo Lindgren", Some(&job_b.id)));
        store.create_candidate(candidate_fields("Cam Osei", Some(&job_a.id)));
        store.create_candidate(candidate_fields("Unattached Person", None));

        let names: Vec<&str> = store
            .candidates_for_job(&job_a.id)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Ada Alvarez", "Cam Osei"]);
    }

    #[test]
    fn timeline_for_candidate_sorts_newest_first() {
        let mut store = EntityStore::new();
        let candidate = store.create_candidate(candidate_fields("Ada Alvarez", None));

        for (day, stage) in [(3, Stage::Screen), (9, Stage::Tech), (5, Stage::Offer)] {
            store.insert_timeline_entry(TimelineEntry {
                id: format!("entry-{day}"),
                candidate_id: candidate.id.clone(),
                stage,
                changed_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
                notes: None,
            });
        }

        let timeline = store.timeline_for_candidate(&candidate.id);
        let stages: Vec<Stage> = timeline.iter().map(|e| e.stage).collect();
        assert_eq!(stages, [Stage::Tech, Stage::Offer, Stage::Screen]);
    }

    #[test]
    fn replace_questions_swaps_the_whole_list() {
        let mut store = EntityStore::new();
        let job = store.create_job(job_fields("Role", 1));
        let assessment = store.create_assessment(AssessmentFields {
            title: "Screening".to_string(),
            job_id: job.id.clone(),
            questions: Vec::new(),
        });

        let replaced = store
            .replace_questions(
                &assessment.id,
                vec![Question {
                    id: "q1-fresh1".to_string(),
                    question_type: talentflow_core::types::QuestionType::Numeric,
                    text: "Years of experience?".to_string(),
                    options: None,
                    validation: None,
                    condition: None,
                }],
            )
            .expect("assessment exists");
        assert_eq!(replaced.questions.len(), 1);
        assert!(store.replace_questions("missing", Vec::new()).is_none());
    }

    #[test]
    fn dump_then_load_reconstructs_every_table() {
        let mut store = EntityStore::new();
        let job = store.create_job(job_fields("Role", 1));
        let candidate = store.create_candidate(candidate_fields("Ada Alvarez", Some(&job.id)));
        store.append_timeline(&candidate.id, Stage::Screen, Some("moved along".into()));
        store.create_assessment(AssessmentFields {
            title: "Screening".to_string(),
            job_id: job.id.clone(),
            questions: Vec::new(),
        });

        let snapshot = store.dump();
        let mut restored = EntityStore::new();
        restored.load(snapshot.clone());

        assert_eq!(restored.dump(), snapshot);
        assert_eq!(restored.counts(), store.counts());
        assert_eq!(restored.job(&job.id), store.job(&job.id));
    }

    #[test]
    fn load_replaces_previous_contents() {
        let mut store = EntityStore::new();
        store.create_job(job_fields("Stale Role", 1));

        store.load(StoreSnapshot::default());
        assert_eq!(store.counts().jobs, 0);
        assert!(store.jobs().next().is_none());
    }
}

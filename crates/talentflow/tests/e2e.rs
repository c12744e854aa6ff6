// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the complete TalentFlow data layer.
//!
//! Each test boots an isolated TestHarness over an in-memory snapshot
//! gateway with a small deterministic seed dataset. Tests are independent
//! and order-insensitive.

use std::collections::BTreeSet;

use talentflow_api::parse_payload;
use talentflow_core::payload::{
    AssessmentDraft, CandidatePatch, CandidateQuery, JobDraft, JobPatch, JobQuery,
    QuestionsPayload, ReorderRequest,
};
use talentflow_core::types::Stage;
use talentflow_test_utils::{fixtures, TestHarness};

/// Job ids in board order (sorted by orderId), read from a full dump.
async fn board(harness: &TestHarness) -> Vec<String> {
    let mut jobs: Vec<(u32, String)> = harness
        .api
        .dump()
        .await
        .jobs
        .into_iter()
        .map(|j| (j.order_id, j.id))
        .collect();
    jobs.sort();
    jobs.into_iter().map(|(_, id)| id).collect()
}

// ---- Test 1: Boot, seeding, and restart recovery ----

#[tokio::test]
async fn test_boot_seeds_once_and_reboot_restores() {
    let harness = TestHarness::builder().build().await.unwrap();

    let counts = harness.api.counts().await;
    assert_eq!(counts.jobs, 10);
    assert_eq!(counts.candidates, 50);
    assert_eq!(
        harness.snapshots.persist_count(),
        1,
        "boot persists the seed dataset exactly once"
    );

    // A reboot over the same gateway restores; it never reseeds.
    let before = harness.api.dump().await;
    let rebooted = harness.reboot().await.unwrap();
    assert_eq!(rebooted.api.dump().await, before);
    assert_eq!(
        rebooted.snapshots.persist_count(),
        1,
        "restoring writes nothing back"
    );
}

// ---- Test 2: Job create contract ----

#[tokio::test]
async fn test_created_job_echoes_its_fields_under_a_generated_id() {
    let harness = TestHarness::builder()
        .with_seed_counts(0, 0)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();

    let body = r#"{
        "title": "Engineer",
        "department": "Engineering",
        "location": "Remote",
        "type": "Full-time",
        "slug": "engineer",
        "salary": "$130,000 - $160,000",
        "applicants": 0,
        "status": "active",
        "tags": ["Rust"],
        "orderId": 1
    }"#;
    let draft: JobDraft = parse_payload(body).unwrap();
    let response = harness.api.create_job(draft).await.unwrap();

    assert!(!response.job.id.is_empty(), "id is generated server-side");
    assert_eq!(response.job.title, "Engineer");
    assert_eq!(response.job.employment_type, "Full-time");
    assert_eq!(response.job.order_id, 1);

    // The serialized envelope keeps the original wire keys.
    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(wire["job"]["type"], "Full-time");
    assert_eq!(wire["job"]["orderId"], 1);
}

#[tokio::test]
async fn test_missing_create_fields_are_enumerated_together() {
    let harness = TestHarness::builder()
        .with_seed_counts(0, 0)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();

    let draft: JobDraft = parse_payload(r#"{"title": "Engineer"}"#).unwrap();
    let err = harness.api.create_job(draft).await.err().unwrap();
    assert_eq!(err.status(), 400);
    assert_eq!(
        err.to_string(),
        "Missing required fields: department, location, type, slug, salary, applicants, status, tags, orderId"
    );
}

// ---- Test 3: Candidate stage changes and the timeline ----

#[tokio::test]
async fn test_stage_change_appends_exactly_one_timeline_entry() {
    let harness = TestHarness::builder()
        .with_seed_counts(0, 0)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();

    let created = harness
        .api
        .create_candidate(fixtures::candidate_draft("Devon Alvarez", None))
        .await
        .unwrap();
    assert_eq!(created.candidate.stage, Stage::Applied);

    harness
        .api
        .update_candidate(
            &created.candidate.id,
            CandidatePatch {
                stage: Some("screen".into()),
                notes: Some("Phone screen booked by @harper".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let timeline = harness
        .api
        .candidate_timeline(&created.candidate.id)
        .await
        .unwrap();
    assert_eq!(timeline.timeline.len(), 1);
    assert_eq!(timeline.timeline[0].stage, Stage::Screen);
    assert_eq!(
        timeline.timeline[0].notes.as_deref(),
        Some("Phone screen booked by @harper")
    );

    // Re-submitting the same stage appends nothing.
    harness
        .api
        .update_candidate(
            &created.candidate.id,
            CandidatePatch {
                stage: Some("screen".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let timeline = harness
        .api
        .candidate_timeline(&created.candidate.id)
        .await
        .unwrap();
    assert_eq!(timeline.timeline.len(), 1);
}

// ---- Test 4: Board reordering and rollback ----

#[tokio::test]
async fn test_reorder_renumbers_every_job_contiguously() {
    let harness = TestHarness::builder()
        .with_seed_counts(10, 0)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();

    // Seeded orderIds run 1..=10; positions index the sorted board, so the
    // first job sits at position 0 regardless.
    let moved_id = board(&harness).await[0].clone();
    let response = harness
        .api
        .reorder_job(
            &moved_id,
            ReorderRequest {
                from_order: 0,
                to_order: 4,
            },
        )
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.jobs.len(), 10);
    assert_eq!(response.jobs[4].id, moved_id, "moved job sits at position 4");

    let order_ids: BTreeSet<u32> = response.jobs.iter().map(|j| j.order_id).collect();
    assert_eq!(order_ids, (0..10).collect::<BTreeSet<u32>>());
}

#[tokio::test]
async fn test_injected_reorder_failure_rolls_back_the_whole_store() {
    let harness = TestHarness::builder()
        .with_seed_counts(10, 0)
        .with_assessments(0, 0)
        .with_reorder_failure_rate(1.0)
        .build()
        .await
        .unwrap();

    let before = harness.api.dump().await;
    let moved_id = board(&harness).await[0].clone();

    let err = harness
        .api
        .reorder_job(
            &moved_id,
            ReorderRequest {
                from_order: 0,
                to_order: 9,
            },
        )
        .await
        .err()
        .unwrap();
    assert_eq!(err.status(), 500);
    assert_eq!(err.to_string(), "Reorder failed, rolled back");

    let after = harness.api.dump().await;
    assert_eq!(after, before, "rollback restores the exact pre-image");
}

// ---- Test 5: Pagination ----

#[tokio::test]
async fn test_candidate_page_overshoot_clamps_to_the_last_page() {
    let harness = TestHarness::builder()
        .with_seed_counts(5, 1000)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();

    let listed = harness
        .api
        .list_candidates(CandidateQuery {
            page: Some(999),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(listed.page, 100);
    assert_eq!(listed.page_size, 10);
    assert_eq!(listed.total_candids, 1000);
    assert_eq!(listed.total_pages, 100);
    assert_eq!(listed.candidates.len(), 10);
}

#[tokio::test]
async fn test_concatenated_job_pages_reproduce_the_filtered_set() {
    let harness = TestHarness::builder()
        .with_seed_counts(30, 0)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();

    let full = harness
        .api
        .list_jobs(JobQuery {
            status: Some("active".into()),
            page_size: Some(1000),
            ..Default::default()
        })
        .await
        .unwrap();
    let expected: Vec<String> = full.jobs.iter().map(|j| j.id.clone()).collect();

    let mut collected = Vec::new();
    let mut page = 1;
    loop {
        let slice = harness
            .api
            .list_jobs(JobQuery {
                status: Some("active".into()),
                page: Some(page),
                page_size: Some(7),
                ..Default::default()
            })
            .await
            .unwrap();
        collected.extend(slice.jobs.iter().map(|j| j.id.clone()));
        if page >= slice.total_pages {
            break;
        }
        page += 1;
    }

    assert_eq!(collected, expected, "pages concatenate without gaps or overlap");
    assert_eq!(collected.len(), full.total_jobs);
}

// ---- Test 6: Assessments ----

#[tokio::test]
async fn test_assessment_create_checks_the_job_before_the_question_list() {
    let harness = TestHarness::builder()
        .with_seed_counts(0, 0)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();

    // Both problems at once: the job reference wins.
    let draft = AssessmentDraft {
        title: Some("Screening".into()),
        job_id: Some("nonexistent".into()),
        questions: Some(Vec::new()),
    };
    let err = harness.api.create_assessment(draft).await.err().unwrap();
    assert_eq!(err.status(), 400);
    assert_eq!(err.to_string(), "Job not found for jobId");
}

#[tokio::test]
async fn test_assessment_lifecycle_create_fetch_replace() {
    let harness = TestHarness::builder()
        .with_seed_counts(3, 0)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();
    let job_id = board(&harness).await[0].clone();

    let created = harness
        .api
        .create_assessment(AssessmentDraft {
            title: Some("Technical Screen".into()),
            job_id: Some(job_id.clone()),
            questions: Some(vec![
                fixtures::short_text_question("q0-intro1", "Walk us through a recent project."),
                fixtures::single_choice_question(
                    "q1-stack1",
                    "Preferred stack?",
                    &["Rust", "Go", "TypeScript"],
                ),
            ]),
        })
        .await
        .unwrap();
    assert_eq!(created.assessment.job_id, job_id);
    assert_eq!(created.assessment.questions.len(), 2);

    // Lookup by assessment id returns the single envelope.
    let by_id = harness.api.assessments(&created.assessment.id).await.unwrap();
    assert_eq!(by_id.assessment().unwrap().title, "Technical Screen");

    // Lookup by job id fans out to everything the job owns.
    let by_job = harness.api.assessments(&job_id).await.unwrap();
    assert_eq!(by_job.assessments().unwrap().len(), 1);

    // Replacement swaps the question list wholesale.
    let replaced = harness
        .api
        .replace_questions(
            &created.assessment.id,
            QuestionsPayload {
                questions: Some(vec![fixtures::short_text_question(
                    "q0-fresh1",
                    "What changed since we last spoke?",
                )]),
            },
        )
        .await
        .unwrap();
    assert_eq!(replaced.assessment.questions.len(), 1);
}

// ---- Test 7: Mutations survive a restart ----

#[tokio::test]
async fn test_mutations_survive_a_reboot() {
    let harness = TestHarness::builder().build().await.unwrap();

    let job = harness
        .api
        .create_job(fixtures::job_draft("Persistence Probe", 40))
        .await
        .unwrap();
    let candidate = harness
        .api
        .create_candidate(fixtures::candidate_draft("Rene Ortiz", Some(&job.job.id)))
        .await
        .unwrap();
    harness
        .api
        .update_candidate(
            &candidate.candidate.id,
            CandidatePatch {
                stage: Some("tech".into()),
                notes: Some("fast-tracked by @mira".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let before = harness.api.dump().await;
    let rebooted = harness.reboot().await.unwrap();
    assert_eq!(rebooted.api.dump().await, before, "restore is lossless");

    let timeline = rebooted
        .api
        .candidate_timeline(&candidate.candidate.id)
        .await
        .unwrap();
    assert_eq!(timeline.timeline.len(), 1);
    assert_eq!(timeline.timeline[0].stage, Stage::Tech);
}

// ---- Test 8: Unknown ids ----

#[tokio::test]
async fn test_unknown_ids_are_reported_as_not_found() {
    let harness = TestHarness::builder()
        .with_seed_counts(0, 0)
        .with_assessments(0, 0)
        .build()
        .await
        .unwrap();

    let err = harness
        .api
        .update_job(
            "ghost",
            JobPatch {
                title: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await
        .err()
        .unwrap();
    assert_eq!(err.status(), 404);
    assert_eq!(err.to_string(), "Job not found");

    let err = harness.api.candidate_timeline("ghost").await.err().unwrap();
    assert_eq!(err.status(), 404);
    assert_eq!(err.to_string(), "Candidate not found");
}

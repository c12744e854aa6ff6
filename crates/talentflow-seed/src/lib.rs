// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seed dataset generation for first-boot stores.
//!
//! When boot finds no snapshot to restore, the store is filled with a
//! generated dataset shaped like a busy hiring board: jobs across
//! departments, a large candidate pool attached to random jobs, and
//! question sets for the first few jobs. Every draw comes from one
//! injected [`StdRng`], so a fixed `rng_seed` reproduces the dataset
//! exactly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use uuid::Builder;

use talentflow_config::model::SeedConfig;
use talentflow_core::slug::slugify;
use talentflow_core::types::{
    Assessment, Candidate, Job, JobStatus, Question, QuestionType, Stage, ValidationRules,
};
use talentflow_store::EntityStore;

mod pools;

/// Question kinds the generator draws from. File uploads are left out so
/// every generated question is answerable inline.
const QUESTION_KINDS: [QuestionType; 5] = [
    QuestionType::SingleChoice,
    QuestionType::MultiChoice,
    QuestionType::ShortText,
    QuestionType::LongText,
    QuestionType::Numeric,
];

const ID_SUFFIX_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Fills `store` with a generated dataset per `config`.
///
/// Jobs get `order_id` 1..=N in creation order; every candidate attaches
/// to a random job; the first `assessed_jobs` jobs each receive 3 to 4
/// assessments of `questions_per_assessment` questions.
pub fn seed_store(store: &mut EntityStore, config: &SeedConfig, rng: &mut StdRng) {
    let jobs = seed_jobs(store, config.jobs, rng);
    seed_candidates(store, &jobs, config.candidates, rng);
    seed_assessments(
        store,
        &jobs,
        config.assessed_jobs,
        config.questions_per_assessment,
        rng,
    );
    let counts = store.counts();
    debug!(
        jobs = counts.jobs,
        candidates = counts.candidates,
        assessments = counts.assessments,
        "seed dataset generated"
    );
}

fn seed_jobs(store: &mut EntityStore, count: usize, rng: &mut StdRng) -> Vec<Job> {
    (1..=count)
        .map(|order| {
            let job = random_job(order as u32, rng);
            store.insert_job(job.clone());
            job
        })
        .collect()
}

fn seed_candidates(store: &mut EntityStore, jobs: &[Job], count: usize, rng: &mut StdRng) {
    for _ in 0..count {
        let candidate = random_candidate(jobs, rng);
        store.insert_candidate(candidate);
    }
}

fn seed_assessments(
    store: &mut EntityStore,
    jobs: &[Job],
    assessed_jobs: usize,
    questions_per_assessment: usize,
    rng: &mut StdRng,
) {
    for job in jobs.iter().take(assessed_jobs) {
        let count = rng.gen_range(3..=4);
        for index in 0..count {
            let assessment = Assessment {
                id: random_uuid(rng),
                job_id: job.id.clone(),
                title: format!("Assessment {} for {}", index + 1, job.title),
                questions: (0..questions_per_assessment)
                    .map(|q| random_question(q, rng))
                    .collect(),
            };
            store.insert_assessment(assessment);
        }
    }
}

fn random_job(order_id: u32, rng: &mut StdRng) -> Job {
    let title = format!(
        "{} {} {}",
        pick(pools::TITLE_DESCRIPTORS, rng),
        pick(pools::TITLE_AREAS, rng),
        pick(pools::TITLE_ROLES, rng),
    );
    let slug = slugify(&title);
    let tag_count = rng.gen_range(1..=3);
    let tags = pools::TAGS
        .choose_multiple(rng, tag_count)
        .map(|tag| (*tag).to_string())
        .collect();
    Job {
        id: random_uuid(rng),
        title,
        department: pick(pools::DEPARTMENTS, rng).to_string(),
        location: pick(pools::LOCATIONS, rng).to_string(),
        employment_type: pick(pools::EMPLOYMENT_TYPES, rng).to_string(),
        slug,
        salary: pick(pools::SALARY_BANDS, rng).to_string(),
        applicants: rng.gen_range(0..=150),
        status: if rng.gen_range(0..2) == 0 {
            JobStatus::Active
        } else {
            JobStatus::Archived
        },
        tags,
        order_id,
    }
}

fn random_candidate(jobs: &[Job], rng: &mut StdRng) -> Candidate {
    let first = pick(pools::FIRST_NAMES, rng);
    let last = pick(pools::LAST_NAMES, rng);
    let email = format!(
        "{}.{}{}@google.com",
        first.to_lowercase(),
        last.to_lowercase(),
        rng.gen_range(10..100),
    );
    Candidate {
        id: random_uuid(rng),
        name: format!("{first} {last}"),
        email,
        stage: Stage::ALL[rng.gen_range(0..Stage::ALL.len())],
        job_id: (!jobs.is_empty()).then(|| jobs[rng.gen_range(0..jobs.len())].id.clone()),
    }
}

fn random_question(index: usize, rng: &mut StdRng) -> Question {
    let kind = QUESTION_KINDS[rng.gen_range(0..QUESTION_KINDS.len())];
    let options = kind.is_choice().then(|| {
        pools::CHOICE_OPTIONS
            .iter()
            .map(|option| (*option).to_string())
            .collect()
    });
    Question {
        id: question_id(index, rng),
        question_type: kind,
        text: format!("Sample question {}?", index + 1),
        options,
        validation: Some(ValidationRules {
            required: Some(true),
            ..ValidationRules::default()
        }),
        condition: None,
    }
}

/// Ids look like `q3-x7k2mq`: slot index plus a short random suffix.
fn question_id(index: usize, rng: &mut StdRng) -> String {
    let suffix: String = (0..6)
        .map(|_| ID_SUFFIX_CHARS[rng.gen_range(0..ID_SUFFIX_CHARS.len())] as char)
        .collect();
    format!("q{index}-{suffix}")
}

/// UUID drawn from the injected rng, so fixed seeds give stable ids.
fn random_uuid(rng: &mut StdRng) -> String {
    let bytes: [u8; 16] = rng.r#gen();
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

fn pick<'a>(pool: &[&'a str], rng: &mut StdRng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn small_config() -> SeedConfig {
        SeedConfig {
            jobs: 10,
            candidates: 50,
            assessed_jobs: 3,
            questions_per_assessment: 5,
            rng_seed: Some(11),
        }
    }

    fn seeded(config: &SeedConfig, seed: u64) -> EntityStore {
        let mut store = EntityStore::new();
        let mut rng = StdRng::seed_from_u64(seed);
        seed_store(&mut store, config, &mut rng);
        store
    }

    #[test]
    fn generates_the_configured_row_counts() {
        let store = seeded(&small_config(), 11);
        let counts = store.counts();
        assert_eq!(counts.jobs, 10);
        assert_eq!(counts.candidates, 50);
        // 3 assessed jobs with 3 or 4 assessments each.
        assert!((9..=12).contains(&counts.assessments));
        assert_eq!(counts.timeline_entries, 0);
    }

    #[test]
    fn job_order_ids_run_from_one_in_creation_order() {
        let store = seeded(&small_config(), 11);
        let order_ids: Vec<u32> = store.jobs().map(|j| j.order_id).collect();
        assert_eq!(order_ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn jobs_carry_pool_labels_and_slugged_titles() {
        let store = seeded(&small_config(), 17);
        for job in store.jobs() {
            assert!(pools::DEPARTMENTS.contains(&job.department.as_str()));
            assert!(pools::LOCATIONS.contains(&job.location.as_str()));
            assert!(pools::EMPLOYMENT_TYPES.contains(&job.employment_type.as_str()));
            assert!(pools::SALARY_BANDS.contains(&job.salary.as_str()));
            assert_eq!(job.slug, slugify(&job.title));
            assert!((1..=3).contains(&job.tags.len()));
            assert!(job.applicants <= 150);
        }
    }

    #[test]
    fn candidates_attach_to_existing_jobs() {
        let store = seeded(&small_config(), 3);
        for candidate in store.candidates() {
            let job_id = candidate
                .job_id
                .as_deref()
                .expect("seeded candidates attach to a job");
            assert!(store.job(job_id).is_some());
            assert!(candidate.email.ends_with("@google.com"));
            assert!(candidate.name.contains(' '));
        }
    }

    #[test]
    fn only_the_first_jobs_receive_assessments() {
        let config = small_config();
        let store = seeded(&config, 5);
        let jobs: Vec<Job> = store.jobs().cloned().collect();
        for (index, job) in jobs.iter().enumerate() {
            let owned = store.assessments_for_job(&job.id).count();
            if index < config.assessed_jobs {
                assert!((3..=4).contains(&owned), "assessed job owns 3-4 assessments");
            } else {
                assert_eq!(owned, 0, "unassessed job owns none");
            }
        }
    }

    #[test]
    fn questions_follow_the_generated_shape() {
        let store = seeded(&small_config(), 23);
        let expected_options: Vec<String> = pools::CHOICE_OPTIONS
            .iter()
            .map(|option| (*option).to_string())
            .collect();
        let jobs: Vec<Job> = store.jobs().cloned().collect();
        for job in &jobs {
            for assessment in store.assessments_for_job(&job.id) {
                assert_eq!(assessment.questions.len(), 5);
                assert!(assessment.title.contains(&job.title));
                for (index, question) in assessment.questions.iter().enumerate() {
                    assert!(question.id.starts_with(&format!("q{index}-")));
                    assert_eq!(question.text, format!("Sample question {}?", index + 1));
                    assert_eq!(
                        question.validation.as_ref().and_then(|v| v.required),
                        Some(true)
                    );
                    if question.question_type.is_choice() {
                        assert_eq!(question.options.as_ref(), Some(&expected_options));
                    } else {
                        assert!(question.options.is_none());
                    }
                }
            }
        }
    }

    #[test]
    fn identical_seeds_generate_identical_datasets() {
        let config = small_config();
        let a = seeded(&config, 42);
        let b = seeded(&config, 42);
        assert_eq!(a.dump(), b.dump());
    }

    #[test]
    fn different_seeds_diverge() {
        let config = small_config();
        let a = seeded(&config, 1);
        let b = seeded(&config, 2);
        assert_ne!(a.dump(), b.dump());
    }

    #[test]
    fn empty_job_pool_leaves_candidates_unattached() {
        let config = SeedConfig {
            jobs: 0,
            candidates: 5,
            assessed_jobs: 0,
            questions_per_assessment: 0,
            rng_seed: Some(1),
        };
        let store = seeded(&config, 1);
        assert_eq!(store.counts().jobs, 0);
        for candidate in store.candidates() {
            assert!(candidate.job_id.is_none());
        }
    }
}

//! Integration tests for the portfolio and profile repositories
//! (projects, skills, testimonials, experience, education, taxonomy).
//!
//! Covers active filtering, newest-first ordering, locale-filtered graph
//! decode, COALESCE partial updates, and guarded translation upserts.

use chrono::NaiveDate;
use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_db::models::education::CreateEducation;
use atelier_db::models::experience::{CreateExperience, UpsertExperienceTranslation};
use atelier_db::models::project::{CreateProject, UpdateProject, UpsertProjectTranslation};
use atelier_db::models::skill::{CreateSkill, UpdateSkill};
use atelier_db::models::taxonomy::{CreateTaxonomyItem, UpsertNameTranslation};
use atelier_db::models::testimonial::{CreateTestimonial, UpdateTestimonial};
use atelier_db::repositories::{
    EducationRepo, ExperienceRepo, ProjectRepo, SkillRepo, TagRepo, TechniqueRepo,
    TestimonialRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(slug: &str) -> CreateProject {
    CreateProject {
        slug: slug.to_string(),
        image_url: None,
        repo_url: None,
        live_url: None,
        is_featured: None,
    }
}

fn new_skill(level: i16) -> CreateSkill {
    CreateSkill {
        icon_url: None,
        level,
        sort_order: None,
    }
}

fn new_experience(started: NaiveDate) -> CreateExperience {
    CreateExperience {
        company_url: None,
        started_on: started,
        ended_on: None,
        is_current: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Active filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn deactivated_project_disappears_from_the_public_listing(pool: PgPool) {
    let kept = ProjectRepo::create(&pool, &new_project("kept")).await.unwrap();
    let hidden = ProjectRepo::create(&pool, &new_project("hidden")).await.unwrap();

    ProjectRepo::update(
        &pool,
        hidden.id,
        &UpdateProject {
            slug: None,
            image_url: None,
            repo_url: None,
            live_url: None,
            is_active: Some(false),
            is_featured: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    let active = ProjectRepo::list_active(&pool, Locale::En).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].slug, "kept");
    assert!(ProjectRepo::find_active_by_id(&pool, hidden.id, Locale::En)
        .await
        .unwrap()
        .is_none());
    assert!(ProjectRepo::find_active_by_id(&pool, kept.id, Locale::En)
        .await
        .unwrap()
        .is_some());

    assert_eq!(ProjectRepo::list_all(&pool, Locale::En).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn inactive_profile_rows_are_excluded_everywhere(pool: PgPool) {
    let skill = SkillRepo::create(&pool, &new_skill(50)).await.unwrap();
    SkillRepo::update(
        &pool,
        skill.id,
        &UpdateSkill {
            icon_url: None,
            level: None,
            sort_order: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap()
    .unwrap();
    SkillRepo::create(&pool, &new_skill(70)).await.unwrap();

    assert_eq!(SkillRepo::list_active(&pool, Locale::En).await.unwrap().len(), 1);
    assert_eq!(SkillRepo::list_all(&pool, Locale::En).await.unwrap().len(), 2);

    let t = TestimonialRepo::create(&pool, &CreateTestimonial { avatar_url: None })
        .await
        .unwrap();
    TestimonialRepo::update(
        &pool,
        t.id,
        &UpdateTestimonial {
            avatar_url: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(TestimonialRepo::list_active(&pool, Locale::En)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn project_listing_is_newest_first(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("oldest")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("middle")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("newest")).await.unwrap();

    let slugs: Vec<_> = ProjectRepo::list_active(&pool, Locale::En)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.slug)
        .collect();
    assert_eq!(slugs, ["newest", "middle", "oldest"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn taxonomy_admin_listing_is_ordered_by_slug(pool: PgPool) {
    for slug in ["zeta", "alpha", "mid"] {
        TagRepo::create(&pool, &CreateTaxonomyItem { slug: slug.to_string() })
            .await
            .unwrap();
    }

    let slugs: Vec<_> = TagRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.slug)
        .collect();
    assert_eq!(slugs, ["alpha", "mid", "zeta"]);
}

// ---------------------------------------------------------------------------
// Graph decode
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn project_graph_filters_translations_by_locale(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("site")).await.unwrap();
    ProjectRepo::upsert_translation(
        &pool,
        project.id,
        Locale::En,
        &UpsertProjectTranslation {
            title: "Portfolio".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap()
    .unwrap();

    let technique = TechniqueRepo::create(
        &pool,
        &CreateTaxonomyItem {
            slug: "wasm".to_string(),
        },
    )
    .await
    .unwrap();
    TechniqueRepo::upsert_translation(
        &pool,
        technique.id,
        Locale::En,
        &UpsertNameTranslation {
            name: "WebAssembly".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(ProjectRepo::set_techniques(&pool, project.id, &[technique.id])
        .await
        .unwrap());

    let en = ProjectRepo::find_active_by_id(&pool, project.id, Locale::En)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(en.translations.len(), 1);
    assert_eq!(en.translations[0].title, "Portfolio");
    assert_eq!(en.techniques.len(), 1);
    assert_eq!(en.techniques[0].translations.len(), 1);

    // The other locale sees the same shape with no translation rows:
    // cardinality is preserved, names fall back at projection time.
    let ar = ProjectRepo::find_active_by_id(&pool, project.id, Locale::Ar)
        .await
        .unwrap()
        .unwrap();
    assert!(ar.translations.is_empty());
    assert_eq!(ar.techniques.len(), 1);
    assert!(ar.techniques[0].translations.is_empty());
}

// ---------------------------------------------------------------------------
// Partial updates and defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn skill_partial_update_keeps_unset_fields(pool: PgPool) {
    let skill = SkillRepo::create(&pool, &new_skill(40)).await.unwrap();
    assert_eq!(skill.sort_order, 0); // default when not supplied

    let updated = SkillRepo::update(
        &pool,
        skill.id,
        &UpdateSkill {
            icon_url: None,
            level: Some(90),
            sort_order: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.level, 90);
    assert_eq!(updated.sort_order, 0);
    assert!(updated.is_active);
}

#[sqlx::test(migrations = "./migrations")]
async fn experience_defaults_to_not_current(pool: PgPool) {
    let entry = ExperienceRepo::create(&pool, &new_experience(date(2023, 1, 9)))
        .await
        .unwrap();
    assert!(!entry.is_current);
    assert!(entry.is_active);
    assert_eq!(entry.started_on, date(2023, 1, 9));
}

// ---------------------------------------------------------------------------
// Guarded translation upserts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn translation_upserts_against_missing_parents_report_absence(pool: PgPool) {
    assert!(!SkillRepo::upsert_translation(
        &pool,
        999,
        Locale::En,
        &UpsertNameTranslation {
            name: "Ghost".to_string()
        },
    )
    .await
    .unwrap());

    assert!(!ExperienceRepo::upsert_translation(
        &pool,
        999,
        Locale::En,
        &UpsertExperienceTranslation {
            title: "Ghost".to_string(),
            company: String::new(),
            description: String::new(),
        },
    )
    .await
    .unwrap());

    assert!(!ProjectRepo::set_techniques(&pool, 999, &[]).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn education_translation_round_trips_through_the_graph(pool: PgPool) {
    let entry = EducationRepo::create(
        &pool,
        &CreateEducation {
            started_on: date(2018, 9, 1),
            ended_on: Some(date(2022, 6, 30)),
        },
    )
    .await
    .unwrap();

    assert!(EducationRepo::upsert_translation(
        &pool,
        entry.id,
        Locale::Ar,
        &atelier_db::models::education::UpsertEducationTranslation {
            institution: "جامعة القاهرة".to_string(),
            degree: String::new(),
            description: String::new(),
        },
    )
    .await
    .unwrap());

    let graph = EducationRepo::find_by_id(&pool, entry.id, Locale::Ar)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graph.translations.len(), 1);
    assert_eq!(graph.translations[0].institution, "جامعة القاهرة");

    // Projection composes on top of the decoded row.
    let view = graph.project(Locale::Ar);
    assert_eq!(view.institution, "جامعة القاهرة");
    assert_eq!(view.locale, Locale::Ar);
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_taxonomy_slug_is_rejected(pool: PgPool) {
    TagRepo::create(&pool, &CreateTaxonomyItem { slug: "dup".to_string() })
        .await
        .unwrap();
    assert!(TagRepo::create(&pool, &CreateTaxonomyItem { slug: "dup".to_string() })
        .await
        .is_err());
}

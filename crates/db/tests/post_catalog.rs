//! Integration tests for the post repository against a real database.
//!
//! Exercises the SQL-side contracts the projectors rely on:
//! - publish filtering on the public listing
//! - newest-first ordering with id tie-break
//! - single-query graph rows (locale-filtered translations, category, tags,
//!   aggregate counts) decoding through their JSON columns
//! - guarded writes (likes, comments, tag sets) against missing parents

use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_db::models::post::{CreateComment, CreatePost, Post, UpdatePost, UpsertPostTranslation};
use atelier_db::models::taxonomy::{CreateTaxonomyItem, UpsertNameTranslation};
use atelier_db::repositories::{CategoryRepo, CommentRepo, DashboardRepo, PostRepo, TagRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_post(slug: &str) -> CreatePost {
    CreatePost {
        slug: slug.to_string(),
        cover_image_url: None,
        category_id: None,
    }
}

fn translation(title: &str) -> UpsertPostTranslation {
    UpsertPostTranslation {
        title: title.to_string(),
        excerpt: String::new(),
        content: String::new(),
    }
}

fn comment(author: &str, body: &str) -> CreateComment {
    CreateComment {
        author_name: author.to_string(),
        body: body.to_string(),
    }
}

async fn published_post(pool: &PgPool, slug: &str) -> Post {
    let post = PostRepo::create(pool, &new_post(slug)).await.unwrap();
    PostRepo::set_published(pool, post.id, true)
        .await
        .unwrap()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Publish filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn drafts_never_appear_in_the_public_listing(pool: PgPool) {
    PostRepo::create(&pool, &new_post("draft")).await.unwrap();
    published_post(&pool, "live").await;

    let public = PostRepo::list_published(&pool, Locale::En).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].slug, "live");

    // The admin listing sees both.
    let all = PostRepo::list_all(&pool, Locale::En).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn draft_is_not_fetchable_through_the_published_reads(pool: PgPool) {
    let draft = PostRepo::create(&pool, &new_post("hidden")).await.unwrap();

    assert!(PostRepo::find_published_by_id(&pool, draft.id, Locale::En)
        .await
        .unwrap()
        .is_none());
    assert!(PostRepo::find_published_by_slug(&pool, "hidden", Locale::En)
        .await
        .unwrap()
        .is_none());
    // The admin read still finds it.
    assert!(PostRepo::find_by_id(&pool, draft.id, Locale::En)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn public_listing_is_newest_first(pool: PgPool) {
    published_post(&pool, "first").await;
    published_post(&pool, "second").await;
    published_post(&pool, "third").await;

    let slugs: Vec<_> = PostRepo::list_published(&pool, Locale::En)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.slug)
        .collect();
    assert_eq!(slugs, ["third", "second", "first"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn publish_timestamp_survives_unpublish_and_republish(pool: PgPool) {
    let post = published_post(&pool, "keeper").await;
    let first_published_at = post.published_at.unwrap();

    let unpublished = PostRepo::set_published(&pool, post.id, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!unpublished.is_published);
    assert_eq!(unpublished.published_at, Some(first_published_at));

    let republished = PostRepo::set_published(&pool, post.id, true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(republished.published_at, Some(first_published_at));
}

// ---------------------------------------------------------------------------
// Graph rows decode in one round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn graph_row_carries_translations_category_tags_and_counts(pool: PgPool) {
    let category = CategoryRepo::create(
        &pool,
        &CreateTaxonomyItem {
            slug: "general".to_string(),
        },
    )
    .await
    .unwrap();
    CategoryRepo::upsert_translation(
        &pool,
        category.id,
        Locale::En,
        &UpsertNameTranslation {
            name: "General".to_string(),
        },
    )
    .await
    .unwrap();

    let post = PostRepo::create(&pool, &new_post("graph")).await.unwrap();
    PostRepo::update(
        &pool,
        post.id,
        &UpdatePost {
            slug: None,
            cover_image_url: None,
            category_id: Some(category.id),
        },
    )
    .await
    .unwrap()
    .unwrap();
    PostRepo::set_published(&pool, post.id, true)
        .await
        .unwrap()
        .unwrap();

    PostRepo::upsert_translation(&pool, post.id, Locale::En, &translation("Hello"))
        .await
        .unwrap()
        .unwrap();
    PostRepo::upsert_translation(&pool, post.id, Locale::Ar, &translation("مرحبا"))
        .await
        .unwrap()
        .unwrap();

    let named = TagRepo::create(
        &pool,
        &CreateTaxonomyItem {
            slug: "rust".to_string(),
        },
    )
    .await
    .unwrap();
    TagRepo::upsert_translation(
        &pool,
        named.id,
        Locale::En,
        &UpsertNameTranslation {
            name: "Rust".to_string(),
        },
    )
    .await
    .unwrap();
    let bare = TagRepo::create(
        &pool,
        &CreateTaxonomyItem {
            slug: "bare".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(PostRepo::set_tags(&pool, post.id, &[named.id, bare.id])
        .await
        .unwrap());

    PostRepo::like(&pool, post.id).await.unwrap().unwrap();
    let pending = CommentRepo::create(&pool, post.id, &comment("Reem", "Nice"))
        .await
        .unwrap()
        .unwrap();
    CommentRepo::create(&pool, post.id, &comment("Omar", "Spam"))
        .await
        .unwrap()
        .unwrap();
    CommentRepo::approve(&pool, pending.id).await.unwrap().unwrap();

    let graph = PostRepo::find_published_by_id(&pool, post.id, Locale::En)
        .await
        .unwrap()
        .unwrap();

    // Translations are pre-filtered to the requested locale.
    assert_eq!(graph.translations.len(), 1);
    assert_eq!(graph.translations[0].title, "Hello");

    let cat = graph.category.as_ref().unwrap();
    assert_eq!(cat.slug, "general");
    assert_eq!(cat.translations.len(), 1);

    // Tags keep full cardinality; the untranslated one just has no names.
    assert_eq!(graph.tags.len(), 2);
    assert_eq!(graph.tags[0].translations.len(), 1);
    assert!(graph.tags[1].translations.is_empty());

    assert_eq!(graph.likes_count, 1);
    // Only the approved comment counts.
    assert_eq!(graph.comments_count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn translation_upsert_replaces_in_place(pool: PgPool) {
    let post = published_post(&pool, "evolving").await;

    let first = PostRepo::upsert_translation(&pool, post.id, Locale::En, &translation("Draft"))
        .await
        .unwrap()
        .unwrap();
    let second = PostRepo::upsert_translation(&pool, post.id, Locale::En, &translation("Final"))
        .await
        .unwrap()
        .unwrap();

    // Same row, new content: the schema allows one row per (post, locale).
    assert_eq!(second.id, first.id);
    assert_eq!(second.title, "Final");

    let graph = PostRepo::find_published_by_id(&pool, post.id, Locale::En)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graph.translations.len(), 1);
    assert_eq!(graph.translations[0].title, "Final");
}

// ---------------------------------------------------------------------------
// Guarded writes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn writes_against_a_missing_post_report_absence(pool: PgPool) {
    assert!(
        PostRepo::upsert_translation(&pool, 999, Locale::En, &translation("?"))
            .await
            .unwrap()
            .is_none()
    );
    assert!(PostRepo::like(&pool, 999).await.unwrap().is_none());
    assert!(CommentRepo::create(&pool, 999, &comment("Nobody", "?"))
        .await
        .unwrap()
        .is_none());
    assert!(!PostRepo::set_tags(&pool, 999, &[]).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn set_tags_replaces_the_whole_set(pool: PgPool) {
    let post = published_post(&pool, "tagged").await;
    let a = TagRepo::create(&pool, &CreateTaxonomyItem { slug: "a".to_string() })
        .await
        .unwrap();
    let b = TagRepo::create(&pool, &CreateTaxonomyItem { slug: "b".to_string() })
        .await
        .unwrap();

    assert!(PostRepo::set_tags(&pool, post.id, &[a.id, b.id]).await.unwrap());
    assert!(PostRepo::set_tags(&pool, post.id, &[b.id]).await.unwrap());

    let graph = PostRepo::find_published_by_id(&pool, post.id, Locale::En)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graph.tags.len(), 1);
    assert_eq!(graph.tags[0].slug, "b");
}

#[sqlx::test(migrations = "./migrations")]
async fn likes_accumulate(pool: PgPool) {
    let post = published_post(&pool, "liked").await;
    assert_eq!(PostRepo::like(&pool, post.id).await.unwrap(), Some(1));
    assert_eq!(PostRepo::like(&pool, post.id).await.unwrap(), Some(2));
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn approved_comments_come_back_oldest_first(pool: PgPool) {
    let post = published_post(&pool, "discussed").await;
    let first = CommentRepo::create(&pool, post.id, &comment("A", "first"))
        .await
        .unwrap()
        .unwrap();
    let second = CommentRepo::create(&pool, post.id, &comment("B", "second"))
        .await
        .unwrap()
        .unwrap();
    CommentRepo::create(&pool, post.id, &comment("C", "held"))
        .await
        .unwrap()
        .unwrap();

    CommentRepo::approve(&pool, first.id).await.unwrap().unwrap();
    CommentRepo::approve(&pool, second.id).await.unwrap().unwrap();

    let approved = CommentRepo::list_approved(&pool, post.id).await.unwrap();
    assert_eq!(approved.len(), 2);
    assert_eq!(approved[0].body, "first");
    assert_eq!(approved[1].body, "second");

    // Moderation sees everything.
    assert_eq!(CommentRepo::list_all(&pool, post.id).await.unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Constraints and counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_post_slug_is_rejected(pool: PgPool) {
    PostRepo::create(&pool, &new_post("taken")).await.unwrap();
    assert!(PostRepo::create(&pool, &new_post("taken")).await.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn dashboard_counts_track_posts_and_moderation(pool: PgPool) {
    PostRepo::create(&pool, &new_post("draft")).await.unwrap();
    let live = published_post(&pool, "live").await;
    CommentRepo::create(&pool, live.id, &comment("D", "pending"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(DashboardRepo::count_posts(&pool).await.unwrap(), 2);
    assert_eq!(DashboardRepo::count_published_posts(&pool).await.unwrap(), 1);
    assert_eq!(DashboardRepo::count_pending_comments(&pool).await.unwrap(), 1);
}

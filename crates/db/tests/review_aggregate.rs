//! Integration tests for the review lifecycle and its rating aggregate.
//!
//! Exercises the repository layer against a real database:
//! - Review uniqueness per (professional, client) pair
//! - Aggregate recompute on insert, update, and delete
//! - Ownership enforcement in the WHERE clause
//!
//! These tests need a PostgreSQL instance (`DATABASE_URL`); they are marked
//! `#[ignore]` so the default suite runs without one:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test -p gladiator-db -- --ignored
//! ```

use gladiator_core::types::DbId;
use gladiator_db::models::profile::CreateProfile;
use gladiator_db::models::review::UpdateReview;
use gladiator_db::repositories::{ProfileRepo, RatingRepo, ReviewRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str, user_type: &str) -> DbId {
    let input = CreateProfile {
        email: email.to_string(),
        password_hash: "$argon2id$fake".to_string(),
        user_type: user_type.to_string(),
        full_name: None,
    };
    ProfileRepo::create(pool, &input)
        .await
        .expect("profile creation should succeed")
        .id
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn duplicate_review_rejected_and_first_unmodified(pool: PgPool) {
    let professional = new_user(&pool, "pro@example.com", "professional").await;
    let client = new_user(&pool, "client@example.com", "client").await;

    let first = ReviewRepo::create(&pool, professional, client, 5, Some("great"))
        .await
        .expect("first review should succeed");

    let second = ReviewRepo::create(&pool, professional, client, 3, None).await;
    assert!(second.is_err(), "second review for the same pair must fail");

    // The stored review keeps its original rating.
    let stored = ReviewRepo::find_by_id(&pool, first.id)
        .await
        .unwrap()
        .expect("first review still exists");
    assert_eq!(stored.rating, 5);

    // The aggregate reflects only the surviving review.
    let aggregate = RatingRepo::get(&pool, professional).await.unwrap().unwrap();
    assert_eq!(aggregate.review_count, 1);
    assert_eq!(aggregate.average_rating, 5.0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn aggregate_tracks_insert_update_delete(pool: PgPool) {
    let professional = new_user(&pool, "pro@example.com", "professional").await;
    let alice = new_user(&pool, "alice@example.com", "client").await;
    let bob = new_user(&pool, "bob@example.com", "client").await;

    // Zero reviews: no aggregate row.
    assert!(RatingRepo::get(&pool, professional).await.unwrap().is_none());

    let alice_review = ReviewRepo::create(&pool, professional, alice, 5, None)
        .await
        .unwrap();
    let bob_review = ReviewRepo::create(&pool, professional, bob, 2, None)
        .await
        .unwrap();

    let aggregate = RatingRepo::get(&pool, professional).await.unwrap().unwrap();
    assert_eq!(aggregate.review_count, 2);
    assert_eq!(aggregate.average_rating, 3.5);

    // Editing a review moves the average.
    let update = UpdateReview {
        rating: 4,
        comment: None,
    };
    ReviewRepo::update(&pool, alice_review.id, alice, &update)
        .await
        .unwrap()
        .expect("author update should succeed");

    let aggregate = RatingRepo::get(&pool, professional).await.unwrap().unwrap();
    assert_eq!(aggregate.average_rating, 3.0);

    // Deleting one review leaves the other's aggregate.
    assert!(ReviewRepo::delete(&pool, alice_review.id, alice).await.unwrap());
    let aggregate = RatingRepo::get(&pool, professional).await.unwrap().unwrap();
    assert_eq!(aggregate.review_count, 1);
    assert_eq!(aggregate.average_rating, 2.0);

    // Deleting the last review returns to the zero-review state (row absent).
    assert!(ReviewRepo::delete(&pool, bob_review.id, bob).await.unwrap());
    assert!(RatingRepo::get(&pool, professional).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn non_author_cannot_update_or_delete(pool: PgPool) {
    let professional = new_user(&pool, "pro@example.com", "professional").await;
    let author = new_user(&pool, "author@example.com", "client").await;
    let stranger = new_user(&pool, "stranger@example.com", "client").await;

    let review = ReviewRepo::create(&pool, professional, author, 4, Some("solid"))
        .await
        .unwrap();

    // A different client id hits no row.
    let update = UpdateReview {
        rating: 1,
        comment: None,
    };
    let updated = ReviewRepo::update(&pool, review.id, stranger, &update)
        .await
        .unwrap();
    assert!(updated.is_none(), "non-author update must not match a row");

    let deleted = ReviewRepo::delete(&pool, review.id, stranger).await.unwrap();
    assert!(!deleted, "non-author delete must not match a row");

    // The review is unchanged.
    let stored = ReviewRepo::find_by_id(&pool, review.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.rating, 4);
    assert_eq!(stored.comment.as_deref(), Some("solid"));
}

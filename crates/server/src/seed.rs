use sqlx::SqlitePool;

use crate::models::CreateMovie;
use crate::repositories::MovieRepository;

/// Seed the database with a few movies for development.
/// Does nothing when the catalog already has entries.
pub async fn seed_movies(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing = MovieRepository::get_all(pool, None).await?;
    if !existing.is_empty() {
        return Ok(());
    }

    tracing::debug!("Seeding database with sample movies...");

    let seed_data = vec![
        CreateMovie {
            title: "The Grand Budapest Hotel".to_string(),
            description: "A concierge and his lobby boy are drawn into a theft."
                .to_string(),
            genre: "Comedy".to_string(),
            release_year: Some(2014),
        },
        CreateMovie {
            title: "Blade Runner 2049".to_string(),
            description: "A young blade runner unearths a long-buried secret."
                .to_string(),
            genre: "Science Fiction".to_string(),
            release_year: Some(2017),
        },
        CreateMovie {
            title: "Parasite".to_string(),
            description: "A poor family schemes its way into a wealthy household."
                .to_string(),
            genre: "Thriller".to_string(),
            release_year: Some(2019),
        },
    ];

    for movie in seed_data {
        MovieRepository::create(pool, movie).await?;
    }

    Ok(())
}

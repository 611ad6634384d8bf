use std::collections::HashSet;

use crate::models::{CastCredit, Credit, CreditKey, CrewCredit, KnownForEntry, MediaKind};

pub const POPULARITY_WEIGHT: f64 = 0.35;
pub const QUALITY_WEIGHT: f64 = 0.35;
pub const ROLE_WEIGHT: f64 = 0.30;

/// Entries below this score are dropped unless the fallback kicks in
pub const MIN_SCORE: f64 = 0.30;
pub const MAX_ENTRIES: usize = 8;
/// Fewer entries than this after the score floor triggers the fallback
pub const MIN_ENTRIES: usize = 3;
pub const FALLBACK_ENTRIES: usize = 5;

/// Crew jobs an actor's filmography keeps
const HEADLINE_JOBS: [&str; 4] = ["director", "creator", "writer", "producer"];
/// Crew jobs that count as full role significance
const KEY_CREATIVE_JOBS: [&str; 4] = ["director", "creator", "writer", "screenplay"];

const ACTING_DEPARTMENT: &str = "acting";
const UNKNOWN_TITLE: &str = "Unknown";

/// A credit that survived filtering, with its final score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCredit {
    pub credit: Credit,
    pub score: f64,
}

/// Popularity normalized to [0, 1], saturating at 100
pub fn popularity_score(popularity: f64) -> f64 {
    (popularity / 100.0).min(1.0)
}

/// Average rating mapped from the 0-10 scale to [0, 1]
pub fn quality_score(vote_average: f64) -> f64 {
    vote_average / 10.0
}

/// How prominent the person's participation was, in [0, 1]
pub fn role_significance(credit: &Credit, primary_department: &str) -> f64 {
    match credit {
        Credit::Cast(cast) => match cast.series_episode_count() {
            Some(count) if count >= 10 => 1.0,
            Some(count) if count >= 5 => 0.6,
            Some(count) if count >= 2 => 0.3,
            Some(_) => 0.1,
            None => 0.8,
        },
        Credit::Crew(crew) => {
            let job = crew.job.to_lowercase();
            if job_matches(&job, &KEY_CREATIVE_JOBS) {
                1.0
            } else if job.contains("producer") {
                0.7
            } else if crew.department.eq_ignore_ascii_case(primary_department) {
                0.8
            } else {
                0.4
            }
        }
    }
}

/// Weighted blend of popularity, quality and role significance
pub fn score_credit(credit: &Credit, primary_department: &str) -> f64 {
    let production = credit.production();
    POPULARITY_WEIGHT * popularity_score(production.popularity)
        + QUALITY_WEIGHT * quality_score(production.vote_average)
        + ROLE_WEIGHT * role_significance(credit, primary_department)
}

/// Whether a credit is eligible for ranking at all
///
/// Undated work, series guest spots (fewer than two episodes) and, for
/// actors, crew jobs below director/creator/writer/producer are excluded.
pub fn is_eligible(credit: &Credit, primary_department: &str) -> bool {
    if credit.production().date().is_none() {
        return false;
    }

    match credit {
        Credit::Cast(cast) => !is_guest_appearance(cast),
        Credit::Crew(crew) => {
            !primary_department.eq_ignore_ascii_case(ACTING_DEPARTMENT)
                || job_matches(&crew.job.to_lowercase(), &HEADLINE_JOBS)
        }
    }
}

fn is_guest_appearance(cast: &CastCredit) -> bool {
    cast.production.media_type == MediaKind::Tv && cast.episode_count.is_some_and(|n| n < 2)
}

fn job_matches(job: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| job.contains(needle))
}

/// Scores, orders and selects the credits a person is best known for
///
/// Returns at most [`MAX_ENTRIES`] credits, highest score first, one per
/// production. When fewer than [`MIN_ENTRIES`] clear [`MIN_SCORE`], the
/// floor is ignored and the top [`FALLBACK_ENTRIES`] are returned instead.
pub fn select_known_for(
    cast_credits: &[CastCredit],
    crew_credits: &[CrewCredit],
    primary_department: &str,
) -> Vec<ScoredCredit> {
    // 1. Filter and score, cast before crew
    let mut scored: Vec<ScoredCredit> = cast_credits
        .iter()
        .cloned()
        .map(Credit::Cast)
        .chain(crew_credits.iter().cloned().map(Credit::Crew))
        .filter(|credit| is_eligible(credit, primary_department))
        .map(|credit| {
            let score = score_credit(&credit, primary_department);
            ScoredCredit { credit, score }
        })
        .collect();

    // 2. Highest score first; sort_by is stable so ties keep source order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    // 3. One entry per production, keeping the best-scoring one
    let mut seen: HashSet<CreditKey> = HashSet::new();
    let deduplicated: Vec<ScoredCredit> = scored
        .into_iter()
        .filter(|sc| seen.insert(sc.credit.key()))
        .collect();

    // 4. Cap, then apply the score floor
    let top: Vec<ScoredCredit> = deduplicated
        .iter()
        .take(MAX_ENTRIES)
        .filter(|sc| sc.score >= MIN_SCORE)
        .cloned()
        .collect();

    if top.len() >= MIN_ENTRIES || deduplicated.is_empty() {
        return top;
    }

    // 5. Sparse filmography: ignore the floor
    deduplicated.into_iter().take(FALLBACK_ENTRIES).collect()
}

/// Ranks a person's most notable productions for display
pub fn rank(
    cast_credits: &[CastCredit],
    crew_credits: &[CrewCredit],
    primary_department: &str,
) -> Vec<KnownForEntry> {
    select_known_for(cast_credits, crew_credits, primary_department)
        .into_iter()
        .map(|sc| to_entry(sc.credit))
        .collect()
}

/// Display label for the role a credit represents
pub fn role_label(credit: &Credit) -> String {
    match credit {
        Credit::Cast(cast) => match cast.series_episode_count() {
            Some(count) if count >= 10 => "Main Cast".to_string(),
            Some(count) if count >= 5 => "Recurring Cast".to_string(),
            Some(_) => "Guest".to_string(),
            None => "Cast".to_string(),
        },
        Credit::Crew(crew) => crew.job.clone(),
    }
}

fn to_entry(credit: Credit) -> KnownForEntry {
    let role_label = role_label(&credit);
    let production = credit.production();

    let mut entry = KnownForEntry {
        id: production.id,
        media_type: production.media_type,
        title: production.display_title(UNKNOWN_TITLE),
        poster_path: production.poster_path.clone(),
        year: production.year(),
        rating: production.vote_average,
        character: None,
        job: None,
        episode_count: None,
        role_label,
    };

    match credit {
        Credit::Cast(cast) => {
            entry.character = cast.character;
            entry.episode_count = cast.episode_count;
        }
        Credit::Crew(crew) => entry.job = Some(crew.job),
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreditedProduction;

    fn production(id: u64, media_type: MediaKind, popularity: f64, vote: f64) -> CreditedProduction {
        CreditedProduction {
            id,
            media_type,
            title: Some(format!("Title {}", id)),
            name: None,
            release_date: Some("2015-06-01".to_string()),
            first_air_date: None,
            poster_path: Some(format!("/poster{}.jpg", id)),
            popularity,
            vote_average: vote,
            genre_ids: vec![18],
        }
    }

    fn cast(
        id: u64,
        media_type: MediaKind,
        popularity: f64,
        vote: f64,
        episodes: Option<u32>,
    ) -> CastCredit {
        CastCredit {
            production: production(id, media_type, popularity, vote),
            character: Some(format!("Character {}", id)),
            episode_count: episodes,
        }
    }

    fn crew(id: u64, media_type: MediaKind, popularity: f64, vote: f64, job: &str, dept: &str) -> CrewCredit {
        CrewCredit {
            production: production(id, media_type, popularity, vote),
            job: job.to_string(),
            department: dept.to_string(),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_series_main_cast_outranks_director_credit() {
        let cast_credits = vec![cast(1, MediaKind::Tv, 80.0, 8.0, Some(12))];
        let crew_credits = vec![crew(2, MediaKind::Movie, 10.0, 6.0, "Director", "Directing")];

        let selected = select_known_for(&cast_credits, &crew_credits, "Acting");
        assert_eq!(selected.len(), 2);
        assert_close(selected[0].score, 0.86);
        assert_close(selected[1].score, 0.545);

        let entries = rank(&cast_credits, &crew_credits, "Acting");
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].role_label, "Main Cast");
        assert_eq!(entries[0].episode_count, Some(12));
        assert_eq!(entries[1].id, 2);
        assert_eq!(entries[1].role_label, "Director");
        assert_eq!(entries[1].job.as_deref(), Some("Director"));
        assert_eq!(entries[1].character, None);
    }

    #[test]
    fn test_empty_credits_yield_empty_ranking() {
        assert!(rank(&[], &[], "Acting").is_empty());
    }

    #[test]
    fn test_undated_credits_are_excluded() {
        let mut undated = cast(1, MediaKind::Movie, 100.0, 9.0, None);
        undated.production.release_date = None;

        assert!(rank(&[undated], &[], "Acting").is_empty());
    }

    #[test]
    fn test_first_air_date_counts_as_dated() {
        let mut series = cast(1, MediaKind::Tv, 50.0, 7.0, None);
        series.production.release_date = None;
        series.production.first_air_date = Some("2011-04-17".to_string());

        let entries = rank(&[series], &[], "Acting");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year.as_deref(), Some("2011"));
    }

    #[test]
    fn test_single_episode_series_credit_is_excluded() {
        let guest = cast(1, MediaKind::Tv, 100.0, 9.0, Some(1));
        let zero = cast(2, MediaKind::Tv, 100.0, 9.0, Some(0));
        assert!(rank(&[guest, zero], &[], "Acting").is_empty());
    }

    #[test]
    fn test_actor_minor_crew_jobs_are_excluded() {
        let crew_credits = vec![
            crew(1, MediaKind::Movie, 90.0, 8.0, "Stunts", "Crew"),
            crew(2, MediaKind::Movie, 90.0, 8.0, "Executive Producer", "Production"),
        ];

        let entries = rank(&[], &crew_credits, "ACTING");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 2);
    }

    #[test]
    fn test_non_actor_keeps_minor_crew_jobs() {
        let crew_credits = vec![crew(1, MediaKind::Movie, 90.0, 8.0, "Stunts", "Crew")];
        assert_eq!(rank(&[], &crew_credits, "Crew").len(), 1);
    }

    #[test]
    fn test_role_significance_tiers() {
        let tv = |episodes| Credit::Cast(cast(1, MediaKind::Tv, 0.0, 0.0, episodes));
        assert_eq!(role_significance(&tv(Some(10)), "Acting"), 1.0);
        assert_eq!(role_significance(&tv(Some(5)), "Acting"), 0.6);
        assert_eq!(role_significance(&tv(Some(2)), "Acting"), 0.3);
        assert_eq!(role_significance(&tv(None), "Acting"), 0.8);

        let movie = Credit::Cast(cast(1, MediaKind::Movie, 0.0, 0.0, Some(12)));
        assert_eq!(role_significance(&movie, "Acting"), 0.8);

        let job = |job: &str, dept: &str| Credit::Crew(crew(1, MediaKind::Movie, 0.0, 0.0, job, dept));
        assert_eq!(role_significance(&job("Screenplay", "Writing"), "Directing"), 1.0);
        assert_eq!(role_significance(&job("Series Creator", "Writing"), "Directing"), 1.0);
        assert_eq!(role_significance(&job("Co-Producer", "Production"), "Directing"), 0.7);
        assert_eq!(role_significance(&job("Editor", "editing"), "Editing"), 0.8);
        assert_eq!(role_significance(&job("Editor", "Editing"), "Directing"), 0.4);
    }

    #[test]
    fn test_role_labels() {
        let tv = |episodes| Credit::Cast(cast(1, MediaKind::Tv, 0.0, 0.0, episodes));
        assert_eq!(role_label(&tv(Some(10))), "Main Cast");
        assert_eq!(role_label(&tv(Some(7))), "Recurring Cast");
        assert_eq!(role_label(&tv(Some(3))), "Guest");
        assert_eq!(role_label(&tv(None)), "Cast");

        let producer = Credit::Crew(crew(1, MediaKind::Movie, 0.0, 0.0, "Executive Producer", "Production"));
        assert_eq!(role_label(&producer), "Executive Producer");
    }

    #[test]
    fn test_popularity_saturates() {
        assert_eq!(popularity_score(250.0), 1.0);
        assert_close(popularity_score(42.0), 0.42);
    }

    #[test]
    fn test_duplicate_production_keeps_highest_score() {
        // Acted in and directed the same film; the director credit scores higher
        let cast_credits = vec![cast(7, MediaKind::Movie, 50.0, 7.0, None)];
        let crew_credits = vec![
            crew(7, MediaKind::Movie, 50.0, 7.0, "Director", "Directing"),
            crew(7, MediaKind::Movie, 50.0, 7.0, "Producer", "Production"),
        ];

        let entries = rank(&cast_credits, &crew_credits, "Directing");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role_label, "Director");
    }

    #[test]
    fn test_same_id_different_media_kinds_are_distinct() {
        let cast_credits = vec![
            cast(5, MediaKind::Movie, 60.0, 7.0, None),
            cast(5, MediaKind::Tv, 60.0, 7.0, Some(20)),
        ];
        assert_eq!(rank(&cast_credits, &[], "Acting").len(), 2);
    }

    #[test]
    fn test_caps_at_eight_entries() {
        let cast_credits: Vec<CastCredit> = (1..=12)
            .map(|id| cast(id, MediaKind::Movie, 90.0, 8.0, None))
            .collect();

        let entries = rank(&cast_credits, &[], "Acting");
        assert_eq!(entries.len(), MAX_ENTRIES);
        // Equal scores keep source order
        let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_score_floor_drops_weak_credits() {
        let mut cast_credits: Vec<CastCredit> = (1..=4)
            .map(|id| cast(id, MediaKind::Movie, 90.0, 8.0, None))
            .collect();
        // 0.35 * 0 + 0.35 * 0 + 0.30 * 0.3 = 0.09
        cast_credits.push(cast(9, MediaKind::Tv, 0.0, 0.0, Some(2)));

        let selected = select_known_for(&cast_credits, &[], "Acting");
        assert_eq!(selected.len(), 4);
        assert!(selected.iter().all(|sc| sc.score >= MIN_SCORE));
    }

    #[test]
    fn test_fallback_keeps_low_scoring_sparse_filmography() {
        // Each scores 0.35 * 0 + 0.35 * 0 + 0.30 * 0.3 = 0.09
        let cast_credits = vec![
            cast(1, MediaKind::Tv, 0.0, 0.0, Some(2)),
            cast(2, MediaKind::Tv, 0.0, 0.0, Some(3)),
        ];

        let selected = select_known_for(&cast_credits, &[], "Acting");
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|sc| sc.score < MIN_SCORE));
    }

    #[test]
    fn test_fallback_takes_at_most_five() {
        // Two strong credits clear the floor, which is not enough
        let mut cast_credits = vec![
            cast(1, MediaKind::Movie, 90.0, 8.0, None),
            cast(2, MediaKind::Movie, 90.0, 8.0, None),
        ];
        cast_credits.extend((3..=9).map(|id| cast(id, MediaKind::Tv, 0.0, 0.0, Some(2))));

        let selected = select_known_for(&cast_credits, &[], "Acting");
        assert_eq!(selected.len(), FALLBACK_ENTRIES);
        let ids: Vec<u64> = selected.iter().map(|sc| sc.credit.key().id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_missing_title_uses_name_then_placeholder() {
        let mut series = cast(1, MediaKind::Tv, 50.0, 7.0, None);
        series.production.title = None;
        series.production.name = Some("The Wire".to_string());
        let mut untitled = cast(2, MediaKind::Movie, 50.0, 7.0, None);
        untitled.production.title = None;

        let entries = rank(&[series, untitled], &[], "Acting");
        assert_eq!(entries[0].title, "The Wire");
        assert_eq!(entries[1].title, UNKNOWN_TITLE);
    }
}

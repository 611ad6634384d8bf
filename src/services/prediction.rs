use std::collections::{HashMap, HashSet};

use crate::models::{
    CastCredit, CreditKey, GenreYearStat, PredictionEntry, PredictionResult, TaggedImage,
    WatchEntry,
};

pub const POPULARITY_WEIGHT: f64 = 0.5;
pub const GENRE_WEIGHT: f64 = 0.3;
pub const ERA_WEIGHT: f64 = 0.2;

pub const LIKELY_THRESHOLD: f64 = 0.6;
pub const POSSIBLE_THRESHOLD: f64 = 0.3;

/// Standard deviation, in years, of the era falloff
pub const ERA_SIGMA_YEARS: f64 = 5.0;
/// Median watched year assumed when no watched title has a year
pub const DEFAULT_MEDIAN_YEAR: i32 = 2020;

const UNTITLED: &str = "Untitled";

/// Aggregate statistics of a viewer's watch history
#[derive(Debug, Clone, PartialEq)]
pub struct WatchProfile {
    /// Genre id -> number of watched titles carrying it
    pub genre_frequency: HashMap<u32, usize>,
    pub median_year: i32,
}

impl WatchProfile {
    pub fn from_stats(stats: &[GenreYearStat]) -> Self {
        let mut genre_frequency: HashMap<u32, usize> = HashMap::new();
        let mut years: Vec<i32> = Vec::new();

        for stat in stats {
            for genre in &stat.genre_ids {
                *genre_frequency.entry(*genre).or_insert(0) += 1;
            }
            if let Some(year) = stat.year.as_deref().and_then(parse_year) {
                years.push(year);
            }
        }

        // Upper median for even counts
        years.sort_unstable();
        let median_year = years
            .get(years.len() / 2)
            .copied()
            .unwrap_or(DEFAULT_MEDIAN_YEAR);

        Self {
            genre_frequency,
            median_year,
        }
    }

    /// Share of the credit's genres the viewer has watched at least once
    pub fn genre_overlap(&self, genre_ids: &[u32]) -> f64 {
        if genre_ids.is_empty() {
            return 0.0;
        }
        let matching = genre_ids
            .iter()
            .filter(|g| self.genre_frequency.contains_key(*g))
            .count();
        matching as f64 / genre_ids.len() as f64
    }

    /// Gaussian falloff around the median watched year
    pub fn era_score(&self, year: Option<i32>) -> f64 {
        match year {
            Some(year) => {
                let z = f64::from(year - self.median_year) / ERA_SIGMA_YEARS;
                (-0.5 * z * z).exp()
            }
            None => 0.0,
        }
    }

    /// Recognition score for a credit the viewer has not logged as watched
    pub fn score(&self, credit: &CastCredit) -> f64 {
        let production = &credit.production;
        let popularity = (production.popularity / 100.0).min(1.0);
        let genre = self.genre_overlap(&production.genre_ids);
        let era = self.era_score(production.year_prefix().as_deref().and_then(parse_year));

        POPULARITY_WEIGHT * popularity + GENRE_WEIGHT * genre + ERA_WEIGHT * era
    }
}

fn parse_year(year: &str) -> Option<i32> {
    year.trim().parse().ok()
}

/// Production id -> first tagged image seen for it
fn tagged_image_lookup(images: &[TaggedImage]) -> HashMap<u64, &str> {
    let mut lookup = HashMap::new();
    for image in images {
        lookup
            .entry(image.production_id)
            .or_insert(image.image_path.as_str());
    }
    lookup
}

/// Predicts which of a person's credits a viewer is likely to recognize
/// them from
///
/// Credits on the viewer's watch list are confirmed outright. The rest are
/// scored from popularity, genre overlap with the watch history and
/// closeness to the viewer's typical era, then bucketed into likely
/// (>= 0.6) and possible (>= 0.3). Anything lower is dropped.
pub fn predict(
    cast_credits: &[CastCredit],
    watch_list: &[WatchEntry],
    genre_stats: &[GenreYearStat],
    tagged_images: &[TaggedImage],
) -> PredictionResult {
    let watched: HashSet<CreditKey> = watch_list.iter().map(WatchEntry::key).collect();
    let profile = WatchProfile::from_stats(genre_stats);
    let images = tagged_image_lookup(tagged_images);

    let mut seen: HashSet<CreditKey> = HashSet::new();
    let mut confirmed = Vec::new();
    let mut scored = Vec::new();

    for credit in cast_credits {
        let key = credit.key();
        // First credit per production wins
        if !seen.insert(key) {
            continue;
        }

        let production = &credit.production;
        let mut entry = PredictionEntry {
            id: production.id,
            media_type: production.media_type,
            title: production.display_title(UNTITLED),
            character: credit.character.clone().unwrap_or_default(),
            poster_path: production.poster_path.clone(),
            year: production.year_prefix(),
            score: 1.0,
            tagged_image_path: images.get(&production.id).map(|path| path.to_string()),
        };

        if watched.contains(&key) {
            confirmed.push(entry);
            continue;
        }

        entry.score = profile.score(credit);
        scored.push(entry);
    }

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let (likely, rest): (Vec<_>, Vec<_>) = scored
        .into_iter()
        .partition(|entry| entry.score >= LIKELY_THRESHOLD);
    let possible = rest
        .into_iter()
        .filter(|entry| entry.score >= POSSIBLE_THRESHOLD)
        .collect();

    PredictionResult {
        confirmed,
        likely,
        possible,
        watch_list_size: watch_list.len(),
    }
}

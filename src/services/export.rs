use crate::domain::{GroupAggregate, Hotel, Observation, Platform, TrendPoint};
use crate::services::scoring::round1;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

/// Rendered for any value the engine reports as absent. Never `0.0`: a
/// missing score must stay distinguishable from a real low one.
pub const MISSING: &str = "-";

pub fn fmt_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{:.1}", round1(value)),
        None => MISSING.to_string(),
    }
}

fn fmt_timestamp(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        None => MISSING.to_string(),
    }
}

/// The current group table: one row per hotel plus one synthetic aggregate
/// row, labeled so it cannot be mistaken for a property.
pub fn current_report(
    group_name: &str,
    hotels: &[&Hotel],
    aggregate: &GroupAggregate,
) -> Vec<Vec<String>> {
    let mut header = vec!["Hotel".to_string(), "City".to_string()];
    for platform in Platform::ALL {
        header.push(platform.display_name().to_string());
        header.push(format!("{} reviews", platform.display_name()));
    }
    header.push("Score".to_string());
    header.push("Reviews".to_string());
    header.push("Last updated".to_string());

    let mut rows = vec![header];

    for (hotel, member) in hotels.iter().zip(&aggregate.members) {
        let mut row = vec![hotel.name.clone(), hotel.city.clone()];
        push_platform_cells(&mut row, |platform| member.platform(platform).cloned());
        row.push(fmt_score(member.weighted_score));
        row.push(member.total_reviews.to_string());
        row.push(fmt_timestamp(member.last_updated));
        rows.push(row);
    }

    let mut total = vec![format!("[GROUP AGGREGATE] {group_name}"), MISSING.to_string()];
    push_platform_cells(&mut total, |platform| {
        aggregate
            .per_platform
            .iter()
            .find(|p| p.platform == platform)
            .cloned()
    });
    total.push(fmt_score(aggregate.overall_score));
    total.push(aggregate.total_reviews.to_string());
    total.push(fmt_timestamp(aggregate.last_updated));
    rows.push(total);

    rows
}

fn push_platform_cells<F>(row: &mut Vec<String>, score_for: F)
where
    F: Fn(Platform) -> Option<crate::domain::PlatformScore>,
{
    for platform in Platform::ALL {
        match score_for(platform) {
            Some(score) => {
                row.push(fmt_score(Some(score.rating)));
                row.push(score.review_count.to_string());
            }
            None => {
                row.push(MISSING.to_string());
                row.push(MISSING.to_string());
            }
        }
    }
}

/// The historical table: one row per (hotel, date, platform) observation in
/// the filtered set, plus one synthetic aggregate row per distinct date,
/// chronologically sorted.
pub fn historical_report(
    group_name: &str,
    hotels: &[&Hotel],
    observations: &[Observation],
    trend: &[TrendPoint],
) -> Vec<Vec<String>> {
    let names: FxHashMap<&str, &str> = hotels
        .iter()
        .map(|h| (h.id.as_str(), h.name.as_str()))
        .collect();

    let mut rows = vec![vec![
        "Date".to_string(),
        "Hotel".to_string(),
        "Platform".to_string(),
        "Rating".to_string(),
        "Reviews".to_string(),
    ]];

    let mut sorted: Vec<&Observation> = observations.iter().collect();
    sorted.sort_by_key(|o| o.observed_at);

    for point in trend {
        for obs in sorted.iter().filter(|o| o.observed_at.date_naive() == point.date) {
            rows.push(vec![
                point.date.to_string(),
                names
                    .get(obs.hotel_id.as_str())
                    .copied()
                    .unwrap_or(obs.hotel_id.as_str())
                    .to_string(),
                obs.platform.display_name().to_string(),
                fmt_score(Some(obs.normalized_rating)),
                obs.review_count.to_string(),
            ]);
        }

        rows.push(vec![
            point.date.to_string(),
            format!("[GROUP AGGREGATE] {group_name}"),
            MISSING.to_string(),
            fmt_score(point.score),
            point.review_count.to_string(),
        ]);
    }

    rows
}

/// Minimal CSV encoding; quotes only where the cell needs it.
pub fn to_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let encoded: Vec<String> = row
            .iter()
            .map(|cell| {
                if cell.contains(',') || cell.contains('"') {
                    format!("\"{}\"", cell.replace('"', "\"\""))
                } else {
                    cell.clone()
                }
            })
            .collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::aggregate::build_group_aggregate;
    use crate::services::trend::{build_trend, DateRange};
    use chrono::TimeZone;

    fn hotel(id: &str, name: &str) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: name.to_string(),
            city: "Vienna".to_string(),
            listings: Vec::new(),
        }
    }

    fn obs(hotel: &str, platform: Platform, rating: f64, reviews: u64, day: u32) -> Observation {
        Observation {
            hotel_id: hotel.to_string(),
            platform,
            raw_rating: rating / 2.0,
            normalized_rating: rating,
            review_count: reviews,
            observed_at: Utc.with_ymd_and_hms(2026, 8, day, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn missing_values_render_as_placeholder_not_zero() {
        let hotels = [hotel("h1", "Hotel Rosa")];
        let refs: Vec<&Hotel> = hotels.iter().collect();
        let aggregate = build_group_aggregate(&["h1"], &[]);

        let rows = current_report("City Pair", &refs, &aggregate);
        let hotel_row = &rows[1];
        assert_eq!(hotel_row[2], MISSING);
        assert!(!hotel_row.contains(&"0.0".to_string()));
    }

    #[test]
    fn aggregate_row_is_labeled_and_last() {
        let hotels = [hotel("h1", "Hotel Rosa"), hotel("h2", "Hotel Krone")];
        let refs: Vec<&Hotel> = hotels.iter().collect();
        let observations = vec![
            obs("h1", Platform::Google, 8.5, 1000, 1),
            obs("h2", Platform::Google, 7.5, 500, 1),
        ];
        let aggregate = build_group_aggregate(&["h1", "h2"], &observations);

        let rows = current_report("City Pair", &refs, &aggregate);
        let last = rows.last().unwrap();
        assert!(last[0].starts_with("[GROUP AGGREGATE]"));
        let score_col = rows[0].iter().position(|c| c == "Score").unwrap();
        assert_eq!(last[score_col], "8.2");
    }

    #[test]
    fn scores_render_with_one_decimal() {
        assert_eq!(fmt_score(Some(8.777)), "8.8");
        assert_eq!(fmt_score(Some(10.0)), "10.0");
        assert_eq!(fmt_score(None), MISSING);
    }

    #[test]
    fn historical_rows_follow_dates_with_one_aggregate_row_each() {
        let hotels = [hotel("h1", "Hotel Rosa")];
        let refs: Vec<&Hotel> = hotels.iter().collect();
        let observations = vec![
            obs("h1", Platform::Google, 8.0, 100, 1),
            obs("h1", Platform::Booking, 9.0, 100, 1),
            obs("h1", Platform::Google, 8.0, 100, 2),
        ];
        let now = Utc.with_ymd_and_hms(2026, 8, 20, 0, 0, 0).unwrap();
        let trend = build_trend(&observations, DateRange::AllTime, now);

        let rows = historical_report("Solo", &refs, &observations, &trend);
        // header + (2 obs + 1 aggregate) + (1 obs + 1 aggregate)
        assert_eq!(rows.len(), 6);
        assert!(rows[3][1].starts_with("[GROUP AGGREGATE]"));
        assert_eq!(rows[3][3], "8.5");
        assert!(rows[5][1].starts_with("[GROUP AGGREGATE]"));
    }

    #[test]
    fn csv_quotes_cells_with_commas() {
        let rows = vec![vec!["Hotel Rosa, Wien".to_string(), "8.2".to_string()]];
        assert_eq!(to_csv(&rows), "\"Hotel Rosa, Wien\",8.2\n");
    }
}

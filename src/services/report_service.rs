use crate::config::cli::Command;
use crate::config::Config;
use crate::domain::storage::ObservationStore;
use crate::domain::{Hotel, Observation};
use crate::error::{Result, ScoreError};
use crate::services::aggregate::build_group_aggregate;
use crate::services::composite::build_hotel_score;
use crate::services::export;
use crate::services::refresh::RefreshService;
use crate::services::trend::{build_trend, DateRange};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Wires the store, the refresh boundary and the pure scoring services to
/// the CLI surface.
pub struct ReportService {
    config: Config,
    store: Arc<dyn ObservationStore>,
    refresh: RefreshService,
}

impl ReportService {
    pub fn new(
        config: Config,
        store: Arc<dyn ObservationStore + 'static>,
        refresh: RefreshService,
    ) -> Self {
        Self {
            config,
            store,
            refresh,
        }
    }

    pub async fn run(&self) -> Result<()> {
        match &self.config.args.command {
            Command::Refresh => self.run_refresh().await,
            Command::Hotel { id } => self.run_hotel(id),
            Command::Report { group } => self.run_report(group),
            Command::Trend {
                hotel,
                group,
                range,
            } => self.run_trend(hotel.as_deref(), group.as_deref(), range),
            Command::Export {
                group,
                historical,
                range,
            } => self.run_export(group, *historical, range).await,
        }
    }

    async fn run_refresh(&self) -> Result<()> {
        let outcome = self.refresh.refresh_all(&self.config.portfolio.hotels).await?;
        info!(
            "Refresh stored {} observations, {} platform fetches failed",
            outcome.stored,
            outcome.failures.len()
        );
        Ok(())
    }

    fn run_hotel(&self, id: &str) -> Result<()> {
        let hotel = self.config.portfolio.hotel(id)?;
        let observations = self.store.observations_for_hotel(&hotel.id)?;
        let composite = build_hotel_score(&hotel.id, &observations);

        println!("{} ({})", hotel.name, hotel.city);
        for score in &composite.per_platform {
            println!(
                "  {:<14} {}  ({} reviews)",
                score.platform.display_name(),
                export::fmt_score(Some(score.rating)),
                score.review_count
            );
        }
        println!(
            "  {:<14} {}  ({} reviews)",
            "Composite",
            export::fmt_score(composite.weighted_score),
            composite.total_reviews
        );
        Ok(())
    }

    fn run_report(&self, group_id: &str) -> Result<()> {
        let (group_name, hotels, observations) = self.group_scope(group_id)?;
        let ids: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        let aggregate = build_group_aggregate(&ids, &observations);

        for row in export::current_report(&group_name, &hotels, &aggregate) {
            println!("{}", row.join(" | "));
        }
        Ok(())
    }

    fn run_trend(
        &self,
        hotel: Option<&str>,
        group: Option<&str>,
        range: &str,
    ) -> Result<()> {
        let range = DateRange::parse(range)?;
        let observations = match (hotel, group) {
            (Some(id), None) => {
                let hotel = self.config.portfolio.hotel(id)?;
                self.store.observations_for_hotel(&hotel.id)?
            }
            (None, Some(id)) => self.group_scope(id)?.2,
            _ => {
                return Err(ScoreError::Other(
                    "pass exactly one of --hotel or --group".to_string(),
                ))
            }
        };

        for point in build_trend(&observations, range, Utc::now()) {
            println!(
                "{}  {}  ({} reviews)",
                point.date,
                export::fmt_score(point.score),
                point.review_count
            );
        }
        Ok(())
    }

    async fn run_export(&self, group_id: &str, historical: bool, range: &str) -> Result<()> {
        let range = DateRange::parse(range)?;
        let (group_name, hotels, observations) = self.group_scope(group_id)?;
        let ids: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();

        let now = Utc::now();
        let (rows, filename) = if historical {
            let filtered: Vec<Observation> = observations
                .into_iter()
                .filter(|o| range.contains(o.observed_at, now))
                .collect();
            let trend = build_trend(&filtered, DateRange::AllTime, now);
            (
                export::historical_report(&group_name, &hotels, &filtered, &trend),
                format!("{group_id}_history.csv"),
            )
        } else {
            let aggregate = build_group_aggregate(&ids, &observations);
            (
                export::current_report(&group_name, &hotels, &aggregate),
                format!("{group_id}_report.csv"),
            )
        };

        let path = self.config.args.data_dir.join(filename);
        tokio::fs::write(&path, export::to_csv(&rows)).await?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    /// Resolves a group id to its name, member hotels and the union of the
    /// members' observations.
    fn group_scope(&self, group_id: &str) -> Result<(String, Vec<&Hotel>, Vec<Observation>)> {
        let group = self.config.portfolio.group(group_id)?;
        let hotels = self.config.portfolio.group_members(group_id)?;
        let ids: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        let observations = self.store.observations_for_hotels(&ids)?;
        Ok((group.name.clone(), hotels, observations))
    }
}

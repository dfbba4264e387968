//! Wires configuration, history files and the forecast core into the CLI commands.

use anyhow::{Context, Result, anyhow, ensure};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::config::{AppConfig, FORECAST, ForecastConfig, PERSISTENCE, export_filename};
use crate::data::{get_history_data, provider_for_path, save_series};
use crate::domain::{PriceHistory, PricePoint};
use crate::models::{ForecastSeries, ModelParameters, SeriesAssembler, SignalEvaluator};
use crate::report::{LiveSignal, PredictionQuery, Report};
use crate::utils::TimeUtils;
use crate::utils::time_utils::local_today;
use crate::{Cli, Command};

/// Resolved inputs for one run. Model parameters are fixed from here on.
pub struct Session {
    pub forecast: ForecastConfig,
    pub params: ModelParameters,
    pub data_path: Option<PathBuf>,
    pub legacy_path: Option<PathBuf>,
    pub start: NaiveDate,
}

impl Session {
    /// CLI flags override `configs.json`. The file is optional when the flags cover everything.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file_config = if cli.config.exists() {
            Some(AppConfig::load_from_path(&cli.config)?)
        } else {
            log::debug!("No config file at {:?}, relying on CLI flags", cli.config);
            None
        };

        let const_term = cli
            .const_term
            .or(file_config.as_ref().map(|c| c.const_term))
            .ok_or_else(|| anyhow!("Model constant missing: pass --const or provide {:?}", cli.config))?;
        let coef = cli
            .coef
            .or(file_config.as_ref().map(|c| c.coef))
            .ok_or_else(|| anyhow!("Model coefficient missing: pass --coef or provide {:?}", cli.config))?;

        let start = match (&cli.start, &file_config) {
            (Some(text), _) => {
                TimeUtils::parse_date(text).context(format!("Invalid --start: {}", text))?
            }
            (None, Some(config)) => config.start()?,
            (None, None) => TimeUtils::parse_date(PERSISTENCE.default_start_date)?,
        };

        Ok(Session {
            forecast: FORECAST,
            params: ModelParameters::new(const_term, coef),
            data_path: cli
                .history
                .clone()
                .or(file_config.as_ref().map(|c| c.data_path.clone())),
            legacy_path: cli
                .legacy
                .clone()
                .or(file_config.and_then(|c| c.legacy_path)),
            start,
        })
    }

    pub fn assembler(&self) -> SeriesAssembler {
        SeriesAssembler::new(self.params, &self.forecast)
    }

    fn load(path: &Path) -> Result<PriceHistory> {
        let providers = vec![provider_for_path(path)];
        let (history, _signature) = get_history_data(&providers)?;
        Ok(history)
    }

    /// `--history`, then `data_path`, then the default history location
    pub fn history_path(&self) -> PathBuf {
        self.data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(PERSISTENCE.default_history_path))
    }

    pub fn load_history(&self) -> Result<PriceHistory> {
        let path = self.history_path();
        Self::load(&path).context(format!("Failed to load history from {}", path.display()))
    }

    /// Full series: fresh history from `start`, future rows to the horizon,
    /// and the legacy file (if any) in front.
    pub fn build_series(&self, history: &PriceHistory, today: NaiveDate) -> Result<ForecastSeries> {
        let assembler = self.assembler();
        let horizon = assembler
            .horizon_from(today)
            .context("Horizon lies beyond the supported calendar")?;
        let series = assembler
            .assemble(history.since(self.start), horizon)
            .context(format!("Cannot assemble series from {}", self.start))?;

        match &self.legacy_path {
            Some(path) => {
                let legacy = Self::load(path).context("Failed to load legacy series")?;
                Ok(assembler.prepend_legacy(series, legacy.points())?)
            }
            None => Ok(series),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let session = Session::resolve(&cli)?;
    log::info!(
        "Model parameters: const = {}, coef = {}",
        session.params.const_term,
        session.params.coef
    );

    match cli.command.clone().unwrap_or_default() {
        Command::Report => {
            let history = session.load_history()?;
            let today = local_today();
            let series = session.build_series(&history, today)?;
            let assembler = session.assembler();

            let live = match history.latest() {
                Some(latest) => match LiveSignal::evaluate(
                    latest,
                    assembler.model(),
                    &SignalEvaluator::new(session.forecast.signal),
                ) {
                    Ok(live) => Some(live),
                    Err(e) => {
                        log::warn!("Live signal unavailable: {}", e);
                        None
                    }
                },
                None => None,
            };

            let report = Report {
                series: &series,
                index: assembler.date_index(),
                live,
                focus_date: today,
            };
            println!("{}", report.render());
        }
        Command::Predict { date } => {
            let assembler = session.assembler();
            let outcome = PredictionQuery::new(assembler.model()).run(&date)?;
            for line in outcome.lines() {
                println!("{}", line);
            }
        }
        Command::Signal { price, date } => {
            ensure!(price.is_finite() && price > 0.0, "Price must be positive, got {}", price);
            let date = match date {
                Some(text) => TimeUtils::parse_date(&text)?,
                None => local_today(),
            };
            let assembler = session.assembler();
            let live = LiveSignal::evaluate(
                PricePoint::new(date, price),
                assembler.model(),
                &SignalEvaluator::new(session.forecast.signal),
            )?;
            for line in live.lines() {
                println!("{}", line);
            }
        }
        Command::Export { format, out } => {
            let history = session.load_history()?;
            let series = session.build_series(&history, local_today())?;
            let out = out.unwrap_or_else(|| PathBuf::from(export_filename(format.extension())));
            save_series(&series, &out, format)?;
            log::info!("Exported {} rows to {}", series.len(), out.display());
        }
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

use crate::catalog::{KickoffHour, MatchDay, Team, Venue};
use crate::error::{PredictError, Result};

/// A fully validated set of user selections, ready for feature assembly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchSelection {
    pub home_team: Team,
    pub away_team: Team,
    pub venue: Venue,
    pub kickoff: KickoffHour,
    pub day: MatchDay,
}

impl MatchSelection {
    pub fn new(
        home_team: Team,
        away_team: Team,
        venue: Venue,
        kickoff: KickoffHour,
        day: MatchDay,
    ) -> Result<Self> {
        let selection = Self { home_team, away_team, venue, kickoff, day };
        selection.validate()?;
        Ok(selection)
    }

    /// A team cannot play itself.
    pub fn validate(&self) -> Result<()> {
        if self.home_team == self.away_team {
            return Err(PredictError::SameTeamSelected);
        }
        Ok(())
    }
}

/// Selections exactly as submitted by the predictor form, before any
/// decoding. Empty strings are what the dropdown placeholders post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSelection {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub venue: Option<String>,
    pub kickoff: Option<String>,
    pub day: Option<String>,
}

impl RawSelection {
    /// Decode and validate the five mandatory selections. Every violation is
    /// reported as a user-facing validation error; nothing is defaulted.
    pub fn parse(&self) -> Result<MatchSelection> {
        let home_name = required(&self.home_team, "Team")?;
        let away_name = required(&self.away_team, "Opponent")?;
        let venue_name = required(&self.venue, "Venue")?;
        let kickoff_label = required(&self.kickoff, "Time")?;
        let day_name = required(&self.day, "Day")?;

        let home_team = Team::from_name(home_name)
            .ok_or_else(|| PredictError::UnknownTeam(home_name.to_string()))?;
        let away_team = Team::from_name(away_name)
            .ok_or_else(|| PredictError::UnknownTeam(away_name.to_string()))?;
        let venue = Venue::from_name(venue_name).ok_or_else(|| PredictError::UnknownOption {
            field: "Venue",
            value: venue_name.to_string(),
        })?;
        let kickoff =
            KickoffHour::from_label(kickoff_label).ok_or_else(|| PredictError::UnknownOption {
                field: "Time",
                value: kickoff_label.to_string(),
            })?;
        let day = MatchDay::from_name(day_name).ok_or_else(|| PredictError::UnknownOption {
            field: "Day",
            value: day_name.to_string(),
        })?;

        MatchSelection::new(home_team, away_team, venue, kickoff, day)
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PredictError::MissingSelection { field }),
    }
}

//! Initial pool data: either a roster JSON supplied on the command line or
//! the built-in sample pool. Seed scores are a non-authoritative fixture for
//! local runs; live data always comes from the provider on refresh.

use crate::error::PoolError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SeedGolfer {
    pub name: String,
    #[serde(default)]
    pub score_to_par: i32,
    #[serde(default)]
    pub missed_cut: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SeedParticipant {
    pub name: String,
    pub golfers: Vec<SeedGolfer>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PoolSeed {
    pub participants: Vec<SeedParticipant>,
}

impl PoolSeed {
    /// Load a roster from a JSON file of the same shape this type serializes
    /// to: `{"participants": [{"name": …, "golfers": [{"name": …}, …]}, …]}`.
    ///
    /// # Errors
    /// Returns an error if the file is unreadable or not valid roster JSON.
    pub fn from_json_file(path: &Path) -> Result<Self, PoolError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// The sample pool: eight participants, four golfers each, with the
    /// mid-tournament scores (three missed cuts) used for local runs.
    #[must_use]
    pub fn default_pool() -> Self {
        let pool: &[(&str, &[(&str, i32, bool)])] = &[
            (
                "Joey H",
                &[
                    ("Xander Schauffele", -4, false),
                    ("Ben Griffin", -3, false),
                    ("Corey Conners", -3, false),
                    ("Tom Kim", -2, false),
                ],
            ),
            (
                "Scott M",
                &[
                    ("Scottie Scheffler", -5, false),
                    ("Viktor Hovland", -2, false),
                    ("Tyrrell Hatton", -1, false),
                    ("Matt Fitzpatrick", -1, false),
                ],
            ),
            (
                "Mike S",
                &[
                    ("Jon Rahm", 0, false),
                    ("Tommy Fleetwood", 2, false),
                    ("Harris English", -7, true),
                    ("Keegan Bradley", 0, true),
                ],
            ),
            (
                "Daniel R",
                &[
                    ("Bryson DeChambeau", -2, false),
                    ("Hideki Matsuyama", -1, false),
                    ("Russell Henley", -1, false),
                    ("Justin Rose", 0, false),
                ],
            ),
            (
                "Will C",
                &[
                    ("Rory McIlroy", -3, false),
                    ("Shane Lowry", -2, false),
                    ("Jordan Spieth", -1, false),
                    ("Tony Finau", -1, false),
                ],
            ),
            (
                "Ryan L",
                &[
                    ("Collin Morikawa", -2, false),
                    ("Sepp Straka", -2, false),
                    ("Patrick Cantlay", -1, false),
                    ("Patrick Reed", -1, false),
                ],
            ),
            (
                "Parker S",
                &[
                    ("Joaquin Niemann", -1, false),
                    ("Justin Thomas", 0, false),
                    ("Maverick McNealy", 3, false),
                    ("Aaron Rai", -6, true),
                ],
            ),
            (
                "Nick M",
                &[
                    ("Ludvig Åberg", -2, false),
                    ("Brooks Koepka", -1, false),
                    ("Sam Burns", 0, false),
                    ("Jason Day", 0, false),
                ],
            ),
        ];

        Self {
            participants: pool
                .iter()
                .map(|(name, golfers)| SeedParticipant {
                    name: (*name).to_string(),
                    golfers: golfers
                        .iter()
                        .map(|(golfer, score, missed_cut)| SeedGolfer {
                            name: (*golfer).to_string(),
                            score_to_par: *score,
                            missed_cut: *missed_cut,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

use crate::Error;
use crate::histogram::Category;
use crate::vote_counts::{Bar, ELECTORAL_VOTES};
use log::*;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Forecast data embedded in a page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub vote_counts: Option<VoteCounts>,
    #[serde(default)]
    pub races: Option<Races>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VoteCounts {
    #[serde(default)]
    pub bars: Vec<BarRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BarRecord {
    pub n: f64,
    pub count: u16,
}

/// Races grouped by lean, each list in page order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Races {
    #[serde(default)]
    pub likely_clinton: Vec<Race>,
    #[serde(default)]
    pub battlegrounds: Vec<Race>,
    #[serde(default)]
    pub likely_trump: Vec<Race>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Race {
    pub name: String,
    pub mean: f64,
    pub stddev: f64,
}

impl Races {
    pub fn category(&self, category: Category) -> &[Race] {
        match category {
            Category::LikelyClinton => &self.likely_clinton,
            Category::Battlegrounds => &self.battlegrounds,
            Category::LikelyTrump => &self.likely_trump,
        }
    }

    pub fn len(&self) -> usize {
        self.likely_clinton.len() + self.battlegrounds.len() + self.likely_trump.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VoteCounts {
    pub fn bars(&self) -> Vec<Bar> {
        self.bars
            .iter()
            .map(|b| Bar {
                n: b.n,
                count: b.count,
            })
            .collect()
    }
}

impl Page {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let page = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {:?}: {} bars, {} races",
            path,
            page.vote_counts.as_ref().map_or(0, |v| v.bars.len()),
            page.races.as_ref().map_or(0, Races::len)
        );
        Ok(page)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, Error> {
        let page: Page = serde_json::from_reader(reader)?;
        page.validate()?;
        Ok(page)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if let Some(vote_counts) = &self.vote_counts {
            for (i, bar) in vote_counts.bars.iter().enumerate() {
                if bar.count > ELECTORAL_VOTES {
                    return Err(Error::InvalidPage(format!(
                        "bar {} has count {} > {}",
                        i, bar.count, ELECTORAL_VOTES
                    )));
                }
                if !bar.n.is_finite() || bar.n < 0.0 {
                    return Err(Error::InvalidPage(format!(
                        "bar {} has invalid weight {}",
                        i, bar.n
                    )));
                }
            }
        }

        if let Some(races) = &self.races {
            for category in Category::ALL {
                for race in races.category(category) {
                    if !race.mean.is_finite() {
                        return Err(Error::InvalidPage(format!(
                            "{} race {:?} has invalid mean {}",
                            category.label(),
                            race.name,
                            race.mean
                        )));
                    }
                    if !race.stddev.is_finite() || race.stddev < 0.0 {
                        return Err(Error::InvalidPage(format!(
                            "{} race {:?} has invalid stddev {}",
                            category.label(),
                            race.name,
                            race.stddev
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const PAGE: &str = r#"{
        "vote_counts": { "bars": [ { "n": 10, "count": 260 }, { "n": 30, "count": 270 } ] },
        "races": {
            "likely_clinton": [ { "name": "Key", "mean": 12.0, "stddev": 6.0 } ],
            "battlegrounds": [ { "name": "Ohio", "mean": -1.5, "stddev": 4.0 } ]
        }
    }"#;

    #[test]
    fn load_page_file() -> Result<(), Error> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("page.json");
        let mut file = File::create(&path)?;
        file.write_all(PAGE.as_bytes())?;

        let page = Page::load(&path)?;
        let bars = page.vote_counts.as_ref().unwrap().bars();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1], Bar { n: 30.0, count: 270 });

        let races = page.races.as_ref().unwrap();
        assert_eq!(races.len(), 2);
        assert_eq!(races.category(Category::Battlegrounds)[0].name, "Ohio");
        assert!(races.category(Category::LikelyTrump).is_empty());
        Ok(())
    }

    #[test]
    fn missing_sections_are_none() -> Result<(), Error> {
        let page = Page::from_reader("{}".as_bytes())?;
        assert_eq!(page, Page::default());
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let err = Page::load(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = Page::from_reader("{ \"races\": [".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn count_out_of_range_rejected() {
        let json = r#"{ "vote_counts": { "bars": [ { "n": 1, "count": 539 } ] } }"#;
        let err = Page::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidPage(_)));
    }

    #[test]
    fn negative_stddev_rejected() {
        let json = r#"{ "races": { "likely_trump": [ { "name": "Utah", "mean": -10, "stddev": -1 } ] } }"#;
        let err = Page::from_reader(json.as_bytes()).unwrap_err();
        match err {
            Error::InvalidPage(msg) => assert!(msg.contains("Utah")),
            other => panic!("Expected invalid page, got {:?}", other),
        }
    }
}

use serde::Serialize;
use std::path::PathBuf;

/// What happened to one date/offset pair.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PairOutcome {
    #[serde(rename_all = "camelCase")]
    Unchanged {
        date_tag: u16,
        offset_tag: u16,
        offset: String,
    },
    #[serde(rename_all = "camelCase")]
    Updated {
        date_tag: u16,
        offset_tag: u16,
        old_date: String,
        new_date: String,
        old_offset: String,
        new_offset: String,
    },
}

impl PairOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Summary of one successfully processed file.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub pairs: Vec<PairOutcome>,
}

impl FileReport {
    pub fn changed(&self) -> bool {
        self.pairs.iter().any(PairOutcome::is_updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_serializes_camel_case() {
        let report = FileReport {
            path: PathBuf::from("IMG_0001.jpg"),
            pairs: vec![
                PairOutcome::Unchanged {
                    date_tag: 0x0132,
                    offset_tag: 0x9010,
                    offset: "+02:00".to_string(),
                },
                PairOutcome::Updated {
                    date_tag: 0x9003,
                    offset_tag: 0x9011,
                    old_date: "2023:11:05 17:42:51".to_string(),
                    new_date: "2023:11:05 16:42:51".to_string(),
                    old_offset: "+03:00".to_string(),
                    new_offset: "+02:00".to_string(),
                },
            ],
        };

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "path": "IMG_0001.jpg",
                "pairs": [
                    { "status": "unchanged", "dateTag": 306, "offsetTag": 36880, "offset": "+02:00" },
                    {
                        "status": "updated",
                        "dateTag": 36867,
                        "offsetTag": 36881,
                        "oldDate": "2023:11:05 17:42:51",
                        "newDate": "2023:11:05 16:42:51",
                        "oldOffset": "+03:00",
                        "newOffset": "+02:00"
                    }
                ]
            })
        );
        assert!(report.changed());
    }
}

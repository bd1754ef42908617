//! Inspection grouping
//!
//! Parses PipeTech Mobile export filenames of the form
//! `inspection-<id>_image_<label>.<ordinal>.<ext>`, maps each sequence
//! ordinal to a category designator and builds the per-inspection
//! rename plan.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;

/// Single-letter category code assigned to an image based on its
/// position within an inspection's image sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Designator {
    Area,
    Internal,
    Defect,
    Pipe,
}

impl Designator {
    pub fn letter(&self) -> char {
        match self {
            Designator::Area => 'A',
            Designator::Internal => 'I',
            Designator::Defect => 'F',
            Designator::Pipe => 'P',
        }
    }
}

impl std::fmt::Display for Designator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl std::str::FromStr for Designator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "area" => Ok(Designator::Area),
            "i" | "internal" => Ok(Designator::Internal),
            "f" | "defect" => Ok(Designator::Defect),
            "p" | "pipe" => Ok(Designator::Pipe),
            _ => Err(format!("Unknown designator: {}. Use A, I, F or P", s)),
        }
    }
}

/// Ordered list mapping sequence ordinal -> designator.
///
/// The ordinal indexes into the list directly; the last entry acts as
/// the overflow default for ordinals beyond the list, the first entry
/// as the default for negative or unparseable ordinals. The rule is
/// deployment configuration, not a constant: projects with a different
/// numbering convention override it in the config file or per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Designator>", into = "Vec<Designator>")]
pub struct DesignatorRule(Vec<Designator>);

impl DesignatorRule {
    pub fn new(entries: Vec<Designator>) -> Result<Self, String> {
        if entries.is_empty() {
            return Err("designator rule must have at least one entry".into());
        }
        Ok(DesignatorRule(entries))
    }

    /// Map a parsed sequence ordinal to its designator.
    pub fn designator_for(&self, ordinal: Option<i64>) -> Designator {
        match ordinal {
            Some(n) if n >= 0 => {
                let idx = (n as usize).min(self.0.len() - 1);
                self.0[idx]
            }
            _ => self.0[0],
        }
    }

    pub fn entries(&self) -> &[Designator] {
        &self.0
    }
}

/// Default: ordinals 0 and 1 -> Area, 2 -> Internal, 3 and above -> Defect.
impl Default for DesignatorRule {
    fn default() -> Self {
        DesignatorRule(vec![
            Designator::Area,
            Designator::Area,
            Designator::Internal,
            Designator::Defect,
        ])
    }
}

impl TryFrom<Vec<Designator>> for DesignatorRule {
    type Error = String;

    fn try_from(entries: Vec<Designator>) -> Result<Self, Self::Error> {
        DesignatorRule::new(entries)
    }
}

impl From<DesignatorRule> for Vec<Designator> {
    fn from(rule: DesignatorRule) -> Self {
        rule.0
    }
}

impl std::str::FromStr for DesignatorRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = s
            .split(',')
            .map(|part| part.trim().parse())
            .collect::<Result<Vec<Designator>, String>>()?;
        DesignatorRule::new(entries)
    }
}

/// One planned rename, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub inspection_id: String,
    pub original_filename: String,
    pub designator: Designator,
    /// 3-digit, 1-based position local to the inspection group.
    pub position: String,
    pub sequence_ordinal: Option<i64>,
}

impl ImageRecord {
    /// The new name this image will be filed under:
    /// `<inspection id>_<designator letter>_<position>.<ext>`.
    pub fn rename_target(&self) -> String {
        let ext = Path::new(&self.original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg");
        format!(
            "{}_{}_{}.{}",
            self.inspection_id,
            self.designator.letter(),
            self.position,
            ext
        )
    }
}

pub type GroupingResult = HashMap<String, Vec<ImageRecord>>;

/// Extract the inspection id from a filename: the substring after the
/// first `-` and before the first `_`.
///
/// Soft failure: returns `None` when the `-` delimiter is missing, so a
/// single malformed name never aborts a batch.
pub fn inspection_id_of(filename: &str) -> Option<&str> {
    let head = filename.split('_').next().unwrap_or(filename);
    head.split_once('-').map(|(_, id)| id)
}

/// Extract the sequence ordinal: the second `.`-delimited field, i.e.
/// the numeric token immediately preceding the file extension.
pub fn sequence_ordinal_of(filename: &str) -> Option<i64> {
    filename.split('.').nth(1)?.parse().ok()
}

/// One inspection id per input filename, in order, `None` for names
/// the id cannot be parsed from.
pub fn inspection_ids_of<S: AsRef<str>>(filenames: &[S]) -> Vec<Option<String>> {
    filenames
        .iter()
        .map(|f| inspection_id_of(f.as_ref()).map(str::to_owned))
        .collect()
}

/// Unique inspection ids across the filenames, first occurrence kept,
/// later duplicates dropped. Names without a parseable id are dropped.
pub fn unique_inspection_ids<S: AsRef<str>>(filenames: &[S]) -> Vec<String> {
    dedup_preserving_order(
        filenames
            .iter()
            .filter_map(|f| inspection_id_of(f.as_ref()).map(str::to_owned)),
    )
}

/// Order-preserving de-duplication: set-backed seen-tracker plus an
/// output vec, O(n).
pub fn dedup_preserving_order<T: Eq + Hash + Clone>(
    items: impl IntoIterator<Item = T>,
) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Build the rename plan: filenames grouped by inspection id, each
/// record numbered by its insertion position within the group.
///
/// Positions follow file-list order, not the ordinal embedded in the
/// name: the k-th record inserted under an inspection gets position k,
/// zero-padded to 3 digits. Filenames with no parseable inspection id
/// are skipped.
pub fn group<S: AsRef<str>>(filenames: &[S], rule: &DesignatorRule) -> GroupingResult {
    let mut result = GroupingResult::new();

    for filename in filenames {
        let filename = filename.as_ref();
        let Some(inspection_id) = inspection_id_of(filename) else {
            continue;
        };

        let ordinal = sequence_ordinal_of(filename);
        let designator = rule.designator_for(ordinal);

        let records = result.entry(inspection_id.to_owned()).or_default();
        let position = format!("{:0>3}", records.len() + 1);

        records.push(ImageRecord {
            inspection_id: inspection_id.to_owned(),
            original_filename: filename.to_owned(),
            designator,
            position,
            sequence_ordinal: ordinal,
        });
    }

    result
}

/// Flatten a grouping result into a list of (inspection id, records)
/// pairs sorted ascending by inspection id.
pub fn sort_by_inspection(result: GroupingResult) -> Vec<(String, Vec<ImageRecord>)> {
    let mut entries: Vec<_> = result.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // filename parsing
    // =============================================

    #[test]
    fn test_inspection_id_of() {
        assert_eq!(
            inspection_id_of("inspection-12575_image_Header.1.jpg"),
            Some("12575")
        );
    }

    #[test]
    fn test_inspection_id_of_missing_delimiter() {
        assert_eq!(inspection_id_of("random_image.jpg"), None);
        assert_eq!(inspection_id_of(""), None);
    }

    #[test]
    fn test_sequence_ordinal_of() {
        assert_eq!(sequence_ordinal_of("inspection-10_image_Header.0.jpg"), Some(0));
        assert_eq!(sequence_ordinal_of("inspection-10_image_Header.42.jpg"), Some(42));
    }

    #[test]
    fn test_sequence_ordinal_of_unparseable() {
        // second dot field is the extension itself
        assert_eq!(sequence_ordinal_of("random_image.jpg"), None);
        assert_eq!(sequence_ordinal_of("no_dots_at_all"), None);
    }

    #[test]
    fn test_inspection_ids_of_keeps_absent_entries() {
        let names = ["inspection-1_image_Header.0.jpg", "random_image.jpg"];
        let ids = inspection_ids_of(&names);
        assert_eq!(ids, vec![Some("1".to_string()), None]);
    }

    // =============================================
    // de-duplication
    // =============================================

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let ids = vec!["A", "B", "A", "C", "B"];
        assert_eq!(dedup_preserving_order(ids), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unique_inspection_ids_idempotent() {
        let names = [
            "inspection-10_image_Header.0.jpg",
            "inspection-20_image_Header.0.jpg",
            "inspection-10_image_Header.1.jpg",
        ];
        let once = unique_inspection_ids(&names);
        let twice = dedup_preserving_order(once.clone());
        assert_eq!(once, vec!["10", "20"]);
        assert_eq!(once, twice);
    }

    // =============================================
    // designator rule
    // =============================================

    #[test]
    fn test_default_rule_mapping() {
        let rule = DesignatorRule::default();
        assert_eq!(rule.designator_for(Some(0)), Designator::Area);
        assert_eq!(rule.designator_for(Some(1)), Designator::Area);
        assert_eq!(rule.designator_for(Some(2)), Designator::Internal);
        assert_eq!(rule.designator_for(Some(3)), Designator::Defect);
    }

    #[test]
    fn test_rule_overflow_uses_last_entry() {
        let rule = DesignatorRule::default();
        assert_eq!(rule.designator_for(Some(99)), Designator::Defect);
    }

    #[test]
    fn test_rule_negative_and_absent_use_first_entry() {
        let rule = DesignatorRule::default();
        assert_eq!(rule.designator_for(Some(-1)), Designator::Area);
        assert_eq!(rule.designator_for(None), Designator::Area);
    }

    #[test]
    fn test_rule_from_str() {
        let rule: DesignatorRule = "A,A,I,F".parse().unwrap();
        assert_eq!(rule, DesignatorRule::default());

        let rule: DesignatorRule = "pipe, defect".parse().unwrap();
        assert_eq!(rule.designator_for(Some(0)), Designator::Pipe);
        assert_eq!(rule.designator_for(Some(5)), Designator::Defect);
    }

    #[test]
    fn test_empty_rule_rejected() {
        assert!(DesignatorRule::new(vec![]).is_err());
        assert!("".parse::<DesignatorRule>().is_err());
    }

    #[test]
    fn test_rule_round_trips_through_config_json() {
        let json = serde_json::to_string(&DesignatorRule::default()).unwrap();
        assert_eq!(json, r#"["area","area","internal","defect"]"#);

        let rule: DesignatorRule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, DesignatorRule::default());

        // empty rule must not deserialize
        assert!(serde_json::from_str::<DesignatorRule>("[]").is_err());
    }

    // =============================================
    // grouping
    // =============================================

    #[test]
    fn test_group_positions_follow_input_order_not_ordinals() {
        let names = [
            "inspection-10_image_Header.0.jpg",
            "inspection-10_image_Header.1.jpg",
            "inspection-20_image_Header.0.jpg",
        ];
        let result = group(&names, &DesignatorRule::default());

        let ten = &result["10"];
        assert_eq!(ten.len(), 2);
        assert_eq!(ten[0].position, "001");
        assert_eq!(ten[1].position, "002");

        let twenty = &result["20"];
        assert_eq!(twenty.len(), 1);
        assert_eq!(twenty[0].position, "001");
    }

    #[test]
    fn test_group_assigns_designators_from_ordinals() {
        let names = [
            "inspection-5_image_Header.0.jpg",
            "inspection-5_image_Header.2.jpg",
            "inspection-5_image_Header.7.jpg",
        ];
        let result = group(&names, &DesignatorRule::default());

        let records = &result["5"];
        assert_eq!(records[0].designator, Designator::Area);
        assert_eq!(records[1].designator, Designator::Internal);
        assert_eq!(records[2].designator, Designator::Defect);
    }

    #[test]
    fn test_group_skips_names_without_inspection_id() {
        let names = ["random_image.jpg", "inspection-1_image_Header.0.jpg"];
        let result = group(&names, &DesignatorRule::default());

        assert_eq!(result.len(), 1);
        assert_eq!(result["1"].len(), 1);
        assert_eq!(result["1"][0].position, "001");
    }

    #[test]
    fn test_group_empty_input() {
        let names: [&str; 0] = [];
        assert!(group(&names, &DesignatorRule::default()).is_empty());
    }

    #[test]
    fn test_sort_by_inspection() {
        let names = [
            "inspection-20_image_Header.0.jpg",
            "inspection-10_image_Header.0.jpg",
            "inspection-3_image_Header.0.jpg",
        ];
        let sorted = sort_by_inspection(group(&names, &DesignatorRule::default()));

        // default string ordering, not numeric
        let keys: Vec<&str> = sorted.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["10", "20", "3"]);
    }

    #[test]
    fn test_rename_target() {
        let record = ImageRecord {
            inspection_id: "12575".into(),
            original_filename: "inspection-12575_image_Header.1.jpg".into(),
            designator: Designator::Area,
            position: "002".into(),
            sequence_ordinal: Some(1),
        };
        assert_eq!(record.rename_target(), "12575_A_002.jpg");
    }
}

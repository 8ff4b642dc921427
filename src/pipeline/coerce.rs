use serde_json::{Map, Value};

use crate::models::{Initiative, ItemType, ProjectItem, Stage, Stream, Substream};

/// Marker for a candidate that cannot be shaped into a `ProjectItem` at all.
struct Incompatible;

/// Coerce one untyped candidate object into a schema-conformant item.
///
/// Per-field policy:
/// - free-text fields keep strings; null, missing, numbers, and booleans
///   degrade to `None`; an array or object where plain text belongs makes
///   the whole candidate structurally incompatible,
/// - categorical fields keep exact members of the permitted set and degrade
///   everything else to `None`,
/// - list fields keep string elements in order and degrade everything else
///   to empty,
/// - unknown keys are ignored.
///
/// Returns `None` for incompatible candidates; the caller skips those and
/// keeps processing the rest.
pub fn coerce_item(raw: &Value) -> Option<ProjectItem> {
    let obj = raw.as_object()?;
    try_coerce(obj).ok()
}

fn try_coerce(obj: &Map<String, Value>) -> Result<ProjectItem, Incompatible> {
    Ok(ProjectItem {
        task_id: text(obj, "TaskID")?,
        stream: categorical(obj, "Stream", Stream::parse),
        substream: categorical(obj, "Substream", Substream::parse),
        initiative: categorical(obj, "Initiative", Initiative::parse),
        item_type: categorical(obj, "Type", ItemType::parse),
        work_item: text(obj, "WorkItem")?,
        description: text(obj, "Description")?,
        assigned_to: text(obj, "AssignedTo")?,
        progress: text(obj, "Progress")?,
        priority: text(obj, "Priority")?,
        start_date: text(obj, "StartDate")?,
        due_date: text(obj, "DueDate")?,
        finish_date: text(obj, "FinishDate")?,
        stage: categorical(obj, "Stage", Stage::parse),
        sprint: text(obj, "Sprint")?,
        jira_id: text(obj, "JiraID")?,
        key_stakeholders: list(obj, "KeyStakeholders"),
        raid_tags: list(obj, "RAIDTags"),
        source: text(obj, "Source")?,
        link_to_source: text(obj, "LinkToSource")?,
        gantt_swimlane: text(obj, "GanttSwimlane")?,
        gantt_item: text(obj, "GanttItem")?,
        screenshots: list(obj, "Screenshots"),
    })
}

/// Free-text field. Wrong-typed scalars degrade to absent; containers where
/// plain text belongs reject the candidate.
fn text(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, Incompatible> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(_)) | Some(Value::Bool(_)) => Ok(None),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err(Incompatible),
    }
}

/// Categorical field. Anything but an exact member of the permitted set
/// degrades to `None`; never a rejection.
fn categorical<T>(obj: &Map<String, Value>, key: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    match obj.get(key) {
        Some(Value::String(s)) => parse(s),
        _ => None,
    }
}

/// List field. String elements are kept in order; everything else degrades
/// to an empty list.
fn list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    }
}

use serde::{Deserialize, Serialize};

use super::enums::{Initiative, ItemType, Stage, Stream, Substream};

/// One unit of work extracted from the minutes.
///
/// Every field is optional: the source text may simply never mention a
/// value. The serialized keys match the project-plan column names, so a
/// saved JSON document reads the same as the spreadsheet header row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    #[serde(rename = "TaskID", default)]
    pub task_id: Option<String>,
    #[serde(rename = "Stream", default)]
    pub stream: Option<Stream>,
    #[serde(rename = "Substream", default)]
    pub substream: Option<Substream>,
    #[serde(rename = "Initiative", default)]
    pub initiative: Option<Initiative>,
    #[serde(rename = "Type", default)]
    pub item_type: Option<ItemType>,
    #[serde(rename = "WorkItem", default)]
    pub work_item: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "AssignedTo", default)]
    pub assigned_to: Option<String>,
    #[serde(rename = "Progress", default)]
    pub progress: Option<String>,
    #[serde(rename = "Priority", default)]
    pub priority: Option<String>,
    #[serde(rename = "StartDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "DueDate", default)]
    pub due_date: Option<String>,
    #[serde(rename = "FinishDate", default)]
    pub finish_date: Option<String>,
    #[serde(rename = "Stage", default)]
    pub stage: Option<Stage>,
    #[serde(rename = "Sprint", default)]
    pub sprint: Option<String>,
    #[serde(rename = "JiraID", default)]
    pub jira_id: Option<String>,
    #[serde(rename = "KeyStakeholders", default)]
    pub key_stakeholders: Vec<String>,
    #[serde(rename = "RAIDTags", default)]
    pub raid_tags: Vec<String>,
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
    #[serde(rename = "LinkToSource", default)]
    pub link_to_source: Option<String>,
    #[serde(rename = "GanttSwimlane", default)]
    pub gantt_swimlane: Option<String>,
    #[serde(rename = "GanttItem", default)]
    pub gantt_item: Option<String>,
    #[serde(rename = "Screenshots", default)]
    pub screenshots: Vec<String>,
}

/// Structured result of one extraction run: the untouched source text,
/// meeting metadata, and the ordered list of extracted work items.
///
/// Built once per run and read-only afterwards; both exporters consume it
/// as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Minutes {
    pub raw_text: String,
    #[serde(default)]
    pub meeting_title: Option<String>,
    #[serde(default)]
    pub meeting_date: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub items: Vec<ProjectItem>,
}

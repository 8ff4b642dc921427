use std::path::Path;

use rust_xlsxwriter::{DataValidation, Workbook, Worksheet, XlsxError};

use super::ExportError;
use crate::models::{Initiative, ItemType, Minutes, ProjectItem, Stage, Stream, Substream};

/// Project-item column names, in sheet order.
pub const ITEM_HEADERS: [&str; 23] = [
    "TaskID",
    "Stream",
    "Substream",
    "Initiative",
    "Type",
    "WorkItem",
    "Description",
    "AssignedTo",
    "Progress",
    "Priority",
    "StartDate",
    "DueDate",
    "FinishDate",
    "Stage",
    "Sprint",
    "JiraID",
    "KeyStakeholders",
    "RAIDTags",
    "Source",
    "LinkToSource",
    "GanttSwimlane",
    "GanttItem",
    "Screenshots",
];

/// Columns that carry a dropdown constraint, by header index.
const STREAM_COL: u16 = 1;
const SUBSTREAM_COL: u16 = 2;
const INITIATIVE_COL: u16 = 3;
const TYPE_COL: u16 = 4;
const STAGE_COL: u16 = 13;

/// Write the record as a three-sheet workbook: meeting overview, project
/// items (with dropdown validation on the categorical columns), raw text.
pub fn save_workbook(minutes: &Minutes, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();

    write_overview(workbook.add_worksheet().set_name("Meeting Overview")?, minutes)?;
    write_items(workbook.add_worksheet().set_name("Project Items")?, minutes)?;
    write_raw_minutes(workbook.add_worksheet().set_name("Raw Minutes")?, minutes)?;

    workbook.save(path)?;
    tracing::info!(path = %path.display(), "wrote spreadsheet export");
    Ok(())
}

fn write_overview(sheet: &mut Worksheet, minutes: &Minutes) -> Result<(), XlsxError> {
    sheet.write_string(0, 0, "Meeting Title")?;
    sheet.write_string(0, 1, minutes.meeting_title.as_deref().unwrap_or("Not specified"))?;
    sheet.write_string(1, 0, "Date")?;
    sheet.write_string(1, 1, minutes.meeting_date.as_deref().unwrap_or("Not specified"))?;
    sheet.write_string(2, 0, "Summary")?;
    sheet.write_string(2, 1, minutes.summary.as_deref().unwrap_or("Not provided"))?;

    sheet.write_string(4, 0, "Attendees")?;
    for (i, attendee) in minutes.attendees.iter().enumerate() {
        sheet.write_string(4 + i as u32, 1, attendee)?;
    }
    Ok(())
}

fn write_items(sheet: &mut Worksheet, minutes: &Minutes) -> Result<(), XlsxError> {
    for (col, header) in ITEM_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (row, item) in minutes.items.iter().enumerate() {
        for (col, cell) in item_cells(item).into_iter().enumerate() {
            if let Some(text) = cell {
                sheet.write_string(1 + row as u32, col as u16, text)?;
            }
        }
    }

    if !minutes.items.is_empty() {
        let last_row = minutes.items.len() as u32;
        add_dropdown(sheet, STREAM_COL, last_row, Stream::ALL.iter().map(Stream::as_str))?;
        add_dropdown(sheet, SUBSTREAM_COL, last_row, Substream::ALL.iter().map(Substream::as_str))?;
        add_dropdown(sheet, INITIATIVE_COL, last_row, Initiative::ALL.iter().map(Initiative::as_str))?;
        add_dropdown(sheet, TYPE_COL, last_row, ItemType::ALL.iter().map(ItemType::as_str))?;
        add_dropdown(sheet, STAGE_COL, last_row, Stage::ALL.iter().map(Stage::as_str))?;
    }
    Ok(())
}

fn add_dropdown<'a>(
    sheet: &mut Worksheet,
    col: u16,
    last_row: u32,
    values: impl Iterator<Item = &'a str>,
) -> Result<(), XlsxError> {
    let values: Vec<&str> = values.collect();
    let validation = DataValidation::new().allow_list_strings(&values)?;
    sheet.add_data_validation(1, col, last_row, col, &validation)?;
    Ok(())
}

fn write_raw_minutes(sheet: &mut Worksheet, minutes: &Minutes) -> Result<(), XlsxError> {
    for (row, line) in minutes.raw_text.split('\n').enumerate() {
        sheet.write_string(row as u32, 0, line)?;
    }
    Ok(())
}

/// Cell values for one item row, in `ITEM_HEADERS` order. Empty list fields
/// produce empty cells; non-empty ones are joined with ", ".
fn item_cells(item: &ProjectItem) -> [Option<String>; 23] {
    [
        item.task_id.clone(),
        item.stream.map(|v| v.as_str().to_string()),
        item.substream.map(|v| v.as_str().to_string()),
        item.initiative.map(|v| v.as_str().to_string()),
        item.item_type.map(|v| v.as_str().to_string()),
        item.work_item.clone(),
        item.description.clone(),
        item.assigned_to.clone(),
        item.progress.clone(),
        item.priority.clone(),
        item.start_date.clone(),
        item.due_date.clone(),
        item.finish_date.clone(),
        item.stage.map(|v| v.as_str().to_string()),
        item.sprint.clone(),
        item.jira_id.clone(),
        joined(&item.key_stakeholders),
        joined(&item.raid_tags),
        item.source.clone(),
        item.link_to_source.clone(),
        item.gantt_swimlane.clone(),
        item.gantt_item.clone(),
        joined(&item.screenshots),
    ]
}

fn joined(list: &[String]) -> Option<String> {
    if list.is_empty() {
        None
    } else {
        Some(list.join(", "))
    }
}

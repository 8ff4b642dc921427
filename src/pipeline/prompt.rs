use crate::models::{Initiative, ItemType, Stage, Stream, Substream};

/// System prompt for the metadata extraction call.
pub const MEETING_INFO_PROMPT: &str = "\
Extract the following information from the meeting minutes:
- meeting_title: The title or name of the meeting
- meeting_date: The date when the meeting was held
- attendees: List of people who attended the meeting
- summary: A brief summary of what was discussed

Return the information in JSON format.";

/// Build the system prompt for the work-item extraction call.
///
/// The permitted categorical values are generated from the domain enums so
/// the prompt can never drift from what coercion will accept.
pub fn project_items_prompt() -> String {
    format!(
        "\
Based on the meeting minutes, identify tasks, action items, decisions, or any work that needs to be done.
For each item, extract as much of the following information as possible:

- TaskID: Generate a unique identifier if not present
- Stream: Categorize into one of the following: {streams}
- Substream: Categorize into one of the following: {substreams}
- Initiative: Categorize into one of the following: {initiatives}
- Type: Categorize as either {types}
- WorkItem: A short title for the task
- Description: Detailed description of what needs to be done
- AssignedTo: Person responsible for the task
- Progress: Current progress (percentage or status)
- Priority: Task priority (High, Medium, Low)
- StartDate: When the task should start or started
- DueDate: When the task is due
- FinishDate: When the task was actually completed
- Stage: Current stage from: {stages}
- Sprint: Associated sprint if applicable
- JiraID: Associated Jira ticket if mentioned
- KeyStakeholders: List of people who have a stake in this item
- RAIDTags: Any risks, assumptions, issues, or dependencies mentioned
- Source: Where this item originated (e.g., \"Weekly Team Meeting\")
- LinkToSource: Any URL or reference to the source
- GanttSwimlane: Associated Gantt chart swimlane if mentioned
- GanttItem: Associated Gantt chart item if mentioned
- Screenshots: Any references to screenshots or images

Provide the output as a JSON object with an \"items\" key containing an array of objects, \
with each object containing the fields above where information is available.
If a field requires specific values (Stream, Substream, Initiative, Type, Stage), \
use only the provided options or leave empty.",
        streams = permitted(Stream::ALL.iter().map(Stream::as_str)),
        substreams = permitted(Substream::ALL.iter().map(Substream::as_str)),
        initiatives = permitted(Initiative::ALL.iter().map(Initiative::as_str)),
        types = ItemType::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" or "),
        stages = permitted(Stage::ALL.iter().map(Stage::as_str)),
    )
}

fn permitted<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_info_prompt_names_all_metadata_keys() {
        for key in ["meeting_title", "meeting_date", "attendees", "summary"] {
            assert!(MEETING_INFO_PROMPT.contains(key), "missing key {key}");
        }
        assert!(MEETING_INFO_PROMPT.contains("JSON"));
    }

    #[test]
    fn items_prompt_lists_every_permitted_value() {
        let prompt = project_items_prompt();
        for stream in Stream::ALL {
            assert!(prompt.contains(stream.as_str()));
        }
        for substream in Substream::ALL {
            assert!(prompt.contains(substream.as_str()));
        }
        for initiative in Initiative::ALL {
            assert!(prompt.contains(initiative.as_str()));
        }
        for stage in Stage::ALL {
            assert!(prompt.contains(stage.as_str()));
        }
        assert!(prompt.contains("Technical or Functional"));
    }

    #[test]
    fn items_prompt_names_all_columns() {
        let prompt = project_items_prompt();
        for field in [
            "TaskID",
            "WorkItem",
            "AssignedTo",
            "KeyStakeholders",
            "RAIDTags",
            "GanttSwimlane",
            "Screenshots",
        ] {
            assert!(prompt.contains(field), "missing field {field}");
        }
        assert!(prompt.contains("\"items\" key"));
    }
}

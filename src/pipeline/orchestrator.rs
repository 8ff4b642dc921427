use super::coerce::coerce_item;
use super::openai::CompletionClient;
use super::parser::{parse_item_candidates, parse_meeting_info};
use super::prompt::{project_items_prompt, MEETING_INFO_PROMPT};
use super::ExtractionError;
use crate::models::Minutes;

/// Result of one extraction run: the assembled record plus the number of
/// candidate items that were dropped as structurally incompatible.
#[derive(Debug)]
pub struct Extraction {
    pub minutes: Minutes,
    pub skipped_items: usize,
}

/// Drives the two extraction calls and assembles the final record:
/// metadata call → items call → per-item coercion.
pub struct MinutesProcessor {
    client: Box<dyn CompletionClient>,
}

impl MinutesProcessor {
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Run the full extraction pipeline over one block of minutes text.
    ///
    /// Transport or provider failure on either call aborts the run; defects
    /// inside a successful response (unparseable bodies, missing keys, bad
    /// candidate items) degrade to defaults and a skip count instead.
    pub fn process(&self, raw_text: &str) -> Result<Extraction, ExtractionError> {
        if raw_text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let _span = tracing::info_span!("process_minutes", chars = raw_text.len()).entered();

        let info_body = self.client.complete(MEETING_INFO_PROMPT, raw_text, true)?;
        let info = parse_meeting_info(&info_body);

        let items_body = self
            .client
            .complete(&project_items_prompt(), raw_text, true)?;
        let candidates = parse_item_candidates(&items_body);

        let mut items = Vec::with_capacity(candidates.len());
        let mut skipped = 0usize;
        for candidate in &candidates {
            match coerce_item(candidate) {
                Some(item) => items.push(item),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(
                skipped,
                total = candidates.len(),
                "dropped structurally incompatible work items"
            );
        }
        tracing::info!(
            items = items.len(),
            attendees = info.attendees.len(),
            "extraction complete"
        );

        Ok(Extraction {
            minutes: Minutes {
                raw_text: raw_text.to_string(),
                meeting_title: info.meeting_title,
                meeting_date: info.meeting_date,
                attendees: info.attendees,
                summary: info.summary,
                items,
            },
            skipped_items: skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stream;
    use crate::pipeline::openai::MockCompletionClient;

    const RAW_TEXT: &str =
        "Alice will finish the onboarding module by Friday. Stream: Onboarding & Training.";

    const META_RESPONSE: &str = r#"{
        "meeting_title": "Sync",
        "meeting_date": "2024-01-05",
        "attendees": ["Alice"],
        "summary": "Module status"
    }"#;

    const ITEMS_RESPONSE: &str = r#"{
        "items": [{
            "WorkItem": "Finish onboarding module",
            "AssignedTo": "Alice",
            "Stream": "Onboarding & Training",
            "DueDate": "Friday"
        }]
    }"#;

    fn processor(responses: &[&str]) -> MinutesProcessor {
        MinutesProcessor::new(Box::new(MockCompletionClient::new(responses)))
    }

    #[test]
    fn assembles_record_from_both_calls() {
        let extraction = processor(&[META_RESPONSE, ITEMS_RESPONSE])
            .process(RAW_TEXT)
            .unwrap();

        let minutes = &extraction.minutes;
        assert_eq!(minutes.raw_text, RAW_TEXT);
        assert_eq!(minutes.meeting_title.as_deref(), Some("Sync"));
        assert_eq!(minutes.meeting_date.as_deref(), Some("2024-01-05"));
        assert_eq!(minutes.attendees, vec!["Alice"]);
        assert_eq!(minutes.summary.as_deref(), Some("Module status"));

        assert_eq!(minutes.items.len(), 1);
        let item = &minutes.items[0];
        assert_eq!(item.work_item.as_deref(), Some("Finish onboarding module"));
        assert_eq!(item.assigned_to.as_deref(), Some("Alice"));
        assert_eq!(item.stream, Some(Stream::Onboarding));
        assert_eq!(item.due_date.as_deref(), Some("Friday"));
        // Everything the response never mentioned stays at its default.
        assert!(item.task_id.is_none());
        assert!(item.stage.is_none());
        assert!(item.key_stakeholders.is_empty());
        assert_eq!(extraction.skipped_items, 0);
    }

    #[test]
    fn invalid_stream_value_nulled_other_fields_kept() {
        let items = r#"{
            "items": [{
                "WorkItem": "Finish onboarding module",
                "AssignedTo": "Alice",
                "Stream": "Engineering",
                "DueDate": "Friday"
            }]
        }"#;
        let extraction = processor(&[META_RESPONSE, items]).process(RAW_TEXT).unwrap();

        let item = &extraction.minutes.items[0];
        assert!(item.stream.is_none());
        assert_eq!(item.work_item.as_deref(), Some("Finish onboarding module"));
        assert_eq!(item.assigned_to.as_deref(), Some("Alice"));
        assert_eq!(item.due_date.as_deref(), Some("Friday"));
    }

    #[test]
    fn empty_input_is_a_precondition_failure() {
        let p = processor(&[META_RESPONSE, ITEMS_RESPONSE]);
        assert!(matches!(p.process(""), Err(ExtractionError::EmptyInput)));
        assert!(matches!(
            p.process("   \n\t "),
            Err(ExtractionError::EmptyInput)
        ));
    }

    #[test]
    fn empty_input_never_reaches_the_provider() {
        struct UnreachableClient;
        impl CompletionClient for UnreachableClient {
            fn complete(
                &self,
                _system: &str,
                _user: &str,
                _json_mode: bool,
            ) -> Result<String, ExtractionError> {
                panic!("precondition failure must not make a completion call");
            }
        }

        let p = MinutesProcessor::new(Box::new(UnreachableClient));
        assert!(matches!(p.process("  "), Err(ExtractionError::EmptyInput)));
    }

    #[test]
    fn metadata_defects_never_fail_the_run() {
        let extraction = processor(&["not json at all", ITEMS_RESPONSE])
            .process(RAW_TEXT)
            .unwrap();

        let minutes = &extraction.minutes;
        assert!(minutes.meeting_title.is_none());
        assert!(minutes.attendees.is_empty());
        assert_eq!(minutes.items.len(), 1);
    }

    #[test]
    fn missing_items_key_yields_zero_items() {
        let extraction = processor(&[META_RESPONSE, r#"{"analysis": "no work found"}"#])
            .process(RAW_TEXT)
            .unwrap();

        assert!(extraction.minutes.items.is_empty());
        assert_eq!(extraction.skipped_items, 0);
        assert_eq!(extraction.minutes.meeting_title.as_deref(), Some("Sync"));
    }

    #[test]
    fn incompatible_candidate_skipped_survivors_keep_order() {
        let items = r#"{
            "items": [
                {"WorkItem": "First", "TaskID": "T-1"},
                {"WorkItem": ["structurally", "incompatible"]},
                {"WorkItem": "Third", "TaskID": "T-3"}
            ]
        }"#;
        let extraction = processor(&[META_RESPONSE, items]).process(RAW_TEXT).unwrap();

        let items = &extraction.minutes.items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].work_item.as_deref(), Some("First"));
        assert_eq!(items[1].work_item.as_deref(), Some("Third"));
        assert_eq!(extraction.skipped_items, 1);
    }

    #[test]
    fn provider_failure_aborts_the_run() {
        struct FailingClient;
        impl CompletionClient for FailingClient {
            fn complete(
                &self,
                _system: &str,
                _user: &str,
                _json_mode: bool,
            ) -> Result<String, ExtractionError> {
                Err(ExtractionError::Provider {
                    status: 500,
                    body: "upstream exploded".into(),
                })
            }
        }

        let p = MinutesProcessor::new(Box::new(FailingClient));
        let result = p.process(RAW_TEXT);
        assert!(matches!(
            result,
            Err(ExtractionError::Provider { status: 500, .. })
        ));
    }

    #[test]
    fn makes_exactly_two_completion_calls() {
        let mock = MockCompletionClient::new(&[META_RESPONSE, ITEMS_RESPONSE]);
        // Peek at the call count through a second handle.
        let mock = std::sync::Arc::new(mock);

        struct Shared(std::sync::Arc<MockCompletionClient>);
        impl CompletionClient for Shared {
            fn complete(
                &self,
                system: &str,
                user: &str,
                json_mode: bool,
            ) -> Result<String, ExtractionError> {
                self.0.complete(system, user, json_mode)
            }
        }

        let p = MinutesProcessor::new(Box::new(Shared(mock.clone())));
        p.process(RAW_TEXT).unwrap();
        assert_eq!(mock.calls(), 2);
    }
}

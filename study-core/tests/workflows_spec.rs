use speculate2::speculate;
use study_core::models::WorkflowId;
use study_core::prompts::templates;
use study_core::workflows::*;

speculate! {
    describe "workflow registry" {
        it "round-trips every id through get_workflow_name" {
            for workflow in get_all_workflows() {
                assert_eq!(get_workflow_name(workflow.id.as_str()), workflow.name);
            }
        }

        it "registers ten workflows" {
            assert_eq!(get_all_workflows().len(), 10);
        }

        it "looks up a workflow by key" {
            let workflow = get_workflow("TEACHING_ASSISTANT_NOTES").expect("known workflow");
            assert_eq!(workflow.id, WorkflowId::TeachingAssistantNotes);
            assert_eq!(workflow.prompt, templates::TEACHING_ASSISTANT_NOTES);
        }

        it "accepts the lowercase form of a key" {
            let workflow = get_workflow("notes_cleanup").expect("known workflow");
            assert_eq!(workflow.name, "Notes Cleanup & Organization");
        }

        it "fails strict lookup with UnknownWorkflow" {
            assert_eq!(
                get_workflow("POETRY").unwrap_err(),
                WorkflowError::UnknownWorkflow("POETRY".to_string())
            );
        }

        it "falls back to text extraction for unknown prompt lookups" {
            assert_eq!(get_prompt("POETRY"), templates::TEXT_EXTRACTION);
            assert_eq!(get_workflow_name("POETRY"), FALLBACK_WORKFLOW_NAME);
        }

        it "serializes ids in key form" {
            let json = serde_json::to_string(&WorkflowId::StudyGuide).unwrap();
            assert_eq!(json, "\"STUDY_GUIDE\"");
        }
    }
}
